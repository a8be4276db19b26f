// ==========================================
// 商品目录导入系统 - 目录导入 Trait
// ==========================================
// 依据: Catalog_Import_Spec_v0.2.md - 6. 对外接口
// 职责: 定义目录导入接口（不包含实现）
// ==========================================

use crate::domain::{ItemWithVariants, ParseOutcome};
use crate::importer::error::ImportResult;
use crate::importer::source::ImportSource;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// CatalogImporter Trait
// ==========================================
// 用途: 目录导入主接口
// 实现者: CatalogImporterImpl
#[async_trait]
pub trait CatalogImporter: Send + Sync {
    /// 解析导入源为商品 + 变体分组结果
    ///
    /// # 参数
    /// - source: 导入源（内存文本或增量字节流）
    ///
    /// # 返回
    /// - Ok(ParseOutcome): 双通道结果（成功分组 + 行级错误文本）
    /// - Err: 流读取/解码等导入源整体失效
    ///
    /// # 导入流程（4个阶段）
    /// 1. 数据源适配（文本/流 → 有序原始行）
    /// 2. 表头校验（缺列短路）
    /// 3. 行分组 + 字段解析（逐行交替,错误累积）
    /// 4. 分组收尾（选项值汇总去重）
    async fn parse_items(
        &self,
        source: ImportSource,
    ) -> ImportResult<ParseOutcome<ItemWithVariants>>;

    /// 从 CSV 文件解析（便捷入口）
    ///
    /// # 参数
    /// - file_path: CSV 文件路径（.csv）
    ///
    /// # 返回
    /// - Ok(ParseOutcome): 双通道结果
    /// - Err: 文件不存在/格式不支持/读取失败
    async fn parse_items_from_path<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ParseOutcome<ItemWithVariants>>;
}
