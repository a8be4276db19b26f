// ==========================================
// 商品目录导入系统 - 数据源适配器
// ==========================================
// 依据: Catalog_Import_Spec_v0.2.md - 4.1 数据源适配
// 支持: 内存文本 / 增量字节流
// ==========================================
// 职责: 统一两类来源为有序原始行序列（RawRow）
// 红线: 本层不拒绝畸形行（列数不齐由分组层检出）;
//       流错误整体短路,不进入错误列表
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::{ReaderBuilder, Trim};
use futures::{Stream, StreamExt};
use std::pin::Pin;

/// 原始行: 与表头按位置对齐的单元格序列（已去除首尾空白）
pub type RawRow = Vec<String>;

/// 增量字节流类型（块内字节顺序 = 到达顺序）
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>, std::io::Error>> + Send>>;

// ==========================================
// ImportSource - 导入数据源
// ==========================================
// 用途: 对上游屏蔽"整块文本"与"逐块到达"的差异,
//       分组/解析逻辑只写一次
pub enum ImportSource {
    /// 完整内存文本
    Text(String),
    /// 增量字节流（缓冲至流结束后再解码）
    Stream(ByteStream),
}

impl ImportSource {
    /// 从内存文本构造数据源
    pub fn from_text(text: impl Into<String>) -> Self {
        ImportSource::Text(text.into())
    }

    /// 从字节流构造数据源
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Vec<u8>, std::io::Error>> + Send + 'static,
    {
        ImportSource::Stream(Box::pin(stream))
    }
}

/// 消费数据源,产出全部原始行（首行即表头行）
///
/// # 返回
/// - Ok(Vec<RawRow>): 有序行列表
/// - Err: 流读取失败 / UTF-8 解码失败 / CSV 机制性失败
pub async fn collect_rows(source: ImportSource) -> ImportResult<Vec<RawRow>> {
    let text = match source {
        ImportSource::Text(text) => text,
        ImportSource::Stream(mut stream) => {
            // 缓冲所有块直至流结束,保持到达顺序
            let mut buffer = Vec::new();
            while let Some(chunk) = stream.next().await {
                let chunk =
                    chunk.map_err(|e| ImportError::StreamReadError(e.to_string()))?;
                buffer.extend_from_slice(&chunk);
            }
            String::from_utf8(buffer)?
        }
    };

    decode_rows(&text)
}

/// 解码文本为原始行序列
///
/// # 说明
/// - flexible: 容忍列数不齐的行（检出交给分组层）
/// - trim: 单元格首尾空白统一去除
fn decode_rows(text: &str) -> ImportResult<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(rows)
}
