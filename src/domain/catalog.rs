// ==========================================
// 商品目录导入系统 - 目录领域模型
// ==========================================
// 依据: Catalog_Import_Spec_v0.2.md - 2. 数据模型
// 职责: 定义导入产物的嵌套领域形态（商品 → 变体）
// 红线: 不含解析逻辑,不含数据访问逻辑
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// OptionGroup - 选项组（变体维度轴）
// ==========================================
// 用途: 商品声明的变体维度（如 "size"/"color"）
// 红线: values 仅在分组收尾阶段填充,此前保持为空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub name: String,        // 选项组名称（来自 optionGroups 列）
    pub values: Vec<String>, // 选项值全集（收尾阶段按首次出现顺序去重汇总）
}

impl OptionGroup {
    /// 以空值列表创建选项组（值在收尾阶段填充）
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }
}

// ==========================================
// CatalogItem - 商品主数据
// ==========================================
// 用途: 行分组的父级实体,由 name 列非空的行创建
// 红线: 创建后选项组数量固定,仅 values 在收尾阶段变更
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,                   // 商品名称（主键列,非空则开启新分组）
    pub slug: String,                   // URL 标识（空值时由 name 派生）
    pub description: String,            // 商品描述（缺失时为空串）
    pub assets: Vec<String>,            // 商品级资源路径列表
    pub option_groups: Vec<OptionGroup>, // 有序选项组（数量在建行时固定）
}

// ==========================================
// ItemVariant - 商品变体
// ==========================================
// 用途: 每个数据行产生一个变体,归属唯一父商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemVariant {
    pub option_values: Vec<String>, // 选项值（按位置对齐父商品的选项组）
    pub sku: String,                // 库存单位编码
    pub price: f64,                 // 价格（空/非数值 → NaN 哨兵,不报错,下游校验负责拒绝）
    pub tax_category: String,       // 税类
    pub assets: Vec<String>,        // 变体级资源路径列表
}

// ==========================================
// ItemWithVariants - 导入输出原子单元
// ==========================================
// 不变量: variants 非空,顺序 = 输入行顺序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemWithVariants {
    pub item: CatalogItem,
    pub variants: Vec<ItemVariant>,
}

// ==========================================
// ParseOutcome - 双通道解析结果
// ==========================================
// 用途: 同一次遍历的两路独立输出（成功记录 + 错误文本）
// 红线: 行级错误不走异常通道;仅缺列错误会清空 results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseOutcome<T> {
    pub results: Vec<T>,     // 成功解析的记录（保持输入顺序）
    pub errors: Vec<String>, // 人类可读错误文本（按行遭遇顺序）
}

impl<T> ParseOutcome<T> {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// 构造仅含单条错误的失败结果（用于缺列短路）
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            errors: vec![error.into()],
        }
    }
}

impl<T> Default for ParseOutcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseOutcome<ItemWithVariants> {
    /// 生成汇总统计（用于日志）
    pub fn summary(&self) -> ImportSummary {
        ImportSummary {
            items: self.results.len(),
            variants: self.results.iter().map(|r| r.variants.len()).sum(),
            errors: self.errors.len(),
        }
    }
}

// ==========================================
// ImportSummary - 导入汇总统计
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub items: usize,    // 商品数
    pub variants: usize, // 变体总数
    pub errors: usize,   // 错误条数
}
