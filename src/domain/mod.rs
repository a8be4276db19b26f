// ==========================================
// 商品目录导入系统 - 领域模型层
// ==========================================
// 依据: Catalog_Import_Spec_v0.2.md - 2. 数据模型
// ==========================================
// 职责: 定义领域实体与导入结果类型
// 红线: 不含解析逻辑,不含数据访问逻辑
// ==========================================

pub mod catalog;

// 重导出核心类型
pub use catalog::{
    CatalogItem, ImportSummary, ItemVariant, ItemWithVariants, OptionGroup, ParseOutcome,
};
