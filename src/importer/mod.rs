// ==========================================
// 商品目录导入系统 - 导入层
// ==========================================
// 依据: Catalog_Import_Spec_v0.2.md - 4. 导入管道
// ==========================================
// 职责: 扁平表格数据 → 商品/变体嵌套模型
// 支持: 内存文本, 字节流, CSV 文件
// ==========================================

// 模块声明
pub mod catalog_importer_impl;
pub mod catalog_importer_trait;
pub mod error;
pub mod field_parser;
pub mod finalizer;
pub mod grouper;
pub mod options;
pub mod schema;
pub mod slug;
pub mod source;

// 重导出核心类型
pub use catalog_importer_impl::CatalogImporterImpl;
pub use catalog_importer_trait::CatalogImporter;
pub use error::{ImportError, ImportResult};
pub use field_parser::{FieldParser, RawRecord};
pub use grouper::GroupAccumulator;
pub use options::ImportOptions;
pub use schema::REQUIRED_COLUMNS;
pub use slug::{DefaultSlugNormalizer, SlugNormalizer};
pub use source::{ByteStream, ImportSource, RawRow};
