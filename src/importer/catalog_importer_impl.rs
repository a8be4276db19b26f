// ==========================================
// 商品目录导入系统 - 目录导入器实现
// ==========================================
// 依据: Catalog_Import_Spec_v0.2.md - 4. 导入管道
// ==========================================
// 职责: 整合导入流程,从数据源到分组结果
// 流程: 数据源适配 → 表头校验 → 行分组/字段解析 → 分组收尾
// ==========================================

use crate::domain::{ItemWithVariants, ParseOutcome};
use crate::importer::catalog_importer_trait::CatalogImporter;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::grouper::GroupAccumulator;
use crate::importer::options::ImportOptions;
use crate::importer::schema;
use crate::importer::slug::{DefaultSlugNormalizer, SlugNormalizer};
use crate::importer::source::{self, ImportSource};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

// ==========================================
// CatalogImporterImpl - 目录导入器实现
// ==========================================
pub struct CatalogImporterImpl {
    // slug 派生协作方（仅在 slug 列为空时调用）
    normalizer: Box<dyn SlugNormalizer>,

    // 导入选项
    options: ImportOptions,
}

impl CatalogImporterImpl {
    /// 创建使用默认 slug 规则与默认选项的导入器
    pub fn new() -> Self {
        Self::with_normalizer(Box::new(DefaultSlugNormalizer))
    }

    /// 注入自定义 slug 标准化实现
    pub fn with_normalizer(normalizer: Box<dyn SlugNormalizer>) -> Self {
        Self {
            normalizer,
            options: ImportOptions::default(),
        }
    }

    /// 覆盖导入选项
    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }
}

impl Default for CatalogImporterImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CatalogImporter for CatalogImporterImpl {
    #[instrument(skip(self, source))]
    async fn parse_items(
        &self,
        source: ImportSource,
    ) -> ImportResult<ParseOutcome<ItemWithVariants>> {
        // === 步骤 1: 数据源适配 ===
        debug!("步骤 1: 读取数据源");
        let rows = source::collect_rows(source).await?;
        let Some((header, data_rows)) = rows.split_first() else {
            return Err(ImportError::EmptyInput);
        };
        info!(total_rows = rows.len(), "数据源读取完成");

        // === 步骤 2: 表头校验 ===
        debug!("步骤 2: 表头校验");
        if let Err(message) = schema::validate_header(header) {
            // 缺列为致命错误: 空结果 + 单条错误,不处理任何数据行
            warn!(error = %message, "表头缺少必需列,导入短路");
            return Ok(ParseOutcome::failed(message));
        }

        // === 步骤 3: 行分组 + 字段解析 ===
        debug!("步骤 3: 行分组与字段解析");
        let mut accumulator =
            GroupAccumulator::new(header, self.normalizer.as_ref(), &self.options);
        for row in data_rows {
            accumulator.push_row(row);
        }

        // === 步骤 4: 分组收尾 ===
        let outcome = accumulator.finish();
        let summary = outcome.summary();
        info!(
            items = summary.items,
            variants = summary.variants,
            errors = summary.errors,
            "导入解析完成"
        );

        Ok(outcome)
    }

    async fn parse_items_from_path<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ParseOutcome<ItemWithVariants>> {
        let path = file_path.as_ref();

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let text = tokio::fs::read_to_string(path).await?;
        self.parse_items(ImportSource::from_text(text)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_input_is_hard_error() {
        let importer = CatalogImporterImpl::new();
        let result = importer.parse_items(ImportSource::from_text("")).await;

        assert!(matches!(result, Err(ImportError::EmptyInput)));
    }

    #[tokio::test]
    async fn test_missing_columns_short_circuit() {
        let importer = CatalogImporterImpl::new();
        let outcome = importer
            .parse_items(ImportSource::from_text(
                "name,slug\nShirt,shirt\nHat,hat",
            ))
            .await
            .unwrap();

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(
            outcome.errors[0],
            "The import file is missing the following columns: \
             \"description\", \"assets\", \"optionGroups\", \"optionValues\", \
             \"sku\", \"price\", \"taxCategory\", \"variantAssets\""
        );
    }

    #[tokio::test]
    async fn test_parse_from_missing_path() {
        let importer = CatalogImporterImpl::new();
        let result = importer
            .parse_items_from_path("不存在的文件.csv")
            .await;

        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[tokio::test]
    async fn test_parse_from_unsupported_extension() {
        let importer = CatalogImporterImpl::new();
        let temp = tempfile::Builder::new()
            .suffix(".xlsx")
            .tempfile()
            .unwrap();

        let result = importer.parse_items_from_path(temp.path()).await;

        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
