// ==========================================
// 商品目录导入系统 - 字段解析器实现
// ==========================================
// 依据: Catalog_Import_Spec_v0.2.md - 4.3 字段解析规则
// 职责: 原始行记录 → 类型化字段（商品级 + 变体级）
// ==========================================

use crate::domain::{CatalogItem, ItemVariant, OptionGroup};
use crate::importer::options::ImportOptions;
use crate::importer::slug::SlugNormalizer;
use std::collections::HashMap;

/// 原始行记录: 列名 → 单元格值（由表头与数据行按位置拉链得到）
pub type RawRecord = HashMap<String, String>;

/// 将数据行与表头拉链为原始行记录
///
/// # 说明
/// - 重复列名时后写覆盖（字段解析只按名取值,可接受）
pub fn to_raw_record(header: &[String], row: &[String]) -> RawRecord {
    header
        .iter()
        .zip(row.iter())
        .map(|(column, cell)| (column.clone(), cell.clone()))
        .collect()
}

pub struct FieldParser;

impl FieldParser {
    /// 从原始行记录解析商品主数据
    ///
    /// # 规则
    /// - slug 为空时经 SlugNormalizer 由 name 派生
    /// - optionGroups 列表中的每个名称建一个空值选项组
    pub fn parse_item(
        &self,
        record: &RawRecord,
        normalizer: &dyn SlugNormalizer,
        options: &ImportOptions,
    ) -> CatalogItem {
        let name = self.get_trimmed(record, "name");
        let mut slug = self.get_trimmed(record, "slug");
        if slug.is_empty() {
            slug = normalizer.normalize(&name, &options.slug_separator);
        }

        CatalogItem {
            name,
            slug,
            description: self.get_trimmed(record, "description"),
            assets: self.parse_string_list(record.get("assets"), options.list_separator),
            option_groups: self
                .parse_string_list(record.get("optionGroups"), options.list_separator)
                .into_iter()
                .map(OptionGroup::new)
                .collect(),
        }
    }

    /// 从原始行记录解析变体
    pub fn parse_variant(&self, record: &RawRecord, options: &ImportOptions) -> ItemVariant {
        ItemVariant {
            option_values: self
                .parse_string_list(record.get("optionValues"), options.list_separator),
            sku: self.get_trimmed(record, "sku"),
            price: self.parse_price(record.get("price")),
            tax_category: self.get_trimmed(record, "taxCategory"),
            assets: self.parse_string_list(record.get("variantAssets"), options.list_separator),
        }
    }

    /// 提取字段并去除首尾空白（缺失 → 空串）
    fn get_trimmed(&self, record: &RawRecord, key: &str) -> String {
        record
            .get(key)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }

    /// 解析列表字段
    ///
    /// # 规则
    /// - 整体去空白后按分隔符切分,逐段去空白,丢弃空段,保持顺序
    /// - 缺失/空字段 → 空列表
    pub fn parse_string_list(&self, raw: Option<&String>, separator: char) -> Vec<String> {
        match raw {
            None => Vec::new(),
            Some(value) => value
                .trim()
                .split(separator)
                .map(|piece| piece.trim())
                .filter(|piece| !piece.is_empty())
                .map(|piece| piece.to_string())
                .collect(),
        }
    }

    /// 解析价格
    ///
    /// # 规则
    /// - 空/非数值 → NaN 哨兵（不报错,下游校验负责拒绝）
    fn parse_price(&self, raw: Option<&String>) -> f64 {
        raw.map(|value| value.trim())
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::slug::DefaultSlugNormalizer;

    fn record_of(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_to_raw_record_positional_zip() {
        let header = vec!["name".to_string(), "sku".to_string()];
        let row = vec!["Shirt".to_string(), "A1".to_string()];
        let record = to_raw_record(&header, &row);

        assert_eq!(record.get("name"), Some(&"Shirt".to_string()));
        assert_eq!(record.get("sku"), Some(&"A1".to_string()));
    }

    #[test]
    fn test_to_raw_record_duplicate_header_last_writer_wins() {
        let header = vec!["name".to_string(), "name".to_string()];
        let row = vec!["旧值".to_string(), "新值".to_string()];
        let record = to_raw_record(&header, &row);

        assert_eq!(record.get("name"), Some(&"新值".to_string()));
    }

    #[test]
    fn test_parse_item_basic() {
        let record = record_of(&[
            ("name", "Shirt"),
            ("slug", "shirt"),
            ("description", "一件衬衫"),
            ("assets", "a.jpg, b.jpg"),
            ("optionGroups", "size,color"),
        ]);

        let item = FieldParser.parse_item(
            &record,
            &DefaultSlugNormalizer,
            &ImportOptions::default(),
        );

        assert_eq!(item.name, "Shirt");
        assert_eq!(item.slug, "shirt");
        assert_eq!(item.description, "一件衬衫");
        assert_eq!(item.assets, vec!["a.jpg", "b.jpg"]);
        assert_eq!(item.option_groups.len(), 2);
        assert_eq!(item.option_groups[0].name, "size");
        assert!(item.option_groups[0].values.is_empty());
    }

    #[test]
    fn test_parse_item_slug_derived_when_blank() {
        let record = record_of(&[("name", "Bonsai Tree"), ("slug", "  ")]);
        let item = FieldParser.parse_item(
            &record,
            &DefaultSlugNormalizer,
            &ImportOptions::default(),
        );

        assert_eq!(item.slug, "bonsai-tree");
    }

    #[test]
    fn test_parse_item_missing_description_is_empty() {
        let record = record_of(&[("name", "Shirt")]);
        let item = FieldParser.parse_item(
            &record,
            &DefaultSlugNormalizer,
            &ImportOptions::default(),
        );

        assert_eq!(item.description, "");
        assert!(item.option_groups.is_empty());
    }

    #[test]
    fn test_parse_variant_basic() {
        let record = record_of(&[
            ("optionValues", "S, Red"),
            ("sku", " A1 "),
            ("price", "10.5"),
            ("taxCategory", "standard"),
            ("variantAssets", "v1.jpg"),
        ]);

        let variant = FieldParser.parse_variant(&record, &ImportOptions::default());

        assert_eq!(variant.option_values, vec!["S", "Red"]);
        assert_eq!(variant.sku, "A1");
        assert_eq!(variant.price, 10.5);
        assert_eq!(variant.tax_category, "standard");
        assert_eq!(variant.assets, vec!["v1.jpg"]);
    }

    #[test]
    fn test_parse_variant_price_nan_sentinel() {
        let empty = record_of(&[("price", "")]);
        let junk = record_of(&[("price", "十块钱")]);
        let missing = record_of(&[]);

        let parser = FieldParser;
        let options = ImportOptions::default();
        assert!(parser.parse_variant(&empty, &options).price.is_nan());
        assert!(parser.parse_variant(&junk, &options).price.is_nan());
        assert!(parser.parse_variant(&missing, &options).price.is_nan());
    }

    #[test]
    fn test_parse_string_list_rules() {
        let parser = FieldParser;
        let raw = "  a , , b ,c  ".to_string();
        assert_eq!(parser.parse_string_list(Some(&raw), ','), vec!["a", "b", "c"]);

        let blank = "   ".to_string();
        assert!(parser.parse_string_list(Some(&blank), ',').is_empty());
        assert!(parser.parse_string_list(None, ',').is_empty());
    }
}
