// ==========================================
// 商品目录导入系统 - 表头校验器
// ==========================================
// 依据: Catalog_Import_Spec_v0.2.md - 4.2 必需列校验
// ==========================================
// 职责: 校验表头是否覆盖全部必需列
// 红线: 缺列为致命错误,整体短路（空结果 + 单条错误）;
//       错误文本与缺列顺序对外承诺,不得改动
// ==========================================

/// 必需列全集（规范顺序,缺列错误按此顺序罗列）
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "name",
    "slug",
    "description",
    "assets",
    "optionGroups",
    "optionValues",
    "sku",
    "price",
    "taxCategory",
    "variantAssets",
];

/// 校验表头行
///
/// # 参数
/// - header: 表头行（单元格已去空白）
///
/// # 返回
/// - Ok(()): 必需列齐全（列顺序无关,多余列容忍）
/// - Err(String): 缺列错误文本,格式:
///   `The import file is missing the following columns: "a", "b"`
pub fn validate_header(header: &[String]) -> Result<(), String> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !header.iter().any(|column| column == *required))
        .copied()
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    let listed = missing
        .iter()
        .map(|column| format!("\"{}\"", column))
        .collect::<Vec<_>>()
        .join(", ");

    Err(format!(
        "The import file is missing the following columns: {}",
        listed
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_of(columns: &[&str]) -> Vec<String> {
        columns.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_full_header_passes() {
        let header = header_of(&REQUIRED_COLUMNS);
        assert!(validate_header(&header).is_ok());
    }

    #[test]
    fn test_column_order_is_irrelevant() {
        let mut columns: Vec<&str> = REQUIRED_COLUMNS.to_vec();
        columns.reverse();
        assert!(validate_header(&header_of(&columns)).is_ok());
    }

    #[test]
    fn test_extra_columns_tolerated() {
        let mut columns: Vec<&str> = REQUIRED_COLUMNS.to_vec();
        columns.push("自定义列");
        columns.push("facets");
        assert!(validate_header(&header_of(&columns)).is_ok());
    }

    #[test]
    fn test_missing_columns_listed_in_canonical_order() {
        // 表头缺 slug 与 price,错误按规范顺序罗列
        let columns: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| **c != "slug" && **c != "price")
            .copied()
            .collect();

        let err = validate_header(&header_of(&columns)).unwrap_err();
        assert_eq!(
            err,
            "The import file is missing the following columns: \"slug\", \"price\""
        );
    }

    #[test]
    fn test_empty_header_lists_all_columns() {
        let err = validate_header(&[]).unwrap_err();
        assert!(err.starts_with("The import file is missing the following columns: \"name\""));
        assert!(err.ends_with("\"variantAssets\""));
    }
}
