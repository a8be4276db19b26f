// ==========================================
// 商品目录导入系统 - 导入选项
// ==========================================
// 职责: 集中导入管道的可配置项（进程内配置,无持久化层）
// ==========================================

/// 导入选项
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// 列表字段内部分隔符（assets / optionGroups / optionValues / variantAssets）
    pub list_separator: char,
    /// slug 派生时的词间分隔符
    pub slug_separator: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            list_separator: ',',
            slug_separator: "-".to_string(),
        }
    }
}
