// ==========================================
// 商品目录导入系统 - 分组收尾器
// ==========================================
// 依据: Catalog_Import_Spec_v0.2.md - 4.4 选项值汇总
// 职责: 商品关组时汇总各变体的选项值到选项组
// ==========================================
// 红线: 每个商品仅执行一次,时机为关组
//       （后续新商品行到来或输入结束）
// ==========================================

use crate::domain::ItemWithVariants;

/// 填充商品各选项组的值全集
///
/// # 规则
/// - 第 i 个选项组收集每个变体 option_values[i]
/// - 变体值列表不足 i+1 位时视为缺位（不在此处报错,
///   数量不匹配已在解析阶段记入错误列表）
/// - 按首次出现顺序去重
pub fn populate_option_group_values(grouped: &mut ItemWithVariants) {
    for (position, group) in grouped.item.option_groups.iter_mut().enumerate() {
        let mut values: Vec<String> = Vec::new();
        for variant in &grouped.variants {
            if let Some(value) = variant.option_values.get(position) {
                if !values.contains(value) {
                    values.push(value.clone());
                }
            }
        }
        group.values = values;
    }
}
