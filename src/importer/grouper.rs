// ==========================================
// 商品目录导入系统 - 行分组器
// ==========================================
// 依据: Catalog_Import_Spec_v0.2.md - 4.3 行分组规则
// 职责: 扁平数据行 → 商品/变体嵌套分组
// ==========================================
// 规则: name 非空开启新商品分组,name 为空的行作为
//       当前商品的续行变体;错误累积,不中断遍历
// 红线: 错误文本与行号口径（表头为第 1 行）对外承诺,不得改动
// ==========================================

use crate::domain::{ItemWithVariants, ParseOutcome};
use crate::importer::field_parser::{to_raw_record, FieldParser};
use crate::importer::finalizer::populate_option_group_values;
use crate::importer::options::ImportOptions;
use crate::importer::slug::SlugNormalizer;
use crate::importer::source::RawRow;
use tracing::warn;

// ==========================================
// GroupAccumulator - 行分组累加器
// ==========================================
// 用途: 显式折叠状态（当前开放商品 + 双通道输出 + 行号计数）,
//       不依赖环境可变状态,可独立测试
pub struct GroupAccumulator<'a> {
    header: &'a [String],
    normalizer: &'a dyn SlugNormalizer,
    options: &'a ImportOptions,
    parser: FieldParser,

    // 当前开放的商品分组（续行变体归属于它）
    open: Option<ItemWithVariants>,
    outcome: ParseOutcome<ItemWithVariants>,
    // 当前行号（表头为第 1 行,每个数据行递增,仅用于错误文本）
    line: usize,
}

impl<'a> GroupAccumulator<'a> {
    pub fn new(
        header: &'a [String],
        normalizer: &'a dyn SlugNormalizer,
        options: &'a ImportOptions,
    ) -> Self {
        Self {
            header,
            normalizer,
            options,
            parser: FieldParser,
            open: None,
            outcome: ParseOutcome::new(),
            line: 1,
        }
    }

    /// 处理一个数据行
    ///
    /// # 流程
    /// 1. 列数检查（不齐 → 记错误并整行跳过）
    /// 2. 拉链为原始行记录
    /// 3. 分组判定（name 非空开新组,否则续行）
    /// 4. 选项值/选项组数量检查（不匹配仅记错误,变体照常保留）
    pub fn push_row(&mut self, row: &RawRow) {
        self.line += 1;

        if row.len() != self.header.len() {
            self.outcome.errors.push(format!(
                "Invalid Record Length: header length is {}, got {} on line {}",
                self.header.len(),
                row.len(),
                self.line
            ));
            return;
        }

        let record = to_raw_record(self.header, row);
        let name = record
            .get("name")
            .map(|value| value.trim())
            .unwrap_or_default();

        let variant = self.parser.parse_variant(&record, self.options);
        let option_value_count = variant.option_values.len();

        if !name.is_empty() {
            self.close_open();
            let item = self
                .parser
                .parse_item(&record, self.normalizer, self.options);
            self.open = Some(ItemWithVariants {
                item,
                variants: vec![variant],
            });
        } else if let Some(open) = &mut self.open {
            open.variants.push(variant);
        } else {
            // 没有开放商品的续行变体无处归属,静默丢弃（仅告警）
            warn!(line = self.line, "续行出现在任何商品行之前,变体已丢弃");
        }

        if let Some(open) = &self.open {
            if option_value_count != open.item.option_groups.len() {
                self.outcome.errors.push(format!(
                    "The number of optionValues must match the number of optionGroups on line {}",
                    self.line
                ));
            }
        }
    }

    /// 消费累加器,关闭最后一个开放分组并产出双通道结果
    pub fn finish(mut self) -> ParseOutcome<ItemWithVariants> {
        self.close_open();
        self.outcome
    }

    /// 关闭当前开放分组: 汇总选项值后移入结果列表
    fn close_open(&mut self) {
        if let Some(mut grouped) = self.open.take() {
            populate_option_group_values(&mut grouped);
            self.outcome.results.push(grouped);
        }
    }
}
