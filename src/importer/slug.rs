// ==========================================
// 商品目录导入系统 - slug 标准化
// ==========================================
// 职责: name → URL 安全 slug 的协作接口（仅在 slug 列为空时调用）
// ==========================================

// ==========================================
// SlugNormalizer Trait
// ==========================================
// 用途: slug 派生接口（纯函数协作方,可由调用方注入自定义实现）
// 实现者: DefaultSlugNormalizer
pub trait SlugNormalizer: Send + Sync {
    /// 将任意文本标准化为 URL 安全 slug
    ///
    /// # 参数
    /// - input: 原始文本（如商品名称）
    /// - separator: 词间分隔符（默认 "-"）
    ///
    /// # 返回
    /// - 标准化后的 slug
    fn normalize(&self, input: &str, separator: &str) -> String;
}

// ==========================================
// DefaultSlugNormalizer 实现
// ==========================================
// 规则: 小写;字母数字连续段保留,其余字符折叠为单个分隔符;
//       首尾不产生分隔符
pub struct DefaultSlugNormalizer;

impl SlugNormalizer for DefaultSlugNormalizer {
    fn normalize(&self, input: &str, separator: &str) -> String {
        let mut slug = String::new();
        let mut gap_pending = false;

        for ch in input.trim().chars() {
            if ch.is_alphanumeric() {
                if gap_pending && !slug.is_empty() {
                    slug.push_str(separator);
                }
                gap_pending = false;
                for lower in ch.to_lowercase() {
                    slug.push(lower);
                }
            } else {
                gap_pending = true;
            }
        }

        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_name() {
        let normalizer = DefaultSlugNormalizer;
        assert_eq!(normalizer.normalize("Bonsai Tree", "-"), "bonsai-tree");
    }

    #[test]
    fn test_punctuation_collapsed() {
        let normalizer = DefaultSlugNormalizer;
        assert_eq!(
            normalizer.normalize("  Gaming PC -- i7 / 240GB!  ", "-"),
            "gaming-pc-i7-240gb"
        );
    }

    #[test]
    fn test_custom_separator() {
        let normalizer = DefaultSlugNormalizer;
        assert_eq!(normalizer.normalize("Bonsai Tree", "_"), "bonsai_tree");
    }

    #[test]
    fn test_no_leading_or_trailing_separator() {
        let normalizer = DefaultSlugNormalizer;
        assert_eq!(normalizer.normalize("!Shirt!", "-"), "shirt");
    }
}
