use serde::{Deserialize, Serialize};

use super::super::value_objects::{DisplaySize, Expression, SPECIAL_PREFIX};

/// 表情图片资源目录
pub const EXPRESSION_ASSET_DIR: &str = "/expressions";

/// 表情展示视图
///
/// 宿主据此选择图片并绘制标签，不涉及实际渲染
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionView {
    pub expression: Expression,
    pub image_path: String,
    pub alt_text: String,
    pub caption: String,
    pub size: DisplaySize,
}

impl ExpressionView {
    pub fn new(expression: Expression, character_name: &str, size: DisplaySize) -> Self {
        Self {
            expression,
            image_path: format!("{}/{}.png", EXPRESSION_ASSET_DIR, expression.as_str()),
            alt_text: format!("{} - {}", character_name, expression.as_str()),
            caption: caption_for(expression),
            size,
        }
    }
}

/// 去掉特殊前缀，下划线换成空格，每个单词首字母大写
fn caption_for(expression: Expression) -> String {
    let name = expression.as_str();
    let name = name.strip_prefix(SPECIAL_PREFIX).unwrap_or(name);

    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_for_standard_expression() {
        let view = ExpressionView::new(Expression::Joy, "Nyuki", DisplaySize::Medium);
        assert_eq!(view.image_path, "/expressions/joy.png");
        assert_eq!(view.alt_text, "Nyuki - joy");
        assert_eq!(view.caption, "Joy");
        assert_eq!(view.size, DisplaySize::Medium);
    }

    #[test]
    fn test_view_for_special_expression() {
        let view = ExpressionView::new(Expression::Tsundere, "Nyuki", DisplaySize::Full);
        assert_eq!(view.image_path, "/expressions/special_tsundere.png");
        assert_eq!(view.alt_text, "Nyuki - special_tsundere");
        assert_eq!(view.caption, "Tsundere");
    }
}
