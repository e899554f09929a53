use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 特殊表情名称前缀
///
/// 特殊家族表情的规范名称统一带此前缀，前缀约定只在本文件中处理
pub const SPECIAL_PREFIX: &str = "special_";

/// 表情家族
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionFamily {
    /// 标准情感
    Standard,
    /// 特殊风格（语气、人设类）
    Special,
}

/// 表情类型
///
/// 值对象：角色当前显示的表情，集合封闭，`Neutral` 为默认与兜底值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    Admiration,
    Amusement,
    Anger,
    Annoyance,
    Approval,
    Caring,
    Confusion,
    Curiosity,
    Desire,
    Disappointment,
    Disapproval,
    Disgust,
    Embarrassment,
    Excitement,
    Fear,
    Gratitude,
    Grief,
    Joy,
    Love,
    Nervousness,
    Optimism,
    Pride,
    Realization,
    Relief,
    Remorse,
    Sadness,
    Surprise,
    #[default]
    Neutral,
    #[serde(rename = "special_ahegao")]
    Ahegao,
    #[serde(rename = "special_arrogant")]
    Arrogant,
    #[serde(rename = "special_flirty")]
    Flirty,
    #[serde(rename = "special_sexy")]
    Sexy,
    #[serde(rename = "special_tsundere")]
    Tsundere,
    #[serde(rename = "special_yandere")]
    Yandere,
}

impl Expression {
    /// 获取所有可用的表情
    pub fn all() -> &'static [Expression] {
        &[
            Expression::Admiration,
            Expression::Amusement,
            Expression::Anger,
            Expression::Annoyance,
            Expression::Approval,
            Expression::Caring,
            Expression::Confusion,
            Expression::Curiosity,
            Expression::Desire,
            Expression::Disappointment,
            Expression::Disapproval,
            Expression::Disgust,
            Expression::Embarrassment,
            Expression::Excitement,
            Expression::Fear,
            Expression::Gratitude,
            Expression::Grief,
            Expression::Joy,
            Expression::Love,
            Expression::Nervousness,
            Expression::Optimism,
            Expression::Pride,
            Expression::Realization,
            Expression::Relief,
            Expression::Remorse,
            Expression::Sadness,
            Expression::Surprise,
            Expression::Neutral,
            Expression::Ahegao,
            Expression::Arrogant,
            Expression::Flirty,
            Expression::Sexy,
            Expression::Tsundere,
            Expression::Yandere,
        ]
    }

    /// 所属家族
    pub fn family(&self) -> ExpressionFamily {
        match self {
            Expression::Ahegao
            | Expression::Arrogant
            | Expression::Flirty
            | Expression::Sexy
            | Expression::Tsundere
            | Expression::Yandere => ExpressionFamily::Special,
            _ => ExpressionFamily::Standard,
        }
    }

    pub fn is_special(&self) -> bool {
        self.family() == ExpressionFamily::Special
    }

    /// 去掉家族前缀后的基础名称
    pub fn base_name(&self) -> &'static str {
        match self {
            Expression::Admiration => "admiration",
            Expression::Amusement => "amusement",
            Expression::Anger => "anger",
            Expression::Annoyance => "annoyance",
            Expression::Approval => "approval",
            Expression::Caring => "caring",
            Expression::Confusion => "confusion",
            Expression::Curiosity => "curiosity",
            Expression::Desire => "desire",
            Expression::Disappointment => "disappointment",
            Expression::Disapproval => "disapproval",
            Expression::Disgust => "disgust",
            Expression::Embarrassment => "embarrassment",
            Expression::Excitement => "excitement",
            Expression::Fear => "fear",
            Expression::Gratitude => "gratitude",
            Expression::Grief => "grief",
            Expression::Joy => "joy",
            Expression::Love => "love",
            Expression::Nervousness => "nervousness",
            Expression::Optimism => "optimism",
            Expression::Pride => "pride",
            Expression::Realization => "realization",
            Expression::Relief => "relief",
            Expression::Remorse => "remorse",
            Expression::Sadness => "sadness",
            Expression::Surprise => "surprise",
            Expression::Neutral => "neutral",
            Expression::Ahegao => "ahegao",
            Expression::Arrogant => "arrogant",
            Expression::Flirty => "flirty",
            Expression::Sexy => "sexy",
            Expression::Tsundere => "tsundere",
            Expression::Yandere => "yandere",
        }
    }

    /// 规范名称（序列化、资源文件名均使用此名称）
    pub fn as_str(&self) -> &'static str {
        match self {
            Expression::Ahegao => "special_ahegao",
            Expression::Arrogant => "special_arrogant",
            Expression::Flirty => "special_flirty",
            Expression::Sexy => "special_sexy",
            Expression::Tsundere => "special_tsundere",
            Expression::Yandere => "special_yandere",
            other => other.base_name(),
        }
    }

    /// 按规范名称精确查找（区分大小写）
    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|e| e.as_str() == name)
    }

    /// 解析显式标签 `[word]` 中的单词
    ///
    /// 先按规范名称匹配，再尝试补上特殊前缀；都不匹配返回 None
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.to_lowercase();
        Self::from_canonical(&tag)
            .or_else(|| Self::from_canonical(&format!("{}{}", SPECIAL_PREFIX, tag)))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Expression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(&s.to_lowercase()).ok_or_else(|| format!("Unknown expression: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_set_is_closed() {
        let all = Expression::all();
        assert_eq!(all.len(), 34);
        assert_eq!(all.iter().filter(|e| e.is_special()).count(), 6);
        assert!(!Expression::Neutral.is_special());
    }

    #[test]
    fn test_special_names_carry_prefix() {
        for expression in Expression::all() {
            assert_eq!(
                expression.as_str().starts_with(SPECIAL_PREFIX),
                expression.is_special(),
                "{}",
                expression
            );
        }
    }

    #[test]
    fn test_serde_name_matches_display() {
        for expression in Expression::all() {
            let json = serde_json::to_string(expression).unwrap();
            assert_eq!(json, format!("\"{}\"", expression));

            let back: Expression = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *expression);
        }
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Expression::from_tag("joy"), Some(Expression::Joy));
        assert_eq!(Expression::from_tag("JOY"), Some(Expression::Joy));
        assert_eq!(Expression::from_tag("tsundere"), Some(Expression::Tsundere));
        assert_eq!(
            Expression::from_tag("special_tsundere"),
            Some(Expression::Tsundere)
        );
        assert_eq!(Expression::from_tag("special_joy"), None);
        assert_eq!(Expression::from_tag("bogus"), None);
    }

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(Expression::default(), Expression::Neutral);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Neutral".parse::<Expression>(), Ok(Expression::Neutral));
        assert_eq!(
            "special_yandere".parse::<Expression>(),
            Ok(Expression::Yandere)
        );
        assert!("yandere".parse::<Expression>().is_err());
    }

    #[test]
    fn test_unknown_label_fails_deserialization() {
        let result: Result<Expression, _> = serde_json::from_str("\"happy\"");
        assert!(result.is_err());
    }
}
