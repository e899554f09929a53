// Config Domain Entities
//
// 配置领域实体定义

use serde::{Deserialize, Serialize};

use crate::modules::expression::domain::{DisplaySize, Expression};

/// 默认角色名
pub const DEFAULT_CHARACTER_NAME: &str = "Nyuki";

/// 表情舞台配置聚合根
///
/// 会话创建时读取一次；`default_expression` 只影响初始值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_expression: Option<Expression>,
    #[serde(default)]
    pub image_size: DisplaySize,
    #[serde(default = "default_character_name")]
    pub character_name: String,
}

fn default_character_name() -> String {
    DEFAULT_CHARACTER_NAME.to_string()
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            default_expression: None,
            image_size: DisplaySize::default(),
            character_name: default_character_name(),
        }
    }
}

impl StageConfig {
    /// 创建新的默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 合并部分配置更新
    pub fn merge(&mut self, partial: PartialStageConfig) {
        if let Some(default_expression) = partial.default_expression {
            self.default_expression = default_expression;
        }
        if let Some(image_size) = partial.image_size {
            self.image_size = image_size;
        }
        if let Some(character_name) = partial.character_name {
            self.character_name = character_name;
        }
    }

    /// 验证配置是否有效
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.character_name.trim().is_empty() {
            errors.push("Character name must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// 部分配置更新（用于合并）
///
/// `default_expression` 为 `Some(None)` 时清除默认表情
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialStageConfig {
    pub default_expression: Option<Option<Expression>>,
    pub image_size: Option<DisplaySize>,
    pub character_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_config_default() {
        let config = StageConfig::default();
        assert_eq!(config.default_expression, None);
        assert_eq!(config.image_size, DisplaySize::Full);
        assert_eq!(config.character_name, "Nyuki");
    }

    #[test]
    fn test_stage_config_merge() {
        let mut config = StageConfig::default();
        config.merge(PartialStageConfig {
            default_expression: Some(Some(Expression::Tsundere)),
            ..Default::default()
        });

        assert_eq!(config.default_expression, Some(Expression::Tsundere));
        // 其他字段保持不变
        assert_eq!(config.image_size, DisplaySize::Full);

        config.merge(PartialStageConfig {
            default_expression: Some(None),
            image_size: Some(DisplaySize::Small),
            ..Default::default()
        });
        assert_eq!(config.default_expression, None);
        assert_eq!(config.image_size, DisplaySize::Small);
    }

    #[test]
    fn test_stage_config_validate() {
        assert!(StageConfig::default().validate().is_ok());

        let mut invalid = StageConfig::default();
        invalid.character_name = "  ".to_string();
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_file() {
        let config: StageConfig =
            serde_json::from_str(r#"{"defaultExpression":"special_flirty"}"#).unwrap();
        assert_eq!(config.default_expression, Some(Expression::Flirty));
        assert_eq!(config.image_size, DisplaySize::Full);
        assert_eq!(config.character_name, "Nyuki");

        let config: StageConfig = serde_json::from_str(r#"{"imageSize":"large"}"#).unwrap();
        assert_eq!(config.image_size, DisplaySize::Large);
        assert_eq!(config.default_expression, None);
    }
}
