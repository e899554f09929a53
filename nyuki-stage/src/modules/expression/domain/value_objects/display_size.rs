use serde::{Deserialize, Serialize};

/// 表情图显示尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySize {
    Small,
    Medium,
    Large,
    #[default]
    Full,
}

impl From<&str> for DisplaySize {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "small" => DisplaySize::Small,
            "medium" => DisplaySize::Medium,
            "large" => DisplaySize::Large,
            _ => DisplaySize::Full,
        }
    }
}
