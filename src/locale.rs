//! User-facing text for the rendered page.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language of the fallback labels and the status banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Simplified Chinese
    #[default]
    Zh,
    /// English
    En,
}

impl Locale {
    /// Fallback for a profile without a name.
    pub const fn unnamed(self) -> &'static str {
        match self {
            Self::Zh => "未命名",
            Self::En => "Unnamed",
        }
    }

    /// Fallback for a button without a label.
    pub const fn unnamed_button(self) -> &'static str {
        match self {
            Self::Zh => "未命名按钮",
            Self::En => "Unnamed button",
        }
    }

    /// Placeholder shown when neither the profile nor common define buttons.
    pub const fn no_buttons(self) -> &'static str {
        match self {
            Self::Zh => "暂无按钮，请补充 JSON 数据",
            Self::En => "No buttons yet, add some to the JSON data",
        }
    }

    /// Status banner text before the data arrives.
    pub const fn loading(self) -> &'static str {
        match self {
            Self::Zh => "加载中…",
            Self::En => "Loading…",
        }
    }

    /// Status banner text for a failed load.
    pub fn load_failed(self, reason: &str) -> String {
        match self {
            Self::Zh => format!("配置加载失败：{reason}"),
            Self::En => format!("Failed to load configuration: {reason}"),
        }
    }

    /// `lang` attribute of the rendered document.
    pub const fn html_lang(self) -> &'static str {
        match self {
            Self::Zh => "zh-CN",
            Self::En => "en",
        }
    }
}
