// src/locale.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Display languages the application ships catalogs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportedLocale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh")]
    Zh,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl SupportedLocale {
    pub const ALL: [SupportedLocale; 3] = [
        SupportedLocale::En,
        SupportedLocale::Zh,
        SupportedLocale::ZhTw,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedLocale::En => "en",
            SupportedLocale::Zh => "zh",
            SupportedLocale::ZhTw => "zh-TW",
        }
    }

    /// Exact membership test against the supported identifiers.
    pub fn parse(value: &str) -> Option<SupportedLocale> {
        Self::ALL.into_iter().find(|locale| locale.as_str() == value)
    }

    /// Like [`SupportedLocale::parse`], but unknown identifiers become the default.
    pub fn parse_or_default(value: &str) -> SupportedLocale {
        Self::parse(value).unwrap_or_else(|| {
            debug!(
                "Unsupported locale '{}', using '{}'",
                value,
                SupportedLocale::default()
            );
            SupportedLocale::default()
        })
    }
}

impl fmt::Display for SupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_traditional_chinese(language: &str) -> bool {
    language.starts_with("zh-tw")
        || language.starts_with("zh-hk")
        || language.starts_with("zh-mo")
        // plain substring match, so "xx-hant" style tags qualify too
        || language.contains("-hant")
}

/// Maps a raw system or browser language tag to a supported locale.
///
/// Chinese tags are split into traditional script (Taiwan, Hong Kong, Macau
/// or any `-hant` marker) and simplified script. Anything else, including a
/// missing or empty tag, resolves to the default locale.
pub fn resolve(raw_tag: Option<&str>) -> SupportedLocale {
    let language = raw_tag.unwrap_or_default().to_lowercase();

    if language.starts_with("zh") {
        return if is_traditional_chinese(&language) {
            SupportedLocale::ZhTw
        } else {
            SupportedLocale::Zh
        };
    }

    SupportedLocale::default()
}
