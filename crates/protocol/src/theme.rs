use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Semantic color slots of a client palette, resolved by each front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
}

impl ThemeToken {
    pub const ALL: [ThemeToken; 5] = [
        ThemeToken::Primary,
        ThemeToken::Secondary,
        ThemeToken::Accent,
        ThemeToken::Background,
        ThemeToken::Text,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
            Self::Text => "text",
        }
    }
}

/// A resolved client palette for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary_color: Color,
    pub secondary_color: Color,
    pub accent_color: Color,
    pub background_color: Color,
    pub text_color: Color,
}

impl ThemeColors {
    pub fn resolve(&self, token: ThemeToken) -> Color {
        match token {
            ThemeToken::Primary => self.primary_color,
            ThemeToken::Secondary => self.secondary_color,
            ThemeToken::Accent => self.accent_color,
            ThemeToken::Background => self.background_color,
            ThemeToken::Text => self.text_color,
        }
    }
}
