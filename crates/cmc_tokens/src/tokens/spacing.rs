//! Spacing tokens (4px-based scale)

use serde::Serialize;

/// Spacing token keys, named after their scale step
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Space0,
    Space1,
    Space2,
    Space3,
    Space4,
    Space5,
    Space6,
    Space8,
    Space10,
    Space12,
    Space16,
    Space20,
    Space24,
    Space32,
}

/// Complete spacing scale
#[derive(Clone, Debug, Serialize)]
pub struct SpacingTokens {
    #[serde(rename = "0")]
    pub space_0: &'static str,
    #[serde(rename = "1")]
    pub space_1: &'static str,
    #[serde(rename = "2")]
    pub space_2: &'static str,
    #[serde(rename = "3")]
    pub space_3: &'static str,
    #[serde(rename = "4")]
    pub space_4: &'static str,
    #[serde(rename = "5")]
    pub space_5: &'static str,
    #[serde(rename = "6")]
    pub space_6: &'static str,
    #[serde(rename = "8")]
    pub space_8: &'static str,
    #[serde(rename = "10")]
    pub space_10: &'static str,
    #[serde(rename = "12")]
    pub space_12: &'static str,
    #[serde(rename = "16")]
    pub space_16: &'static str,
    #[serde(rename = "20")]
    pub space_20: &'static str,
    #[serde(rename = "24")]
    pub space_24: &'static str,
    #[serde(rename = "32")]
    pub space_32: &'static str,
}

impl SpacingTokens {
    /// Get spacing by token key
    pub fn get(&self, token: SpacingToken) -> &'static str {
        match token {
            SpacingToken::Space0 => self.space_0,
            SpacingToken::Space1 => self.space_1,
            SpacingToken::Space2 => self.space_2,
            SpacingToken::Space3 => self.space_3,
            SpacingToken::Space4 => self.space_4,
            SpacingToken::Space5 => self.space_5,
            SpacingToken::Space6 => self.space_6,
            SpacingToken::Space8 => self.space_8,
            SpacingToken::Space10 => self.space_10,
            SpacingToken::Space12 => self.space_12,
            SpacingToken::Space16 => self.space_16,
            SpacingToken::Space20 => self.space_20,
            SpacingToken::Space24 => self.space_24,
            SpacingToken::Space32 => self.space_32,
        }
    }

    /// Scale steps as `(key, value)` pairs
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("0", self.space_0),
            ("1", self.space_1),
            ("2", self.space_2),
            ("3", self.space_3),
            ("4", self.space_4),
            ("5", self.space_5),
            ("6", self.space_6),
            ("8", self.space_8),
            ("10", self.space_10),
            ("12", self.space_12),
            ("16", self.space_16),
            ("20", self.space_20),
            ("24", self.space_24),
            ("32", self.space_32),
        ]
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            space_0: "0px",
            space_1: "4px",
            space_2: "8px",
            space_3: "12px",
            space_4: "16px",
            space_5: "20px",
            space_6: "24px",
            space_8: "32px",
            space_10: "40px",
            space_12: "48px",
            space_16: "64px",
            space_20: "80px",
            space_24: "96px",
            space_32: "128px",
        }
    }
}
