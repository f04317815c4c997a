//! Border radius tokens

use serde::Serialize;

/// Radius token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
    Full,
}

/// Complete set of border radius tokens
#[derive(Clone, Debug, Serialize)]
pub struct RadiusTokens {
    pub none: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    #[serde(rename = "2xl")]
    pub xl2: &'static str,
    pub full: &'static str,
}

impl RadiusTokens {
    /// Get radius by token key
    pub fn get(&self, token: RadiusToken) -> &'static str {
        match token {
            RadiusToken::None => self.none,
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Xl => self.xl,
            RadiusToken::Xl2 => self.xl2,
            RadiusToken::Full => self.full,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            none: "0px",
            sm: "4px",
            md: "8px",
            lg: "12px",
            xl: "16px",
            xl2: "24px",
            full: "9999px",
        }
    }
}
