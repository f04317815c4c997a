//! Shadow tokens for theming

use serde::Serialize;

/// Shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Sm,
    Md,
    Lg,
    Xl,
    GlowTeal,
    GlowTealLg,
    Card,
    CardHover,
}

/// Complete set of box-shadow tokens, as CSS `box-shadow` values
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowTokens {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub glow_teal: &'static str,
    pub glow_teal_lg: &'static str,
    pub card: &'static str,
    pub card_hover: &'static str,
}

impl ShadowTokens {
    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &'static str {
        match token {
            ShadowToken::Sm => self.sm,
            ShadowToken::Md => self.md,
            ShadowToken::Lg => self.lg,
            ShadowToken::Xl => self.xl,
            ShadowToken::GlowTeal => self.glow_teal,
            ShadowToken::GlowTealLg => self.glow_teal_lg,
            ShadowToken::Card => self.card,
            ShadowToken::CardHover => self.card_hover,
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self {
            sm: "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
            md: "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1)",
            lg: "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1)",
            xl: "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1)",
            glow_teal: "0 0 20px rgba(8, 145, 178, 0.3)",
            glow_teal_lg: "0 0 40px rgba(8, 145, 178, 0.2)",
            card: "0 4px 20px rgba(0, 0, 0, 0.3)",
            card_hover: "0 8px 30px rgba(0, 0, 0, 0.4)",
        }
    }
}
