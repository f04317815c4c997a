//! Breakpoint and container tokens

use serde::Serialize;

/// Breakpoint token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum BreakpointToken {
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
}

/// Minimum viewport widths
#[derive(Clone, Debug, Serialize)]
pub struct BreakpointTokens {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    #[serde(rename = "2xl")]
    pub xl2: &'static str,
}

impl BreakpointTokens {
    pub fn get(&self, token: BreakpointToken) -> &'static str {
        match token {
            BreakpointToken::Sm => self.sm,
            BreakpointToken::Md => self.md,
            BreakpointToken::Lg => self.lg,
            BreakpointToken::Xl => self.xl,
            BreakpointToken::Xl2 => self.xl2,
        }
    }

    /// Largest breakpoint whose minimum width fits in `width_px`
    pub fn active(&self, width_px: u32) -> Option<BreakpointToken> {
        [
            BreakpointToken::Xl2,
            BreakpointToken::Xl,
            BreakpointToken::Lg,
            BreakpointToken::Md,
            BreakpointToken::Sm,
        ]
        .into_iter()
        .find(|&token| px(self.get(token)).is_some_and(|min| width_px >= min))
    }
}

fn px(value: &str) -> Option<u32> {
    value.strip_suffix("px")?.parse().ok()
}

impl Default for BreakpointTokens {
    fn default() -> Self {
        Self {
            sm: "640px",
            md: "768px",
            lg: "1024px",
            xl: "1280px",
            xl2: "1536px",
        }
    }
}

/// Page container sizing
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerTokens {
    pub max_width: &'static str,
    pub padding: &'static str,
}

impl Default for ContainerTokens {
    fn default() -> Self {
        Self {
            max_width: "1280px",
            padding: "24px",
        }
    }
}
