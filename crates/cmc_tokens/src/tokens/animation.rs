//! Animation tokens (durations and easings)

use serde::Serialize;

/// Duration token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum DurationToken {
    Fast,
    Normal,
    Slow,
    Slower,
}

/// Easing token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum EasingToken {
    Default,
    In,
    Out,
    InOut,
}

#[derive(Clone, Debug, Serialize)]
pub struct Durations {
    pub fast: &'static str,
    pub normal: &'static str,
    pub slow: &'static str,
    pub slower: &'static str,
}

/// CSS `cubic-bezier()` timing functions
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Easings {
    pub default: &'static str,
    #[serde(rename = "in")]
    pub ease_in: &'static str,
    #[serde(rename = "out")]
    pub ease_out: &'static str,
    pub in_out: &'static str,
}

/// Complete set of animation tokens
#[derive(Clone, Debug, Serialize)]
pub struct AnimationTokens {
    pub duration: Durations,
    pub easing: Easings,
}

impl AnimationTokens {
    pub fn duration(&self, token: DurationToken) -> &'static str {
        match token {
            DurationToken::Fast => self.duration.fast,
            DurationToken::Normal => self.duration.normal,
            DurationToken::Slow => self.duration.slow,
            DurationToken::Slower => self.duration.slower,
        }
    }

    /// Duration in milliseconds
    pub fn duration_ms(&self, token: DurationToken) -> u32 {
        self.duration(token)
            .trim_end_matches("ms")
            .parse()
            .unwrap_or_default()
    }

    pub fn easing(&self, token: EasingToken) -> &'static str {
        match token {
            EasingToken::Default => self.easing.default,
            EasingToken::In => self.easing.ease_in,
            EasingToken::Out => self.easing.ease_out,
            EasingToken::InOut => self.easing.in_out,
        }
    }
}

impl Default for AnimationTokens {
    fn default() -> Self {
        Self {
            duration: Durations {
                fast: "150ms",
                normal: "300ms",
                slow: "500ms",
                slower: "700ms",
            },
            easing: Easings {
                default: "cubic-bezier(0.4, 0, 0.2, 1)",
                ease_in: "cubic-bezier(0.4, 0, 1, 1)",
                ease_out: "cubic-bezier(0, 0, 0.2, 1)",
                in_out: "cubic-bezier(0.4, 0, 0.2, 1)",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_ms() {
        let animation = AnimationTokens::default();
        assert_eq!(animation.duration_ms(DurationToken::Fast), 150);
        assert_eq!(animation.duration_ms(DurationToken::Slower), 700);
    }
}
