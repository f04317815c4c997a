//! Typography tokens

use serde::Serialize;

/// Font size token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontSizeToken {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Xl4,
    Xl5,
    Xl6,
    Xl7,
    Xl8,
}

/// Font weight token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontWeightToken {
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Extrabold,
    Black,
}

#[derive(Clone, Debug, Serialize)]
pub struct FontFamilies {
    pub heading: &'static str,
    pub body: &'static str,
    pub mono: &'static str,
}

/// Font sizes in rem
#[derive(Clone, Debug, Serialize)]
pub struct FontSizes {
    pub xs: &'static str,
    pub sm: &'static str,
    pub base: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    #[serde(rename = "2xl")]
    pub xl2: &'static str,
    #[serde(rename = "3xl")]
    pub xl3: &'static str,
    #[serde(rename = "4xl")]
    pub xl4: &'static str,
    #[serde(rename = "5xl")]
    pub xl5: &'static str,
    #[serde(rename = "6xl")]
    pub xl6: &'static str,
    #[serde(rename = "7xl")]
    pub xl7: &'static str,
    #[serde(rename = "8xl")]
    pub xl8: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct FontWeights {
    pub light: u16,
    pub regular: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
    pub extrabold: u16,
    pub black: u16,
}

/// Unitless line height multipliers
#[derive(Clone, Debug, Serialize)]
pub struct LineHeights {
    pub tight: f64,
    pub snug: f64,
    pub normal: f64,
    pub relaxed: f64,
    pub loose: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct LetterSpacings {
    pub tighter: &'static str,
    pub tight: &'static str,
    pub normal: &'static str,
    pub wide: &'static str,
    pub wider: &'static str,
    pub widest: &'static str,
}

/// Complete set of typography tokens
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    pub font_family: FontFamilies,
    pub font_size: FontSizes,
    pub font_weight: FontWeights,
    pub line_height: LineHeights,
    pub letter_spacing: LetterSpacings,
}

impl TypographyTokens {
    /// Get a font size by token key
    pub fn font_size(&self, token: FontSizeToken) -> &'static str {
        let s = &self.font_size;
        match token {
            FontSizeToken::Xs => s.xs,
            FontSizeToken::Sm => s.sm,
            FontSizeToken::Base => s.base,
            FontSizeToken::Lg => s.lg,
            FontSizeToken::Xl => s.xl,
            FontSizeToken::Xl2 => s.xl2,
            FontSizeToken::Xl3 => s.xl3,
            FontSizeToken::Xl4 => s.xl4,
            FontSizeToken::Xl5 => s.xl5,
            FontSizeToken::Xl6 => s.xl6,
            FontSizeToken::Xl7 => s.xl7,
            FontSizeToken::Xl8 => s.xl8,
        }
    }

    /// Get a font weight by token key
    pub fn font_weight(&self, token: FontWeightToken) -> u16 {
        let w = &self.font_weight;
        match token {
            FontWeightToken::Light => w.light,
            FontWeightToken::Regular => w.regular,
            FontWeightToken::Medium => w.medium,
            FontWeightToken::Semibold => w.semibold,
            FontWeightToken::Bold => w.bold,
            FontWeightToken::Extrabold => w.extrabold,
            FontWeightToken::Black => w.black,
        }
    }

    /// Font sizes as `(key, value)` pairs, smallest first
    pub fn font_size_entries(&self) -> Vec<(&'static str, &'static str)> {
        let s = &self.font_size;
        vec![
            ("xs", s.xs),
            ("sm", s.sm),
            ("base", s.base),
            ("lg", s.lg),
            ("xl", s.xl),
            ("2xl", s.xl2),
            ("3xl", s.xl3),
            ("4xl", s.xl4),
            ("5xl", s.xl5),
            ("6xl", s.xl6),
            ("7xl", s.xl7),
            ("8xl", s.xl8),
        ]
    }
}

/// Split a CSS font stack into family names without quotes
pub fn font_stack(stack: &str) -> Vec<String> {
    stack
        .split(',')
        .map(|family| family.trim().replace('\'', ""))
        .collect()
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: FontFamilies {
                heading: "'Inter', 'Helvetica Neue', Arial, sans-serif",
                body: "'Inter', 'Helvetica Neue', Arial, sans-serif",
                mono: "'JetBrains Mono', 'Fira Code', monospace",
            },
            font_size: FontSizes {
                xs: "0.75rem",    // 12px
                sm: "0.875rem",   // 14px
                base: "1rem",     // 16px
                lg: "1.125rem",   // 18px
                xl: "1.25rem",    // 20px
                xl2: "1.5rem",    // 24px
                xl3: "1.875rem",  // 30px
                xl4: "2.25rem",   // 36px
                xl5: "3rem",      // 48px
                xl6: "3.75rem",   // 60px
                xl7: "4.5rem",    // 72px
                xl8: "6rem",      // 96px
            },
            font_weight: FontWeights {
                light: 300,
                regular: 400,
                medium: 500,
                semibold: 600,
                bold: 700,
                extrabold: 800,
                black: 900,
            },
            line_height: LineHeights {
                tight: 1.1,
                snug: 1.25,
                normal: 1.5,
                relaxed: 1.625,
                loose: 2.0,
            },
            letter_spacing: LetterSpacings {
                tighter: "-0.05em",
                tight: "-0.025em",
                normal: "0em",
                wide: "0.025em",
                wider: "0.05em",
                widest: "0.1em",
            },
        }
    }
}
