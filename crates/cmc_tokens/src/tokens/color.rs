//! Color tokens

use serde::Serialize;

/// Color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryLight,
    PrimaryDark,
    Secondary,
    SecondaryLight,
    Tertiary,

    // Background colors
    BgBase,
    BgElevated,
    BgSurface,
    BgSurfaceAlt,
    BgCard,
    BgCardHover,
    BgInput,
    BgWhite,
    BgLight,
    BgTealBanner,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextMuted,
    TextSubtle,
    TextDark,
    TextDarkSecondary,
    TextAccent,
    TextLink,

    // Border colors
    Border,
    BorderSubtle,
    BorderAccent,
    BorderLight,
    BorderInput,
}

/// Gradient token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum GradientToken {
    HeroOverlay,
    TealGlow,
    CardBorder,
    DarkFade,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColors {
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub secondary_light: &'static str,
    pub tertiary: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundColors {
    pub base: &'static str,
    pub elevated: &'static str,
    pub surface: &'static str,
    pub surface_alt: &'static str,
    pub card: &'static str,
    pub card_hover: &'static str,
    pub input: &'static str,
    pub white: &'static str,
    pub light: &'static str,
    pub teal_banner: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub muted: &'static str,
    pub subtle: &'static str,
    pub dark: &'static str,
    pub dark_secondary: &'static str,
    pub accent: &'static str,
    pub link: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderColors {
    pub default: &'static str,
    pub subtle: &'static str,
    pub accent: &'static str,
    pub light: &'static str,
    pub input: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradients {
    pub hero_overlay: &'static str,
    pub teal_glow: &'static str,
    pub card_border: &'static str,
    pub dark_fade: &'static str,
}

/// Complete set of color tokens
#[derive(Clone, Debug, Serialize)]
pub struct ColorTokens {
    pub brand: BrandColors,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub border: BorderColors,
    pub gradient: Gradients,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> &'static str {
        match token {
            ColorToken::Primary => self.brand.primary,
            ColorToken::PrimaryLight => self.brand.primary_light,
            ColorToken::PrimaryDark => self.brand.primary_dark,
            ColorToken::Secondary => self.brand.secondary,
            ColorToken::SecondaryLight => self.brand.secondary_light,
            ColorToken::Tertiary => self.brand.tertiary,
            ColorToken::BgBase => self.background.base,
            ColorToken::BgElevated => self.background.elevated,
            ColorToken::BgSurface => self.background.surface,
            ColorToken::BgSurfaceAlt => self.background.surface_alt,
            ColorToken::BgCard => self.background.card,
            ColorToken::BgCardHover => self.background.card_hover,
            ColorToken::BgInput => self.background.input,
            ColorToken::BgWhite => self.background.white,
            ColorToken::BgLight => self.background.light,
            ColorToken::BgTealBanner => self.background.teal_banner,
            ColorToken::TextPrimary => self.text.primary,
            ColorToken::TextSecondary => self.text.secondary,
            ColorToken::TextMuted => self.text.muted,
            ColorToken::TextSubtle => self.text.subtle,
            ColorToken::TextDark => self.text.dark,
            ColorToken::TextDarkSecondary => self.text.dark_secondary,
            ColorToken::TextAccent => self.text.accent,
            ColorToken::TextLink => self.text.link,
            ColorToken::Border => self.border.default,
            ColorToken::BorderSubtle => self.border.subtle,
            ColorToken::BorderAccent => self.border.accent,
            ColorToken::BorderLight => self.border.light,
            ColorToken::BorderInput => self.border.input,
        }
    }

    /// Get a gradient by token key
    pub fn gradient(&self, token: GradientToken) -> &'static str {
        match token {
            GradientToken::HeroOverlay => self.gradient.hero_overlay,
            GradientToken::TealGlow => self.gradient.teal_glow,
            GradientToken::CardBorder => self.gradient.card_border,
            GradientToken::DarkFade => self.gradient.dark_fade,
        }
    }

    /// Brand colors as `(key, value)` pairs
    pub fn brand_entries(&self) -> Vec<(&'static str, &'static str)> {
        let b = &self.brand;
        vec![
            ("primary", b.primary),
            ("primaryLight", b.primary_light),
            ("primaryDark", b.primary_dark),
            ("secondary", b.secondary),
            ("secondaryLight", b.secondary_light),
            ("tertiary", b.tertiary),
        ]
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            brand: BrandColors {
                primary: "#0891B2",
                primary_light: "#22D3EE",
                primary_dark: "#0E7490",
                secondary: "#DC2626",
                secondary_light: "#EF4444",
                tertiary: "#2563EB",
            },
            background: BackgroundColors {
                base: "#000000",
                elevated: "#0A0A0A",
                surface: "#111111",
                surface_alt: "#1A1A1A",
                card: "#111827",
                card_hover: "#1F2937",
                input: "#1F2937",
                white: "#FFFFFF",
                light: "#F9FAFB",
                teal_banner: "#0E7490",
            },
            text: TextColors {
                primary: "#FFFFFF",
                secondary: "#D1D5DB",
                muted: "#9CA3AF",
                subtle: "#6B7280",
                dark: "#111827",
                dark_secondary: "#374151",
                accent: "#22D3EE",
                link: "#0891B2",
            },
            border: BorderColors {
                default: "#1F2937",
                subtle: "#374151",
                accent: "#0891B2",
                light: "#E5E7EB",
                input: "#374151",
            },
            gradient: Gradients {
                hero_overlay: "linear-gradient(180deg, rgba(0,0,0,0.7) 0%, rgba(0,0,0,0.3) 50%, rgba(0,0,0,0.8) 100%)",
                teal_glow: "linear-gradient(135deg, #0891B2 0%, #22D3EE 100%)",
                card_border: "linear-gradient(180deg, #0891B2 0%, transparent 100%)",
                dark_fade: "linear-gradient(180deg, #000000 0%, #111111 100%)",
            },
        }
    }
}
