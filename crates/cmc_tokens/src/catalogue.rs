//! The token catalogue
//!
//! Groups every token family into one immutable value. The catalogue is built
//! once; [`TokenCatalogue::get`] hands out a shared `'static` instance.

use serde::Serialize;
use std::sync::OnceLock;

use crate::error::ExportError;
use crate::tailwind::TailwindConfig;
use crate::tokens::*;

/// Global catalogue instance
static CATALOGUE: OnceLock<TokenCatalogue> = OnceLock::new();

/// Every token group of the CMC design system
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCatalogue {
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub border_radius: RadiusTokens,
    pub shadows: ShadowTokens,
    pub animation: AnimationTokens,
    pub breakpoints: BreakpointTokens,
    pub container: ContainerTokens,
}

impl TokenCatalogue {
    /// Shared catalogue, built on first access
    pub fn get() -> &'static TokenCatalogue {
        CATALOGUE.get_or_init(|| {
            tracing::debug!("building token catalogue");
            TokenCatalogue::default()
        })
    }

    /// Derive the Tailwind `theme.extend` object
    pub fn tailwind_config(&self) -> TailwindConfig {
        TailwindConfig::from_catalogue(self)
    }

    /// Pretty-printed JSON of every group
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// TOML document with one table per group
    pub fn to_toml(&self) -> Result<String, ExportError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Every hex color literal in the color groups, in declaration order
    pub fn hex_colors(&self) -> Vec<(&'static str, &'static str)> {
        let c = &self.colors;
        let mut out = Vec::new();
        out.extend(c.brand_entries());
        out.extend([
            ("background.base", c.background.base),
            ("background.elevated", c.background.elevated),
            ("background.surface", c.background.surface),
            ("background.surfaceAlt", c.background.surface_alt),
            ("background.card", c.background.card),
            ("background.cardHover", c.background.card_hover),
            ("background.input", c.background.input),
            ("background.white", c.background.white),
            ("background.light", c.background.light),
            ("background.tealBanner", c.background.teal_banner),
            ("text.primary", c.text.primary),
            ("text.secondary", c.text.secondary),
            ("text.muted", c.text.muted),
            ("text.subtle", c.text.subtle),
            ("text.dark", c.text.dark),
            ("text.darkSecondary", c.text.dark_secondary),
            ("text.accent", c.text.accent),
            ("text.link", c.text.link),
            ("border.default", c.border.default),
            ("border.subtle", c.border.subtle),
            ("border.accent", c.border.accent),
            ("border.light", c.border.light),
            ("border.input", c.border.input),
        ]);
        out
    }
}
