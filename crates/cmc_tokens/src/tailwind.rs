//! Tailwind CSS theme extension
//!
//! Mirrors the shape Tailwind expects under `theme.extend` so the output of
//! [`TailwindConfig::to_json`] can be spread straight into a
//! `tailwind.config.js`.

use indexmap::IndexMap;
use serde::Serialize;

use crate::catalogue::TokenCatalogue;
use crate::error::ExportError;
use crate::tokens::font_stack;

/// `{ theme: { extend: ... } }`
#[derive(Clone, Debug, Serialize)]
pub struct TailwindConfig {
    pub theme: TailwindTheme,
}

#[derive(Clone, Debug, Serialize)]
pub struct TailwindTheme {
    pub extend: ThemeExtension,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtension {
    pub colors: IndexMap<&'static str, &'static str>,
    pub font_family: IndexMap<&'static str, Vec<String>>,
    pub box_shadow: IndexMap<&'static str, &'static str>,
}

impl TailwindConfig {
    /// Derive the theme extension from a token catalogue
    pub fn from_catalogue(tokens: &TokenCatalogue) -> Self {
        let brand = &tokens.colors.brand;
        let bg = &tokens.colors.background;
        let text = &tokens.colors.text;

        let colors: IndexMap<_, _> = [
            ("cmc-primary", brand.primary),
            ("cmc-primary-light", brand.primary_light),
            ("cmc-primary-dark", brand.primary_dark),
            ("cmc-secondary", brand.secondary),
            ("cmc-secondary-light", brand.secondary_light),
            ("cmc-tertiary", brand.tertiary),
            ("cmc-bg-base", bg.base),
            ("cmc-bg-elevated", bg.elevated),
            ("cmc-bg-surface", bg.surface),
            ("cmc-bg-surface-alt", bg.surface_alt),
            ("cmc-bg-card", bg.card),
            ("cmc-bg-card-hover", bg.card_hover),
            ("cmc-text-primary", text.primary),
            ("cmc-text-secondary", text.secondary),
            ("cmc-text-muted", text.muted),
            ("cmc-text-subtle", text.subtle),
        ]
        .into_iter()
        .collect();

        let font_family: IndexMap<_, _> = [
            ("heading", font_stack(tokens.typography.font_family.heading)),
            ("body", font_stack(tokens.typography.font_family.body)),
        ]
        .into_iter()
        .collect();

        let shadows = &tokens.shadows;
        let box_shadow: IndexMap<_, _> = [
            ("glow-teal", shadows.glow_teal),
            ("glow-teal-lg", shadows.glow_teal_lg),
            ("card", shadows.card),
            ("card-hover", shadows.card_hover),
        ]
        .into_iter()
        .collect();

        Self {
            theme: TailwindTheme {
                extend: ThemeExtension {
                    colors,
                    font_family,
                    box_shadow,
                },
            },
        }
    }

    pub fn extension(&self) -> &ThemeExtension {
        &self.theme.extend
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `module.exports = {...}` snippet for a Tailwind config file
    pub fn to_module(&self) -> Result<String, ExportError> {
        Ok(format!("module.exports = {};\n", self.to_json()?))
    }
}
