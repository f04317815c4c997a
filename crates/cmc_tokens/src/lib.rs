//! CMC Design Tokens
//!
//! The static token catalogue of the CMC design system, plus its export into
//! a Tailwind CSS theme extension.
//!
//! # Quick Start
//!
//! ```rust
//! use cmc_tokens::{ColorToken, TokenCatalogue};
//!
//! let tokens = TokenCatalogue::get();
//! assert_eq!(tokens.colors.get(ColorToken::Primary), "#0891B2");
//!
//! let tailwind = tokens.tailwind_config();
//! assert_eq!(tailwind.extension().colors["cmc-primary"], "#0891B2");
//! ```
//!
//! # Tokens
//!
//! - [`ColorTokens`]: Brand, background, text, border colors and gradients
//! - [`TypographyTokens`]: Font families, sizes, weights, line heights, letter spacing
//! - [`SpacingTokens`]: 4px-based spacing scale
//! - [`RadiusTokens`]: Border radii
//! - [`ShadowTokens`]: Box shadows, including the teal glow
//! - [`AnimationTokens`]: Durations and easings
//! - [`BreakpointTokens`] and [`ContainerTokens`]: Responsive layout
//!
//! Values are CSS strings (or plain numbers for weights and line heights)
//! fixed at compile time.

pub mod catalogue;
pub mod error;
pub mod tailwind;
pub mod tokens;

pub use catalogue::TokenCatalogue;
pub use error::ExportError;
pub use tailwind::{TailwindConfig, ThemeExtension};
pub use tokens::*;
