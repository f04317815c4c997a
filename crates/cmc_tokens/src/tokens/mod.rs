//! Design tokens
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors and gradients
//! - Typography (fonts, sizes, weights, line heights, letter spacing)
//! - Spacing (margins, padding)
//! - Border radii
//! - Shadows
//! - Animation durations and easings
//! - Breakpoints and container sizing

mod animation;
mod color;
mod layout;
mod radius;
mod shadow;
mod spacing;
mod typography;

pub use animation::*;
pub use color::*;
pub use layout::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
