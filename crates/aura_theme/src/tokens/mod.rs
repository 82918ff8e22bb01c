//! Design tokens for theming
//!
//! Tokens are the resolved values a UI layer consumes:
//! - Colors (background, text, accent, glass, border, gradients, mystical effects)
//! - Opacity (the fixed alpha steps used during derivation)
//! - Shadows (CSS `box-shadow` strings)

mod color;
mod opacity;
mod shadow;

pub use color::*;
pub use opacity::*;
pub use shadow::*;
