//! # TailShade
//!
//! A pure-Rust library for turning a single base color into a Tailwind CSS
//! style shade palette.
//!
//! Hue and saturation of the base color are kept constant while lightness is
//! swapped for a fixed target per shade (`50` is nearly white, `950` nearly
//! black).
//!
//! ## Quick Start
//!
//! ### Converting Colors
//!
//! ```
//! use tailshade::color::{hex_to_hsl, hex_to_rgb, hsl_to_hex, rgb_to_hex, Rgb};
//!
//! assert_eq!(hex_to_rgb("#F53")?, Rgb::new(255, 85, 51));
//! assert_eq!(rgb_to_hex(255, 85, 51), "#FF5533");
//!
//! let hsl = hex_to_hsl("#00FF00")?;
//! assert_eq!((hsl.h, hsl.s, hsl.l), (120.0, 1.0, 0.5));
//! assert_eq!(hsl_to_hex(hsl.h, hsl.s, hsl.l)?, "#00FF00");
//! # Ok::<(), tailshade::Error>(())
//! ```
//!
//! ### Generating a Palette
//!
//! ```
//! use tailshade::palette::{generate_palette, Options, Shade};
//!
//! let options = Options::new([
//!     Shade::new("100", 90),
//!     Shade::new("500", 50),
//!     Shade::new("900", 10),
//! ]);
//! let palette = generate_palette("#FF0000", &options)?;
//!
//! assert_eq!(palette.get("100"), Some("#FECCCC"));
//! assert_eq!(palette.get("500"), Some("#FF0000"));
//! assert_eq!(palette.get("900"), Some("#330000"));
//!
//! // The standard 11-step Tailwind scale
//! let tailwind = generate_palette("#0066FF", &Options::default())?;
//! assert_eq!(tailwind.len(), 11);
//! # Ok::<(), tailshade::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `tailshade` command-line binary (on by default)

pub mod color;
pub mod error;
pub mod palette;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::color::{Hsl, Rgb, hex_to_hsl, hex_to_rgb, hsl_to_hex, rgb_to_hex};
    pub use crate::error::{Error, Result};
    pub use crate::palette::{Options, Palette, Shade, TAILWIND_SHADES, generate_palette};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
