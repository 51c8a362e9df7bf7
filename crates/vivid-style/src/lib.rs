//! Attribute resolution and style compilation for the **vivid** gradient
//! heading widget.
//!
//! This crate is intentionally dependency-free so hosts, tests, and tooling
//! can derive presentation from raw attributes without pulling in any
//! host-integration code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`color`] | `Rgb` hex color, alpha blending, `ParseColorError` |
//! | [`config`] | `Attr` schema, `HeadingConfig` resolver/reducer |
//! | [`presets`] | the static gradient preset table |
//! | [`style`] | `compile` → `CompiledStyle` descriptor |
//!
//! # Quick start
//!
//! ```rust
//! use vivid_style::{HeadingConfig, compile};
//!
//! // Raw attributes as the host element carries them; everything is
//! // optional and malformed values fall back silently.
//! let attrs = [("text", "Hi"), ("gradient-preset", "ocean-wave")];
//! let config = HeadingConfig::resolve(|name| {
//!     attrs.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
//! });
//!
//! assert_eq!(config.text, "Hi");
//! let style = compile(&config);
//! assert_eq!(style.gradient.stops.len(), 5);
//! ```

pub mod color;
pub mod config;
pub mod presets;
pub mod style;

pub use color::{ParseColorError, Rgb};
pub use config::{Attr, HeadingConfig};
pub use presets::{DEFAULT_PRESET, PRESETS, Preset};
pub use style::{CompiledStyle, Fill, PlayState, compile};
