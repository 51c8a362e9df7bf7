//! Vivid widget — the animated gradient heading and its lifecycle glue.
//!
//! [`GradientHeading`] sits between the pure `vivid-style` pipeline and
//! whatever embeds the widget: it stores raw attributes, runs the
//! resolve → compile → apply render pass, and defers the gradient animation
//! until the heading first scrolls into view. The embedding side is an
//! injected [`Host`] capability, so the same lifecycle logic drives a DOM
//! shadow root, a static page writer, or a test double.
//!
//! # Quick start
//!
//! ```rust
//! use vivid_widget::{GradientHeading, Host, PlayState, RenderedHeading, VisibilityEntry};
//!
//! // A minimal host: remembers the latest document and play state.
//! #[derive(Default)]
//! struct Page {
//!     html: String,
//!     play_state: Option<PlayState>,
//! }
//!
//! impl Host for Page {
//!     fn apply(&mut self, doc: &RenderedHeading) {
//!         self.html = doc.shadow_html();
//!     }
//!     fn set_play_state(&mut self, state: PlayState) {
//!         self.play_state = Some(state);
//!     }
//! }
//!
//! let mut heading = GradientHeading::new(Page::default())
//!     .with_attribute("text", "Deep Currents")
//!     .with_attribute("gradient-preset", "ocean-wave");
//!
//! heading.mount(); // renders paused, subscribes to resize + visibility
//! assert!(heading.host().html.contains("Deep Currents"));
//!
//! // The host reports the element scrolling into view:
//! heading.handle_visibility(VisibilityEntry::new(0.4));
//! assert_eq!(heading.host().play_state, Some(PlayState::Running));
//! ```
//!
//! # Implementing a host
//!
//! [`Host::apply`] and [`Host::set_play_state`] are the only required
//! methods; the subscription hooks default to no-ops for hosts that drive
//! the widget with synthetic events. Event delivery always flows *into* the
//! widget — [`GradientHeading::handle_resize`] and
//! [`GradientHeading::handle_visibility`] — and every call completes its
//! side effects synchronously before returning.

pub mod heading;
pub mod host;
pub mod lifecycle;
pub mod logging;
pub mod render;

pub use heading::GradientHeading;
pub use host::Host;
pub use lifecycle::{LifecycleState, VISIBILITY_THRESHOLD, VisibilityEntry};
pub use logging::{LoggingConfig, init_logging};
pub use render::{RenderedHeading, render};

// Re-export the style primitive hosts always need.
pub use vivid_style::PlayState;
