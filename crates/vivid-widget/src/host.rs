use vivid_style::PlayState;

use crate::render::RenderedHeading;

/// Platform contract implemented by whatever embeds the widget.
///
/// The widget owns *when* things happen — render passes, the one-shot
/// animation start, subscription add/remove — and calls out through this
/// trait for the *how*. A DOM-backed host would map these onto shadow-root
/// replacement, `animation-play-state`, `IntersectionObserver`, and a window
/// resize listener; a static or test host just records them.
///
/// Event delivery flows the other way: the host (or a test) feeds resize and
/// visibility events into [`GradientHeading::handle_resize`] and
/// [`GradientHeading::handle_visibility`].
///
/// [`GradientHeading::handle_resize`]: crate::heading::GradientHeading::handle_resize
/// [`GradientHeading::handle_visibility`]: crate::heading::GradientHeading::handle_visibility
pub trait Host {
    /// Replace the widget's rendered content with `doc`.
    ///
    /// The applied document always carries a paused animation; the play
    /// state is flipped separately by [`set_play_state`](Self::set_play_state).
    fn apply(&mut self, doc: &RenderedHeading);

    /// Flip the animation play state on the currently applied content.
    fn set_play_state(&mut self, state: PlayState);

    /// Begin delivering visibility events for this widget.
    ///
    /// `threshold` is the minimum intersection ratio that should count as
    /// visible. Hosts without a viewport may leave the default no-op; the
    /// widget still works, driven by synthetic events.
    fn observe_visibility(&mut self, threshold: f32) {
        let _ = threshold;
    }

    /// Stop delivering visibility events. Must tolerate redundant calls —
    /// unmount removes the observation unconditionally.
    fn unobserve_visibility(&mut self) {}

    /// Begin delivering viewport resize events for this widget.
    fn add_resize_listener(&mut self) {}

    /// Stop delivering viewport resize events. Must tolerate redundant calls.
    fn remove_resize_listener(&mut self) {}
}
