use std::collections::HashMap;

use vivid_style::{Attr, HeadingConfig, PlayState};

use crate::host::Host;
use crate::lifecycle::{LifecycleState, VISIBILITY_THRESHOLD, VisibilityEntry};
use crate::render::render;

/// The animated gradient heading widget.
///
/// Owns the raw attribute store and the per-instance [`LifecycleState`], and
/// drives the resolve → compile → apply pipeline through an injected [`Host`].
/// Every operation is synchronous: by the time a mutating call returns, the
/// host has already seen its effects.
///
/// State machine: `Unmounted → Mounted(pending) → Mounted(running) →
/// Unmounted`. The animation is applied paused on every render pass and
/// flipped to running by the first qualifying visibility entry, at most once
/// per mount cycle.
///
/// # Example
/// ```rust,ignore
/// let mut heading = GradientHeading::new(page)
///     .with_attribute("text", "Deep Currents")
///     .with_attribute("gradient-preset", "ocean-wave");
/// heading.mount();
/// // ... host delivers events ...
/// heading.handle_visibility(VisibilityEntry::new(0.4)); // animation starts
/// ```
pub struct GradientHeading<H: Host> {
    host: H,
    /// Raw attribute values exactly as the embedder set them. Unobserved
    /// names are stored too; they just never trigger a render.
    attrs: HashMap<String, String>,
    state: LifecycleState,
}

impl<H: Host> GradientHeading<H> {
    /// Creates an inert, unmounted widget. Attributes may be staged before
    /// [`mount`](Self::mount); the host sees nothing until then.
    pub fn new(host: H) -> Self {
        Self {
            host,
            attrs: HashMap::new(),
            state: LifecycleState::default(),
        }
    }

    /// Builder-style attribute staging for pre-mount configuration.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// The injected host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Current lifecycle flags (copy).
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Whether the widget is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.state.mounted
    }

    /// The raw value currently stored for `name`, if any.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Resolve the current raw attributes into a full configuration.
    ///
    /// Pure with respect to the widget: no host calls, no state changes.
    pub fn config(&self) -> HeadingConfig {
        HeadingConfig::resolve(|name| self.attrs.get(name).map(String::as_str))
    }

    /// Sets a raw attribute value.
    ///
    /// If the widget is mounted, the name is observed (see [`Attr`]), and the
    /// value actually changed, a full render pass runs before this returns —
    /// resetting the animation to its paused state. Identical values and
    /// unobserved names store without rendering. While unmounted the value
    /// stages silently and shows up in the first mount render.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        let changed = self.attrs.get(&name).map(String::as_str) != Some(value.as_str());
        let observed = Attr::from_name(&name).is_some();
        self.attrs.insert(name.clone(), value);
        if changed && observed && self.state.mounted {
            log::debug!("attribute '{name}' changed, re-rendering");
            self.render_pass();
        }
    }

    /// Removes a raw attribute, letting the field fall back to its default.
    ///
    /// Re-renders under the same gating as [`set_attribute`](Self::set_attribute);
    /// removing an attribute that was never set does nothing.
    pub fn remove_attribute(&mut self, name: &str) {
        let existed = self.attrs.remove(name).is_some();
        if existed && Attr::from_name(name).is_some() && self.state.mounted {
            log::debug!("attribute '{name}' removed, re-rendering");
            self.render_pass();
        }
    }

    /// Mounts the widget: initial render, then resize and visibility
    /// subscriptions. Mounting a mounted widget is a no-op.
    pub fn mount(&mut self) {
        if self.state.mounted {
            log::debug!("mount ignored: already mounted");
            return;
        }
        self.state.mount();
        self.render_pass();
        self.host.add_resize_listener();
        self.host.observe_visibility(VISIBILITY_THRESHOLD);
        log::debug!("mounted, awaiting visibility at threshold {VISIBILITY_THRESHOLD}");
    }

    /// Unmounts the widget, synchronously removing both subscriptions.
    ///
    /// After this returns the instance is inert: resize and visibility
    /// events, however delivered, produce no further host calls. Remounting
    /// starts a fresh cycle with the visibility watcher re-armed.
    pub fn unmount(&mut self) {
        if !self.state.mounted {
            return;
        }
        self.host.remove_resize_listener();
        self.host.unobserve_visibility();
        self.state.unmount();
        log::debug!("unmounted");
    }

    /// Viewport resize: unconditional full re-render while mounted.
    ///
    /// Deliberately rebuilds the whole document rather than reflowing, and
    /// does so regardless of visibility and without debouncing — the widget
    /// stays free of timers and internal waiting, so rapid resizes cost one
    /// synchronous pass each.
    pub fn handle_resize(&mut self) {
        if !self.state.mounted {
            return;
        }
        log::trace!("viewport resize, full re-render");
        self.render_pass();
    }

    /// One observed visibility change for the widget's element.
    ///
    /// The first entry at or above the visibility threshold while the
    /// animation has not started flips the animation to running and drops
    /// the observation (one-shot). Later entries, sub-threshold entries, and
    /// entries delivered after unmount do nothing; only an unmount/remount
    /// re-arms the watcher.
    pub fn handle_visibility(&mut self, entry: VisibilityEntry) {
        if !self.state.should_start_animation(entry) {
            return;
        }
        self.state.start_animation();
        self.host.set_play_state(PlayState::Running);
        self.host.unobserve_visibility();
        log::debug!("animation started at visibility ratio {:.2}", entry.ratio);
    }

    /// Resolve → compile → apply. The freshly applied document always
    /// carries a paused animation, so the started flag drops with it.
    fn render_pass(&mut self) {
        let config = self.config();
        let doc = render(&config);
        log::trace!(
            "render pass: <{}> preset={} background={}",
            doc.tag,
            config.preset.name,
            doc.style.background.to_css(),
        );
        self.host.apply(&doc);
        self.state.note_render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vivid_style::{Fill, Rgb, presets};

    use crate::render::RenderedHeading;

    /// Test double: records every host call in order.
    #[derive(Default)]
    struct RecordingHost {
        applied: Vec<RenderedHeading>,
        play_states: Vec<PlayState>,
        observed_thresholds: Vec<f32>,
        unobserve_calls: u32,
        resize_adds: u32,
        resize_removes: u32,
    }

    impl Host for RecordingHost {
        fn apply(&mut self, doc: &RenderedHeading) {
            self.applied.push(doc.clone());
        }
        fn set_play_state(&mut self, state: PlayState) {
            self.play_states.push(state);
        }
        fn observe_visibility(&mut self, threshold: f32) {
            self.observed_thresholds.push(threshold);
        }
        fn unobserve_visibility(&mut self) {
            self.unobserve_calls += 1;
        }
        fn add_resize_listener(&mut self) {
            self.resize_adds += 1;
        }
        fn remove_resize_listener(&mut self) {
            self.resize_removes += 1;
        }
    }

    fn widget() -> GradientHeading<RecordingHost> {
        GradientHeading::new(RecordingHost::default())
    }

    #[test]
    fn mount_renders_paused_and_registers_subscriptions() {
        let mut w = widget();
        assert!(!w.is_mounted());
        w.mount();
        let host = w.host();
        assert_eq!(host.applied.len(), 1);
        assert_eq!(host.applied[0].style.animation.play_state, PlayState::Paused);
        assert_eq!(host.resize_adds, 1);
        assert_eq!(host.observed_thresholds, vec![VISIBILITY_THRESHOLD]);
        assert!(w.is_mounted() && w.state().observing_visibility);
    }

    #[test]
    fn mounting_twice_is_inert() {
        let mut w = widget();
        w.mount();
        w.mount();
        assert_eq!(w.host().applied.len(), 1);
        assert_eq!(w.host().resize_adds, 1);
    }

    #[test]
    fn staged_attributes_reach_the_first_render_only() {
        let mut w = widget().with_attribute("text", "Hello");
        assert!(w.host().applied.is_empty(), "no host calls before mount");
        w.mount();
        assert_eq!(w.host().applied[0].text, "Hello");
    }

    #[test]
    fn attribute_change_rerenders_before_returning() {
        let mut w = widget();
        w.mount();
        w.set_attribute("font-size", "7");
        let host = w.host();
        assert_eq!(host.applied.len(), 2);
        assert_eq!(host.applied[1].style.typography.font_size_vw, 7.0);
    }

    #[test]
    fn identical_value_does_not_rerender() {
        let mut w = widget().with_attribute("text", "Hi");
        w.mount();
        w.set_attribute("text", "Hi");
        assert_eq!(w.host().applied.len(), 1);
    }

    #[test]
    fn unobserved_attribute_stores_without_rendering() {
        let mut w = widget();
        w.mount();
        w.set_attribute("data-speed", "11");
        assert_eq!(w.host().applied.len(), 1);
        assert_eq!(w.attribute("data-speed"), Some("11"));
    }

    #[test]
    fn removal_restores_the_default_and_rerenders() {
        let mut w = widget().with_attribute("text", "Hi");
        w.mount();
        w.remove_attribute("text");
        let host = w.host();
        assert_eq!(host.applied.len(), 2);
        assert_eq!(host.applied[1].text, "Vivid Flow Unleashed");
    }

    #[test]
    fn removing_an_absent_attribute_does_nothing() {
        let mut w = widget();
        w.mount();
        w.remove_attribute("text");
        assert_eq!(w.host().applied.len(), 1);
    }

    #[test]
    fn resize_rerenders_unconditionally() {
        let mut w = widget();
        w.handle_resize(); // unmounted: no-op
        w.mount();
        w.handle_resize();
        w.handle_resize();
        assert_eq!(w.host().applied.len(), 3);
    }

    #[test]
    fn visibility_trigger_starts_exactly_once() {
        let mut w = widget();
        w.mount();
        w.handle_visibility(VisibilityEntry::new(0.5));
        w.handle_visibility(VisibilityEntry::new(1.0));
        let host = w.host();
        assert_eq!(host.play_states, vec![PlayState::Running]);
        assert_eq!(host.unobserve_calls, 1);
        assert!(w.state().animation_started);
    }

    #[test]
    fn sub_threshold_entries_do_not_start() {
        let mut w = widget();
        w.mount();
        w.handle_visibility(VisibilityEntry::new(0.05));
        assert!(w.host().play_states.is_empty());
        // The threshold itself qualifies.
        w.handle_visibility(VisibilityEntry::new(VISIBILITY_THRESHOLD));
        assert_eq!(w.host().play_states, vec![PlayState::Running]);
    }

    #[test]
    fn config_change_after_start_pauses_without_rearming() {
        let mut w = widget();
        w.mount();
        w.handle_visibility(VisibilityEntry::new(0.5));
        w.set_attribute("text", "New");
        let host = w.host();
        assert_eq!(host.applied.len(), 2);
        assert_eq!(host.applied[1].style.animation.play_state, PlayState::Paused);
        assert!(!w.state().animation_started);
        // The one shot is consumed: a fresh entry does not restart.
        w.handle_visibility(VisibilityEntry::new(0.9));
        assert_eq!(w.host().play_states, vec![PlayState::Running]);
    }

    #[test]
    fn unmount_removes_both_subscriptions_and_silences_events() {
        let mut w = widget();
        w.mount();
        w.unmount();
        assert!(!w.is_mounted());
        assert_eq!(w.host().resize_removes, 1);
        assert_eq!(w.host().unobserve_calls, 1);
        assert_eq!(w.state(), LifecycleState::default());

        w.handle_resize();
        w.handle_visibility(VisibilityEntry::new(1.0));
        w.set_attribute("text", "late");
        let host = w.host();
        assert_eq!(host.applied.len(), 1, "no renders after unmount");
        assert!(host.play_states.is_empty());
    }

    #[test]
    fn remount_rearms_the_one_shot() {
        let mut w = widget();
        w.mount();
        w.handle_visibility(VisibilityEntry::new(0.5));
        w.unmount();
        w.mount();
        let host = w.host();
        assert_eq!(host.applied.len(), 2);
        assert_eq!(host.observed_thresholds.len(), 2);
        w.handle_visibility(VisibilityEntry::new(0.5));
        assert_eq!(w.host().play_states, vec![PlayState::Running, PlayState::Running]);
    }

    #[test]
    fn end_to_end_resolved_document() {
        let mut w = widget()
            .with_attribute("text", "Hi")
            .with_attribute("gradient-preset", "ocean-wave")
            .with_attribute("background-opacity", "50");
        w.mount();
        let doc = &w.host().applied[0];
        assert_eq!(doc.text, "Hi");
        assert_eq!(doc.style.gradient.stops, presets::find("ocean-wave").unwrap().stops);
        assert_eq!(
            doc.style.background,
            Fill::Blended { color: Rgb::new(0x0a, 0x3d, 0x62), alpha: 0x80 }
        );
        assert!(doc.shadow_html().contains(">Hi<"));
    }
}
