/// Minimum intersection ratio that counts as visible for animation start.
///
/// Deliberately low: the gradient should already be moving by the time a
/// meaningful part of the heading scrolls into view.
pub const VISIBILITY_THRESHOLD: f32 = 0.1;

/// One observed visibility change for the widget's element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VisibilityEntry {
    /// Fraction of the element's area inside the viewport, `0.0..=1.0`.
    pub ratio: f32,
}

impl VisibilityEntry {
    #[inline]
    pub fn new(ratio: f32) -> Self {
        Self { ratio }
    }

    /// Whether this entry counts as intersecting at the widget's threshold.
    #[inline]
    pub fn is_intersecting(self) -> bool {
        self.ratio >= VISIBILITY_THRESHOLD
    }
}

/// Per-instance lifecycle flags. Owned by the widget, reset on unmount.
///
/// State machine: `Unmounted → Mounted(pending) → Mounted(running) →
/// Unmounted`. `animation_started` goes false→true at most once per mount
/// cycle; every render pass resets it to false (the re-applied content is
/// paused again). `observing_visibility` is the one-shot guard: it drops on
/// first trigger and is only re-armed by an unmount/remount, never by a
/// render pass.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LifecycleState {
    pub mounted: bool,
    pub animation_started: bool,
    pub observing_visibility: bool,
}

impl LifecycleState {
    pub fn mount(&mut self) {
        self.mounted = true;
        self.animation_started = false;
        self.observing_visibility = true;
    }

    pub fn unmount(&mut self) {
        *self = Self::default();
    }

    /// Record a completed render pass: the freshly applied animation is
    /// paused, so the started flag drops.
    pub fn note_render(&mut self) {
        self.animation_started = false;
    }

    /// One-shot trigger decision: should this entry start the animation?
    ///
    /// True exactly when the instance is mounted, still observing, has not
    /// started yet, and the entry clears the threshold. Pure so the trigger
    /// logic is testable without any host.
    #[inline]
    pub fn should_start_animation(&self, entry: VisibilityEntry) -> bool {
        self.mounted
            && self.observing_visibility
            && !self.animation_started
            && entry.is_intersecting()
    }

    /// Consume the one shot: mark the animation started and stop observing.
    pub fn start_animation(&mut self) {
        self.animation_started = true;
        self.observing_visibility = false;
    }
}
