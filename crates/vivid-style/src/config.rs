use std::str::FromStr;

use crate::color::Rgb;
use crate::presets::{self, Preset};

// ── Attr ──────────────────────────────────────────────────────────────────

/// The observed attribute set: every declarative knob the widget reacts to.
///
/// Wire names are kebab-case, exactly as they appear on the host element.
/// Anything outside this set may be stored by a host but never affects the
/// resolved configuration and never triggers a render.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Attr {
    Text,
    HeadingTag,
    BackgroundColor,
    BackgroundOpacity,
    FontSize,
    FontFamily,
    FontWeight,
    LineHeight,
    LetterSpacing,
    AnimationDuration,
    TextAlignment,
    GradientPreset,
}

impl Attr {
    /// All observed attributes, in schema order.
    pub const ALL: [Attr; 12] = [
        Attr::Text,
        Attr::HeadingTag,
        Attr::BackgroundColor,
        Attr::BackgroundOpacity,
        Attr::FontSize,
        Attr::FontFamily,
        Attr::FontWeight,
        Attr::LineHeight,
        Attr::LetterSpacing,
        Attr::AnimationDuration,
        Attr::TextAlignment,
        Attr::GradientPreset,
    ];

    /// The attribute's wire name.
    pub fn name(self) -> &'static str {
        match self {
            Attr::Text => "text",
            Attr::HeadingTag => "heading-tag",
            Attr::BackgroundColor => "background-color",
            Attr::BackgroundOpacity => "background-opacity",
            Attr::FontSize => "font-size",
            Attr::FontFamily => "font-family",
            Attr::FontWeight => "font-weight",
            Attr::LineHeight => "line-height",
            Attr::LetterSpacing => "letter-spacing",
            Attr::AnimationDuration => "animation-duration",
            Attr::TextAlignment => "text-alignment",
            Attr::GradientPreset => "gradient-preset",
        }
    }

    /// Reverse lookup from a wire name. `None` means the name is unobserved.
    pub fn from_name(name: &str) -> Option<Attr> {
        Attr::ALL.into_iter().find(|a| a.name() == name)
    }
}

// ── HeadingConfig ─────────────────────────────────────────────────────────

/// The fully resolved configuration for one render pass.
///
/// Every field is defaulted, so a widget with zero attributes set is always
/// renderable. Defaults:
///
/// | attribute | default |
/// |---|---|
/// | `text` | `"Vivid Flow Unleashed"` |
/// | `heading-tag` | `"h2"` |
/// | `background-color` | `#0A3D62` |
/// | `background-opacity` | `100` (percent, not clamped) |
/// | `font-size` | `5` (vw) |
/// | `font-family` | `"Montserrat"` |
/// | `font-weight` | `700` |
/// | `line-height` | `120` (px) |
/// | `letter-spacing` | `5` (px) |
/// | `animation-duration` | `8` (seconds) |
/// | `text-alignment` | `"center"` (passthrough) |
/// | `gradient-preset` | `"vivid-flow"` |
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingConfig {
    pub text: String,
    pub heading_tag: String,
    pub background_color: Rgb,
    /// Percentage as given. Intended range is `0..=100` but out-of-range
    /// values pass through; blending saturates when encoding the alpha byte.
    pub background_opacity: f32,
    /// In vw units.
    pub font_size: f32,
    pub font_family: String,
    pub font_weight: i32,
    /// In px.
    pub line_height: i32,
    /// In px.
    pub letter_spacing: i32,
    /// In seconds.
    pub animation_duration: f32,
    /// Passed through unvalidated; the host fails soft on nonsense values.
    pub text_alignment: String,
    /// Resolved preset entry; unknown keys already fell back to the default.
    pub preset: &'static Preset,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            text: "Vivid Flow Unleashed".to_string(),
            heading_tag: "h2".to_string(),
            background_color: Rgb::new(0x0a, 0x3d, 0x62),
            background_opacity: 100.0,
            font_size: 5.0,
            font_family: "Montserrat".to_string(),
            font_weight: 700,
            line_height: 120,
            letter_spacing: 5,
            animation_duration: 8.0,
            text_alignment: "center".to_string(),
            preset: presets::default_preset(),
        }
    }
}

impl HeadingConfig {
    /// Resolve a configuration from raw attribute values.
    ///
    /// `lookup` returns the current raw string for a wire name, or `None`
    /// when the attribute is absent. Resolution folds the same reducer
    /// ([`with_raw`](Self::with_raw)) over every observed attribute, so a
    /// full resolve and a single-attribute update can never disagree.
    pub fn resolve<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        Attr::ALL
            .into_iter()
            .fold(Self::default(), |cfg, attr| cfg.with_raw(attr, lookup(attr.name())))
    }

    /// The reducer: apply one raw attribute value to a configuration.
    ///
    /// Invoked uniformly regardless of which key changed. Malformed and
    /// absent values substitute the field default — never an error. Empty
    /// strings count as absent, matching the source element's behavior for
    /// string-valued attributes; an explicit numeric `"0"` is kept, and
    /// non-finite float tokens (`"nan"`, `"inf"`) count as malformed.
    pub fn with_raw(mut self, attr: Attr, raw: Option<&str>) -> Self {
        let d = Self::default();
        match attr {
            Attr::Text => self.text = str_or(raw, &d.text),
            Attr::HeadingTag => self.heading_tag = str_or(raw, &d.heading_tag),
            Attr::BackgroundColor => {
                self.background_color = parse_or(raw, d.background_color);
            }
            Attr::BackgroundOpacity => {
                self.background_opacity = parse_f32_or(raw, d.background_opacity);
            }
            Attr::FontSize => self.font_size = parse_f32_or(raw, d.font_size),
            Attr::FontFamily => self.font_family = str_or(raw, &d.font_family),
            Attr::FontWeight => self.font_weight = parse_or(raw, d.font_weight),
            Attr::LineHeight => self.line_height = parse_or(raw, d.line_height),
            Attr::LetterSpacing => self.letter_spacing = parse_or(raw, d.letter_spacing),
            Attr::AnimationDuration => {
                self.animation_duration = parse_f32_or(raw, d.animation_duration);
            }
            Attr::TextAlignment => self.text_alignment = str_or(raw, &d.text_alignment),
            Attr::GradientPreset => {
                // Verbatim, case-sensitive lookup; unknown keys fall back.
                self.preset = presets::resolve(raw.unwrap_or_default());
            }
        }
        self
    }

    /// Background opacity as a unit fraction for blending (`percent / 100`).
    ///
    /// Not clamped; out-of-range percentages propagate and saturate at the
    /// alpha-byte encoding instead.
    #[inline]
    pub fn background_opacity_fraction(&self) -> f32 {
        self.background_opacity / 100.0
    }

    /// Family name prepared for the external font-request path: whitespace
    /// runs collapse to a single `+` join character.
    ///
    /// This is only for composing the font-request URL — the stored
    /// [`font_family`](Self::font_family) keeps its spaces for local
    /// stylistic use.
    pub fn font_request_family(&self) -> String {
        self.font_family.split_whitespace().collect::<Vec<_>>().join("+")
    }
}

// ── Reducer helpers ───────────────────────────────────────────────────────

/// String attributes: present and non-empty wins, anything else defaults.
fn str_or(raw: Option<&str>, default: &str) -> String {
    match raw {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

/// Numeric attributes: trimmed full-string parse, default on any failure.
///
/// Also covers `background-color` via `Rgb: FromStr`. Parse failure is the
/// *only* substitution trigger for parseable types — `"0"` resolves to 0.
fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

/// Float attributes: as [`parse_or`], plus a finite check. `"nan"` and
/// `"inf"` parse under `FromStr` but substitute the default anyway; a
/// resolved configuration never carries a non-finite value.
fn parse_f32_or(raw: Option<&str>, default: f32) -> f32 {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}
