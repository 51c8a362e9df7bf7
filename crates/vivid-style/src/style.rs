use crate::color::{Rgb, alpha_byte};
use crate::config::HeadingConfig;

// ── Fixed gradient geometry ───────────────────────────────────────────────

/// Diagonal gradient orientation, fixed for every configuration.
pub const GRADIENT_ANGLE_DEG: f32 = 45.0;

/// Background oversizing (percent of the element per axis) that gives the
/// position animation room to traverse.
pub const GRADIENT_SIZE_PERCENT: f32 = 300.0;

/// One step of the gradient animation: cycle offset → background position,
/// all in percent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientKeyframe {
    pub offset: f32,
    pub position_x: f32,
    pub position_y: f32,
}

/// The animation path: slide the oversized gradient from left to right and
/// back across one cycle.
pub const GRADIENT_KEYFRAMES: [GradientKeyframe; 3] = [
    GradientKeyframe { offset: 0.0, position_x: 0.0, position_y: 50.0 },
    GradientKeyframe { offset: 50.0, position_x: 100.0, position_y: 50.0 },
    GradientKeyframe { offset: 100.0, position_x: 0.0, position_y: 50.0 },
];

// ── Descriptor types ──────────────────────────────────────────────────────

/// Background fill for the full-viewport container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Full opacity: the resolved color passes through unblended.
    Solid(Rgb),
    /// Translucent: color plus the saturated alpha byte for the blend.
    Blended { color: Rgb, alpha: u8 },
}

impl Fill {
    /// CSS color text: `#rrggbb` for solid, `#rrggbbaa` for blended.
    pub fn to_css(self) -> String {
        match self {
            Fill::Solid(c) => c.to_hex(),
            Fill::Blended { color, alpha } => {
                format!("{}{:02x}", color.to_hex(), alpha)
            }
        }
    }
}

/// The resolved typography block, unit-tagged per field.
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub font_family: String,
    pub font_size_vw: f32,
    pub font_weight: i32,
    pub line_height_px: i32,
    pub letter_spacing_px: i32,
    /// Passthrough alignment keyword.
    pub text_align: String,
}

/// The gradient to paint through the glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpec {
    pub angle_deg: f32,
    /// Resolved preset stops, in declared order.
    pub stops: &'static [Rgb],
    pub size_percent: f32,
}

/// Animation play state. Every compiled style starts paused; the lifecycle
/// controller flips it to running on first visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Paused,
    Running,
}

impl PlayState {
    pub fn as_css(self) -> &'static str {
        match self {
            PlayState::Paused => "paused",
            PlayState::Running => "running",
        }
    }
}

/// The gradient-drift animation declaration: linear ease, infinite repeat,
/// keyframes from [`GRADIENT_KEYFRAMES`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_secs: f32,
    pub play_state: PlayState,
}

/// Everything the render step needs to present one configuration.
///
/// Compiling is a pure transform — equal configurations compile to equal
/// descriptors. Serialization to stylesheet text is the render step's
/// concern, not this one's.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledStyle {
    pub background: Fill,
    pub typography: Typography,
    pub gradient: GradientSpec,
    pub animation: AnimationSpec,
}

// ── Compiler ──────────────────────────────────────────────────────────────

/// Compile a resolved configuration into a presentation descriptor.
pub fn compile(config: &HeadingConfig) -> CompiledStyle {
    let fraction = config.background_opacity_fraction();
    let background = if fraction >= 1.0 {
        Fill::Solid(config.background_color)
    } else {
        Fill::Blended {
            color: config.background_color,
            alpha: alpha_byte(fraction),
        }
    };

    CompiledStyle {
        background,
        typography: Typography {
            font_family: config.font_family.clone(),
            font_size_vw: config.font_size,
            font_weight: config.font_weight,
            line_height_px: config.line_height,
            letter_spacing_px: config.letter_spacing,
            text_align: config.text_alignment.clone(),
        },
        gradient: GradientSpec {
            angle_deg: GRADIENT_ANGLE_DEG,
            stops: config.preset.stops,
            size_percent: GRADIENT_SIZE_PERCENT,
        },
        animation: AnimationSpec {
            duration_secs: config.animation_duration,
            play_state: PlayState::Paused,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    fn config_with(pairs: &[(&str, &str)]) -> HeadingConfig {
        HeadingConfig::resolve(|name| {
            pairs.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
        })
    }

    #[test]
    fn full_opacity_passes_the_color_through_solid() {
        let style = compile(&config_with(&[]));
        assert_eq!(style.background, Fill::Solid(Rgb::new(0x0a, 0x3d, 0x62)));
        assert_eq!(style.background.to_css(), "#0a3d62");
    }

    #[test]
    fn half_opacity_blends_to_alpha_0x80() {
        let style = compile(&config_with(&[("background-opacity", "50")]));
        assert_eq!(
            style.background,
            Fill::Blended { color: Rgb::new(0x0a, 0x3d, 0x62), alpha: 0x80 }
        );
        assert_eq!(style.background.to_css(), "#0a3d6280");
    }

    #[test]
    fn over_full_opacity_renders_solid() {
        let style = compile(&config_with(&[("background-opacity", "150")]));
        assert_eq!(style.background, Fill::Solid(Rgb::new(0x0a, 0x3d, 0x62)));
    }

    #[test]
    fn negative_opacity_saturates_transparent() {
        let style = compile(&config_with(&[("background-opacity", "-20")]));
        assert_eq!(
            style.background,
            Fill::Blended { color: Rgb::new(0x0a, 0x3d, 0x62), alpha: 0 }
        );
    }

    #[test]
    fn stops_equal_the_resolved_preset_entry_in_order() {
        for preset in presets::PRESETS {
            let style = compile(&config_with(&[("gradient-preset", preset.name)]));
            assert_eq!(style.gradient.stops, preset.stops);
        }
    }

    #[test]
    fn unknown_preset_compiles_with_default_stops() {
        let style = compile(&config_with(&[("gradient-preset", "molten-core")]));
        assert_eq!(style.gradient.stops, presets::default_preset().stops);
    }

    #[test]
    fn animation_starts_paused_with_configured_duration() {
        let style = compile(&config_with(&[("animation-duration", "12.5")]));
        assert_eq!(style.animation.duration_secs, 12.5);
        assert_eq!(style.animation.play_state, PlayState::Paused);
    }

    #[test]
    fn gradient_geometry_is_fixed() {
        let style = compile(&config_with(&[]));
        assert_eq!(style.gradient.angle_deg, 45.0);
        assert_eq!(style.gradient.size_percent, 300.0);
        assert_eq!(GRADIENT_KEYFRAMES[1].position_x, 100.0);
    }

    #[test]
    fn equal_configs_compile_to_equal_descriptors() {
        let attrs = [("text", "Hi"), ("background-opacity", "50")];
        let a = compile(&config_with(&attrs));
        let b = compile(&config_with(&attrs));
        assert_eq!(a, b);
    }

    #[test]
    fn non_finite_tokens_compile_to_default_fields() {
        // A NaN in any field would make equal inputs compile unequal.
        let attrs = [("animation-duration", "nan"), ("font-size", "inf")];
        let a = compile(&config_with(&attrs));
        let b = compile(&config_with(&attrs));
        assert_eq!(a, b);
        assert_eq!(a.animation.duration_secs, 8.0);
        assert_eq!(a.typography.font_size_vw, 5.0);
    }
}
