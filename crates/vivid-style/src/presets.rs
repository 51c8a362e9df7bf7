use crate::color::Rgb;

// ── Preset ────────────────────────────────────────────────────────────────

/// A named, fixed, ordered list of gradient color stops.
///
/// Presets are `'static` data shared by reference between widget instances;
/// there is no mutation API. Every entry carries at least four stops so the
/// animated gradient has room to travel.
#[derive(Debug, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub stops: &'static [Rgb],
}

/// Key of the designated fallback entry.
///
/// `vivid-flow` is the widget's original fixed four-stop gradient; unknown
/// and absent `gradient-preset` values resolve to it.
pub const DEFAULT_PRESET: &str = "vivid-flow";

/// The preset table. Keys are unique and looked up verbatim (case-sensitive).
pub static PRESETS: &[Preset] = &[
    Preset {
        name: "vivid-flow",
        stops: &[
            Rgb::new(0x1a, 0x75, 0x9f),
            Rgb::new(0xee, 0x6c, 0x4d),
            Rgb::new(0x3d, 0x40, 0x5b),
            Rgb::new(0xa6, 0x63, 0xcc),
        ],
    },
    Preset {
        name: "ocean-wave",
        stops: &[
            Rgb::new(0x05, 0x66, 0x8d),
            Rgb::new(0x02, 0x80, 0x90),
            Rgb::new(0x00, 0xa8, 0x96),
            Rgb::new(0x02, 0xc3, 0x9a),
            Rgb::new(0xf0, 0xf3, 0xbd),
        ],
    },
    Preset {
        name: "sunset-blaze",
        stops: &[
            Rgb::new(0xff, 0x9e, 0x00),
            Rgb::new(0xff, 0x6d, 0x00),
            Rgb::new(0xf7, 0x25, 0x85),
            Rgb::new(0x72, 0x09, 0xb7),
        ],
    },
    Preset {
        name: "aurora-veil",
        stops: &[
            Rgb::new(0x00, 0xf5, 0xd4),
            Rgb::new(0x00, 0xbb, 0xf9),
            Rgb::new(0x9b, 0x5d, 0xe5),
            Rgb::new(0xf1, 0x5b, 0xb5),
        ],
    },
    Preset {
        name: "golden-hour",
        stops: &[
            Rgb::new(0xff, 0xd1, 0x66),
            Rgb::new(0xf4, 0xa2, 0x61),
            Rgb::new(0xe7, 0x6f, 0x51),
            Rgb::new(0xd6, 0x28, 0x28),
        ],
    },
    Preset {
        name: "neon-pulse",
        stops: &[
            Rgb::new(0x00, 0xf0, 0xff),
            Rgb::new(0x39, 0xff, 0x14),
            Rgb::new(0xff, 0xe9, 0x00),
            Rgb::new(0xff, 0x2e, 0xcc),
        ],
    },
    Preset {
        name: "berry-crush",
        stops: &[
            Rgb::new(0x74, 0x00, 0xb8),
            Rgb::new(0x69, 0x30, 0xc3),
            Rgb::new(0x5e, 0x60, 0xce),
            Rgb::new(0xff, 0x5d, 0x8f),
        ],
    },
    Preset {
        name: "deep-space",
        stops: &[
            Rgb::new(0x03, 0x04, 0x5e),
            Rgb::new(0x02, 0x3e, 0x8a),
            Rgb::new(0x00, 0x77, 0xb6),
            Rgb::new(0x90, 0xe0, 0xef),
        ],
    },
];

/// Look up a preset by exact key.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

/// Look up a preset, falling back to the default entry for unknown keys.
///
/// This is the resolution the configuration resolver uses: an absent or
/// unrecognized `gradient-preset` never produces an error, only the
/// designated default gradient.
pub fn resolve(name: &str) -> &'static Preset {
    find(name).unwrap_or_else(default_preset)
}

/// The designated default entry.
pub fn default_preset() -> &'static Preset {
    // The table is static and always contains DEFAULT_PRESET; enforced by test.
    find(DEFAULT_PRESET).expect("preset table contains its default entry")
}
