use std::fmt;
use std::str::FromStr;

// ── Rgb ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color parsed from a `#rrggbb` attribute value.
///
/// This is deliberately *not* an alpha-carrying type: the widget's background
/// opacity arrives as a separate percentage attribute, and alpha is applied
/// at blend time via [`to_hex_with_alpha`](Self::to_hex_with_alpha) or
/// [`to_css_rgba`](Self::to_css_rgba). When opacity is full the color passes
/// through in its plain [`to_hex`](Self::to_hex) form.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Blend with an opacity fraction into an 8-digit `#rrggbbaa` form.
    ///
    /// The alpha byte is `round(fraction × 255)` saturated into `0..=255`,
    /// so out-of-range fractions degrade to fully transparent or fully
    /// opaque instead of producing malformed color text.
    pub fn to_hex_with_alpha(self, fraction: f32) -> String {
        format!("{}{:02x}", self.to_hex(), alpha_byte(fraction))
    }

    /// The same blend as an `rgba(r, g, b, a)` channel decomposition.
    ///
    /// `a` is emitted as the saturated byte divided back into a unit
    /// fraction, so both encodings agree to within rounding.
    pub fn to_css_rgba(self, fraction: f32) -> String {
        let a = f32::from(alpha_byte(fraction)) / 255.0;
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, a)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Saturating alpha-byte encoding of an opacity fraction.
///
/// `0.5 → 0x80`, `1.0 → 0xff`; fractions outside `[0, 1]` clamp to the
/// nearest end rather than overflowing into extra hex digits.
#[inline]
pub fn alpha_byte(fraction: f32) -> u8 {
    (fraction * 255.0).round().clamp(0.0, 255.0) as u8
}

// ── Parsing ───────────────────────────────────────────────────────────────

/// Error from parsing a `#rrggbb` color string.
///
/// The configuration resolver never surfaces this — malformed attribute
/// values are silently replaced with the field default — but the parser is
/// public, so callers composing colors directly get a real error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    pub input: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color must be #rrggbb (6 hex digits), got {:?}", self.input)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError { input: s.to_string() };

        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        // Validated above: 2 hex digits always fit in a u8.
        let r = u8::from_str_radix(&hex[0..2], 16).expect("validated hex digits");
        let g = u8::from_str_radix(&hex[2..4], 16).expect("validated hex digits");
        let b = u8::from_str_radix(&hex[4..6], 16).expect("validated hex digits");
        Ok(Self { r, g, b })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_6_digit() {
        assert_eq!("#0A3D62".parse::<Rgb>().unwrap(), Rgb::new(0x0a, 0x3d, 0x62));
    }

    #[test]
    fn parse_is_case_insensitive_on_digits() {
        assert_eq!("#a663cc".parse::<Rgb>().unwrap(), "#A663CC".parse::<Rgb>().unwrap());
    }

    #[test]
    fn parse_rejects_missing_hash() {
        "0A3D62".parse::<Rgb>().unwrap_err();
    }

    #[test]
    fn parse_rejects_wrong_length() {
        "#fff".parse::<Rgb>().unwrap_err();
        "#aabbccdd".parse::<Rgb>().unwrap_err();
    }

    #[test]
    fn parse_rejects_non_hex() {
        "#gghhii".parse::<Rgb>().unwrap_err();
    }

    #[test]
    fn hex_roundtrip_is_lowercase() {
        assert_eq!("#0A3D62".parse::<Rgb>().unwrap().to_hex(), "#0a3d62");
    }

    #[test]
    fn half_opacity_encodes_0x80() {
        // round(0.5 × 255) = 128
        let c = Rgb::new(0x0a, 0x3d, 0x62);
        assert_eq!(c.to_hex_with_alpha(0.5), "#0a3d6280");
    }

    #[test]
    fn full_opacity_encodes_0xff() {
        assert_eq!(Rgb::new(0, 0, 0).to_hex_with_alpha(1.0), "#000000ff");
    }

    #[test]
    fn out_of_range_fractions_saturate() {
        let c = Rgb::new(0x10, 0x20, 0x30);
        assert_eq!(c.to_hex_with_alpha(1.5), "#102030ff");
        assert_eq!(c.to_hex_with_alpha(-0.2), "#10203000");
    }

    #[test]
    fn rgba_decomposition_matches_byte_encoding() {
        let c = Rgb::new(10, 61, 98);
        assert_eq!(c.to_css_rgba(0.5), "rgba(10, 61, 98, 0.502)");
        assert_eq!(c.to_css_rgba(0.0), "rgba(10, 61, 98, 0.000)");
    }
}
