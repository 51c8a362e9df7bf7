use vivid_style::style::{CompiledStyle, GRADIENT_KEYFRAMES, GradientSpec};
use vivid_style::{HeadingConfig, compile};

/// Class carried by the heading element inside the widget's content.
pub const HEADING_CLASS: &str = "gradient-heading";

/// Name of the emitted `@keyframes` animation.
pub const ANIMATION_NAME: &str = "gradient-flow";

/// Container selector for shadow-DOM-shaped output.
pub const SHADOW_HOST_SELECTOR: &str = ":host";

// ── Render pass ───────────────────────────────────────────────────────────

/// Assemble the render-pass output for one resolved configuration.
///
/// This is the step between the pure compiler and the host: it pairs the
/// compiled style with the heading structure (tag + text) and the sanitized
/// font-request family. The host receives the whole thing through
/// [`Host::apply`](crate::host::Host::apply) and decides how to realize it.
pub fn render(config: &HeadingConfig) -> RenderedHeading {
    RenderedHeading {
        tag: config.heading_tag.clone(),
        text: config.text.clone(),
        font_request_family: config.font_request_family(),
        style: compile(config),
    }
}

/// One render pass worth of widget content: a heading element carrying the
/// gradient-fill text inside a full-viewport container.
///
/// Serialization is deliberately parameterized by the container selector:
/// shadow-DOM hosts use [`shadow_html`](Self::shadow_html) (`:host`), static
/// pages pass the selector of whatever wrapper they mounted the widget in.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedHeading {
    /// Wrapping element tag, passed through unvalidated.
    pub tag: String,
    /// Heading text, unescaped; escaping happens at HTML serialization.
    pub text: String,
    /// Whitespace-collapsed family for the font-request URL.
    pub font_request_family: String,
    pub style: CompiledStyle,
}

impl RenderedHeading {
    /// The stylesheet for this content, scoped to `container_selector`.
    pub fn stylesheet(&self, container_selector: &str) -> String {
        let t = &self.style.typography;
        let mut css = String::new();

        css.push_str(&format!("@import url('{}');\n", font_import_url(&self.font_request_family)));
        css.push('\n');

        // Full-viewport container with the resolved background fill.
        css.push_str(&format!("{container_selector} {{\n"));
        css.push_str("  width: 100vw;\n");
        css.push_str("  height: 100vh;\n");
        css.push_str("  display: flex;\n");
        css.push_str("  justify-content: center;\n");
        css.push_str("  align-items: center;\n");
        css.push_str(&format!("  background-color: {};\n", self.style.background.to_css()));
        css.push_str("  overflow: hidden;\n");
        css.push_str("}\n");
        css.push('\n');

        // The heading: gradient painted through the glyphs, animation
        // mounted in its compiled play state.
        css.push_str(&format!(".{HEADING_CLASS} {{\n"));
        css.push_str(&format!("  font-family: \"{}\", sans-serif;\n", t.font_family));
        css.push_str(&format!("  font-size: {}vw;\n", fmt_num(t.font_size_vw)));
        css.push_str(&format!("  font-weight: {};\n", t.font_weight));
        css.push_str(&format!("  line-height: {}px;\n", t.line_height_px));
        css.push_str(&format!("  letter-spacing: {}px;\n", t.letter_spacing_px));
        css.push_str(&format!("  text-align: {};\n", t.text_align));
        css.push_str(&format!("  background: {};\n", gradient_css(&self.style.gradient)));
        css.push_str("  -webkit-background-clip: text;\n");
        css.push_str("  background-clip: text;\n");
        css.push_str("  -webkit-text-fill-color: transparent;\n");
        css.push_str(&format!(
            "  background-size: {s}% {s}%;\n",
            s = fmt_num(self.style.gradient.size_percent)
        ));
        css.push_str(&format!(
            "  animation: {ANIMATION_NAME} {}s linear infinite;\n",
            fmt_num(self.style.animation.duration_secs)
        ));
        css.push_str(&format!(
            "  animation-play-state: {};\n",
            self.style.animation.play_state.as_css()
        ));
        css.push_str("  margin: 0;\n");
        css.push_str("}\n");
        css.push('\n');

        css.push_str(&keyframes_css());
        css
    }

    /// The full content fragment: `<style>` plus the heading element, scoped
    /// to `container_selector`. Heading text is HTML-escaped here.
    pub fn to_html(&self, container_selector: &str) -> String {
        format!(
            "<style>\n{}</style>\n<{tag} class=\"{HEADING_CLASS}\">{text}</{tag}>\n",
            self.stylesheet(container_selector),
            tag = self.tag,
            text = escape_text(&self.text),
        )
    }

    /// Shadow-DOM-shaped serialization, container styled via `:host`.
    pub fn shadow_html(&self) -> String {
        self.to_html(SHADOW_HOST_SELECTOR)
    }
}

// ── Serialization helpers ─────────────────────────────────────────────────

/// Font-request URL for the external font path, weight range and
/// `display=swap` exactly as the widget has always requested them.
fn font_import_url(request_family: &str) -> String {
    format!("https://fonts.googleapis.com/css2?family={request_family}:wght@100..900&display=swap")
}

fn gradient_css(gradient: &GradientSpec) -> String {
    let stops: Vec<String> = gradient.stops.iter().map(|c| c.to_hex()).collect();
    format!("linear-gradient({}deg, {})", fmt_num(gradient.angle_deg), stops.join(", "))
}

fn keyframes_css() -> String {
    let mut css = format!("@keyframes {ANIMATION_NAME} {{\n");
    for kf in GRADIENT_KEYFRAMES {
        css.push_str(&format!(
            "  {}% {{ background-position: {}% {}%; }}\n",
            fmt_num(kf.offset),
            fmt_num(kf.position_x),
            fmt_num(kf.position_y),
        ));
    }
    css.push_str("}\n");
    css
}

/// Whole-valued floats print without a fractional part (`8` not `8.0`),
/// matching how the attribute values read.
fn fmt_num(v: f32) -> String {
    if v == v.trunc() && v.abs() < 1e9 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Minimal escaping for heading text interpolated into markup.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
