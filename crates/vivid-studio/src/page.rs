use vivid_widget::{Host, PlayState, RenderedHeading};

/// One full-viewport demo slot backed by a class-named `<section>`.
///
/// Implements [`Host`] by recording the latest applied document and patching
/// the animation play state in place — the way a DOM host flips
/// `animation-play-state` on live content instead of rebuilding it.
/// Serialization reuses the widget's own renderer with the section's class
/// as the container selector.
pub struct StaticPage {
    section_class: String,
    applied: Option<RenderedHeading>,
    renders: u32,
}

impl StaticPage {
    pub fn new(section_class: impl Into<String>) -> Self {
        Self {
            section_class: section_class.into(),
            applied: None,
            renders: 0,
        }
    }

    /// How many documents the widget has applied to this slot.
    pub fn renders(&self) -> u32 {
        self.renders
    }

    /// Play state of the currently applied content, if any.
    pub fn play_state(&self) -> Option<PlayState> {
        self.applied.as_ref().map(|doc| doc.style.animation.play_state)
    }

    /// `<section>` markup carrying the widget fragment, styled through the
    /// section's class selector. An empty slot serializes as an empty
    /// section so the page keeps its scroll rhythm.
    pub fn section_html(&self) -> String {
        let class = &self.section_class;
        match &self.applied {
            Some(doc) => format!(
                "<section class=\"{class}\">\n{}</section>\n",
                doc.to_html(&format!(".{class}"))
            ),
            None => format!("<section class=\"{class}\"></section>\n"),
        }
    }
}

impl Host for StaticPage {
    fn apply(&mut self, doc: &RenderedHeading) {
        self.applied = Some(doc.clone());
        self.renders += 1;
    }

    fn set_play_state(&mut self, state: PlayState) {
        if let Some(doc) = &mut self.applied {
            doc.style.animation.play_state = state;
        }
    }
}

/// Assemble the self-contained demo page from every section in order.
pub fn document(title: &str, pages: &[&StaticPage]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("<style>body { margin: 0; }</style>\n");
    html.push_str("</head>\n<body>\n");
    for page in pages {
        html.push_str(&page.section_html());
    }
    html.push_str("</body>\n</html>\n");
    html
}
