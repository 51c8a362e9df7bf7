use anyhow::{Context, Result};

use vivid_style::PRESETS;
use vivid_widget::{GradientHeading, LoggingConfig, VisibilityEntry, init_logging};

mod page;

use page::StaticPage;

/// Output path for the assembled demo page.
const DEMO_PATH: &str = "vivid-demo.html";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Startup banner — printed before the session log.
    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║       VIVID GRADIENT STUDIO v0.1       ║");
    println!("  ║   vivid-widget · static page host      ║");
    println!("  ╠════════════════════════════════════════╣");
    println!("  ║  One scroll session, three headings.   ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let names: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
    println!("  Presets on board: {}", names.join(", "));
    println!();

    // ── Page load ─────────────────────────────────────────────────────────
    let mut hero = GradientHeading::new(StaticPage::new("stage-hero"))
        .with_attribute("heading-tag", "h1")
        .with_attribute("font-size", "7");
    let mut ocean = GradientHeading::new(StaticPage::new("stage-ocean"))
        .with_attribute("text", "Deep Currents")
        .with_attribute("gradient-preset", "ocean-wave")
        .with_attribute("background-color", "#023047")
        .with_attribute("background-opacity", "85")
        .with_attribute("animation-duration", "12");
    let mut neon = GradientHeading::new(StaticPage::new("stage-neon"))
        .with_attribute("text", "Night Shift")
        .with_attribute("gradient-preset", "neon-pulse")
        .with_attribute("background-color", "#10002b")
        .with_attribute("font-family", "Space Grotesk")
        .with_attribute("letter-spacing", "12")
        .with_attribute("text-alignment", "left");

    hero.mount();
    ocean.mount();
    neon.mount();
    println!("  [MOUNT]  3 headings rendered paused, observers armed.");

    // The window settles before anyone scrolls; every heading rebuilds.
    hero.handle_resize();
    ocean.handle_resize();
    neon.handle_resize();
    println!("  [RESIZE] viewport settled            >  3 full re-renders");

    // ── Scroll session ────────────────────────────────────────────────────
    hero.handle_visibility(VisibilityEntry::new(1.0));
    println!("  [VIEW]   hero fully in view          >  animation {}", status(&hero));

    ocean.handle_visibility(VisibilityEntry::new(0.35));
    println!("  [SCROLL] ocean 35% visible           >  animation {}", status(&ocean));

    neon.handle_visibility(VisibilityEntry::new(0.04));
    println!("  [SCROLL] neon 4%, under threshold    >  animation {}", status(&neon));

    // Last-minute copy tweak while the neon heading is still pending; the
    // re-render stays paused and keeps its one shot.
    neon.set_attribute("text", "Night Shift Online");
    println!("  [ATTR]   neon copy updated           >  re-rendered, animation {}", status(&neon));

    neon.handle_visibility(VisibilityEntry::new(0.6));
    println!("  [SCROLL] neon 60% visible            >  animation {}", status(&neon));

    // Scrolling back up delivers another hero entry; the trigger is spent.
    hero.handle_visibility(VisibilityEntry::new(1.0));
    println!("  [SCROLL] hero revisited              >  one shot already spent");

    // ── Write the page ────────────────────────────────────────────────────
    let sections = [hero.host(), ocean.host(), neon.host()];
    let html = page::document("vivid — animated gradient headings", &sections);
    std::fs::write(DEMO_PATH, &html)
        .with_context(|| format!("writing demo page to {DEMO_PATH}"))?;

    for (label, section) in ["hero", "ocean", "neon"].into_iter().zip(sections) {
        log::debug!(
            "{label}: {} renders, shipped {:?}",
            section.renders(),
            section.play_state(),
        );
    }

    println!();
    println!("  Demo page written to {DEMO_PATH} — open it in a browser.");
    println!();
    Ok(())
}

fn status(heading: &GradientHeading<StaticPage>) -> &'static str {
    if heading.state().animation_started { "RUNNING" } else { "paused" }
}
