use gpui_dashboard::{
    dashboard::{self, ArrangedSection},
    layout::{Breakpoints, FailurePolicy, ViewportObserver},
    theme::{ColorMode, ThemeConfig},
};
use tracing_subscriber::EnvFilter;

const WIDTHS: [f32; 5] = [375., 640., 800., 1024., 1440.];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let theme = ThemeConfig::builtin();
    let page = dashboard::page();
    let breakpoints = Breakpoints::default();

    println!("{}", serde_json::to_string_pretty(&page)?);

    let observer = ViewportObserver::new(breakpoints.clone(), 0.);
    let _subscription = observer.subscribe({
        let page = page.clone();
        let breakpoints = breakpoints.clone();
        move |viewport| {
            match page.arrange(viewport.width_px, &breakpoints, FailurePolicy::default()) {
                Ok(arrangement) => {
                    println!(
                        "\n{}px -> {} ({} rows, content {}px)",
                        viewport.width_px,
                        arrangement.placement.breakpoint,
                        arrangement.placement.rows(),
                        arrangement.content_width_px
                    );
                    for (slot, sections) in &arrangement.columns {
                        let cell = arrangement.placement.cell(slot.as_str());
                        let span = cell.map_or(0., |cell| cell.columns);
                        println!("  {slot}: {span} columns");
                        for section in sections {
                            match section {
                                ArrangedSection::Card(id) => println!("    card {id}"),
                                ArrangedSection::SimpleGrid { cols, stacks } => {
                                    println!("    grid of {cols} across {} stacks", stacks.len())
                                }
                                ArrangedSection::Group { wrap, cards } => {
                                    println!("    group ({}) of {}", wrap.css_value(), cards.len())
                                }
                            }
                        }
                    }
                }
                Err(err) => tracing::error!("could not arrange dashboard: {err}"),
            }
        }
    });

    for width in WIDTHS {
        observer.set_width(width);
    }

    let resolver = theme.resolver();
    for mode in ColorMode::ALL {
        println!(
            "\nprimary ({}): {}",
            mode.name(),
            resolver.resolve_token("primary", mode)?
        );
    }

    print!("\n{}", resolver.render_stylesheet()?);

    Ok(())
}
