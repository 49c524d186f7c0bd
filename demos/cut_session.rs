//! Headless cutting session.
//!
//! Feeds a scripted sequence of pointer points through the engine, then
//! prints the folded shape and the unfolded flake as an SVG document.
//!
//! ```text
//! cargo run --example cut_session                 # default (corners)
//! cargo run --example cut_session -- notches      # another script
//! RUST_LOG=flakecut=debug cargo run --example cut_session
//! ```

use flakecut::{Flake, FlakeRenderer, FoldParams, Point2, PointerOutcome};

/// Collects drawing calls as SVG elements.
#[derive(Default)]
struct SvgRenderer {
    elements: Vec<String>,
}

fn points_attr(points: &[Point2]) -> String {
    points
        .iter()
        .map(|p| format!("{:.3},{:.3}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

impl FlakeRenderer for SvgRenderer {
    fn draw_folded(&mut self, vertices: &[Point2]) {
        self.elements.push(format!(
            r#"<polygon points="{}" fill="none" stroke="red"/>"#,
            points_attr(vertices)
        ));
    }

    fn draw_cut(&mut self, points: &[Point2]) {
        self.elements.push(format!(
            r#"<polyline points="{}" fill="none" stroke="blue"/>"#,
            points_attr(points)
        ));
    }

    fn draw_unfolded(&mut self, sections: &[Vec<Point2>]) {
        for section in sections {
            self.elements.push(format!(
                r#"<polygon points="{}" fill="white"/>"#,
                points_attr(section)
            ));
        }
    }
}

fn script(name: &str) -> Vec<(f64, f64)> {
    match name {
        "notches" => vec![
            (50.0, -30.0),
            (55.0, -5.0),
            (60.0, -30.0),
            (20.0, 20.0),
            (30.0, 3.0),
            (40.0, 20.0),
        ],
        _ => vec![
            (110.0, 10.0),
            (90.0, 10.0),
            (90.0, 40.0),
            (110.0, -20.0),
            (80.0, -5.0),
            (80.0, -40.0),
        ],
    }
}

fn main() -> Result<(), flakecut::FlakeError> {
    // Default: WARN for everything, INFO for flakecut.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("cut_session=info".parse().unwrap_or_default())
        .add_directive("flakecut=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "corners".to_string());
    let mut flake = Flake::new(FoldParams::default())?;

    for (x, y) in script(&name) {
        let outcome = flake.handle_point(Point2::new(x, y))?;
        if let Some(err) = outcome.rejection() {
            tracing::warn!(x, y, %err, "point rejected");
        } else if let PointerOutcome::Completed { vertices } = &outcome {
            tracing::info!(vertices = vertices.len(), "cut completed");
        }
    }

    let mut svg = SvgRenderer::default();
    flake.render(&mut svg)?;

    let dims = flake.original_dimensions();
    let extent = dims.height.max(dims.base) * 1.1;
    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" style="background:#00436a">"#,
        -extent,
        -extent,
        2.0 * extent,
        2.0 * extent
    );
    for element in &svg.elements {
        println!("  {element}");
    }
    println!("</svg>");
    Ok(())
}
