// File: crates/curve-icon/src/main.rs
// Summary: Prints an SVG document with the launcher/status waveform, or with a curve
//          built from CSV samples (x,y -> polyline; x,y,dy -> fitted quadratics).

use anyhow::{Context, Result};
use curve_path::{
    build_linear_path, build_quadratic_array_path, build_quadratic_function_path, IconLayout, Path, Samples,
    Waveform,
};
use std::io::Read;

/// Colours and curve stroke per icon kind.
struct IconStyle {
    /// Fill of the background disc; `None` leaves the icon transparent.
    background: Option<&'static str>,
    color: &'static str,
    width: f64,
    cap: &'static str,
    button: &'static str,
}

impl IconStyle {
    fn launcher() -> Self {
        Self { background: Some("rgb(250,250,250)"), color: "rgb(244,67,54)", width: 10.0, cap: "round", button: "rgb(211,47,47)" }
    }

    fn status() -> Self {
        Self { background: None, color: "rgb(255,255,255)", width: 2.0, cap: "butt", button: "rgb(255,255,255)" }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut debug = false;
    let mut target: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--debug" => debug = true,
            _ => target = Some(arg),
        }
    }
    let target = target.unwrap_or_else(|| "launcher".to_string());

    let (layout, style) = match target.as_str() {
        "status" => (IconLayout::status(), IconStyle::status()),
        _ => (IconLayout::launcher(), IconStyle::launcher()),
    };
    let rect = layout.curve_rect();

    let path = if target == "launcher" || target == "status" {
        let w = Waveform::launcher();
        log::info!(
            "Sampling {} waveform on [{}, {}] with {} samples",
            target, layout.domain.0, layout.domain.1, layout.sample_count
        );
        build_quadratic_function_path(
            |x| w.value(x),
            |x| w.derivative(x),
            layout.domain.0,
            layout.domain.1,
            layout.sample_count,
            rect.top_left,
            rect.bottom_right,
            debug,
        )
    } else {
        let file = std::fs::File::open(&target).with_context(|| format!("opening {}", target))?;
        let (samples, has_dy) = load_samples(file).with_context(|| format!("failed to load CSV '{}'", target))?;
        log::info!("Loaded {} samples from {}", samples.len(), target);
        if samples.is_empty() {
            anyhow::bail!("no samples loaded; check headers/delimiter.");
        }
        if has_dy {
            build_quadratic_array_path(&samples.xs, &samples.ys, &samples.dys, rect.top_left, rect.bottom_right)
                .context("samples cannot be fitted with quadratics; add samples or drop the dy column")?
        } else {
            build_linear_path(&samples.xs, &samples.ys, rect.top_left, rect.bottom_right)?
        }
    };

    log::info!("Built path with {} segments", path.segment_count());
    println!("{}", svg_document(&layout, &path, &style));
    Ok(())
}

/// Read `x,y[,dy]` rows (with a header line). Returns the samples and whether
/// a derivative column was present; rows that fail to parse are skipped.
fn load_samples<R: Read>(input: R) -> Result<(Samples, bool)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let columns = rdr.headers()?.len();
    let has_dy = columns >= 3;
    if columns < 2 {
        anyhow::bail!("expected at least x and y columns, found {}", columns);
    }

    let mut out = Samples::default();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.parse::<f64>().ok()) };
        let dy = if has_dy { parse(2) } else { Some(0.0) };
        match (parse(0), parse(1), dy) {
            (Some(x), Some(y), Some(dy)) => out.push(curve_path::Sample::new(x, y, dy)),
            _ => log::warn!("skipping unparsable row {}", row + 1),
        }
    }
    Ok((out, has_dy))
}

/// Background disc (launcher only), the stroked curve, then the button the curve runs into.
fn svg_document(layout: &IconLayout, path: &Path, style: &IconStyle) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = layout.width,
        h = layout.height,
    );
    if let Some(fill) = style.background {
        out += &format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
            layout.width / 2.0,
            layout.height / 2.0,
            layout.outer_radius(),
            fill
        );
    }
    out += &format!(
        "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"{}\"/>\n",
        path, style.color, style.width, style.cap
    );
    let button = layout.button_center();
    out += &format!(
        "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
        button.x, button.y, layout.button_radius, style.button
    );
    out.push_str("</svg>");
    out
}
