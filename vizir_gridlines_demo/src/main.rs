// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridline demos for `vizir_gridlines`.
//!
//! Writes one SVG per scenario into the directory given as the first argument (default: the
//! current directory). Set `RUST_LOG=debug` to see resolution diagnostics.

mod svg;

use std::path::PathBuf;

use kurbo::Rect;
use peniko::color::palette::css;
use vizir_gridlines::{GridlinesSpec, Margin};

fn main() -> std::io::Result<()> {
    env_logger::init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let scenarios = [
        ("vizir_gridlines_quarters.svg", quarterly_demo()),
        ("vizir_gridlines_host_scale.svg", host_scale_demo()),
        ("vizir_gridlines_degenerate.svg", degenerate_demo()),
    ];

    for (name, svg) in scenarios {
        let path = out_dir.join(name);
        std::fs::write(&path, svg)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn render(spec: &GridlinesSpec) -> String {
    let resolved = spec.resolve();
    log::debug!("{resolved:?}");
    let size = resolved.size();
    let view_box = spec
        .view_box
        .unwrap_or_else(|| Rect::new(0.0, 0.0, size.width, size.height));

    let mut svg = svg::SvgGrid::new(view_box, resolved.style().clone());
    svg.set_plot_background(resolved.plot(), css::WHITE);
    svg.extend(resolved.lines(&spec.x_ticks, &spec.y_ticks));
    svg.to_svg_string()
}

fn quarterly_demo() -> String {
    // Two years of monthly data: x is months since the start, major ticks every quarter
    // (monthly minor lines); y is a score in [90, 150] with major ticks every 10 points.
    let x_ticks: Vec<f64> = (0..=8).map(|q| f64::from(q) * 3.0).collect();
    let y_ticks: Vec<f64> = (9..=15).map(|t| f64::from(t) * 10.0).collect();
    let spec = GridlinesSpec::new(x_ticks, y_ticks, (0.0, 24.0), (90.0, 150.0));
    render(&spec)
}

fn host_scale_demo() -> String {
    // The host owns a square-root y scale; the linear domain is ignored for y.
    let (top, bottom) = (20.0, 280.0);
    let y_max = 400.0_f64;
    let y_ticks: Vec<f64> = vec![0.0, 25.0, 100.0, 225.0, 400.0];
    let spec = GridlinesSpec::new(
        vec![0.0, 25.0, 50.0, 75.0, 100.0],
        y_ticks,
        (0.0, 100.0),
        (0.0, y_max),
    )
    .with_view_box(Rect::new(0.0, 0.0, 480.0, 300.0))
    .with_margin(Margin::new(top, 20.0, 300.0 - bottom, 20.0))
    .with_minor_divisions(5, 4)
    .with_y_scale(move |v| bottom - (v.max(0.0) / y_max).sqrt() * (bottom - top));
    render(&spec)
}

fn degenerate_demo() -> String {
    // A flat y domain collapses every horizontal line onto the top margin instead of
    // producing NaN coordinates.
    let spec = GridlinesSpec::new(
        vec![0.0, 5.0, 10.0],
        vec![42.0, 42.0],
        (0.0, 10.0),
        (42.0, 42.0),
    )
    .with_size(400.0, 240.0)
    .with_margin(Margin::uniform(20.0));
    render(&spec)
}
