// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `vizir_gridlines_demo`.

use kurbo::Rect;
use peniko::Brush;
use vizir_gridlines::{GridLine, GridStyle, StrokeStyle};

/// An SVG document holding a plot background and a gridline layer.
#[derive(Debug)]
pub(crate) struct SvgGrid {
    view_box: Rect,
    plot: Option<(Rect, Brush)>,
    lines: Vec<GridLine>,
    style: GridStyle,
}

impl SvgGrid {
    pub(crate) fn new(view_box: Rect, style: GridStyle) -> Self {
        Self {
            view_box,
            plot: None,
            lines: Vec::new(),
            style,
        }
    }

    pub(crate) fn set_plot_background(&mut self, plot: Rect, fill: impl Into<Brush>) {
        self.plot = Some((plot, fill.into()));
    }

    /// Appends gridlines, keeping their order as paint order.
    pub(crate) fn extend(&mut self, lines: impl IntoIterator<Item = GridLine>) {
        self.lines.extend(lines);
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let vb = self.view_box;
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            vb.x0,
            vb.y0,
            vb.width(),
            vb.height(),
            vb.width(),
            vb.height()
        ));
        out.push('\n');

        if let Some((plot, fill)) = &self.plot {
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                plot.x0,
                plot.y0,
                plot.width(),
                plot.height(),
            ));
            write_paint_attr(&mut out, "fill", fill, 1.0);
            out.push_str("/>\n");
        }

        out.push_str("<g class=\"gridlines\">\n");
        for line in &self.lines {
            let key = line.key();
            let l = line.line;
            out.push_str(&format!(
                r#"<line id="{key}" x1="{}" y1="{}" x2="{}" y2="{}""#,
                l.p0.x, l.p0.y, l.p1.x, l.p1.y
            ));
            write_stroke_attrs(&mut out, self.style.for_tier(line.tier));
            out.push_str("/>\n");
        }
        out.push_str("</g>\n");

        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(brush: &Brush) -> (String, f64) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            (value, f64::from(rgba.a) / 255.0)
        }
        _ => ("none".to_string(), 1.0),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush, opacity: f64) {
    let (value, alpha) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    let opacity = alpha * opacity;
    if opacity < 1.0 {
        out.push_str(&format!(r#" {name}-opacity="{opacity}""#));
    }
}

fn write_stroke_attrs(out: &mut String, style: &StrokeStyle) {
    write_paint_attr(out, "stroke", &style.brush, style.opacity);
    out.push_str(&format!(r#" stroke-width="{}""#, style.stroke_width));
}
