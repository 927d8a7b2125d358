// File: crates/tabplot-render-skia/src/lib.rs
// Summary: Skia renderer; replays figure primitives onto a throwaway CPU raster surface.

pub mod curve;
pub mod text;

use anyhow::Result;
use skia_safe as skia;

use tabplot_core::{AxisOrient, Color, Curve, DrawPrimitive, Figure, TextAnchor};

pub use text::TextShaper;

const TICK_LEN: f32 = 6.0;
const TICK_LABEL_SIZE: f32 = 12.0;

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia(color));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia(color));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

/// Render `figure` into PNG bytes. The raster surface lives only for this
/// call: acquire, clear, replay primitives in order, snapshot, encode.
pub fn render_to_png_bytes(figure: &Figure) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((figure.width, figure.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(to_skia(figure.theme.background));

    let shaper = TextShaper::new();
    for prim in &figure.primitives {
        draw_primitive(canvas, &shaper, figure, prim);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `figure` to a PNG file at `path`.
pub fn render_to_png(figure: &Figure, path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = render_to_png_bytes(figure)?;
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

fn draw_primitive(canvas: &skia::Canvas, shaper: &TextShaper, figure: &Figure, prim: &DrawPrimitive) {
    match prim {
        DrawPrimitive::Segment { x1, y1, x2, y2, stroke, stroke_width } => {
            canvas.draw_line((*x1, *y1), (*x2, *y2), &stroke_paint(*stroke, *stroke_width));
        }
        DrawPrimitive::Rect { x, y, w, h, fill, stroke } => {
            let rect = skia::Rect::from_xywh(*x, *y, *w, *h);
            canvas.draw_rect(rect, &fill_paint(*fill));
            if let Some(stroke) = stroke {
                canvas.draw_rect(rect, &stroke_paint(*stroke, 1.0));
            }
        }
        DrawPrimitive::Text { x, y, content, anchor, rotation_deg, color, size } => {
            shaper.draw_anchored(canvas, content, *x, *y, *anchor, *rotation_deg, *size, to_skia(*color), false);
        }
        DrawPrimitive::AxisTick { orient, position, label, rotation_deg } => {
            draw_tick(canvas, shaper, figure, *orient, *position, label, *rotation_deg);
        }
        DrawPrimitive::Path { points, curve, stroke, stroke_width } => {
            draw_path(canvas, points, *curve, *stroke, *stroke_width);
        }
    }
}

fn draw_tick(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    figure: &Figure,
    orient: AxisOrient,
    position: f32,
    label: &str,
    rotation_deg: f32,
) {
    let theme = &figure.theme;
    let mark = stroke_paint(theme.axis_line, 1.0);
    let label_color = to_skia(theme.tick);
    match orient {
        AxisOrient::Bottom => {
            let b = (figure.height - figure.insets.bottom as i32) as f32;
            canvas.draw_line((position, b), (position, b + TICK_LEN), &mark);
            if rotation_deg == 0.0 {
                shaper.draw_anchored(
                    canvas, label, position, b + TICK_LEN + TICK_LABEL_SIZE + 2.0,
                    TextAnchor::Middle, 0.0, TICK_LABEL_SIZE, label_color, false,
                );
            } else {
                // slanted labels hang from the tick, end-anchored
                shaper.draw_anchored(
                    canvas, label, position, b + TICK_LEN + TICK_LABEL_SIZE,
                    TextAnchor::End, rotation_deg, TICK_LABEL_SIZE, label_color, false,
                );
            }
        }
        AxisOrient::Left => {
            let l = figure.insets.left as f32;
            canvas.draw_line((l - TICK_LEN, position), (l, position), &mark);
            shaper.draw_anchored(
                canvas, label, l - TICK_LEN - 3.0, position + TICK_LABEL_SIZE * 0.35,
                TextAnchor::End, 0.0, TICK_LABEL_SIZE, label_color, true,
            );
        }
    }
}

fn draw_path(canvas: &skia::Canvas, points: &[(f32, f32)], curve: Curve, stroke: Color, stroke_width: f32) {
    let paint = stroke_paint(stroke, stroke_width);
    match points {
        [] => {}
        [p] => {
            canvas.draw_point(*p, &paint);
        }
        _ => {
            let mut path = skia::Path::new();
            path.move_to(points[0]);
            match curve {
                Curve::Linear => {
                    for &p in &points[1..] {
                        path.line_to(p);
                    }
                }
                Curve::Natural => {
                    let xs: Vec<f32> = points.iter().map(|p| p.0).collect();
                    let ys: Vec<f32> = points.iter().map(|p| p.1).collect();
                    let (cx1, cx2) = curve::control_points(&xs);
                    let (cy1, cy2) = curve::control_points(&ys);
                    for i in 0..points.len() - 1 {
                        path.cubic_to((cx1[i], cy1[i]), (cx2[i], cy2[i]), points[i + 1]);
                    }
                }
            }
            canvas.draw_path(&path, &paint);
        }
    }
}
