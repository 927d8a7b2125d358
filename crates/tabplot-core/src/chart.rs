// File: crates/tabplot-core/src/chart.rs
// Summary: Box plot, grouped bar, and line chart builders emitting draw primitives.

use crate::axis::{band_ticks, linear_ticks};
use crate::draw::{AxisOrient, Curve, DrawPrimitive, TextAnchor};
use crate::error::{ChartError, Result};
use crate::scale::{BandScale, LinearScale};
use crate::summary::summarize;
use crate::table::Table;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Pixel strip reserved right of the bar-chart plot for its legend.
const LEGEND_RESERVE: f32 = 100.0;
/// Legend row pitch and swatch side.
const LEGEND_ROW_H: f32 = 20.0;
const LEGEND_SWATCH: f32 = 15.0;
/// Slant for crowded categorical tick labels (dates on the line chart).
const DATE_LABEL_ROT: f32 = -25.0;
/// Target tick count on the value axis.
const Y_TICKS: usize = 10;

const TITLE_SIZE: f32 = 14.0;
const LEGEND_LABEL_SIZE: f32 = 12.0;

/// Surface geometry and styling shared by all chart kinds. Per-kind knobs
/// (band paddings) are builder arguments since they differ per chart.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title under the category axis; empty means none.
    pub x_title: String,
    /// Title left of the value axis, drawn rotated; empty means none.
    pub y_title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            x_title: String::new(),
            y_title: String::new(),
        }
    }
}

impl ChartConfig {
    fn plot_left(&self) -> f32 {
        self.insets.left as f32
    }
    fn plot_right(&self) -> f32 {
        (self.width - self.insets.right as i32) as f32
    }
    fn plot_top(&self) -> f32 {
        self.insets.top as f32
    }
    fn plot_bottom(&self) -> f32 {
        (self.height - self.insets.bottom as i32) as f32
    }
}

/// A fully built chart: pixel-resolved primitives in draw order, plus the
/// two scales used, so callers can lay out further decorations consistently.
#[derive(Clone, Debug)]
pub struct Figure {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub x_scale: BandScale,
    pub y_scale: LinearScale,
    pub primitives: Vec<DrawPrimitive>,
}

/// Axis baselines, ticks, and titles common to every chart kind.
fn frame_primitives(
    cfg: &ChartConfig,
    x: &BandScale,
    y: &LinearScale,
    x_label_rot: f32,
) -> Vec<DrawPrimitive> {
    let theme = &cfg.theme;
    let (xlo, xhi) = x.range();
    let (ylo, yhi) = y.range();
    let mut prims = vec![
        DrawPrimitive::Segment {
            x1: xlo,
            y1: cfg.plot_bottom(),
            x2: xhi,
            y2: cfg.plot_bottom(),
            stroke: theme.axis_line,
            stroke_width: 1.5,
        },
        DrawPrimitive::Segment {
            x1: xlo,
            y1: ylo,
            x2: xlo,
            y2: yhi,
            stroke: theme.axis_line,
            stroke_width: 1.5,
        },
    ];
    prims.extend(band_ticks(x, AxisOrient::Bottom, x_label_rot));
    prims.extend(linear_ticks(y, AxisOrient::Left, Y_TICKS));
    if !cfg.x_title.is_empty() {
        prims.push(DrawPrimitive::Text {
            x: cfg.width as f32 / 2.0,
            y: cfg.height as f32 - 15.0,
            content: cfg.x_title.clone(),
            anchor: TextAnchor::Middle,
            rotation_deg: 0.0,
            color: theme.axis_label,
            size: TITLE_SIZE,
        });
    }
    if !cfg.y_title.is_empty() {
        prims.push(DrawPrimitive::Text {
            x: 15.0,
            y: cfg.height as f32 / 2.0,
            content: cfg.y_title.clone(),
            anchor: TextAnchor::Middle,
            rotation_deg: -90.0,
            color: theme.axis_label,
            size: TITLE_SIZE,
        });
    }
    prims
}

fn value_max(table: &Table, field: &str) -> Result<f64> {
    let (_, max) = table.numeric_extent(field)?.ok_or(ChartError::EmptyDomain)?;
    Ok(max)
}

/// Build a grouped box plot: one five-number glyph per `category_field`
/// value over a value axis shared by all groups.
///
/// Per category, in draw order: whisker segment (min..max, band-centered),
/// the q1..q3 box over the full bandwidth, then the median line on top.
pub fn build_box_plot(
    table: &Table,
    category_field: &str,
    value_field: &str,
    cfg: &ChartConfig,
    padding: f32,
) -> Result<Figure> {
    let x = BandScale::new(
        table.distinct_labels(category_field)?,
        (cfg.plot_left(), cfg.plot_right()),
        padding,
    )?;
    let (vmin, vmax) = table
        .numeric_extent(value_field)?
        .ok_or(ChartError::EmptyDomain)?;
    let y = LinearScale::new((vmin, vmax), (cfg.plot_bottom(), cfg.plot_top()));
    let theme = &cfg.theme;

    let mut prims = frame_primitives(cfg, &x, &y, 0.0);
    for (category, s) in summarize(table, category_field, value_field)? {
        let x0 = x.position(&category)?;
        let bw = x.bandwidth();
        let cx = x0 + bw / 2.0;
        prims.push(DrawPrimitive::Segment {
            x1: cx,
            y1: y.to_px(s.min),
            x2: cx,
            y2: y.to_px(s.max),
            stroke: theme.mark_stroke,
            stroke_width: 2.0,
        });
        prims.push(DrawPrimitive::Rect {
            x: x0,
            y: y.to_px(s.q3),
            w: bw,
            h: y.to_px(s.q1) - y.to_px(s.q3),
            fill: theme.box_fill,
            stroke: Some(theme.mark_stroke),
        });
        prims.push(DrawPrimitive::Segment {
            x1: x0,
            y1: y.to_px(s.median),
            x2: x0 + bw,
            y2: y.to_px(s.median),
            stroke: theme.mark_stroke,
            stroke_width: 2.0,
        });
    }

    Ok(Figure {
        width: cfg.width,
        height: cfg.height,
        insets: cfg.insets,
        theme: cfg.theme,
        x_scale: x,
        y_scale: y,
        primitives: prims,
    })
}

/// Build a grouped bar chart: an outer band per `outer_field` value, a
/// nested band per `inner_field` value inside it, bars bottom-anchored on
/// a shared `[0, max]` value axis, and a swatch/label legend in the strip
/// reserved right of the plot.
pub fn build_grouped_bar_chart(
    table: &Table,
    outer_field: &str,
    inner_field: &str,
    value_field: &str,
    cfg: &ChartConfig,
    outer_padding: f32,
    inner_padding: f32,
) -> Result<Figure> {
    let x = BandScale::new(
        table.distinct_labels(outer_field)?,
        (cfg.plot_left(), cfg.plot_right() - LEGEND_RESERVE),
        outer_padding,
    )?;
    let inner = BandScale::new(
        table.distinct_labels(inner_field)?,
        (0.0, x.bandwidth()),
        inner_padding,
    )?;
    let y = LinearScale::new(
        (0.0, value_max(table, value_field)?),
        (cfg.plot_bottom(), cfg.plot_top()),
    );
    let theme = &cfg.theme;

    let mut prims = frame_primitives(cfg, &x, &y, 0.0);

    let outer_col = table.column_index(outer_field)?;
    let inner_col = table.column_index(inner_field)?;
    let value_col = table.column_index(value_field)?;
    for row in 0..table.len() {
        let outer_label = table.label_at(row, outer_col);
        let inner_label = table.label_at(row, inner_col);
        let top = y.to_px(table.number_at(row, value_col)?);
        prims.push(DrawPrimitive::Rect {
            x: x.position(&outer_label)? + inner.position(&inner_label)?,
            y: top,
            w: inner.bandwidth(),
            h: cfg.plot_bottom() - top,
            fill: theme.series_color(inner.index(&inner_label)?),
            stroke: None,
        });
    }

    // legend: swatch + label per inner category, stacked in first-seen order
    let lx = cfg.plot_right() - LEGEND_RESERVE;
    let ly = cfg.plot_top();
    for (i, label) in inner.domain().iter().enumerate() {
        let row_y = ly + i as f32 * LEGEND_ROW_H;
        prims.push(DrawPrimitive::Rect {
            x: lx,
            y: row_y,
            w: LEGEND_SWATCH,
            h: LEGEND_SWATCH,
            fill: theme.series_color(i),
            stroke: None,
        });
        prims.push(DrawPrimitive::Text {
            x: lx + LEGEND_SWATCH + 5.0,
            y: row_y + 12.0,
            content: label.clone(),
            anchor: TextAnchor::Start,
            rotation_deg: 0.0,
            color: theme.axis_label,
            size: LEGEND_LABEL_SIZE,
        });
    }

    Ok(Figure {
        width: cfg.width,
        height: cfg.height,
        insets: cfg.insets,
        theme: cfg.theme,
        x_scale: x,
        y_scale: y,
        primitives: prims,
    })
}

/// Build a line chart: one path point per row, in input row order, at band
/// centers over a `[0, max]` value axis. Callers pre-sort rows when
/// `x_field` is chronological. A single-row table yields a single-point
/// path, not an error.
pub fn build_line_chart(
    table: &Table,
    x_field: &str,
    y_field: &str,
    cfg: &ChartConfig,
    padding: f32,
) -> Result<Figure> {
    let x = BandScale::new(
        table.distinct_labels(x_field)?,
        (cfg.plot_left(), cfg.plot_right()),
        padding,
    )?;
    let y = LinearScale::new(
        (0.0, value_max(table, y_field)?),
        (cfg.plot_bottom(), cfg.plot_top()),
    );

    let mut prims = frame_primitives(cfg, &x, &y, DATE_LABEL_ROT);

    let x_col = table.column_index(x_field)?;
    let y_col = table.column_index(y_field)?;
    let mut points = Vec::with_capacity(table.len());
    for row in 0..table.len() {
        let label = table.label_at(row, x_col);
        points.push((x.center(&label)?, y.to_px(table.number_at(row, y_col)?)));
    }
    prims.push(DrawPrimitive::Path {
        points,
        curve: Curve::Natural,
        stroke: cfg.theme.mark_stroke,
        stroke_width: 2.0,
    });

    Ok(Figure {
        width: cfg.width,
        height: cfg.height,
        insets: cfg.insets,
        theme: cfg.theme,
        x_scale: x,
        y_scale: y,
        primitives: prims,
    })
}
