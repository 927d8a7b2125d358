// File: crates/demo/src/main.rs
// Summary: Demo loads the social-media CSVs and renders box, bar, and line charts to PNGs.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tabplot_core::{
    build_box_plot, build_grouped_bar_chart, build_line_chart, ChartConfig, Color, Insets, Table,
    Value,
};

fn main() -> Result<()> {
    let data_dir = resolve_data_dir(std::env::args().nth(1).map(PathBuf::from))?;
    println!("Using data dir: {}", data_dir.display());

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir)?;

    // 1) Box plot of raw likes per platform
    let mut likes = load_table(&data_dir.join("social_media.csv"), None)?;
    likes.coerce_numeric("Likes")?;
    println!("Loaded {} rows of raw likes", likes.len());

    let mut cfg = ChartConfig {
        x_title: "Social Media Platforms".to_string(),
        y_title: "Number of Likes".to_string(),
        ..ChartConfig::default()
    };
    cfg.theme.background = Color::rgb(173, 216, 230); // lightblue
    let fig = build_box_plot(&likes, "Platform", "Likes", &cfg, 0.5)?;
    let out = out_dir.join("box_plot.png");
    tabplot_render_skia::render_to_png(&fig, &out)?;
    println!("Wrote {}", out.display());

    // 2) Grouped bars of average likes per platform and post type
    let mut avg = load_table(&data_dir.join("social_media_avg.csv"), None)?;
    avg.coerce_numeric("AvgLikes")?;
    println!("Loaded {} rows of averages", avg.len());

    let mut cfg = ChartConfig {
        width: 800,
        x_title: "Social Media Platform".to_string(),
        y_title: "Average Likes".to_string(),
        ..ChartConfig::default()
    };
    cfg.theme.background = Color::rgb(255, 255, 224); // lightyellow
    let fig = build_grouped_bar_chart(&avg, "Platform", "PostType", "AvgLikes", &cfg, 0.2, 0.05)?;
    let out = out_dir.join("grouped_bars.png");
    tabplot_render_skia::render_to_png(&fig, &out)?;
    println!("Wrote {}", out.display());

    // 3) Smoothed line of average likes over time. The band axis keeps
    // first-seen order, so sort chronologically before loading.
    let mut daily = load_table(&data_dir.join("social_media_time.csv"), Some("Date"))?;
    daily.coerce_numeric("AvgLikes")?;
    println!("Loaded {} rows of daily averages", daily.len());

    let mut cfg = ChartConfig {
        insets: Insets::new(50, 50, 50, 100),
        x_title: "Date".to_string(),
        y_title: "Average Likes".to_string(),
        ..ChartConfig::default()
    };
    cfg.theme.background = Color::rgb(255, 192, 203); // pink
    let fig = build_line_chart(&daily, "Date", "AvgLikes", &cfg, 0.5)?;
    let out = out_dir.join("line_chart.png");
    tabplot_render_skia::render_to_png(&fig, &out)?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Resolve the data directory, falling back to the bundled samples when no
/// argument is given.
fn resolve_data_dir(arg: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = arg {
        if dir.is_dir() {
            return Ok(dir);
        }
        anyhow::bail!("data dir not found: {}", dir.display());
    }
    for candidate in ["crates/demo/data", "data"] {
        let p = PathBuf::from(candidate);
        if p.is_dir() {
            return Ok(p);
        }
    }
    anyhow::bail!("no data directory found; pass one as the first argument");
}

/// Load a delimited file into a table of textual cells. When `date_field`
/// is given, rows are sorted by that column (`%m/%d/%Y`) before loading.
fn load_table(path: &Path, date_field: Option<&str>) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut records: Vec<csv::StringRecord> = Vec::new();
    for rec in rdr.records() {
        records.push(rec?);
    }
    if let Some(field) = date_field {
        let col = headers
            .iter()
            .position(|h| h == field)
            .with_context(|| format!("no `{field}` column in {}", path.display()))?;
        records.sort_by_key(|rec| {
            rec.get(col)
                .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%m/%d/%Y").ok())
        });
    }

    let mut table = Table::new(headers);
    for rec in &records {
        table.push_row(rec.iter().map(|s| Value::Text(s.to_string())).collect())?;
    }
    Ok(table)
}
