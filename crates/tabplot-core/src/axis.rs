// File: crates/tabplot-core/src/axis.rs
// Summary: Axis tick generation from band and linear scales.

use crate::draw::{AxisOrient, DrawPrimitive};
use crate::scale::{BandScale, LinearScale};

/// One tick per category, at band centers, in domain order.
pub fn band_ticks(scale: &BandScale, orient: AxisOrient, rotation_deg: f32) -> Vec<DrawPrimitive> {
    let (lo, _) = scale.range();
    let step = scale.step();
    scale
        .domain()
        .iter()
        .enumerate()
        .map(|(i, label)| DrawPrimitive::AxisTick {
            orient,
            // bands are centered in their step, so the step midpoint is the band midpoint
            position: lo + (i as f32 + 0.5) * step,
            label: label.clone(),
            rotation_deg,
        })
        .collect()
}

/// Ticks at round values inside the scale's domain.
pub fn linear_ticks(scale: &LinearScale, orient: AxisOrient, count: usize) -> Vec<DrawPrimitive> {
    tick_values(scale.domain(), count)
        .into_iter()
        .map(|v| DrawPrimitive::AxisTick {
            orient,
            position: scale.to_px(v),
            label: format_tick(v),
            rotation_deg: 0.0,
        })
        .collect()
}

/// Round tick values covering `[min, max]` at a 1/2/5 x 10^k step, all
/// inside the domain.
pub fn tick_values(domain: (f64, f64), count: usize) -> Vec<f64> {
    let (mut min, mut max) = domain;
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }
    if min == max {
        return vec![min];
    }
    let step = nice_step((max - min) / count as f64);
    if step <= 0.0 {
        return vec![min, max];
    }
    let start = (min / step).ceil() * step;
    let stop = (max / step).floor() * step;
    let n_f = ((stop - start) / step).round();
    if !n_f.is_finite() || n_f < 0.0 {
        return Vec::new();
    }
    let n = n_f.min(10_000.0) as u64;
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

fn format_tick(v: f64) -> String {
    if v == v.round() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
