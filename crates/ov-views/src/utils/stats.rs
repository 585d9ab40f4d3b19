//! Statistical utilities for views

/// Quantile of an ascending slice using linear interpolation between the two
/// closest ranks. Returns `None` for an empty slice.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let idx = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    Some(interpolate(sorted, idx))
}

fn interpolate(sorted: &[f64], idx: f64) -> f64 {
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;

    if lower == upper || upper >= sorted.len() {
        sorted[lower]
    } else {
        let fraction = idx - lower as f64;
        sorted[lower] * (1.0 - fraction) + sorted[upper] * fraction
    }
}

/// Minimum and maximum of the finite values
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Widen `[min, max]` outwards to round tick multiples for roughly `count`
/// ticks.
pub fn nice_domain(min: f64, max: f64, count: usize) -> (f64, f64) {
    if !(max > min) || count == 0 || !min.is_finite() || !max.is_finite() {
        return (min, max);
    }

    let raw_step = (max - min) / count as f64;
    let power = raw_step.log10().floor() as i32;
    let error = raw_step / 10f64.powi(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power >= 0 {
        let step = factor * 10f64.powi(power);
        ((min / step).floor() * step, (max / step).ceil() * step)
    } else {
        // Work with the inverse step so decimal steps stay exact
        let inverse = 10f64.powi(-power) / factor;
        ((min * inverse).floor() / inverse, (max * inverse).ceil() / inverse)
    }
}
