// File: crates/plot-core/src/grid.rs
// Summary: Sampling and grid/tick layout helpers.

/// `steps` evenly spaced values over the closed interval `[start, end]`.
///
/// Endpoints are exact: the first value is `start` and the last is `end`.
/// `steps == 0` yields nothing and `steps == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            out[steps - 1] = end;
            out
        }
    }
}

const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Smallest "nice" step (1, 2, 2.5 or 5 x 10^k) that splits `span` into at
/// most `target` intervals.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let (mantissa, exp) = nice_step_parts(span, target);
    scale_pow10(mantissa, exp)
}

/// Nice step split into mantissa and power of ten so multiples stay exact.
fn nice_step_parts(span: f64, target: usize) -> (f64, i32) {
    if !span.is_finite() || span <= 0.0 {
        return (1.0, 0);
    }
    let raw = span / target.max(1) as f64;
    let exp = raw.log10().floor() as i32;
    NICE_STEPS
        .iter()
        .find(|m| scale_pow10(**m, exp) >= raw * (1.0 - 1e-9))
        .map(|m| (*m, exp))
        .unwrap_or((1.0, exp + 1))
}

// Divide for negative exponents: 2.5 / 10 is exact where 2.5 * 0.1 is not.
fn scale_pow10(v: f64, exp: i32) -> f64 {
    if exp >= 0 { v * 10f64.powi(exp) } else { v / 10f64.powi(-exp) }
}

/// Tick positions at multiples of a nice step that fall inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    if (hi - lo).abs() < 1e-12 {
        return vec![lo];
    }
    let (mantissa, exp) = nice_step_parts(hi - lo, target);
    let step = scale_pow10(mantissa, exp);
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = scale_pow10(k as f64 * mantissa, exp);
            // snap -0.0
            if v == 0.0 { 0.0 } else { v }
        })
        .collect()
}

/// Decimals needed to print multiples of `step` without losing digits.
pub fn tick_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    (0..=6)
        .find(|d| {
            let scaled = step * 10f64.powi(*d as i32);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(6)
}

/// Format a tick value with a fixed number of decimals, using a true minus sign.
pub fn format_tick(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().any(|c| c != '0' && c != '.') => format!("\u{2212}{rest}"),
        Some(rest) => rest.to_string(),
        None => s,
    }
}
