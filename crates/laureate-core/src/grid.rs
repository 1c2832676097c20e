// File: crates/laureate-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1-2-5 steps) and tick label formatting.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Step between roughly `count` ticks spanning `start..=stop`, rounded to
/// 1, 2 or 5 times a power of ten. Returns 0.0 when no step exists.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return 0.0;
    }
    let span = (stop - start).abs();
    if span == 0.0 {
        return 0.0;
    }
    let raw = span / count as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    factor * base
}

/// Evenly spaced tick values covering `start..=stop` (either order), always
/// ascending. A collapsed range yields the single value.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    if lo == hi {
        return vec![lo];
    }
    let step = tick_step(lo, hi, count);
    if step <= 0.0 {
        return Vec::new();
    }
    // Sub-unit steps go through the inverse to keep 0.2 * 3 == 0.6 exact.
    if step < 1.0 {
        let inv = (1.0 / step).round();
        let first = (lo * inv).ceil() as i64;
        let last = (hi * inv).floor() as i64;
        (first..=last).map(|i| i as f64 / inv).collect()
    } else {
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Decimal places needed to tell apart ticks spaced `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    let exp = (step.abs().log10() + 1e-9).floor() as i32;
    (-exp).max(0) as usize
}

/// Integer label without digit grouping ("2000", not "2,000").
pub fn format_integer(v: f64) -> String {
    format!("{}", v.round() as i64)
}

/// Fixed-precision label with comma thousands separators ("1,250.5").
pub fn format_grouped(v: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, v.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = v < 0.0 && s.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}
