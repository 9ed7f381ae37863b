//! Numeric helpers shared by the scales

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Round half toward positive infinity, the rule used for every pixel and label
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// `(i1, i2, inc)` describing ticks `i * inc` (or `i / -inc` when `inc < 0`)
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let unit = 10f64.powf(-power) / factor;
        let mut i1 = round_half_up(start * unit);
        let mut i2 = round_half_up(stop * unit);
        if i1 / unit < start {
            i1 += 1.0;
        }
        if i2 / unit > stop {
            i2 -= 1.0;
        }
        (i1, i2, -unit)
    } else {
        let unit = 10f64.powf(power) * factor;
        let mut i1 = round_half_up(start / unit);
        let mut i2 = round_half_up(stop / unit);
        if i1 * unit < start {
            i1 += 1.0;
        }
        if i2 * unit > stop {
            i2 -= 1.0;
        }
        (i1, i2, unit)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Signed tick increment for `count` ticks over `[start, stop]`.
///
/// Positive values are the step itself; negative values are the inverse of a sub-unit step.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

/// Evenly spaced 1-2-5 ticks within `[start, stop]`
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if i1.is_nan() || i2.is_nan() || i2 < i1 {
        return Vec::new();
    }

    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Extend `[start, stop]` outward to tick-aligned bounds.
///
/// Returns the input unchanged when the increment does not settle.
pub fn nice(start: f64, stop: f64, count: usize) -> (f64, f64) {
    let reverse = stop < start;
    let (mut lo, mut hi) = if reverse { (stop, start) } else { (start, stop) };
    let mut prestep: Option<f64> = None;

    for _ in 0..10 {
        let step = tick_increment(lo, hi, count);
        if prestep == Some(step) {
            return if reverse { (hi, lo) } else { (lo, hi) };
        } else if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        prestep = Some(step);
    }

    (start, stop)
}
