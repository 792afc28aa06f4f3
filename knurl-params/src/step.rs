use knurl_core::math::{inverse_lerp, lerp};

use crate::Value;

pub fn increment<const NORMAL: i32, const PRECISE: i32>(value: Value, precise: bool) -> Value {
    value + 1.0 / (if precise { PRECISE } else { NORMAL }) as Value
}

pub fn decrement<const NORMAL: i32, const PRECISE: i32>(value: Value, precise: bool) -> Value {
    value - 1.0 / (if precise { PRECISE } else { NORMAL }) as Value
}

pub fn drag<const NORMAL: i32, const PRECISE: i32>(value: Value, amount: i32, precise: bool) -> Value {
    value + amount as Value / (if precise { PRECISE } else { NORMAL }) as Value
}

/// Pull a value toward the surrounding multiples of `step_size`.
///
/// `snap_amount` runs from 0 (no pull) to 1 (hard rounding to the nearest
/// multiple); in between, a power curve steepens the pull toward the grid
/// lines, continuous at the midpoint between them.
pub fn snap_value(value: Value, step_size: Value, snap_amount: Value) -> Value {
    if step_size == 0.0 || snap_amount <= 0.0 {
        return value;
    }

    if snap_amount >= 1.0 {
        return (value / step_size).round() * step_size;
    }

    let down = (value / step_size).floor() * step_size;
    // The epsilon keeps `up` strictly above `down` for values sitting on the grid
    let up = ((value / step_size) + 0.0001).ceil() * step_size;

    let t = inverse_lerp(down, up, value) * 2.0;
    let exponent = 1.0 / (1.0 + snap_amount.powf(4.0) * 99.0);

    let curve = if t < 1.0 {
        1.0 - (0.5 * ((1.0 - t).powf(exponent) + 1.0))
    } else {
        0.5 * ((t - 1.0).powf(exponent) + 1.0)
    };

    lerp(down, up, curve)
}
