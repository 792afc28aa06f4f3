//! Unipolar percentage controls stored as a [0, 1] ratio.

use knurl_core::math;

use crate::string::{find_number, format_compact};
use crate::tweaker::Unit;
use crate::{step, Value};

pub fn stepify(value: Value) -> Value {
    math::stepify_div::<1000>(value)
}

pub fn constrain(value: Value) -> Value {
    value.clamp(0.0, 1.0)
}

pub fn increment(value: Value, precise: bool) -> Value {
    step::increment::<100, 1000>(value, precise)
}

pub fn decrement(value: Value, precise: bool) -> Value {
    step::decrement::<100, 1000>(value, precise)
}

pub fn drag(value: Value, amount: i32, precise: bool) -> Value {
    step::drag::<100, 1000>(value, amount / 5, precise)
}

pub fn to_string(value: Value) -> String {
    format!("{}%", format_compact(stepify(value * 100.0)))
}

pub fn from_string(string: &str) -> Option<Value> {
    find_number::<Value>(string).map(|value| value / 100.0)
}

/// For controls that hold a bipolar [-1, 1] value directly.
pub mod bipolar {
    use crate::Value;

    pub fn constrain(value: Value) -> Value {
        value.clamp(-1.0, 1.0)
    }
}

pub struct Percentage;

impl Unit for Percentage {
    fn stepify(&self, value: Value) -> Value {
        stepify(value)
    }

    fn constrain(&self, value: Value) -> Value {
        constrain(value)
    }

    fn increment(&self, value: Value, precise: bool) -> Value {
        increment(value, precise)
    }

    fn decrement(&self, value: Value, precise: bool) -> Value {
        decrement(value, precise)
    }

    fn drag(&self, value: Value, amount: i32, precise: bool) -> Value {
        drag(value, amount, precise)
    }

    fn to_string(&self, value: Value) -> String {
        to_string(value)
    }

    fn from_string(&self, string: &str) -> Option<Value> {
        from_string(string)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn displays_as_percent() {
        assert_eq!(to_string(0.5), "50%");
        assert_eq!(to_string(0.0), "0%");
        assert_eq!(to_string(1.0), "100%");
        assert_eq!(to_string(0.505), "50.5%");
    }

    #[test]
    fn parses_percent() {
        assert_abs_diff_eq!(from_string("75%").unwrap(), 0.75);
        assert_abs_diff_eq!(from_string("-12.5%").unwrap(), -0.125);
        assert_eq!(from_string("none"), None);
    }

    #[test]
    fn constrain_is_idempotent() {
        for value in [-0.5, 0.0, 0.33, 1.0, 2.5] {
            assert_eq!(constrain(constrain(value)), constrain(value));
        }
    }

    #[test]
    fn steps() {
        assert_abs_diff_eq!(increment(0.5, false), 0.51);
        assert_abs_diff_eq!(increment(0.5, true), 0.501);
        assert_abs_diff_eq!(decrement(0.5, false), 0.49);
        assert_abs_diff_eq!(drag(0.5, 15, false), 0.53);
    }

    #[test]
    fn bipolar_constrain_clamps_both_ends() {
        assert_eq!(bipolar::constrain(-1.5), -1.0);
        assert_eq!(bipolar::constrain(1.5), 1.0);
        assert_eq!(bipolar::constrain(0.3), 0.3);
    }
}
