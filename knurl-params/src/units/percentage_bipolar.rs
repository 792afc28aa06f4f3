//! Bipolar percentage controls stored on [0, 1], with the midpoint shown as 0%.

use knurl_core::math;

use crate::string::format_compact;
use crate::tweaker::Unit;
use crate::units::percentage;
use crate::{step, Value};

const STEP: Value = 0.005;

pub fn stepify(value: Value) -> Value {
    math::stepify(value, STEP)
}

pub fn increment(value: Value, precise: bool) -> Value {
    step::increment::<200, 2000>(value, precise)
}

pub fn decrement(value: Value, precise: bool) -> Value {
    step::decrement::<200, 2000>(value, precise)
}

pub fn drag(value: Value, amount: i32, precise: bool) -> Value {
    step::drag::<200, 2000>(value, amount / 5, precise)
}

pub fn to_string(value: Value) -> String {
    format!("{}%", format_compact(percentage::stepify((value - 0.5) * 200.0)))
}

pub fn from_string(string: &str) -> Option<Value> {
    percentage::from_string(string)
}

pub struct PercentageBipolar;

impl Unit for PercentageBipolar {
    // No constrain: the [0, 1] storage convention is the caller's to keep

    fn stepify(&self, value: Value) -> Value {
        stepify(value)
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
    fn midpoint_is_zero_percent() {
        assert_eq!(to_string(0.5), "0%");
        assert_eq!(to_string(1.0), "100%");
        assert_eq!(to_string(0.0), "-100%");
        assert_eq!(to_string(0.75), "50%");
    }

    #[test]
    fn quantizes_to_half_percent_of_storage() {
        assert_abs_diff_eq!(stepify(0.5024), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(stepify(0.5026), 0.505, epsilon = 1e-6);
    }

    #[test]
    fn steps_are_finer_than_unipolar() {
        assert_abs_diff_eq!(increment(0.5, false), 0.505);
        assert_abs_diff_eq!(increment(0.5, true), 0.5005);
        assert_abs_diff_eq!(decrement(0.5, false), 0.495);
        assert_abs_diff_eq!(drag(0.5, 10, false), 0.51);
    }

    #[test]
    fn parsing_defers_to_percentage() {
        assert_abs_diff_eq!(from_string("50%").unwrap(), 0.5);
        assert_eq!(from_string("wide"), None);
    }
}
