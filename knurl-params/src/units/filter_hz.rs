//! Filter cutoff controls: normalized [0, 1] position, displayed in Hz.

use knurl_core::convert::{filter_hz_to_linear, linear_to_filter_hz};
use knurl_core::math;

use crate::string::{find_positive_number, format_compact};
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
    let hz = linear_to_filter_hz(value);

    if hz.round() < 1000.0 {
        format!("{} Hz", format_compact(hz))
    } else {
        format!("{} kHz", format_compact(hz / 1000.0))
    }
}

pub fn from_string(string: &str) -> Option<Value> {
    let multiplier = if string.to_lowercase().contains("khz") {
        1000.0
    } else {
        1.0
    };

    find_positive_number::<Value>(string).map(|hz| constrain(filter_hz_to_linear(hz * multiplier)))
}

pub struct FilterHz;

impl Unit for FilterHz {
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
    use approx::assert_relative_eq;

    use crate::Tweaker;

    use super::*;

    #[test]
    fn displays_hz_below_one_kilohertz() {
        assert!(to_string(0.0).ends_with(" Hz"));
        assert!(to_string(0.5).ends_with(" Hz"));
        assert!(to_string(1.0).ends_with(" kHz"));
    }

    #[test]
    fn parses_hz_and_khz() {
        let linear = from_string("440 Hz").unwrap();
        assert_relative_eq!(linear_to_filter_hz(linear), 440.0, max_relative = 1e-3);

        let linear = from_string("2 kHz").unwrap();
        assert_relative_eq!(linear_to_filter_hz(linear), 2000.0, max_relative = 1e-3);

        assert_eq!(from_string("bright"), None);
    }

    #[test]
    fn parsed_values_are_clamped() {
        assert_eq!(from_string("0 Hz"), Some(0.0));
        assert_eq!(from_string("100 kHz"), Some(1.0));
    }

    #[test]
    fn wrapped_gestures_stay_normalized() {
        let tweaker = Tweaker::new(FilterHz);

        assert_eq!(tweaker.increment(0.999, false), 1.0);
        assert_eq!(tweaker.decrement(0.001, false), 0.0);

        let dragged = tweaker.drag(0.5, 23, false);
        assert!((0.0..=1.0).contains(&dragged));
    }
}
