//! Playback-rate controls: raw speed ratio, stepped in octaves.

use knurl_core::convert::{linear_to_speed, speed_to_linear};

use crate::string::{find_number, format_compact};
use crate::tweaker::Unit;
use crate::{step, Value};

pub const FREEZE: Value = 0.0;
pub const THIRTYSECOND: Value = 0.03125;
pub const SIXTEENTH: Value = 0.0625;
pub const EIGHTH: Value = 0.125;
pub const QUARTER: Value = 0.25;
pub const HALF: Value = 0.5;
pub const NORMAL: Value = 1.0;
pub const DOUBLE: Value = 2.0;
pub const TRIPLE: Value = 3.0;

const MIN_OCTAVES: Value = -32.0;
const MAX: Value = 32.0;
const THRESHOLD: Value = 0.001;

pub fn constrain(value: Value) -> Value {
    if value < linear_to_speed(MIN_OCTAVES) {
        return FREEZE;
    }

    if value > MAX {
        return MAX;
    }

    value
}

pub fn increment(value: Value, precise: bool) -> Value {
    if value <= FREEZE {
        return linear_to_speed(MIN_OCTAVES);
    }

    constrain(linear_to_speed(step::increment::<1, 10>(speed_to_linear(value), precise)))
}

pub fn decrement(value: Value, precise: bool) -> Value {
    constrain(linear_to_speed(step::decrement::<1, 10>(speed_to_linear(value), precise)))
}

pub fn drag(value: Value, amount: i32, precise: bool) -> Value {
    // Dragging out of freeze starts from the bottom of the range
    let value = if value <= FREEZE {
        linear_to_speed(MIN_OCTAVES)
    } else {
        value
    };

    constrain(linear_to_speed(step::drag::<1, 10>(speed_to_linear(value), amount / 5, precise)))
}

pub fn from_string(string: &str) -> Option<Value> {
    let uppercase = string.to_uppercase();

    if uppercase.contains("FREEZE") {
        return Some(FREEZE);
    }

    if uppercase.contains("NORMAL") {
        return Some(NORMAL);
    }

    if uppercase.contains("DOUBLE") {
        return Some(DOUBLE);
    }

    if uppercase.contains("TRIPLE") {
        return Some(TRIPLE);
    }

    if let Some(speed) = find_fraction(string) {
        return Some(speed);
    }

    find_number(string)
}

// "1/N" anywhere in the text
fn find_fraction(string: &str) -> Option<Value> {
    for (index, _) in string.match_indices("1/") {
        let digits: String = string[index + 2..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();

        if digits.is_empty() {
            continue;
        }

        if let Ok(denominator) = digits.parse::<i32>() {
            return Some(1.0 / denominator as Value);
        }
    }

    None
}

pub fn to_string(value: Value) -> String {
    if value <= FREEZE {
        return "Freeze".to_string();
    }

    if value < NORMAL - THRESHOLD {
        let reciprocal = 1.0 / value;
        let rounded = reciprocal.round();

        if (reciprocal - rounded).abs() < THRESHOLD {
            return format!("1/{}", rounded as i32);
        }

        return format!("x{}", format_compact(value));
    }

    if milestone_hit(value, NORMAL) {
        return "Normal".to_string();
    }

    if milestone_hit(value, DOUBLE) {
        return "Double".to_string();
    }

    if milestone_hit(value, TRIPLE) {
        return "Triple".to_string();
    }

    format!("x{}", format_compact(value))
}

fn milestone_hit(value: Value, milestone: Value) -> bool {
    value > milestone - THRESHOLD && value < milestone + THRESHOLD
}

pub struct Speed;

impl Unit for Speed {
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
