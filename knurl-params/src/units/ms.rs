//! Millisecond values: adjusted by direct entry or snapping only, so the unit
//! carries no gesture operations.

use knurl_core::math;

use crate::string::{find_positive_number, format_compact};
use crate::tweaker::Unit;
use crate::Value;

const STEP: Value = 0.001;

pub fn stepify(value: Value) -> Value {
    math::stepify(value, STEP)
}

pub fn to_string(value: Value) -> String {
    format!("{} ms", format_compact(stepify(value)))
}

pub fn from_string(string: &str) -> Option<Value> {
    find_positive_number(string)
}

pub struct Ms;

impl Unit for Ms {
    fn stepify(&self, value: Value) -> Value {
        stepify(value)
    }

    fn to_string(&self, value: Value) -> String {
        to_string(value)
    }

    fn from_string(&self, string: &str) -> Option<Value> {
        from_string(string)
    }
}
