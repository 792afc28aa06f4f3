//! Amplitude controls: raw linear gain, displayed and stepped in decibels.

use knurl_core::convert::{db_to_linear, linear_to_db};
use knurl_core::math;

use crate::string::{find_number, format_compact};
use crate::tweaker::Unit;
use crate::{step, Value};

pub const SILENT: Value = 0.0;

const MIN_THRESHOLD: Value = 0.00001;
const MIN_DB: Value = -60.0;
const MAX_DB: Value = 12.0;
const DB_STEP: Value = 0.1;

pub fn stepify(value: Value) -> Value {
    if value <= MIN_THRESHOLD {
        return SILENT;
    }

    db_to_linear(math::stepify(linear_to_db(value), DB_STEP))
}

pub fn constrain(value: Value) -> Value {
    let db = linear_to_db(value);

    if db < MIN_DB {
        return SILENT;
    }

    if db > MAX_DB {
        return db_to_linear(MAX_DB);
    }

    value
}

pub fn increment(value: Value, precise: bool) -> Value {
    if value <= SILENT {
        return db_to_linear(MIN_DB);
    }

    db_to_linear(step::increment::<1, 10>(linear_to_db(value), precise))
}

pub fn decrement(value: Value, precise: bool) -> Value {
    db_to_linear(step::decrement::<1, 10>(linear_to_db(value), precise))
}

pub fn drag(value: Value, amount: i32, precise: bool) -> Value {
    // Dragging out of silence starts one step below the bottom of the range
    let value = if value <= SILENT {
        db_to_linear(MIN_DB - 1.0)
    } else {
        value
    };

    db_to_linear(step::drag::<1, 10>(linear_to_db(value), amount / 5, precise))
}

pub fn db_to_string(db: Value) -> String {
    format!("{} dB", format_compact(db))
}

pub fn to_string(value: Value) -> String {
    if value <= SILENT {
        "Silent".to_string()
    } else {
        db_to_string(math::stepify(linear_to_db(value), DB_STEP))
    }
}

pub fn from_string(string: &str) -> Option<Value> {
    find_number::<Value>(string).map(db_to_linear)
}

pub struct Amp;

impl Unit for Amp {
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
