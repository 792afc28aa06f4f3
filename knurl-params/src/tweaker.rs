use crate::step;
use crate::Value;

/// One unit's interaction policy: how a raw control value quantizes, clamps,
/// responds to gestures, and converts to and from display text.
///
/// Every operation has a no-op default so a policy only implements the
/// capabilities it actually has.
pub trait Unit: Send + Sync {
    fn stepify(&self, value: Value) -> Value {
        value
    }

    fn constrain(&self, value: Value) -> Value {
        value
    }

    fn increment(&self, value: Value, _precise: bool) -> Value {
        value
    }

    fn decrement(&self, value: Value, _precise: bool) -> Value {
        value
    }

    fn drag(&self, value: Value, _amount: i32, _precise: bool) -> Value {
        value
    }

    fn to_string(&self, _value: Value) -> String {
        String::new()
    }

    fn from_string(&self, _string: &str) -> Option<Value> {
        Some(0.0)
    }
}

/// Wraps a [`Unit`] so every gesture lands constrained and on the unit's grid.
pub struct Tweaker<U> {
    unit: U,
}

impl<U: Unit> Tweaker<U> {
    pub fn new(unit: U) -> Self {
        Self {
            unit,
        }
    }

    pub fn stepify(&self, value: Value) -> Value {
        self.unit.stepify(value)
    }

    pub fn constrain(&self, value: Value) -> Value {
        self.unit.constrain(value)
    }

    pub fn snap(&self, value: Value, step_size: Value, snap_amount: Value) -> Value {
        self.stepify(step::snap_value(value, step_size, snap_amount))
    }

    pub fn increment(&self, value: Value, precise: bool) -> Value {
        self.constrain(self.stepify(self.unit.increment(value, precise)))
    }

    pub fn decrement(&self, value: Value, precise: bool) -> Value {
        self.constrain(self.stepify(self.unit.decrement(value, precise)))
    }

    pub fn drag(&self, value: Value, amount: i32, precise: bool) -> Value {
        self.constrain(self.stepify(self.unit.drag(value, amount, precise)))
    }

    pub fn to_string(&self, value: Value) -> String {
        self.unit.to_string(value)
    }

    pub fn from_string(&self, string: &str) -> Option<Value> {
        self.unit.from_string(string)
    }
}
