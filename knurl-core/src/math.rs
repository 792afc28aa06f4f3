use num_traits::Float;

pub fn lerp<T: Float>(a: T, b: T, x: T) -> T {
    (x * (b - a)) + a
}

pub fn inverse_lerp<T: Float>(a: T, b: T, x: T) -> T {
    (x - a) / (b - a)
}

/// Round to the nearest multiple of `step`, halves rounding up.
/// A zero step leaves the value untouched.
pub fn stepify<T: Float>(value: T, step: T) -> T {
    if step == T::zero() {
        return value;
    }

    ((value / step) + T::from(0.5).unwrap()).floor() * step
}

/// Quantize to a grid of `1/N`.
pub fn stepify_div<const N: i32>(value: f32) -> f32 {
    stepify(value, 1.0 / N as f32)
}
