use num_traits::Float;

use crate::math::{inverse_lerp, lerp};

// 20 / ln(10) and its reciprocal
const LINEAR_TO_DB_SCALE: f64 = 8.6858896380650365530225783783321;
const DB_TO_LINEAR_SCALE: f64 = 0.11512925464970228420089957273422;

// MIDI note 0
const PITCH_REFERENCE_HZ: f64 = 8.1758;

// Semitone span of the filter frequency control, roughly 5 Hz to 20 kHz
const FILTER_PITCH_MIN: f64 = -8.513;
const FILTER_PITCH_MAX: f64 = 135.076;

/// Undefined for non-positive input; callers guard the domain.
pub fn linear_to_db<T: Float>(linear: T) -> T {
    linear.ln() * T::from(LINEAR_TO_DB_SCALE).unwrap()
}

pub fn db_to_linear<T: Float>(db: T) -> T {
    (db * T::from(DB_TO_LINEAR_SCALE).unwrap()).exp()
}

pub fn bi_to_uni<T: Float>(bi: T) -> T {
    (bi + T::one()) / T::from(2.0).unwrap()
}

pub fn uni_to_bi<T: Float>(uni: T) -> T {
    (uni * T::from(2.0).unwrap()) - T::one()
}

pub fn pitch_to_frequency<T: Float>(pitch: T) -> T {
    T::from(PITCH_REFERENCE_HZ).unwrap() * (pitch / T::from(12.0).unwrap()).exp2()
}

pub fn frequency_to_pitch<T: Float>(frequency: T) -> T {
    T::from(12.0).unwrap() * (frequency / T::from(PITCH_REFERENCE_HZ).unwrap()).log2()
}

pub fn linear_to_filter_hz<T: Float>(linear: T) -> T {
    let min = T::from(FILTER_PITCH_MIN).unwrap();
    let max = T::from(FILTER_PITCH_MAX).unwrap();

    pitch_to_frequency(lerp(min, max, linear))
}

pub fn filter_hz_to_linear<T: Float>(hz: T) -> T {
    let min = T::from(FILTER_PITCH_MIN).unwrap();
    let max = T::from(FILTER_PITCH_MAX).unwrap();

    inverse_lerp(min, max, frequency_to_pitch(hz))
}

/// One unit of linear value per octave of speed.
pub fn linear_to_speed<T: Float>(linear: T) -> T {
    linear.exp2()
}

pub fn speed_to_linear<T: Float>(speed: T) -> T {
    speed.log2()
}

pub fn semitones_to_ratio<T: Float>(semitones: T) -> T {
    (semitones / T::from(12.0).unwrap()).exp2()
}

pub fn ratio_to_semitones<T: Float>(ratio: T) -> T {
    ratio.log2() * T::from(12.0).unwrap()
}

pub fn linear_to_ratio<T: Float>(linear: T, max: T) -> T {
    if linear <= T::zero() {
        return T::one();
    }

    max.powf(linear * linear)
}

pub fn ratio_to_linear<T: Float>(ratio: T, max: T) -> T {
    if ratio <= T::one() {
        return T::zero();
    }

    ratio.ln().sqrt() / max.ln().sqrt()
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn db_conversions() {
        assert_eq!(db_to_linear(0.0), 1.0);
        assert_eq!(linear_to_db(1.0), 0.0);
        assert_relative_eq!(db_to_linear(-6.0), 0.501187233627272, max_relative = 1e-9);
        assert_relative_eq!(db_to_linear(12.0), 3.981071705534972, max_relative = 1e-9);

        for linear in [0.001, 0.25, 1.0, 3.5] {
            assert_relative_eq!(db_to_linear(linear_to_db(linear)), linear, max_relative = 1e-4);
        }
    }

    #[test]
    fn bipolar_unipolar() {
        assert_eq!(bi_to_uni(-1.0), 0.0);
        assert_eq!(bi_to_uni(1.0), 1.0);
        assert_eq!(uni_to_bi(0.5), 0.0);
        assert_abs_diff_eq!(uni_to_bi(bi_to_uni(0.3)), 0.3);
    }

    #[test]
    fn pitch_frequency() {
        // MIDI note 69 is concert A
        assert_relative_eq!(pitch_to_frequency(69.0), 440.0, max_relative = 1e-4);
        assert_relative_eq!(frequency_to_pitch(440.0), 69.0, max_relative = 1e-4);
        assert_relative_eq!(frequency_to_pitch(pitch_to_frequency(31.7)), 31.7, max_relative = 1e-4);
    }

    #[test]
    fn filter_hz_span() {
        assert_relative_eq!(linear_to_filter_hz(0.0), 5.0, max_relative = 1e-3);
        assert_relative_eq!(linear_to_filter_hz(1.0), 20_000.0, max_relative = 1e-3);
        assert_relative_eq!(filter_hz_to_linear(linear_to_filter_hz(0.5)), 0.5, max_relative = 1e-4);
    }

    #[test]
    fn speed_octaves() {
        assert_eq!(linear_to_speed(0.0), 1.0);
        assert_eq!(linear_to_speed(1.0), 2.0);
        assert_eq!(linear_to_speed(-1.0), 0.5);
        assert_eq!(speed_to_linear(2.0), 1.0);
        assert_relative_eq!(speed_to_linear(linear_to_speed(-3.3)), -3.3, max_relative = 1e-4);
    }

    #[test]
    fn semitone_ratios() {
        assert_eq!(semitones_to_ratio(12.0), 2.0);
        assert_eq!(ratio_to_semitones(2.0), 12.0);
        assert_relative_eq!(semitones_to_ratio(7.0), 1.4983070768766815, max_relative = 1e-9);
        assert_relative_eq!(ratio_to_semitones(semitones_to_ratio(-4.9)), -4.9, max_relative = 1e-4);
    }

    #[test]
    fn ratio_curve() {
        assert_eq!(linear_to_ratio(0.0, 100.0), 1.0);
        assert_eq!(linear_to_ratio(-0.5, 100.0), 1.0);
        assert_eq!(linear_to_ratio(1.0, 100.0), 100.0);
        assert_eq!(ratio_to_linear(1.0, 100.0), 0.0);
        assert_relative_eq!(ratio_to_linear(linear_to_ratio(0.5, 100.0), 100.0), 0.5, max_relative = 1e-4);
    }
}
