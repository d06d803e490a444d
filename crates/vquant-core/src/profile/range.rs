// crates/vquant-core/src/profile/range.rs

use std::fmt;

use crate::error::{Result, VqError};
use crate::validate::validate_range;

/// Shape of a voltage range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `0 ..= full_scale`
    Unipolar,
    /// `-full_scale ..= full_scale`
    Bipolar,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Unipolar => "unipolar",
            Shape::Bipolar => "bipolar",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A voltage range and the code magnitude its full scale maps to.
///
/// Immutable once built. Two profiles with the same values are the same
/// profile; there is no identity beyond the values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeProfile {
    shape: Shape,
    full_scale_voltage: f64,
    max_code: i32,
}

impl RangeProfile {
    /// Fails with `InvalidProfile` when `full_scale_voltage <= 0`, is not
    /// finite, or `max_code <= 0`.
    pub fn new(shape: Shape, full_scale_voltage: f64, max_code: i32) -> Result<Self> {
        validate_range(full_scale_voltage, max_code)?;
        Ok(Self::from_parts(shape, full_scale_voltage, max_code))
    }

    /// Profile whose code is a signed `bits`-wide word with the most negative
    /// value left unused, so `max_code = 2^(bits-1) - 1`.
    pub fn signed_bits(shape: Shape, full_scale_voltage: f64, bits: u32) -> Result<Self> {
        if !(2..=32).contains(&bits) {
            return Err(VqError::InvalidProfile(format!(
                "code width must be 2..=32 bits, got {bits}"
            )));
        }
        let max_code = ((1i64 << (bits - 1)) - 1) as i32;
        Self::new(shape, full_scale_voltage, max_code)
    }

    /// Const constructor for the built-in table. Callers must uphold the
    /// invariants checked by `new`.
    pub(crate) const fn from_parts(shape: Shape, full_scale_voltage: f64, max_code: i32) -> Self {
        Self {
            shape,
            full_scale_voltage,
            max_code,
        }
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn full_scale_voltage(&self) -> f64 {
        self.full_scale_voltage
    }

    #[inline]
    pub fn max_code(&self) -> i32 {
        self.max_code
    }

    #[inline]
    pub fn min_voltage(&self) -> f64 {
        match self.shape {
            Shape::Unipolar => 0.0,
            Shape::Bipolar => -self.full_scale_voltage,
        }
    }

    /// Smallest valid code.
    #[inline]
    pub fn min_code(&self) -> i32 {
        match self.shape {
            Shape::Unipolar => 0,
            Shape::Bipolar => -self.max_code,
        }
    }

    /// Width of the two's-complement register holding a code of this profile.
    /// 16 for `max_code = 32767`.
    pub fn register_bits(&self) -> u32 {
        let magnitude_bits = u32::BITS - (self.max_code as u32).leading_zeros();
        magnitude_bits + 1
    }
}

impl fmt::Display for RangeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}..={} V, max_code={}",
            self.shape,
            self.min_voltage(),
            self.full_scale_voltage,
            self.max_code
        )
    }
}
