// crates/vquant-core/src/signal/quantize.rs

use std::ops::RangeInclusive;

use crate::error::Result;
use crate::profile::range::RangeProfile;
use crate::signal::register::{from_register, to_register};
use crate::validate::validate_range;

/// Linear voltage <-> code mapping for one range profile.
///
/// `forward` models an ADC, `reverse` a DAC. Both are built on one scale
/// factor (codes per volt) derived at construction, so the two directions
/// stay inverse-consistent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantizer {
    profile: RangeProfile,
    scale: f64,
}

impl Quantizer {
    pub fn new(profile: RangeProfile) -> Result<Self> {
        validate_range(profile.full_scale_voltage(), profile.max_code())?;
        let scale = profile.max_code() as f64 / profile.full_scale_voltage();
        Ok(Self { profile, scale })
    }

    #[inline]
    pub fn profile(&self) -> &RangeProfile {
        &self.profile
    }

    /// Codes per volt.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Volts per code (one LSB).
    #[inline]
    pub fn lsb(&self) -> f64 {
        1.0 / self.scale
    }

    pub fn code_range(&self) -> RangeInclusive<i32> {
        self.profile.min_code()..=self.profile.max_code()
    }

    /// Voltage to code, saturating at both ends of the profile.
    ///
    /// - clamp input to `min_voltage..=full_scale_voltage`
    /// - scale, round half away from zero
    /// - clamp again to the code range (absorbs rounding at full scale)
    ///
    /// NaN has no meaningful position in the range and maps to code 0.
    pub fn forward(&self, voltage: f64) -> i32 {
        if voltage.is_nan() {
            return 0;
        }
        let v = voltage.clamp(self.profile.min_voltage(), self.profile.full_scale_voltage());

        // f64::round is half-away-from-zero; the cast saturates at i32 bounds.
        let code = (v * self.scale).round() as i32;

        code.clamp(self.profile.min_code(), self.profile.max_code())
    }

    /// Code to voltage. No clamping: codes outside the profile extrapolate
    /// linearly, like a DAC past its calibrated points.
    #[inline]
    pub fn reverse(&self, code: i32) -> f64 {
        code as f64 / self.scale
    }

    /// `forward`, returned as the raw register word.
    pub fn forward_register(&self, voltage: f64) -> u32 {
        to_register(self.forward(voltage), self.profile.register_bits())
    }

    /// `reverse` of a raw register word, read as unsigned (unipolar) or
    /// sign-extended (bipolar).
    pub fn reverse_register(&self, word: u32) -> f64 {
        let code = from_register(word, self.profile.register_bits(), self.profile.shape());
        self.reverse(code)
    }

    /// True when `forward` had to saturate `voltage` to the profile's range.
    pub fn saturates(&self, voltage: f64) -> bool {
        voltage < self.profile.min_voltage() || voltage > self.profile.full_scale_voltage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::defaults::{VOLT_3V3, VOLT_5V0, VOLT_5V_BIPOLAR};
    use crate::profile::range::Shape;

    #[test]
    fn scale_is_codes_per_volt() {
        let q = Quantizer::new(VOLT_5V0).unwrap();
        assert!((q.scale() - 6553.4).abs() < 1e-9);
        assert!((q.lsb() * q.scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn full_scale_hits_max_code_exactly() {
        for p in [VOLT_3V3, VOLT_5V0, VOLT_5V_BIPOLAR] {
            let q = Quantizer::new(p).unwrap();
            assert_eq!(q.forward(p.full_scale_voltage()), p.max_code(), "{p}");
        }
    }

    #[test]
    fn ties_round_away_from_zero() {
        // scale = 1 code/V makes x.5 inputs exact ties.
        let p = RangeProfile::new(Shape::Bipolar, 100.0, 100).unwrap();
        let q = Quantizer::new(p).unwrap();
        assert_eq!(q.forward(2.5), 3);
        assert_eq!(q.forward(-2.5), -3);
        assert_eq!(q.forward(2.49), 2);
        assert_eq!(q.forward(-2.49), -2);
    }

    #[test]
    fn nan_maps_to_zero() {
        let q = Quantizer::new(VOLT_5V_BIPOLAR).unwrap();
        assert_eq!(q.forward(f64::NAN), 0);
    }

    #[test]
    fn infinities_saturate() {
        let q = Quantizer::new(VOLT_5V_BIPOLAR).unwrap();
        assert_eq!(q.forward(f64::INFINITY), 32767);
        assert_eq!(q.forward(f64::NEG_INFINITY), -32767);

        let u = Quantizer::new(VOLT_3V3).unwrap();
        assert_eq!(u.forward(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn reverse_extrapolates_out_of_range_codes() {
        let q = Quantizer::new(VOLT_5V0).unwrap();
        let v = q.reverse(-32767);
        assert!((v + 5.0).abs() < 1e-9, "got {v}");
        assert!(q.reverse(65534) > 9.99);
    }

    #[test]
    fn saturates_flags_out_of_range_inputs() {
        let q = Quantizer::new(VOLT_3V3).unwrap();
        assert!(q.saturates(-0.1));
        assert!(q.saturates(3.31));
        assert!(!q.saturates(0.0));
        assert!(!q.saturates(3.3));
    }
}
