use crate::error::{Result, VqError};

/// Checks the construction invariants shared by every range profile.
pub fn validate_range(full_scale_voltage: f64, max_code: i32) -> Result<()> {
    // NaN fails every comparison, so test finiteness first.
    if !full_scale_voltage.is_finite() {
        return Err(VqError::InvalidProfile(format!(
            "full_scale_voltage must be finite, got {full_scale_voltage}"
        )));
    }
    if full_scale_voltage <= 0.0 {
        return Err(VqError::InvalidProfile(format!(
            "full_scale_voltage must be > 0, got {full_scale_voltage}"
        )));
    }
    if max_code <= 0 {
        return Err(VqError::InvalidProfile(format!(
            "max_code must be > 0, got {max_code}"
        )));
    }
    Ok(())
}
