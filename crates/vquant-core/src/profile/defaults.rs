// crates/vquant-core/src/profile/defaults.rs

use crate::error::{Result, VqError};
use crate::profile::range::{RangeProfile, Shape};

/// Largest magnitude of a 16-bit signed code with -32768 left unused.
pub const MAX_CODE_16: i32 = 32767;

/// 0 ..= 3.3 V
pub const VOLT_3V3: RangeProfile = RangeProfile::from_parts(Shape::Unipolar, 3.3, MAX_CODE_16);

/// 0 ..= 5.0 V
pub const VOLT_5V0: RangeProfile = RangeProfile::from_parts(Shape::Unipolar, 5.0, MAX_CODE_16);

/// -5.0 ..= 5.0 V
pub const VOLT_5V_BIPOLAR: RangeProfile = RangeProfile::from_parts(Shape::Bipolar, 5.0, MAX_CODE_16);

/// Built-in profiles by short name. New ranges are new rows.
pub const BUILTIN: &[(&str, RangeProfile)] = &[
    ("3v3", VOLT_3V3),
    ("5v0", VOLT_5V0),
    ("5v_bipolar", VOLT_5V_BIPOLAR),
];

pub fn builtin(name: &str) -> Option<RangeProfile> {
    BUILTIN
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, p)| *p)
}

/// Like `builtin`, but an unknown name is a config error listing the choices.
pub fn lookup(name: &str) -> Result<RangeProfile> {
    builtin(name).ok_or_else(|| {
        let known: Vec<&str> = BUILTIN.iter().map(|(n, _)| *n).collect();
        VqError::Config(format!(
            "unknown profile {name:?} (known: {})",
            known.join(", ")
        ))
    })
}

/// Reverse lookup of a built-in name, for display.
pub fn builtin_name(p: &RangeProfile) -> Option<&'static str> {
    BUILTIN.iter().find(|(_, b)| b == p).map(|(n, _)| *n)
}
