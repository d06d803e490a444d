pub mod error;
pub mod validate;

pub mod profile;
pub mod signal;
pub mod conformance;

pub use crate::error::{Result, VqError};
pub use crate::profile::range::{RangeProfile, Shape};
pub use crate::profile::defaults::{VOLT_3V3, VOLT_5V0, VOLT_5V_BIPOLAR};
pub use crate::signal::quantize::Quantizer;
