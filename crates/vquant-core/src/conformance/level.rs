// crates/vquant-core/src/conformance/level.rs

use std::fmt;
use std::str::FromStr;

use crate::error::VqError;

/// Cumulative scenario tier. A level runs its own scenarios plus every
/// lower level's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TestLevel {
    #[default]
    P1Basic,
    P2Intermediate,
    P3Advanced,
}

impl TestLevel {
    pub const ALL: [TestLevel; 3] = [
        TestLevel::P1Basic,
        TestLevel::P2Intermediate,
        TestLevel::P3Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TestLevel::P1Basic => "P1_BASIC",
            TestLevel::P2Intermediate => "P2_INTERMEDIATE",
            TestLevel::P3Advanced => "P3_ADVANCED",
        }
    }
}

impl fmt::Display for TestLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TestLevel {
    type Err = VqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TestLevel::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| VqError::Config(format!("unknown test level {s:?}")))
    }
}
