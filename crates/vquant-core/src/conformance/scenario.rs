// crates/vquant-core/src/conformance/scenario.rs

use crate::conformance::level::TestLevel;
use crate::error::Result;
use crate::profile::defaults::{builtin_name, VOLT_3V3, VOLT_5V0, VOLT_5V_BIPOLAR};
use crate::profile::range::{RangeProfile, Shape};
use crate::signal::quantize::Quantizer;

use Check::*;
use TestLevel::*;

/// Forward checks pass when `|actual - expected| < CODE_TOLERANCE`.
pub const CODE_TOLERANCE: i32 = 10;

/// Reverse checks pass when `|actual - expected| < VOLT_TOLERANCE` volts.
pub const VOLT_TOLERANCE: f64 = 0.001;

/// Points per swept property check.
pub const SWEEP_STEPS: u32 = 4096;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Check {
    ForwardExact { volts: f64, code: i32 },
    ForwardNear { volts: f64, code: i32 },
    ReverseNear { code: i32, volts: f64 },
    /// Above full scale reads the same as full scale.
    SaturatesHigh,
    /// Below `min_voltage` reads the same as `min_voltage`.
    SaturatesLow,
    Monotonic { steps: u32 },
    RoundTrip { steps: u32 },
    /// `forward(-v) == -forward(v)`; bipolar only.
    OddSymmetry { steps: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    pub level: TestLevel,
    pub name: &'static str,
    pub profile: RangeProfile,
    pub check: Check,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub level: TestLevel,
    pub name: &'static str,
    pub profile: RangeProfile,
    pub passed: bool,
    pub detail: String,
}

impl Outcome {
    /// Built-in profile name, or `custom` for anything else.
    pub fn profile_label(&self) -> &'static str {
        builtin_name(&self.profile).unwrap_or("custom")
    }
}

const fn sc(level: TestLevel, name: &'static str, profile: RangeProfile, check: Check) -> Scenario {
    Scenario {
        level,
        name,
        profile,
        check,
    }
}

/// Reference expectations for the three built-in profiles.
pub const SCENARIOS: &[Scenario] = &[
    // P1: per-profile smoke checks
    sc(P1Basic, "zero", VOLT_3V3, ForwardExact { volts: 0.0, code: 0 }),
    sc(P1Basic, "mid_range", VOLT_3V3, ForwardNear { volts: 2.5, code: 24825 }),
    sc(P1Basic, "maximum", VOLT_3V3, ForwardExact { volts: 3.3, code: 32767 }),
    sc(P1Basic, "reverse", VOLT_3V3, ReverseNear { code: 9930, volts: 1.0 }),
    sc(P1Basic, "zero", VOLT_5V0, ForwardExact { volts: 0.0, code: 0 }),
    sc(P1Basic, "mid_range", VOLT_5V0, ForwardNear { volts: 2.5, code: 16384 }),
    sc(P1Basic, "maximum", VOLT_5V0, ForwardExact { volts: 5.0, code: 32767 }),
    sc(P1Basic, "reverse", VOLT_5V0, ReverseNear { code: 6553, volts: 1.0 }),
    sc(P1Basic, "zero", VOLT_5V_BIPOLAR, ForwardExact { volts: 0.0, code: 0 }),
    sc(P1Basic, "positive", VOLT_5V_BIPOLAR, ForwardNear { volts: 3.0, code: 19660 }),
    sc(P1Basic, "negative", VOLT_5V_BIPOLAR, ForwardNear { volts: -3.0, code: -19660 }),
    sc(P1Basic, "reverse", VOLT_5V_BIPOLAR, ReverseNear { code: 6553, volts: 1.0 }),
    // P2: boundaries and saturation
    sc(P2Intermediate, "reverse_zero", VOLT_3V3, ReverseNear { code: 0, volts: 0.0 }),
    sc(P2Intermediate, "over_range", VOLT_3V3, SaturatesHigh),
    sc(P2Intermediate, "under_range", VOLT_3V3, SaturatesLow),
    sc(P2Intermediate, "reverse_full_scale", VOLT_3V3, ReverseNear { code: 32767, volts: 3.3 }),
    sc(P2Intermediate, "reverse_zero", VOLT_5V0, ReverseNear { code: 0, volts: 0.0 }),
    sc(P2Intermediate, "over_range", VOLT_5V0, SaturatesHigh),
    sc(P2Intermediate, "under_range", VOLT_5V0, SaturatesLow),
    sc(P2Intermediate, "reverse_full_scale", VOLT_5V0, ReverseNear { code: 32767, volts: 5.0 }),
    sc(P2Intermediate, "reverse_zero", VOLT_5V_BIPOLAR, ReverseNear { code: 0, volts: 0.0 }),
    sc(P2Intermediate, "maximum", VOLT_5V_BIPOLAR, ForwardExact { volts: 5.0, code: 32767 }),
    sc(P2Intermediate, "minimum", VOLT_5V_BIPOLAR, ForwardExact { volts: -5.0, code: -32767 }),
    sc(P2Intermediate, "over_range", VOLT_5V_BIPOLAR, SaturatesHigh),
    sc(P2Intermediate, "under_range", VOLT_5V_BIPOLAR, SaturatesLow),
    sc(P2Intermediate, "reverse_negative", VOLT_5V_BIPOLAR, ReverseNear { code: -6553, volts: -1.0 }),
    // P3: swept properties
    sc(P3Advanced, "monotonic", VOLT_3V3, Monotonic { steps: SWEEP_STEPS }),
    sc(P3Advanced, "round_trip", VOLT_3V3, RoundTrip { steps: SWEEP_STEPS }),
    sc(P3Advanced, "monotonic", VOLT_5V0, Monotonic { steps: SWEEP_STEPS }),
    sc(P3Advanced, "round_trip", VOLT_5V0, RoundTrip { steps: SWEEP_STEPS }),
    sc(P3Advanced, "monotonic", VOLT_5V_BIPOLAR, Monotonic { steps: SWEEP_STEPS }),
    sc(P3Advanced, "round_trip", VOLT_5V_BIPOLAR, RoundTrip { steps: SWEEP_STEPS }),
    sc(P3Advanced, "odd_symmetry", VOLT_5V_BIPOLAR, OddSymmetry { steps: SWEEP_STEPS }),
];

/// Scenarios that run at `level` (cumulative).
pub fn scenarios(level: TestLevel) -> impl Iterator<Item = &'static Scenario> {
    SCENARIOS.iter().filter(move |s| s.level <= level)
}

/// Value-independent checks for any profile, e.g. one loaded from a file.
pub fn generic_scenarios(profile: RangeProfile, level: TestLevel) -> Vec<Scenario> {
    let mut out = vec![
        sc(P1Basic, "zero", profile, ForwardExact { volts: 0.0, code: 0 }),
        sc(
            P1Basic,
            "maximum",
            profile,
            ForwardExact {
                volts: profile.full_scale_voltage(),
                code: profile.max_code(),
            },
        ),
        sc(P2Intermediate, "reverse_zero", profile, ReverseNear { code: 0, volts: 0.0 }),
        sc(P2Intermediate, "over_range", profile, SaturatesHigh),
        sc(P2Intermediate, "under_range", profile, SaturatesLow),
        sc(P3Advanced, "monotonic", profile, Monotonic { steps: SWEEP_STEPS }),
        sc(P3Advanced, "round_trip", profile, RoundTrip { steps: SWEEP_STEPS }),
    ];
    if profile.shape() == Shape::Bipolar {
        out.push(sc(
            P2Intermediate,
            "minimum",
            profile,
            ForwardExact {
                volts: -profile.full_scale_voltage(),
                code: -profile.max_code(),
            },
        ));
        out.push(sc(P3Advanced, "odd_symmetry", profile, OddSymmetry { steps: SWEEP_STEPS }));
    }
    out.retain(|s| s.level <= level);
    out
}

/// Runs every built-in scenario at or below `level`.
pub fn run(level: TestLevel) -> Result<Vec<Outcome>> {
    scenarios(level).map(evaluate).collect()
}

pub fn evaluate(s: &Scenario) -> Result<Outcome> {
    let q = Quantizer::new(s.profile)?;
    let (passed, detail) = match s.check {
        ForwardExact { volts, code } => {
            let got = q.forward(volts);
            (got == code, format!("forward({volts}) = {got}, expected {code}"))
        }
        ForwardNear { volts, code } => {
            let got = q.forward(volts);
            (
                (got - code).abs() < CODE_TOLERANCE,
                format!("forward({volts}) = {got}, expected {code} ± {CODE_TOLERANCE}"),
            )
        }
        ReverseNear { code, volts } => {
            let got = q.reverse(code);
            (
                (got - volts).abs() < VOLT_TOLERANCE,
                format!("reverse({code}) = {got:.6}, expected {volts} ± {VOLT_TOLERANCE}"),
            )
        }
        SaturatesHigh => {
            let fs = s.profile.full_scale_voltage();
            let edge = q.forward(fs);
            let over = q.forward(fs * 2.0 + 1.0);
            (
                over == edge,
                format!("forward(over range) = {over}, forward({fs}) = {edge}"),
            )
        }
        SaturatesLow => {
            let min = s.profile.min_voltage();
            let edge = q.forward(min);
            let under = q.forward(min - s.profile.full_scale_voltage() - 1.0);
            (
                under == edge,
                format!("forward(under range) = {under}, forward({min}) = {edge}"),
            )
        }
        Monotonic { steps } => check_monotonic(&q, steps),
        RoundTrip { steps } => check_round_trip(&q, steps),
        OddSymmetry { steps } => check_odd_symmetry(&q, steps),
    };
    Ok(Outcome {
        level: s.level,
        name: s.name,
        profile: s.profile,
        passed,
        detail,
    })
}

/// `steps + 1` evenly spaced voltages from `lo` to `hi` inclusive.
fn sweep(lo: f64, hi: f64, steps: u32) -> impl Iterator<Item = f64> {
    let steps = steps.max(1);
    (0..=steps).map(move |i| lo + (hi - lo) * (i as f64 / steps as f64))
}

fn check_monotonic(q: &Quantizer, steps: u32) -> (bool, String) {
    let p = q.profile();
    let mut prev: Option<(f64, i32)> = None;
    for v in sweep(p.min_voltage(), p.full_scale_voltage(), steps) {
        let code = q.forward(v);
        if let Some((pv, pc)) = prev {
            if code < pc {
                return (false, format!("forward({v}) = {code} < forward({pv}) = {pc}"));
            }
        }
        prev = Some((v, code));
    }
    (true, format!("{} points non-decreasing", steps.max(1) + 1))
}

fn check_round_trip(q: &Quantizer, steps: u32) -> (bool, String) {
    let p = q.profile();
    let bound = q.lsb();
    let mut worst = 0.0f64;
    for v in sweep(p.min_voltage(), p.full_scale_voltage(), steps) {
        let err = (q.reverse(q.forward(v)) - v).abs();
        worst = worst.max(err);
        if err > bound {
            return (false, format!("round trip of {v} off by {err:e} > lsb {bound:e}"));
        }
    }
    (true, format!("worst error {worst:e} <= lsb {bound:e}"))
}

fn check_odd_symmetry(q: &Quantizer, steps: u32) -> (bool, String) {
    let p = q.profile();
    if p.shape() != Shape::Bipolar {
        return (false, "odd symmetry needs a bipolar profile".into());
    }
    for v in sweep(0.0, p.full_scale_voltage(), steps) {
        let pos = q.forward(v);
        let neg = q.forward(-v);
        if neg != -pos {
            return (false, format!("forward({}) = {neg}, forward({v}) = {pos}", -v));
        }
    }
    (true, format!("{} points symmetric", steps.max(1) + 1))
}
