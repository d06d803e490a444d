//! Invariants of the forward/reverse mapping, checked with proptest.

use proptest::prelude::*;
use vquant_core::{Quantizer, RangeProfile, Shape, VOLT_3V3, VOLT_5V0, VOLT_5V_BIPOLAR};

fn builtin_strategy() -> impl Strategy<Value = RangeProfile> {
    prop_oneof![Just(VOLT_3V3), Just(VOLT_5V0), Just(VOLT_5V_BIPOLAR)]
}

// Arbitrary valid profiles, including narrow codes and odd full scales.
fn profile_strategy() -> impl Strategy<Value = RangeProfile> {
    (
        prop_oneof![Just(Shape::Unipolar), Just(Shape::Bipolar)],
        0.001f64..1000.0,
        1i32..=i32::MAX,
    )
        .prop_map(|(shape, fs, mc)| RangeProfile::new(shape, fs, mc).expect("valid by construction"))
}

/// Profile plus a voltage inside its range.
fn in_range() -> impl Strategy<Value = (RangeProfile, f64)> {
    prop_oneof![builtin_strategy(), profile_strategy()].prop_flat_map(|p| {
        let lo = p.min_voltage();
        let hi = p.full_scale_voltage();
        (Just(p), lo..=hi)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn forward_stays_in_code_range(p in profile_strategy(), v in any::<f64>()) {
        let q = Quantizer::new(p).unwrap();
        let code = q.forward(v);
        prop_assert!(q.code_range().contains(&code), "{p}: forward({v}) = {code}");
    }

    #[test]
    fn forward_is_monotonic((p, a) in in_range(), t in 0.0f64..=1.0) {
        let q = Quantizer::new(p).unwrap();
        let b = a + (p.full_scale_voltage() - a) * t;
        prop_assert!(q.forward(a) <= q.forward(b), "{p}: forward({a}) > forward({b})");
    }

    #[test]
    fn round_trip_within_one_lsb((p, v) in in_range()) {
        let q = Quantizer::new(p).unwrap();
        let back = q.reverse(q.forward(v));
        prop_assert!((back - v).abs() <= q.lsb(), "{p}: {v} -> {back}, lsb {}", q.lsb());
    }

    #[test]
    fn saturates_above_full_scale(p in profile_strategy(), over in 0.0f64..1e6) {
        let q = Quantizer::new(p).unwrap();
        let fs = p.full_scale_voltage();
        prop_assert_eq!(q.forward(fs + over), q.forward(fs));
        prop_assert_eq!(q.forward(fs), p.max_code());
    }

    #[test]
    fn saturates_below_min_voltage(p in profile_strategy(), under in 0.0f64..1e6) {
        let q = Quantizer::new(p).unwrap();
        let min = p.min_voltage();
        prop_assert_eq!(q.forward(min - under), q.forward(min));
        prop_assert_eq!(q.forward(min), p.min_code());
    }

    #[test]
    fn bipolar_is_odd(v in 0.0f64..=5.0) {
        let q = Quantizer::new(VOLT_5V_BIPOLAR).unwrap();
        prop_assert_eq!(q.forward(-v), -q.forward(v));
    }

    #[test]
    fn register_word_reads_back(p in builtin_strategy(), v in -10.0f64..10.0) {
        let q = Quantizer::new(p).unwrap();
        let code = q.forward(v);
        prop_assert_eq!(q.reverse_register(q.forward_register(v)), q.reverse(code));
    }
}
