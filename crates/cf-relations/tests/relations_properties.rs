//! Cross-checks between relations over a range of Mach numbers and gases.

use cf_core::{Tolerances, nearly_equal};
use cf_relations::{RelationError, fanno, isentropic, normal_shock, rayleigh};
use proptest::prelude::*;

const GAMMAS: [f64; 4] = [1.4, 1.33, 1.3, 1.67];

#[test]
fn starred_ratios_are_unity_at_sonic_point() {
    for gamma in GAMMAS {
        let sonic = [
            isentropic::area_ratio(1.0, gamma),
            fanno::impulse_ratio(1.0, gamma),
            fanno::temperature_ratio(1.0, gamma),
            fanno::stagnation_pressure_ratio(1.0, gamma),
            fanno::pressure_ratio(1.0, gamma),
            rayleigh::stagnation_temperature_ratio(1.0, gamma),
            rayleigh::temperature_ratio(1.0, gamma),
            rayleigh::stagnation_pressure_ratio(1.0, gamma),
            rayleigh::pressure_ratio(1.0, gamma),
        ];
        for value in sonic {
            let v = value.unwrap();
            assert!(
                nearly_equal(v, 1.0, Tolerances::default()),
                "gamma={gamma}: {v}"
            );
        }
        assert!(fanno::friction_parameter(1.0, gamma).unwrap().abs() < 1e-9);
    }
}

#[test]
fn isentropic_ratios_are_consistent_with_perfect_gas_law() {
    // P/Pt = (ρ/ρt)(T/Tt)
    for gamma in GAMMAS {
        for m in [0.1, 0.5, 1.0, 2.0, 3.5] {
            let p = isentropic::pressure_ratio(m, gamma).unwrap();
            let rho = isentropic::density_ratio(m, gamma).unwrap();
            let t = isentropic::temperature_ratio(m, gamma).unwrap();
            assert!((p - rho * t).abs() < 1e-12);
        }
    }
}

#[test]
fn fanno_stagnation_pressure_matches_isentropic_area_ratio() {
    for m in [0.2, 0.7, 1.3, 2.5] {
        let a = isentropic::area_ratio(m, 1.4).unwrap();
        let pt = fanno::stagnation_pressure_ratio(m, 1.4).unwrap();
        assert!(nearly_equal(a, pt, Tolerances::default()));
    }
}

#[test]
fn zero_mach_fails_for_every_regime() {
    let results = [
        isentropic::area_ratio(0.0, 1.4),
        fanno::friction_parameter(0.0, 1.4),
        rayleigh::phi(0.0, 1.4),
        normal_shock::downstream_mach(0.0, 1.4),
    ];
    for r in results {
        assert!(matches!(r, Err(RelationError::Mach { .. })));
    }
}

proptest! {
    #[test]
    fn downstream_mach_is_bounded(mx in 1.0001_f64..20.0, gamma in 1.05_f64..1.67) {
        let my = normal_shock::downstream_mach(mx, gamma).unwrap();
        let floor = ((gamma - 1.0) / (2.0 * gamma)).sqrt();
        prop_assert!(my > floor);
        prop_assert!(my < 1.0);
    }

    #[test]
    fn downstream_mach_is_strictly_decreasing(
        mx in 1.0001_f64..15.0,
        delta in 1e-3_f64..1.0,
        gamma in 1.05_f64..1.67,
    ) {
        let a = normal_shock::downstream_mach(mx, gamma).unwrap();
        let b = normal_shock::downstream_mach(mx + delta, gamma).unwrap();
        prop_assert!(b < a);
    }

    #[test]
    fn total_pressure_forms_agree(mx in 1.0001_f64..10.0, gamma in 1.05_f64..1.67) {
        let a = normal_shock::total_pressure_ratio(mx, gamma).unwrap();
        let b = normal_shock::total_pressure_ratio_via_static(mx, gamma).unwrap();
        prop_assert!((a - b).abs() <= 1e-6 * a.abs().max(1.0));
        prop_assert!(a <= 1.0 + 1e-12);
    }

    #[test]
    fn shock_temperature_ratio_is_pressure_over_density(mx in 1.0_f64..10.0) {
        let t = normal_shock::temperature_ratio(mx, 1.4).unwrap();
        let p = normal_shock::static_pressure_ratio(mx, 1.4).unwrap();
        let rho = normal_shock::density_ratio(mx, 1.4).unwrap();
        prop_assert!((t - p / rho).abs() < 1e-12);
    }
}
