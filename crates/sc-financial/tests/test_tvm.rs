//! End-to-end checks of the time-value-of-money functions against reference
//! values and against each other.

use approx::assert_abs_diff_eq;
use sc_core::Error;
use sc_financial::{annuity_rate, irr, irr_with, npv, pv, rate, IrrConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sc_financial=debug,sc_math=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_pv_reference_values() {
    assert_abs_diff_eq!(pv(0.05, 10.0, 100.0).unwrap(), 772.173_492_918_481_8, epsilon = 1e-9);
    // A negative payment mirrors the sign.
    assert_abs_diff_eq!(pv(0.05, 10.0, -100.0).unwrap(), -772.173_492_918_481_8, epsilon = 1e-9);
    // Zero periods leave nothing to discount.
    assert_eq!(pv(0.05, 0.0, 100.0).unwrap(), 0.0);
}

#[test]
fn test_npv_reference_values() {
    assert_abs_diff_eq!(
        npv(0.1, &[100.0, 200.0, 300.0]).unwrap(),
        481.592_787_377_911_24,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(npv(0.0, &[100.0, 200.0, 300.0]).unwrap(), 600.0, epsilon = 1e-12);
}

#[test]
fn test_npv_of_level_payments_matches_pv() {
    let flows = [100.0; 10];
    assert_abs_diff_eq!(
        npv(0.05, &flows).unwrap(),
        pv(0.05, 10.0, 100.0).unwrap(),
        epsilon = 1e-9
    );
}

#[test]
fn test_irr_zeroes_npv() {
    init_tracing();
    let flows = [-1000.0, 300.0, 420.0, 680.0];
    let solution = irr_with(&flows, &IrrConfig::default()).unwrap();
    assert_abs_diff_eq!(solution.rate, 0.163_405_626, epsilon = 1e-6);
    assert!(solution.residual.abs() < 1e-4);
    assert!(solution.iterations <= 10);
    assert_eq!(npv(solution.rate, &flows).unwrap(), solution.residual);
}

#[test]
fn test_irr_of_a_bond() {
    // Par bond with a 10 % coupon yields 10 %.
    let r = irr(&[-1000.0, 100.0, 100.0, 1100.0]).unwrap();
    assert_abs_diff_eq!(r, 0.10, epsilon = 1e-6);
}

#[test]
fn test_irr_failures_are_errors() {
    init_tracing();
    assert!(matches!(irr(&[]), Err(Error::DegenerateInput(_))));
    assert!(matches!(
        irr(&[100.0, 200.0, 300.0]),
        Err(Error::DegenerateInput(_))
    ));
    assert!(matches!(irr(&[100.0, -50.0]), Err(Error::DegenerateInput(_))));
    let tight = IrrConfig::default().with_max_iterations(1);
    assert!(matches!(
        irr_with(&[-1000.0, 300.0, 420.0, 680.0], &tight),
        Err(Error::NoConvergence { .. })
    ));
}

#[test]
fn test_tighter_tolerance_is_honoured() {
    let flows = [-1000.0, 300.0, 420.0, 680.0];
    let config = IrrConfig::default().with_tolerance(1e-10);
    let solution = irr_with(&flows, &config).unwrap();
    assert!(npv(solution.rate, &flows).unwrap().abs() < 1e-10);
}

#[test]
fn test_rate_and_annuity_rate_differ() {
    let present_value = pv(0.05, 10.0, 100.0).unwrap();
    let approx = rate(10.0, 100.0, present_value).unwrap();
    let exact = annuity_rate(10.0, 100.0, present_value).unwrap();
    assert_abs_diff_eq!(approx, 0.091_186_368_996, epsilon = 1e-9);
    assert_abs_diff_eq!(exact, 0.05, epsilon = 1e-9);
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let flows = [-1000.0, 300.0, 420.0, 680.0];
    for _ in 0..3 {
        assert_eq!(
            irr(&flows).unwrap().to_bits(),
            irr(&flows).unwrap().to_bits()
        );
        assert_eq!(
            npv(0.07, &flows).unwrap().to_bits(),
            npv(0.07, &flows).unwrap().to_bits()
        );
        assert_eq!(
            pv(0.07, 12.0, 250.0).unwrap().to_bits(),
            pv(0.07, 12.0, 250.0).unwrap().to_bits()
        );
    }
}
