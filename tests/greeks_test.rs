// tests/greeks_test.rs
use bsm_greeks::analytics::bs_analytic;

const S0: f64 = 100.0;
const K: f64 = 100.0;
const R: f64 = 0.05;
const Q: f64 = 0.0;
const T: f64 = 1.0;
const SIGMA: f64 = 0.20;

#[test]
fn test_call_delta_analytic() {
    let delta = bs_analytic::delta(K, S0, R, Q, T, SIGMA, true);
    let expected = 0.636830651; // Phi(0.35)

    let abs_error = (delta - expected).abs();
    println!("\nAnalytic Delta: {}", delta);
    println!("Expected Delta: {}", expected);
    println!("Absolute Error: {}", abs_error);

    assert!(abs_error < 1e-7, "Absolute error for Delta exceeds tolerance: {}", abs_error);
}

#[test]
fn test_call_gamma_analytic() {
    let gamma = bs_analytic::gamma(K, S0, R, Q, T, SIGMA);
    let expected = 0.018762017345847;

    let rel_error = (gamma - expected).abs() / expected;
    println!("\nAnalytic Gamma: {}", gamma);
    println!("Expected Gamma: {}", expected);
    println!("Relative Error: {}", rel_error);

    assert!(rel_error < 1e-9, "Relative error for Gamma exceeds tolerance: {}", rel_error);
}

#[test]
fn test_call_vega_analytic() {
    let vega = bs_analytic::vega(K, S0, R, Q, T, SIGMA);
    let expected = 37.524034691693792;

    let rel_error = (vega - expected).abs() / expected;
    println!("\nAnalytic Vega: {}", vega);
    println!("Expected Vega: {}", expected);
    println!("Relative Error: {}", rel_error);

    assert!(rel_error < 1e-9, "Relative error for Vega exceeds tolerance: {}", rel_error);
}

#[test]
fn test_call_theta_analytic() {
    let theta = bs_analytic::theta(K, S0, R, Q, T, SIGMA, true);
    let expected = -6.414027546438197;

    let rel_error = (theta - expected).abs() / expected.abs();
    println!("\nAnalytic Theta: {}", theta);
    println!("Expected Theta: {}", expected);
    println!("Relative Error: {}", rel_error);

    assert!(rel_error < 1e-9, "Relative error for Theta exceeds tolerance: {}", rel_error);
}

#[test]
fn test_call_rho_analytic() {
    let rho = bs_analytic::rho(K, S0, R, Q, T, SIGMA, true);
    let expected = 53.232482; // K*T*e^(-rT)*Phi(0.15)

    let abs_error = (rho - expected).abs();
    println!("\nAnalytic Rho: {}", rho);
    println!("Expected Rho: {}", expected);
    println!("Absolute Error: {}", abs_error);

    assert!(abs_error < 1e-2, "Absolute error for Rho exceeds tolerance: {}", abs_error);
}

#[test]
fn test_call_price_analytic() {
    let price = bs_analytic::call_price(K, S0, R, Q, T, SIGMA);
    let expected = 10.450584; // classic at-the-money reference value

    let abs_error = (price - expected).abs();
    println!("\nAnalytic Call Price: {}", price);
    println!("Expected Call Price: {}", expected);

    assert!(abs_error < 1e-3, "Absolute error for call price exceeds tolerance: {}", abs_error);
}

#[test]
fn test_put_call_parity_on_price() {
    // C - P = S*e^(-qT) - K*e^(-rT), exercised across moneyness and dividends
    for (s, q) in [(80.0, 0.0), (100.0, 0.0), (120.0, 0.03), (95.0, 0.07)] {
        let call = bs_analytic::call_price(K, s, R, q, T, SIGMA);
        let put = bs_analytic::put_price(K, s, R, q, T, SIGMA);
        let expected = s * (-q * T).exp() - K * (-R * T).exp();

        let abs_error = (call - put - expected).abs();
        assert!(
            abs_error < 1e-10,
            "Put-call parity violated at s={}, q={}: error {}",
            s, q, abs_error
        );
    }
}

#[test]
fn test_put_call_parity_on_delta() {
    // Delta_call - Delta_put = e^(-qT)
    for (s, q, t) in [(60.0, 0.0, 0.5), (100.0, 0.02, 1.0), (140.0, 0.05, 2.0)] {
        let dc = bs_analytic::delta(K, s, R, q, t, SIGMA, true);
        let dp = bs_analytic::delta(K, s, R, q, t, SIGMA, false);
        let expected = (-q * t).exp();

        let abs_error = (dc - dp - expected).abs();
        assert!(
            abs_error < 1e-12,
            "Delta parity violated at s={}, q={}, t={}: error {}",
            s, q, t, abs_error
        );
    }
}

#[test]
fn test_parity_on_rho_and_theta() {
    // Rho_call - Rho_put = K*T*e^(-rT)
    let rho_gap = bs_analytic::rho(K, S0, R, Q, T, SIGMA, true)
        - bs_analytic::rho(K, S0, R, Q, T, SIGMA, false);
    let expected_rho_gap = K * T * (-R * T).exp();
    assert!((rho_gap - expected_rho_gap).abs() < 1e-10);

    // Theta_call - Theta_put = q*S*e^(-qT) - r*K*e^(-rT)
    let q = 0.03;
    let theta_gap = bs_analytic::theta(K, S0, R, q, T, SIGMA, true)
        - bs_analytic::theta(K, S0, R, q, T, SIGMA, false);
    let expected_theta_gap = q * S0 * (-q * T).exp() - R * K * (-R * T).exp();
    assert!((theta_gap - expected_theta_gap).abs() < 1e-10);
}

#[test]
fn test_vega_gamma_relationship() {
    let gamma = bs_analytic::gamma(K, 87.5, R, Q, 0.75, SIGMA);
    let vega = bs_analytic::vega(K, 87.5, R, Q, 0.75, SIGMA);
    assert!(gamma > 0.0 && vega > 0.0);

    // Vega = Gamma * S^2 * sigma * T, a standard cross-check
    let reduced = gamma * 87.5 * 87.5 * SIGMA * 0.75;
    assert!((vega - reduced).abs() / vega < 1e-12);
}

#[test]
fn test_d1_d2_relationship() {
    let d1 = bs_analytic::d1(K, S0, R, Q, T, SIGMA);
    let d2 = bs_analytic::d2(K, S0, R, Q, T, SIGMA);
    assert!((d1 - d2 - SIGMA * T.sqrt()).abs() < 1e-14);

    // At-the-money with q=0: d1 = (r + sigma^2/2)*T / (sigma*sqrt(T))
    assert!((d1 - 0.35).abs() < 1e-12);
}

#[test]
fn test_deep_moneyness_limits() {
    // Deep ITM call delta approaches e^(-qT); deep OTM approaches 0
    let deep_itm = bs_analytic::delta(K, 500.0, R, Q, T, SIGMA, true);
    let deep_otm = bs_analytic::delta(K, 5.0, R, Q, T, SIGMA, true);
    assert!((deep_itm - 1.0).abs() < 1e-6);
    assert!(deep_otm < 1e-6);
}
