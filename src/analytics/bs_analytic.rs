// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes-Merton prices and Greeks for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes-Merton model with continuous dividend yield q,
//! the underlying asset follows:
//! ```text
//! dS_t = (r - q) S_t dt + σ S_t dW_t
//! ```
//!
//! Closed-form prices and sensitivities are expressed through the
//! standardized intermediate terms:
//! ```text
//! d₁ = [ln(S/K) + (r - q + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! ```
//!
//! All functions here are pure and stateless: deterministic in their
//! arguments, no shared state, thread-safe by construction.
//!
//! # Domain
//!
//! Callers must guarantee `t > 0` and `sigma > 0`; neither d₁ nor d₂ is
//! defined at expiry. `s = 0` flows through the logarithm to `-∞` and is
//! propagated as a non-finite result rather than guarded here.

use crate::math_utils::{norm_cdf, norm_pdf};

/// d₁ intermediate term
pub fn d1(k: f64, s: f64, r: f64, q: f64, t: f64, sigma: f64) -> f64 {
    ((s / k).ln() + (r - q + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt())
}

/// d₂ intermediate term: d₁ - σ√T
pub fn d2(k: f64, s: f64, r: f64, q: f64, t: f64, sigma: f64) -> f64 {
    d1(k, s, r, q, t, sigma) - sigma * t.sqrt()
}

/// European call price
///
/// # Formula
/// ```text
/// C = S*e^(-qT)*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
pub fn call_price(k: f64, s: f64, r: f64, q: f64, t: f64, sigma: f64) -> f64 {
    let d1 = d1(k, s, r, q, t, sigma);
    let d2 = d1 - sigma * t.sqrt();
    s * (-q * t).exp() * norm_cdf(0.0, 1.0, d1) - k * (-r * t).exp() * norm_cdf(0.0, 1.0, d2)
}

/// European put price
///
/// # Formula
/// ```text
/// P = K*e^(-rT)*Φ(-d₂) - S*e^(-qT)*Φ(-d₁)
/// ```
pub fn put_price(k: f64, s: f64, r: f64, q: f64, t: f64, sigma: f64) -> f64 {
    let d1 = d1(k, s, r, q, t, sigma);
    let d2 = d1 - sigma * t.sqrt();
    k * (-r * t).exp() * norm_cdf(0.0, 1.0, -d2) - s * (-q * t).exp() * norm_cdf(0.0, 1.0, -d1)
}

/// Delta (∂V/∂S)
///
/// # Formula
/// ```text
/// call: Δ = e^(-qT)*Φ(d₁)
/// put:  Δ = e^(-qT)*(Φ(d₁) - 1)
/// ```
///
/// # Interpretation
/// - Hedge ratio: shares held per option sold
/// - Range: [0, e^(-qT)] for calls, [-e^(-qT), 0] for puts
pub fn delta(k: f64, s: f64, r: f64, q: f64, t: f64, sigma: f64, is_call: bool) -> f64 {
    let nd1 = norm_cdf(0.0, 1.0, d1(k, s, r, q, t, sigma));
    if is_call {
        (-q * t).exp() * nd1
    } else {
        (-q * t).exp() * (nd1 - 1.0)
    }
}

/// Gamma (∂²V/∂S²), identical for calls and puts
///
/// # Formula
/// ```text
/// Γ = e^(-qT)*φ(d₁) / (S*σ*√T)
/// ```
///
/// Maximum near the money, vanishing deep in or out of the money.
pub fn gamma(k: f64, s: f64, r: f64, q: f64, t: f64, sigma: f64) -> f64 {
    (-q * t).exp() * norm_pdf(0.0, 1.0, d1(k, s, r, q, t, sigma)) / (s * sigma * t.sqrt())
}

/// Vega (∂V/∂σ), identical for calls and puts
///
/// # Formula
/// ```text
/// ν = S*e^(-qT)*φ(d₁)*√T
/// ```
pub fn vega(k: f64, s: f64, r: f64, q: f64, t: f64, sigma: f64) -> f64 {
    s * (-q * t).exp() * norm_pdf(0.0, 1.0, d1(k, s, r, q, t, sigma)) * t.sqrt()
}

/// Theta (∂V/∂t, time decay)
///
/// # Formula
/// ```text
/// call: Θ = -S*σ*e^(-qT)*φ(d₁)/(2√T) - r*K*e^(-rT)*Φ(d₂) + q*S*e^(-qT)*Φ(d₁)
/// put:  Θ = -S*σ*e^(-qT)*φ(d₁)/(2√T) + r*K*e^(-rT)*Φ(-d₂) - q*S*e^(-qT)*Φ(-d₁)
/// ```
pub fn theta(k: f64, s: f64, r: f64, q: f64, t: f64, sigma: f64, is_call: bool) -> f64 {
    let d1 = d1(k, s, r, q, t, sigma);
    let d2 = d1 - sigma * t.sqrt();
    let decay = -(s * sigma * (-q * t).exp() * norm_pdf(0.0, 1.0, d1)) / (2.0 * t.sqrt());
    if is_call {
        decay - r * k * (-r * t).exp() * norm_cdf(0.0, 1.0, d2)
            + q * s * (-q * t).exp() * norm_cdf(0.0, 1.0, d1)
    } else {
        decay + r * k * (-r * t).exp() * norm_cdf(0.0, 1.0, -d2)
            - q * s * (-q * t).exp() * norm_cdf(0.0, 1.0, -d1)
    }
}

/// Rho (∂V/∂r)
///
/// # Formula
/// ```text
/// call: ρ = K*T*e^(-rT)*Φ(d₂)
/// put:  ρ = -K*T*e^(-rT)*Φ(-d₂)
/// ```
pub fn rho(k: f64, s: f64, r: f64, q: f64, t: f64, sigma: f64, is_call: bool) -> f64 {
    let d2 = d2(k, s, r, q, t, sigma);
    if is_call {
        k * t * (-r * t).exp() * norm_cdf(0.0, 1.0, d2)
    } else {
        -k * t * (-r * t).exp() * norm_cdf(0.0, 1.0, -d2)
    }
}
