//! # bsm-greeks: Analytical Option Greeks over Spot/Maturity Grids
//!
//! A Rust library for computing Black-Scholes-Merton sensitivities (Delta,
//! Gamma, Vega, Theta, Rho) of European calls and puts across a grid of
//! spot prices and times to maturity, organized for downstream plotting.
//!
//! ## Key Features
//!
//! - **Closed-Form Analytics**: the five Greeks plus prices, dividend-aware
//! - **Grid Engine**: dynamic axis sizing and a 4D result container
//!   indexed `[greek][option][spot][maturity]`
//! - **Deterministic Layout**: canonical greek/option ordering independent
//!   of selection text, so identical inputs give bit-identical results
//! - **Moneyness Views**: ITM/ATM/OTM curves extracted by axis value
//! - **Robust Validation**: degenerate parameters are rejected before any
//!   allocation, never silently producing empty axes
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_greeks::grid::{compute, GreekSet, GridConfig, OptionSet};
//!
//! // Configure the sweep: ATM option, one year out
//! let cfg = GridConfig {
//!     s0: 100.0,      // Spot price
//!     k: 100.0,       // Strike
//!     r: 0.05,        // Risk-free rate
//!     sigma: 0.2,     // Volatility
//!     t: 1.0,         // Longest maturity
//!     greeks: GreekSet::DELTA | GreekSet::GAMMA,
//!     options: OptionSet::CALL,
//!     ..Default::default()
//! };
//!
//! let surfaces = compute(&cfg).expect("Valid configuration");
//! assert_eq!(surfaces.stock_prices.len(), 201);
//! println!("Greeks computed: {:?}", surfaces.greek_names());
//! ```
//!
//! ## Mathematical Foundation
//!
//! Under the BSM model the underlying follows geometric Brownian motion
//! with constant volatility and rates; every sensitivity here is the exact
//! closed-form partial derivative of the option price, evaluated once per
//! (greek, option, spot, maturity) cell. See `analytics::bs_analytic`.

// Module declarations
pub mod analytics;
pub mod config;
pub mod error;
pub mod grid;
pub mod math_utils;

// Re-export commonly used types for convenience
pub use error::{GreeksError, GreeksResult};
pub use grid::{compute, Greek, GreekSet, GreekSurfaces, GridConfig, OptionKind, OptionSet};
