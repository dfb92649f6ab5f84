// src/grid/engine.rs
//! Grid computation over spot prices and times to maturity
//!
//! Builds the spot and maturity axes from the current parameters, sizes a
//! four-dimensional result container `[greek][option][spot][maturity]`, and
//! fills every cell from the closed-form BSM analytics.
//!
//! `compute` is a pure function: identical inputs reproduce bit-identical
//! outputs, so callers may cache results keyed on the full parameter tuple.
//! Each `(greek, option)` slice depends only on immutable inputs, which is
//! why the fill is parallelized at exactly that granularity.
//!
//! Axis lengths are derived analytically and points are produced by index
//! multiplication (`start + step * i`), never by repeated addition, so the
//! container dimensions always match the axes exactly.

use crate::analytics::bs_analytic;
use crate::error::{validation::*, GreeksError, GreeksResult};
use crate::grid::selection::{Greek, GreekSet, OptionKind, OptionSet};
use ndarray::{s, Array2, Array4, ArrayView2};
use rayon::prelude::*;

/// Offset of the maturity axis: the shortest maturity ever evaluated.
/// d1/d2 are undefined at expiry, so the axis never reaches T = 0.
pub const MIN_MATURITY: f64 = 0.01;

/// Inputs for one grid computation, immutable once passed to `compute`
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Current spot price (used by moneyness extraction, not the sweep)
    pub s0: f64,
    /// Strike price; also fixes the spot axis span [0, 2K]
    pub k: f64,
    /// Risk-free rate
    pub r: f64,
    /// Continuous dividend yield
    pub q: f64,
    /// Volatility
    pub sigma: f64,
    /// Longest time to maturity in years
    pub t: f64,
    /// Maturity-axis resolution: the axis has `num_maturities + 1` points
    pub num_maturities: usize,
    /// Greeks to compute
    pub greeks: GreekSet,
    /// Option kinds to compute
    pub options: OptionSet,
}

impl GridConfig {
    /// Validate the grid configuration
    ///
    /// Rejects degenerate inputs before any allocation: non-positive
    /// strike, spot, volatility, or maturity, a maturity at or below the
    /// axis origin, a zero-resolution maturity axis, and empty selections.
    pub fn validate(&self) -> GreeksResult<()> {
        validate_positive("s0", self.s0)?;
        validate_positive("k", self.k)?;
        validate_positive("sigma", self.sigma)?;
        validate_positive("t", self.t)?;
        validate_finite("r", self.r)?;
        validate_finite("q", self.q)?;
        validate_maturities(self.num_maturities)?;

        if self.t <= MIN_MATURITY {
            return Err(GreeksError::InvalidParameters {
                parameter: "t".to_string(),
                value: self.t,
                constraint: format!("must exceed the axis origin ({})", MIN_MATURITY),
            });
        }
        if self.greeks.is_empty() {
            return Err(GreeksError::InvalidConfiguration {
                field: "greeks".to_string(),
                reason: "selection must not be empty".to_string(),
            });
        }
        if self.options.is_empty() {
            return Err(GreeksError::InvalidConfiguration {
                field: "options".to_string(),
                reason: "selection must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            s0: 100.0,
            k: 100.0,
            r: 0.01,
            q: 0.0,
            sigma: 0.2,
            t: 1.0,
            num_maturities: 10,
            greeks: GreekSet::all(),
            options: OptionSet::all(),
        }
    }
}

/// Fully populated result of one grid computation
///
/// `values` is indexed `[greek][option][spot][maturity]`, with the first
/// two axes following the canonical orders carried in `greeks` and
/// `options` so consumers can label output without re-deriving the mapping.
#[derive(Debug, Clone)]
pub struct GreekSurfaces {
    pub stock_prices: Vec<f64>,
    pub maturities: Vec<f64>,
    pub greeks: Vec<Greek>,
    pub options: Vec<OptionKind>,
    pub values: Array4<f64>,
}

impl GreekSurfaces {
    /// Index of a Greek in the first axis, if it was selected
    pub fn greek_index(&self, greek: Greek) -> Option<usize> {
        self.greeks.iter().position(|&g| g == greek)
    }

    /// Index of an option kind in the second axis, if it was selected
    pub fn option_index(&self, kind: OptionKind) -> Option<usize> {
        self.options.iter().position(|&o| o == kind)
    }

    /// The spot×maturity slice for one (greek, option) pair
    pub fn surface(&self, greek: Greek, kind: OptionKind) -> Option<ArrayView2<'_, f64>> {
        let gi = self.greek_index(greek)?;
        let oi = self.option_index(kind)?;
        Some(self.values.slice(s![gi, oi, .., ..]))
    }

    /// Labels for the first axis, aligned with greek indices
    pub fn greek_names(&self) -> Vec<&'static str> {
        self.greeks.iter().map(|g| g.name()).collect()
    }

    /// Labels for the second axis, aligned with option indices
    pub fn option_names(&self) -> Vec<&'static str> {
        self.options.iter().map(|o| o.name()).collect()
    }
}

/// Evaluate one Greek for one option kind at a single (spot, maturity) cell
fn evaluate(greek: Greek, kind: OptionKind, k: f64, s: f64, r: f64, q: f64, t: f64, sigma: f64) -> f64 {
    match greek {
        Greek::Delta => bs_analytic::delta(k, s, r, q, t, sigma, kind.is_call()),
        Greek::Gamma => bs_analytic::gamma(k, s, r, q, t, sigma),
        Greek::Vega => bs_analytic::vega(k, s, r, q, t, sigma),
        Greek::Theta => bs_analytic::theta(k, s, r, q, t, sigma, kind.is_call()),
        Greek::Rho => bs_analytic::rho(k, s, r, q, t, sigma, kind.is_call()),
    }
}

/// Uniform axis produced by index multiplication
fn linear_axis(start: f64, step: f64, points: usize) -> Vec<f64> {
    (0..points).map(|i| start + step * i as f64).collect()
}

/// Compute Greek surfaces over the spot and maturity axes
///
/// # Algorithm
///
/// 1. Validate the configuration (see `GridConfig::validate`).
/// 2. Build the spot axis over `[0, 2K]` with step `K/100` (201 points)
///    and the maturity axis over `[MIN_MATURITY, T]` with
///    `num_maturities + 1` points.
/// 3. Allocate the 4D container sized to the selections and axes.
/// 4. Fill every `(greek, option)` slice, sweeping all (spot, maturity)
///    cells through the closed-form analytics. Slices are independent and
///    are computed in parallel with rayon.
///
/// # Numerical degeneracy
///
/// The spot axis includes S = 0, where d₁ = -∞ through the logarithm.
/// Affected cells carry non-finite values (e.g. NaN Gamma) rather than
/// failing the computation; consumers decide how to render them.
///
/// # Errors
///
/// Returns `GreeksError` for invalid parameters or empty selections. No
/// partially filled result is ever returned.
pub fn compute(cfg: &GridConfig) -> GreeksResult<GreekSurfaces> {
    cfg.validate()?;

    // 2K / (K/100) = 200 steps by construction, inclusive of both bounds
    let stock_prices = linear_axis(0.0, cfg.k / 100.0, 201);
    let maturity_step = (cfg.t - MIN_MATURITY) / cfg.num_maturities as f64;
    let maturities = linear_axis(MIN_MATURITY, maturity_step, cfg.num_maturities + 1);

    let greeks = cfg.greeks.members();
    let options = cfg.options.members();
    let (n_spot, n_mat) = (stock_prices.len(), maturities.len());

    tracing::debug!(
        greeks = greeks.len(),
        options = options.len(),
        spots = n_spot,
        maturities = n_mat,
        "computing greek surfaces"
    );

    let mut values = Array4::<f64>::zeros((greeks.len(), options.len(), n_spot, n_mat));

    let pairs: Vec<(usize, usize)> = (0..greeks.len())
        .flat_map(|gi| (0..options.len()).map(move |oi| (gi, oi)))
        .collect();

    let slices: Vec<((usize, usize), Array2<f64>)> = pairs
        .into_par_iter()
        .map(|(gi, oi)| {
            let greek = greeks[gi];
            let kind = options[oi];
            let mut slice = Array2::<f64>::zeros((n_spot, n_mat));
            for (i, &s_val) in stock_prices.iter().enumerate() {
                for (j, &tau) in maturities.iter().enumerate() {
                    slice[[i, j]] = evaluate(greek, kind, cfg.k, s_val, cfg.r, cfg.q, tau, cfg.sigma);
                }
            }
            ((gi, oi), slice)
        })
        .collect();

    for ((gi, oi), slice) in slices {
        values.slice_mut(s![gi, oi, .., ..]).assign(&slice);
    }

    Ok(GreekSurfaces {
        stock_prices,
        maturities,
        greeks,
        options,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_selections() {
        let cfg = GridConfig {
            greeks: GreekSet::empty(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = GridConfig {
            options: OptionSet::empty(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_numerics() {
        for (field, cfg) in [
            ("k", GridConfig { k: 0.0, ..Default::default() }),
            ("sigma", GridConfig { sigma: -0.2, ..Default::default() }),
            ("t", GridConfig { t: 0.0, ..Default::default() }),
            ("t at origin", GridConfig { t: 0.01, ..Default::default() }),
            ("s0", GridConfig { s0: -1.0, ..Default::default() }),
        ] {
            assert!(cfg.validate().is_err(), "expected rejection for {}", field);
        }

        let cfg = GridConfig {
            num_maturities: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_linear_axis_is_strictly_increasing() {
        let axis = linear_axis(0.0, 0.97, 201);
        assert_eq!(axis.len(), 201);
        assert_eq!(axis[0], 0.0);
        for w in axis.windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn test_axis_length_is_exact_for_awkward_strikes() {
        // Strikes whose step K/100 is not exactly representable must still
        // produce 201 spot points.
        for k in [97.0, 33.3, 101.7, 0.07] {
            let cfg = GridConfig {
                k,
                greeks: GreekSet::DELTA,
                options: OptionSet::CALL,
                ..Default::default()
            };
            let out = compute(&cfg).unwrap();
            assert_eq!(out.stock_prices.len(), 201);
        }
    }
}
