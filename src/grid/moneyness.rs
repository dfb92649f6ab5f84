// src/grid/moneyness.rs
//! Moneyness-relative curve extraction
//!
//! Derived view over a computed surface: for one (greek, option) pair,
//! pick the in-the-money, at-the-money, and out-of-the-money spot levels
//! and return the Greek along the maturity axis at each of them.
//!
//! Levels are located by value on the spot axis, not by index arithmetic
//! on the axis length: the ITM spot is the axis point nearest
//! `S0 * (1 + pct/100)` for calls and `S0 * (1 - pct/100)` for puts, OTM
//! mirrors ITM, and ATM is the point nearest `S0`. Nearest-point lookup
//! always yields a valid index, so an out-of-range percentage clamps to
//! the axis boundary instead of indexing out of bounds.

use crate::error::{GreeksError, GreeksResult};
use crate::grid::engine::GreekSurfaces;
use crate::grid::selection::{Greek, OptionKind};

/// Three 1D curves over the maturity axis for one (greek, option) pair
#[derive(Debug, Clone)]
pub struct MoneynessCurves {
    pub itm: Vec<f64>,
    pub atm: Vec<f64>,
    pub otm: Vec<f64>,
    /// Actual spot levels the curves were sampled at, for labeling
    pub itm_spot: f64,
    pub atm_spot: f64,
    pub otm_spot: f64,
}

/// Index of the axis point nearest to `target`
///
/// The axis is strictly increasing, so the first non-improving distance
/// ends the scan. Targets beyond either end resolve to the boundary.
fn nearest_index(axis: &[f64], target: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &x) in axis.iter().enumerate() {
        let dist = (x - target).abs();
        if dist < best_dist {
            best_dist = dist;
            best = i;
        } else {
            break;
        }
    }
    best
}

/// Extract ITM/ATM/OTM curves for one (greek, option) pair
///
/// `itm_pct` and `otm_pct` are percentage offsets from the spot `s0`
/// (documented range 0–99; larger values clamp to the axis boundary).
/// For calls ITM lies above the spot and OTM below; puts mirror both.
///
/// # Errors
///
/// `MissingSurface` if the pair was not part of the computed selection.
pub fn extract(
    surfaces: &GreekSurfaces,
    greek: Greek,
    kind: OptionKind,
    s0: f64,
    itm_pct: f64,
    otm_pct: f64,
) -> GreeksResult<MoneynessCurves> {
    let surface = surfaces
        .surface(greek, kind)
        .ok_or_else(|| GreeksError::MissingSurface {
            greek: greek.name().to_string(),
            option: kind.name().to_string(),
        })?;

    let axis = &surfaces.stock_prices;
    let (itm_target, otm_target) = if kind.is_call() {
        (s0 * (1.0 + itm_pct / 100.0), s0 * (1.0 - otm_pct / 100.0))
    } else {
        (s0 * (1.0 - itm_pct / 100.0), s0 * (1.0 + otm_pct / 100.0))
    };

    let itm_idx = nearest_index(axis, itm_target);
    let atm_idx = nearest_index(axis, s0);
    let otm_idx = nearest_index(axis, otm_target);

    Ok(MoneynessCurves {
        itm: surface.row(itm_idx).to_vec(),
        atm: surface.row(atm_idx).to_vec(),
        otm: surface.row(otm_idx).to_vec(),
        itm_spot: axis[itm_idx],
        atm_spot: axis[atm_idx],
        otm_spot: axis[otm_idx],
    })
}
