// src/config.rs
//! key=value parameter file loader
//!
//! Recognized keys: `InitialStock, MaxMaturity, Strike, Vol, RiskFreeRate,
//! Yield, ITM, OTM, NumberOfMaturities, Greeks, Options, Plots`. Unknown
//! keys are logged and ignored; malformed values fail the parse. Missing
//! numeric or selection keys are a hard error rather than being silently
//! defaulted — only `ITM`, `OTM`, and `Plots` carry explicit defaults
//! (10%, 10%, and `Simple`).

use crate::error::{GreeksError, GreeksResult};
use crate::grid::engine::GridConfig;
use crate::grid::selection::{GreekSet, OptionSet};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Which consumer the computed grid is destined for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    /// Greek versus stock price, one line per maturity
    Simple,
    /// Greek surface over stock price and maturity
    Surface3D,
    /// Greek versus maturity at ITM/ATM/OTM spot levels
    Moneyness,
}

impl FromStr for PlotKind {
    type Err = GreeksError;

    fn from_str(s: &str) -> GreeksResult<Self> {
        match s.trim() {
            "Simple" => Ok(PlotKind::Simple),
            "3D" => Ok(PlotKind::Surface3D),
            "Moneyness" => Ok(PlotKind::Moneyness),
            other => Err(GreeksError::UnknownSelection {
                kind: "plot type".to_string(),
                token: other.to_string(),
            }),
        }
    }
}

/// Externally supplied parameters, immutable per computation
#[derive(Debug, Clone)]
pub struct Parameters {
    pub s0: f64,
    pub strike: f64,
    pub max_maturity: f64,
    pub sigma: f64,
    pub rate: f64,
    pub dividend_yield: f64,
    pub itm: f64,
    pub otm: f64,
    pub num_maturities: usize,
    pub greeks: GreekSet,
    pub options: OptionSet,
    pub plots: PlotKind,
}

impl Parameters {
    /// Map into a grid configuration (validation happens in `compute`)
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            s0: self.s0,
            k: self.strike,
            r: self.rate,
            q: self.dividend_yield,
            sigma: self.sigma,
            t: self.max_maturity,
            num_maturities: self.num_maturities,
            greeks: self.greeks,
            options: self.options,
        }
    }
}

fn parse_f64(key: &str, value: &str) -> GreeksResult<f64> {
    value.parse::<f64>().map_err(|e| GreeksError::ConfigParse {
        key: key.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_usize(key: &str, value: &str) -> GreeksResult<usize> {
    value.parse::<usize>().map_err(|e| GreeksError::ConfigParse {
        key: key.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn require<T>(key: &str, field: Option<T>) -> GreeksResult<T> {
    field.ok_or_else(|| GreeksError::InvalidConfiguration {
        field: key.to_string(),
        reason: "required parameter is missing".to_string(),
    })
}

/// Read parameters from a key=value file
pub fn read_parameters<P: AsRef<Path>>(path: P) -> GreeksResult<Parameters> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| GreeksError::ConfigIo {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_parameters(&contents)
}

/// Parse parameters from the file contents
pub fn parse_parameters(contents: &str) -> GreeksResult<Parameters> {
    let mut s0 = None;
    let mut strike = None;
    let mut max_maturity = None;
    let mut sigma = None;
    let mut rate = None;
    let mut dividend_yield = None;
    let mut itm = None;
    let mut otm = None;
    let mut num_maturities = None;
    let mut greeks = None;
    let mut options = None;
    let mut plots = None;

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((key, raw_value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = raw_value.trim();

        match key {
            "InitialStock" => s0 = Some(parse_f64(key, value)?),
            "MaxMaturity" => max_maturity = Some(parse_f64(key, value)?),
            "Strike" => strike = Some(parse_f64(key, value)?),
            "Vol" => sigma = Some(parse_f64(key, value)?),
            "RiskFreeRate" => rate = Some(parse_f64(key, value)?),
            "Yield" => dividend_yield = Some(parse_f64(key, value)?),
            "ITM" => itm = Some(parse_f64(key, value)?),
            "OTM" => otm = Some(parse_f64(key, value)?),
            "NumberOfMaturities" => num_maturities = Some(parse_usize(key, value)?),
            "Greeks" => greeks = Some(GreekSet::from_str(value)?),
            "Options" => options = Some(OptionSet::from_str(value)?),
            "Plots" => plots = Some(PlotKind::from_str(value)?),
            unknown => {
                tracing::warn!(key = unknown, "ignoring unknown parameter");
            }
        }
    }

    Ok(Parameters {
        s0: require("InitialStock", s0)?,
        strike: require("Strike", strike)?,
        max_maturity: require("MaxMaturity", max_maturity)?,
        sigma: require("Vol", sigma)?,
        rate: require("RiskFreeRate", rate)?,
        dividend_yield: require("Yield", dividend_yield)?,
        itm: itm.unwrap_or(10.0),
        otm: otm.unwrap_or(10.0),
        num_maturities: require("NumberOfMaturities", num_maturities)?,
        greeks: require("Greeks", greeks)?,
        options: require("Options", options)?,
        plots: plots.unwrap_or(PlotKind::Simple),
    })
}
