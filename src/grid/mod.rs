// src/grid/mod.rs
pub mod engine;
pub mod moneyness;
pub mod selection;

pub use engine::{compute, GreekSurfaces, GridConfig};
pub use selection::{Greek, GreekSet, OptionKind, OptionSet};
