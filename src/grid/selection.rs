// src/grid/selection.rs
//! Greek and option-type selections
//!
//! Selections are closed sets with explicit membership testing. The index
//! a Greek or option type occupies in a computed result is determined by
//! its canonical position (declaration order below), never by the order
//! tokens appeared in a selection string, so identical selections always
//! produce identically laid-out results.

use crate::error::{GreeksError, GreeksResult};
use bitflags::bitflags;
use std::str::FromStr;

/// Option price sensitivities supported by the analytics layer
///
/// Declaration order is the canonical order: Delta, Gamma, Vega, Theta, Rho.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Greek {
    Delta,
    Gamma,
    Vega,
    Theta,
    Rho,
}

impl Greek {
    /// All Greeks in canonical order
    pub const CANONICAL: [Greek; 5] = [
        Greek::Delta,
        Greek::Gamma,
        Greek::Vega,
        Greek::Theta,
        Greek::Rho,
    ];

    /// Display label, matching the parameter-file spelling
    pub fn name(&self) -> &'static str {
        match self {
            Greek::Delta => "Delta",
            Greek::Gamma => "Gamma",
            Greek::Vega => "Vega",
            Greek::Theta => "Theta",
            Greek::Rho => "Rho",
        }
    }

    fn flag(&self) -> GreekSet {
        match self {
            Greek::Delta => GreekSet::DELTA,
            Greek::Gamma => GreekSet::GAMMA,
            Greek::Vega => GreekSet::VEGA,
            Greek::Theta => GreekSet::THETA,
            Greek::Rho => GreekSet::RHO,
        }
    }
}

/// European option styles
///
/// Declaration order is the canonical order: Call, Put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Both option kinds in canonical order
    pub const CANONICAL: [OptionKind; 2] = [OptionKind::Call, OptionKind::Put];

    /// Display label, matching the parameter-file spelling
    pub fn name(&self) -> &'static str {
        match self {
            OptionKind::Call => "Call",
            OptionKind::Put => "Put",
        }
    }

    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    fn flag(&self) -> OptionSet {
        match self {
            OptionKind::Call => OptionSet::CALL,
            OptionKind::Put => OptionSet::PUT,
        }
    }
}

bitflags! {
    /// Subset of Greeks to compute
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GreekSet: u32 {
        const DELTA = 1 << 0;
        const GAMMA = 1 << 1;
        const VEGA  = 1 << 2;
        const THETA = 1 << 3;
        const RHO   = 1 << 4;
    }
}

bitflags! {
    /// Subset of option kinds to compute
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OptionSet: u32 {
        const CALL = 1 << 0;
        const PUT  = 1 << 1;
    }
}

impl GreekSet {
    /// Selected Greeks in canonical order; their position here is the
    /// greek index in a computed result
    pub fn members(&self) -> Vec<Greek> {
        Greek::CANONICAL
            .iter()
            .copied()
            .filter(|g| self.contains(g.flag()))
            .collect()
    }
}

impl OptionSet {
    /// Selected option kinds in canonical order; their position here is
    /// the option index in a computed result
    pub fn members(&self) -> Vec<OptionKind> {
        OptionKind::CANONICAL
            .iter()
            .copied()
            .filter(|o| self.contains(o.flag()))
            .collect()
    }
}

impl FromStr for GreekSet {
    type Err = GreeksError;

    /// Parse a comma-separated enumeration such as `"Delta,Gamma"`.
    ///
    /// Tokens are matched exactly after trimming; anything unrecognized is
    /// an error rather than being silently skipped.
    fn from_str(s: &str) -> GreeksResult<Self> {
        let mut set = GreekSet::empty();
        for token in s.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            set |= match token {
                "Delta" => GreekSet::DELTA,
                "Gamma" => GreekSet::GAMMA,
                "Vega" => GreekSet::VEGA,
                "Theta" => GreekSet::THETA,
                "Rho" => GreekSet::RHO,
                _ => {
                    return Err(GreeksError::UnknownSelection {
                        kind: "greek".to_string(),
                        token: token.to_string(),
                    })
                }
            };
        }
        Ok(set)
    }
}

impl FromStr for OptionSet {
    type Err = GreeksError;

    /// Parse a comma-separated enumeration such as `"Call,Put"`.
    fn from_str(s: &str) -> GreeksResult<Self> {
        let mut set = OptionSet::empty();
        for token in s.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            set |= match token {
                "Call" => OptionSet::CALL,
                "Put" => OptionSet::PUT,
                _ => {
                    return Err(GreeksError::UnknownSelection {
                        kind: "option type".to_string(),
                        token: token.to_string(),
                    })
                }
            };
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_follow_canonical_order() {
        let set = GreekSet::RHO | GreekSet::DELTA | GreekSet::VEGA;
        assert_eq!(set.members(), vec![Greek::Delta, Greek::Vega, Greek::Rho]);
    }

    #[test]
    fn test_parse_reversed_text_is_canonical() {
        // Textual order must not influence index assignment
        let set: GreekSet = "Vega,Delta".parse().unwrap();
        let members = set.members();
        assert_eq!(members[0], Greek::Delta);
        assert_eq!(members[1], Greek::Vega);
    }

    #[test]
    fn test_parse_with_whitespace_and_duplicates() {
        let set: GreekSet = " Delta , Gamma ,Delta".parse().unwrap();
        assert_eq!(set.members(), vec![Greek::Delta, Greek::Gamma]);
    }

    #[test]
    fn test_unknown_greek_is_rejected() {
        // Exact token matching: no substring collisions
        assert!("Vega2".parse::<GreekSet>().is_err());
        assert!("delta".parse::<GreekSet>().is_err());
    }

    #[test]
    fn test_option_set_parsing() {
        let set: OptionSet = "Put,Call".parse().unwrap();
        assert_eq!(set.members(), vec![OptionKind::Call, OptionKind::Put]);
        assert!("Straddle".parse::<OptionSet>().is_err());
    }

    #[test]
    fn test_empty_string_parses_to_empty_set() {
        let set: GreekSet = "".parse().unwrap();
        assert!(set.is_empty());
    }
}
