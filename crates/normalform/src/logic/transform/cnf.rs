use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    clause::ClauseSet,
    logic::LogicNode,
    parse::{parse_prop_formula, ParseResult},
};

use super::{naive_cnf::naive_cnf, tseytin_cnf::tseytin_cnf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum CNFStrategy {
    /// Distribution; equivalent to the input.
    #[default]
    #[serde(rename = "EQUIVALENT")]
    Equivalent,
    /// Tseytin transformation; equisatisfiable with the input.
    #[serde(rename = "TSEYTIN")]
    Tseytin,
}

impl fmt::Display for CNFStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CNFStrategy::Equivalent => write!(f, "EQUIVALENT"),
            CNFStrategy::Tseytin => write!(f, "TSEYTIN"),
        }
    }
}

/// Parses `formula` and converts it to an equivalent clause set.
pub fn convert_equivalent(formula: &str) -> ParseResult<ClauseSet> {
    convert(formula, CNFStrategy::Equivalent)
}

/// Parses `formula` and converts it to an equisatisfiable clause set.
pub fn convert_tseytin(formula: &str) -> ParseResult<ClauseSet> {
    convert(formula, CNFStrategy::Tseytin)
}

pub fn convert(formula: &str, strategy: CNFStrategy) -> ParseResult<ClauseSet> {
    let parsed = parse_prop_formula(formula)?;
    debug!("Parsed {} for {} conversion", parsed, strategy);
    Ok(clausify(&parsed, strategy))
}

/// Converts an already parsed formula.
pub fn clausify(node: &LogicNode, strategy: CNFStrategy) -> ClauseSet {
    let cs = match strategy {
        CNFStrategy::Equivalent => naive_cnf(node),
        CNFStrategy::Tseytin => tseytin_cnf(node),
    };
    debug!("{} clauses", cs.size());
    cs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::interpretations;

    #[test]
    fn entry_points() {
        assert_eq!(
            "(-A v B) & (-B v A)",
            convert_equivalent("A <-> B").unwrap().to_string()
        );
        assert_eq!("(-A v B)", convert_tseytin("A -> B").unwrap().to_string());
        assert_eq!("TRUE", convert_tseytin("A v -A").unwrap().to_string());
        assert!(convert_equivalent("A &").is_err());
        assert!(convert_tseytin("(A").is_err());
    }

    #[test]
    fn clausify_matches_convert() {
        for f in ["A <-> B", "(a & b) v (c & d)", "-(a -> b & c)"] {
            let parsed = parse_prop_formula(f).unwrap();
            for strategy in [CNFStrategy::Equivalent, CNFStrategy::Tseytin] {
                assert_eq!(convert(f, strategy).unwrap(), clausify(&parsed, strategy));
            }
        }
    }

    #[test]
    fn contradiction() {
        let cs = convert_equivalent("A & -A").unwrap();
        let vars = cs.variables();
        assert!(interpretations(&vars).iter().all(|i| !cs.eval(i)));
    }

    #[test]
    fn strategy_serde() {
        assert_eq!(CNFStrategy::Equivalent, CNFStrategy::default());
        let s: CNFStrategy = serde_json::from_str(r#""TSEYTIN""#).unwrap();
        assert_eq!(CNFStrategy::Tseytin, s);
        assert_eq!(r#""EQUIVALENT""#, serde_json::to_string(&CNFStrategy::Equivalent).unwrap());
        assert!(serde_json::from_str::<CNFStrategy>(r#""OPTIMAL""#).is_err());
    }
}
