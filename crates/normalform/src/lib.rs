pub mod clause;
mod consts;
pub mod logic;
pub mod parse;

pub use consts::{EMPTY_CLAUSE, EMPTY_CLAUSE_SET, FRESH_VAR_PREFIX};

pub use clause::{Atom, Clause, ClauseSet};
pub use logic::transform::{clausify, convert, convert_equivalent, convert_tseytin, CNFStrategy};
pub use logic::LogicNode;
pub use parse::{parse_prop_formula, ParseErr, ParseResult};
