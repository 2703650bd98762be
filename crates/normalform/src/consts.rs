/// Prefix of the variables introduced by the Tseytin transformation.
pub const FRESH_VAR_PREFIX: &str = "t";

/// Display text of a clause set without clauses.
pub const EMPTY_CLAUSE_SET: &str = "TRUE";

/// Display text of a clause without atoms.
pub const EMPTY_CLAUSE: &str = "FALSE";
