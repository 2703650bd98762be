pub mod cnf;
pub mod collectors;
pub mod naive_cnf;
pub mod negation_normal;
pub mod to_basic;
pub mod tseytin_cnf;
pub mod visitor;

pub use cnf::*;
pub use negation_normal::negation_normal_form;
