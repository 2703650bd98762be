pub mod transform;

use std::{collections::HashMap, fmt};

use self::transform::{collectors::VarCollector, visitor::LogicNodeVisitor};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LogicNode {
    Var(String),
    Not(Box<LogicNode>),
    And(Box<LogicNode>, Box<LogicNode>),
    Or(Box<LogicNode>, Box<LogicNode>),
    Impl(Box<LogicNode>, Box<LogicNode>),
    Equiv(Box<LogicNode>, Box<LogicNode>),
}

impl LogicNode {
    pub fn var<S: Into<String>>(spelling: S) -> Self {
        LogicNode::Var(spelling.into())
    }

    pub fn is_var(&self) -> bool {
        matches!(self, LogicNode::Var(_))
    }

    /// A variable or a negated variable.
    pub fn is_literal(&self) -> bool {
        match self {
            LogicNode::Var(_) => true,
            LogicNode::Not(c) => c.is_var(),
            _ => false,
        }
    }

    /// A literal or a disjunction of clauses.
    pub fn is_clause(&self) -> bool {
        match self {
            LogicNode::Or(l, r) => l.is_clause() && r.is_clause(),
            n => n.is_literal(),
        }
    }

    /// A clause or a conjunction of formulas in CNF.
    pub fn is_cnf(&self) -> bool {
        match self {
            LogicNode::And(l, r) => l.is_cnf() && r.is_cnf(),
            n => n.is_clause(),
        }
    }

    /// Variable names in order of first occurrence.
    pub fn variables(&self) -> Vec<String> {
        let mut collector = VarCollector::new();
        collector.visit(self);
        collector.into_vars()
    }

    /// Evaluates the formula under `interp`. Variables missing from `interp` are false.
    pub fn eval(&self, interp: &HashMap<String, bool>) -> bool {
        match self {
            LogicNode::Var(s) => interp.get(s).copied().unwrap_or(false),
            LogicNode::Not(c) => !c.eval(interp),
            LogicNode::And(l, r) => l.eval(interp) && r.eval(interp),
            LogicNode::Or(l, r) => l.eval(interp) || r.eval(interp),
            LogicNode::Impl(l, r) => !l.eval(interp) || r.eval(interp),
            LogicNode::Equiv(l, r) => l.eval(interp) == r.eval(interp),
        }
    }
}

impl fmt::Display for LogicNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicNode::Var(s) => write!(f, "{}", s),
            LogicNode::Not(c) => write!(f, "-{}", c),
            LogicNode::And(l, r) => write!(f, "({} & {})", l, r),
            LogicNode::Or(l, r) => write!(f, "({} v {})", l, r),
            LogicNode::Impl(l, r) => write!(f, "({} -> {})", l, r),
            LogicNode::Equiv(l, r) => write!(f, "({} <-> {})", l, r),
        }
    }
}

/// Every assignment of `vars`, in binary counting order.
#[cfg(test)]
pub(crate) fn interpretations(vars: &[String]) -> Vec<HashMap<String, bool>> {
    (0..1u32 << vars.len())
        .map(|bits| {
            vars.iter()
                .enumerate()
                .map(|(i, v)| (v.clone(), bits & (1 << i) != 0))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::LogicNode::*;
    use super::*;

    fn var(s: &str) -> Box<LogicNode> {
        Box::new(LogicNode::var(s))
    }

    #[test]
    fn literals() {
        assert!(Var("a".to_string()).is_literal());
        assert!(Not(var("a")).is_literal());
        assert!(!Not(Box::new(Not(var("a")))).is_literal());
        assert!(!And(var("a"), var("b")).is_literal());
        assert!(Var("a".to_string()).is_var());
        assert!(!Not(var("a")).is_var());
    }

    #[test]
    fn clause_and_cnf() {
        let clause = Or(Box::new(Or(var("a"), Box::new(Not(var("b"))))), var("c"));
        assert!(clause.is_clause());
        assert!(clause.is_cnf());

        let cnf = And(Box::new(clause.clone()), Box::new(Not(var("d"))));
        assert!(!cnf.is_clause());
        assert!(cnf.is_cnf());

        let not_cnf = Or(var("a"), Box::new(And(var("b"), var("c"))));
        assert!(!not_cnf.is_cnf());

        let negated_and = Not(Box::new(And(var("a"), var("b"))));
        assert!(!negated_and.is_cnf());

        assert!(!Impl(var("a"), var("b")).is_cnf());
    }

    #[test]
    fn display() {
        let n = Equiv(
            Box::new(Not(Box::new(And(var("a"), var("b"))))),
            Box::new(Impl(var("c"), Box::new(Or(var("d"), Box::new(Not(var("e"))))))),
        );
        assert_eq!("(-(a & b) <-> (c -> (d v -e)))", n.to_string());
        assert_eq!("--x", Not(Box::new(Not(var("x")))).to_string());
    }

    #[test]
    fn variables_in_order() {
        let n = And(
            Box::new(Or(var("b"), Box::new(Not(var("a"))))),
            Box::new(Impl(var("a"), var("c"))),
        );
        assert_eq!(vec!["b", "a", "c"], n.variables());
    }

    #[test]
    fn eval() {
        let n = Equiv(var("a"), Box::new(Impl(var("b"), var("a"))));
        let vars = n.variables();
        let truth: Vec<bool> = interpretations(&vars).iter().map(|i| n.eval(i)).collect();
        // a <-> (b -> a) is equivalent to a v b
        assert_eq!(vec![false, true, true, true], truth);
    }
}
