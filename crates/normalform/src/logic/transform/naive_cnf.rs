use log::trace;

use crate::{
    clause::{Atom, Clause, ClauseSet},
    logic::LogicNode,
};

use super::{
    negation_normal::negation_normal_form, to_basic::to_basic_ops, visitor::LogicNodeVisitor,
};

/// Equivalent CNF by distributing `Or` over `And`.
///
/// The result may be exponentially larger than `node`. Tautological clauses are
/// dropped, everything else is kept in the order distribution produced it.
pub fn naive_cnf(node: &LogicNode) -> ClauseSet {
    let basic = to_basic_ops(node);
    let nnf = negation_normal_form(&basic);
    trace!("Negation normal form: {}", nnf);
    let distributed = distribute_or_over_and(&nnf);
    trace!("Distributed: {}", distributed);

    flatten_to_clauses(&distributed)
        .into_iter()
        .filter(|c| !c.is_tautology())
        .collect()
}

/// Turns a formula in negation normal form into an `And` of clauses.
pub fn distribute_or_over_and(node: &LogicNode) -> LogicNode {
    Distributor.visit(node)
}

/// The disjunction of two distributed formulas, itself distributed.
pub fn distribute(left: LogicNode, right: LogicNode) -> LogicNode {
    match (left, right) {
        (LogicNode::And(l1, l2), right) => LogicNode::And(
            distribute(*l1, right.clone()).into(),
            distribute(*l2, right).into(),
        ),
        (left, LogicNode::And(r1, r2)) => LogicNode::And(
            distribute(left.clone(), *r1).into(),
            distribute(left, *r2).into(),
        ),
        (left, right) => LogicNode::Or(left.into(), right.into()),
    }
}

struct Distributor;

impl LogicNodeVisitor for Distributor {
    type Ret = LogicNode;

    fn visit_var(&mut self, spelling: &str) -> Self::Ret {
        LogicNode::var(spelling)
    }

    fn visit_not(&mut self, child: &LogicNode) -> Self::Ret {
        LogicNode::Not(child.clone().into())
    }

    fn visit_and(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret {
        LogicNode::And(self.visit(left).into(), self.visit(right).into())
    }

    fn visit_or(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret {
        let left = self.visit(left);
        let right = self.visit(right);
        distribute(left, right)
    }

    // Not part of NNF; kept structurally so that flattening renders them verbatim.
    fn visit_impl(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret {
        LogicNode::Impl(self.visit(left).into(), self.visit(right).into())
    }

    fn visit_equiv(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret {
        LogicNode::Equiv(self.visit(left).into(), self.visit(right).into())
    }
}

/// Splits the top-level `And` chain into clauses and each clause's `Or` chain into atoms.
///
/// Anything that is neither a literal nor the expected connective becomes an atom
/// spelled like the subformula.
pub fn flatten_to_clauses(node: &LogicNode) -> ClauseSet {
    let mut cs = ClauseSet::default();
    collect_clauses(node, &mut cs);
    cs
}

fn collect_clauses(node: &LogicNode, cs: &mut ClauseSet) {
    match node {
        LogicNode::And(l, r) => {
            collect_clauses(l, cs);
            collect_clauses(r, cs);
        }
        n => {
            let mut clause = Clause::default();
            collect_atoms(n, &mut clause);
            cs.add(clause);
        }
    }
}

fn collect_atoms(node: &LogicNode, clause: &mut Clause) {
    match node {
        LogicNode::Or(l, r) => {
            collect_atoms(l, clause);
            collect_atoms(r, clause);
        }
        LogicNode::Var(s) => clause.add(Atom::new(s.as_str(), false)),
        LogicNode::Not(c) if c.is_var() => clause.add(Atom::new(c.to_string(), true)),
        n => clause.add(Atom::new(n.to_string(), false)),
    }
}

#[cfg(test)]
mod tests {
    use super::{distribute_or_over_and, flatten_to_clauses, naive_cnf};
    use crate::{
        logic::{interpretations, LogicNode},
        parse::parse_prop_formula,
    };

    macro_rules! test_map {
        ($func:ident, $( $f:expr, $e:expr );*) => {{
            $(
                let parsed = parse_prop_formula($f).expect($f);
                assert_eq!($e, $func(&parsed).to_string(), "Parsed: {}", parsed);
            )*
        }};
    }

    #[test]
    fn distribution() {
        test_map!(
            distribute_or_over_and,
            "a v b", "(a v b)";
            "a v (b & c)", "((a v b) & (a v c))";
            "(a & b) v c", "((a v c) & (b v c))";
            "(a & b) v (c & d)", "(((a v c) & (a v d)) & ((b v c) & (b v d)))";
            "-a & (b v -c)", "(-a & (b v -c))"
        );
    }

    #[test]
    fn flattening() {
        test_map!(
            flatten_to_clauses,
            "a", "a";
            "-a", "-a";
            "(a v -b) & c", "(a v -b) & c";
            "a v a v -b", "(a v -b)";
            "a & (b & (c v d))", "a & b & (c v d)";
            "a v (b & c)", "(a v (b & c))";
            "(a v --b) & c", "(a v --b) & c"
        );
    }

    #[test]
    fn naive() {
        test_map!(
            naive_cnf,
            "a <-> b", "(-a v b) & (-b v a)";
            "a -> b -> c", "(-a v -b v c)";
            "-(a v b)", "-a & -b";
            "-(a & b)", "(-a v -b)";
            "--a", "a";
            "a & -a", "a & -a";
            "(a & b) v (c & d)", "(a v c) & (a v d) & (b v c) & (b v d)";
            "-(a v b) -> -(-a & b)", "TRUE";
            "(a v -a) & b", "b"
        );
    }

    fn assert_equivalent(f: &str) {
        let parsed = parse_prop_formula(f).expect(f);
        let cs = naive_cnf(&parsed);
        for c in cs.clauses() {
            assert!(!c.is_tautology(), "{}", c);
        }
        for i in interpretations(&parsed.variables()) {
            assert_eq!(parsed.eval(&i), cs.eval(&i), "{} vs {}", f, cs);
        }
    }

    #[test]
    fn equivalent_to_input() {
        let test_strs = [
            "a",
            "a <-> b",
            "a <-> b <-> c",
            "(a -> b) & (b -> c) -> (a -> c)",
            "-(a v b) -> -(-a & b)",
            "a v -b -> -a <-> b & -a v b",
            "(a & b) v (c & d) v (e & f)",
            "-((a <-> -b) v (c -> d & -e))",
            "a & -a",
        ];

        for f in test_strs {
            assert_equivalent(f);
        }
    }

    #[test]
    fn contradiction_is_unsatisfiable() {
        let parsed = parse_prop_formula("a & -a").unwrap();
        let cs = naive_cnf(&parsed);
        assert!(interpretations(&parsed.variables())
            .iter()
            .all(|i| !cs.eval(i)));
    }

    #[test]
    fn non_literal_atoms_are_spelled_out() {
        let n = LogicNode::Or(
            LogicNode::var("a").into(),
            LogicNode::Impl(LogicNode::var("b").into(), LogicNode::var("c").into()).into(),
        );
        assert_eq!("(a v (b -> c))", flatten_to_clauses(&n).to_string());
    }
}
