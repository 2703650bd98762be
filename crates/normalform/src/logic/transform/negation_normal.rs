use crate::logic::LogicNode;

use super::visitor::LogicNodeVisitor;

/// Pushes negations down to the variables.
///
/// # Panics
///
/// `node` must not contain `Impl` or `Equiv`; run [`super::to_basic::to_basic_ops`] first.
pub fn negation_normal_form(node: &LogicNode) -> LogicNode {
    NegationNormalForm.visit(node)
}

struct NegationNormalForm;

impl NegationNormalForm {
    fn unexpected(node: &str) -> ! {
        panic!(
            "{} encountered during Negation Normal Form transformation; eliminate it first",
            node
        )
    }
}

impl LogicNodeVisitor for NegationNormalForm {
    type Ret = LogicNode;

    fn visit_var(&mut self, spelling: &str) -> Self::Ret {
        LogicNode::var(spelling)
    }

    fn visit_not(&mut self, child: &LogicNode) -> Self::Ret {
        match child {
            LogicNode::Var(s) => LogicNode::Not(LogicNode::var(s.as_str()).into()),
            LogicNode::Not(c) => self.visit(c),
            LogicNode::And(l, r) => {
                let n = LogicNode::Or(
                    LogicNode::Not(l.clone()).into(),
                    LogicNode::Not(r.clone()).into(),
                );
                self.visit(&n)
            }
            LogicNode::Or(l, r) => {
                let n = LogicNode::And(
                    LogicNode::Not(l.clone()).into(),
                    LogicNode::Not(r.clone()).into(),
                );
                self.visit(&n)
            }
            LogicNode::Impl(..) => Self::unexpected("Implication"),
            LogicNode::Equiv(..) => Self::unexpected("Equivalence"),
        }
    }

    fn visit_and(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret {
        LogicNode::And(self.visit(left).into(), self.visit(right).into())
    }

    fn visit_or(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret {
        LogicNode::Or(self.visit(left).into(), self.visit(right).into())
    }

    fn visit_impl(&mut self, _left: &LogicNode, _right: &LogicNode) -> Self::Ret {
        Self::unexpected("Implication")
    }

    fn visit_equiv(&mut self, _left: &LogicNode, _right: &LogicNode) -> Self::Ret {
        Self::unexpected("Equivalence")
    }
}

#[cfg(test)]
mod tests {
    use super::negation_normal_form;
    use crate::{
        logic::{interpretations, transform::to_basic::to_basic_ops, LogicNode},
        parse::parse_prop_formula,
    };

    fn nnf(f: &str) -> LogicNode {
        let parsed = parse_prop_formula(f).expect(f);
        negation_normal_form(&to_basic_ops(&parsed))
    }

    fn is_nnf(n: &LogicNode) -> bool {
        match n {
            LogicNode::Var(_) => true,
            LogicNode::Not(c) => c.is_var(),
            LogicNode::And(l, r) | LogicNode::Or(l, r) => is_nnf(l) && is_nnf(r),
            _ => false,
        }
    }

    #[test]
    fn pushes_negations() {
        let test_strs = [
            ("a", "a"),
            ("-a", "-a"),
            ("--a", "a"),
            ("---a", "-a"),
            ("-(a & b)", "(-a v -b)"),
            ("-(a v b)", "(-a & -b)"),
            ("-(a & -(b v -c))", "(-a v (b v -c))"),
            ("-(a -> b)", "(a & -b)"),
            ("-(a <-> b)", "((a & -b) v (b & -a))"),
        ];

        for (f, e) in test_strs {
            assert_eq!(e, nnf(f).to_string(), "{}", f);
        }
    }

    #[test]
    fn preserves_semantics() {
        let test_strs = [
            "-(a <-> (b -> -c))",
            "-((a v b) & -(c & --a))",
            "(a -> b) <-> -(c v -d)",
        ];

        for f in test_strs {
            let parsed = parse_prop_formula(f).unwrap();
            let n = nnf(f);
            assert!(is_nnf(&n), "{}", n);
            for i in interpretations(&parsed.variables()) {
                assert_eq!(parsed.eval(&i), n.eval(&i), "{}", f);
            }
        }
    }

    #[test]
    #[should_panic]
    fn rejects_implications() {
        let parsed = parse_prop_formula("a -> b").unwrap();
        negation_normal_form(&parsed);
    }
}
