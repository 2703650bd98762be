use super::{super::LogicNode, visitor::LogicNodeVisitor};

/// Eliminates `Impl` and `Equiv`:
/// `a -> b` becomes `-a v b`, `a <-> b` becomes `(-a v b) & (-b v a)`.
pub fn to_basic_ops(node: &LogicNode) -> LogicNode {
    ToBasicOps.visit(node)
}

struct ToBasicOps;

impl LogicNodeVisitor for ToBasicOps {
    type Ret = LogicNode;

    fn visit_var(&mut self, spelling: &str) -> Self::Ret {
        LogicNode::var(spelling)
    }

    fn visit_not(&mut self, child: &LogicNode) -> Self::Ret {
        LogicNode::Not(self.visit(child).into())
    }

    fn visit_and(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret {
        LogicNode::And(self.visit(left).into(), self.visit(right).into())
    }

    fn visit_or(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret {
        LogicNode::Or(self.visit(left).into(), self.visit(right).into())
    }

    fn visit_impl(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret {
        let left = self.visit(left).into();
        let right = self.visit(right).into();
        LogicNode::Or(LogicNode::Not(left).into(), right)
    }

    fn visit_equiv(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret {
        let left = self.visit(left);
        let right = self.visit(right);
        let not_left = LogicNode::Not(left.clone().into()).into();
        let not_right = LogicNode::Not(right.clone().into()).into();

        let l_to_r = LogicNode::Or(not_left, right.into()).into();
        let r_to_l = LogicNode::Or(not_right, left.into()).into();

        LogicNode::And(l_to_r, r_to_l)
    }
}
