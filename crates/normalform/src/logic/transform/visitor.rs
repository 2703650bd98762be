use super::super::LogicNode;

pub trait LogicNodeVisitor {
    type Ret;

    fn visit(&mut self, node: &LogicNode) -> Self::Ret {
        match node {
            LogicNode::Var(s) => self.visit_var(s),
            LogicNode::Not(c) => self.visit_not(c),
            LogicNode::And(left, right) => self.visit_and(left, right),
            LogicNode::Or(left, right) => self.visit_or(left, right),
            LogicNode::Impl(left, right) => self.visit_impl(left, right),
            LogicNode::Equiv(left, right) => self.visit_equiv(left, right),
        }
    }

    fn visit_var(&mut self, spelling: &str) -> Self::Ret;

    fn visit_not(&mut self, child: &LogicNode) -> Self::Ret;

    fn visit_and(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret;

    fn visit_or(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret;

    fn visit_impl(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret;

    fn visit_equiv(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret;
}
