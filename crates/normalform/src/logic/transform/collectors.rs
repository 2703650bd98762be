use super::{super::LogicNode, visitor::LogicNodeVisitor};

/// Collects variable names in order of first occurrence.
pub struct VarCollector {
    vars: Vec<String>,
}

impl VarCollector {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    pub fn into_vars(self) -> Vec<String> {
        self.vars
    }
}

impl Default for VarCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl LogicNodeVisitor for VarCollector {
    type Ret = ();

    fn visit_var(&mut self, spelling: &str) -> Self::Ret {
        if !self.vars.iter().any(|v| v == spelling) {
            self.vars.push(spelling.to_string());
        }
    }

    fn visit_not(&mut self, child: &LogicNode) -> Self::Ret {
        self.visit(child)
    }

    fn visit_and(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret {
        self.visit(left);
        self.visit(right);
    }

    fn visit_or(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret {
        self.visit(left);
        self.visit(right);
    }

    fn visit_impl(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret {
        self.visit(left);
        self.visit(right);
    }

    fn visit_equiv(&mut self, left: &LogicNode, right: &LogicNode) -> Self::Ret {
        self.visit(left);
        self.visit(right);
    }
}
