use log::{debug, warn};

use crate::{
    clause::{simplify::simplify, Atom, Clause, ClauseSet},
    consts::FRESH_VAR_PREFIX,
    logic::LogicNode,
};

use super::{
    naive_cnf::{flatten_to_clauses, naive_cnf},
    negation_normal::negation_normal_form,
    to_basic::to_basic_ops,
};

/// Equisatisfiable CNF of `node`, introducing one fresh variable per rewritten `And`/`Or`.
pub fn tseytin_cnf(node: &LogicNode) -> ClauseSet {
    TseytinCNF::new().convert(node)
}

/// A step from a node to one of its children. The child of `Not` is on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// State of one Tseytin conversion: the defining clauses emitted so far and the
/// index of the last fresh variable.
pub struct TseytinCNF {
    clause_set: ClauseSet,
    idx: u32,
}

impl TseytinCNF {
    pub fn new() -> Self {
        Self {
            clause_set: ClauseSet::default(),
            idx: 0,
        }
    }

    fn fresh_name(&mut self) -> String {
        self.idx += 1;
        format!("{}{}", FRESH_VAR_PREFIX, self.idx)
    }

    pub fn convert(mut self, node: &LogicNode) -> ClauseSet {
        for v in node.variables().iter().filter(|v| looks_fresh(v)) {
            warn!(
                "Variable {} may collide with a variable introduced by the Tseytin transformation",
                v
            );
        }

        let mut g = negation_normal_form(&to_basic_ops(node));

        while !g.is_cnf() {
            let Some((path, found)) = find_literal_binary(&g) else {
                debug!("No And/Or over two literals left in {}", g);
                break;
            };

            let name = self.fresh_name();
            debug!("{} := {}", name, found);
            self.define(&name, found);
            g = replace_at(&g, &path, LogicNode::var(name));
        }

        let rest = residual_clauses(&g);
        self.clause_set.unite(rest);
        simplify(self.clause_set)
    }

    /// Emits the clauses of `name <-> found`.
    fn define(&mut self, name: &str, found: &LogicNode) {
        let p = Atom::new(name, false);

        let clauses = match found {
            LogicNode::And(l, r) => {
                let (l, r) = (literal_atom(l), literal_atom(r));
                [
                    Clause::new(vec![p.not(), l.clone()]),
                    Clause::new(vec![p.not(), r.clone()]),
                    Clause::new(vec![l.not(), r.not(), p]),
                ]
            }
            LogicNode::Or(l, r) => {
                let (l, r) = (literal_atom(l), literal_atom(r));
                [
                    Clause::new(vec![p.clone(), l.not()]),
                    Clause::new(vec![p.clone(), r.not()]),
                    Clause::new(vec![p.not(), l, r]),
                ]
            }
            n => panic!("Only And and Or nodes can be named, got {}", n),
        };

        self.clause_set.add_all(clauses.into());
    }
}

impl Default for TseytinCNF {
    fn default() -> Self {
        Self::new()
    }
}

fn looks_fresh(name: &str) -> bool {
    match name.strip_prefix(FRESH_VAR_PREFIX) {
        Some(idx) => !idx.is_empty() && idx.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

/// The atom of a variable or negated variable.
///
/// # Panics
///
/// If `node` is not a literal.
pub fn literal_atom(node: &LogicNode) -> Atom {
    match node {
        LogicNode::Var(s) => Atom::new(s.as_str(), false),
        LogicNode::Not(c) => match c.as_ref() {
            LogicNode::Var(s) => Atom::new(s.as_str(), true),
            _ => panic!("Expected literal but got {}", node),
        },
        _ => panic!("Expected literal but got {}", node),
    }
}

/// Depth-first, pre-order search for an `And` or `Or` whose children are both literals.
pub fn find_literal_binary(node: &LogicNode) -> Option<(Vec<Direction>, &LogicNode)> {
    let mut path = Vec::new();
    search(node, &mut path).map(|found| (path, found))
}

fn search<'n>(node: &'n LogicNode, path: &mut Vec<Direction>) -> Option<&'n LogicNode> {
    match node {
        LogicNode::Var(_) => None,
        LogicNode::Not(c) => descend(c, Direction::Left, path),
        LogicNode::And(l, r) | LogicNode::Or(l, r) if l.is_literal() && r.is_literal() => {
            Some(node)
        }
        LogicNode::And(l, r)
        | LogicNode::Or(l, r)
        | LogicNode::Impl(l, r)
        | LogicNode::Equiv(l, r) => {
            if let Some(found) = descend(l, Direction::Left, path) {
                return Some(found);
            }
            descend(r, Direction::Right, path)
        }
    }
}

fn descend<'n>(
    node: &'n LogicNode,
    dir: Direction,
    path: &mut Vec<Direction>,
) -> Option<&'n LogicNode> {
    path.push(dir);
    let found = search(node, path);
    if found.is_none() {
        path.pop();
    }
    found
}

/// A copy of `node` with the subtree at `path` replaced by `replacement`.
pub fn replace_at(node: &LogicNode, path: &[Direction], replacement: LogicNode) -> LogicNode {
    let Some((&dir, rest)) = path.split_first() else {
        return replacement;
    };

    match node {
        LogicNode::Not(c) => LogicNode::Not(replace_at(c, rest, replacement).into()),
        LogicNode::And(l, r) => {
            let (l, r) = replace_child(l, r, dir, rest, replacement);
            LogicNode::And(l, r)
        }
        LogicNode::Or(l, r) => {
            let (l, r) = replace_child(l, r, dir, rest, replacement);
            LogicNode::Or(l, r)
        }
        LogicNode::Impl(l, r) => {
            let (l, r) = replace_child(l, r, dir, rest, replacement);
            LogicNode::Impl(l, r)
        }
        LogicNode::Equiv(l, r) => {
            let (l, r) = replace_child(l, r, dir, rest, replacement);
            LogicNode::Equiv(l, r)
        }
        LogicNode::Var(s) => panic!("Path continues below variable {}", s),
    }
}

fn replace_child(
    left: &LogicNode,
    right: &LogicNode,
    dir: Direction,
    rest: &[Direction],
    replacement: LogicNode,
) -> (Box<LogicNode>, Box<LogicNode>) {
    match dir {
        Direction::Left => (
            replace_at(left, rest, replacement).into(),
            right.clone().into(),
        ),
        Direction::Right => (
            left.clone().into(),
            replace_at(right, rest, replacement).into(),
        ),
    }
}

/// Clauses of whatever the rewrite loop left over.
fn residual_clauses(g: &LogicNode) -> ClauseSet {
    if g.is_cnf() {
        flatten_to_clauses(g)
    } else {
        debug!("Falling back to distribution for {}", g);
        naive_cnf(g)
    }
}
