use log::trace;

use super::{Clause, ClauseSet};

/// Drops tautologies and subsumed clauses and sorts the atoms of every remaining clause.
///
/// A clause is subsumed if another clause is a strict subset of it. Identical clauses
/// collapse into their first occurrence. The order of the surviving clauses is kept.
pub fn simplify(cs: ClauseSet) -> ClauseSet {
    let before = cs.size();

    let normed: Vec<Clause> = cs
        .into_iter()
        .filter(|c| !c.is_tautology())
        .map(|mut c| {
            c.sort();
            c
        })
        .collect();

    let mut res = ClauseSet::default();

    for (i, c) in normed.iter().enumerate() {
        let subsumed = normed
            .iter()
            .enumerate()
            .any(|(j, d)| i != j && d.is_strict_subset_of(c));
        if subsumed || res.contains(c) {
            continue;
        }
        res.add(c.clone());
    }

    trace!("Simplified {} clauses to {}", before, res.size());
    res
}
