use std::{cmp::Ordering, collections::HashMap, fmt};

use serde::{
    de::{Error, Unexpected, Visitor},
    Deserialize, Serialize,
};

use crate::consts::{EMPTY_CLAUSE, EMPTY_CLAUSE_SET};

pub mod simplify;

/// A possibly negated variable, rendered as `x` or `-x`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Atom {
    lit: String,
    negated: bool,
}

impl Atom {
    pub fn new<S: Into<String>>(lit: S, negated: bool) -> Self {
        Atom {
            lit: lit.into(),
            negated,
        }
    }

    pub fn lit(&self) -> &str {
        &self.lit
    }

    pub fn negated(&self) -> bool {
        self.negated
    }

    pub fn not(&self) -> Atom {
        Atom {
            lit: self.lit.clone(),
            negated: !self.negated,
        }
    }

    pub fn eval(&self, interp: &HashMap<String, bool>) -> bool {
        interp.get(&self.lit).copied().unwrap_or(false) != self.negated
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", if self.negated() { "-" } else { "" }, self.lit())
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        match s.strip_prefix('-') {
            Some(lit) => Atom::new(lit, true),
            None => Atom::new(s, false),
        }
    }
}

// Same order as the rendered text: `-` sorts before every identifier character.
impl Ord for Atom {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .negated
            .cmp(&self.negated)
            .then_with(|| self.lit.cmp(&other.lit))
    }
}

impl PartialOrd for Atom {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Atom {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Atom {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AtomVisitor;

        impl<'de> Visitor<'de> for AtomVisitor {
            type Value = Atom;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a literal such as `x` or `-x`")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                if v.is_empty() || v == "-" {
                    return Err(Error::invalid_value(Unexpected::Str(v), &self));
                }
                Ok(v.into())
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: Error,
            {
                let s = std::str::from_utf8(v)
                    .map_err(|_| Error::invalid_value(Unexpected::Bytes(v), &self))?;
                self.visit_str(s)
            }
        }

        deserializer.deserialize_str(AtomVisitor)
    }
}

/// A disjunction of distinct atoms. An empty clause is unsatisfiable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Clause {
    atoms: Vec<Atom>,
}

impl Clause {
    pub fn new(atoms: Vec<Atom>) -> Self {
        let mut c = Clause {
            atoms: Vec::with_capacity(atoms.len()),
        };
        c.add_all(atoms);
        c
    }

    /// Adds `atom` unless the clause already contains it.
    pub fn add(&mut self, atom: Atom) {
        if !self.contains(&atom) {
            self.atoms.push(atom);
        }
    }

    pub fn add_all(&mut self, atoms: Vec<Atom>) {
        for a in atoms {
            self.add(a);
        }
    }

    pub fn contains(&self, atom: &Atom) -> bool {
        self.atoms.contains(atom)
    }

    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    pub fn atoms(&self) -> &Vec<Atom> {
        &self.atoms
    }

    pub fn find_negation_of(&self, a: &Atom) -> Option<usize> {
        self.atoms
            .iter()
            .position(|atom| atom.negated != a.negated && atom.lit == a.lit)
    }

    /// Contains some variable both positively and negated.
    pub fn is_tautology(&self) -> bool {
        self.into_iter()
            .any(|a| !a.negated && self.find_negation_of(a).is_some())
    }

    /// Every atom of `self` occurs in `other`, and `other` has more atoms.
    pub fn is_strict_subset_of(&self, other: &Clause) -> bool {
        self.size() < other.size() && self.atoms.iter().all(|a| other.contains(a))
    }

    pub fn sort(&mut self) {
        self.atoms.sort();
    }

    pub fn eval(&self, interp: &HashMap<String, bool>) -> bool {
        self.into_iter().any(|a| a.eval(interp))
    }
}

impl FromIterator<Atom> for Clause {
    fn from_iter<T: IntoIterator<Item = Atom>>(iter: T) -> Self {
        Clause::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.atoms.as_slice() {
            [] => write!(f, "{}", EMPTY_CLAUSE),
            [a] => write!(f, "{}", a),
            atoms => {
                let atoms: Vec<String> = atoms.iter().map(|a| a.to_string()).collect();
                write!(f, "({})", atoms.join(" v "))
            }
        }
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Atom;

    type IntoIter = std::slice::Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}

/// A conjunction of clauses in discovery order.
#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ClauseSet {
    clauses: Vec<Clause>,
}

impl ClauseSet {
    pub fn new(clauses: Vec<Clause>) -> Self {
        ClauseSet { clauses }
    }

    pub fn add(&mut self, c: Clause) {
        self.clauses.push(c)
    }

    pub fn add_all(&mut self, cs: Vec<Clause>) {
        for c in cs {
            self.add(c);
        }
    }

    pub fn unite(&mut self, cs: ClauseSet) {
        self.add_all(cs.clauses)
    }

    pub fn size(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &Vec<Clause> {
        &self.clauses
    }

    pub fn contains(&self, c: &Clause) -> bool {
        self.clauses.contains(c)
    }

    /// Names of all atoms in order of first occurrence.
    pub fn variables(&self) -> Vec<String> {
        let mut vars: Vec<String> = Vec::new();
        for a in self.clauses.iter().flatten() {
            if !vars.iter().any(|v| v == a.lit()) {
                vars.push(a.lit().to_string());
            }
        }
        vars
    }

    pub fn eval(&self, interp: &HashMap<String, bool>) -> bool {
        self.clauses.iter().all(|c| c.eval(interp))
    }
}

impl FromIterator<Clause> for ClauseSet {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        ClauseSet::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ClauseSet {
    type Item = Clause;

    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", EMPTY_CLAUSE_SET);
        }

        let clauses: Vec<String> = self.clauses.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", clauses.join(" & "))
    }
}
