//! # Substitutions
//!
//! Variable -> constant bindings produced by pattern matching, and the
//! merge contract the star-query join is built on.
//!
//! A substitution holds at most one value per variable. Two
//! substitutions merge iff they agree on every shared variable; the
//! result is the union of both. Disagreement yields no result at all,
//! never a partial one — a failed merge is exactly a join-key mismatch.

use crate::{Constant, Variable};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A binding set: variable -> constant.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Substitution {
    bindings: BTreeMap<Variable, Constant>,
}

impl Substitution {
    /// Create a new empty substitution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable to a constant.
    ///
    /// Returns `false` and leaves the substitution unchanged if the
    /// variable is already bound to a different constant. Re-binding to
    /// an equal constant succeeds and is a no-op.
    pub fn bind(&mut self, variable: Variable, constant: Constant) -> bool {
        match self.bindings.get(&variable) {
            Some(existing) => *existing == constant,
            None => {
                self.bindings.insert(variable, constant);
                true
            }
        }
    }

    /// Get the constant a variable is bound to.
    #[must_use]
    pub fn get(&self, variable: &Variable) -> Option<&Constant> {
        self.bindings.get(variable)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check whether no variables are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate the bindings in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Constant)> {
        self.bindings.iter()
    }

    /// Merge two substitutions.
    ///
    /// `None` if any shared variable is bound to different constants;
    /// otherwise the union of both binding sets.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Option<Self> {
        let mut merged = self.clone();
        for (variable, constant) in &other.bindings {
            if !merged.bind(variable.clone(), constant.clone()) {
                return None;
            }
        }
        Some(merged)
    }

    /// Restrict the substitution to the given variables.
    ///
    /// Bindings for variables outside the set are dropped; variables in
    /// the set but unbound here stay unbound.
    #[must_use]
    pub fn restrict(&self, variables: &BTreeSet<Variable>) -> Self {
        Self {
            bindings: self
                .bindings
                .iter()
                .filter(|(variable, _)| variables.contains(*variable))
                .map(|(variable, constant)| (variable.clone(), constant.clone()))
                .collect(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
