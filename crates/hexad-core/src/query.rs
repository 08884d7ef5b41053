//! # Query Module
//!
//! Structured star-query representation.
//!
//! A star query is an ordered conjunction of triple patterns sharing
//! variables, plus the declared set of answer variables the caller is
//! interested in. Construction from surface syntax lives in embedding
//! layers; this module only carries the structure.

use crate::{TriplePattern, Variable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A conjunction of triple patterns over shared variables.
///
/// Pattern order matters only for evaluation cost, never for the
/// result set: the join is associative and commutative over compatible
/// substitutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarQuery {
    /// The patterns, evaluated in listed order.
    patterns: Vec<TriplePattern>,

    /// The declared variables of interest for presentation.
    answer_variables: BTreeSet<Variable>,
}

impl StarQuery {
    /// Create a new star query.
    #[must_use]
    pub fn new(patterns: Vec<TriplePattern>, answer_variables: BTreeSet<Variable>) -> Self {
        Self {
            patterns,
            answer_variables,
        }
    }

    /// The patterns, in evaluation order.
    #[must_use]
    pub fn patterns(&self) -> &[TriplePattern] {
        &self.patterns
    }

    /// The declared answer variables.
    #[must_use]
    pub fn answer_variables(&self) -> &BTreeSet<Variable> {
        &self.answer_variables
    }

    /// All variables occurring in any pattern, in sorted order.
    ///
    /// A superset check against the declared answer variables is the
    /// embedder's concern; the engine accepts answer variables that
    /// never occur (they simply stay unbound).
    #[must_use]
    pub fn pattern_variables(&self) -> BTreeSet<Variable> {
        self.patterns
            .iter()
            .flat_map(TriplePattern::variables)
            .cloned()
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
