//! # Star Query Evaluator
//!
//! Conjunctive evaluation of a [`StarQuery`] against a [`HexaStore`].
//!
//! Each pattern is matched independently; the per-pattern substitution
//! sets are folded together with the pairwise merge from
//! [`Substitution`]. This is a nested-loop join keyed implicitly by
//! shared variables: a failed merge is a join-key mismatch. The fold
//! stops the moment the running set is empty — later patterns are not
//! evaluated at all.

use crate::query::StarQuery;
use crate::store::HexaStore;
use crate::substitution::Substitution;
use crate::HexadError;
use serde::{Deserialize, Serialize};

/// What to keep of each result substitution.
///
/// The join itself always computes full substitutions; projection is a
/// presentation choice, so it is a parameter rather than a fixed
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    /// Every variable bound during the join, incidental ones included.
    Full,
    /// Only the query's declared answer variables.
    Answers,
}

/// Evaluate a star query against a store.
///
/// Returns one substitution per consistent global assignment. An empty
/// pattern list yields no results, as does any pattern (or intermediate
/// join step) with zero matches.
pub fn evaluate(
    store: &HexaStore,
    query: &StarQuery,
    projection: Projection,
) -> Result<Vec<Substitution>, HexadError> {
    let mut patterns = query.patterns().iter();

    let Some(first) = patterns.next() else {
        return Ok(Vec::new());
    };

    let mut current = store.match_pattern(first)?;

    for pattern in patterns {
        if current.is_empty() {
            return Ok(Vec::new());
        }

        let matches = store.match_pattern(pattern)?;
        current = join(&current, &matches);
    }

    match projection {
        Projection::Full => Ok(current),
        Projection::Answers => Ok(current
            .iter()
            .map(|substitution| substitution.restrict(query.answer_variables()))
            .collect()),
    }
}

/// Nested-loop join: every pairwise merge that succeeds survives.
fn join(left: &[Substitution], right: &[Substitution]) -> Vec<Substitution> {
    let mut merged = Vec::new();
    for partial in left {
        for candidate in right {
            if let Some(combined) = partial.merge(candidate) {
                merged.push(combined);
            }
        }
    }
    merged
}

// =============================================================================
// TESTS
// =============================================================================
