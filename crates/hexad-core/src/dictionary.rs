//! # Term Dictionary
//!
//! Bidirectional mapping between constants and dense identifiers.
//!
//! Separating term identity from triple storage lets the index operate
//! entirely on small integers, which is what makes six parallel
//! permutation views affordable in memory and cheap to compare.
//!
//! The encode/lookup split is load-bearing: insertion allocates ids,
//! matching must not. A constant that was never inserted cannot match
//! anything, and allocating an id for it during a query would grow the
//! dictionary as a side effect of reads.

use crate::{Constant, HexadError, TermId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bidirectional constant <-> identifier mapping.
///
/// Identifiers start at 1, grow monotonically, and are never reused.
/// One dictionary is owned per store instance; there is no process-wide
/// shared state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dictionary {
    /// Forward mapping: constant -> id.
    ids: BTreeMap<Constant, TermId>,

    /// Reverse mapping: id -> constant.
    constants: BTreeMap<TermId, Constant>,

    /// Next identifier to allocate. 0 means "allocate 1 next".
    next_id: u64,
}

impl Dictionary {
    /// Create a new empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a constant, allocating a fresh identifier on first sight.
    ///
    /// Repeated calls with an equal constant return the same identifier.
    pub fn encode(&mut self, constant: &Constant) -> TermId {
        if let Some(&id) = self.ids.get(constant) {
            return id;
        }

        self.next_id = self.next_id.saturating_add(1);
        let id = TermId(self.next_id);
        self.ids.insert(constant.clone(), id);
        self.constants.insert(id, constant.clone());
        id
    }

    /// Look up a constant without allocating.
    ///
    /// Returns `None` for constants never encoded. Query paths use this
    /// so that unseen constants short-circuit to empty results instead
    /// of growing the dictionary.
    #[must_use]
    pub fn lookup(&self, constant: &Constant) -> Option<TermId> {
        self.ids.get(constant).copied()
    }

    /// Decode an identifier back to its constant.
    ///
    /// An identifier this dictionary never issued is internal
    /// corruption and surfaces as `HexadError::UnknownId`; the value is
    /// never invented.
    pub fn decode(&self, id: TermId) -> Result<&Constant, HexadError> {
        self.constants.get(&id).ok_or(HexadError::UnknownId(id))
    }

    /// Number of distinct constants encoded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check whether the dictionary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
