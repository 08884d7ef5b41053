//! # Sextuple Index
//!
//! Six two-level views over encoded triples, one per permutation of
//! (subject, predicate, object). Storing each triple six ways trades
//! memory for direct lookup regardless of which positions a pattern
//! binds: the permutation whose outer two keys are the bound positions
//! answers the query without touching unrelated triples.
//!
//! A single insertion routine parameterized by [`Permutation`] feeds
//! all six views; the views can never disagree.

use crate::{TermId, Triple};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One two-level view: first key -> second key -> set of third values.
type TwoLevelView = BTreeMap<TermId, BTreeMap<TermId, BTreeSet<TermId>>>;

// =============================================================================
// PERMUTATION
// =============================================================================

/// One of the six key orderings of (subject, predicate, object).
///
/// The name spells the key path: `Pos` is predicate -> object -> {subjects}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Permutation {
    /// subject -> predicate -> {objects}
    Spo,
    /// subject -> object -> {predicates}
    Sop,
    /// predicate -> subject -> {objects}
    Pso,
    /// predicate -> object -> {subjects}
    Pos,
    /// object -> subject -> {predicates}
    Osp,
    /// object -> predicate -> {subjects}
    Ops,
}

impl Permutation {
    /// All six permutations, in view-storage order.
    pub const ALL: [Self; 6] = [
        Self::Spo,
        Self::Sop,
        Self::Pso,
        Self::Pos,
        Self::Osp,
        Self::Ops,
    ];

    /// Position of this permutation's view in the index storage.
    #[must_use]
    const fn slot(self) -> usize {
        match self {
            Self::Spo => 0,
            Self::Sop => 1,
            Self::Pso => 2,
            Self::Pos => 3,
            Self::Osp => 4,
            Self::Ops => 5,
        }
    }

    /// Reorder a triple into this permutation's (first, second, third) keys.
    #[must_use]
    pub const fn key_order(self, triple: Triple) -> (TermId, TermId, TermId) {
        let Triple {
            subject: s,
            predicate: p,
            object: o,
        } = triple;
        match self {
            Self::Spo => (s, p, o),
            Self::Sop => (s, o, p),
            Self::Pso => (p, s, o),
            Self::Pos => (p, o, s),
            Self::Osp => (o, s, p),
            Self::Ops => (o, p, s),
        }
    }

    /// Rebuild the original triple from this permutation's keys.
    ///
    /// Inverse of [`Permutation::key_order`].
    #[must_use]
    pub const fn original(self, first: TermId, second: TermId, third: TermId) -> Triple {
        match self {
            Self::Spo => Triple::new(first, second, third),
            Self::Sop => Triple::new(first, third, second),
            Self::Pso => Triple::new(second, first, third),
            Self::Pos => Triple::new(third, first, second),
            Self::Osp => Triple::new(second, third, first),
            Self::Ops => Triple::new(third, second, first),
        }
    }
}

// =============================================================================
// SEXTUPLE INDEX
// =============================================================================

/// The six-view triple index.
///
/// All views hold the same triples; `BTreeMap`/`BTreeSet` keep every
/// enumeration deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SextupleIndex {
    /// The six views, addressed by `Permutation::slot`.
    views: [TwoLevelView; 6],
}

impl SextupleIndex {
    /// Create a new empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the view for one permutation.
    fn view(&self, permutation: Permutation) -> &TwoLevelView {
        &self.views[permutation.slot()]
    }

    /// Insert a triple into all six views.
    ///
    /// Idempotent: the third level is a set, so re-inserting a present
    /// triple leaves every view unchanged.
    pub fn insert(&mut self, triple: Triple) {
        for permutation in Permutation::ALL {
            let (first, second, third) = permutation.key_order(triple);
            self.views[permutation.slot()]
                .entry(first)
                .or_default()
                .entry(second)
                .or_default()
                .insert(third);
        }
    }

    /// Exact membership test, via the SPO view.
    #[must_use]
    pub fn contains(&self, triple: Triple) -> bool {
        let (first, second, third) = Permutation::Spo.key_order(triple);
        self.view(Permutation::Spo)
            .get(&first)
            .and_then(|inner| inner.get(&second))
            .is_some_and(|set| set.contains(&third))
    }

    /// Find all triples matching the given bound/unbound positions.
    ///
    /// `None` means unbound. Each arm selects the permutation whose
    /// outer keys are exactly the bound positions, so no arm ever scans
    /// triples that cannot match. The all-unbound pattern is a full
    /// enumeration by definition.
    #[must_use]
    pub fn find(
        &self,
        subject: Option<TermId>,
        predicate: Option<TermId>,
        object: Option<TermId>,
    ) -> Vec<Triple> {
        match (subject, predicate, object) {
            (Some(s), Some(p), Some(o)) => {
                let triple = Triple::new(s, p, o);
                if self.contains(triple) {
                    vec![triple]
                } else {
                    Vec::new()
                }
            }
            (Some(s), Some(p), None) => self.pair(Permutation::Spo, s, p),
            (None, Some(p), Some(o)) => self.pair(Permutation::Pos, p, o),
            (Some(s), None, Some(o)) => self.pair(Permutation::Sop, s, o),
            (Some(s), None, None) => self.single(Permutation::Spo, s),
            (None, Some(p), None) => self.single(Permutation::Pso, p),
            (None, None, Some(o)) => self.single(Permutation::Osp, o),
            (None, None, None) => self.iter_all().collect(),
        }
    }

    /// Two bound positions: read one third-level set.
    fn pair(&self, permutation: Permutation, first: TermId, second: TermId) -> Vec<Triple> {
        self.view(permutation)
            .get(&first)
            .and_then(|inner| inner.get(&second))
            .map(|set| {
                set.iter()
                    .map(|&third| permutation.original(first, second, third))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// One bound position: enumerate one outer entry.
    fn single(&self, permutation: Permutation, first: TermId) -> Vec<Triple> {
        self.view(permutation)
            .get(&first)
            .map(|inner| {
                inner
                    .iter()
                    .flat_map(|(&second, set)| {
                        set.iter()
                            .map(move |&third| permutation.original(first, second, third))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Enumerate every stored triple, via the SPO view.
    pub fn iter_all(&self) -> impl Iterator<Item = Triple> + '_ {
        self.view(Permutation::Spo).iter().flat_map(|(&s, inner)| {
            inner.iter().flat_map(move |(&p, set)| {
                set.iter().map(move |&o| Triple::new(s, p, o))
            })
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
