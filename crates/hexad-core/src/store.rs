//! # Hexastore
//!
//! The triple store: one [`Dictionary`] plus one [`SextupleIndex`],
//! composed behind a fact-level API. Facts go in as constants and fan
//! out to all six index views as encoded triples; patterns come in as
//! term-or-variable positions and come back out as substitutions.
//!
//! Insertion and matching resolve constants differently on purpose:
//! `insert` encodes (allocating), `match_pattern` looks up (never
//! allocating). A pattern mentioning a constant the store has never
//! seen cannot match anything and short-circuits to an empty result.

use crate::dictionary::Dictionary;
use crate::index::SextupleIndex;
use crate::substitution::Substitution;
use crate::{Fact, HexadError, Term, TermId, Triple, TriplePattern};
use serde::{Deserialize, Serialize};

/// In-memory hexastore over ground facts.
///
/// Each store owns its dictionary and index; stores are fully
/// independent of each other. Facts are never deleted or mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HexaStore {
    /// Term <-> identifier mapping.
    dictionary: Dictionary,

    /// The six permutation views.
    index: SextupleIndex,

    /// Number of logically distinct facts. Maintained on insertion,
    /// never recomputed from the index.
    count: usize,
}

impl HexaStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fact.
    ///
    /// Returns `false` if an equal fact is already stored; the index
    /// and the count are untouched in that case. The duplicate check
    /// runs before any index mutation, so there is no partial insert.
    pub fn insert(&mut self, fact: &Fact) -> bool {
        let triple = Triple::new(
            self.dictionary.encode(&fact.subject),
            self.dictionary.encode(&fact.predicate),
            self.dictionary.encode(&fact.object),
        );

        if self.index.contains(triple) {
            return false;
        }

        self.index.insert(triple);
        self.count = self.count.saturating_add(1);
        true
    }

    /// Insert a batch of facts. Returns how many were actually new.
    pub fn insert_all<I>(&mut self, facts: I) -> usize
    where
        I: IntoIterator<Item = Fact>,
    {
        facts
            .into_iter()
            .filter(|fact| self.insert(fact))
            .count()
    }

    /// Number of distinct facts stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check whether the store holds no facts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check whether an exact fact is stored.
    ///
    /// Read-only: unseen constants mean the fact cannot be present.
    #[must_use]
    pub fn contains(&self, fact: &Fact) -> bool {
        let (Some(s), Some(p), Some(o)) = (
            self.dictionary.lookup(&fact.subject),
            self.dictionary.lookup(&fact.predicate),
            self.dictionary.lookup(&fact.object),
        ) else {
            return false;
        };
        self.index.contains(Triple::new(s, p, o))
    }

    /// Borrow the dictionary, for introspection.
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Match a single pattern against the store.
    ///
    /// One substitution per matching fact, binding each variable
    /// position to the fact's constant there. A ground pattern
    /// degenerates to an existence check: one empty substitution or
    /// none. A variable repeated across positions only matches facts
    /// carrying the same constant in those positions.
    pub fn match_pattern(
        &self,
        pattern: &TriplePattern,
    ) -> Result<Vec<Substitution>, HexadError> {
        let Some((subject, predicate, object)) = self.resolve(pattern) else {
            // A bound constant the dictionary has never seen: a normal
            // query outcome, not an error.
            return Ok(Vec::new());
        };

        let mut results = Vec::new();
        for triple in self.index.find(subject, predicate, object) {
            if let Some(substitution) = self.bind(pattern, triple)? {
                results.push(substitution);
            }
        }
        Ok(results)
    }

    /// Enumerate all stored facts, decoded. Order is unspecified.
    pub fn facts(&self) -> Result<Vec<Fact>, HexadError> {
        self.index
            .iter_all()
            .map(|triple| self.decode(triple))
            .collect()
    }

    /// Resolve a pattern's positions to bound/unbound identifiers.
    ///
    /// `None` overall if any constant position is unknown to the
    /// dictionary; within the tuple, `None` marks a variable position.
    fn resolve(
        &self,
        pattern: &TriplePattern,
    ) -> Option<(Option<TermId>, Option<TermId>, Option<TermId>)> {
        let mut resolved = [None; 3];
        for (slot, term) in resolved.iter_mut().zip(pattern.positions()) {
            if let Term::Constant(constant) = term {
                *slot = Some(self.dictionary.lookup(constant)?);
            }
        }
        let [subject, predicate, object] = resolved;
        Some((subject, predicate, object))
    }

    /// Build the substitution a matched triple induces under a pattern.
    ///
    /// `None` when a repeated variable would have to bind two different
    /// constants within the same triple.
    fn bind(
        &self,
        pattern: &TriplePattern,
        triple: Triple,
    ) -> Result<Option<Substitution>, HexadError> {
        let ids = [triple.subject, triple.predicate, triple.object];
        let mut substitution = Substitution::new();

        for (term, id) in pattern.positions().into_iter().zip(ids) {
            if let Term::Variable(variable) = term {
                let constant = self.dictionary.decode(id)?.clone();
                if !substitution.bind(variable.clone(), constant) {
                    return Ok(None);
                }
            }
        }
        Ok(Some(substitution))
    }

    /// Decode an encoded triple back into a fact.
    fn decode(&self, triple: Triple) -> Result<Fact, HexadError> {
        Ok(Fact {
            subject: self.dictionary.decode(triple.subject)?.clone(),
            predicate: self.dictionary.decode(triple.predicate)?.clone(),
            object: self.dictionary.decode(triple.object)?.clone(),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
