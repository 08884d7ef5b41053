//! # Core Type Definitions
//!
//! This module contains all core types for the Hexad triple engine:
//! - Term values (`Constant`, `Variable`, `Term`)
//! - Ground and pattern triples (`Fact`, `TriplePattern`)
//! - Encoded identifiers (`TermId`, `Triple`)
//! - Error types (`HexadError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`
//! - Carry owned data only (no interior mutability, no shared state)

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// TERM VALUES
// =============================================================================

/// A constant term: an opaque literal value appearing in a fact or pattern.
///
/// The engine never interprets the content; constants matter only for
/// identity, equality, and dictionary keying.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Constant(pub String);

impl Constant {
    /// Create a new constant from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the constant as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named variable: an unbound position in a pattern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Variable(pub String);

impl Variable {
    /// Create a new variable from a name.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the variable name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

// =============================================================================
// TERM
// =============================================================================

/// A pattern position: either a bound constant or an unbound variable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    /// A bound literal value.
    Constant(Constant),
    /// An unbound named placeholder.
    Variable(Variable),
}

impl Term {
    /// Create a constant term.
    #[must_use]
    pub fn constant(s: impl Into<String>) -> Self {
        Self::Constant(Constant::new(s))
    }

    /// Create a variable term.
    #[must_use]
    pub fn variable(s: impl Into<String>) -> Self {
        Self::Variable(Variable::new(s))
    }

    /// Get the constant, if this term is one.
    #[must_use]
    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Self::Constant(c) => Some(c),
            Self::Variable(_) => None,
        }
    }

    /// Get the variable, if this term is one.
    #[must_use]
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Constant(_) => None,
            Self::Variable(v) => Some(v),
        }
    }

    /// Check whether this term is a variable.
    #[must_use]
    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }
}

impl From<Constant> for Term {
    fn from(c: Constant) -> Self {
        Self::Constant(c)
    }
}

impl From<Variable> for Term {
    fn from(v: Variable) -> Self {
        Self::Variable(v)
    }
}

// =============================================================================
// FACT
// =============================================================================

/// A ground (subject, predicate, object) triple.
///
/// Facts are ground by construction: every position is a constant.
/// They are the only insertable unit and are never mutated once stored.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fact {
    /// The subject constant.
    pub subject: Constant,
    /// The predicate constant.
    pub predicate: Constant,
    /// The object constant.
    pub object: Constant,
}

impl Fact {
    /// Create a new fact.
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: Constant::new(subject),
            predicate: Constant::new(predicate),
            object: Constant::new(object),
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.predicate, self.object)
    }
}

// =============================================================================
// TRIPLE PATTERN
// =============================================================================

/// A (subject, predicate, object) pattern where each position is a
/// constant or a variable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TriplePattern {
    /// The subject position.
    pub subject: Term,
    /// The predicate position.
    pub predicate: Term,
    /// The object position.
    pub object: Term,
}

impl TriplePattern {
    /// Create a new pattern.
    #[must_use]
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// The three positions in subject, predicate, object order.
    #[must_use]
    pub fn positions(&self) -> [&Term; 3] {
        [&self.subject, &self.predicate, &self.object]
    }

    /// Iterate the variables of this pattern in position order.
    ///
    /// A variable repeated across positions is yielded once per position.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.positions()
            .into_iter()
            .filter_map(|term| term.as_variable())
    }

    /// Check whether the pattern is ground (no variable positions).
    #[must_use]
    pub fn is_ground(&self) -> bool {
        self.positions().into_iter().all(|term| !term.is_variable())
    }
}

impl From<&Fact> for TriplePattern {
    fn from(fact: &Fact) -> Self {
        Self {
            subject: Term::Constant(fact.subject.clone()),
            predicate: Term::Constant(fact.predicate.clone()),
            object: Term::Constant(fact.object.clone()),
        }
    }
}

// =============================================================================
// ENCODED IDENTIFIERS
// =============================================================================

/// Dense identifier assigned to a constant by the dictionary.
///
/// Allocation starts at 1 and is monotonic; an id is never reused and
/// 0 is never issued. Unbound positions are represented as
/// `Option<TermId>::None`, never as a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TermId(pub u64);

impl TermId {
    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A fully encoded (subject, predicate, object) triple.
///
/// This is the stored form: three dictionary identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Encoded subject.
    pub subject: TermId,
    /// Encoded predicate.
    pub predicate: TermId,
    /// Encoded object.
    pub object: TermId,
}

impl Triple {
    /// Create a new encoded triple.
    #[must_use]
    pub const fn new(subject: TermId, predicate: TermId, object: TermId) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Hexad engine.
///
/// - No silent failures
/// - Use `Result<T, HexadError>` for fallible operations
/// - The engine never panics; all errors surface as values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexadError {
    /// An identifier was presented that the dictionary never issued.
    ///
    /// The dictionary and the index are populated together, so this is
    /// unreachable under correct usage; seeing it means internal state
    /// has diverged, and continuing would return silently wrong results.
    #[error("identifier not issued by dictionary: {0:?}")]
    UnknownId(TermId),
}

// =============================================================================
// TESTS
// =============================================================================
