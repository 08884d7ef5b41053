//! # hexad-core
//!
//! The in-memory hexastore for Hexad - THE ENGINE.
//!
//! This crate implements the storage and matching core: a bidirectional
//! term dictionary, a six-permutation triple index, and a star-query
//! evaluator joining per-pattern matches into consistent variable
//! bindings.
//!
//! ## Architectural Constraints
//!
//! The ENGINE:
//! - Is the ONLY place where facts live (stateful, in-memory)
//! - Owns storage, indexing, and join evaluation; never query parsing,
//!   result presentation, or persistence
//! - Is single-threaded and synchronous: every operation runs to
//!   completion, nothing blocks on I/O
//! - Is deterministic: `BTreeMap`/`BTreeSet` only, no randomness
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod dictionary;
pub mod evaluator;
pub mod index;
pub mod query;
pub mod store;
pub mod substitution;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Constant, Fact, HexadError, Term, TermId, Triple, TriplePattern, Variable};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use dictionary::Dictionary;
pub use evaluator::{Projection, evaluate};
pub use index::{Permutation, SextupleIndex};
pub use query::StarQuery;
pub use store::HexaStore;
pub use substitution::Substitution;
