//! # Star Query Integration Tests
//!
//! End-to-end exercises of the full stack: facts in through the store,
//! bindings out through the evaluator.

use hexad_core::{
    Constant, Fact, HexaStore, Projection, StarQuery, Substitution, Term, TriplePattern, Variable,
    evaluate,
};
use std::collections::BTreeSet;

fn social_store() -> HexaStore {
    let mut store = HexaStore::new();
    store.insert_all([
        Fact::new("Alice", "knows", "Bob"),
        Fact::new("Alice", "likes", "Pizza"),
        Fact::new("Ruby", "knows", "Bob"),
    ]);
    store
}

fn bindings_of(results: &[Substitution], name: &str) -> BTreeSet<String> {
    results
        .iter()
        .filter_map(|sub| sub.get(&Variable::new(name)))
        .map(|c| c.as_str().to_string())
        .collect()
}

// =============================================================================
// STAR QUERIES
// =============================================================================

#[test]
fn who_knows_bob() {
    let query = StarQuery::new(
        vec![TriplePattern::new(
            Term::variable("x"),
            Term::constant("knows"),
            Term::constant("Bob"),
        )],
        BTreeSet::from([Variable::new("x")]),
    );

    let results = evaluate(&social_store(), &query, Projection::Full).expect("evaluate");

    assert_eq!(results.len(), 2);
    assert_eq!(
        bindings_of(&results, "x"),
        BTreeSet::from_iter(["Alice".to_string(), "Ruby".to_string()])
    );
}

#[test]
fn who_knows_bob_and_likes_pizza() {
    let query = StarQuery::new(
        vec![
            TriplePattern::new(
                Term::variable("x"),
                Term::constant("knows"),
                Term::constant("Bob"),
            ),
            TriplePattern::new(
                Term::variable("x"),
                Term::constant("likes"),
                Term::constant("Pizza"),
            ),
        ],
        BTreeSet::from([Variable::new("x")]),
    );

    let results = evaluate(&social_store(), &query, Projection::Answers).expect("evaluate");

    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].get(&Variable::new("x")),
        Some(&Constant::new("Alice"))
    );
}

#[test]
fn empty_first_pattern_short_circuits_to_empty() {
    // "admires" was never inserted: the first pattern cannot match, so
    // the query ends before touching the second pattern. The dictionary
    // not growing across the whole evaluation shows no lookup ever
    // allocated along the way.
    let store = social_store();
    let dictionary_size = store.dictionary().len();

    let query = StarQuery::new(
        vec![
            TriplePattern::new(
                Term::variable("x"),
                Term::constant("admires"),
                Term::constant("Bob"),
            ),
            TriplePattern::new(
                Term::variable("x"),
                Term::constant("likes"),
                Term::constant("Pizza"),
            ),
        ],
        BTreeSet::from([Variable::new("x")]),
    );

    let results = evaluate(&store, &query, Projection::Full).expect("evaluate");

    assert!(results.is_empty());
    assert_eq!(store.dictionary().len(), dictionary_size);
}

#[test]
fn three_pattern_chain() {
    let mut store = HexaStore::new();
    store.insert_all([
        Fact::new("Alice", "knows", "Bob"),
        Fact::new("Bob", "worksAt", "Bakery"),
        Fact::new("Bakery", "locatedIn", "Lyon"),
        Fact::new("Alice", "knows", "Eve"),
        Fact::new("Eve", "worksAt", "Forge"),
    ]);

    // ?p knows ?q, ?q worksAt ?w, ?w locatedIn ?c
    let query = StarQuery::new(
        vec![
            TriplePattern::new(
                Term::variable("p"),
                Term::constant("knows"),
                Term::variable("q"),
            ),
            TriplePattern::new(
                Term::variable("q"),
                Term::constant("worksAt"),
                Term::variable("w"),
            ),
            TriplePattern::new(
                Term::variable("w"),
                Term::constant("locatedIn"),
                Term::variable("c"),
            ),
        ],
        BTreeSet::from([Variable::new("p"), Variable::new("c")]),
    );

    let results = evaluate(&store, &query, Projection::Answers).expect("evaluate");

    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].get(&Variable::new("p")),
        Some(&Constant::new("Alice"))
    );
    assert_eq!(
        results[0].get(&Variable::new("c")),
        Some(&Constant::new("Lyon"))
    );
    assert_eq!(results[0].get(&Variable::new("q")), None);
}

#[test]
fn ground_pattern_inside_query_acts_as_guard() {
    let store = social_store();

    // The ground pattern holds, so it contributes one empty
    // substitution and leaves the other pattern's bindings intact.
    let query = StarQuery::new(
        vec![
            TriplePattern::new(
                Term::constant("Alice"),
                Term::constant("likes"),
                Term::constant("Pizza"),
            ),
            TriplePattern::new(
                Term::variable("x"),
                Term::constant("knows"),
                Term::constant("Bob"),
            ),
        ],
        BTreeSet::from([Variable::new("x")]),
    );
    let results = evaluate(&store, &query, Projection::Full).expect("evaluate");
    assert_eq!(bindings_of(&results, "x").len(), 2);

    // A failing guard empties the whole query.
    let query = StarQuery::new(
        vec![
            TriplePattern::new(
                Term::constant("Ruby"),
                Term::constant("likes"),
                Term::constant("Pizza"),
            ),
            TriplePattern::new(
                Term::variable("x"),
                Term::constant("knows"),
                Term::constant("Bob"),
            ),
        ],
        BTreeSet::from([Variable::new("x")]),
    );
    let results = evaluate(&store, &query, Projection::Full).expect("evaluate");
    assert!(results.is_empty());
}

// =============================================================================
// STORE-LEVEL PROPERTIES
// =============================================================================

#[test]
fn index_symmetry_over_all_bound_combinations() {
    let mut store = HexaStore::new();
    let fact = Fact::new("Alice", "knows", "Bob");
    store.insert(&fact);
    store.insert(&Fact::new("Noise", "around", "It"));

    let s = || Term::constant("Alice");
    let p = || Term::constant("knows");
    let o = || Term::constant("Bob");
    let vs = || Term::variable("s");
    let vp = || Term::variable("p");
    let vo = || Term::variable("o");

    let patterns = [
        TriplePattern::new(s(), p(), o()),
        TriplePattern::new(s(), p(), vo()),
        TriplePattern::new(vs(), p(), o()),
        TriplePattern::new(s(), vp(), o()),
        TriplePattern::new(s(), vp(), vo()),
        TriplePattern::new(vs(), p(), vo()),
        TriplePattern::new(vs(), vp(), o()),
    ];

    for pattern in patterns {
        let results = store.match_pattern(&pattern).expect("match");
        assert_eq!(results.len(), 1, "pattern {pattern:?}");

        // Rebuild the fact from the pattern and the bindings; every
        // dispatch case must reproduce the same fact.
        let sub = &results[0];
        let rebuilt: Vec<String> = pattern
            .positions()
            .into_iter()
            .map(|term| match term {
                Term::Constant(c) => c.as_str().to_string(),
                Term::Variable(v) => sub.get(v).expect("bound").as_str().to_string(),
            })
            .collect();
        assert_eq!(rebuilt, vec!["Alice", "knows", "Bob"]);
    }
}

#[test]
fn duplicate_rejection_is_observable() {
    let mut store = HexaStore::new();
    let fact = Fact::new("Alice", "knows", "Bob");

    assert!(store.insert(&fact));
    assert!(!store.insert(&fact));
    assert_eq!(store.len(), 1);
    assert_eq!(store.facts().expect("facts").len(), 1);
}

#[test]
fn unseen_constant_is_not_an_error() {
    let store = social_store();
    let pattern = TriplePattern::new(
        Term::constant("Ghost"),
        Term::variable("p"),
        Term::variable("o"),
    );

    let results = store.match_pattern(&pattern).expect("no error");
    assert!(results.is_empty());
}

#[test]
fn enumeration_matches_size_after_mixed_inserts() {
    let mut store = HexaStore::new();
    store.insert_all([
        Fact::new("a", "r", "b"),
        Fact::new("a", "r", "b"),
        Fact::new("b", "r", "c"),
        Fact::new("a", "r", "c"),
        Fact::new("b", "r", "c"),
    ]);

    assert_eq!(store.len(), 3);
    assert_eq!(store.facts().expect("facts").len(), 3);
}

#[test]
fn independent_stores_do_not_share_state() {
    let mut first = HexaStore::new();
    let mut second = HexaStore::new();

    first.insert(&Fact::new("Alice", "knows", "Bob"));
    second.insert(&Fact::new("Ruby", "knows", "Eve"));

    assert!(first.contains(&Fact::new("Alice", "knows", "Bob")));
    assert!(!second.contains(&Fact::new("Alice", "knows", "Bob")));
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}
