use crate::support::dotnet_pair;
use proptest::prelude::*;
use roster::agent::{BuiltinSource, DirectorySource};
use roster::config::MatcherConfig;
use roster::{Matcher, Registry};
use std::collections::HashMap;

#[test]
fn architecture_task_ranks_architect_first() {
    let temp = dotnet_pair();
    let registry = Registry::load(&DirectorySource::new(temp.path())).unwrap();
    let matcher = Matcher::new(&registry);

    let ranked = matcher.rank("design a microservices architecture for .NET");
    assert!(!ranked.is_empty());
    assert_eq!(ranked[0].descriptor.id, "dotnet-core-architect");
    assert_eq!(
        ranked[0].matched_phrases,
        vec!["Design a microservices architecture for .NET"]
    );
}

#[test]
fn word_inside_a_trigger_phrase_keeps_the_bonus() {
    let temp = dotnet_pair();
    let registry = Registry::load(&DirectorySource::new(temp.path())).unwrap();
    let matcher = Matcher::new(&registry);

    let before = matcher.best("design a microservices architecture for .NET").unwrap();
    let after = matcher
        .best("design a microservices clean architecture for .NET")
        .unwrap();
    assert_eq!(after.descriptor.id, "dotnet-core-architect");
    assert!(after.score >= before.score, "{} -> {}", before.score, after.score);
    assert_eq!(after.matched_phrases, before.matched_phrases);
}

#[test]
fn empty_and_unrelated_tasks_return_nothing() {
    let registry = Registry::load(&BuiltinSource::new()).unwrap();
    let matcher = Matcher::new(&registry);
    assert!(matcher.rank("").is_empty());
    assert!(matcher.rank("   \t").is_empty());
    assert!(matcher.rank("knit a woolly scarf").is_empty());
}

#[test]
fn builtin_set_routes_database_work() {
    let registry = Registry::load(&BuiltinSource::new()).unwrap();
    let best = Matcher::new(&registry)
        .best("optimize slow EF Core queries and migrations")
        .unwrap();
    assert_eq!(best.descriptor.id, "efcore-expert");
}

#[test]
fn limit_and_threshold_trim_results() {
    let registry = Registry::load(&BuiltinSource::new()).unwrap();
    let task = "database performance for .NET services on SQL Server and PostgreSQL";

    let all = Matcher::new(&registry).rank(task);
    assert!(all.len() > 1);

    let limited = Matcher::with_config(
        &registry,
        MatcherConfig {
            limit: 1,
            ..MatcherConfig::default()
        },
    )
    .rank(task);
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].descriptor.id, all[0].descriptor.id);

    let top = all[0].score;
    let strict = Matcher::with_config(
        &registry,
        MatcherConfig {
            min_score: top,
            ..MatcherConfig::default()
        },
    )
    .rank(task);
    assert!(strict.iter().all(|m| m.score >= top));
}

fn scores(matcher: &Matcher<'_>, task: &str) -> HashMap<String, u32> {
    matcher
        .rank(task)
        .into_iter()
        .map(|m| (m.descriptor.id.clone(), m.score))
        .collect()
}

const VOCABULARY: &[&str] = &[
    "design", "microservices", "architecture", ".net", "ef", "core", "queries", "postgres",
    "sql", "server", "index", "migrations", "data", "layer", "the", "for", "scarf", "c#",
];

fn arb_words() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::collection::vec(proptest::sample::select(VOCABULARY), 0..10)
}

fn arb_task() -> impl Strategy<Value = String> {
    arb_words().prop_map(|words| words.join(" "))
}

fn arb_insertions() -> impl Strategy<Value = Vec<(proptest::sample::Index, &'static str)>> {
    proptest::collection::vec(
        (any::<proptest::sample::Index>(), proptest::sample::select(VOCABULARY)),
        0..6,
    )
}

proptest! {
    #[test]
    fn adding_words_never_lowers_a_score(words in arb_words(), insertions in arb_insertions()) {
        let registry = Registry::load(&BuiltinSource::new()).unwrap();
        let matcher = Matcher::new(&registry);

        let mut extended = words.clone();
        for (position, word) in insertions {
            let at = position.index(extended.len() + 1);
            extended.insert(at, word);
        }

        let before = scores(&matcher, &words.join(" "));
        let after = scores(&matcher, &extended.join(" "));
        for (agent_id, score) in before {
            let now = after.get(&agent_id).copied().unwrap_or(0);
            prop_assert!(now >= score, "{} dropped from {} to {}", agent_id, score, now);
        }
    }

    #[test]
    fn ranking_is_sorted_and_stable(task in arb_task()) {
        let registry = Registry::load(&BuiltinSource::new()).unwrap();
        let order: HashMap<&str, usize> = registry.ids().enumerate().map(|(i, id)| (id, i)).collect();
        let ranked = Matcher::new(&registry).rank(&task);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(order[pair[0].descriptor.id.as_str()] < order[pair[1].descriptor.id.as_str()]);
            }
        }
    }
}
