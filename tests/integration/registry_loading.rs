use crate::support::{dotnet_pair, write_agent};
use proptest::prelude::*;
use roster::agent::{BuiltinSource, DirectorySource, InlineSource, RegistryLoader};
use roster::config::Integrity;
use roster::{AgentDescriptor, Delegation, Registry, RosterError};
use tempfile::TempDir;

#[test]
fn directory_load_keeps_file_order_and_fields() {
    let temp = dotnet_pair();
    let registry = Registry::load(&DirectorySource::new(temp.path())).unwrap();

    let ids: Vec<&str> = registry.ids().collect();
    assert_eq!(ids, vec!["dotnet-core-architect", "efcore-expert"]);

    let architect = registry.get("dotnet-core-architect").unwrap();
    assert_eq!(architect.trigger_phrases.len(), 1);
    assert_eq!(architect.delegations[0].target_agent_id, "efcore-expert");
    assert!(architect.origin.ends_with("dotnet-core-architect.md"));
    assert!(architect.body.as_deref().unwrap_or("").contains("service boundaries"));
}

#[test]
fn missing_summary_in_file_is_malformed() {
    let temp = TempDir::new().unwrap();
    let path = write_agent(temp.path(), "broken.md", "---\nname: broken\n---\nbody\n");

    let err = Registry::load(&DirectorySource::new(temp.path())).unwrap_err();
    match err {
        RosterError::MalformedDescriptor { origin, reason } => {
            assert!(origin.ends_with("broken.md"), "origin was {origin}");
            assert!(path.exists());
            assert!(reason.contains("summary") || reason.contains("description"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_id_is_malformed_even_with_file_stem() {
    let temp = TempDir::new().unwrap();
    write_agent(temp.path(), "nameless.md", "---\ndescription: no id here\n---\n");
    assert!(matches!(
        Registry::load(&DirectorySource::new(temp.path())),
        Err(RosterError::MalformedDescriptor { .. })
    ));
}

#[test]
fn toml_descriptors_load_alongside_markdown() {
    let temp = TempDir::new().unwrap();
    write_agent(
        temp.path(),
        "a.toml",
        r#"
name = "cache-expert"
description = "Redis and in-memory caching"
examples = ["Add a Redis cache in front of the catalog"]

[[delegations]]
trigger = "database tuning"
target = "db-expert"
"#,
    );
    write_agent(temp.path(), "b.md", "---\nname: db-expert\ndescription: databases\n---\n");

    let registry = Registry::load(&DirectorySource::new(temp.path())).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.get("cache-expert").unwrap().delegations[0].target_agent_id,
        "db-expert"
    );
}

#[test]
fn later_directory_overrides_builtin() {
    let temp = TempDir::new().unwrap();
    write_agent(
        temp.path(),
        "postgres.md",
        "---\nname: postgres-expert\ndescription: Team-specific PostgreSQL guidance\nexamples:\n  - Tune our Postgres\n---\n",
    );

    let registry = RegistryLoader::new()
        .with_source(BuiltinSource::new())
        .with_source(DirectorySource::new(temp.path()))
        .load()
        .unwrap();

    assert_eq!(registry.len(), BuiltinSource::names().count());
    let postgres = registry.get("postgres-expert").unwrap();
    assert_eq!(postgres.summary, "Team-specific PostgreSQL guidance");
    assert!(postgres.origin.ends_with("postgres.md"));
}

#[test]
fn builtin_agents_are_consistent() {
    let registry = Registry::load(&BuiltinSource::new()).unwrap();
    for result in registry.validate() {
        assert!(result.is_valid(), "{}: {:?}", result.agent_id, result.errors);
    }
}

#[test]
fn dangling_target_depends_on_integrity_mode() {
    let temp = TempDir::new().unwrap();
    write_agent(
        temp.path(),
        "lonely.md",
        "---\nname: lonely\ndescription: delegates nowhere\ndelegations:\n  - trigger: anything\n    target: ghost\n---\n",
    );

    assert!(matches!(
        Registry::load(&DirectorySource::new(temp.path())),
        Err(RosterError::DanglingDelegation { .. })
    ));

    let registry = RegistryLoader::new()
        .integrity(Integrity::Warn)
        .with_source(DirectorySource::new(temp.path()))
        .load()
        .unwrap();
    assert!(registry.contains("lonely"));
}

fn arb_descriptor() -> impl Strategy<Value = AgentDescriptor> {
    (
        "[a-z]{1,8}(-[a-z]{1,8}){0,2}",
        "[A-Za-z][A-Za-z .]{0,30}",
        proptest::collection::vec("[A-Za-z][a-z ]{0,20}", 0..4),
    )
        .prop_map(|(id, summary, phrases)| {
            let mut descriptor = AgentDescriptor::new(id, summary.trim().to_string());
            for phrase in phrases {
                descriptor = descriptor.with_trigger(phrase);
            }
            descriptor
        })
}

proptest! {
    #[test]
    fn get_returns_loaded_descriptor(descriptors in proptest::collection::vec(arb_descriptor(), 1..6)) {
        let mut unique: Vec<AgentDescriptor> = Vec::new();
        for d in descriptors {
            if !unique.iter().any(|u| u.id == d.id) {
                unique.push(d);
            }
        }
        let source = InlineSource::from_descriptors(unique.clone());
        let registry = Registry::load(&source).unwrap();

        prop_assert_eq!(registry.len(), unique.len());
        for original in &unique {
            prop_assert_eq!(registry.get(&original.id), Some(original));
        }
    }
}

#[test]
fn inline_delegations_survive_load() {
    let registry = Registry::from_descriptors(vec![
        AgentDescriptor::new("a", "agent a")
            .with_delegation(Delegation::new("data layer", "b", None)),
        AgentDescriptor::new("b", "agent b"),
    ])
    .unwrap();
    assert_eq!(registry.get("a").unwrap().delegation_targets(), vec!["b"]);
}
