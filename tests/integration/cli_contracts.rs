use crate::support::{dotnet_pair, isolated_config};
use clap::Parser;
use roster::tooling::cli::{Cli, CliContext};
use roster::RosterError;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["roster", "list"],
        vec!["roster", "list", "--format", "json"],
        vec!["roster", "show", "efcore-expert", "--include-body"],
        vec!["roster", "match", "design", "a", "microservice", "--limit", "2"],
        vec!["roster", "resolve", "dotnet-core-architect", "data", "layer", "--context", "orders"],
        vec!["roster", "validate", "--details", "--format", "json"],
        vec![
            "roster",
            "--agents-dir",
            "a",
            "--agents-dir",
            "b",
            "--no-builtin",
            "--log-level",
            "debug",
            "list",
        ],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_missing_arguments_and_bad_format() {
    assert!(Cli::try_parse_from(["roster", "match"]).is_err());
    assert!(Cli::try_parse_from(["roster", "resolve", "only-source"]).is_err());
    assert!(Cli::try_parse_from(["roster", "list", "--format", "yaml"]).is_err());
}

#[test]
fn repeated_agents_dir_is_collected_in_order() {
    let cli = Cli::try_parse_from(["roster", "--agents-dir", "a", "--agents-dir", "b", "list"]).unwrap();
    assert_eq!(cli.agents_dir.len(), 2);
    assert!(cli.agents_dir[0].ends_with("a"));
    assert!(cli.agents_dir[1].ends_with("b"));
}

fn run(config_dir: &Path, agents_dir: &Path, args: &[&str]) -> Result<String, RosterError> {
    let config = isolated_config(config_dir, "");
    let config = config.to_string_lossy().to_string();
    let agents = agents_dir.to_string_lossy().to_string();
    let mut argv = vec!["roster", "--config", config.as_str(), "--agents-dir", agents.as_str()];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    CliContext::from_cli(&cli)?.execute(&cli.command)
}

fn run_json(config_dir: &Path, agents_dir: &Path, args: &[&str]) -> Value {
    let output = run(config_dir, agents_dir, args).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn list_json_contract() {
    let agents = dotnet_pair();
    let config = TempDir::new().unwrap();
    let value = run_json(config.path(), agents.path(), &["list", "--format", "json"]);

    assert_eq!(value["total"], 2);
    assert_eq!(value["agents"][0]["agent_id"], "dotnet-core-architect");
    assert_eq!(value["agents"][0]["delegations"][0], "efcore-expert");
    assert!(value["agents"][1]["summary"].is_string());
}

#[test]
fn match_json_contract() {
    let agents = dotnet_pair();
    let config = TempDir::new().unwrap();
    let value = run_json(
        config.path(),
        agents.path(),
        &["match", "design a microservices architecture for .NET", "--format", "json"],
    );

    assert_eq!(value["query"], "design a microservices architecture for .NET");
    let first = &value["matches"][0];
    assert_eq!(first["agent_id"], "dotnet-core-architect");
    assert!(first["score"].as_u64().unwrap() > 0);
    assert!(first["matched_terms"].is_array());
    assert!(first["matched_phrases"].is_array());
}

#[test]
fn resolve_json_contract() {
    let agents = dotnet_pair();
    let config = TempDir::new().unwrap();

    let found = run_json(
        config.path(),
        agents.path(),
        &["resolve", "dotnet-core-architect", "data", "layer", "--format", "json"],
    );
    assert_eq!(found["found"], true);
    assert_eq!(found["target_agent_id"], "efcore-expert");
    assert_eq!(found["trigger_condition"], "data layer implementation");
    assert_eq!(
        found["handoff_text"],
        "Hand off to efcore-expert: data layer implementation"
    );

    let missing = run_json(
        config.path(),
        agents.path(),
        &["resolve", "efcore-expert", "data", "layer", "--format", "json"],
    );
    assert_eq!(missing["found"], false);
    assert_eq!(missing["source_agent_id"], "efcore-expert");
    assert!(missing.get("handoff_text").is_none());
}

#[test]
fn resolve_unknown_source_fails() {
    let agents = dotnet_pair();
    let config = TempDir::new().unwrap();
    let err = run(config.path(), agents.path(), &["resolve", "nobody", "x"]).unwrap_err();
    assert!(matches!(err, RosterError::UnknownAgent(_)));
}

#[test]
fn validate_json_contract() {
    let agents = dotnet_pair();
    let config = TempDir::new().unwrap();
    let value = run_json(config.path(), agents.path(), &["validate", "--format", "json"]);

    assert_eq!(value["total"], 2);
    assert_eq!(value["valid_count"], 2);
    assert_eq!(value["results"][0]["valid"], true);
    assert!(value["results"][0]["checks"][0]["description"].is_string());
    assert!(value["results"][0]["errors"].as_array().unwrap().is_empty());
}

#[test]
fn show_text_includes_delegations() {
    let agents = dotnet_pair();
    let config = TempDir::new().unwrap();
    let output = run(
        config.path(),
        agents.path(),
        &["show", "dotnet-core-architect", "--include-body"],
    )
    .unwrap();
    assert!(output.contains("efcore-expert"));
    assert!(output.contains("data layer implementation"));
    assert!(output.contains("Shapes service boundaries"));
}

#[test]
fn no_builtin_flag_overrides_config() {
    let agents = dotnet_pair();
    let config_dir = TempDir::new().unwrap();
    let config = isolated_config(config_dir.path(), "");
    std::fs::write(
        &config,
        "[registry]\ninclude_builtin = true\ninclude_user_agents = false\n",
    )
    .unwrap();

    let config = config.to_string_lossy().to_string();
    let agents_arg = agents.path().to_string_lossy().to_string();
    let with_builtin = Cli::try_parse_from([
        "roster", "--config", config.as_str(), "--agents-dir", agents_arg.as_str(), "list",
    ])
    .unwrap();
    let without_builtin = Cli::try_parse_from([
        "roster", "--config", config.as_str(), "--agents-dir", agents_arg.as_str(), "--no-builtin", "list",
    ])
    .unwrap();

    // dotnet-core-architect and efcore-expert override their built-in namesakes
    assert_eq!(CliContext::from_cli(&with_builtin).unwrap().registry().len(), 4);
    assert_eq!(CliContext::from_cli(&without_builtin).unwrap().registry().len(), 2);
}

#[test]
fn workspace_paths_are_loaded_relative_to_workspace() {
    let workspace = TempDir::new().unwrap();
    crate::support::write_agent(
        &workspace.path().join("team"),
        "reviewer.md",
        "---\nname: reviewer\ndescription: Code review for pull requests\nexamples:\n  - Review this pull request\n---\n",
    );
    std::fs::write(
        workspace.path().join("roster.toml"),
        "[registry]\ninclude_builtin = false\ninclude_user_agents = false\npaths = [\"team\"]\n",
    )
    .unwrap();

    let workspace_arg = workspace.path().to_string_lossy().to_string();
    let cli = Cli::try_parse_from(["roster", "--workspace", workspace_arg.as_str(), "list", "--format", "json"]).unwrap();
    let output = CliContext::from_cli(&cli).unwrap().execute(&cli.command).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["total"], 1);
    assert_eq!(value["agents"][0]["agent_id"], "reviewer");
}
