use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DOTNET_ARCHITECT: &str = r#"---
name: dotnet-core-architect
description: .NET Core architect for microservices and clean architecture
examples:
  - Design a microservices architecture for .NET
delegations:
  - trigger: data layer implementation
    target: efcore-expert
---

Shapes service boundaries before code is written.
"#;

pub const EFCORE_EXPERT: &str = r#"---
name: efcore-expert
description: Entity Framework Core specialist for data access and migrations
examples:
  - Optimize my EF Core queries
---
"#;

pub fn write_agent(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Temp directory holding exactly the architect and EF Core agents.
pub fn dotnet_pair() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_agent(temp.path(), "dotnet-core-architect.md", DOTNET_ARCHITECT);
    write_agent(temp.path(), "efcore-expert.md", EFCORE_EXPERT);
    temp
}

/// Config file that loads no built-in or user agents.
pub fn isolated_config(dir: &Path, extra: &str) -> PathBuf {
    let path = dir.join("roster-test.toml");
    fs::write(
        &path,
        format!(
            "[registry]\ninclude_builtin = false\ninclude_user_agents = false\n{}",
            extra
        ),
    )
    .unwrap();
    path
}
