//! CLI Tooling
//!
//! Command-line interface over the agent registry: list, show, match, resolve,
//! validate. Each variant maps to one [`AgentCommandService`] call.

use crate::agent::{AgentCommandService, Registry, RegistryLoader};
use crate::config::{ConfigLoader, RosterConfig};
use crate::error::RosterError;
use crate::logging::LoggingOverrides;
use crate::tooling::format::{
    format_agent_list_json, format_agent_list_text, format_agent_show_json,
    format_agent_show_text, format_match_json, format_match_text, format_resolve_json,
    format_resolve_text, format_validation_json, format_validation_text,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Roster CLI - pick the right agent persona for a task and follow its handoffs
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Agent registry and router for persona documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Additional agent directory, loaded after configured sources (repeatable)
    #[arg(long = "agents-dir")]
    pub agents_dir: Vec<PathBuf>,

    /// Do not load the built-in agents
    #[arg(long)]
    pub no_builtin: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging settings given on the command line.
    pub fn logging_overrides(&self) -> LoggingOverrides {
        LoggingOverrides {
            verbose: self.verbose,
            level: self.log_level.clone(),
            format: self.log_format.clone(),
            output: self.log_output.clone(),
            file: self.log_file.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all agents
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show agent details
    Show {
        /// Agent ID
        agent_id: String,
        /// Include the persona document body
        #[arg(long)]
        include_body: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Rank agents for a task description
    Match {
        /// Task description
        #[arg(required = true)]
        task: Vec<String>,
        /// Maximum number of results (0 for no limit)
        #[arg(long)]
        limit: Option<usize>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Resolve a delegation from an agent
    Resolve {
        /// Source agent ID
        source: String,
        /// Trigger keyword(s)
        #[arg(required = true)]
        trigger: Vec<String>,
        /// Text substituted for {context} in the handoff template
        #[arg(long)]
        context: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Validate all agents
    Validate {
        /// Show every check and error, not only failures
        #[arg(long)]
        details: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

/// CLI context: loaded configuration and the registry built from it
pub struct CliContext {
    config: RosterConfig,
    registry: Registry,
}

impl CliContext {
    /// Load configuration for a workspace, or from an explicit file.
    pub fn load_config(
        workspace_root: &Path,
        config_path: Option<&Path>,
    ) -> Result<RosterConfig, RosterError> {
        match config_path {
            Some(path) => ConfigLoader::load_from_file(path),
            None => ConfigLoader::load(workspace_root),
        }
    }

    /// Create a new CLI context from loaded configuration
    pub fn new(
        workspace_root: &Path,
        mut config: RosterConfig,
        extra_dirs: &[PathBuf],
        no_builtin: bool,
    ) -> Result<Self, RosterError> {
        if no_builtin {
            config.registry.include_builtin = false;
        }
        let loader = RegistryLoader::from_config(&config.registry, workspace_root, extra_dirs)?;
        debug!(sources = ?loader.source_names(), "Loading agent registry");
        let registry = loader.load()?;

        Ok(Self { config, registry })
    }

    /// Load configuration and registry for parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, RosterError> {
        let config = Self::load_config(&cli.workspace, cli.config.as_deref())?;
        Self::new(&cli.workspace, config, &cli.agents_dir, cli.no_builtin)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, RosterError> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::List { format } => {
                let result = AgentCommandService::list(&self.registry);
                Ok(match format.as_str() {
                    "json" => format_agent_list_json(&result),
                    _ => format_agent_list_text(&result),
                })
            }
            Commands::Show {
                agent_id,
                include_body,
                format,
            } => {
                let result = AgentCommandService::show(&self.registry, agent_id, *include_body)?;
                Ok(match format.as_str() {
                    "json" => format_agent_show_json(&result),
                    _ => format_agent_show_text(&result),
                })
            }
            Commands::Match {
                task,
                limit,
                format,
            } => {
                let task = task.join(" ");
                let result =
                    AgentCommandService::match_task(&self.registry, &self.config.matcher, &task, *limit);
                Ok(match format.as_str() {
                    "json" => format_match_json(&result),
                    _ => format_match_text(&result),
                })
            }
            Commands::Resolve {
                source,
                trigger,
                context,
                format,
            } => {
                let trigger = trigger.join(" ");
                let result = AgentCommandService::resolve(
                    &self.registry,
                    source,
                    &trigger,
                    context.as_deref(),
                )?;
                Ok(match format.as_str() {
                    "json" => format_resolve_json(&result),
                    _ => format_resolve_text(&result),
                })
            }
            Commands::Validate { details, format } => {
                let result = AgentCommandService::validate_all(&self.registry);
                Ok(match format.as_str() {
                    "json" => format_validation_json(&result),
                    _ => format_validation_text(&result, *details),
                })
            }
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::List { .. } => "list",
        Commands::Show { .. } => "show",
        Commands::Match { .. } => "match",
        Commands::Resolve { .. } => "resolve",
        Commands::Validate { .. } => "validate",
    }
}
