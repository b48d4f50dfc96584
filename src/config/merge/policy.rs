//! Merge policy: default values every layered load starts from.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with the scalar defaults. List fields default through serde.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("registry.include_builtin", true)?
        .set_default("registry.include_user_agents", true)?
        .set_default("registry.integrity", "strict")?
        .set_default("matcher.word_weight", 1_i64)?
        .set_default("matcher.phrase_weight", 3_i64)?
        .set_default("matcher.min_score", 1_i64)?
        .set_default("matcher.limit", 0_i64)?
        .set_default("logging.level", "warn")?
        .set_default("logging.output", "stderr")
}
