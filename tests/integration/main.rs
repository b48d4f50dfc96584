//! Integration tests for the roster agent registry and router

mod cli_contracts;
mod matcher_ranking;
mod registry_loading;
mod support;
