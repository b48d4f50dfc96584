//! Keyword matcher: ranks registered agents for a free-text task.
//!
//! Score = `word_weight` x |task words ∩ agent words| + `phrase_weight` x
//! (trigger phrases whose every word occurs in the task). Agent words come
//! from the summary, the trigger phrases, and the parts of the id. Adding
//! words anywhere in the task never lowers a score. Ties keep registry order.

use crate::agent::{AgentDescriptor, Registry};
use crate::config::MatcherConfig;
use crate::routing::tokenizer::{tokens, word_set};
use crate::types::Score;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// One ranked agent.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    pub descriptor: &'a AgentDescriptor,
    pub score: Score,
    /// Task words that overlap the agent's vocabulary, in task order
    pub matched_terms: Vec<String>,
    /// Trigger phrases found whole in the task, in declaration order
    pub matched_phrases: Vec<String>,
}

/// Precomputed vocabulary for one descriptor.
struct Profile {
    words: HashSet<String>,
    /// (phrase words, original) trigger phrases
    phrases: Vec<(HashSet<String>, String)>,
}

impl Profile {
    fn build(descriptor: &AgentDescriptor) -> Self {
        let mut words = word_set(&descriptor.summary);
        words.extend(word_set(&descriptor.id));
        for phrase in &descriptor.trigger_phrases {
            words.extend(word_set(phrase));
        }
        let phrases = descriptor
            .trigger_phrases
            .iter()
            .map(|p| (word_set(p), p.clone()))
            .filter(|(phrase_words, _)| !phrase_words.is_empty())
            .collect();
        Self { words, phrases }
    }
}

/// Ranks descriptors of a registry by relevance to a task description.
pub struct Matcher<'a> {
    registry: &'a Registry,
    profiles: Vec<Profile>,
    config: MatcherConfig,
}

impl<'a> Matcher<'a> {
    /// Create a matcher with default weights.
    pub fn new(registry: &'a Registry) -> Self {
        Self::with_config(registry, MatcherConfig::default())
    }

    pub fn with_config(registry: &'a Registry, config: MatcherConfig) -> Self {
        let profiles = registry.all().iter().map(Profile::build).collect();
        Self {
            registry,
            profiles,
            config,
        }
    }

    /// Rank every descriptor scoring at least `min_score`, highest first.
    ///
    /// Returns an empty vector for empty input or when nothing matches.
    pub fn rank(&self, task: &str) -> Vec<MatchResult<'a>> {
        let task_tokens = tokens(task);
        if task_tokens.is_empty() {
            return Vec::new();
        }
        let task_set: HashSet<&str> = task_tokens.iter().map(String::as_str).collect();
        let mut task_words: Vec<&str> = Vec::new();
        for t in &task_tokens {
            if !task_words.contains(&t.as_str()) {
                task_words.push(t);
            }
        }

        let mut results: Vec<MatchResult<'a>> = self
            .registry
            .all()
            .iter()
            .zip(&self.profiles)
            .filter_map(|(descriptor, profile)| {
                let matched_terms: Vec<String> = task_words
                    .iter()
                    .filter(|w| profile.words.contains(**w))
                    .map(|w| w.to_string())
                    .collect();
                let matched_phrases: Vec<String> = profile
                    .phrases
                    .iter()
                    .filter(|(phrase_words, _)| {
                        phrase_words.iter().all(|w| task_set.contains(w.as_str()))
                    })
                    .map(|(_, original)| original.clone())
                    .collect();

                let score = self
                    .config
                    .word_weight
                    .saturating_mul(matched_terms.len() as Score)
                    .saturating_add(
                        self.config
                            .phrase_weight
                            .saturating_mul(matched_phrases.len() as Score),
                    );

                debug!(
                    agent_id = %descriptor.id,
                    score,
                    terms = matched_terms.len(),
                    phrases = matched_phrases.len(),
                    "Scored agent"
                );

                (score >= self.config.min_score.max(1)).then(|| MatchResult {
                    descriptor,
                    score,
                    matched_terms,
                    matched_phrases,
                })
            })
            .collect();

        // Stable sort keeps registry insertion order among equal scores
        results.sort_by(|a, b| b.score.cmp(&a.score));
        if self.config.limit > 0 {
            results.truncate(self.config.limit);
        }
        results
    }

    /// Highest-ranked descriptor, if any scored.
    pub fn best(&self, task: &str) -> Option<MatchResult<'a>> {
        self.rank(task).into_iter().next()
    }
}
