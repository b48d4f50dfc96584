//! Persona document parsing.
//!
//! Markdown documents carry YAML front-matter between `---` fences followed by
//! a free-form body. Two body sections add to the front-matter:
//!
//! ```text
//! ## Examples
//! - Design a microservices architecture for our .NET platform
//!
//! ## Delegations
//! - data layer implementation -> efcore-expert
//! ```
//!
//! TOML documents use the same keys at top level.

use crate::agent::domain::{DelegationRecord, DescriptorRecord};
use crate::error::{Result, RosterError};

/// Supported persona document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Markdown,
    Toml,
}

impl DocumentFormat {
    /// Format for a file extension, `None` if the file is not a persona document.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "md" | "markdown" => Some(DocumentFormat::Markdown),
            "toml" => Some(DocumentFormat::Toml),
            _ => None,
        }
    }
}

/// Parse a document of the given format into a raw record tagged with `origin`.
pub fn parse_document(content: &str, format: DocumentFormat, origin: &str) -> Result<DescriptorRecord> {
    let mut record = match format {
        DocumentFormat::Markdown => parse_markdown(content, origin)?,
        DocumentFormat::Toml => toml::from_str::<DescriptorRecord>(content)
            .map_err(|e| RosterError::malformed(origin, format!("invalid TOML: {}", e)))?,
    };
    record.origin = origin.to_string();
    Ok(record)
}

/// Split a Markdown document into (front-matter, body).
fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let trimmed = content.trim_start_matches('\u{feff}');
    let mut lines = trimmed.split_inclusive('\n');
    match lines.next() {
        Some(first) if first.trim_end() == "---" => {}
        _ => return (None, trimmed),
    }

    let start = trimmed.find('\n').map(|i| i + 1).unwrap_or(trimmed.len());
    let mut offset = start;
    for line in lines {
        if line.trim_end() == "---" {
            let front = &trimmed[start..offset];
            let body = &trimmed[offset + line.len()..];
            return (Some(front), body);
        }
        offset += line.len();
    }
    // Unterminated fence: treat the whole document as body
    (None, trimmed)
}

fn parse_markdown(content: &str, origin: &str) -> Result<DescriptorRecord> {
    let (front, body) = split_front_matter(content);

    let mut record = match front {
        Some(yaml) if !yaml.trim().is_empty() => serde_yaml::from_str::<DescriptorRecord>(yaml)
            .map_err(|e| RosterError::malformed(origin, format!("invalid front-matter: {}", e)))?,
        _ => DescriptorRecord::default(),
    };

    for example in section_bullets(body, "examples") {
        let example = strip_quotes(&example).to_string();
        if !record.triggers.iter().any(|t| t.eq_ignore_ascii_case(&example)) {
            record.triggers.push(example);
        }
    }

    for line in section_bullets(body, "delegations") {
        let Some((condition, target)) = split_arrow(&line) else {
            tracing::warn!(origin, line = %line, "Ignoring delegation bullet without '->'");
            continue;
        };
        record.delegations.push(DelegationRecord {
            trigger: Some(condition.to_string()),
            target: Some(target.to_string()),
            handoff: None,
        });
    }

    if !body.trim().is_empty() {
        record.body = Some(body.trim().to_string());
    }
    Ok(record)
}

/// Bullet items of the first heading named `section` (case-insensitive), up to
/// the next heading of the same or higher level.
fn section_bullets(body: &str, section: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut level: Option<usize> = None;
    let mut in_fence = false;

    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        if let Some((hashes, title)) = heading(trimmed) {
            match level {
                Some(current) if hashes <= current => break,
                Some(_) => continue,
                None if title.eq_ignore_ascii_case(section) => {
                    level = Some(hashes);
                    continue;
                }
                None => continue,
            }
        }

        if level.is_some() {
            if let Some(item) = trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
            {
                let item = item.trim();
                if !item.is_empty() {
                    items.push(item.to_string());
                }
            }
        }
    }
    items
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(' ') {
        return None;
    }
    Some((hashes, rest.trim().trim_end_matches(':')))
}

fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    for (open, close) in [('"', '"'), ('\'', '\''), ('“', '”')] {
        if s.len() >= 2 && s.starts_with(open) && s.ends_with(close) {
            return &s[open.len_utf8()..s.len() - close.len_utf8()];
        }
    }
    s
}

fn split_arrow(line: &str) -> Option<(&str, &str)> {
    let (condition, target) = line.split_once("->").or_else(|| line.split_once('→'))?;
    let condition = strip_quotes(condition);
    let target = target.trim().trim_matches('`');
    if condition.is_empty() || target.is_empty() {
        return None;
    }
    Some((condition, target))
}
