//! Format command results as human-readable text or JSON.

use crate::agent::{
    AgentListResult, AgentMatchResult, AgentResolveResult, AgentShowResult,
    AgentValidateAllResult, ValidationResult,
};
use crate::routing::Resolution;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(header);
    table
}

fn to_pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Format agent list result as text
pub fn format_agent_list_text(result: &AgentListResult) -> String {
    if result.agents.is_empty() {
        return "No agents found.".to_string();
    }
    let mut out = format!("{}\n\n", format_section_heading("Agents"));
    let mut table = table(vec!["Agent", "Summary", "Delegates to"]);
    for item in &result.agents {
        let targets = if item.delegations.is_empty() {
            "-".to_string()
        } else {
            item.delegations.join(", ")
        };
        table.add_row(vec![item.agent_id.clone(), item.summary.clone(), targets]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} agent(s)", result.agents.len()));
    out
}

/// Format agent list result as JSON
pub fn format_agent_list_json(result: &AgentListResult) -> String {
    let agents: Vec<_> = result
        .agents
        .iter()
        .map(|item| {
            json!({
                "agent_id": item.agent_id,
                "summary": item.summary,
                "delegations": item.delegations,
            })
        })
        .collect();
    to_pretty(&json!({ "agents": agents, "total": result.agents.len() }))
}

/// Format agent show result as text
pub fn format_agent_show_text(result: &AgentShowResult) -> String {
    let mut out = format!("{}\n", format_section_heading(&result.agent_id));
    out.push_str(&format!("Summary: {}\n", result.summary));
    out.push_str(&format!("Origin: {}\n", result.origin));

    out.push_str(&format!("\n{}\n", format_section_heading("Trigger phrases")));
    if result.trigger_phrases.is_empty() {
        out.push_str("  (none)\n");
    }
    for phrase in &result.trigger_phrases {
        out.push_str(&format!("  - {}\n", phrase));
    }

    out.push_str(&format!("\n{}\n", format_section_heading("Delegations")));
    if result.delegations.is_empty() {
        out.push_str("  (none)\n");
    } else {
        let mut table = table(vec!["Condition", "Target", "Handoff"]);
        for d in &result.delegations {
            table.add_row(vec![
                d.trigger_condition.clone(),
                d.target_agent_id.clone(),
                d.handoff_template.clone(),
            ]);
        }
        out.push_str(&format!("{}\n", table));
    }

    if let Some(body) = &result.body {
        out.push_str(&format!("\n{}\n", format_section_heading("Document")));
        out.push_str(body.trim_end());
        out.push('\n');
    }
    out
}

/// Format agent show result as JSON
pub fn format_agent_show_json(result: &AgentShowResult) -> String {
    let mut out = json!({
        "agent_id": result.agent_id,
        "summary": result.summary,
        "origin": result.origin,
        "trigger_phrases": result.trigger_phrases,
        "delegations": result.delegations,
    });
    if let Some(body) = &result.body {
        out["body"] = json!(body);
    }
    to_pretty(&out)
}

/// Format match result as text
pub fn format_match_text(result: &AgentMatchResult) -> String {
    if result.matches.is_empty() {
        return format!("No agent matched: {}", result.query);
    }
    let mut out = format!("{}\n\n", format_section_heading("Matches"));
    let mut table = table(vec!["#", "Agent", "Score", "Matched"]);
    for (rank, m) in result.matches.iter().enumerate() {
        let mut matched = m.matched_terms.join(", ");
        for phrase in &m.matched_phrases {
            if !matched.is_empty() {
                matched.push_str(", ");
            }
            matched.push_str(&format!("\"{}\"", phrase));
        }
        table.add_row(vec![
            (rank + 1).to_string(),
            m.agent_id.clone(),
            m.score.to_string(),
            matched,
        ]);
    }
    out.push_str(&table.to_string());
    out
}

/// Format match result as JSON
pub fn format_match_json(result: &AgentMatchResult) -> String {
    to_pretty(&json!({
        "query": result.query,
        "matches": result.matches,
    }))
}

/// Format resolve result as text
pub fn format_resolve_text(result: &AgentResolveResult) -> String {
    match &result.resolution {
        Resolution::Handoff(payload) => format!(
            "Handoff: {} -> {}\nCondition: {}\n\n{}",
            payload.source_agent_id,
            payload.target_agent_id,
            payload.trigger_condition,
            payload.handoff_text
        ),
        Resolution::NoDelegationFound => format!(
            "No delegation from {} matches '{}'.",
            result.source_agent_id, result.trigger
        ),
    }
}

/// Format resolve result as JSON
pub fn format_resolve_json(result: &AgentResolveResult) -> String {
    let mut out = json!({
        "found": result.resolution.is_found(),
        "source_agent_id": result.source_agent_id,
    });
    if let Some(payload) = result.resolution.payload() {
        out["target_agent_id"] = json!(payload.target_agent_id);
        out["trigger_condition"] = json!(payload.trigger_condition);
        out["handoff_text"] = json!(payload.handoff_text);
    }
    to_pretty(&out)
}

fn format_single_validation(out: &mut String, result: &ValidationResult, details: bool) {
    if result.is_valid() {
        if details {
            out.push_str(&format!(
                "  {}: All checks passed ({}/{} checks)\n",
                result.agent_id,
                result.passed_checks(),
                result.total_checks()
            ));
        } else {
            out.push_str(&format!("  {}: Valid\n", result.agent_id));
        }
        return;
    }
    out.push_str(&format!("  {}: {}\n", result.agent_id, "Validation failed".red()));
    for (description, passed) in &result.checks {
        if !passed || details {
            let mark = if *passed { "ok" } else { "FAIL" };
            out.push_str(&format!("    [{}] {}\n", mark, description));
        }
    }
    for error in &result.errors {
        out.push_str(&format!("    {}\n", error));
    }
}

/// Format validation results as text
pub fn format_validation_text(result: &AgentValidateAllResult, details: bool) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Validating all agents"));
    for r in &result.results {
        format_single_validation(&mut out, r, details);
    }
    let valid = result.valid_count();
    out.push_str(&format!(
        "\nSummary: {} valid, {} invalid (out of {} total)",
        valid,
        result.results.len() - valid,
        result.results.len()
    ));
    out
}

/// Format validation results as JSON
pub fn format_validation_json(result: &AgentValidateAllResult) -> String {
    let results: Vec<_> = result
        .results
        .iter()
        .map(|r| {
            let checks: Vec<_> = r
                .checks
                .iter()
                .map(|(description, passed)| json!({ "description": description, "passed": passed }))
                .collect();
            json!({
                "agent_id": r.agent_id,
                "valid": r.is_valid(),
                "checks": checks,
                "errors": r.errors,
            })
        })
        .collect();
    to_pretty(&json!({
        "results": results,
        "valid_count": result.valid_count(),
        "total": result.results.len(),
    }))
}
