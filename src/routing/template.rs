//! Handoff template rendering.
//!
//! Placeholders are `{name}` where `name` is an identifier. Known names are
//! substituted; unknown ones, and braces that do not enclose an identifier,
//! are copied through unchanged.

/// Placeholder names understood by `render`.
pub const PLACEHOLDERS: &[&str] = &["source", "target", "condition", "trigger", "context"];

/// Values substituted into a handoff template.
#[derive(Debug, Clone, Copy)]
pub struct HandoffVars<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub condition: &'a str,
    pub trigger: &'a str,
    pub context: &'a str,
}

impl<'a> HandoffVars<'a> {
    fn lookup(&self, name: &str) -> Option<&'a str> {
        match name {
            "source" => Some(self.source),
            "target" => Some(self.target),
            "condition" => Some(self.condition),
            "trigger" => Some(self.trigger),
            "context" => Some(self.context),
            _ => None,
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Yields `(start, end, name)` byte ranges for every `{identifier}` in the template.
fn placeholders(template: &str) -> impl Iterator<Item = (usize, usize, &str)> {
    let mut cursor = 0;
    std::iter::from_fn(move || {
        while let Some(open_rel) = template[cursor..].find('{') {
            let open = cursor + open_rel;
            let Some(close_rel) = template[open + 1..].find('}') else {
                cursor = template.len();
                return None;
            };
            let close = open + 1 + close_rel;
            let name = &template[open + 1..close];
            if is_identifier(name) {
                cursor = close + 1;
                return Some((open, close + 1, name));
            }
            cursor = open + 1;
        }
        None
    })
}

/// Fill a handoff template.
pub fn render(template: &str, vars: &HandoffVars<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for (start, end, name) in placeholders(template) {
        if let Some(value) = vars.lookup(name) {
            out.push_str(&template[last..start]);
            out.push_str(value);
            last = end;
        }
    }
    out.push_str(&template[last..]);
    out
}

/// Placeholders in `template` that `render` will not substitute, as written (`{name}`).
pub fn unknown_placeholders(template: &str) -> Vec<String> {
    placeholders(template)
        .filter(|(_, _, name)| !PLACEHOLDERS.contains(name))
        .map(|(_, _, name)| format!("{{{}}}", name))
        .collect()
}
