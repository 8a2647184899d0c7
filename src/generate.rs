//! Derives a `claude` launch command from a parsed config section.
//!
//! Validation runs in a fixed order: required fields are checked together
//! so the user sees every missing field at once, while an unknown model
//! shorthand stops generation immediately. Unknown tool names and a missing
//! system prompt are corrected with a warning instead of failing.

use tracing::warn;

use crate::catalog::Catalog;
use crate::document::Section;

/// Result of one generation: exactly one of `command` / `error` is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub command: String,
    pub error: String,
}

impl Generated {
    fn ok(command: String) -> Self {
        Self {
            command,
            error: String::new(),
        }
    }

    fn err(error: String) -> Self {
        Self {
            command: String::new(),
            error,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}

/// Generate the launch command for one agent config.
pub fn generate_command(config: &Section, catalog: &Catalog) -> Generated {
    let mut missing = Vec::new();
    if !config.contains_key("name") {
        missing.push("no name specified");
    }
    if !config.contains_key("model") {
        missing.push("no model specified");
    }
    if !missing.is_empty() {
        return Generated::err(missing.join("; "));
    }

    let mut parts: Vec<String> = vec!["claude".into(), "-p".into()];

    let shorthand = config
        .get("model")
        .map(|v| v.to_text())
        .unwrap_or_default();
    let Some(full_model) = catalog.resolve_model(&shorthand) else {
        return Generated::err(format!(
            "invalid model '{shorthand}' - must be one of: {}",
            catalog.model_shorthands()
        ));
    };
    parts.push("--model".into());
    parts.push(full_model.to_string());

    push_system_prompt(config, &mut parts);
    push_tool_gating(config, catalog, &mut parts);

    let max_turns = config
        .get("max_turns")
        .map(|v| v.to_text())
        .unwrap_or_else(|| "5".into());
    parts.push("--max-turns".into());
    parts.push(max_turns);

    Generated::ok(parts.join(" "))
}

/// An inline prompt wins over a file-based one; neither is only a warning.
fn push_system_prompt(config: &Section, parts: &mut Vec<String>) {
    let inline = config
        .get("system_prompt")
        .map(|v| v.to_text())
        .unwrap_or_default();
    let from_file = config
        .get("system_prompt_file")
        .map(|v| v.to_text())
        .unwrap_or_default();

    if !inline.trim().is_empty() {
        parts.push("--system-prompt".into());
        parts.push(format!("\"{}\"", inline.trim()));
    } else if !from_file.trim().is_empty() {
        parts.push("--system-prompt-file".into());
        parts.push(from_file.trim().to_string());
    } else {
        let name = config
            .get("name")
            .map(|v| v.to_text())
            .unwrap_or_else(|| "unknown".into());
        warn!("no system prompt specified for '{name}'");
    }
}

/// Missing or empty `allowed_tools` denies everything. Unknown entries are
/// dropped with a warning; the disallowed set is the catalog-order
/// complement of what survives.
fn push_tool_gating(config: &Section, catalog: &Catalog, parts: &mut Vec<String>) {
    let allowed = config
        .get("allowed_tools")
        .and_then(|v| v.as_list())
        .unwrap_or(&[]);

    let valid_allowed: Vec<&String> = allowed
        .iter()
        .filter(|tool| {
            let known = catalog.is_known_tool(tool);
            if !known {
                warn!("invalid tool '{tool}' in allowed_tools - ignoring");
            }
            known
        })
        .collect();

    let disallowed: Vec<&String> = catalog
        .tools()
        .iter()
        .filter(|t| !valid_allowed.contains(t))
        .collect();

    if !disallowed.is_empty() {
        parts.push("--disallowedTools".into());
        for tool in disallowed {
            parts.push(format!("\"{tool}\""));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{parse_document, parse_section, serialize_document, Document, Value};

    fn small_catalog() -> Catalog {
        Catalog::new(
            ["Read", "Write", "Bash"].map(String::from),
            [("sonnet".to_string(), "claude-sonnet-4-5".to_string())],
        )
    }

    #[test]
    fn missing_fields_are_aggregated() {
        let generated = generate_command(&Section::new(), &Catalog::default());
        assert_eq!(generated.error, "no name specified; no model specified");
        assert!(generated.command.is_empty());
    }

    #[test]
    fn single_missing_field_reported_alone() {
        let config = parse_section("model: sonnet\n");
        let generated = generate_command(&config, &Catalog::default());
        assert_eq!(generated.error, "no name specified");
    }

    #[test]
    fn invalid_model_short_circuits() {
        let config = parse_section("name: x\nmodel: gpt4\n");
        let generated = generate_command(&config, &Catalog::default());
        assert_eq!(
            generated.error,
            "invalid model 'gpt4' - must be one of: haiku, sonnet, opus"
        );
        assert!(generated.command.is_empty());
    }

    #[test]
    fn deny_all_default_lists_whole_catalog_in_order() {
        let config = parse_section("name: x\nmodel: sonnet\n");
        let generated = generate_command(&config, &Catalog::default());
        assert!(generated.is_ok());
        let expected: String = Catalog::default()
            .tools()
            .iter()
            .map(|t| format!(" \"{t}\""))
            .collect();
        assert!(generated.command.contains(&format!("--disallowedTools{expected}")));
    }

    #[test]
    fn disallowed_is_catalog_order_complement() {
        let config = parse_section("name: x\nmodel: sonnet\nallowed_tools:\n  - Write\n");
        let generated = generate_command(&config, &small_catalog());
        assert_eq!(
            generated.command,
            "claude -p --model claude-sonnet-4-5 --disallowedTools \"Read\" \"Bash\" --max-turns 5"
        );
    }

    #[test]
    fn full_allowed_set_omits_disallow_clause() {
        let config =
            parse_section("name: x\nmodel: sonnet\nallowed_tools:\n  - Read\n  - Write\n  - Bash\n");
        let generated = generate_command(&config, &small_catalog());
        assert!(generated.is_ok());
        assert!(!generated.command.contains("--disallowedTools"));
    }

    #[test]
    fn unknown_tools_are_dropped_not_fatal() {
        let config =
            parse_section("name: x\nmodel: sonnet\nallowed_tools:\n  - Read\n  - Teleport\n");
        let generated = generate_command(&config, &small_catalog());
        assert!(generated.is_ok());
        assert!(generated.command.contains("--disallowedTools \"Write\" \"Bash\""));
        assert!(!generated.command.contains("Teleport"));
    }

    #[test]
    fn inline_prompt_wins_over_file() {
        let config = parse_section(
            "name: x\nmodel: sonnet\nsystem_prompt: \"be terse\"\nsystem_prompt_file: p.md\n",
        );
        let generated = generate_command(&config, &small_catalog());
        assert!(generated.command.contains("--system-prompt \"be terse\""));
        assert!(!generated.command.contains("--system-prompt-file"));
    }

    #[test]
    fn file_prompt_used_when_no_inline() {
        let config = parse_section("name: x\nmodel: sonnet\nsystem_prompt_file: prompts/a.md\n");
        let generated = generate_command(&config, &small_catalog());
        assert!(generated
            .command
            .contains("--system-prompt-file prompts/a.md"));
    }

    #[test]
    fn blank_inline_prompt_falls_through_to_file() {
        let config =
            parse_section("name: x\nmodel: sonnet\nsystem_prompt: \"  \"\nsystem_prompt_file: p.md\n");
        let generated = generate_command(&config, &small_catalog());
        assert!(generated.command.contains("--system-prompt-file p.md"));
    }

    #[test]
    fn max_turns_defaults_to_five() {
        let config = parse_section("name: x\nmodel: sonnet\n");
        let generated = generate_command(&config, &small_catalog());
        assert!(generated.command.ends_with("--max-turns 5"));
    }

    #[test]
    fn max_turns_passes_through() {
        let config = parse_section("name: x\nmodel: sonnet\nmax_turns: 12\n");
        let generated = generate_command(&config, &small_catalog());
        assert!(generated.command.ends_with("--max-turns 12"));
    }

    #[test]
    fn argument_order_is_fixed() {
        let config = parse_section(
            "name: x\nmodel: sonnet\nsystem_prompt_file: p.md\nallowed_tools:\n  - Bash\nmax_turns: 2\n",
        );
        let generated = generate_command(&config, &small_catalog());
        assert_eq!(
            generated.command,
            "claude -p --model claude-sonnet-4-5 --system-prompt-file p.md \
             --disallowedTools \"Read\" \"Write\" --max-turns 2"
        );
    }

    #[test]
    fn regeneration_after_rewrite_is_idempotent() {
        let config = parse_section(
            "name: reviewer\nmodel: sonnet\nsystem_prompt_file: p.md\nallowed_tools:\n  - Read\n",
        );
        let catalog = small_catalog();
        let first = generate_command(&config, &catalog);

        let mut doc = Document {
            config,
            output: Section::new(),
        };
        doc.output
            .insert("command", Value::Str(first.command.clone()));
        doc.output.insert("error", Value::Str(first.error.clone()));

        let reparsed = parse_document(&serialize_document(&doc)).unwrap();
        let second = generate_command(&reparsed.config, &catalog);
        assert_eq!(first, second);
    }
}
