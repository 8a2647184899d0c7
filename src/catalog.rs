//! The capability catalog and model table the generator validates against.
//!
//! Both tables are fixed at process start. They are carried in a [`Catalog`]
//! value handed to the generator rather than read from globals, so tests can
//! substitute smaller catalogs without touching the validation logic.

/// Every recognized tool name, in authoritative order. Derived lists
/// (disallowed tools) are always emitted in this order.
pub const DEFAULT_TOOLS: &[&str] = &[
    "Bash",
    "Edit",
    "Glob",
    "Grep",
    "KillShell",
    "NotebookEdit",
    "Read",
    "Skill",
    "SlashCommand",
    "Task",
    "TodoWrite",
    "Write",
    "WebFetch",
    "WebSearch",
];

/// Model shorthand to full model identifier.
pub const DEFAULT_MODELS: &[(&str, &str)] = &[
    ("haiku", "claude-haiku-4-5"),
    ("sonnet", "claude-sonnet-4-5"),
    ("opus", "claude-opus-4-5"),
];

/// Immutable validation tables: the tool universe and the model map.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<String>,
    models: Vec<(String, String)>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_TOOLS.iter().map(|t| t.to_string()),
            DEFAULT_MODELS
                .iter()
                .map(|(s, f)| (s.to_string(), f.to_string())),
        )
    }
}

impl Catalog {
    pub fn new(
        tools: impl IntoIterator<Item = String>,
        models: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            tools: tools.into_iter().collect(),
            models: models.into_iter().collect(),
        }
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    pub fn is_known_tool(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t == name)
    }

    /// Map a shorthand like `sonnet` to its full model identifier.
    pub fn resolve_model(&self, shorthand: &str) -> Option<&str> {
        self.models
            .iter()
            .find(|(s, _)| s == shorthand)
            .map(|(_, full)| full.as_str())
    }

    /// The shorthands in table order, for error messages.
    pub fn model_shorthands(&self) -> String {
        self.models
            .iter()
            .map(|(s, _)| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
