//! Name remapping rules
//!
//! Some applications report an unhelpful process name (every JetBrains IDE
//! runs as `java`). A rule maps a (process, window class) pair to the
//! category name used for lookup.

use std::path::Path;

use serde::Deserialize;

/// Maps a process/class pair to a canonical application name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameRule {
    /// Substring of the process command name, compared case-insensitively
    pub process: String,
    /// Substring of the window class group, compared case-sensitively
    pub class: String,
    /// Name returned when both match
    pub name: String,
}

impl NameRule {
    pub fn new(process: &str, class: &str, name: &str) -> Self {
        Self {
            process: process.to_string(),
            class: class.to_string(),
            name: name.to_string(),
        }
    }

    fn matches(&self, command_lower: &str, class_group: &str) -> bool {
        command_lower.contains(&self.process.to_lowercase()) && class_group.contains(&self.class)
    }
}

/// Errors loading the user rules file
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed rules file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RulesFile {
    #[serde(default)]
    rule: Vec<NameRule>,
}

/// Ordered rule list; the first matching rule wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<NameRule>,
}

impl RuleSet {
    /// Rules for applications known to misreport their process name
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                NameRule::new("java", "jetbrains", "Jetbrains"),
                NameRule::new("main", "Pinta", "Pinta"),
            ],
        }
    }

    /// Builtin rules preceded by the rules in `path`.
    ///
    /// A missing file means no user rules.
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::builtin()),
            Err(e) => return Err(e.into()),
        };
        let file: RulesFile = toml::from_str(&text)?;
        Ok(Self::builtin().with_overrides(file.rule))
    }

    /// Put `rules` ahead of the current ones
    pub fn with_overrides(mut self, mut rules: Vec<NameRule>) -> Self {
        rules.append(&mut self.rules);
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Canonical application name for a process command name and class
    /// group. Without a matching rule the command name is trimmed and
    /// title-cased.
    pub fn canonical_name(&self, command: &str, class_group: &str) -> String {
        let command_lower = command.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&command_lower, class_group))
            .map(|rule| rule.name.clone())
            .unwrap_or_else(|| title_case(command.trim_end()))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Title-case words: the first cased letter of each run of letters is
/// upper-cased and the rest lower-cased. Anything else separates words.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && in_word {
            out.extend(c.to_lowercase());
        } else if cased {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        in_word = cased;
    }
    out
}
