use std::sync::LazyLock;

use regex::Regex;

// Non-greedy so that "{a} x {b}" yields two placeholders, not one.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.*?)\}").expect("placeholder pattern is valid"));

/// A placeholder exactly as it appears in the template, braces included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceholderSpec {
    token: String,
}

impl PlaceholderSpec {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The literal text replaced during expansion, e.g. `{seq 1 3}`
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The text between the braces, handed to the value source
    pub fn inner(&self) -> &str {
        self.token
            .strip_prefix('{')
            .and_then(|t| t.strip_suffix('}'))
            .unwrap_or(&self.token)
    }
}

impl std::fmt::Display for PlaceholderSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token)
    }
}

/// Find every placeholder in `template`, in order of appearance.
///
/// Repeated placeholders are returned once per occurrence.
pub fn scan(template: &str) -> Vec<PlaceholderSpec> {
    PLACEHOLDER
        .find_iter(template)
        .map(|m| PlaceholderSpec::new(m.as_str()))
        .collect()
}

/// The resolved values of one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSequence {
    pub placeholder: PlaceholderSpec,
    pub values: Vec<String>,
}

impl ValueSequence {
    pub fn new(placeholder: PlaceholderSpec, values: Vec<String>) -> Self {
        Self {
            placeholder,
            values,
        }
    }

    /// Split raw source text on `\n`. A trailing newline leaves a final empty value.
    pub fn from_text(placeholder: PlaceholderSpec, text: &str) -> Self {
        let values = text.split('\n').map(str::to_string).collect();
        Self::new(placeholder, values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
