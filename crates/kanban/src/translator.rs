// File: src/translator.rs
// Purpose: Message lookup and printf-style formatting for user-facing text

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt::Display;
use std::fs;
use std::path::Path;

/// Translates message ids into user-facing text.
///
/// Injected wherever messages are produced (rule sets, views, flash
/// notices) instead of relying on locale state.
pub trait Translator: Send + Sync {
    /// Template for a message id. Falls back to the id itself.
    fn template<'a>(&'a self, msgid: &'a str) -> &'a str;

    /// Translate and substitute `%d` / `%s` placeholders in order
    fn translate(&self, msgid: &str, args: &[&dyn Display]) -> String {
        format_message(self.template(msgid), args)
    }

    /// Translate a message without placeholders
    fn t(&self, msgid: &str) -> String {
        self.translate(msgid, &[])
    }
}

/// Returns every message untranslated
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn template<'a>(&'a self, msgid: &'a str) -> &'a str {
        msgid
    }
}

/// Message table loaded from a TOML file of `msgid = "translation"` pairs
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let messages: HashMap<String, String> =
            toml::from_str(content).context("Failed to parse message catalog")?;
        Ok(Self { messages })
    }

    /// Load a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read message catalog: {:?}", path))?;
        Self::from_toml_str(&content)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Catalog {
    fn template<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.messages
            .get(msgid)
            .map(String::as_str)
            .unwrap_or(msgid)
    }
}

/// Substitute `%d` and `%s` with `args` in order; `%%` is a literal percent.
/// Placeholders without a matching argument are kept as written.
pub fn format_message(template: &str, args: &[&dyn Display]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            output.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                output.push('%');
            }
            Some(spec @ ('d' | 's')) => {
                chars.next();
                match args.next() {
                    Some(arg) => output.push_str(&arg.to_string()),
                    None => {
                        output.push('%');
                        output.push(spec);
                    }
                }
            }
            _ => output.push('%'),
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_placeholders() {
        assert_eq!(
            format_message("The maximum length is %d characters", &[&200]),
            "The maximum length is 200 characters"
        );
        assert_eq!(format_message("%s has %d tasks", &[&"Alice", &3]), "Alice has 3 tasks");
        assert_eq!(format_message("100%% done", &[]), "100% done");
    }

    #[test]
    fn test_format_message_missing_args() {
        assert_eq!(format_message("Between %d and %d", &[&1]), "Between 1 and %d");
        assert_eq!(format_message("50% off", &[]), "50% off");
        assert_eq!(format_message("trailing %", &[]), "trailing %");
    }

    #[test]
    fn test_untranslated() {
        let t = Untranslated;
        assert_eq!(t.t("The title is required"), "The title is required");
        assert_eq!(
            t.translate("The maximum length is %d characters", &[&50]),
            "The maximum length is 50 characters"
        );
    }

    #[test]
    fn test_catalog_lookup_and_fallback() {
        let catalog = Catalog::from_toml_str(
            r#"
            "The title is required" = "Le titre est obligatoire"
            "The maximum length is %d characters" = "La longueur maximale est de %d caractères"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.t("The title is required"), "Le titre est obligatoire");
        assert_eq!(
            catalog.translate("The maximum length is %d characters", &[&200]),
            "La longueur maximale est de 200 caractères"
        );
        assert_eq!(catalog.t("Invalid date"), "Invalid date");
    }

    #[test]
    fn test_catalog_rejects_invalid_toml() {
        assert!(Catalog::from_toml_str("not = [valid").is_err());
    }
}
