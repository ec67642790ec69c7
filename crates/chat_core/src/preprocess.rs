//! Rewrite rules for outgoing user text
//!
//! A small fixed set of pattern rewrites canonicalizes common phrasings
//! before transmission to the webhook. Matching is case-insensitive and
//! runs against the raw input; the first matching rule wins. The text
//! stored and displayed to the user is never rewritten.

use serde::{Deserialize, Serialize};

/// How a rule matches against the lowercased input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RuleMatcher {
    /// Substring match.
    Contains(String),
    /// All substrings must be present.
    ContainsAll(Vec<String>),
    /// Regex pattern match.
    Regex(String),
}

/// A single rewrite rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteRule {
    pub matcher: RuleMatcher,
    /// Canonical text transmitted when the rule matches.
    pub replacement: String,
}

impl RewriteRule {
    pub fn contains(needle: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            matcher: RuleMatcher::Contains(needle.into()),
            replacement: replacement.into(),
        }
    }

    pub fn contains_all<I, S>(needles: I, replacement: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            matcher: RuleMatcher::ContainsAll(needles.into_iter().map(Into::into).collect()),
            replacement: replacement.into(),
        }
    }

    pub fn regex(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            matcher: RuleMatcher::Regex(pattern.into()),
            replacement: replacement.into(),
        }
    }

    /// Validate the regex pattern if this is a regex rule.
    pub fn validate(&self) -> Result<(), String> {
        if let RuleMatcher::Regex(pattern) = &self.matcher {
            regex::Regex::new(pattern)
                .map_err(|e| format!("Invalid regex pattern '{}': {}", pattern, e))?;
        }
        Ok(())
    }

    fn matches(&self, lower: &str) -> bool {
        match &self.matcher {
            RuleMatcher::Contains(needle) => lower.contains(needle.as_str()),
            RuleMatcher::ContainsAll(needles) => {
                !needles.is_empty() && needles.iter().all(|n| lower.contains(n.as_str()))
            }
            RuleMatcher::Regex(pattern) => match regex::Regex::new(pattern) {
                Ok(re) => re.is_match(lower),
                Err(_) => false,
            },
        }
    }
}

/// Ordered set of rewrite rules, first match wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewriteRules {
    #[serde(default)]
    pub rules: Vec<RewriteRule>,
}

impl RewriteRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed rule set used by the widget.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                RewriteRule::contains("åpningstider", "Hva er åpningstidene deres?"),
                RewriteRule::regex(r"(?:faq|ofte stilte)", "FAQ"),
                RewriteRule::contains_all(
                    ["kontakt", "menneske"],
                    "Jeg vil snakke med en person",
                ),
            ],
        }
    }

    pub fn add_rule(&mut self, rule: RewriteRule) {
        self.rules.push(rule);
    }

    /// Validate all regex rules.
    pub fn validate(&self) -> Result<(), Vec<(usize, String)>> {
        let mut errors = Vec::new();
        for (idx, rule) in self.rules.iter().enumerate() {
            if let Err(e) = rule.validate() {
                errors.push((idx, e));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Apply the rules to an outgoing message.
    ///
    /// Returns the replacement of the first matching rule, or the input
    /// unchanged when no rule matches.
    pub fn apply(&self, input: &str) -> String {
        let lower = input.to_lowercase();
        for rule in &self.rules {
            if rule.matches(&lower) {
                return rule.replacement.clone();
            }
        }
        input.to_string()
    }
}
