//! Rule-based tag inference from window metadata.
//!
//! Every rule is evaluated independently against every window and the matches
//! are unioned, so the result does not depend on window order. All comparisons
//! are case-insensitive.

use std::collections::BTreeSet;

use wstag_core::{RuleSpec, Signal, TagName, WindowProperties};

use crate::DetectError;

/// How a rule compares the selected signal. Patterns are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    Equals(String),
    OneOf(Vec<String>),
    Contains(String),
}

impl Matcher {
    fn matches(&self, value: &str) -> bool {
        match self {
            Matcher::Equals(p) => value == p,
            Matcher::OneOf(ps) => ps.iter().any(|p| value == p),
            Matcher::Contains(p) => value.contains(p.as_str()),
        }
    }
}

/// One row of the classification table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub signal: Signal,
    pub matcher: Matcher,
    pub tag: TagName,
}

impl Rule {
    pub fn new(signal: Signal, matcher: Matcher, tag: impl Into<TagName>) -> Self {
        let matcher = match matcher {
            Matcher::Equals(p) => Matcher::Equals(p.to_lowercase()),
            Matcher::OneOf(ps) => Matcher::OneOf(ps.iter().map(|p| p.to_lowercase()).collect()),
            Matcher::Contains(p) => Matcher::Contains(p.to_lowercase()),
        };
        Self {
            signal,
            matcher,
            tag: tag.into(),
        }
    }

    /// Build a rule from its config form.
    pub fn from_spec(spec: &RuleSpec) -> Result<Self, DetectError> {
        let invalid = |message: &str| DetectError::InvalidRule {
            tag: spec.tag.clone(),
            message: message.to_string(),
        };

        let mut candidates = Vec::new();
        if let Some(value) = &spec.equals {
            candidates.push(Matcher::Equals(value.clone()));
        }
        if !spec.one_of.is_empty() {
            candidates.push(Matcher::OneOf(spec.one_of.clone()));
        }
        if let Some(value) = &spec.contains {
            candidates.push(Matcher::Contains(value.clone()));
        }

        match candidates.len() {
            0 => Err(invalid("one of `equals`, `one_of`, `contains` is required")),
            1 => Ok(Rule::new(spec.signal, candidates.remove(0), spec.tag.as_str())),
            _ => Err(invalid("only one of `equals`, `one_of`, `contains` may be set")),
        }
    }

    fn matches(&self, window: &WindowProperties) -> bool {
        let value = match self.signal {
            Signal::Role => window.window_role.as_deref(),
            Signal::Class => window.class.as_deref(),
            Signal::Instance => window.instance.as_deref(),
            Signal::Title => window.title.as_deref(),
        };
        value.is_some_and(|v| self.matcher.matches(&v.to_lowercase()))
    }
}

/// The classification table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Built-in table followed by the configured rules.
    pub fn with_specs(specs: &[RuleSpec]) -> Result<Self, DetectError> {
        let mut classifier = Self::default();
        for spec in specs {
            classifier.rules.push(Rule::from_spec(spec)?);
        }
        Ok(classifier)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Tags inferred from one window; may be empty.
    pub fn classify(&self, window: &WindowProperties) -> BTreeSet<TagName> {
        self.rules
            .iter()
            .filter(|r| r.matches(window))
            .map(|r| r.tag.clone())
            .collect()
    }

    /// Union of [`Self::classify`] over all windows of a workspace.
    pub fn classify_workspace(
        &self,
        windows: &[WindowProperties],
    ) -> Result<BTreeSet<TagName>, DetectError> {
        let tags: BTreeSet<TagName> = windows.iter().flat_map(|w| self.classify(w)).collect();
        if tags.is_empty() {
            return Err(DetectError::NoTagsInferred {
                windows: windows.len(),
            });
        }
        Ok(tags)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(vec![
            Rule::new(Signal::Role, Matcher::Equals("browser".into()), "web"),
            Rule::new(
                Signal::Class,
                Matcher::OneOf(vec!["firefox".into(), "qutebrowser".into()]),
                "web",
            ),
            Rule::new(Signal::Class, Matcher::Contains("thunderbird".into()), "mail"),
            Rule::new(Signal::Class, Matcher::Contains("mpv".into()), "film"),
        ])
    }
}
