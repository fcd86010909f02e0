//! Misconception Rule Registry
//!
//! Each rule encodes one commonly-confused technical fact as a pair of
//! pattern sets over a question's combined text:
//! - a **trigger**: matches when the misconception appears to be asserted
//! - **suppressors**: patterns whose presence cancels the violation, either
//!   a correcting negation ("not connectionless") or a disambiguating
//!   context ("transport layer security" is TLS, not the OSI layer)
//!
//! Rules are pure predicates over the combined text with no shared state,
//! so they can run in any order without affecting the violation set.
//! Patterns are written against lower-cased text; triggers bound their
//! "X ... Y" gap to a single sentence (`[^.;]*`) to keep a trigger from
//! spanning unrelated statements.

pub mod database;
pub mod networking;
pub mod os;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Topic area a rule belongs to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Networking,
    Database,
    #[value(name = "os")]
    #[serde(rename = "os")]
    OperatingSystems,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Networking => "networking",
            Self::Database => "database",
            Self::OperatingSystems => "os",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, pure misconception detector.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Stable identity used in reports (e.g. `tcp-connectionless`)
    pub id: &'static str,
    pub topic: Topic,
    /// What the rule detects (e.g. "TCP described as connectionless")
    pub description: &'static str,
    /// The actual fact, quoted in the violation message
    pub correction: &'static str,
    trigger: Regex,
    suppressors: Vec<Regex>,
}

impl Rule {
    /// Build a rule from pattern source strings.
    ///
    /// An invalid pattern is a defect in the rule table, not a content
    /// problem: it panics here, at registry construction, instead of being
    /// swallowed during evaluation.
    pub fn new(
        id: &'static str,
        topic: Topic,
        description: &'static str,
        correction: &'static str,
        trigger: &str,
        suppressors: &[&str],
    ) -> Self {
        Self {
            id,
            topic,
            description,
            correction,
            trigger: compile(id, trigger),
            suppressors: suppressors.iter().map(|p| compile(id, p)).collect(),
        }
    }

    /// Does the combined text assert the misconception?
    pub fn matches(&self, combined_text: &str) -> bool {
        self.trigger.is_match(combined_text)
    }

    /// Does the combined text carry a correcting or disambiguating phrase?
    pub fn suppressed(&self, combined_text: &str) -> bool {
        self.suppressors.iter().any(|s| s.is_match(combined_text))
    }

    /// Trigger match with no suppressor present: a violation.
    pub fn fires(&self, combined_text: &str) -> bool {
        self.matches(combined_text) && !self.suppressed(combined_text)
    }

    /// The violation message for a question flagged by this rule.
    pub fn message(&self) -> String {
        format!("{} ({})", self.description, self.correction)
    }
}

fn compile(rule_id: &str, pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|e| panic!("rule '{}': invalid pattern {:?}: {}", rule_id, pattern, e))
}

/// The process-wide, immutable collection of rules, grouped by topic.
#[derive(Debug)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

static BUILTIN: Lazy<RuleRegistry> = Lazy::new(|| {
    let mut rules = Vec::new();
    rules.extend(networking::rules());
    rules.extend(database::rules());
    rules.extend(os::rules());
    RuleRegistry { rules }
});

impl RuleRegistry {
    /// The built-in registry, constructed once per process.
    pub fn builtin() -> &'static RuleRegistry {
        &BUILTIN
    }

    /// Build a registry from an explicit rule set (used by tests).
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn by_topic(&self, topic: Topic) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |r| r.topic == topic)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
