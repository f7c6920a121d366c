//! Rule definitions and the line-level matching engine.
//!
//! A `Rule` is a named regex with an optional exclude regex and a fixed
//! remediation message. Rules are defined programmatically (no rule config
//! file) and compiled once at startup into a `RuleSet`. Evaluation is purely
//! textual and single-line: no syntax awareness, so false positives and
//! negatives relative to semantic analysis are expected.

use regex::Regex;
use std::collections::HashSet;

/// Declarative, uncompiled form of a rule. String patterns only.
pub struct RuleSpec {
    pub name: &'static str,
    pub pattern: &'static str,
    pub exclude_pattern: Option<&'static str>,
    pub message: &'static str,
}

/// A compiled rule. Immutable after `RuleSet::compile`.
#[derive(Debug)]
pub struct Rule {
    pub name: String,
    pub pattern: Regex,
    pub exclude_pattern: Option<Regex>,
    pub message: String,
}

/// The fixed, ordered rule collection evaluated against every line.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile specs into a `RuleSet`, preserving declaration order.
    ///
    /// Fails on a duplicate rule name or a malformed regex. Both are
    /// configuration errors: the set is invalid for the whole run, so the
    /// caller is expected to abort at startup.
    pub fn compile(specs: Vec<RuleSpec>) -> Result<RuleSet, String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut rules = Vec::with_capacity(specs.len());
        for spec in specs {
            if !seen.insert(spec.name) {
                return Err(format!("duplicate rule name: '{}'", spec.name));
            }
            let pattern = Regex::new(spec.pattern)
                .map_err(|e| format!("invalid pattern for rule '{}': {}", spec.name, e))?;
            let exclude_pattern = match spec.exclude_pattern {
                Some(p) => Some(Regex::new(p).map_err(|e| {
                    format!("invalid exclude pattern for rule '{}': {}", spec.name, e)
                })?),
                None => None,
            };
            rules.push(Rule {
                name: spec.name.to_string(),
                pattern,
                exclude_pattern,
                message: spec.message.to_string(),
            });
        }
        Ok(RuleSet { rules })
    }

    /// Evaluate one line against every rule, in declaration order.
    ///
    /// A rule matches when its pattern is found anywhere in the line and its
    /// exclude pattern (if any) is not. Suppression is per rule: an exclude
    /// match on rule A never affects rule B. A line can satisfy zero, one, or
    /// several rules.
    pub fn evaluate<'a>(&'a self, line: &str) -> Vec<&'a Rule> {
        self.rules
            .iter()
            .filter(|r| {
                r.pattern.is_match(line)
                    && !r
                        .exclude_pattern
                        .as_ref()
                        .map(|ex| ex.is_match(line))
                        .unwrap_or(false)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The built-in rule set: heuristic Android/Java anti-pattern checks.
pub fn default_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec {
            name: "Regex Compilation in Loop/Method",
            pattern: r"Pattern\.compile\(",
            exclude_pattern: Some(r"static final|private static"),
            message: "Avoid compiling regex patterns inside methods. Define them as static constants.",
        },
        RuleSpec {
            name: "Hard Reference to Activity/Context",
            pattern: r"(private|public|protected)\s+(static\s+)?(Activity|Context|TabbedTerminalActivity)\s+\w+;",
            exclude_pattern: Some(r"WeakReference"),
            message: "Avoid holding hard references to Activity or Context. Use WeakReference to prevent memory leaks.",
        },
        RuleSpec {
            name: "Main Thread Sleep",
            pattern: r"Thread\.sleep\(",
            exclude_pattern: None,
            message: "Avoid Thread.sleep() on the main thread. It causes UI freezes.",
        },
        RuleSpec {
            name: "Print Stack Trace",
            pattern: r"\.printStackTrace\(",
            exclude_pattern: None,
            message: "Avoid e.printStackTrace(). Use a logger instead.",
        },
        RuleSpec {
            name: "Generic Exception Catching",
            pattern: r"catch\s*\(\s*Exception\s+\w+\s*\)",
            exclude_pattern: None,
            message: "Avoid catching generic Exception. Catch specific exceptions.",
        },
    ]
}
