//! ABNT validation
//!
//! Runs every [`Rule`] over a document record and classifies the outcome:
//!
//! - `Blocking`: a required field or section is missing;
//! - `Advisory`: present but outside the recommended range;
//! - `Confirmed`: present and within range.
//!
//! Rules never short-circuit. Problems are reported as data, never as errors.

pub mod rules;

pub use rules::{word_count, Rule};

use super::document::DocumentRecord;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Blocking,
    Advisory,
    Confirmed,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Blocking, Severity::Advisory, Severity::Confirmed];

    /// Heading used when findings are listed by group.
    pub fn heading(self) -> &'static str {
        match self {
            Severity::Blocking => "Problemas Críticos",
            Severity::Advisory => "Avisos",
            Severity::Confirmed => "Itens Corretos",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Blocking => "blocking",
            Severity::Advisory => "advisory",
            Severity::Confirmed => "confirmed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule: Rule,
    pub severity: Severity,
    pub message: String,
}

/// Findings grouped by severity, each group in rule evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub blocking: Vec<Finding>,
    pub advisory: Vec<Finding>,
    pub confirmed: Vec<Finding>,
}

impl ValidationReport {
    fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Blocking => self.blocking.push(finding),
            Severity::Advisory => self.advisory.push(finding),
            Severity::Confirmed => self.confirmed.push(finding),
        }
    }

    pub fn group(&self, severity: Severity) -> &[Finding] {
        match severity {
            Severity::Blocking => &self.blocking,
            Severity::Advisory => &self.advisory,
            Severity::Confirmed => &self.confirmed,
        }
    }

    pub fn is_blocking(&self) -> bool {
        !self.blocking.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocking.len() + self.advisory.len() + self.confirmed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All findings in evaluation order.
    pub fn findings(&self) -> Vec<&Finding> {
        let mut all: Vec<&Finding> = Severity::ALL
            .iter()
            .flat_map(|&severity| self.group(severity))
            .collect();
        all.sort_by_key(|finding| rule_position(finding.rule));
        all
    }
}

fn rule_position(rule: Rule) -> usize {
    Rule::ALL
        .iter()
        .position(|candidate| *candidate == rule)
        .unwrap_or(Rule::ALL.len())
}

/// Evaluate every rule against `doc`.
pub fn validate(doc: &DocumentRecord) -> ValidationReport {
    let mut report = ValidationReport::default();
    for rule in Rule::ALL {
        if let Some(finding) = rule.evaluate(doc) {
            report.push(finding);
        }
    }
    tracing::debug!(
        blocking = report.blocking.len(),
        advisory = report.advisory.len(),
        confirmed = report.confirmed.len(),
        "validated document"
    );
    report
}
