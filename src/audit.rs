//! Audit Runner
//!
//! Drives the full pipeline for one batch run: locate content files,
//! load them, extract questions, and evaluate every registry rule against
//! every question. The runner is read-only with respect to the filesystem
//! and deterministic for a fixed tree: located files are processed in
//! sorted order and rules in registry order.

use crate::config::Config;
use crate::content::{extract_questions, find_content_files, load_content_file, LoadOutcome};
use crate::rules::{RuleRegistry, Topic};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

/// A reported instance of a misconception rule firing on a question.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub file: PathBuf,
    pub question_id: String,
    pub rule_id: &'static str,
    pub topic: Topic,
    pub message: String,
}

/// A content file the loader could not use, with the reason for logging.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// The outcome of one audit run.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub violations: Vec<Violation>,
    pub files_scanned: usize,
    pub files_skipped: Vec<SkippedFile>,
    pub questions_evaluated: usize,
    pub duration_ms: u64,
}

impl AuditReport {
    fn new() -> Self {
        Self {
            violations: Vec::new(),
            files_scanned: 0,
            files_skipped: Vec::new(),
            questions_evaluated: 0,
            duration_ms: 0,
        }
    }

    /// The audit's success criterion: no violations.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violation counts per topic area.
    pub fn by_topic(&self) -> BTreeMap<Topic, usize> {
        let mut counts = BTreeMap::new();
        for violation in &self.violations {
            *counts.entry(violation.topic).or_insert(0) += 1;
        }
        counts
    }
}

/// Walks a content tree and evaluates every registry rule against every
/// extracted question.
pub struct Auditor<'r> {
    registry: &'r RuleRegistry,
    file_name: String,
    skip_dirs: Vec<String>,
}

impl<'r> Auditor<'r> {
    pub fn new(registry: &'r RuleRegistry) -> Self {
        let defaults = Config::default();
        Self {
            registry,
            file_name: defaults.file_name,
            skip_dirs: defaults.skip_dirs,
        }
    }

    pub fn from_config(registry: &'r RuleRegistry, config: &Config) -> Self {
        Self {
            registry,
            file_name: config.file_name.clone(),
            skip_dirs: config.skip_dirs.clone(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_skip_dirs(mut self, skip_dirs: Vec<String>) -> Self {
        self.skip_dirs = skip_dirs;
        self
    }

    /// Run the audit over `root`.
    ///
    /// Content defects degrade to skipped files; a missing root means zero
    /// files and a vacuously passing report. Nothing here fails: the only
    /// faults the pipeline can raise are rule-table defects, which panic
    /// at registry construction, before any run starts.
    pub fn run(&self, root: &Path) -> AuditReport {
        let start = Instant::now();
        let mut report = AuditReport::new();

        for path in find_content_files(root, &self.file_name, &self.skip_dirs) {
            match load_content_file(&path) {
                LoadOutcome::Skipped(reason) => {
                    warn!("skipping {}: {}", path.display(), reason);
                    report.files_skipped.push(SkippedFile {
                        path: path.clone(),
                        reason,
                    });
                }
                LoadOutcome::Loaded(records) => {
                    report.files_scanned += 1;
                    for record in &records {
                        for question in extract_questions(record) {
                            report.questions_evaluated += 1;
                            for rule in self.registry.rules() {
                                if rule.fires(question.combined_text()) {
                                    report.violations.push(Violation {
                                        file: path.clone(),
                                        question_id: question.id.clone(),
                                        rule_id: rule.id,
                                        topic: rule.topic,
                                        message: rule.message(),
                                    });
                                }
                            }
                        }
                    }
                    debug!(
                        "audited {} ({} record(s))",
                        path.display(),
                        records.len()
                    );
                }
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        debug!(
            "audit complete: {} file(s), {} question(s), {} violation(s)",
            report.files_scanned,
            report.questions_evaluated,
            report.violations.len()
        );
        report
    }
}
