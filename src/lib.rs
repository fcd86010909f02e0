//! factlint - Content Accuracy Auditor
//!
//! A read-only batch auditor for course content. It walks a directory tree
//! of quiz/exam files, extracts every assessment question, and evaluates
//! each question's text against a registry of misconception rules:
//!
//! - **Content pipeline**: locate files by name, parse records
//!   best-effort, flatten into questions
//! - **Rule registry**: trigger/suppressor pattern pairs per known
//!   misconception, grouped by topic (networking, databases, OS)
//! - **Runner**: evaluates every rule against every question and collects
//!   violations; the audit passes iff the violation list is empty
//! - **Reporting**: `<file> - <questionId>: <message>` lines plus text and
//!   JSON summaries
//!
//! # Quick Start
//!
//! ```no_run
//! use factlint::{Auditor, RuleRegistry};
//! use std::path::Path;
//!
//! let auditor = Auditor::new(RuleRegistry::builtin());
//! let report = auditor.run(Path::new("content"));
//! assert!(report.passed(), "content reintroduced a known misconception");
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod content;
pub mod errors;
pub mod report;
pub mod rules;
pub mod telemetry;

pub use audit::{AuditReport, Auditor, SkippedFile, Violation};
pub use config::{Config, ReportFormat};
pub use errors::{FactlintError, Result};
pub use rules::{Rule, RuleRegistry, Topic};
