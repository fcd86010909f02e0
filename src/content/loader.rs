//! Best-effort parsing of content files into quiz/exam records.
//!
//! A content file is JSON: an array of records, each shaped
//! `{ "id": ..., "questions": [...] }`. A lone top-level record object is
//! accepted as a one-record file. Any read or parse failure becomes an
//! explicit [`LoadOutcome::Skipped`] so the runner can log it without
//! aborting the batch.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One quiz-or-exam record owning zero or more questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    /// Records without a `questions` field contribute zero questions.
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

/// A raw question entry as authored in the content file.
///
/// Optional fields are defaulted here, at the parsing boundary, so the
/// extractor and rules never handle absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(rename = "correctAnswer", default)]
    pub correct_answer: Option<serde_json::Value>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Result of loading one content file.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file parsed into records.
    Loaded(Vec<ContentRecord>),
    /// The file could not be used; the reason is for logging only.
    Skipped(String),
}

impl LoadOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, LoadOutcome::Skipped(_))
    }
}

/// Load and parse one content file.
///
/// Never fails: unreadable or malformed files come back as
/// [`LoadOutcome::Skipped`] with a reason string.
pub fn load_content_file(path: &Path) -> LoadOutcome {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => return LoadOutcome::Skipped(format!("unreadable: {}", e)),
    };

    match parse_records(&raw) {
        Ok(records) => LoadOutcome::Loaded(records),
        Err(e) => LoadOutcome::Skipped(format!("malformed: {}", e)),
    }
}

fn parse_records(raw: &str) -> Result<Vec<ContentRecord>, serde_json::Error> {
    serde_json::from_str::<Vec<ContentRecord>>(raw).or_else(|array_err| {
        // Accept a single top-level record; report the array error if
        // neither shape fits, since an array is the documented layout.
        serde_json::from_str::<ContentRecord>(raw)
            .map(|record| vec![record])
            .map_err(|_| array_err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_loads_record_array() {
        let file = write_file(
            r#"[{"id": "quiz-1", "questions": [
                {"id": "q1", "type": "multiple-choice", "prompt": "What is TCP?",
                 "options": ["a", "b"], "correctAnswer": 0, "explanation": "A protocol."}
            ]}]"#,
        );

        match load_content_file(file.path()) {
            LoadOutcome::Loaded(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].id, "quiz-1");
                assert_eq!(records[0].questions.len(), 1);
                assert_eq!(records[0].questions[0].prompt, "What is TCP?");
            }
            LoadOutcome::Skipped(reason) => panic!("should load: {}", reason),
        }
    }

    #[test]
    fn test_loads_single_record_object() {
        let file = write_file(r#"{"id": "exam-1", "questions": []}"#);

        match load_content_file(file.path()) {
            LoadOutcome::Loaded(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].id, "exam-1");
            }
            LoadOutcome::Skipped(reason) => panic!("should load: {}", reason),
        }
    }

    #[test]
    fn test_missing_questions_field_defaults_to_empty() {
        let file = write_file(r#"[{"id": "quiz-1"}]"#);

        match load_content_file(file.path()) {
            LoadOutcome::Loaded(records) => assert!(records[0].questions.is_empty()),
            LoadOutcome::Skipped(reason) => panic!("should load: {}", reason),
        }
    }

    #[test]
    fn test_missing_optional_question_fields_default() {
        let file = write_file(r#"[{"id": "quiz-1", "questions": [{"id": "q1", "prompt": "Why?"}]}]"#);

        match load_content_file(file.path()) {
            LoadOutcome::Loaded(records) => {
                let q = &records[0].questions[0];
                assert!(q.explanation.is_none());
                assert!(q.options.is_none());
                assert!(q.correct_answer.is_none());
                assert!(q.kind.is_none());
            }
            LoadOutcome::Skipped(reason) => panic!("should load: {}", reason),
        }
    }

    #[test]
    fn test_malformed_json_is_skipped() {
        let file = write_file(r#"[{"id": "quiz-1", "questions": ["#);

        let outcome = load_content_file(file.path());
        assert!(outcome.is_skipped());
    }

    #[test]
    fn test_questions_not_a_list_is_skipped() {
        let file = write_file(r#"[{"id": "quiz-1", "questions": "not a list"}]"#);

        let outcome = load_content_file(file.path());
        assert!(outcome.is_skipped());
    }

    #[test]
    fn test_unreadable_path_is_skipped() {
        let outcome = load_content_file(Path::new("/nonexistent/questions.json"));
        match outcome {
            LoadOutcome::Skipped(reason) => assert!(reason.starts_with("unreadable")),
            LoadOutcome::Loaded(_) => panic!("a missing file cannot load"),
        }
    }
}
