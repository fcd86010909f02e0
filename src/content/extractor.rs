//! Flattening records into a uniform stream of questions.

use super::loader::ContentRecord;

/// A single assessable item, constructed transiently for one audit run.
///
/// `combined_text` is the lower-cased concatenation of prompt and
/// explanation, and is the only field the rules examine.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: String,
    pub prompt_text: String,
    pub explanation_text: String,
    combined_text: String,
}

impl Question {
    pub fn new(id: &str, prompt: &str, explanation: Option<&str>) -> Self {
        let explanation = explanation.unwrap_or_default();
        let combined_text = format!("{} {}", prompt, explanation).to_lowercase();
        Self {
            id: id.to_string(),
            prompt_text: prompt.to_string(),
            explanation_text: explanation.to_string(),
            combined_text,
        }
    }

    pub fn combined_text(&self) -> &str {
        &self.combined_text
    }
}

/// Produce one [`Question`] per entry in the record's `questions` list.
pub fn extract_questions(record: &ContentRecord) -> Vec<Question> {
    record
        .questions
        .iter()
        .map(|q| Question::new(&q.id, &q.prompt, q.explanation.as_deref()))
        .collect()
}
