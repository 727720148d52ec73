//! Wire types shared with the course-data service.
//!
//! DATA MODEL
//! ==========
//! A course owns chapters, a chapter owns lessons, and a lesson owns typed
//! steps plus free-form content items. Step payloads are a closed set: each
//! step type carries a differently-shaped record, so `StepData` is an
//! adjacently-tagged enum and consumers match on it exhaustively.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A course as served by `GET /api/courses/{id}` and accepted by `PUT`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub author: String,
    pub level: String,
    pub image: String,
    pub description: String,
    pub language: Language,
    pub chapters: Vec<Chapter>,
}

/// Target language of a course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
}

/// A chapter groups lessons and carries display-only progress counters.
///
/// `total_lessons` is incremented when a lesson is added and intentionally
/// never recomputed on removal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub completed_lessons: u32,
    pub total_lessons: u32,
    pub lessons: Vec<Lesson>,
}

/// A lesson: ordered steps plus loosely-typed content items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub content: Vec<ContentItem>,
}

/// Course list item for the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub level: String,
}

/// One screen/interaction unit within a lesson.
///
/// Serializes as `{"id": ..., "type": ..., "data": {...}}`; the payload
/// shape is determined entirely by the type tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    #[serde(flatten)]
    pub data: StepData,
}

impl Step {
    /// Create a step of the given type carrying its template payload.
    pub fn new(step_type: StepType) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            data: StepData::template(step_type),
        }
    }

    pub fn step_type(&self) -> StepType {
        self.data.step_type()
    }
}

/// Discriminant for the closed set of step types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepType {
    ListenVocabulary,
    FillInTheBlanks,
    WordOrdering,
    LanguageQuestion,
    LessonInformation,
    LanguagePhrases,
    MatchingPairs,
}

impl StepType {
    /// Every step type, in the order shown in type pickers.
    pub const ALL: [StepType; 7] = [
        StepType::ListenVocabulary,
        StepType::FillInTheBlanks,
        StepType::WordOrdering,
        StepType::LanguageQuestion,
        StepType::LessonInformation,
        StepType::LanguagePhrases,
        StepType::MatchingPairs,
    ];

    /// Human-readable label for pickers and step lists.
    pub fn label(self) -> &'static str {
        match self {
            StepType::ListenVocabulary => "Listen & learn vocabulary",
            StepType::FillInTheBlanks => "Fill in the blanks",
            StepType::WordOrdering => "Word ordering",
            StepType::LanguageQuestion => "Multiple choice",
            StepType::LessonInformation => "Lesson information",
            StepType::LanguagePhrases => "Phrases",
            StepType::MatchingPairs => "Matching pairs",
        }
    }
}

/// Type-tagged step payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum StepData {
    ListenVocabulary(ListenVocabulary),
    FillInTheBlanks(FillInTheBlanks),
    WordOrdering(WordOrdering),
    LanguageQuestion(LanguageQuestion),
    LessonInformation(LessonInformation),
    LanguagePhrases(LanguagePhrases),
    MatchingPairs(MatchingPairs),
}

impl StepData {
    pub fn step_type(&self) -> StepType {
        match self {
            StepData::ListenVocabulary(_) => StepType::ListenVocabulary,
            StepData::FillInTheBlanks(_) => StepType::FillInTheBlanks,
            StepData::WordOrdering(_) => StepType::WordOrdering,
            StepData::LanguageQuestion(_) => StepType::LanguageQuestion,
            StepData::LessonInformation(_) => StepType::LessonInformation,
            StepData::LanguagePhrases(_) => StepType::LanguagePhrases,
            StepData::MatchingPairs(_) => StepType::MatchingPairs,
        }
    }

    /// The fixed template payload for a step type: placeholder strings and
    /// empty lists. Depends only on the type, never on prior payload.
    pub fn template(step_type: StepType) -> Self {
        match step_type {
            StepType::ListenVocabulary => StepData::ListenVocabulary(ListenVocabulary {
                image_url: String::new(),
                sound_file_name: String::new(),
                main_text: "New word".to_owned(),
                secondary_text: "Translation".to_owned(),
                facts: Vec::new(),
            }),
            StepType::FillInTheBlanks => StepData::FillInTheBlanks(FillInTheBlanks {
                question: "Complete the sentence: ___".to_owned(),
                image_url: String::new(),
                sound_file_name: String::new(),
                options: Vec::new(),
                correct_answer: String::new(),
                translation: String::new(),
                pronunciation_tip: String::new(),
            }),
            StepType::WordOrdering => StepData::WordOrdering(WordOrdering {
                instruction_text: "Arrange the words into a sentence".to_owned(),
                image_url: String::new(),
                sound_file_name: String::new(),
                word_options: Vec::new(),
                correct_sentence: String::new(),
            }),
            StepType::LanguageQuestion => StepData::LanguageQuestion(LanguageQuestion {
                question_text: "New question".to_owned(),
                image_url: String::new(),
                sound_file_name: String::new(),
                options: Vec::new(),
                correct_option: String::new(),
            }),
            StepType::LessonInformation => StepData::LessonInformation(LessonInformation {
                title: "New section".to_owned(),
                main_text: "Main text".to_owned(),
                secondary_text: String::new(),
            }),
            StepType::LanguagePhrases => StepData::LanguagePhrases(LanguagePhrases {
                title: "New phrase set".to_owned(),
                explanation: String::new(),
                phrases: Vec::new(),
            }),
            StepType::MatchingPairs => StepData::MatchingPairs(MatchingPairs {
                title: "New matching exercise".to_owned(),
                pairs: Vec::new(),
            }),
        }
    }
}

/// Vocabulary card with audio and supporting facts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenVocabulary {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sound_file_name: String,
    pub main_text: String,
    pub secondary_text: String,
    #[serde(default)]
    pub facts: Vec<String>,
}

/// Cloze exercise: a question with a blank and a set of candidate answers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillInTheBlanks {
    pub question: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sound_file_name: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub pronunciation_tip: String,
}

/// Scrambled-sentence exercise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordOrdering {
    pub instruction_text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sound_file_name: String,
    #[serde(default)]
    pub word_options: Vec<String>,
    pub correct_sentence: String,
}

/// Multiple-choice question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageQuestion {
    pub question_text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sound_file_name: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_option: String,
}

/// Informational interstitial between exercises.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonInformation {
    pub title: String,
    pub main_text: String,
    #[serde(default)]
    pub secondary_text: String,
}

/// Titled list of phrases with translations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanguagePhrases {
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub phrases: Vec<PhraseEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub phrase: String,
    pub translation: String,
}

/// Match-the-columns exercise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchingPairs {
    pub title: String,
    #[serde(default)]
    pub pairs: Vec<Pair>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub left: String,
    pub right: String,
}

/// Loosely-typed lesson content produced by the list editors.
///
/// `text` is kept as a raw JSON value: content arrives from the service
/// unvalidated and the table viewer must be able to report a non-string
/// payload instead of failing to deserialize the whole lesson.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub text: Value,
    pub translation: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub content_type: String,
    pub unique_id: String,
}

impl ContentItem {
    /// Table submission: `text` carries the serialized table document.
    pub fn table(document: &TableDocument) -> Self {
        Self {
            text: Value::String(document.to_text()),
            translation: String::new(),
            item_type: "table".to_owned(),
            content_type: "table".to_owned(),
            unique_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Sentence submission: plain text plus its translation.
    pub fn sentence(text: &str, translation: &str) -> Self {
        Self {
            text: Value::String(text.to_owned()),
            translation: translation.to_owned(),
            item_type: "sentence".to_owned(),
            content_type: "sentence".to_owned(),
            unique_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Table wire format carried in a content item's `text` field.
///
/// Rows are not validated against the header width; mismatched rows are the
/// producer's problem and render ragged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDocument {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Why a content item's `text` could not be rendered as a table.
#[derive(Debug, thiserror::Error)]
pub enum TableParseError {
    #[error("table content is not text")]
    NotText,
    #[error("table data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid table format: expected `headers` and `rows` arrays")]
    InvalidFormat,
}

impl TableDocument {
    /// Parse a content item's `text` value into a table document.
    pub fn from_item_text(text: &Value) -> Result<Self, TableParseError> {
        let raw = text.as_str().ok_or(TableParseError::NotText)?;
        Self::parse(raw)
    }

    /// Parse serialized table JSON.
    pub fn parse(raw: &str) -> Result<Self, TableParseError> {
        let value: Value = serde_json::from_str(raw)?;
        let headers = value
            .get("headers")
            .and_then(Value::as_array)
            .ok_or(TableParseError::InvalidFormat)?;
        let rows = value
            .get("rows")
            .and_then(Value::as_array)
            .ok_or(TableParseError::InvalidFormat)?;

        Ok(Self {
            headers: headers.iter().map(cell_text).collect(),
            rows: rows
                .iter()
                .map(|row| {
                    row.as_array()
                        .map(|cells| cells.iter().map(cell_text).collect())
                        .unwrap_or_default()
                })
                .collect(),
        })
    }

    /// Serialize back into the wire format.
    pub fn to_text(&self) -> String {
        serde_json::json!({ "headers": self.headers, "rows": self.rows }).to_string()
    }
}

/// Cells are usually strings but the format is not enforced upstream.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
