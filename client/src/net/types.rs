//! Wire DTOs for the summarization service boundary.
//!
//! DESIGN
//! ======
//! Every result section is optional and deserialized leniently: a missing or
//! malformed section becomes `None`, so the view hides that section instead of
//! rejecting the whole payload. Identifiers and timestamps arrive as either
//! strings or numbers depending on the backend revision, so both are accepted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

/// Output sections the user can request, in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    ImportantQuestions,
    Summary,
    Notes,
    AdditionalInfo,
}

impl Section {
    /// All sections in the fixed order used by the flags string.
    pub const ALL: [Section; 4] = [
        Section::ImportantQuestions,
        Section::Summary,
        Section::Notes,
        Section::AdditionalInfo,
    ];

    /// Position of this section in the flags string.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Section::ImportantQuestions => 0,
            Section::Summary => 1,
            Section::Notes => 2,
            Section::AdditionalInfo => 3,
        }
    }

    /// Checkbox and heading label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::ImportantQuestions => "Most Important Questions",
            Section::Summary => "Summary",
            Section::Notes => "Notes",
            Section::AdditionalInfo => "Additional Info",
        }
    }
}

/// Requested output sections, one toggle per [`Section`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionFlags([bool; 4]);

impl SectionFlags {
    #[must_use]
    pub fn new(flags: [bool; 4]) -> Self {
        Self(flags)
    }

    #[must_use]
    pub fn get(self, section: Section) -> bool {
        self.0[section.index()]
    }

    pub fn set(&mut self, section: Section, enabled: bool) {
        self.0[section.index()] = enabled;
    }

    pub fn toggle(&mut self, section: Section) {
        let idx = section.index();
        self.0[idx] = !self.0[idx];
    }

    /// `true` when no section is selected.
    #[must_use]
    pub fn none_selected(self) -> bool {
        self.0.iter().all(|f| !f)
    }

    /// Serialize as the comma-joined `"0"`/`"1"` sequence the service expects,
    /// e.g. `"1,0,1,0"`.
    #[must_use]
    pub fn encode(self) -> String {
        self.0
            .iter()
            .map(|f| if *f { "1" } else { "0" })
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// A file picked by the user, read fully into memory before submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    /// Original file name, sent as the multipart filename.
    pub name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
    /// MIME type reported by the browser, if any.
    pub mime: Option<String>,
}

/// One summarization attempt. Built by the submission state machine and
/// dropped once the request resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub file: Option<Upload>,
    pub prompt_text: String,
    pub flags: SectionFlags,
}

/// A generated question with its topic tag and answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportantQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub answer: String,
}

/// Structured summary block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub main_idea: String,
    pub key_points: Vec<String>,
    pub conclusion: String,
}

impl Summary {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main_idea.trim().is_empty() && self.key_points.is_empty() && self.conclusion.trim().is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SummaryWire {
    Text(String),
    Structured {
        #[serde(default, alias = "mainIdea")]
        main_idea: String,
        #[serde(default, alias = "keyPoints")]
        key_points: Vec<String>,
        #[serde(default)]
        conclusion: String,
    },
}

impl<'de> Deserialize<'de> for Summary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match SummaryWire::deserialize(deserializer)? {
            // Early payloads sent the summary as a single paragraph.
            SummaryWire::Text(main_idea) => Summary { main_idea, ..Summary::default() },
            SummaryWire::Structured { main_idea, key_points, conclusion } => {
                Summary { main_idea, key_points, conclusion }
            }
        })
    }
}

/// Pointers for further reading.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    #[serde(default, alias = "relatedTopics")]
    pub related_topics: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default, alias = "furtherStudy")]
    pub further_study: Vec<String>,
}

impl AdditionalInfo {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.related_topics.is_empty() && self.resources.is_empty() && self.further_study.is_empty()
    }
}

/// A parsed summarization result. Each section is independently optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    #[serde(default, alias = "importantQuestions", deserialize_with = "lenient")]
    pub important_questions: Option<Vec<ImportantQuestion>>,
    #[serde(default, deserialize_with = "lenient")]
    pub summary: Option<Summary>,
    #[serde(default, deserialize_with = "lenient")]
    pub notes: Option<Vec<String>>,
    #[serde(default, alias = "additionalInfo", deserialize_with = "lenient")]
    pub additional_info: Option<AdditionalInfo>,
}

impl SummaryResult {
    /// Decode a `content` payload. Returns `None` for anything that should be
    /// treated as an empty response: null, blank strings, non-objects, or an
    /// object with no renderable section. JSON delivered as a string is
    /// decoded first.
    #[must_use]
    pub fn from_content(content: serde_json::Value) -> Option<Self> {
        let content = match content {
            serde_json::Value::String(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return None;
                }
                serde_json::from_str::<serde_json::Value>(raw).ok()?
            }
            other => other,
        };
        if !content.is_object() {
            return None;
        }
        let result: Self = serde_json::from_value(content).ok()?;
        (!result.is_empty()).then_some(result)
    }

    /// Questions, if any were returned.
    #[must_use]
    pub fn questions(&self) -> Option<&[ImportantQuestion]> {
        self.important_questions.as_deref().filter(|q| !q.is_empty())
    }

    /// Summary block, if it carries any text.
    #[must_use]
    pub fn summary_block(&self) -> Option<&Summary> {
        self.summary.as_ref().filter(|s| !s.is_empty())
    }

    /// Notes, if any were returned.
    #[must_use]
    pub fn note_items(&self) -> Option<&[String]> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }

    /// Additional info block, if any list is non-empty.
    #[must_use]
    pub fn additional_block(&self) -> Option<&AdditionalInfo> {
        self.additional_info.as_ref().filter(|a| !a.is_empty())
    }

    #[must_use]
    pub fn has_section(&self, section: Section) -> bool {
        match section {
            Section::ImportantQuestions => self.questions().is_some(),
            Section::Summary => self.summary_block().is_some(),
            Section::Notes => self.note_items().is_some(),
            Section::AdditionalInfo => self.additional_block().is_some(),
        }
    }

    /// Sections that will render, in display order.
    #[must_use]
    pub fn visible_sections(&self) -> Vec<Section> {
        Section::ALL.into_iter().filter(|s| self.has_section(*s)).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| !self.has_section(*s))
    }
}

/// Response body of the summarization endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub content: serde_json::Value,
    #[serde(default, alias = "responseId", deserialize_with = "optional_id")]
    pub response_id: Option<String>,
}

/// A past submission as listed by the history endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default, alias = "promptText")]
    pub prompt_text: String,
    #[serde(alias = "responseId", deserialize_with = "required_id")]
    pub response_id: String,
    /// Raw creation timestamp; formatted for display by `util::date`.
    #[serde(default, alias = "createdAt", deserialize_with = "timestamp_text")]
    pub created_at: String,
}

/// Response body of the history-list endpoint. Entries are decoded one by
/// one so a single malformed row does not hide the rest.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct HistoryListResponse {
    #[serde(default)]
    pub history: Vec<serde_json::Value>,
}

impl HistoryListResponse {
    /// Decodable entries in server order, plus how many rows were skipped.
    #[must_use]
    pub fn into_entries(self) -> (Vec<HistoryEntry>, usize) {
        let total = self.history.len();
        let entries: Vec<HistoryEntry> = self
            .history
            .into_iter()
            .filter_map(|raw| serde_json::from_value(raw).ok())
            .collect();
        let skipped = total - entries.len();
        (entries, skipped)
    }
}

/// Response body of the history-item endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct HistoryItemResponse {
    #[serde(default)]
    pub response: serde_json::Value,
}

/// Body of the history-recording call made after a successful submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryRecord {
    pub uid: String,
    #[serde(rename = "promptText")]
    pub prompt_text: String,
    pub response_id: String,
}

/// Body of the login exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub id_token: String,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn id_from_value(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(id_from_value(value))
}

fn required_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(value).ok_or_else(|| D::Error::custom("expected string or numeric identifier"))
}

fn timestamp_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected timestamp string or number")),
    }
}
