//! Assisted import: extract records from pasted free-form text.
//!
//! # Responsibility
//! - Call the configured text-extraction provider and map its answer to
//!   exactly one tagged outcome.
//! - Convert extracted partial field sets into full records with sane
//!   defaults.
//!
//! # Invariants
//! - A failed or malformed extraction yields `Unknown { error }` and
//!   never touches a collection; the caller decides whether to `add`.
//! - Unrecognized status/stage strings from a provider degrade to the
//!   default enum variant instead of failing the whole import.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::funding::{Grant, GrantStatus};
use crate::model::research::{Paper, PaperStage};
use crate::model::review::{PeerReview, ReviewStatus};
use crate::model::settings::AiProvider;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";
const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const OPENAI_MODEL: &str = "gpt-4o-mini";

/// Partial peer-review fields a provider may extract.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewImport {
    pub journal: Option<String>,
    pub manuscript_title: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

impl ReviewImport {
    /// Fills omitted fields with defaults, ready for `add`.
    pub fn into_record(self) -> PeerReview {
        PeerReview {
            journal: self.journal.unwrap_or_default(),
            manuscript_title: self.manuscript_title.unwrap_or_default(),
            due_date: self.due_date.unwrap_or_default(),
            status: parse_review_status(self.status.as_deref()),
            ..PeerReview::default()
        }
    }
}

/// Partial grant fields a provider may extract.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GrantImport {
    pub title: Option<String>,
    pub agency: Option<String>,
    pub submission_deadline: Option<String>,
    pub status: Option<String>,
}

impl GrantImport {
    pub fn into_record(self) -> Grant {
        Grant {
            title: self.title.unwrap_or_default(),
            agency: self.agency.unwrap_or_default(),
            submission_deadline: self.submission_deadline.unwrap_or_default(),
            status: parse_grant_status(self.status.as_deref()),
            ..Grant::default()
        }
    }
}

/// Partial paper fields a provider may extract.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaperImport {
    pub title: Option<String>,
    pub target_journal: Option<String>,
    pub stage: Option<String>,
}

impl PaperImport {
    pub fn into_record(self) -> Paper {
        Paper {
            title: self.title.unwrap_or_default(),
            target_journal: self.target_journal.unwrap_or_default(),
            stage: parse_paper_stage(self.stage.as_deref()),
            ..Paper::default()
        }
    }
}

/// The one tagged result shape of an import attempt.
#[derive(Debug, Clone)]
pub enum ImportOutcome {
    PeerReview(ReviewImport),
    Grant(GrantImport),
    Paper(PaperImport),
    Unknown { error: String },
}

/// Runs one extraction against the selected provider.
///
/// All failure modes (network, provider refusal, unparseable answer)
/// collapse into `Unknown { error }`; nothing is retried.
pub fn extract(text: &str, provider: AiProvider, api_key: &str) -> ImportOutcome {
    let result = match provider {
        AiProvider::Gemini => extract_with_gemini(text, api_key),
        AiProvider::Openai => extract_with_openai(text, api_key),
    };

    match result {
        Ok(outcome) => outcome,
        Err(error) => {
            warn!(
                "event=import_extract module=service status=error provider={:?} error={}",
                provider, error
            );
            ImportOutcome::Unknown { error }
        }
    }
}

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Serialize)]
struct GeminiGenerationConfig {
    response_mime_type: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiReplyContent,
}

#[derive(Deserialize)]
struct GeminiReplyContent {
    #[serde(default)]
    parts: Vec<GeminiReplyPart>,
}

#[derive(Deserialize)]
struct GeminiReplyPart {
    text: String,
}

fn extract_with_gemini(text: &str, api_key: &str) -> Result<ImportOutcome, String> {
    let request = GeminiRequest {
        contents: vec![GeminiContent {
            parts: vec![GeminiPart {
                text: extraction_prompt(text),
            }],
        }],
        generation_config: GeminiGenerationConfig {
            response_mime_type: "application/json".to_string(),
        },
    };

    let response = reqwest::blocking::Client::new()
        .post(format!("{GEMINI_ENDPOINT}?key={api_key}"))
        .json(&request)
        .send()
        .map_err(|err| err.to_string())?;

    if !response.status().is_success() {
        return Err(provider_error_message(response));
    }

    let reply: GeminiResponse = response.json().map_err(|err| err.to_string())?;
    let raw = reply
        .candidates
        .first()
        .and_then(|candidate| candidate.content.parts.first())
        .map(|part| part.text.as_str())
        .ok_or_else(|| "empty provider answer".to_string())?;

    parse_payload(raw)
}

#[derive(Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    response_format: OpenAiResponseFormat,
}

#[derive(Serialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct OpenAiResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiReply,
}

#[derive(Deserialize)]
struct OpenAiReply {
    content: Option<String>,
}

fn extract_with_openai(text: &str, api_key: &str) -> Result<ImportOutcome, String> {
    let request = OpenAiRequest {
        model: OPENAI_MODEL.to_string(),
        messages: vec![OpenAiMessage {
            role: "user".to_string(),
            content: extraction_prompt(text),
        }],
        response_format: OpenAiResponseFormat {
            kind: "json_object".to_string(),
        },
    };

    let response = reqwest::blocking::Client::new()
        .post(OPENAI_ENDPOINT)
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .map_err(|err| err.to_string())?;

    if !response.status().is_success() {
        return Err(provider_error_message(response));
    }

    let reply: OpenAiResponse = response.json().map_err(|err| err.to_string())?;
    let raw = reply
        .choices
        .first()
        .and_then(|choice| choice.message.content.as_deref())
        .ok_or_else(|| "empty provider answer".to_string())?;

    parse_payload(raw)
}

/// Pulls a human-readable message out of a provider error body.
fn provider_error_message(response: reqwest::blocking::Response) -> String {
    let status = response.status();
    response
        .json::<Value>()
        .ok()
        .and_then(|body| {
            body.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("provider returned status {status}"))
}

/// Maps a provider JSON answer to the tagged outcome.
///
/// Kept separate from the HTTP paths so the contract is testable on
/// captured payloads.
pub fn parse_payload(raw: &str) -> Result<ImportOutcome, String> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| format!("unparseable provider answer: {err}"))?;
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| "provider answer is missing `type`".to_string())?;
    let data = value.get("data").cloned().unwrap_or(Value::Null);

    match kind {
        "peer-review" => serde_json::from_value(data)
            .map(ImportOutcome::PeerReview)
            .map_err(|err| format!("bad peer-review fields: {err}")),
        "grant" => serde_json::from_value(data)
            .map(ImportOutcome::Grant)
            .map_err(|err| format!("bad grant fields: {err}")),
        "paper" => serde_json::from_value(data)
            .map(ImportOutcome::Paper)
            .map_err(|err| format!("bad paper fields: {err}")),
        "unknown" => {
            let error = value
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("could not identify the content type")
                .to_string();
            Ok(ImportOutcome::Unknown { error })
        }
        other => Err(format!("unrecognized import type `{other}`")),
    }
}

fn extraction_prompt(text: &str) -> String {
    format!(
        "You assist an academic dashboard. Read the text below (usually an \
         email) and decide whether it describes a peer review request, a \
         grant or funding update, or a manuscript status update.\n\
         \n\
         Answer with a single JSON object of the form:\n\
         {{\"type\": \"peer-review\" | \"grant\" | \"paper\", \"data\": {{ ... }}}}\n\
         \n\
         data fields per type:\n\
         - peer-review: journal, manuscriptTitle, dueDate (YYYY-MM-DD), status\n\
         - grant: title, agency, submissionDeadline (YYYY-MM-DD), status\n\
         - paper: title, targetJournal, stage (\"submitted\" | \"under-review\" \
           | \"revise-resubmit\" | \"accepted\")\n\
         \n\
         Omit fields the text does not support. Answer with JSON only. If \
         the type cannot be determined, answer \
         {{\"type\": \"unknown\", \"error\": \"Could not identify the content type\"}}.\n\
         \n\
         Text:\n\"\"\"\n{text}\n\"\"\"\n"
    )
}

fn parse_review_status(value: Option<&str>) -> ReviewStatus {
    match value {
        Some("pending") => ReviewStatus::Pending,
        Some("accepted") => ReviewStatus::Accepted,
        Some("declined") => ReviewStatus::Declined,
        Some("in-progress") => ReviewStatus::InProgress,
        Some("completed") => ReviewStatus::Completed,
        _ => ReviewStatus::default(),
    }
}

fn parse_grant_status(value: Option<&str>) -> GrantStatus {
    match value {
        Some("planning") => GrantStatus::Planning,
        Some("drafting") => GrantStatus::Drafting,
        Some("submitted") => GrantStatus::Submitted,
        Some("under-review") => GrantStatus::UnderReview,
        Some("funded") => GrantStatus::Funded,
        Some("declined") => GrantStatus::Declined,
        Some("completed") => GrantStatus::Completed,
        _ => GrantStatus::default(),
    }
}

fn parse_paper_stage(value: Option<&str>) -> PaperStage {
    match value {
        Some("idea") => PaperStage::Idea,
        Some("drafting") => PaperStage::Drafting,
        Some("internal-review") => PaperStage::InternalReview,
        Some("submitted") => PaperStage::Submitted,
        Some("under-review") => PaperStage::UnderReview,
        Some("revise-resubmit") => PaperStage::ReviseResubmit,
        Some("accepted") => PaperStage::Accepted,
        Some("published") => PaperStage::Published,
        _ => PaperStage::default(),
    }
}
