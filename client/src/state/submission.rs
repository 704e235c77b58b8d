//! Submission form state and its request lifecycle.
//!
//! DESIGN
//! ======
//! The lifecycle is an explicit state machine:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──resolve──▶ Succeeded | Failed
//!  ▲                                          │
//!  └──────────────── reset (any) ─────────────┘
//! ```
//!
//! `begin` is the single-in-flight guard: it refuses while a request is
//! pending instead of relying on the disabled button alone. Each attempt gets
//! a number so a response arriving after a reset cannot overwrite newer
//! state. File reads are numbered the same way: a read that completes after
//! a reset or a newer pick is dropped.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::identity::Identity;
use crate::net::error::ApiError;
use crate::net::types::{
    HistoryRecord, Section, SectionFlags, SubmissionRequest, SubmitResponse, SummaryResult, Upload,
};

/// Where the current attempt stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Request in flight. Holds the prompt text that was sent.
    Submitting { prompt_text: String },
    Succeeded {
        result: SummaryResult,
        response_id: Option<String>,
    },
    Failed { message: String },
}

/// Why `begin` refused to start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("upload a file or enter a prompt first")]
    NothingToSubmit,
}

/// A request handed to the network layer, tagged with its attempt number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub attempt: u64,
    pub request: SubmissionRequest,
}

/// Form inputs plus lifecycle phase for the submission view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub file: Option<Upload>,
    pub prompt_text: String,
    pub flags: SectionFlags,
    pub phase: Phase,
    attempt: u64,
    file_pick: u64,
}

impl SubmissionState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    /// `true` when a file is attached or the prompt has text.
    #[must_use]
    pub fn has_input(&self) -> bool {
        self.file.is_some() || !self.prompt_text.trim().is_empty()
    }

    /// Drives the submit button's `disabled` attribute.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.has_input()
    }

    #[must_use]
    pub fn result(&self) -> Option<&SummaryResult> {
        match &self.phase {
            Phase::Succeeded { result, .. } => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed { message } => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|f| f.name.as_str())
    }

    pub fn toggle_section(&mut self, section: Section) {
        self.flags.toggle(section);
    }

    /// Start a new file selection, dropping the current file. Returns the
    /// pick number the eventual read must present to [`Self::attach_file`].
    pub fn begin_file_pick(&mut self) -> u64 {
        self.file_pick += 1;
        self.file = None;
        self.file_pick
    }

    /// Attach the bytes read for pick `pick`. Returns `false` and leaves the
    /// state alone when a reset or a newer pick happened meanwhile.
    pub fn attach_file(&mut self, pick: u64, upload: Upload) -> bool {
        if pick != self.file_pick {
            return false;
        }
        self.file = Some(upload);
        true
    }

    /// Start an attempt: Idle/Succeeded/Failed → Submitting.
    ///
    /// # Errors
    ///
    /// [`SubmitBlocked::InFlight`] while a request is pending,
    /// [`SubmitBlocked::NothingToSubmit`] without a file or prompt. The state
    /// is unchanged in both cases.
    pub fn begin(&mut self) -> Result<PendingSubmission, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }
        if !self.has_input() {
            return Err(SubmitBlocked::NothingToSubmit);
        }
        self.attempt += 1;
        self.phase = Phase::Submitting { prompt_text: self.prompt_text.clone() };
        Ok(PendingSubmission {
            attempt: self.attempt,
            request: SubmissionRequest {
                file: self.file.clone(),
                prompt_text: self.prompt_text.clone(),
                flags: self.flags,
            },
        })
    }

    /// Finish attempt `attempt`: Submitting → Succeeded | Failed.
    ///
    /// A response with empty or missing content fails the attempt. On success
    /// with a signed-in `identity`, returns the history record to send; the
    /// caller fires it without awaiting the outcome. Stale attempts (reset or
    /// superseded) are ignored.
    pub fn resolve(
        &mut self,
        attempt: u64,
        outcome: Result<SubmitResponse, ApiError>,
        identity: Option<&Identity>,
    ) -> Option<HistoryRecord> {
        if attempt != self.attempt {
            return None;
        }
        let Phase::Submitting { prompt_text } = &self.phase else {
            return None;
        };
        let prompt_text = prompt_text.clone();

        let parsed = outcome.and_then(|resp| {
            let response_id = resp.response_id;
            SummaryResult::from_content(resp.content)
                .map(|result| (result, response_id))
                .ok_or(ApiError::EmptyContent)
        });

        match parsed {
            Ok((result, response_id)) => {
                let record = identity.zip(response_id.clone()).map(|(identity, response_id)| HistoryRecord {
                    uid: identity.uid.clone(),
                    prompt_text,
                    response_id,
                });
                self.phase = Phase::Succeeded { result, response_id };
                record
            }
            Err(err) => {
                self.phase = Phase::Failed { message: err.user_message() };
                None
            }
        }
    }

    /// Any phase → Idle, clearing file, prompt, flags, result, and error.
    pub fn reset(&mut self) {
        self.file_pick += 1;
        self.file = None;
        self.prompt_text.clear();
        self.flags = SectionFlags::default();
        self.phase = Phase::Idle;
    }
}
