use serde_json::json;

use super::*;

fn ada() -> Identity {
    Identity {
        uid: "u1".to_owned(),
        display_name: "Ada".to_owned(),
        photo_url: String::new(),
    }
}

fn upload() -> Upload {
    Upload {
        name: "notes.pdf".to_owned(),
        bytes: vec![1, 2, 3],
        mime: Some("application/pdf".to_owned()),
    }
}

fn ok_response() -> SubmitResponse {
    SubmitResponse {
        content: json!({
            "summary": { "main_idea": "Main", "key_points": ["k"], "conclusion": "End" },
            "notes": ["n1"]
        }),
        response_id: Some("r1".to_owned()),
    }
}

fn with_prompt(prompt: &str) -> SubmissionState {
    SubmissionState { prompt_text: prompt.to_owned(), ..SubmissionState::default() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_idle_and_empty() {
    let state = SubmissionState::default();
    assert_eq!(state.phase, Phase::Idle);
    assert!(state.file.is_none());
    assert!(state.prompt_text.is_empty());
    assert!(state.flags.none_selected());
    assert!(!state.can_submit());
}

// =============================================================
// begin
// =============================================================

#[test]
fn begin_moves_to_submitting_and_snapshots_inputs() {
    let mut state = with_prompt("Explain ledgers");
    state.file = Some(upload());
    state.toggle_section(Section::Summary);

    let pending = state.begin().unwrap();
    assert!(state.is_submitting());
    assert_eq!(pending.request.prompt_text, "Explain ledgers");
    assert_eq!(pending.request.file, Some(upload()));
    assert_eq!(pending.request.flags.encode(), "0,1,0,0");
}

#[test]
fn begin_refuses_while_in_flight() {
    let mut state = with_prompt("p");
    state.begin().unwrap();
    let before = state.clone();
    assert_eq!(state.begin(), Err(SubmitBlocked::InFlight));
    assert_eq!(state, before);
}

#[test]
fn begin_refuses_without_file_or_prompt() {
    let mut state = with_prompt("   ");
    assert_eq!(state.begin(), Err(SubmitBlocked::NothingToSubmit));
    assert_eq!(state.phase, Phase::Idle);
}

#[test]
fn begin_accepts_file_without_prompt() {
    let mut state = SubmissionState { file: Some(upload()), ..SubmissionState::default() };
    assert!(state.can_submit());
    assert!(state.begin().is_ok());
}

#[test]
fn begin_allowed_again_after_success_and_failure() {
    let mut state = with_prompt("p");
    let first = state.begin().unwrap();
    state.resolve(first.attempt, Ok(ok_response()), None);
    assert!(state.result().is_some());

    let second = state.begin().unwrap();
    state.resolve(second.attempt, Err(ApiError::Status(500)), None);
    assert!(state.error().is_some());

    assert!(state.begin().is_ok());
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_success_renders_result() {
    let mut state = with_prompt("p");
    let pending = state.begin().unwrap();
    let record = state.resolve(pending.attempt, Ok(ok_response()), None);

    assert!(record.is_none());
    let result = state.result().unwrap();
    assert_eq!(result.visible_sections(), vec![Section::Summary, Section::Notes]);
    assert!(state.error().is_none());
}

#[test]
fn resolve_success_with_identity_emits_history_record() {
    let mut state = with_prompt("Explain ledgers");
    let pending = state.begin().unwrap();
    state.prompt_text = "edited while in flight".to_owned();

    let record = state.resolve(pending.attempt, Ok(ok_response()), Some(&ada())).unwrap();
    assert_eq!(
        record,
        HistoryRecord {
            uid: "u1".to_owned(),
            prompt_text: "Explain ledgers".to_owned(),
            response_id: "r1".to_owned(),
        }
    );
}

#[test]
fn resolve_success_without_response_id_skips_record() {
    let mut state = with_prompt("p");
    let pending = state.begin().unwrap();
    let response = SubmitResponse { response_id: None, ..ok_response() };
    assert!(state.resolve(pending.attempt, Ok(response), Some(&ada())).is_none());
    assert!(state.result().is_some());
}

#[test]
fn empty_or_absent_content_always_fails() {
    let empties = [serde_json::Value::Null, json!(""), json!({}), json!({ "notes": [] })];
    for content in empties {
        let mut state = with_prompt("p");
        let pending = state.begin().unwrap();
        let response = SubmitResponse { content: content.clone(), response_id: Some("r1".to_owned()) };
        let record = state.resolve(pending.attempt, Ok(response), Some(&ada()));

        assert!(record.is_none(), "content={content}");
        assert!(state.result().is_none(), "content={content}");
        let message = state.error().unwrap();
        assert!(!message.trim().is_empty());
        assert_eq!(message, ApiError::EmptyContent.user_message());
    }
}

#[test]
fn transport_failure_preserves_inputs() {
    let mut state = with_prompt("keep me");
    state.file = Some(upload());
    state.toggle_section(Section::Notes);
    let pending = state.begin().unwrap();

    state.resolve(pending.attempt, Err(ApiError::Network("offline".to_owned())), None);
    assert!(state.error().is_some());
    assert_eq!(state.prompt_text, "keep me");
    assert_eq!(state.file, Some(upload()));
    assert!(state.flags.get(Section::Notes));
}

#[test]
fn stale_resolution_after_reset_is_ignored() {
    let mut state = with_prompt("p");
    let pending = state.begin().unwrap();
    state.reset();

    let record = state.resolve(pending.attempt, Ok(ok_response()), Some(&ada()));
    assert!(record.is_none());
    assert_eq!(state.phase, Phase::Idle);
}

#[test]
fn superseded_attempt_cannot_overwrite_newer_one() {
    let mut state = with_prompt("p");
    let old = state.begin().unwrap();
    state.reset();
    state.prompt_text = "q".to_owned();
    let new = state.begin().unwrap();

    state.resolve(old.attempt, Err(ApiError::Status(500)), None);
    assert!(state.is_submitting());
    state.resolve(new.attempt, Ok(ok_response()), None);
    assert!(state.result().is_some());
}

// =============================================================
// reset
// =============================================================

fn assert_cleared(state: &SubmissionState) {
    assert_eq!(state.phase, Phase::Idle);
    assert!(state.file.is_none());
    assert!(state.prompt_text.is_empty());
    for section in Section::ALL {
        assert!(!state.flags.get(section));
    }
    assert!(state.result().is_none());
    assert!(state.error().is_none());
}

fn filled() -> SubmissionState {
    let mut state = with_prompt("p");
    state.file = Some(upload());
    for section in Section::ALL {
        state.toggle_section(section);
    }
    state
}

#[test]
fn reset_clears_everything_from_every_phase() {
    let mut idle = filled();
    idle.reset();
    assert_cleared(&idle);

    let mut submitting = filled();
    submitting.begin().unwrap();
    submitting.reset();
    assert_cleared(&submitting);

    let mut succeeded = filled();
    let pending = succeeded.begin().unwrap();
    succeeded.resolve(pending.attempt, Ok(ok_response()), None);
    succeeded.reset();
    assert_cleared(&succeeded);

    let mut failed = filled();
    let pending = failed.begin().unwrap();
    failed.resolve(pending.attempt, Err(ApiError::EmptyContent), None);
    failed.reset();
    assert_cleared(&failed);
}

// =============================================================
// file picks
// =============================================================

#[test]
fn file_read_for_current_pick_attaches() {
    let mut state = SubmissionState::default();
    let pick = state.begin_file_pick();
    assert!(state.attach_file(pick, upload()));
    assert_eq!(state.file_name(), Some("notes.pdf"));
    assert!(state.can_submit());
}

#[test]
fn stale_file_read_after_reset_is_dropped() {
    let mut state = with_prompt("p");
    let pick = state.begin_file_pick();
    state.reset();
    assert!(!state.attach_file(pick, upload()));
    assert_cleared(&state);
    assert_eq!(state.begin(), Err(SubmitBlocked::NothingToSubmit));
}

#[test]
fn older_pick_cannot_replace_newer_one() {
    let mut state = SubmissionState::default();
    let first = state.begin_file_pick();
    let second = state.begin_file_pick();
    let newer = Upload { name: "newer.txt".to_owned(), bytes: vec![9], mime: None };
    assert!(state.attach_file(second, newer));
    assert!(!state.attach_file(first, upload()));
    assert_eq!(state.file_name(), Some("newer.txt"));
}

#[test]
fn new_pick_drops_previous_file_until_read_completes() {
    let mut state = SubmissionState::default();
    let pick = state.begin_file_pick();
    state.attach_file(pick, upload());
    state.begin_file_pick();
    assert!(state.file.is_none());
}
