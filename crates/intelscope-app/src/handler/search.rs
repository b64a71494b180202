//! Search slot lifecycle handlers

use tracing::{debug, warn};

use intelscope_api::CheckResponse;
use intelscope_core::{cue_for, SearchType};

use crate::normalize;
use crate::state::{AppState, NoticeKind, SearchPhase};

use super::{UpdateAction, UpdateResult};

pub fn handle_input_changed(state: &mut AppState, search_type: SearchType, value: String) -> UpdateResult {
    let slot = state.searches.slot_mut(search_type);
    slot.cue = cue_for(search_type, &value);
    slot.input = value;
    UpdateResult::none()
}

/// Submit the current input of a slot.
///
/// Emptiness and an in-flight request are the only blockers; an invalid
/// validation cue is advisory and the value still goes to the backend.
pub fn handle_submit(state: &mut AppState, search_type: SearchType) -> UpdateResult {
    let slot = state.searches.slot_mut(search_type);

    if slot.phase == SearchPhase::Loading {
        debug!(%search_type, "submit ignored, request already in flight");
        return UpdateResult::none();
    }

    let value = slot.input.trim().to_string();
    if value.is_empty() {
        state.notify(NoticeKind::Warning, "Enter a value to search");
        return UpdateResult::none();
    }

    slot.seq += 1;
    let seq = slot.seq;
    slot.phase = SearchPhase::Loading;
    slot.result = None;
    slot.error = None;

    debug!(%search_type, seq, %value, "submitting search");
    UpdateResult::action(UpdateAction::FetchCheck {
        search_type,
        value,
        seq,
    })
}

pub fn handle_succeeded(
    state: &mut AppState,
    search_type: SearchType,
    seq: u64,
    response: CheckResponse,
) -> UpdateResult {
    let current = state.searches.slot(search_type).seq;
    if seq != current {
        warn!(%search_type, seq, current, "discarding stale search result");
        return UpdateResult::none();
    }

    let slot = state.searches.slot_mut(search_type);
    match normalize::normalize(search_type, &response) {
        Ok(result) => {
            slot.phase = SearchPhase::Success;
            slot.result = Some(result);
            slot.error = None;
        }
        Err(err) => {
            let message = err.user_message();
            warn!(%search_type, %message, "check response rejected");
            slot.phase = SearchPhase::Error;
            slot.result = None;
            slot.error = Some(message.clone());
            state.notify(NoticeKind::Error, message);
        }
    }
    UpdateResult::none()
}

pub fn handle_failed(
    state: &mut AppState,
    search_type: SearchType,
    seq: u64,
    message: String,
) -> UpdateResult {
    let slot = state.searches.slot_mut(search_type);
    if seq != slot.seq {
        warn!(%search_type, seq, current = slot.seq, "discarding stale search failure");
        return UpdateResult::none();
    }

    slot.phase = SearchPhase::Error;
    slot.result = None;
    slot.error = Some(message.clone());
    state.notify(NoticeKind::Error, message);
    UpdateResult::none()
}

/// Clear a slot back to idle. The submission counter advances so any
/// completion still in flight arrives stale and is discarded.
pub fn handle_reset(state: &mut AppState, search_type: SearchType) -> UpdateResult {
    let slot = state.searches.slot_mut(search_type);
    slot.reset();
    slot.seq += 1;
    UpdateResult::none()
}

#[cfg(test)]
mod tests {
    use super::super::update;
    use super::*;
    use crate::message::Message;
    use crate::normalize::AnalysisResult;
    use intelscope_core::{ReputationLevel, ValidationCue};

    fn clean_domain_response() -> CheckResponse {
        let json = r#"{
            "domain": "example.com",
            "overall_reputation": "clean",
            "results": [
                {"source": "VirusTotal", "status": "success", "reputation": "clean",
                 "details": {"positives": 0}}
            ]
        }"#;
        CheckResponse::Domain(serde_json::from_str(json).unwrap())
    }

    fn submit(state: &mut AppState, search_type: SearchType, input: &str) -> UpdateResult {
        update(
            state,
            Message::InputChanged {
                search_type,
                value: input.to_string(),
            },
        );
        update(state, Message::SubmitSearch(search_type))
    }

    #[test]
    fn test_clean_domain_search_flow() {
        let mut state = AppState::default();
        let result = submit(&mut state, SearchType::Domain, "example.com");

        let slot = state.searches.slot(SearchType::Domain);
        assert_eq!(slot.phase, SearchPhase::Loading);
        assert_eq!(slot.cue, ValidationCue::Valid);
        assert!(matches!(
            result.action,
            Some(UpdateAction::FetchCheck { seq: 1, .. })
        ));

        update(
            &mut state,
            Message::SearchSucceeded {
                search_type: SearchType::Domain,
                seq: 1,
                response: clean_domain_response(),
            },
        );

        let slot = state.searches.slot(SearchType::Domain);
        assert_eq!(slot.phase, SearchPhase::Success);
        assert!(slot.export_ready());
        let Some(AnalysisResult::Domain(analysis)) = &slot.result else {
            panic!("expected a domain analysis");
        };
        assert_eq!(analysis.overall, ReputationLevel::Clean);
        assert_eq!(analysis.overall.badge_label(), "CLEAN");
        assert_eq!(analysis.automated.len(), 1);
        assert!(analysis.manual.is_empty());
    }

    #[test]
    fn test_invalid_ip_is_submittable_and_backend_rejects() {
        let mut state = AppState::default();
        let result = submit(&mut state, SearchType::Ip, "999.1.1.1");

        // invalid cue does not block submission
        let slot = state.searches.slot(SearchType::Ip);
        assert_eq!(slot.cue, ValidationCue::Invalid);
        assert!(result.action.is_some());

        update(
            &mut state,
            Message::SearchFailed {
                search_type: SearchType::Ip,
                seq: 1,
                message: "Invalid IP".to_string(),
            },
        );

        let slot = state.searches.slot(SearchType::Ip);
        assert_eq!(slot.phase, SearchPhase::Error);
        assert_eq!(slot.error.as_deref(), Some("Invalid IP"));
        assert!(state
            .notices
            .iter()
            .any(|n| n.kind == NoticeKind::Error && n.text == "Invalid IP"));
    }

    #[test]
    fn test_empty_submission_warns_without_fetch() {
        let mut state = AppState::default();
        let result = submit(&mut state, SearchType::Hash, "   ");
        assert!(result.action.is_none());
        assert_eq!(state.searches.slot(SearchType::Hash).phase, SearchPhase::Idle);
        assert!(state.notices.iter().any(|n| n.kind == NoticeKind::Warning));
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut state = AppState::default();
        submit(&mut state, SearchType::Domain, "example.com");
        let again = update(&mut state, Message::SubmitSearch(SearchType::Domain));
        assert!(again.action.is_none());
        assert_eq!(state.searches.slot(SearchType::Domain).seq, 1);
    }

    #[test]
    fn test_stale_completion_discarded_after_reset() {
        let mut state = AppState::default();
        submit(&mut state, SearchType::Domain, "example.com");
        update(&mut state, Message::ResetSearch(SearchType::Domain));

        // the completion of the superseded submission arrives late
        update(
            &mut state,
            Message::SearchSucceeded {
                search_type: SearchType::Domain,
                seq: 1,
                response: clean_domain_response(),
            },
        );

        let slot = state.searches.slot(SearchType::Domain);
        assert_eq!(slot.phase, SearchPhase::Idle);
        assert!(slot.result.is_none());
    }

    #[test]
    fn test_stale_failure_discarded_after_resubmit() {
        let mut state = AppState::default();
        submit(&mut state, SearchType::Domain, "one.example");
        update(&mut state, Message::ResetSearch(SearchType::Domain));
        submit(&mut state, SearchType::Domain, "two.example");

        update(
            &mut state,
            Message::SearchFailed {
                search_type: SearchType::Domain,
                seq: 1,
                message: "late failure".to_string(),
            },
        );

        // the live submission keeps loading, untouched by the stale failure
        let slot = state.searches.slot(SearchType::Domain);
        assert_eq!(slot.phase, SearchPhase::Loading);
        assert!(slot.error.is_none());
    }

    #[test]
    fn test_contract_violation_surfaces_as_error() {
        let mut state = AppState::default();
        submit(&mut state, SearchType::Domain, "example.com");

        let response: CheckResponse = CheckResponse::Domain(
            serde_json::from_str(r#"{"domain": "example.com", "results": []}"#).unwrap(),
        );
        update(
            &mut state,
            Message::SearchSucceeded {
                search_type: SearchType::Domain,
                seq: 1,
                response,
            },
        );

        let slot = state.searches.slot(SearchType::Domain);
        assert_eq!(slot.phase, SearchPhase::Error);
        let error = slot.error.as_deref().unwrap();
        assert!(error.contains("overall_reputation"));
        // a malformed response raises a transient notice like any other failure
        assert!(state
            .notices
            .iter()
            .any(|n| n.kind == NoticeKind::Error && n.text == error));
    }

    #[test]
    fn test_slots_do_not_interfere() {
        let mut state = AppState::default();
        submit(&mut state, SearchType::Domain, "example.com");
        submit(&mut state, SearchType::Ip, "8.8.8.8");

        update(
            &mut state,
            Message::SearchFailed {
                search_type: SearchType::Ip,
                seq: 1,
                message: "boom".to_string(),
            },
        );

        assert_eq!(state.searches.slot(SearchType::Domain).phase, SearchPhase::Loading);
        assert_eq!(state.searches.slot(SearchType::Ip).phase, SearchPhase::Error);
    }
}
