use std::cell::RefCell;

use admission_predictor::prediction::{
    submit, BusyState, FormPayload, Outcome, PredictionService, SubmitState, Tier,
};
use admission_predictor::PredictorError;

/// Records every payload it receives and answers with a canned result.
struct FakeService {
    reply: Result<f64, PredictorError>,
    requests: RefCell<Vec<String>>,
}

impl FakeService {
    fn replying(reply: Result<f64, PredictorError>) -> Self {
        Self {
            reply,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl PredictionService for FakeService {
    async fn predict(&self, payload: &FormPayload) -> Result<f64, PredictorError> {
        self.requests
            .borrow_mut()
            .push(payload.to_json().expect("payload serializes"));
        self.reply.clone()
    }
}

/// Never answers.
struct HangingService;

impl PredictionService for HangingService {
    async fn predict(&self, _payload: &FormPayload) -> Result<f64, PredictorError> {
        std::future::pending::<Result<f64, PredictorError>>().await
    }
}

#[derive(Default)]
struct RecordingBusy {
    transitions: RefCell<Vec<SubmitState>>,
}

impl BusyState for RecordingBusy {
    fn set_state(&self, state: SubmitState) {
        self.transitions.borrow_mut().push(state);
    }
}

impl RecordingBusy {
    fn transitions(&self) -> Vec<SubmitState> {
        self.transitions.borrow().clone()
    }
}

fn sample_payload() -> FormPayload {
    FormPayload::build(
        [
            ("gre_score", "324"),
            ("toefl_score", "107"),
            ("university_rating", "4"),
            ("sop", "4"),
            ("lor", "4.5"),
            ("cgpa", "8.87"),
        ],
        "research",
        true,
    )
}

#[tokio::test]
async fn test_success_renders_tier_and_resets_busy() {
    let service = FakeService::replying(Ok(0.9234));
    let busy = RecordingBusy::default();

    let outcome = submit(&service, &busy, sample_payload()).await;

    assert_eq!(outcome.output_text(), "92.34%");
    assert_eq!(outcome.message(), Tier::Excellent.message());
    assert_eq!(outcome.color(), "var(--success-color)");
    assert_eq!(outcome.display().map(|d| d.bar_width), Some(92));
    assert_eq!(busy.transitions(), vec![SubmitState::Submitting, SubmitState::Idle]);
}

#[tokio::test]
async fn test_exactly_one_request_with_numeric_body() {
    let service = FakeService::replying(Ok(0.5));
    let busy = RecordingBusy::default();

    submit(&service, &busy, sample_payload()).await;

    let requests = service.requests.borrow();
    assert_eq!(requests.len(), 1, "expected a single POST, got {}", requests.len());

    let body: serde_json::Value = serde_json::from_str(&requests[0]).expect("body is JSON");
    let object = body.as_object().expect("body is an object");
    assert_eq!(object.get("research"), Some(&serde_json::Value::from(1)));
    for (key, value) in object {
        assert!(value.is_number(), "field {} is not a number: {}", key, value);
    }
    assert_eq!(object.len(), 7);
}

#[tokio::test]
async fn test_rejection_shows_server_error() {
    let service = FakeService::replying(Err(PredictorError::rejected(Some("bad input".into()))));
    let busy = RecordingBusy::default();

    let outcome = submit(&service, &busy, sample_payload()).await;

    assert_eq!(outcome.output_text(), "N/A");
    assert_eq!(outcome.message(), "Error: bad input");
    assert_eq!(outcome.color(), "var(--error-color)");
    assert!(outcome.display().is_none());
    assert_eq!(busy.transitions().last(), Some(&SubmitState::Idle));
}

#[tokio::test]
async fn test_transport_failure_shows_generic_message() {
    let service = FakeService::replying(Err(PredictorError::transport("Failed to fetch")));
    let busy = RecordingBusy::default();

    let outcome = submit(&service, &busy, sample_payload()).await;

    assert_eq!(outcome.output_text(), "Error");
    assert_eq!(outcome.message(), "A network error occurred. Please try again.");
    assert_eq!(outcome.color(), "var(--error-color)");
    assert_eq!(outcome.diagnostic(), Some("Failed to fetch"));
    assert_eq!(busy.transitions(), vec![SubmitState::Submitting, SubmitState::Idle]);
}

#[tokio::test]
async fn test_busy_state_released_when_submission_is_dropped() {
    let busy = RecordingBusy::default();

    tokio::select! {
        biased;
        _ = submit(&HangingService, &busy, sample_payload()) => panic!("hanging service resolved"),
        _ = async {} => {}
    }

    assert_eq!(busy.transitions(), vec![SubmitState::Submitting, SubmitState::Idle]);
}

#[tokio::test]
async fn test_lower_tier_for_weak_profile() {
    let service = FakeService::replying(Ok(0.35));
    let busy = RecordingBusy::default();

    let outcome = submit(&service, &busy, sample_payload()).await;

    assert!(matches!(&outcome, Outcome::Predicted(d) if d.tier == Tier::Lower));
    assert_eq!(
        outcome.message(),
        "Lower Chance. Consider improvements or backup options."
    );
}
