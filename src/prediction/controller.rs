//! Submission flow: busy state in, one request out, busy state back.

use crate::error::PredictorError;

use super::display::Outcome;
use super::types::FormPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

impl SubmitState {
    pub fn is_busy(self) -> bool {
        self == SubmitState::Submitting
    }
}

/// Anything that can turn a payload into a predicted chance.
#[allow(async_fn_in_trait)]
pub trait PredictionService {
    async fn predict(&self, payload: &FormPayload) -> Result<f64, PredictorError>;
}

/// Sink for busy-state transitions, e.g. a UI signal.
pub trait BusyState {
    fn set_state(&self, state: SubmitState);
}

/// Holds the busy state for its lifetime and returns it to `Idle` on drop,
/// whichever way the submission ends.
struct BusyGuard<'a, B: BusyState> {
    busy: &'a B,
}

impl<'a, B: BusyState> BusyGuard<'a, B> {
    fn engage(busy: &'a B) -> Self {
        busy.set_state(SubmitState::Submitting);
        Self { busy }
    }
}

impl<B: BusyState> Drop for BusyGuard<'_, B> {
    fn drop(&mut self) {
        self.busy.set_state(SubmitState::Idle);
    }
}

/// Runs one submission: marks the form busy, sends exactly one request and
/// maps whatever comes back (or doesn't) to an [`Outcome`].
pub async fn submit<S, B>(service: &S, busy: &B, payload: FormPayload) -> Outcome
where
    S: PredictionService,
    B: BusyState,
{
    let _guard = BusyGuard::engage(busy);
    let result = service.predict(&payload).await;
    Outcome::from_result(result)
}
