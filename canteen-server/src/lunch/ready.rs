use parking_lot::RwLock;
use shared::models::LunchReady;

/// "Lunch is served" flag with the time it last changed
#[derive(Debug, Default)]
pub struct LunchReadyFlag {
    state: RwLock<LunchReady>,
}

impl LunchReadyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> LunchReady {
        *self.state.read()
    }

    pub fn set(&self, ready: bool, now: i64) -> LunchReady {
        let mut state = self.state.write();
        state.is_ready = ready;
        state.updated_at = Some(now);
        tracing::info!(ready, "Lunch ready flag updated");
        *state
    }
}
