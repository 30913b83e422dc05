use crate::core::models::SettlementResult;

/// Lifecycle of the single settlement fetch the page can have in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(SettlementResult),
    Failure(String),
}

/// A rejected fetch as the page sees it: the HTTP status and the server's error text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchFailure {
    pub status: u16,
    pub error: String,
}

impl FetchFailure {
    pub fn message(&self) -> String {
        format!("Failed to fetch settlement data ({}: {})", self.status, self.error)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettlementForm {
    pub merchant_id: String,
    pub date: String,
    state: FetchState,
}

impl SettlementForm {
    pub fn new(merchant_id: impl Into<String>, date: impl Into<String>) -> Self {
        SettlementForm {
            merchant_id: merchant_id.into(),
            date: date.into(),
            state: FetchState::Idle,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    /// Starts a fetch, discarding any previous result or error. Returns
    /// `false` without changing anything when a fetch is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.state = FetchState::Loading;
        true
    }

    /// Settles the in-flight fetch. Ignored unless a fetch is loading.
    pub fn resolve(&mut self, outcome: Result<SettlementResult, FetchFailure>) {
        if !self.is_loading() {
            return;
        }
        self.state = match outcome {
            Ok(result) => FetchState::Success(result),
            Err(failure) => FetchState::Failure(failure.message()),
        };
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn settlement(&self) -> Option<&SettlementResult> {
        match &self.state {
            FetchState::Success(result) => Some(result),
            _ => None,
        }
    }
}
