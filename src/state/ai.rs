#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

/// State for the AI assistant exchange.
///
/// At most one question is in flight at a time: [`AiState::begin_ask`]
/// refuses to start a second submission while `pending` is set, and the
/// submit button is disabled in that state.
#[derive(Clone, Debug, Default)]
pub struct AiState {
    pub question: String,
    pub response: Option<String>,
    pub pending: bool,
}

impl AiState {
    /// Start a submission if there is anything to submit.
    ///
    /// Returns the trimmed question and enters the pending state, or `None`
    /// when the input is empty/whitespace-only or a question is already in
    /// flight. `None` means no outbound call happens.
    pub fn begin_ask(&mut self) -> Option<String> {
        if self.pending {
            return None;
        }
        let question = self.question.trim();
        if question.is_empty() {
            return None;
        }
        self.pending = true;
        Some(question.to_owned())
    }

    /// Store a successful response and leave the pending state.
    pub fn finish_ok(&mut self, response: String) {
        self.response = Some(response);
        self.pending = false;
    }

    /// Leave the pending state after a failure.
    ///
    /// Any previously displayed response is left untouched; the failure
    /// surfaces as a transient toast instead.
    pub fn finish_err(&mut self) {
        self.pending = false;
    }
}
