use std::time::Instant;

use super::{
    errors::ClientError,
    form::GenerationForm,
    models::generation_request::GenerationRequest,
    rate_limiter::RateLimiter,
    state::{self, DisplayState, ProxyResponse},
    transport::GenerationTransport,
};

/// Drives one form: guards each submission, issues the request and keeps the
/// resulting display state.
pub struct FormController<T: GenerationTransport> {
    pub form: GenerationForm,
    limiter: RateLimiter,
    state: DisplayState,
    transport: T,
}

impl<T: GenerationTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self::with_limiter(transport, RateLimiter::default())
    }

    pub fn with_limiter(transport: T, limiter: RateLimiter) -> Self {
        Self {
            form: GenerationForm::default(),
            limiter,
            state: DisplayState::Idle,
            transport,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs the submission guards. On success the state is `Loading`, the
    /// attempt is counted against the rate limit and the payload to send is
    /// returned. Guard failures leave an error on display and send nothing.
    pub fn begin_submit(&mut self, now: Instant) -> Result<GenerationRequest, ClientError> {
        if self.state.is_loading() {
            return Err(ClientError::InFlight);
        }

        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(e) => return Err(self.reject(e)),
        };

        if !self.limiter.check(now) {
            return Err(self.reject(ClientError::RateLimited));
        }

        self.limiter.record(now);
        self.state = DisplayState::Loading;

        Ok(request)
    }

    pub fn finish_submit(&mut self, result: Result<ProxyResponse, ClientError>) -> &DisplayState {
        apply_result(&mut self.state, result);
        &self.state
    }

    /// Cancel safe: dropping the future mid-request puts the state back to
    /// `Idle` so the form can be submitted again.
    pub async fn submit(&mut self) -> &DisplayState {
        let request = match self.begin_submit(Instant::now()) {
            Ok(request) => request,
            Err(_) => return &self.state,
        };

        tracing::debug!(num_images = request.num_images, size = %request.size, "submitting generation");

        let mut pending = PendingSubmit {
            state: &mut self.state,
        };
        let result = self.transport.send(&request).await;
        apply_result(&mut *pending.state, result);
        drop(pending);

        &self.state
    }

    fn reject(&mut self, e: ClientError) -> ClientError {
        tracing::debug!(error = %e, "submission rejected");
        self.state = e.clone().into();
        e
    }
}

fn apply_result(state: &mut DisplayState, result: Result<ProxyResponse, ClientError>) {
    *state = state::transition(result);

    if let Some(message) = state.error() {
        tracing::warn!(%message, "generation failed");
    }
}

/// Held across the transport await. A state still `Loading` on drop means the
/// request never finished.
struct PendingSubmit<'a> {
    state: &'a mut DisplayState,
}

impl Drop for PendingSubmit<'_> {
    fn drop(&mut self) {
        if self.state.is_loading() {
            tracing::debug!("submission dropped before completion");
            *self.state = DisplayState::Idle;
        }
    }
}
