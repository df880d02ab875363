use async_trait::async_trait;
use std::fmt::Debug;

use super::{LlmRequest, LlmResponse};
use crate::domain::DomainError;

/// Trait for the text-generation collaborator.
///
/// Implementations must map their failures onto the infrastructure variants
/// of [`DomainError`] (`Timeout`, `Network`, `UpstreamHttp`); the caller
/// treats every provider fault as fatal.
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Send a chat completion request and return the raw generated text
    /// together with the stop reason and the model that produced it.
    async fn generate(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Scriptable provider: returns queued results in order, one per call.
    #[derive(Debug, Default)]
    pub struct MockLlmProvider {
        script: Mutex<VecDeque<Result<LlmResponse, DomainError>>>,
        calls: AtomicU32,
    }

    impl MockLlmProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn then_ok(self, response: LlmResponse) -> Self {
            self.script.lock().unwrap().push_back(Ok(response));
            self
        }

        pub fn then_err(self, error: DomainError) -> Self {
            self.script.lock().unwrap().push_back(Err(error));
            self
        }

        pub fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for MockLlmProvider {
        async fn generate(
            &self,
            _model: &str,
            _request: LlmRequest,
        ) -> Result<LlmResponse, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(DomainError::network("mock script exhausted")))
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }
}
