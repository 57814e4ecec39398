pub mod client;
pub mod models;
pub mod response;

pub use client::OpenRouterClient;
pub use models::RequestBody;

use crate::error::GenerationError;
use async_trait::async_trait;

/// Anything that turns instruction text into generated text.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, instruction: &str) -> Result<String, GenerationError>;
}

#[async_trait]
impl<T: GenerationService + ?Sized> GenerationService for Box<T> {
    async fn generate(&self, instruction: &str) -> Result<String, GenerationError> {
        (**self).generate(instruction).await
    }
}

#[async_trait]
impl<T: GenerationService + ?Sized> GenerationService for std::sync::Arc<T> {
    async fn generate(&self, instruction: &str) -> Result<String, GenerationError> {
        (**self).generate(instruction).await
    }
}
