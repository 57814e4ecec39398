use crate::api::GenerationService;
use crate::error::{GenerationError, Result};
use crate::prompt::build_instruction;
use crate::tools::{ToolId, ToolInput};

/// Builds the instruction for a tool input and hands it to the service.
///
/// Holds no state of its own; concurrent dispatches are independent.
pub struct Dispatcher<S> {
    service: S,
}

impl<S: GenerationService> Dispatcher<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn instruction_for(&self, input: &ToolInput) -> String {
        build_instruction(input)
    }

    /// One call to the service. The text comes back untouched and so does
    /// any failure.
    pub async fn dispatch(&self, input: &ToolInput) -> std::result::Result<String, GenerationError> {
        let instruction = build_instruction(input);
        self.service.generate(&instruction).await
    }

    /// Like `dispatch`, for callers that carry the tool selection separately
    /// from the input.
    pub async fn dispatch_as(&self, tool: ToolId, input: &ToolInput) -> Result<String> {
        input.ensure_tool(tool)?;
        Ok(self.dispatch(input).await?)
    }
}
