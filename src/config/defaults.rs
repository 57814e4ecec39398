pub const DEFAULT_API_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

pub const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

pub fn default_request_timeout() -> u64 {
    120
}
