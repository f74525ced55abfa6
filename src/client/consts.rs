pub const DEFAULT_BASE_URL: &str = "wss://generativelanguage.googleapis.com/ws";

pub const BIDI_ENDPOINT: &str =
    "google.ai.generativelanguage.v1alpha.GenerativeService.BidiGenerateContent";

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const DEFAULT_CAPACITY: usize = 1024;
