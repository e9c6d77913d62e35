//! Application constants and configuration

pub const APP_NAME: &str = "Question Answering Assistant";
pub const WINDOW_TITLE: &str = "Question Answering System";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_MODEL_ID: &str = "deepset/bert-base-cased-squad2";
pub const DEFAULT_INFERENCE_URL: &str = "https://router.huggingface.co/hf-inference";
pub const DEFAULT_HUB_URL: &str = "https://huggingface.co";
pub const DEFAULT_TOKEN_ENV: &str = "HF_TOKEN";
/// Overrides the configured model id for a single run
pub const MODEL_OVERRIDE_ENV: &str = "QA_MODEL";

/// Pipeline tag the hub reports for extractive QA models
pub const QA_PIPELINE_TAG: &str = "question-answering";

/// Answers scoring below this get an advisory
pub const LOW_CONFIDENCE_THRESHOLD: f32 = 0.5;

pub const DEFAULT_CONTEXT: &str = "Albert Einstein was a renowned physicist who developed the theory of relativity. \
Born in Germany in 1879, he is best known for his mass-energy equivalence formula E = mc². \
Einstein won the Nobel Prize in Physics in 1921 for his services to theoretical physics.";

pub const QUESTION_PLACEHOLDER: &str = "E.g., When did Einstein win the Nobel Prize?";

pub const INSTRUCTIONS: &[&str] = &[
    "Enter a context paragraph in the text area",
    "Ask a specific question about the context",
    "Click 'Get Answer' to see the results",
];

pub const FOOTER_ATTRIBUTION: &str =
    "Presented to you by Shamitha Reddy N and Team (Powered by Hugging Face Transformers)";

pub const MSG_MISSING_INPUT: &str = "Please provide both a context and a question.";
pub const MSG_LOW_CONFIDENCE: &str =
    "The confidence is relatively low. The answer might not be entirely accurate.";
pub const MSG_LOAD_FAILED: &str =
    "Failed to load the Question Answering model. Please check your installation.";
