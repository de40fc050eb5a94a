use super::*;
use crate::llm::types::ChatResponse;
use std::sync::Mutex;

// =========================================================================
// MockLlm
// =========================================================================

struct MockLlm {
    responses: Mutex<Vec<Result<ChatResponse, LlmError>>>,
    seen: Mutex<Vec<(u32, String, Vec<Message>)>>,
}

impl MockLlm {
    fn new(responses: Vec<Result<ChatResponse, LlmError>>) -> Self {
        Self { responses: Mutex::new(responses), seen: Mutex::new(Vec::new()) }
    }

    fn replying(text: &str) -> Self {
        Self::new(vec![Ok(reply(text))])
    }
}

fn reply(text: &str) -> ChatResponse {
    ChatResponse {
        text: text.into(),
        model: "mock".into(),
        stop_reason: "end_turn".into(),
        input_tokens: 10,
        output_tokens: 20,
    }
}

#[async_trait::async_trait]
impl LlmChat for MockLlm {
    async fn chat(&self, max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.seen
            .lock()
            .unwrap()
            .push((max_tokens, system.to_string(), messages.to_vec()));
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() { Ok(reply("export default function Done() { return null; }")) } else { responses.remove(0) }
    }

    fn model(&self) -> &str {
        "mock"
    }
}

fn request(prompt: &str) -> GenerateRequest {
    GenerateRequest { prompt: prompt.into(), device_type: DEFAULT_DEVICE_TYPE.into() }
}

// =========================================================================
// build_system_prompt
// =========================================================================

#[test]
fn system_prompt_names_device_context() {
    let prompt = build_system_prompt("mobile");
    assert!(prompt.contains("DEVICE CONTEXT: mobile\n"));
}

#[test]
fn system_prompt_pins_output_contract() {
    let prompt = build_system_prompt("web");
    assert!(prompt.contains("lucide-react"));
    assert!(prompt.contains("@/components/ui/*"));
    assert!(prompt.contains("Tailwind"));
    assert!(prompt.contains("Export the component as `default`"));
    assert!(prompt.contains("Do NOT wrap it in markdown code fences"));
}

#[test]
fn system_prompt_example_keeps_indentation() {
    let prompt = build_system_prompt("web");
    assert!(prompt.contains("export default function Hero() {\n  return (\n    <div"));
}

// =========================================================================
// GenerateRequest
// =========================================================================

#[test]
fn request_device_type_defaults_to_web() {
    let req: GenerateRequest = serde_json::from_str(r#"{"prompt":"a login form"}"#).unwrap();
    assert_eq!(req.device_type, "web");
}

#[test]
fn request_requires_prompt() {
    assert!(serde_json::from_str::<GenerateRequest>(r#"{"device_type":"mobile"}"#).is_err());
}

// =========================================================================
// GenerateError
// =========================================================================

#[test]
fn error_codes_and_retry_hints() {
    assert_eq!(GenerateError::LlmNotConfigured.error_code(), "E_LLM_NOT_CONFIGURED");
    assert_eq!(GenerateError::EmptyPrompt.error_code(), "E_EMPTY_PROMPT");
    assert_eq!(GenerateError::EmptyResponse.error_code(), "E_EMPTY_RESPONSE");
    let upstream = GenerateError::from(LlmError::ApiResponse { status: 503, body: String::new() });
    assert_eq!(upstream.error_code(), "E_LLM_ERROR");
    assert!(upstream.retryable());
    assert!(!GenerateError::from(LlmError::ApiParse("x".into())).retryable());
    assert!(!GenerateError::EmptyPrompt.retryable());
}

// =========================================================================
// generate (with MockLlm)
// =========================================================================

#[tokio::test]
async fn generate_builds_preview_from_fenced_reply() {
    let mock = Arc::new(MockLlm::replying(
        "Sure!\n```tsx\nexport default function Pricing() { return <div>$9</div>; }\n```",
    ));
    let llm: Arc<dyn LlmChat> = mock.clone();
    let preview = generate(Some(&llm), GenerateSettings::default(), &request("a pricing card"))
        .await
        .unwrap();
    assert_eq!(preview.code, "export default function Pricing() { return <div>$9</div>; }");
    assert!(preview.html_preview.contains("<title>Pricing preview</title>"));
}

#[tokio::test]
async fn generate_sends_system_and_user_prompt() {
    let mock = Arc::new(MockLlm::new(vec![]));
    let llm: Arc<dyn LlmChat> = mock.clone();
    let req = GenerateRequest { prompt: "  a navbar  ".into(), device_type: "tablet".into() };
    generate(Some(&llm), GenerateSettings { max_tokens: 512 }, &req)
        .await
        .unwrap();

    let seen = mock.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (max_tokens, system, messages) = &seen[0];
    assert_eq!(*max_tokens, 512);
    assert!(system.contains("DEVICE CONTEXT: tablet"));
    assert_eq!(messages, &vec![Message::user("a navbar")]);
}

#[tokio::test]
async fn generate_blank_device_type_uses_default() {
    let mock = Arc::new(MockLlm::new(vec![]));
    let llm: Arc<dyn LlmChat> = mock.clone();
    let req = GenerateRequest { prompt: "a footer".into(), device_type: " ".into() };
    generate(Some(&llm), GenerateSettings::default(), &req)
        .await
        .unwrap();
    assert!(mock.seen.lock().unwrap()[0].1.contains("DEVICE CONTEXT: web"));
}

#[tokio::test]
async fn generate_without_llm_is_not_configured() {
    let err = generate(None, GenerateSettings::default(), &request("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::LlmNotConfigured));
}

#[tokio::test]
async fn generate_rejects_blank_prompt_without_calling_model() {
    let mock = Arc::new(MockLlm::new(vec![]));
    let llm: Arc<dyn LlmChat> = mock.clone();
    let err = generate(Some(&llm), GenerateSettings::default(), &request(" \n "))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::EmptyPrompt));
    assert!(mock.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn generate_propagates_llm_error() {
    let mock = Arc::new(MockLlm::new(vec![Err(LlmError::ApiResponse { status: 429, body: "slow down".into() })]));
    let llm: Arc<dyn LlmChat> = mock;
    let err = generate(Some(&llm), GenerateSettings::default(), &request("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::LlmError(LlmError::ApiResponse { status: 429, .. })));
}

#[tokio::test]
async fn generate_empty_reply_is_error() {
    let mock = Arc::new(MockLlm::replying("  \n"));
    let llm: Arc<dyn LlmChat> = mock;
    let err = generate(Some(&llm), GenerateSettings::default(), &request("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::EmptyResponse));
}

#[tokio::test]
async fn generate_broken_code_still_yields_preview() {
    let mock = Arc::new(MockLlm::replying("export default function Broken( { return <div>"));
    let llm: Arc<dyn LlmChat> = mock;
    let preview = generate(Some(&llm), GenerateSettings::default(), &request("x"))
        .await
        .unwrap();
    assert_eq!(preview.code, "export default function Broken( { return <div>");
    assert!(preview.html_preview.contains("data-boundary"));
}
