use investment_researcher::template::{ASSISTANT_NAME, DESCRIPTION, INSTRUCTIONS};
use investment_researcher::{
    AssistantSettings, DEFAULT_MODEL, ModelProvider, REPORT_FORMAT, ResearchAssistantError,
    create_investment_research_assistant, create_investment_research_assistant_with,
};
use proptest::prelude::*;
use researcher_core::{Llm, ResearcherError};
use researcher_model::MockLlm;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out fresh `MockLlm`s and remembers what it was asked for.
#[derive(Default)]
struct RecordingProvider {
    calls: AtomicUsize,
    fail_on_call: Option<usize>,
    reply: Option<String>,
}

impl RecordingProvider {
    fn failing_on(call: usize) -> Self {
        Self { fail_on_call: Some(call), ..Self::default() }
    }

    fn replying(text: &str) -> Self {
        Self { reply: Some(text.to_string()), ..Self::default() }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ModelProvider for RecordingProvider {
    fn create_model(&self, model: &str, _api_key: &str) -> researcher_core::Result<Arc<dyn Llm>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_call == Some(call) {
            return Err(ResearcherError::Model("connection refused by api.groq.com".to_string()));
        }
        let mut mock = MockLlm::new(model);
        if let Some(reply) = &self.reply {
            mock = mock.with_text(reply.clone());
        }
        Ok(Arc::new(mock))
    }
}

#[test]
fn empty_key_fails_before_any_construction() {
    let provider = RecordingProvider::default();
    let err = create_investment_research_assistant_with(&AssistantSettings::default(), &provider)
        .unwrap_err();

    assert!(matches!(err, ResearchAssistantError::InvalidCredential(_)));
    assert!(err.to_string().contains("not provided"));
    assert_eq!(provider.calls(), 0);
}

#[test]
fn empty_key_fails_with_the_groq_provider_too() {
    let err = create_investment_research_assistant(&AssistantSettings::new("")).unwrap_err();
    assert!(matches!(err, ResearchAssistantError::InvalidCredential(_)));
}

#[test]
fn whitespace_key_is_accepted() {
    let provider = RecordingProvider::default();
    let assistant =
        create_investment_research_assistant_with(&AssistantSettings::new("   "), &provider);
    assert!(assistant.is_ok());
}

#[test]
fn defaults_bind_default_model_and_debug_mode() {
    let provider = RecordingProvider::default();
    let assistant =
        create_investment_research_assistant_with(&AssistantSettings::new("gsk_test"), &provider)
            .unwrap();

    assert_eq!(assistant.model_name(), DEFAULT_MODEL);
    assert_eq!(assistant.model_name(), "llama-3.1-70b-versatile");
    assert!(assistant.debug_mode());
}

#[test]
fn real_groq_client_is_built_without_network() {
    let assistant = create_investment_research_assistant(
        &AssistantSettings::new("gsk_test").with_model("llama-3.1-8b-instant").with_debug_mode(false),
    )
    .unwrap();

    assert_eq!(assistant.model_name(), "llama-3.1-8b-instant");
    assert!(!assistant.debug_mode());
}

#[test]
fn assistant_carries_the_fixed_persona() {
    let provider = RecordingProvider::default();
    let assistant =
        create_investment_research_assistant_with(&AssistantSettings::new("gsk_test"), &provider)
            .unwrap();

    assert_eq!(assistant.name(), ASSISTANT_NAME);
    assert_eq!(assistant.description(), Some(DESCRIPTION));
    assert_eq!(assistant.instructions(), INSTRUCTIONS);
    assert!(assistant.markdown());
    assert!(assistant.add_datetime_to_instructions());
    assert_eq!(assistant.additional_system_prompt(), Some(REPORT_FORMAT));
    assert!(assistant.system_prompt().ends_with(include_str!("fixtures/report_format.md")));
}

#[test]
fn builds_two_independent_model_clients() {
    let provider = RecordingProvider::default();
    create_investment_research_assistant_with(&AssistantSettings::new("gsk_test"), &provider)
        .unwrap();
    assert_eq!(provider.calls(), 2);
}

#[test]
fn first_construction_failure_is_wrapped() {
    let provider = RecordingProvider::failing_on(1);
    let err =
        create_investment_research_assistant_with(&AssistantSettings::new("gsk_test"), &provider)
            .unwrap_err();

    match err {
        ResearchAssistantError::Configuration(message) => {
            assert!(message.contains("connection refused by api.groq.com"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(provider.calls(), 1);
}

#[test]
fn second_construction_failure_is_wrapped() {
    let provider = RecordingProvider::failing_on(2);
    let err =
        create_investment_research_assistant_with(&AssistantSettings::new("gsk_test"), &provider)
            .unwrap_err();

    assert!(err.to_string().starts_with("Failed to create assistant: "));
    assert!(err.to_string().contains("connection refused by api.groq.com"));
}

#[test]
fn invalid_model_name_becomes_configuration_error() {
    let err = create_investment_research_assistant(
        &AssistantSettings::new("gsk_test").with_model(""),
    )
    .unwrap_err();
    assert!(matches!(err, ResearchAssistantError::Configuration(msg) if msg.contains("model name")));
}

#[test]
fn repeated_calls_produce_independent_handles() {
    let provider = RecordingProvider::default();
    let settings = AssistantSettings::new("gsk_test");

    let first = create_investment_research_assistant_with(&settings, &provider).unwrap();
    let second = create_investment_research_assistant_with(&settings, &provider).unwrap();

    assert_eq!(first.name(), second.name());
    assert_eq!(first.model_name(), second.model_name());
    assert_eq!(first.instructions(), second.instructions());
    assert_eq!(first.additional_system_prompt(), second.additional_system_prompt());
    assert_eq!(provider.calls(), 4);
}

#[tokio::test]
async fn assistant_runs_against_its_model() {
    let provider = RecordingProvider::replying("## NVIDIA: Investment Report");
    let assistant =
        create_investment_research_assistant_with(&AssistantSettings::new("gsk_test"), &provider)
            .unwrap();

    let report = assistant.run("NVDA\n\nRevenue grew 122% year over year.").await.unwrap();
    assert_eq!(report, "## NVIDIA: Investment Report");
}

proptest! {
    #[test]
    fn any_non_empty_key_and_model_are_forwarded(
        key in "[A-Za-z0-9_ ]{1,48}",
        model in "[a-z0-9.-]{1,32}",
        debug in any::<bool>(),
    ) {
        let provider = RecordingProvider::default();
        let settings = AssistantSettings::new(key).with_model(model.clone()).with_debug_mode(debug);
        let assistant = create_investment_research_assistant_with(&settings, &provider).unwrap();

        prop_assert_eq!(assistant.model_name(), model.as_str());
        prop_assert_eq!(assistant.debug_mode(), debug);
        prop_assert_eq!(provider.calls(), 2);
    }
}
