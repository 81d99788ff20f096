use openai_api_rs::v1::chat_completion::{Content, MessageRole};
use serde_json::json;

use pagebrief::core::models::{Language, LengthInput, PageText, SessionOptions, SummaryRequest};
use pagebrief::summarizer::client::extract_message_content;
use pagebrief::summarizer::{LlmClient, NO_SUMMARY_PLACEHOLDER};

fn request(language: Language, length: &str, text: &str) -> SummaryRequest {
    let options = SessionOptions {
        language: Some(language),
        length: LengthInput::from_raw(length),
        ..SessionOptions::default()
    };
    SummaryRequest::new(PageText::new(text).unwrap(), &options).unwrap()
}

fn text_of(content: &Content) -> &str {
    match content {
        Content::Text(t) => t,
        Content::ImageUrl(_) => panic!("unexpected image content"),
    }
}

#[test]
fn test_prompt_has_fixed_system_persona() {
    let client = LlmClient::new("test_key".to_string(), None, None);
    let prompt = client.build_prompt(&request(Language::English, "", "page body"));

    assert_eq!(prompt.len(), 2);
    assert!(matches!(prompt[0].role, MessageRole::system));
    assert_eq!(text_of(&prompt[0].content), "You are a helpful assistant.");
    assert!(matches!(prompt[1].role, MessageRole::user));
}

#[test]
fn test_prompt_embeds_language_ceiling_and_source_text() {
    let client = LlmClient::new("test_key".to_string(), None, None);
    let source = "Le contenu complet de la page web.";
    let prompt = client.build_prompt(&request(Language::French, "80", source));

    let user = text_of(&prompt[1].content);
    assert!(user.contains("French"));
    assert!(user.contains("NO more than 80 words"));
    assert!(user.contains("LESS"), "ceiling must read as an upper bound");
    assert!(user.ends_with(source), "full source text comes last");
}

#[test]
fn test_prompt_uses_default_ceiling_for_empty_length() {
    let client = LlmClient::new("test_key".to_string(), None, None);
    let prompt = client.build_prompt(&request(Language::German, "", "Inhalt"));
    assert!(text_of(&prompt[1].content).contains("NO more than 150 words"));
}

#[test]
fn test_empty_service_content_becomes_placeholder() {
    let bodies = [
        json!({ "choices": [{ "message": { "role": "assistant", "content": "" } }] }),
        json!({ "choices": [{ "message": { "role": "assistant", "content": "   " } }] }),
        json!({ "choices": [{ "message": { "role": "assistant" } }] }),
        json!({ "choices": [] }),
    ];
    for body in bodies {
        let rendered = extract_message_content(&body)
            .unwrap_or_else(|| NO_SUMMARY_PLACEHOLDER.to_string());
        assert_eq!(rendered, "No summary generated", "body: {body}");
    }
}

#[test]
fn test_service_reply_passes_through_verbatim() {
    let body = json!({
        "choices": [{ "message": { "role": "assistant", "content": "Résumé de la page." } }]
    });
    assert_eq!(
        extract_message_content(&body).as_deref(),
        Some("Résumé de la page.")
    );
}
