//! Wire-format tests for the Gemini client, plus one live call.
//!
//! The live test needs `GEMINI_API_KEY` in the environment.
//!
//! Run with: `cargo test -p laudo-drafting --test gemini -- --ignored`

use laudo_drafting::clean::clean_html_response;
use laudo_drafting::error::DraftingError;
use laudo_drafting::gemini::{
    GeminiClient, GeminiConfig, GenerateContentRequest, GenerateContentResponse,
};
use serde_json::json;

#[test]
fn strips_code_fences() {
    assert_eq!(clean_html_response("```html\n<p>Laudo</p>\n```\n"), "<p>Laudo</p>");
    assert_eq!(clean_html_response("  <p>Laudo</p>  "), "<p>Laudo</p>");
    assert_eq!(clean_html_response("<p>a</p>```"), "<p>a</p>");
}

#[test]
fn request_shape() {
    let request = GenerateContentRequest::new("sistema", "pergunta", 0.2);
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["systemInstruction"], json!({ "parts": [{ "text": "sistema" }] }));
    assert_eq!(value["contents"], json!([{ "role": "user", "parts": [{ "text": "pergunta" }] }]));
    let temperature = value["generationConfig"]["temperature"].as_f64().unwrap();
    assert!((temperature - 0.2).abs() < 1e-6);
}

#[test]
fn response_text_concatenates_parts() {
    let raw = json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": "<p>Fígado" }, { "text": " normal.</p>" }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 10 }
    });
    let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(response.text().as_deref(), Some("<p>Fígado normal.</p>"));
}

#[test]
fn response_without_text_is_empty() {
    let blocked: GenerateContentResponse =
        serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } })).unwrap();
    assert!(blocked.text().is_none());

    let no_content: GenerateContentResponse =
        serde_json::from_value(json!({ "candidates": [{ "finishReason": "MAX_TOKENS" }] })).unwrap();
    assert!(no_content.text().is_none());
}

#[test]
fn missing_api_key_is_a_config_error() {
    let err = GeminiClient::new(GeminiConfig::new("  ")).err().unwrap();
    assert!(matches!(err, DraftingError::Config(_)));
}

#[test]
#[ignore]
fn live_suggestion() {
    use jiff::civil::date;
    use laudo_core::models::patient::PatientDetails;
    use laudo_drafting::{DraftingService, SuggestionRequest};

    let key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY not set");
    let client = GeminiClient::new(GeminiConfig::new(key)).unwrap();
    let request = SuggestionRequest {
        query: "pedrinha na vesícula".into(),
        current_report: "<p>Vesícula biliar com forma e dimensões normais.</p>".into(),
        patient: PatientDetails::new(date(2025, 3, 1)),
    };
    let suggestion = client.suggest(&request).unwrap();
    println!("{suggestion}");
    assert!(!suggestion.is_empty());
}
