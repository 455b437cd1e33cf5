//! Tests for DashScope wire format conversions.

use dashgate_core::{GenerationOptions, Prompt};
use dashgate_error::DashScopeErrorKind;
use dashgate_models::conversions;
use dashgate_models::dto::GenerationReply;

fn custom_options() -> GenerationOptions {
    GenerationOptions::builder()
        .top_p(0.7)
        .top_k(50u32)
        .temperature(0.8)
        .build()
        .expect("Valid GenerationOptions")
}

#[test]
fn plain_prompt_omits_parameters() {
    let prompt = Prompt::new("你好，介绍下你自己吧。");

    let request =
        conversions::to_generation_request(&prompt, "qwen-plus", None, false).expect("Valid request");

    assert!(request.parameters().is_none());

    let value = serde_json::to_value(&request).expect("Serializable request");
    assert_eq!(value["model"], "qwen-plus");
    assert_eq!(value["input"]["messages"][0]["role"], "user");
    assert_eq!(value["input"]["messages"][0]["content"], "你好，介绍下你自己吧。");
    assert!(value.get("parameters").is_none());
}

#[test]
fn explicit_options_reach_the_wire() {
    let prompt = Prompt::with_options("hi", custom_options());

    let request =
        conversions::to_generation_request(&prompt, "qwen-plus", None, false).expect("Valid request");

    let value = serde_json::to_value(&request).expect("Serializable request");
    assert_eq!(value["parameters"]["result_format"], "message");
    assert_eq!(value["parameters"]["top_k"], 50);
    assert!((value["parameters"]["top_p"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert!((value["parameters"]["temperature"].as_f64().unwrap() - 0.8).abs() < 1e-6);
    assert!(value["parameters"].get("incremental_output").is_none());
}

#[test]
fn request_options_override_configured_defaults() {
    let prompt = Prompt::with_options("hi", custom_options());
    let defaults = GenerationOptions::builder()
        .top_p(0.95)
        .temperature(0.1)
        .build()
        .expect("Valid GenerationOptions");

    let request = conversions::to_generation_request(&prompt, "qwen-plus", Some(&defaults), false)
        .expect("Valid request");

    let parameters = request.parameters().as_ref().expect("Parameters present");
    assert_eq!(*parameters.top_p(), Some(0.7));
    assert_eq!(*parameters.top_k(), Some(50));
    assert_eq!(*parameters.temperature(), Some(0.8));
}

#[test]
fn configured_defaults_fill_unset_options() {
    let prompt = Prompt::new("hi");
    let defaults = GenerationOptions::builder()
        .temperature(0.3)
        .build()
        .expect("Valid GenerationOptions");

    let request = conversions::to_generation_request(&prompt, "qwen-plus", Some(&defaults), false)
        .expect("Valid request");

    let parameters = request.parameters().as_ref().expect("Parameters present");
    assert_eq!(*parameters.temperature(), Some(0.3));
    assert_eq!(*parameters.top_p(), None);
}

#[test]
fn streaming_requests_ask_for_incremental_output() {
    let prompt = Prompt::new("hi");

    let request =
        conversions::to_generation_request(&prompt, "qwen-plus", None, true).expect("Valid request");

    let parameters = request.parameters().as_ref().expect("Parameters present");
    assert_eq!(*parameters.incremental_output(), Some(true));
    assert_eq!(parameters.result_format(), "message");
}

#[test]
fn reply_maps_to_chat_response() {
    let reply: GenerationReply = serde_json::from_str(
        r#"{
            "output": {
                "choices": [
                    {"message": {"role": "assistant", "content": "你好，我是助手"}, "finish_reason": "stop"}
                ]
            },
            "usage": {"input_tokens": 8, "output_tokens": 12, "total_tokens": 20},
            "request_id": "req-123"
        }"#,
    )
    .expect("Valid reply JSON");

    let response = conversions::from_reply(&reply).expect("Valid response");

    assert_eq!(response.first_content(), Some("你好，我是助手"));
    assert_eq!(
        response.generations()[0].finish_reason().as_deref(),
        Some("stop")
    );
    let usage = response.usage().expect("Usage present");
    assert_eq!(*usage.total_tokens(), 20);
    assert_eq!(response.request_id().as_deref(), Some("req-123"));
}

#[test]
fn null_finish_reason_string_is_dropped() {
    let reply: GenerationReply = serde_json::from_str(
        r#"{"output": {"choices": [{"message": {"role": "assistant", "content": "你"}, "finish_reason": "null"}]}}"#,
    )
    .expect("Valid reply JSON");

    let response = conversions::from_reply(&reply).expect("Valid response");

    assert_eq!(response.generations()[0].finish_reason(), &None);
}

#[test]
fn empty_choices_is_an_error() {
    let reply: GenerationReply =
        serde_json::from_str(r#"{"output": {"choices": []}}"#).expect("Valid reply JSON");

    let err = conversions::from_reply(&reply).expect_err("Empty reply rejected");
    assert_eq!(err.kind, DashScopeErrorKind::EmptyReply);
}

#[test]
fn event_payload_parses_reply_events() {
    let payload = r#"{"output": {"choices": [{"message": {"role": "assistant", "content": "好"}, "finish_reason": "null"}]}}"#;

    let response = conversions::from_event_payload(payload).expect("Valid event");
    assert_eq!(response.first_content(), Some("好"));
}

#[test]
fn event_payload_surfaces_error_bodies() {
    let payload = r#"{"code": "Throttling", "message": "Requests throttled", "request_id": "req-9"}"#;

    let err = conversions::from_event_payload(payload).expect_err("Error event rejected");
    assert!(matches!(err.kind, DashScopeErrorKind::Stream(_)));
}

#[test]
fn event_payload_rejects_garbage() {
    let err = conversions::from_event_payload("not json").expect_err("Garbage rejected");
    assert!(matches!(err.kind, DashScopeErrorKind::Parse(_)));
}
