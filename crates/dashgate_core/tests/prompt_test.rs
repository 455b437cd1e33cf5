//! Tests for core prompt and options types.

use dashgate_core::{ChatResponse, Generation, GenerationOptions, Prompt, Role};

#[test]
fn prompt_from_text_wraps_single_user_message() {
    let prompt = Prompt::new("你好，介绍下你自己吧。");

    assert_eq!(prompt.messages().len(), 1);
    assert_eq!(*prompt.messages()[0].role(), Role::User);
    assert_eq!(prompt.messages()[0].content(), "你好，介绍下你自己吧。");
    assert!(prompt.options().is_none());
}

#[test]
fn prompt_with_options_carries_options() {
    let options = GenerationOptions::builder()
        .temperature(0.8)
        .build()
        .expect("Valid GenerationOptions");
    let prompt = Prompt::with_options("hi", options.clone());

    assert_eq!(prompt.options().as_ref(), Some(&options));
}

#[test]
fn options_builder_defaults_to_unset() {
    let options = GenerationOptions::builder()
        .build()
        .expect("Valid GenerationOptions");

    assert!(options.is_empty());
    assert_eq!(*options.top_p(), None);
    assert_eq!(*options.top_k(), None);
    assert_eq!(*options.temperature(), None);
}

#[test]
fn overlay_prefers_request_options_over_defaults() {
    let request = GenerationOptions::builder()
        .top_p(0.7)
        .top_k(50u32)
        .temperature(0.8)
        .build()
        .expect("Valid GenerationOptions");
    let defaults = GenerationOptions::builder()
        .top_p(0.9)
        .temperature(0.1)
        .build()
        .expect("Valid GenerationOptions");

    let merged = request.overlay(&defaults);

    assert_eq!(*merged.top_p(), Some(0.7));
    assert_eq!(*merged.top_k(), Some(50));
    assert_eq!(*merged.temperature(), Some(0.8));
}

#[test]
fn overlay_fills_unset_fields_from_defaults() {
    let request = GenerationOptions::default();
    let defaults = GenerationOptions::builder()
        .top_k(20u32)
        .build()
        .expect("Valid GenerationOptions");

    let merged = request.overlay(&defaults);

    assert_eq!(*merged.top_k(), Some(20));
    assert_eq!(*merged.top_p(), None);
}

#[test]
fn first_content_reads_first_candidate() {
    let response = ChatResponse::builder()
        .generations(vec![
            Generation::with_finish_reason("first", "stop"),
            Generation::new("second"),
        ])
        .build()
        .expect("Valid ChatResponse");

    assert_eq!(response.first_content(), Some("first"));
}

#[test]
fn first_content_empty_when_no_candidates() {
    let response = ChatResponse::builder()
        .generations(Vec::new())
        .build()
        .expect("Valid ChatResponse");

    assert_eq!(response.first_content(), None);
}
