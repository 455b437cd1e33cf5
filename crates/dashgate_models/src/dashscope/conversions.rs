//! Type conversions between DashGate and DashScope wire formats.

use crate::dashscope::dto::{
    ApiErrorBody, ChatMessage, GenerationReply, GenerationRequest, RequestInput, RequestParameters,
};
use dashgate_core::{ChatResponse, Generation, GenerationOptions, Prompt, Role, TokenUsage};
use dashgate_error::{DashScopeError, DashScopeErrorKind};

/// Converts a prompt to a DashScope generation request.
///
/// Per-request options overlay the configured defaults field by field, so
/// explicit options always win over environment-level configuration. A
/// parameters block is emitted only when at least one tunable is set or
/// the call is streaming.
pub fn to_generation_request(
    prompt: &Prompt,
    model: &str,
    defaults: Option<&GenerationOptions>,
    streaming: bool,
) -> Result<GenerationRequest, DashScopeError> {
    let messages = prompt
        .messages()
        .iter()
        .map(|msg| {
            let role = match msg.role() {
                Role::System => "system",
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            ChatMessage {
                role: role.to_string(),
                content: msg.content().clone(),
            }
        })
        .collect();

    let explicit = prompt.options().clone().unwrap_or_default();
    let merged = match defaults {
        Some(defaults) => explicit.overlay(defaults),
        None => explicit,
    };

    let mut builder = GenerationRequest::builder();
    builder
        .model(model.to_string())
        .input(RequestInput { messages });

    if !merged.is_empty() || streaming {
        let mut parameters = RequestParameters::builder();
        parameters.result_format("message");
        if let Some(top_p) = merged.top_p() {
            parameters.top_p(*top_p);
        }
        if let Some(top_k) = merged.top_k() {
            parameters.top_k(*top_k);
        }
        if let Some(temperature) = merged.temperature() {
            parameters.temperature(*temperature);
        }
        if streaming {
            parameters.incremental_output(true);
        }
        let parameters = parameters.build().map_err(|e| {
            DashScopeError::new(DashScopeErrorKind::InvalidRequest(format!(
                "Failed to build parameters: {}",
                e
            )))
        })?;
        builder.parameters(parameters);
    }

    builder.build().map_err(|e| {
        DashScopeError::new(DashScopeErrorKind::InvalidRequest(format!(
            "Failed to build request: {}",
            e
        )))
    })
}

/// Converts a DashScope reply to a chat response.
pub fn from_reply(reply: &GenerationReply) -> Result<ChatResponse, DashScopeError> {
    if reply.output.choices.is_empty() {
        return Err(DashScopeError::new(DashScopeErrorKind::EmptyReply));
    }

    let generations = reply
        .output
        .choices
        .iter()
        .map(|choice| {
            // DashScope reports the string "null" until the final event
            let finish_reason = choice
                .finish_reason
                .as_deref()
                .filter(|reason| *reason != "null")
                .map(str::to_string);
            match finish_reason {
                Some(reason) => Generation::with_finish_reason(&choice.message.content, reason),
                None => Generation::new(&choice.message.content),
            }
        })
        .collect::<Vec<_>>();

    let usage = reply.usage.as_ref().and_then(|u| {
        match (u.input_tokens, u.output_tokens, u.total_tokens) {
            (Some(input), Some(output), Some(total)) => Some(TokenUsage::new(input, output, total)),
            _ => None,
        }
    });

    let mut builder = ChatResponse::builder();
    builder.generations(generations).usage(usage);
    if let Some(request_id) = &reply.request_id {
        builder.request_id(request_id.clone());
    }
    builder.build().map_err(|e| {
        DashScopeError::new(DashScopeErrorKind::Parse(format!(
            "Failed to build response: {}",
            e
        )))
    })
}

/// Converts one SSE event payload to a chat response.
///
/// Error events carry an `{code, message}` body instead of an output
/// block; they surface as a stream error.
pub fn from_event_payload(payload: &str) -> Result<ChatResponse, DashScopeError> {
    if let Ok(reply) = serde_json::from_str::<GenerationReply>(payload) {
        return from_reply(&reply);
    }

    match serde_json::from_str::<ApiErrorBody>(payload) {
        Ok(body) => Err(DashScopeError::new(DashScopeErrorKind::Stream(format!(
            "{}: {}",
            body.code, body.message
        )))),
        Err(e) => Err(DashScopeError::new(DashScopeErrorKind::Parse(
            e.to_string(),
        ))),
    }
}
