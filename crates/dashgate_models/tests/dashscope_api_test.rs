//! Tests for the DashScope client against the live API.
//!
//! These tests require a DashScope account.
//! Set `DASHSCOPE_API_KEY` (a `.env` file works) and run with:
//! cargo test --package dashgate_models -- --ignored

use dashgate_core::{GenerationOptions, Prompt};
use dashgate_interface::ChatModel;
use dashgate_models::DashScopeClient;
use futures_util::StreamExt;

#[tokio::test]
#[ignore] // Requires DASHSCOPE_API_KEY and network access
async fn test_dashscope_basic_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let client = DashScopeClient::from_env()?;

    let response = client.call(&Prompt::new("你好，介绍下你自己吧。")).await?;

    assert!(!response.generations().is_empty());
    println!("Response: {:?}", response.first_content());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_dashscope_custom_options() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let client = DashScopeClient::from_env()?;

    let options = GenerationOptions::builder()
        .top_p(0.7)
        .top_k(50u32)
        .temperature(0.8)
        .build()?;
    let response = client
        .call(&Prompt::with_options("用一句话介绍你自己。", options))
        .await?;

    assert!(response.first_content().is_some());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_dashscope_streaming() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let client = DashScopeClient::from_env()?;

    let mut stream = client.stream(&Prompt::new("从一数到五。")).await?;

    let mut collected = String::new();
    while let Some(event) = stream.next().await {
        let event = event?;
        if let Some(chunk) = event.first_content() {
            collected.push_str(chunk);
        }
    }

    assert!(!collected.is_empty());
    println!("Streamed: {}", collected);
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_dashscope_rejects_bad_key() -> Result<(), Box<dyn std::error::Error>> {
    let config = dashgate_models::DashScopeConfig::builder()
        .api_key("sk-invalid")
        .build()?;
    let client = DashScopeClient::new(config)?;

    let result = client.call(&Prompt::new("你好")).await;
    assert!(result.is_err());
    Ok(())
}
