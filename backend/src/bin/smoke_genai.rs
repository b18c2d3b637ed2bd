//! Smoke test binary for the provider credential and connectivity
//! This is a utility binary, not part of the proxy server

use code_review_backend::config::Config;
use code_review_backend::provider::{ContentGenerator, GeminiClient, ProviderResponse};
use code_review_backend::review::{Language, ReviewAction, ReviewRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing generative-AI provider from Rust...\n");

    let config = Config::from_env();

    // Test 1: Check the credential
    println!("1. Checking for {} environment variable...", config.genai.api_key_env);
    let api_key = match config.genai.api_key() {
        Some(key) => {
            println!("   ✓ {} is set (length: {} chars)", config.genai.api_key_env, key.len());
            key
        }
        None => {
            eprintln!("   ✗ {} not found in environment", config.genai.api_key_env);
            eprintln!("   Export it: export {}=\"your-key\"", config.genai.api_key_env);
            return Err("API key not configured".into());
        }
    };

    // Test 2: Build a review prompt
    println!("\n2. Building review prompt...");
    let request = ReviewRequest::new("print(1)", Language::Python, ReviewAction::Review)?
        .with_model(config.genai.default_model.clone());
    let prompt = request.prompt();
    println!("   ✓ Prompt built ({} chars, model {})", prompt.len(), request.model_id);

    // Test 3: Call the provider once
    println!("\n3. Calling {} ...", config.genai.api_base_url);
    let client = GeminiClient::from_config(reqwest::Client::new(), &config.genai);
    match client
        .generate_content(&api_key, &request.model_id, &prompt)
        .await
    {
        Ok(raw) => {
            let parsed = ProviderResponse::parse(raw);
            let shape = match &parsed {
                ProviderResponse::DirectText(_) => "direct text",
                ProviderResponse::CandidateText(_) => "candidate text",
                ProviderResponse::Unrecognized(_) => "unrecognized (raw JSON)",
            };
            println!("   ✓ Response received ({})", shape);
            println!("\n{}", parsed.into_display_text());
        }
        Err(e) => {
            eprintln!("   ✗ Request failed: {:#}", e);
            eprintln!("\n   Troubleshooting:");
            eprintln!("   - Check the key: echo ${}", config.genai.api_key_env);
            eprintln!("   - Check the model name: {}", request.model_id);
            return Err(e.into());
        }
    }

    println!("\n✓ All checks completed!");
    Ok(())
}
