// docsync-rs: Algolia Crawler Sync Tool for the logget docs
//
// SPDX-FileCopyrightText: 2026 Enegalan
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Credentials, redact, resolve};
use crate::config::{EnvConfig, RunMode};
use crate::error::SyncError;
use crate::prompt::ScriptedPrompt;

fn crawler_env() -> EnvConfig {
    EnvConfig::default().with_crawler_credentials("abc".to_string(), "xyz12345".to_string())
}

fn standard_env() -> EnvConfig {
    EnvConfig::default().with_standard_credentials("APP123".to_string(), "admin-key".to_string())
}

#[test]
fn test_crawler_variant_wins_over_standard() {
    // Both pairs present: crawler-scoped credentials must be selected.
    let config = EnvConfig {
        crawler_user_id: Some("abc".to_string()),
        crawler_api_key: Some("xyz12345".to_string()),
        app_id: Some("APP123".to_string()),
        api_key: Some("admin-key".to_string()),
        debug: false,
    };

    let credentials = Credentials::from_config(&config).unwrap();
    assert_eq!(
        credentials,
        Credentials::Crawler {
            user_id: "abc".to_string(),
            api_key: "xyz12345".to_string(),
        }
    );
}

#[test]
fn test_standard_variant_when_crawler_pair_incomplete() {
    let config = EnvConfig {
        crawler_user_id: Some("abc".to_string()),
        crawler_api_key: None,
        app_id: Some("APP123".to_string()),
        api_key: Some("admin-key".to_string()),
        debug: false,
    };

    let credentials = Credentials::from_config(&config).unwrap();
    assert_eq!(credentials.scheme(), "standard");
}

#[test]
fn test_no_complete_pair_resolves_nothing() {
    let config = EnvConfig {
        app_id: Some("APP123".to_string()),
        ..EnvConfig::default()
    };
    assert!(Credentials::from_config(&config).is_none());
}

#[test]
fn test_crawler_headers_use_basic_auth() {
    let credentials = Credentials::from_config(&crawler_env()).unwrap();
    let headers = credentials.headers();

    // base64("abc:xyz12345")
    assert_eq!(
        headers,
        vec![(
            "Authorization".to_string(),
            "Basic YWJjOnh5ejEyMzQ1".to_string()
        )]
    );
}

#[test]
fn test_standard_headers_use_vendor_pair() {
    let credentials = Credentials::from_config(&standard_env()).unwrap();
    let headers = credentials.headers();

    assert_eq!(
        headers,
        vec![
            (
                "X-Algolia-Application-Id".to_string(),
                "APP123".to_string()
            ),
            ("X-Algolia-API-Key".to_string(), "admin-key".to_string()),
        ]
    );
}

#[test]
fn test_redact_previews_long_keys() {
    assert_eq!(redact("abcd1234efgh"), "abcd...efgh");
    assert_eq!(redact("xyz12345q"), "xyz1...345q");
}

#[test]
fn test_redact_counts_characters_not_bytes() {
    // Multibyte keys must neither panic nor split a character.
    assert_eq!(redact("ééééxxxxéééé"), "éééé...éééé");
    assert_eq!(redact("aééééxxxé"), "aééé...xxxé");
}

#[test]
fn test_redact_masks_short_keys() {
    assert_eq!(redact("xyz12345"), "***");
    assert_eq!(redact(""), "***");
    // 5 characters but 9 bytes: still short.
    assert_eq!(redact("aéééé"), "***");
}

#[tokio::test]
async fn test_resolve_non_interactive_fails_without_prompting() {
    let mut prompt = ScriptedPrompt::default();
    let result = resolve(&EnvConfig::default(), RunMode::NonInteractive, &mut prompt).await;

    match result.unwrap_err() {
        SyncError::Credentials(_) => {}
        other => panic!("Expected SyncError::Credentials, got {other:?}"),
    }
    assert!(prompt.questions().is_empty(), "must not hang on input");
}

#[tokio::test]
async fn test_resolve_interactive_crawler_entry() {
    let mut prompt = ScriptedPrompt::new(["y", "abc", "xyz12345"]);
    let credentials = resolve(&EnvConfig::default(), RunMode::Interactive, &mut prompt)
        .await
        .unwrap();

    assert_eq!(credentials.scheme(), "crawler");
    assert_eq!(prompt.questions().len(), 3);
}

#[tokio::test]
async fn test_resolve_interactive_localized_affirmative() {
    // "s" must be accepted the same as "y".
    let mut prompt = ScriptedPrompt::new(["s", "abc", "xyz12345"]);
    let credentials = resolve(&EnvConfig::default(), RunMode::Interactive, &mut prompt)
        .await
        .unwrap();

    assert_eq!(credentials.scheme(), "crawler");
}

#[tokio::test]
async fn test_resolve_interactive_standard_entry() {
    let mut prompt = ScriptedPrompt::new(["n", "APP123", "admin-key"]);
    let credentials = resolve(&EnvConfig::default(), RunMode::Interactive, &mut prompt)
        .await
        .unwrap();

    assert_eq!(credentials.scheme(), "standard");
}

#[tokio::test]
async fn test_resolve_interactive_blank_entry_still_fails() {
    // Operator hits Enter on every question: still no usable pair.
    let mut prompt = ScriptedPrompt::default();
    let result = resolve(&EnvConfig::default(), RunMode::Interactive, &mut prompt).await;

    assert!(result.is_err());
    // Re-resolution happens exactly once; no second round of questions.
    assert_eq!(prompt.questions().len(), 3);
}

#[tokio::test]
async fn test_resolve_skips_prompt_when_pair_present() {
    let mut prompt = ScriptedPrompt::new(["y"]);
    let credentials = resolve(&crawler_env(), RunMode::Interactive, &mut prompt)
        .await
        .unwrap();

    assert_eq!(credentials.scheme(), "crawler");
    assert!(prompt.questions().is_empty());
}
