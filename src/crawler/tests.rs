// docsync-rs: Algolia Crawler Sync Tool for the logget docs
//
// SPDX-FileCopyrightText: 2026 Enegalan
// SPDX-License-Identifier: GPL-3.0-or-later

use super::launch::monitor_url;
use super::{CrawlerSummary, normalize, select};
use crate::config::RunMode;
use crate::error::{ApiError, SyncError};
use crate::prompt::ScriptedPrompt;
use serde_json::json;
use std::collections::BTreeSet;

fn summary(id: &str, name: &str, indexes: &[&str]) -> CrawlerSummary {
    CrawlerSummary {
        id: id.to_string(),
        name: name.to_string(),
        index_names: indexes.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn assert_no_crawler_configured(err: SyncError) {
    match err {
        SyncError::Api(boxed) => match *boxed {
            ApiError::NoCrawlerConfigured => {}
            other => panic!("Expected ApiError::NoCrawlerConfigured, got {other:?}"),
        },
        other => panic!("Expected SyncError::Api, got {other:?}"),
    }
}

// =============================================================================
// Normalization tests
// =============================================================================

#[test]
fn test_normalize_items_field() {
    let body = json!({
        "items": [
            { "id": "c1", "name": "logget-docs" },
            { "id": "c2", "name": "other" },
        ]
    });

    let crawlers = normalize(&body).unwrap();
    assert_eq!(crawlers.len(), 2);
    assert_eq!(crawlers[0].id, "c1");
    assert_eq!(crawlers[0].name, "logget-docs");
}

#[test]
fn test_normalize_legacy_crawlers_field() {
    let body = json!({
        "crawlers": [
            { "id": "c1", "name": "site" },
        ]
    });

    let crawlers = normalize(&body).unwrap();
    assert_eq!(crawlers.len(), 1);
    assert_eq!(crawlers[0].id, "c1");
}

#[test]
fn test_normalize_unrecognized_shape() {
    assert!(normalize(&json!({ "data": [] })).is_none());
    assert!(normalize(&json!("plain string")).is_none());
    assert!(normalize(&json!({ "items": "not a list" })).is_none());
}

#[test]
fn test_normalize_gathers_index_names_from_all_fields() {
    let body = json!({
        "items": [{
            "id": "c1",
            "name": "site",
            "source": { "index": "logget" },
            "index": ["legacy_a", "legacy_b"],
        }]
    });

    let crawlers = normalize(&body).unwrap();
    let expected: BTreeSet<String> = ["logget", "legacy_a", "legacy_b"]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    assert_eq!(crawlers[0].index_names, expected);
}

#[test]
fn test_normalize_skips_entries_without_id() {
    let body = json!({
        "items": [
            { "name": "no id here" },
            { "id": "c2", "name": "valid" },
        ]
    });

    let crawlers = normalize(&body).unwrap();
    assert_eq!(crawlers.len(), 1);
    assert_eq!(crawlers[0].id, "c2");
}

// =============================================================================
// Token matching tests
// =============================================================================

#[test]
fn test_token_matches_index_name() {
    let crawler = summary("c1", "whatever", &["logget_prod"]);
    assert!(crawler.matches_token("logget"));
}

#[test]
fn test_token_matches_name_case_insensitive() {
    let crawler = summary("c1", "Logget Docs", &[]);
    assert!(crawler.matches_token("logget"));
}

#[test]
fn test_token_mismatch() {
    let crawler = summary("c1", "marketing site", &["www_prod"]);
    assert!(!crawler.matches_token("logget"));
}

// =============================================================================
// Selection tests
// =============================================================================

#[tokio::test]
async fn test_select_token_match_wins_without_prompting() {
    let crawlers = vec![
        summary("c1", "other", &[]),
        summary("c2", "logget-docs", &[]),
        summary("c3", "third", &[]),
    ];

    for mode in [RunMode::Interactive, RunMode::NonInteractive] {
        let mut prompt = ScriptedPrompt::default();
        let selected = select(crawlers.clone(), "logget", mode, &mut prompt)
            .await
            .unwrap();
        assert_eq!(selected.id, "c2");
        assert!(prompt.questions().is_empty(), "must not prompt in {mode:?}");
    }
}

#[tokio::test]
async fn test_select_single_entry_auto_selected() {
    let crawlers = vec![summary("c1", "unrelated", &[])];
    let mut prompt = ScriptedPrompt::default();

    let selected = select(crawlers, "logget", RunMode::Interactive, &mut prompt)
        .await
        .unwrap();
    assert_eq!(selected.id, "c1");
    assert!(prompt.questions().is_empty());
}

#[tokio::test]
async fn test_select_non_interactive_is_deterministic() {
    let crawlers = vec![
        summary("first", "a", &[]),
        summary("second", "b", &[]),
        summary("third", "c", &[]),
    ];

    for _ in 0..3 {
        let mut prompt = ScriptedPrompt::default();
        let selected = select(
            crawlers.clone(),
            "logget",
            RunMode::NonInteractive,
            &mut prompt,
        )
        .await
        .unwrap();
        assert_eq!(selected.id, "first");
        assert!(prompt.questions().is_empty());
    }
}

#[tokio::test]
async fn test_select_interactive_numeric_choice() {
    let crawlers = vec![summary("c1", "a", &[]), summary("c2", "b", &[])];
    let mut prompt = ScriptedPrompt::new(["2"]);

    let selected = select(crawlers, "logget", RunMode::Interactive, &mut prompt)
        .await
        .unwrap();
    assert_eq!(selected.id, "c2");
    assert_eq!(prompt.questions().len(), 1);
}

#[tokio::test]
async fn test_select_interactive_blank_takes_first() {
    let crawlers = vec![summary("c1", "a", &[]), summary("c2", "b", &[])];
    let mut prompt = ScriptedPrompt::new([""]);

    let selected = select(crawlers, "logget", RunMode::Interactive, &mut prompt)
        .await
        .unwrap();
    assert_eq!(selected.id, "c1");
}

#[tokio::test]
async fn test_select_interactive_clamps_out_of_range() {
    let crawlers = vec![summary("c1", "a", &[]), summary("c2", "b", &[])];

    for answer in ["0", "9", "nope"] {
        let mut prompt = ScriptedPrompt::new([answer]);
        let selected = select(
            crawlers.clone(),
            "logget",
            RunMode::Interactive,
            &mut prompt,
        )
        .await
        .unwrap();
        assert_eq!(selected.id, "c1", "answer {answer:?} must clamp to first");
    }
}

#[tokio::test]
async fn test_select_empty_list_is_no_crawler_configured() {
    let mut prompt = ScriptedPrompt::default();
    let result = select(Vec::new(), "logget", RunMode::Interactive, &mut prompt).await;
    assert_no_crawler_configured(result.unwrap_err());
}

// =============================================================================
// Launch helper tests
// =============================================================================

#[test]
fn test_monitor_url_contains_crawler_id() {
    let url = monitor_url("c42");
    assert_eq!(url, "https://www.algolia.com/dashboard/crawlers/c42");
}
