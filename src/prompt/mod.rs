// docsync-rs: Algolia Crawler Sync Tool for the logget docs
//
// SPDX-FileCopyrightText: 2026 Enegalan
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive line-based prompting.
//!
//! ```text
//! Prompt::ask("question: ") --> one line of operator input
//!
//! StdinPrompt     tokio stdin, opened once, dropped on every exit path
//! ScriptedPrompt  replays canned answers (tests, no TTY required)
//! ```
//!
//! One question is outstanding at a time: the orchestrator awaits each
//! answer before asking the next. No timeout is imposed on operator input.

use std::collections::VecDeque;
use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::error::SyncResult;

/// A line-based question/answer interface.
///
/// Answers are returned with surrounding whitespace trimmed.
pub trait Prompt {
    /// Prints `question` and reads a single line of input.
    async fn ask(&mut self, question: &str) -> SyncResult<String>;
}

/// Checks an answer for agreement.
///
/// Accepts both English `y` and the localized single-letter `s`. The
/// dual-language acceptance matches the original operator experience and
/// is kept on purpose.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "s")
}

/// Prompt backed by the process stdin.
///
/// The reader is created once at the start of the run and released when
/// this value is dropped, on success and failure paths alike, so the
/// process never stays resident waiting on a stale reader.
#[derive(Debug)]
pub struct StdinPrompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl StdinPrompt {
    /// Creates a prompt over the process stdin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Prompt for StdinPrompt {
    async fn ask(&mut self, question: &str) -> SyncResult<String> {
        // The question has no trailing newline; flush so it is visible
        // before the read suspends.
        let mut stdout = std::io::stdout();
        write!(stdout, "{question}")?;
        stdout.flush()?;

        let line = self.lines.next_line().await?.unwrap_or_default();
        Ok(line.trim().to_string())
    }
}

/// Prompt that replays pre-seeded answers in order.
///
/// Used by the test suites; once the script runs out it answers with an
/// empty line, which every caller treats as "take the default".
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    /// Creates a scripted prompt from a list of answers.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Returns every question asked so far, in order.
    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.asked
    }
}

impl Prompt for ScriptedPrompt {
    async fn ask(&mut self, question: &str) -> SyncResult<String> {
        self.asked.push(question.to_string());
        Ok(self
            .answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .unwrap_or_default())
    }
}
