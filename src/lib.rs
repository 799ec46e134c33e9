// docsync-rs: Algolia Crawler Sync Tool for the logget docs
//
// SPDX-FileCopyrightText: 2026 Enegalan
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)           sync (orchestrator)
//!                |        Resolve -> Discover -> Launch
//!                |                     |
//!                +----------+---------+----------+
//!                           v                    v
//!              ,------------------------,    prompt
//!              |        config          |  stdin Q/A
//!              |  EnvConfig + RunMode   |  (TTY only)
//!              '-----+------------+-----'
//!                    |            |
//!                    v            v
//!              credentials     crawler
//!              scheme + auth  discovery,
//!              headers        selection, launch
//!                    |            |
//!                    +-----+------+
//!                          v
//!                         net
//!                  one HTTPS request,
//!                  JSON-or-text body
//!
//!   +-----------------------------------------+
//!   |  foundation       error, logging        |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod config;
pub mod crawler;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod net;
pub mod prompt;
pub mod sync;
