// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors
// ABOUTME: Helper modules for fitstats-cli
// ABOUTME: Provides snapshot file handling and output formatting

pub mod display;
pub mod snapshot;
