// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors
// ABOUTME: Re-exports command modules for fitstats-cli
// ABOUTME: Provides access to statistics queries and snapshot seeding

pub mod query;
pub mod seed;
