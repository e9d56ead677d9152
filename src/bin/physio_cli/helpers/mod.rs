// ABOUTME: Re-exports helper modules for physio-cli
// ABOUTME: Provides output formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
