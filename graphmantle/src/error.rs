// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for graph operations
//!
//! The decorator layer never recovers backend errors locally: wrappers
//! propagate them unchanged so callers keep the backend's failure
//! semantics. The only error originated by the wrapper layer itself is
//! `InvalidArgument` for a BOTH-direction endpoint request.

use thiserror::Error;

/// Error types for graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid property value: {0}")]
    InvalidPropertyValue(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Graph is read-only: {0}")]
    ReadOnly(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result alias used throughout the crate
pub type GraphResult<T> = Result<T, GraphError>;
