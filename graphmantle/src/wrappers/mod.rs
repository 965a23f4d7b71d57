// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Composable decorator wrappers over the base graph contract
//!
//! This module provides:
//! - The delegation base every wrapper family forwards through
//! - Identity-preserving wrappers (pure delegation)
//! - Read-only wrappers (mutation rejection)
//! - The partition overlay (scoped visibility and write tagging)
//!
//! Wrappers are cheap, short-lived, non-owning views re-materialized on
//! every traversal step; the base graph owns element lifecycles.

pub(crate) mod delegate;
pub mod partition;
pub mod readonly;
pub mod wrapped;

pub use partition::{PartitionEdge, PartitionGraph, PartitionPolicy, PartitionVertex};
pub use readonly::{ReadOnlyEdge, ReadOnlyGraph, ReadOnlyVertex};
pub use wrapped::{WrappedEdge, WrappedGraph, WrappedVertex};
