// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! The base-graph capability boundary
//!
//! Everything the wrapper layer consumes from a concrete backend, and
//! everything an overlay re-exposes outward, is this one trait: element
//! creation, id lookup, removal, and whole-graph enumeration as lazy
//! streams. Edge endpoints are addressed by id so that an overlay can
//! delegate creation without unwrapping vertex handles; a wrapper's id
//! equals its base element's id by construction.

use crate::core::element::{EdgeRef, ElementId, VertexRef};
use crate::core::stream::{EdgeStream, VertexStream};
use crate::error::GraphResult;
use std::sync::Arc;

/// A property graph: vertex/edge creation, lookup, removal, enumeration
pub trait Graph: Send + Sync {
    /// Create a vertex. `None` lets the backend assign the id;
    /// a supplied id that already exists is `InvalidArgument`.
    fn add_vertex(&self, id: Option<ElementId>) -> GraphResult<VertexRef>;

    /// Look up a vertex by id; unknown ids return `Ok(None)`
    fn vertex(&self, id: &ElementId) -> GraphResult<Option<VertexRef>>;

    /// Remove a vertex and all of its incident edges
    fn remove_vertex(&self, id: &ElementId) -> GraphResult<()>;

    /// All vertices, as a lazy stream
    fn vertices(&self) -> GraphResult<VertexStream>;

    /// Create an edge from `tail` to `head` with the given label.
    /// Missing endpoints are `ElementNotFound`.
    fn add_edge(
        &self,
        id: Option<ElementId>,
        tail: &ElementId,
        head: &ElementId,
        label: &str,
    ) -> GraphResult<EdgeRef>;

    /// Look up an edge by id; unknown ids return `Ok(None)`
    fn edge(&self, id: &ElementId) -> GraphResult<Option<EdgeRef>>;

    /// Remove an edge
    fn remove_edge(&self, id: &ElementId) -> GraphResult<()>;

    /// All edges, as a lazy stream
    fn edges(&self) -> GraphResult<EdgeStream>;
}

/// Shared handle to a graph
pub type GraphRef = Arc<dyn Graph>;
