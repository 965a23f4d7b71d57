// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Identity-preserving delegation wrappers
//!
//! The plainest decorator family: every operation delegates to the base
//! graph unchanged, and every element crossing the boundary is re-wrapped
//! in this family. Useful as the neutral composition layer other policies
//! build on, and as the reference for the wrapping invariants: a wrapper
//! exposes the base element's identity and string form, and two wrappers
//! around the same base element compare equal.

use crate::core::direction::Direction;
use crate::core::element::{Edge, EdgeRef, Element, ElementId, Vertex, VertexRef};
use crate::core::graph::{Graph, GraphRef};
use crate::core::stream::{EdgeStream, VertexStream};
use crate::error::GraphResult;
use crate::wrappers::delegate::delegate_element;
use std::sync::Arc;

/// A graph view that delegates everything to a base graph
pub struct WrappedGraph {
    base: GraphRef,
}

/// A vertex view that delegates everything to a base vertex
pub struct WrappedVertex {
    base: VertexRef,
}

/// An edge view that delegates everything to a base edge
pub struct WrappedEdge {
    base: EdgeRef,
}

delegate_element!(WrappedVertex);
delegate_element!(WrappedEdge);

impl WrappedGraph {
    /// Wrap a base graph
    pub fn new(base: GraphRef) -> Self {
        WrappedGraph { base }
    }

    /// The wrapped base graph
    pub fn base_graph(&self) -> GraphRef {
        Arc::clone(&self.base)
    }
}

impl Graph for WrappedGraph {
    fn add_vertex(&self, id: Option<ElementId>) -> GraphResult<VertexRef> {
        Ok(Arc::new(WrappedVertex::new(self.base.add_vertex(id)?)))
    }

    fn vertex(&self, id: &ElementId) -> GraphResult<Option<VertexRef>> {
        Ok(self
            .base
            .vertex(id)?
            .map(|v| Arc::new(WrappedVertex::new(v)) as VertexRef))
    }

    fn remove_vertex(&self, id: &ElementId) -> GraphResult<()> {
        self.base.remove_vertex(id)
    }

    fn vertices(&self) -> GraphResult<VertexStream> {
        Ok(self
            .base
            .vertices()?
            .filter_wrap(|v| Some(Arc::new(WrappedVertex::new(v)) as VertexRef)))
    }

    fn add_edge(
        &self,
        id: Option<ElementId>,
        tail: &ElementId,
        head: &ElementId,
        label: &str,
    ) -> GraphResult<EdgeRef> {
        Ok(Arc::new(WrappedEdge::new(
            self.base.add_edge(id, tail, head, label)?,
        )))
    }

    fn edge(&self, id: &ElementId) -> GraphResult<Option<EdgeRef>> {
        Ok(self
            .base
            .edge(id)?
            .map(|e| Arc::new(WrappedEdge::new(e)) as EdgeRef))
    }

    fn remove_edge(&self, id: &ElementId) -> GraphResult<()> {
        self.base.remove_edge(id)
    }

    fn edges(&self) -> GraphResult<EdgeStream> {
        Ok(self
            .base
            .edges()?
            .filter_wrap(|e| Some(Arc::new(WrappedEdge::new(e)) as EdgeRef)))
    }
}

impl WrappedVertex {
    /// Wrap a base vertex
    pub fn new(base: VertexRef) -> Self {
        WrappedVertex { base }
    }

    /// The wrapped base vertex
    pub fn base_vertex(&self) -> VertexRef {
        Arc::clone(&self.base)
    }
}

impl Vertex for WrappedVertex {
    fn edges(&self, direction: Direction, labels: &[&str]) -> GraphResult<EdgeStream> {
        Ok(self
            .base
            .edges(direction, labels)?
            .filter_wrap(|e| Some(Arc::new(WrappedEdge::new(e)) as EdgeRef)))
    }

    fn vertices(&self, direction: Direction, labels: &[&str]) -> GraphResult<VertexStream> {
        Ok(self
            .base
            .vertices(direction, labels)?
            .filter_wrap(|v| Some(Arc::new(WrappedVertex::new(v)) as VertexRef)))
    }
}

impl WrappedEdge {
    /// Wrap a base edge
    pub fn new(base: EdgeRef) -> Self {
        WrappedEdge { base }
    }

    /// The wrapped base edge
    pub fn base_edge(&self) -> EdgeRef {
        Arc::clone(&self.base)
    }
}

impl Edge for WrappedEdge {
    fn vertex(&self, direction: Direction) -> GraphResult<VertexRef> {
        Ok(Arc::new(WrappedVertex::new(self.base.vertex(direction)?)))
    }

    fn label(&self) -> String {
        self.base.label()
    }
}
