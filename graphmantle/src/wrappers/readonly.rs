// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Read-only wrappers
//!
//! A policy family that rejects every mutation with `GraphError::ReadOnly`
//! before it reaches the base graph, while reads and traversal delegate
//! unchanged (re-wrapped in the read-only family so no writable base
//! element escapes the boundary).

use crate::core::direction::Direction;
use crate::core::element::{elements_equal, Edge, EdgeRef, Element, ElementId, Vertex, VertexRef};
use crate::core::graph::{Graph, GraphRef};
use crate::core::stream::{EdgeStream, VertexStream};
use crate::core::value::Value;
use crate::error::{GraphError, GraphResult};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

fn rejected(operation: &str) -> GraphError {
    GraphError::ReadOnly(format!(
        "{} is not allowed through a read-only view",
        operation
    ))
}

/// A graph view that rejects all mutation
pub struct ReadOnlyGraph {
    base: GraphRef,
}

/// A vertex view that rejects all mutation
pub struct ReadOnlyVertex {
    base: VertexRef,
}

/// An edge view that rejects all mutation
pub struct ReadOnlyEdge {
    base: EdgeRef,
}

impl ReadOnlyGraph {
    /// Wrap a base graph in a read-only view
    pub fn new(base: GraphRef) -> Self {
        ReadOnlyGraph { base }
    }

    /// The wrapped base graph
    pub fn base_graph(&self) -> GraphRef {
        Arc::clone(&self.base)
    }
}

impl Graph for ReadOnlyGraph {
    fn add_vertex(&self, _id: Option<ElementId>) -> GraphResult<VertexRef> {
        Err(rejected("add_vertex"))
    }

    fn vertex(&self, id: &ElementId) -> GraphResult<Option<VertexRef>> {
        Ok(self
            .base
            .vertex(id)?
            .map(|v| Arc::new(ReadOnlyVertex::new(v)) as VertexRef))
    }

    fn remove_vertex(&self, _id: &ElementId) -> GraphResult<()> {
        Err(rejected("remove_vertex"))
    }

    fn vertices(&self) -> GraphResult<VertexStream> {
        Ok(self
            .base
            .vertices()?
            .filter_wrap(|v| Some(Arc::new(ReadOnlyVertex::new(v)) as VertexRef)))
    }

    fn add_edge(
        &self,
        _id: Option<ElementId>,
        _tail: &ElementId,
        _head: &ElementId,
        _label: &str,
    ) -> GraphResult<EdgeRef> {
        Err(rejected("add_edge"))
    }

    fn edge(&self, id: &ElementId) -> GraphResult<Option<EdgeRef>> {
        Ok(self
            .base
            .edge(id)?
            .map(|e| Arc::new(ReadOnlyEdge::new(e)) as EdgeRef))
    }

    fn remove_edge(&self, _id: &ElementId) -> GraphResult<()> {
        Err(rejected("remove_edge"))
    }

    fn edges(&self) -> GraphResult<EdgeStream> {
        Ok(self
            .base
            .edges()?
            .filter_wrap(|e| Some(Arc::new(ReadOnlyEdge::new(e)) as EdgeRef)))
    }
}

impl ReadOnlyVertex {
    /// Wrap a base vertex in a read-only view
    pub fn new(base: VertexRef) -> Self {
        ReadOnlyVertex { base }
    }

    /// The wrapped base vertex
    pub fn base_vertex(&self) -> VertexRef {
        Arc::clone(&self.base)
    }
}

impl Element for ReadOnlyVertex {
    fn id(&self) -> ElementId {
        self.base.id()
    }

    fn property(&self, key: &str) -> GraphResult<Option<Value>> {
        self.base.property(key)
    }

    fn set_property(&self, _key: &str, _value: Value) -> GraphResult<()> {
        Err(rejected("set_property"))
    }

    fn remove_property(&self, _key: &str) -> GraphResult<Option<Value>> {
        Err(rejected("remove_property"))
    }

    fn property_keys(&self) -> GraphResult<HashSet<String>> {
        self.base.property_keys()
    }
}

impl Vertex for ReadOnlyVertex {
    fn edges(&self, direction: Direction, labels: &[&str]) -> GraphResult<EdgeStream> {
        Ok(self
            .base
            .edges(direction, labels)?
            .filter_wrap(|e| Some(Arc::new(ReadOnlyEdge::new(e)) as EdgeRef)))
    }

    fn vertices(&self, direction: Direction, labels: &[&str]) -> GraphResult<VertexStream> {
        Ok(self
            .base
            .vertices(direction, labels)?
            .filter_wrap(|v| Some(Arc::new(ReadOnlyVertex::new(v)) as VertexRef)))
    }
}

impl fmt::Display for ReadOnlyVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)
    }
}

impl fmt::Debug for ReadOnlyVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)
    }
}

impl PartialEq for ReadOnlyVertex {
    fn eq(&self, other: &Self) -> bool {
        elements_equal(self, other)
    }
}

impl Eq for ReadOnlyVertex {}

impl Hash for ReadOnlyVertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl ReadOnlyEdge {
    /// Wrap a base edge in a read-only view
    pub fn new(base: EdgeRef) -> Self {
        ReadOnlyEdge { base }
    }

    /// The wrapped base edge
    pub fn base_edge(&self) -> EdgeRef {
        Arc::clone(&self.base)
    }
}

impl Element for ReadOnlyEdge {
    fn id(&self) -> ElementId {
        self.base.id()
    }

    fn property(&self, key: &str) -> GraphResult<Option<Value>> {
        self.base.property(key)
    }

    fn set_property(&self, _key: &str, _value: Value) -> GraphResult<()> {
        Err(rejected("set_property"))
    }

    fn remove_property(&self, _key: &str) -> GraphResult<Option<Value>> {
        Err(rejected("remove_property"))
    }

    fn property_keys(&self) -> GraphResult<HashSet<String>> {
        self.base.property_keys()
    }
}

impl Edge for ReadOnlyEdge {
    fn vertex(&self, direction: Direction) -> GraphResult<VertexRef> {
        Ok(Arc::new(ReadOnlyVertex::new(self.base.vertex(direction)?)))
    }

    fn label(&self) -> String {
        self.base.label()
    }
}

impl fmt::Display for ReadOnlyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)
    }
}

impl fmt::Debug for ReadOnlyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)
    }
}

impl PartialEq for ReadOnlyEdge {
    fn eq(&self, other: &Self) -> bool {
        elements_equal(self, other)
    }
}

impl Eq for ReadOnlyEdge {}

impl Hash for ReadOnlyEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
