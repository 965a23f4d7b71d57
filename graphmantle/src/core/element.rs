// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Element, vertex, and edge contracts
//!
//! This module defines:
//! - `ElementId`: opaque, backend-assigned element identity
//! - `Element`: identity plus property get/set/remove/key enumeration
//! - `Vertex`: element with directional, label-constrained adjacency
//! - `Edge`: element with two endpoints and one immutable label
//!
//! Equality of two elements is equality of their identities, never
//! structural property equality. Wrappers define equality and hash over
//! the base element's id, so wrapped and unwrapped views of the same
//! underlying element compare equal.

use crate::core::direction::Direction;
use crate::core::stream::{EdgeStream, VertexStream};
use crate::core::value::Value;
use crate::error::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Property keys that backends must reject on writes
pub const RESERVED_KEYS: [&str; 2] = ["id", "label"];

/// Opaque element identity assigned by the owning backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(String);

impl ElementId {
    /// Create an id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        ElementId(id.into())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        ElementId(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        ElementId(id)
    }
}

/// Base contract shared by vertices and edges: identity plus a property bag.
///
/// Absent keys read as `Ok(None)`, never an error. `set_property`
/// overwrites (last-write-wins, no merge). The `Display` form is the
/// backend's own string representation; wrappers forward it unchanged.
pub trait Element: fmt::Display + fmt::Debug + Send + Sync {
    /// The element's identity
    fn id(&self) -> ElementId;

    /// Read a property value; absent keys return `Ok(None)`
    fn property(&self, key: &str) -> GraphResult<Option<Value>>;

    /// Write a property value, overwriting any previous value
    fn set_property(&self, key: &str, value: Value) -> GraphResult<()>;

    /// Remove a property, returning the previous value if any
    fn remove_property(&self, key: &str) -> GraphResult<Option<Value>>;

    /// All property keys currently present on the element
    fn property_keys(&self) -> GraphResult<HashSet<String>>;
}

/// A vertex: an element with directional, label-constrained adjacency.
///
/// Zero labels means "all labels". Multiple labels yield the union across
/// labels with per-label traversal order preserved. `Direction::Both`
/// yields the `In` result followed by the `Out` result, concatenated
/// without deduplication, so a self-loop appears twice.
pub trait Vertex: Element {
    /// Edges incident to this vertex for the given direction and labels
    fn edges(&self, direction: Direction, labels: &[&str]) -> GraphResult<EdgeStream>;

    /// Vertices adjacent to this vertex for the given direction and labels
    fn vertices(&self, direction: Direction, labels: &[&str]) -> GraphResult<VertexStream>;
}

/// An edge: an element with exactly two endpoints and one immutable label.
pub trait Edge: Element {
    /// The endpoint for `Out` (tail) or `In` (head).
    ///
    /// `Direction::Both` is invalid here and fails with `InvalidArgument`.
    fn vertex(&self, direction: Direction) -> GraphResult<VertexRef>;

    /// The edge label, assigned at creation
    fn label(&self) -> String;
}

/// Shared handle to a vertex
pub type VertexRef = Arc<dyn Vertex>;

/// Shared handle to an edge
pub type EdgeRef = Arc<dyn Edge>;

/// Identity-based element equality
pub fn elements_equal(a: &dyn Element, b: &dyn Element) -> bool {
    a.id() == b.id()
}

/// Validate a property write before it reaches the backend.
///
/// Rejects empty and reserved keys with `InvalidArgument` and values
/// outside the closed variant set with `InvalidPropertyValue`.
pub fn validate_property(key: &str, value: &Value) -> GraphResult<()> {
    if key.is_empty() {
        return Err(GraphError::InvalidArgument(
            "property key must not be empty".to_string(),
        ));
    }
    if RESERVED_KEYS.contains(&key) {
        return Err(GraphError::InvalidArgument(format!(
            "property key '{}' is reserved",
            key
        )));
    }
    value.validate()
}

/// The error every edge returns for a BOTH-direction endpoint request
pub(crate) fn both_is_not_an_endpoint() -> GraphError {
    GraphError::InvalidArgument("an edge endpoint must be OUT or IN, not BOTH".to_string())
}
