// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Core property-graph vocabulary
//!
//! This module provides:
//! - Direction-constrained traversal selectors
//! - The closed property value variant
//! - Element/Vertex/Edge contracts and identity
//! - Lazy closeable traversal streams
//! - Fluent traversal requests
//! - The base-graph capability boundary

pub mod direction;
pub mod element;
pub mod graph;
pub mod query;
pub mod stream;
pub mod value;

pub use direction::Direction;
pub use element::{
    elements_equal, validate_property, Edge, EdgeRef, Element, ElementId, Vertex, VertexRef,
    RESERVED_KEYS,
};
pub use graph::{Graph, GraphRef};
pub use query::VertexQuery;
pub use stream::{EdgeStream, ElementStream, VertexStream};
pub use value::Value;
