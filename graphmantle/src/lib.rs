// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graphmantle - a backend-agnostic property-graph abstraction
//!
//! Graphmantle defines a common vocabulary of Vertex, Edge, and Element
//! with direction- and label-constrained traversal and arbitrary
//! key/value properties, plus a composable decorator mechanism for
//! overlaying cross-cutting behavior onto any concrete graph
//! implementation.
//!
//! # Features
//!
//! - **Backend-agnostic contracts**: `Element`, `Vertex`, `Edge`, and
//!   `Graph` traits any storage engine can implement
//! - **Lazy, closeable traversal**: streams that release backend
//!   resources even on early termination
//! - **Fluent queries**: direction, label, property, and range
//!   constraints compiled lazily
//! - **Partition overlay**: partition-scoped visibility with
//!   write-partition tagging
//! - **Read-only and delegation wrappers**: policy views that keep full
//!   interface conformance
//!
//! # Usage
//!
//! ```
//! use graphmantle::{Direction, Edge, Element, Graph, MemoryGraph, PartitionGraph, Value, Vertex};
//! use std::sync::Arc;
//!
//! let base = Arc::new(MemoryGraph::new());
//! let graph = PartitionGraph::new(base, "_partition", "tenant-a");
//!
//! let alice = graph.add_vertex(None).unwrap();
//! alice.set_property("name", Value::from("alice")).unwrap();
//! let bob = graph.add_vertex(None).unwrap();
//! let knows = graph
//!     .add_edge(None, &alice.id(), &bob.id(), "knows")
//!     .unwrap();
//!
//! // Traversal through the overlay only sees tenant-a elements.
//! let neighbors: Vec<_> = alice.vertices(Direction::Out, &["knows"]).unwrap().collect();
//! assert_eq!(neighbors.len(), 1);
//! assert_eq!(knows.vertex(Direction::In).unwrap().id(), bob.id());
//! ```

pub mod core;
pub mod error;
pub mod memory;
pub mod wrappers;

// Re-export the public API
pub use crate::core::{
    elements_equal, validate_property, Direction, Edge, EdgeRef, EdgeStream, Element,
    ElementId, ElementStream, Graph, GraphRef, Vertex, VertexQuery, VertexRef, VertexStream,
    Value, RESERVED_KEYS,
};
pub use error::{GraphError, GraphResult};
pub use memory::{MemoryEdge, MemoryGraph, MemoryVertex};
pub use wrappers::{
    PartitionEdge, PartitionGraph, PartitionPolicy, PartitionVertex, ReadOnlyEdge,
    ReadOnlyGraph, ReadOnlyVertex, WrappedEdge, WrappedGraph, WrappedVertex,
};

/// Graphmantle version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Graphmantle crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
