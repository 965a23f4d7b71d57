// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Partition overlay
//!
//! Presents a filtered, write-tagged view of a base graph:
//! - traversal yields only elements whose partition tag is a member of
//!   the configured read partitions, filtered lazily element by element;
//! - every element created through the overlay is stamped with the
//!   configured write partition, exactly once, before it is returned;
//! - edge endpoint access bypasses filtering, so an edge's endpoints stay
//!   reachable even when they are not independently traversable.
//!
//! The overlay holds no state across calls beyond its configuration,
//! which the owning graph may change between calls. Each element's filter
//! decision is evaluated against the configuration current at the moment
//! that element is pulled from the lazy stream; there is no isolation and
//! no caching.
//!
//! The partition tag is an ordinary property after creation. Overwriting
//! it through `set_property` is permitted and silently moves the element
//! out of (or into) future read visibility.

use crate::core::direction::Direction;
use crate::core::element::{Edge, EdgeRef, Element, ElementId, Vertex, VertexRef};
use crate::core::graph::{Graph, GraphRef};
use crate::core::stream::{EdgeStream, VertexStream};
use crate::core::value::Value;
use crate::error::GraphResult;
use crate::wrappers::delegate::delegate_element;
use log::{debug, trace};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

struct PolicyState {
    write_partition: String,
    read_partitions: HashSet<String>,
}

/// The partition configuration shared by a `PartitionGraph` and every
/// element it wraps
pub struct PartitionPolicy {
    partition_key: String,
    state: RwLock<PolicyState>,
}

impl PartitionPolicy {
    fn new(partition_key: &str, write_partition: &str, read_partitions: HashSet<String>) -> Self {
        PartitionPolicy {
            partition_key: partition_key.to_string(),
            state: RwLock::new(PolicyState {
                write_partition: write_partition.to_string(),
                read_partitions,
            }),
        }
    }

    /// The reserved property key used for partition tagging
    pub fn partition_key(&self) -> &str {
        &self.partition_key
    }

    /// The partition new elements are stamped with
    pub fn write_partition(&self) -> String {
        self.state.read().write_partition.clone()
    }

    /// Redirect subsequent writes to another partition
    pub fn set_write_partition(&self, partition: &str) {
        debug!("write partition set to '{}'", partition);
        self.state.write().write_partition = partition.to_string();
    }

    /// The partitions visible through traversal
    pub fn read_partitions(&self) -> HashSet<String> {
        self.state.read().read_partitions.clone()
    }

    /// Make a partition visible through traversal
    pub fn add_read_partition(&self, partition: &str) {
        debug!("read partition '{}' added", partition);
        self.state
            .write()
            .read_partitions
            .insert(partition.to_string());
    }

    /// Make a partition invisible through traversal
    pub fn remove_read_partition(&self, partition: &str) {
        debug!("read partition '{}' removed", partition);
        self.state.write().read_partitions.remove(partition);
    }

    /// Whether an element's partition tag is in the current read set.
    ///
    /// A missing or non-string tag is indistinguishable from "not in this
    /// partition" and reads as not visible, never as an error.
    fn is_visible(&self, element: &dyn Element) -> bool {
        match element.property(&self.partition_key) {
            Ok(Some(Value::String(partition))) => {
                self.state.read().read_partitions.contains(&partition)
            }
            Ok(Some(other)) => {
                trace!(
                    "element {} has a non-string partition tag ({}); not visible",
                    element.id(),
                    other.type_name()
                );
                false
            }
            Ok(None) => false,
            Err(_) => false,
        }
    }

    /// Stamp a freshly created element with the current write partition
    fn stamp(&self, element: &dyn Element) -> GraphResult<()> {
        let partition = self.write_partition();
        element.set_property(&self.partition_key, Value::String(partition))
    }
}

/// A partition-scoped view of a base graph
pub struct PartitionGraph {
    base: GraphRef,
    policy: Arc<PartitionPolicy>,
}

/// A vertex whose traversal is partition-filtered
pub struct PartitionVertex {
    base: VertexRef,
    policy: Arc<PartitionPolicy>,
}

/// An edge whose endpoints stay reachable across partitions
pub struct PartitionEdge {
    base: EdgeRef,
    policy: Arc<PartitionPolicy>,
}

delegate_element!(PartitionVertex);
delegate_element!(PartitionEdge);

impl PartitionGraph {
    /// Wrap a base graph; the write partition starts out readable
    pub fn new(base: GraphRef, partition_key: &str, write_partition: &str) -> Self {
        let mut read_partitions = HashSet::new();
        read_partitions.insert(write_partition.to_string());
        PartitionGraph {
            base,
            policy: Arc::new(PartitionPolicy::new(
                partition_key,
                write_partition,
                read_partitions,
            )),
        }
    }

    /// Wrap a base graph with an explicit read partition set
    pub fn with_read_partitions<I, S>(
        base: GraphRef,
        partition_key: &str,
        write_partition: &str,
        read_partitions: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PartitionGraph {
            base,
            policy: Arc::new(PartitionPolicy::new(
                partition_key,
                write_partition,
                read_partitions.into_iter().map(Into::into).collect(),
            )),
        }
    }

    /// The wrapped base graph
    pub fn base_graph(&self) -> GraphRef {
        Arc::clone(&self.base)
    }

    /// The shared partition configuration
    pub fn policy(&self) -> Arc<PartitionPolicy> {
        Arc::clone(&self.policy)
    }

    /// The reserved property key used for partition tagging
    pub fn partition_key(&self) -> &str {
        self.policy.partition_key()
    }

    /// The partition new elements are stamped with
    pub fn write_partition(&self) -> String {
        self.policy.write_partition()
    }

    /// Redirect subsequent writes to another partition
    pub fn set_write_partition(&self, partition: &str) {
        self.policy.set_write_partition(partition);
    }

    /// The partitions visible through traversal
    pub fn read_partitions(&self) -> HashSet<String> {
        self.policy.read_partitions()
    }

    /// Make a partition visible through traversal
    pub fn add_read_partition(&self, partition: &str) {
        self.policy.add_read_partition(partition);
    }

    /// Make a partition invisible through traversal
    pub fn remove_read_partition(&self, partition: &str) {
        self.policy.remove_read_partition(partition);
    }

    fn wrap_vertex(&self, base: VertexRef) -> VertexRef {
        Arc::new(PartitionVertex {
            base,
            policy: Arc::clone(&self.policy),
        })
    }

    fn wrap_edge(&self, base: EdgeRef) -> EdgeRef {
        Arc::new(PartitionEdge {
            base,
            policy: Arc::clone(&self.policy),
        })
    }
}

impl Graph for PartitionGraph {
    fn add_vertex(&self, id: Option<ElementId>) -> GraphResult<VertexRef> {
        let vertex = self.base.add_vertex(id)?;
        self.policy.stamp(vertex.as_ref())?;
        Ok(self.wrap_vertex(vertex))
    }

    fn vertex(&self, id: &ElementId) -> GraphResult<Option<VertexRef>> {
        Ok(self
            .base
            .vertex(id)?
            .filter(|v| self.policy.is_visible(v.as_ref()))
            .map(|v| self.wrap_vertex(v)))
    }

    fn remove_vertex(&self, id: &ElementId) -> GraphResult<()> {
        self.base.remove_vertex(id)
    }

    fn vertices(&self) -> GraphResult<VertexStream> {
        let policy = Arc::clone(&self.policy);
        Ok(self.base.vertices()?.filter_wrap(move |vertex| {
            policy.is_visible(vertex.as_ref()).then(|| {
                Arc::new(PartitionVertex {
                    base: vertex,
                    policy: Arc::clone(&policy),
                }) as VertexRef
            })
        }))
    }

    fn add_edge(
        &self,
        id: Option<ElementId>,
        tail: &ElementId,
        head: &ElementId,
        label: &str,
    ) -> GraphResult<EdgeRef> {
        let edge = self.base.add_edge(id, tail, head, label)?;
        self.policy.stamp(edge.as_ref())?;
        Ok(self.wrap_edge(edge))
    }

    fn edge(&self, id: &ElementId) -> GraphResult<Option<EdgeRef>> {
        Ok(self
            .base
            .edge(id)?
            .filter(|e| self.policy.is_visible(e.as_ref()))
            .map(|e| self.wrap_edge(e)))
    }

    fn remove_edge(&self, id: &ElementId) -> GraphResult<()> {
        self.base.remove_edge(id)
    }

    fn edges(&self) -> GraphResult<EdgeStream> {
        let policy = Arc::clone(&self.policy);
        Ok(self.base.edges()?.filter_wrap(move |edge| {
            policy.is_visible(edge.as_ref()).then(|| {
                Arc::new(PartitionEdge {
                    base: edge,
                    policy: Arc::clone(&policy),
                }) as EdgeRef
            })
        }))
    }
}

impl PartitionVertex {
    /// The wrapped base vertex
    pub fn base_vertex(&self) -> VertexRef {
        Arc::clone(&self.base)
    }
}

impl Vertex for PartitionVertex {
    fn edges(&self, direction: Direction, labels: &[&str]) -> GraphResult<EdgeStream> {
        let policy = Arc::clone(&self.policy);
        Ok(self
            .base
            .edges(direction, labels)?
            .filter_wrap(move |edge| {
                policy.is_visible(edge.as_ref()).then(|| {
                    Arc::new(PartitionEdge {
                        base: edge,
                        policy: Arc::clone(&policy),
                    }) as EdgeRef
                })
            }))
    }

    fn vertices(&self, direction: Direction, labels: &[&str]) -> GraphResult<VertexStream> {
        let policy = Arc::clone(&self.policy);
        Ok(self
            .base
            .vertices(direction, labels)?
            .filter_wrap(move |vertex| {
                policy.is_visible(vertex.as_ref()).then(|| {
                    Arc::new(PartitionVertex {
                        base: vertex,
                        policy: Arc::clone(&policy),
                    }) as VertexRef
                })
            }))
    }
}

impl PartitionEdge {
    /// The wrapped base edge
    pub fn base_edge(&self) -> EdgeRef {
        Arc::clone(&self.base)
    }
}

impl Edge for PartitionEdge {
    /// Endpoint access is NOT partition-filtered: an edge's endpoints are
    /// reachable regardless of partition, avoiding dangling references.
    fn vertex(&self, direction: Direction) -> GraphResult<VertexRef> {
        Ok(Arc::new(PartitionVertex {
            base: self.base.vertex(direction)?,
            policy: Arc::clone(&self.policy),
        }))
    }

    fn label(&self) -> String {
        self.base.label()
    }
}
