// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory reference backend
//!
//! Provides fast graph storage using HashMap for vertices/edges and
//! adjacency lists for traversal, behind the `Graph` capability trait.
//! Element handles are cheap id-carrying views that lock the shared core
//! per call; a handle outliving its record surfaces `ElementNotFound`.

use crate::core::direction::Direction;
use crate::core::element::{
    both_is_not_an_endpoint, elements_equal, validate_property, Edge, EdgeRef, Element,
    ElementId, Vertex, VertexRef,
};
use crate::core::graph::Graph;
use crate::core::stream::{EdgeStream, ElementStream, VertexStream};
use crate::core::value::Value;
use crate::error::{GraphError, GraphResult};
use log::debug;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug, Default)]
struct VertexRecord {
    properties: HashMap<String, Value>,
}

#[derive(Debug)]
struct EdgeRecord {
    tail: ElementId,
    head: ElementId,
    label: String,
    properties: HashMap<String, Value>,
}

/// Shared mutable state behind every handle issued by a `MemoryGraph`
#[derive(Debug, Default)]
struct GraphCore {
    vertices: HashMap<ElementId, VertexRecord>,
    edges: HashMap<ElementId, EdgeRecord>,
    /// vertex id -> outgoing edge ids, in insertion order
    adjacency_out: HashMap<ElementId, Vec<ElementId>>,
    /// vertex id -> incoming edge ids, in insertion order
    adjacency_in: HashMap<ElementId, Vec<ElementId>>,
    next_id: u64,
}

impl GraphCore {
    fn assign_id(&mut self, prefix: &str) -> ElementId {
        loop {
            let id = ElementId::new(format!("{}{}", prefix, self.next_id));
            self.next_id += 1;
            if !self.vertices.contains_key(&id) && !self.edges.contains_key(&id) {
                return id;
            }
        }
    }
}

/// In-memory property graph
pub struct MemoryGraph {
    core: Arc<RwLock<GraphCore>>,
}

impl MemoryGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        MemoryGraph {
            core: Arc::new(RwLock::new(GraphCore::default())),
        }
    }

    fn vertex_handle(&self, id: ElementId) -> VertexRef {
        Arc::new(MemoryVertex {
            core: Arc::clone(&self.core),
            id,
        })
    }

    fn edge_handle(&self, id: ElementId, record: &EdgeRecord) -> EdgeRef {
        Arc::new(MemoryEdge {
            core: Arc::clone(&self.core),
            id,
            tail: record.tail.clone(),
            head: record.head.clone(),
            label: record.label.clone(),
        })
    }
}

impl Default for MemoryGraph {
    fn default() -> Self {
        MemoryGraph::new()
    }
}

impl Graph for MemoryGraph {
    fn add_vertex(&self, id: Option<ElementId>) -> GraphResult<VertexRef> {
        let mut core = self.core.write();
        let id = match id {
            Some(id) => {
                if core.vertices.contains_key(&id) {
                    return Err(GraphError::InvalidArgument(format!(
                        "vertex id already exists: {}",
                        id
                    )));
                }
                id
            }
            None => core.assign_id("v"),
        };

        core.vertices.insert(id.clone(), VertexRecord::default());
        core.adjacency_out.insert(id.clone(), Vec::new());
        core.adjacency_in.insert(id.clone(), Vec::new());
        debug!("added vertex {}", id);
        drop(core);

        Ok(self.vertex_handle(id))
    }

    fn vertex(&self, id: &ElementId) -> GraphResult<Option<VertexRef>> {
        let exists = self.core.read().vertices.contains_key(id);
        Ok(exists.then(|| self.vertex_handle(id.clone())))
    }

    fn remove_vertex(&self, id: &ElementId) -> GraphResult<()> {
        let mut core = self.core.write();
        if core.vertices.remove(id).is_none() {
            return Err(GraphError::ElementNotFound(id.to_string()));
        }

        // Incident edges go with the vertex.
        let mut incident: Vec<ElementId> = core.adjacency_out.remove(id).unwrap_or_default();
        incident.extend(core.adjacency_in.remove(id).unwrap_or_default());
        for edge_id in incident {
            if let Some(record) = core.edges.remove(&edge_id) {
                if let Some(out) = core.adjacency_out.get_mut(&record.tail) {
                    out.retain(|e| e != &edge_id);
                }
                if let Some(in_) = core.adjacency_in.get_mut(&record.head) {
                    in_.retain(|e| e != &edge_id);
                }
            }
        }
        debug!("removed vertex {}", id);
        Ok(())
    }

    fn vertices(&self) -> GraphResult<VertexStream> {
        let ids: Vec<ElementId> = self.core.read().vertices.keys().cloned().collect();
        let core = Arc::clone(&self.core);
        Ok(ElementStream::new(ids.into_iter().map(move |id| {
            Arc::new(MemoryVertex {
                core: Arc::clone(&core),
                id,
            }) as VertexRef
        })))
    }

    fn add_edge(
        &self,
        id: Option<ElementId>,
        tail: &ElementId,
        head: &ElementId,
        label: &str,
    ) -> GraphResult<EdgeRef> {
        let mut core = self.core.write();
        if !core.vertices.contains_key(tail) {
            return Err(GraphError::ElementNotFound(tail.to_string()));
        }
        if !core.vertices.contains_key(head) {
            return Err(GraphError::ElementNotFound(head.to_string()));
        }

        let id = match id {
            Some(id) => {
                if core.edges.contains_key(&id) {
                    return Err(GraphError::InvalidArgument(format!(
                        "edge id already exists: {}",
                        id
                    )));
                }
                id
            }
            None => core.assign_id("e"),
        };

        let record = EdgeRecord {
            tail: tail.clone(),
            head: head.clone(),
            label: label.to_string(),
            properties: HashMap::new(),
        };
        let handle = self.edge_handle(id.clone(), &record);

        core.adjacency_out
            .get_mut(tail)
            .expect("adjacency entry exists for every vertex")
            .push(id.clone());
        core.adjacency_in
            .get_mut(head)
            .expect("adjacency entry exists for every vertex")
            .push(id.clone());
        core.edges.insert(id.clone(), record);
        debug!("added edge {} ({} -[{}]-> {})", id, tail, label, head);

        Ok(handle)
    }

    fn edge(&self, id: &ElementId) -> GraphResult<Option<EdgeRef>> {
        let core = self.core.read();
        Ok(core
            .edges
            .get(id)
            .map(|record| self.edge_handle(id.clone(), record)))
    }

    fn remove_edge(&self, id: &ElementId) -> GraphResult<()> {
        let mut core = self.core.write();
        let record = core
            .edges
            .remove(id)
            .ok_or_else(|| GraphError::ElementNotFound(id.to_string()))?;
        if let Some(out) = core.adjacency_out.get_mut(&record.tail) {
            out.retain(|e| e != id);
        }
        if let Some(in_) = core.adjacency_in.get_mut(&record.head) {
            in_.retain(|e| e != id);
        }
        debug!("removed edge {}", id);
        Ok(())
    }

    fn edges(&self) -> GraphResult<EdgeStream> {
        let snapshot: Vec<(ElementId, ElementId, ElementId, String)> = {
            let core = self.core.read();
            core.edges
                .iter()
                .map(|(id, r)| (id.clone(), r.tail.clone(), r.head.clone(), r.label.clone()))
                .collect()
        };
        Ok(edge_stream_from_snapshot(Arc::clone(&self.core), snapshot))
    }
}

/// Handle to a vertex stored in a `MemoryGraph`
pub struct MemoryVertex {
    core: Arc<RwLock<GraphCore>>,
    id: ElementId,
}

/// Handle to an edge stored in a `MemoryGraph`
pub struct MemoryEdge {
    core: Arc<RwLock<GraphCore>>,
    id: ElementId,
    tail: ElementId,
    head: ElementId,
    label: String,
}

fn edge_stream_from_snapshot(
    core: Arc<RwLock<GraphCore>>,
    snapshot: Vec<(ElementId, ElementId, ElementId, String)>,
) -> EdgeStream {
    ElementStream::new(snapshot.into_iter().map(move |(id, tail, head, label)| {
        Arc::new(MemoryEdge {
            core: Arc::clone(&core),
            id,
            tail,
            head,
            label,
        }) as EdgeRef
    }))
}

/// Incident edge ids for one concrete direction, honoring label filters.
/// Zero labels means all labels; multiple labels chain per-label scans so
/// per-label order is preserved with no cross-label ordering guarantee.
fn incident_edge_ids(
    core: &GraphCore,
    vertex: &ElementId,
    direction: Direction,
    labels: &[&str],
) -> Vec<ElementId> {
    let adjacency = match direction {
        Direction::Out => &core.adjacency_out,
        Direction::In => &core.adjacency_in,
        Direction::Both => unreachable!("resolved to IN/OUT by the caller"),
    };
    let incident = match adjacency.get(vertex) {
        Some(edge_ids) => edge_ids,
        None => return Vec::new(),
    };
    if labels.is_empty() {
        return incident.clone();
    }
    let mut result = Vec::new();
    for label in labels {
        result.extend(
            incident
                .iter()
                .filter(|edge_id| {
                    core.edges
                        .get(*edge_id)
                        .map_or(false, |record| record.label == **label)
                })
                .cloned(),
        );
    }
    result
}

impl MemoryVertex {
    /// Snapshot incident edges in traversal order; BOTH is IN then OUT.
    fn edge_snapshot(
        &self,
        direction: Direction,
        labels: &[&str],
    ) -> GraphResult<Vec<(ElementId, ElementId, ElementId, String)>> {
        let core = self.core.read();
        if !core.vertices.contains_key(&self.id) {
            return Err(GraphError::ElementNotFound(self.id.to_string()));
        }
        let edge_ids = match direction {
            Direction::Both => {
                let mut ids = incident_edge_ids(&core, &self.id, Direction::In, labels);
                ids.extend(incident_edge_ids(&core, &self.id, Direction::Out, labels));
                ids
            }
            concrete => incident_edge_ids(&core, &self.id, concrete, labels),
        };
        Ok(edge_ids
            .into_iter()
            .filter_map(|edge_id| {
                core.edges.get(&edge_id).map(|r| {
                    (edge_id, r.tail.clone(), r.head.clone(), r.label.clone())
                })
            })
            .collect())
    }
}

impl Element for MemoryVertex {
    fn id(&self) -> ElementId {
        self.id.clone()
    }

    fn property(&self, key: &str) -> GraphResult<Option<Value>> {
        let core = self.core.read();
        let record = core
            .vertices
            .get(&self.id)
            .ok_or_else(|| GraphError::ElementNotFound(self.id.to_string()))?;
        Ok(record.properties.get(key).cloned())
    }

    fn set_property(&self, key: &str, value: Value) -> GraphResult<()> {
        validate_property(key, &value)?;
        let mut core = self.core.write();
        let record = core
            .vertices
            .get_mut(&self.id)
            .ok_or_else(|| GraphError::ElementNotFound(self.id.to_string()))?;
        record.properties.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_property(&self, key: &str) -> GraphResult<Option<Value>> {
        let mut core = self.core.write();
        let record = core
            .vertices
            .get_mut(&self.id)
            .ok_or_else(|| GraphError::ElementNotFound(self.id.to_string()))?;
        Ok(record.properties.remove(key))
    }

    fn property_keys(&self) -> GraphResult<HashSet<String>> {
        let core = self.core.read();
        let record = core
            .vertices
            .get(&self.id)
            .ok_or_else(|| GraphError::ElementNotFound(self.id.to_string()))?;
        Ok(record.properties.keys().cloned().collect())
    }
}

impl Vertex for MemoryVertex {
    fn edges(&self, direction: Direction, labels: &[&str]) -> GraphResult<EdgeStream> {
        let snapshot = self.edge_snapshot(direction, labels)?;
        Ok(edge_stream_from_snapshot(Arc::clone(&self.core), snapshot))
    }

    fn vertices(&self, direction: Direction, labels: &[&str]) -> GraphResult<VertexStream> {
        let snapshot = self.edge_snapshot(direction, labels)?;
        // The adjacent vertex of an OUT edge is its head, of an IN edge its
        // tail. Under BOTH the snapshot is IN edges then OUT edges, so take
        // the far end relative to this vertex per edge; for a self-loop the
        // far end is this vertex itself, once per incidence.
        let vertex_id = self.id.clone();
        let neighbor_ids: Vec<ElementId> = snapshot
            .into_iter()
            .map(|(_, tail, head, _)| match direction {
                Direction::Out => head,
                Direction::In => tail,
                Direction::Both => {
                    if tail != vertex_id {
                        tail
                    } else {
                        head
                    }
                }
            })
            .collect();
        let core = Arc::clone(&self.core);
        Ok(ElementStream::new(neighbor_ids.into_iter().map(move |id| {
            Arc::new(MemoryVertex {
                core: Arc::clone(&core),
                id,
            }) as VertexRef
        })))
    }
}

impl fmt::Display for MemoryVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v[{}]", self.id)
    }
}

impl fmt::Debug for MemoryVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl PartialEq for MemoryVertex {
    fn eq(&self, other: &Self) -> bool {
        elements_equal(self, other)
    }
}

impl Eq for MemoryVertex {}

impl Hash for MemoryVertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Element for MemoryEdge {
    fn id(&self) -> ElementId {
        self.id.clone()
    }

    fn property(&self, key: &str) -> GraphResult<Option<Value>> {
        let core = self.core.read();
        let record = core
            .edges
            .get(&self.id)
            .ok_or_else(|| GraphError::ElementNotFound(self.id.to_string()))?;
        Ok(record.properties.get(key).cloned())
    }

    fn set_property(&self, key: &str, value: Value) -> GraphResult<()> {
        validate_property(key, &value)?;
        let mut core = self.core.write();
        let record = core
            .edges
            .get_mut(&self.id)
            .ok_or_else(|| GraphError::ElementNotFound(self.id.to_string()))?;
        record.properties.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_property(&self, key: &str) -> GraphResult<Option<Value>> {
        let mut core = self.core.write();
        let record = core
            .edges
            .get_mut(&self.id)
            .ok_or_else(|| GraphError::ElementNotFound(self.id.to_string()))?;
        Ok(record.properties.remove(key))
    }

    fn property_keys(&self) -> GraphResult<HashSet<String>> {
        let core = self.core.read();
        let record = core
            .edges
            .get(&self.id)
            .ok_or_else(|| GraphError::ElementNotFound(self.id.to_string()))?;
        Ok(record.properties.keys().cloned().collect())
    }
}

impl Edge for MemoryEdge {
    fn vertex(&self, direction: Direction) -> GraphResult<VertexRef> {
        let id = match direction {
            Direction::Out => self.tail.clone(),
            Direction::In => self.head.clone(),
            Direction::Both => return Err(both_is_not_an_endpoint()),
        };
        Ok(Arc::new(MemoryVertex {
            core: Arc::clone(&self.core),
            id,
        }))
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

impl fmt::Display for MemoryEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e[{}][{}-{}->{}]", self.id, self.tail, self.label, self.head)
    }
}

impl fmt::Debug for MemoryEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl PartialEq for MemoryEdge {
    fn eq(&self, other: &Self) -> bool {
        elements_equal(self, other)
    }
}

impl Eq for MemoryEdge {}

impl Hash for MemoryEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
