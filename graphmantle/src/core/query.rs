// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Fluent traversal requests
//!
//! A `VertexQuery` narrows an adjacency traversal by direction, edge
//! labels, property equality, half-open property intervals, and a result
//! count cap. Compilation is lazy: nothing is pulled from the backend
//! until the resulting stream is consumed, and each filter decision is
//! made per element as it is pulled.

use crate::core::direction::Direction;
use crate::core::element::{Edge, Element, ElementId, VertexRef};
use crate::core::stream::{EdgeStream, ElementStream, VertexStream};
use crate::core::value::Value;
use crate::error::GraphResult;
use std::cmp::Ordering;

/// A direction- and label-constrained traversal request on one vertex
pub struct VertexQuery {
    vertex: VertexRef,
    direction: Direction,
    labels: Vec<String>,
    has: Vec<(String, Value)>,
    intervals: Vec<(String, Value, Value)>,
    limit: Option<usize>,
}

impl VertexQuery {
    /// Start a query on a vertex; the default direction is `Both`
    pub fn on(vertex: VertexRef) -> Self {
        VertexQuery {
            vertex,
            direction: Direction::Both,
            labels: Vec::new(),
            has: Vec::new(),
            intervals: Vec::new(),
            limit: None,
        }
    }

    /// Constrain the traversal direction
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Constrain to edges with any of the given labels
    pub fn labels(mut self, labels: &[&str]) -> Self {
        self.labels = labels.iter().map(|l| l.to_string()).collect();
        self
    }

    /// Keep only edges whose `key` property equals `value`
    pub fn has(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.has.push((key.to_string(), value.into()));
        self
    }

    /// Keep only edges whose `key` property lies in `[start, end)`
    pub fn interval(
        mut self,
        key: &str,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Self {
        self.intervals
            .push((key.to_string(), start.into(), end.into()));
        self
    }

    /// Cap the number of results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The matching incident edges, lazily
    pub fn edges(&self) -> GraphResult<EdgeStream> {
        let labels: Vec<&str> = self.labels.iter().map(String::as_str).collect();
        let stream = self.vertex.edges(self.direction, &labels)?;

        let has = self.has.clone();
        let intervals = self.intervals.clone();
        let filtered = stream.filter_wrap(move |edge| {
            edge_matches(edge.as_ref(), &has, &intervals).then_some(edge)
        });

        Ok(match self.limit {
            Some(limit) => ElementStream::new(filtered.take(limit)),
            None => filtered,
        })
    }

    /// The vertices at the far end of the matching edges, lazily.
    ///
    /// Under `Both`, the far end of a self-loop is the vertex itself.
    pub fn vertices(&self) -> GraphResult<VertexStream> {
        let direction = self.direction;
        let vertex_id = self.vertex.id();
        Ok(self
            .edges()?
            .filter_wrap(move |edge| opposite_endpoint(edge.as_ref(), direction, &vertex_id)))
    }

    /// The number of matching edges
    pub fn count(&self) -> GraphResult<usize> {
        Ok(self.edges()?.count())
    }
}

fn edge_matches(edge: &dyn Edge, has: &[(String, Value)], intervals: &[(String, Value, Value)]) -> bool {
    for (key, expected) in has {
        match edge.property(key) {
            Ok(Some(actual)) if &actual == expected => {}
            _ => return false,
        }
    }
    for (key, start, end) in intervals {
        let actual = match edge.property(key) {
            Ok(Some(actual)) => actual,
            _ => return false,
        };
        let in_range = matches!(
            actual.compare(start),
            Some(Ordering::Greater) | Some(Ordering::Equal)
        ) && matches!(actual.compare(end), Some(Ordering::Less));
        if !in_range {
            return false;
        }
    }
    true
}

fn opposite_endpoint(
    edge: &dyn Edge,
    direction: Direction,
    vertex_id: &ElementId,
) -> Option<VertexRef> {
    let endpoint = match direction {
        Direction::Out => edge.vertex(Direction::In),
        Direction::In => edge.vertex(Direction::Out),
        Direction::Both => match edge.vertex(Direction::Out) {
            Ok(tail) if tail.id() != *vertex_id => Ok(tail),
            Ok(_) => edge.vertex(Direction::In),
            Err(err) => Err(err),
        },
    };
    endpoint.ok()
}
