// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Traversal direction
//!
//! `Out` selects edges where the vertex is the tail, `In` selects edges
//! where the vertex is the head. `Both` is a query-only selector meaning
//! the union of `In` and `Out`; it is never a real edge orientation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an incident-edge or adjacent-vertex traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Edges for which the vertex is the tail
    Out,
    /// Edges for which the vertex is the head
    In,
    /// Union of `In` and `Out` (query selector only)
    Both,
}

impl Direction {
    /// The opposite direction. `Both` is its own opposite.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Out => Direction::In,
            Direction::In => Direction::Out,
            Direction::Both => Direction::Both,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Out => write!(f, "OUT"),
            Direction::In => write!(f, "IN"),
            Direction::Both => write!(f, "BOTH"),
        }
    }
}
