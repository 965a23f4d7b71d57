//! Tests for the decorator families
//!
//! Covers identity preservation across wrapping, boundary closure (every
//! element obtained through a wrapper belongs to the same family), and
//! the read-only policy's rejection behavior.

#[path = "testutils/mod.rs"]
mod testutils;

use graphmantle::{
    elements_equal, Direction, Edge, Element, Graph, GraphError, GraphRef, ReadOnlyGraph, Value,
    Vertex, WrappedGraph, WrappedVertex,
};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use testutils::social_graph;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_wrapping_preserves_identity_and_string_form() {
    let fixture = social_graph();
    let base = fixture.graph.vertex(&fixture.alice).unwrap().unwrap();

    let wrapped = WrappedGraph::new(fixture.graph.clone() as GraphRef);
    let alice = wrapped.vertex(&fixture.alice).unwrap().unwrap();

    assert_eq!(alice.id(), base.id());
    assert_eq!(alice.to_string(), base.to_string());
    assert!(elements_equal(alice.as_ref(), base.as_ref()));
}

#[test]
fn test_two_wrappers_around_the_same_base_are_equal() {
    let fixture = social_graph();
    let base = fixture.graph.vertex(&fixture.alice).unwrap().unwrap();

    let first = WrappedVertex::new(Arc::clone(&base));
    let second = WrappedVertex::new(base);
    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));
}

#[test]
fn test_round_trip_unwrap_recovers_the_base() {
    let fixture = social_graph();
    let base = fixture.graph.vertex(&fixture.alice).unwrap().unwrap();

    let wrapped = WrappedVertex::new(Arc::clone(&base));
    assert_eq!(wrapped.base_vertex().id(), base.id());
}

#[test]
fn test_wrapper_writes_reach_the_base() {
    let fixture = social_graph();
    let wrapped = WrappedGraph::new(fixture.graph.clone() as GraphRef);

    let alice = wrapped.vertex(&fixture.alice).unwrap().unwrap();
    alice.set_property("age", Value::from(30i64)).unwrap();

    let base = fixture.graph.vertex(&fixture.alice).unwrap().unwrap();
    assert_eq!(base.property("age").unwrap(), Some(Value::from(30i64)));
}

#[test]
fn test_wrapped_graph_mutations_delegate() {
    let fixture = social_graph();
    let wrapped = WrappedGraph::new(fixture.graph.clone() as GraphRef);

    let dave = wrapped.add_vertex(None).unwrap();
    wrapped
        .add_edge(None, &fixture.alice, &dave.id(), "knows")
        .unwrap();
    assert!(fixture.graph.vertex(&dave.id()).unwrap().is_some());

    wrapped.remove_vertex(&dave.id()).unwrap();
    assert!(fixture.graph.vertex(&dave.id()).unwrap().is_none());
}

#[test]
fn test_read_only_graph_rejects_mutation() {
    let fixture = social_graph();
    let frozen = ReadOnlyGraph::new(fixture.graph.clone() as GraphRef);

    assert!(matches!(
        frozen.add_vertex(None),
        Err(GraphError::ReadOnly(_))
    ));
    assert!(matches!(
        frozen.add_edge(None, &fixture.alice, &fixture.bob, "knows"),
        Err(GraphError::ReadOnly(_))
    ));
    assert!(matches!(
        frozen.remove_vertex(&fixture.alice),
        Err(GraphError::ReadOnly(_))
    ));

    // The base graph is untouched by rejected operations.
    assert!(fixture.graph.vertex(&fixture.alice).unwrap().is_some());
    assert_eq!(fixture.graph.edges().unwrap().count(), 3);
}

#[test]
fn test_read_only_elements_reject_property_writes() {
    let fixture = social_graph();
    let frozen = ReadOnlyGraph::new(fixture.graph.clone() as GraphRef);

    let alice = frozen.vertex(&fixture.alice).unwrap().unwrap();
    assert!(matches!(
        alice.set_property("age", Value::from(30i64)),
        Err(GraphError::ReadOnly(_))
    ));
    assert!(matches!(
        alice.remove_property("name"),
        Err(GraphError::ReadOnly(_))
    ));

    // Reads still delegate.
    assert_eq!(alice.property("name").unwrap(), Some(Value::from("Alice")));

    let base = fixture.graph.vertex(&fixture.alice).unwrap().unwrap();
    assert_eq!(base.property("age").unwrap(), None);
}

#[test]
fn test_read_only_boundary_is_closed_under_traversal() {
    let fixture = social_graph();
    let frozen = ReadOnlyGraph::new(fixture.graph.clone() as GraphRef);

    // Anything reached by traversal is still read-only: vertex -> edge,
    // edge -> endpoint, vertex -> neighbor.
    let alice = frozen.vertex(&fixture.alice).unwrap().unwrap();
    for edge in alice.edges(Direction::Both, &[]).unwrap() {
        assert!(matches!(
            edge.set_property("since", Value::from(2019i64)),
            Err(GraphError::ReadOnly(_))
        ));
        let endpoint = edge.vertex(Direction::Out).unwrap();
        assert!(matches!(
            endpoint.set_property("age", Value::from(1i64)),
            Err(GraphError::ReadOnly(_))
        ));
        // The BOTH endpoint error passes through the wrapper unchanged.
        assert!(matches!(
            edge.vertex(Direction::Both),
            Err(GraphError::InvalidArgument(_))
        ));
    }
    for neighbor in alice.vertices(Direction::Both, &[]).unwrap() {
        assert!(matches!(
            neighbor.set_property("age", Value::from(1i64)),
            Err(GraphError::ReadOnly(_))
        ));
    }
    for edge in frozen.edges().unwrap() {
        assert!(matches!(
            edge.remove_property("since"),
            Err(GraphError::ReadOnly(_))
        ));
    }
}

#[test]
fn test_stacked_wrappers_compose() {
    let fixture = social_graph();
    let frozen: GraphRef = Arc::new(ReadOnlyGraph::new(fixture.graph.clone() as GraphRef));
    let stacked = WrappedGraph::new(frozen);

    let alice = stacked.vertex(&fixture.alice).unwrap().unwrap();
    assert_eq!(alice.property("name").unwrap(), Some(Value::from("Alice")));
    // The inner policy still applies through the outer wrapper.
    assert!(matches!(
        alice.set_property("age", Value::from(30i64)),
        Err(GraphError::ReadOnly(_))
    ));
}
