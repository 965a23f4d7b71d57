//! Tests for the partition overlay
//!
//! Covers write-partition stamping, per-pull read filtering, policy
//! reconfiguration observed mid-stream, the endpoint-access bypass, and
//! visibility moves caused by overwriting the partition tag.

#[path = "testutils/mod.rs"]
mod testutils;

use graphmantle::{
    Direction, Edge, Element, ElementId, Graph, GraphRef, MemoryGraph, PartitionGraph, Value,
    Vertex,
};
use std::sync::Arc;
use testutils::init_logging;

const KEY: &str = "_partition";

fn base_graph() -> GraphRef {
    init_logging();
    Arc::new(MemoryGraph::new())
}

#[test]
fn test_elements_created_through_the_overlay_are_visible_in_it() {
    let overlay = PartitionGraph::new(base_graph(), KEY, "p");

    let a = overlay.add_vertex(Some(ElementId::new("a"))).unwrap();
    let b = overlay.add_vertex(Some(ElementId::new("b"))).unwrap();
    let e = overlay.add_edge(None, &a.id(), &b.id(), "knows").unwrap();

    assert!(overlay.vertex(&a.id()).unwrap().is_some());
    assert!(overlay.edge(&e.id()).unwrap().is_some());
    assert_eq!(overlay.vertices().unwrap().count(), 2);
    assert_eq!(overlay.edges().unwrap().count(), 1);
}

#[test]
fn test_elements_written_to_an_unread_partition_are_invisible() {
    let base = base_graph();
    let overlay =
        PartitionGraph::with_read_partitions(base, KEY, "q", ["p".to_string()]);

    let v = overlay.add_vertex(None).unwrap();
    // The handle returned by creation still works; lookups do not.
    assert_eq!(v.property(KEY).unwrap(), Some(Value::from("q")));
    assert!(overlay.vertex(&v.id()).unwrap().is_none());
    assert_eq!(overlay.vertices().unwrap().count(), 0);
}

#[test]
fn test_read_set_swap_re_evaluates_visibility() {
    let overlay = PartitionGraph::new(base_graph(), KEY, "p");
    let in_p = overlay.add_vertex(None).unwrap();

    overlay.set_write_partition("q");
    let in_q = overlay.add_vertex(None).unwrap();
    assert!(overlay.vertex(&in_q.id()).unwrap().is_none());

    overlay.add_read_partition("q");
    overlay.remove_read_partition("p");
    assert!(overlay.vertex(&in_p.id()).unwrap().is_none());
    assert!(overlay.vertex(&in_q.id()).unwrap().is_some());
    assert_eq!(overlay.vertices().unwrap().count(), 1);
}

#[test]
fn test_endpoint_access_bypasses_filtering() {
    let base = base_graph();
    let a = base.add_vertex(Some(ElementId::new("a"))).unwrap();
    a.set_property(KEY, Value::from("q")).unwrap();
    let b = base.add_vertex(Some(ElementId::new("b"))).unwrap();
    b.set_property(KEY, Value::from("p")).unwrap();
    let e = base.add_edge(None, &a.id(), &b.id(), "knows").unwrap();
    e.set_property(KEY, Value::from("p")).unwrap();

    let overlay = PartitionGraph::with_read_partitions(
        Arc::clone(&base),
        KEY,
        "p",
        ["p".to_string()],
    );

    // a is not independently reachable.
    assert!(overlay.vertex(&a.id()).unwrap().is_none());

    // The edge is visible from b, and its tail endpoint is reachable
    // through it even though the tail lives in an unread partition.
    let b = overlay.vertex(&b.id()).unwrap().unwrap();
    let incoming: Vec<_> = b.edges(Direction::In, &[]).unwrap().collect();
    assert_eq!(incoming.len(), 1);
    let tail = incoming[0].vertex(Direction::Out).unwrap();
    assert_eq!(tail.id(), a.id());

    // Vertex-to-vertex traversal, in contrast, filters the far end.
    assert_eq!(b.vertices(Direction::In, &[]).unwrap().count(), 0);
}

#[test]
fn test_endpoints_of_bypassed_vertices_stay_in_the_overlay() {
    let base = base_graph();
    let overlay = PartitionGraph::new(base, KEY, "p");
    let a = overlay.add_vertex(None).unwrap();
    let b = overlay.add_vertex(None).unwrap();
    let e = overlay.add_edge(None, &a.id(), &b.id(), "knows").unwrap();

    // An endpoint obtained through an edge still traverses with the
    // overlay's filtering applied.
    let tail = e.vertex(Direction::Out).unwrap();
    assert_eq!(tail.edges(Direction::Out, &[]).unwrap().count(), 1);
    overlay.remove_read_partition("p");
    assert_eq!(tail.edges(Direction::Out, &[]).unwrap().count(), 0);
}

#[test]
fn test_two_overlays_over_one_base_disagree_on_visibility() {
    let base = base_graph();
    let writer = PartitionGraph::new(Arc::clone(&base), KEY, "p");
    let v = writer.add_vertex(None).unwrap();
    assert_eq!(v.property(KEY).unwrap(), Some(Value::from("p")));

    let p_view = PartitionGraph::with_read_partitions(
        Arc::clone(&base),
        KEY,
        "p",
        ["p".to_string()],
    );
    let q_view =
        PartitionGraph::with_read_partitions(base, KEY, "q", ["q".to_string()]);

    assert!(p_view.vertex(&v.id()).unwrap().is_some());
    assert!(q_view.vertex(&v.id()).unwrap().is_none());
}

#[test]
fn test_both_endpoint_request_fails_through_the_overlay() {
    let overlay = PartitionGraph::new(base_graph(), KEY, "p");
    let a = overlay.add_vertex(None).unwrap();
    let b = overlay.add_vertex(None).unwrap();
    let e = overlay.add_edge(None, &a.id(), &b.id(), "knows").unwrap();

    assert!(matches!(
        e.vertex(Direction::Both),
        Err(graphmantle::GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_tag_overwrite_moves_visibility() {
    let overlay = PartitionGraph::new(base_graph(), KEY, "p");
    let v = overlay.add_vertex(None).unwrap();
    assert!(overlay.vertex(&v.id()).unwrap().is_some());

    v.set_property(KEY, Value::from("q")).unwrap();
    assert!(overlay.vertex(&v.id()).unwrap().is_none());

    overlay.add_read_partition("q");
    assert!(overlay.vertex(&v.id()).unwrap().is_some());
}

#[test]
fn test_filtering_is_evaluated_per_pull() {
    let overlay = PartitionGraph::new(base_graph(), KEY, "p");
    let hub = overlay.add_vertex(Some(ElementId::new("hub"))).unwrap();
    let x = overlay.add_vertex(Some(ElementId::new("x"))).unwrap();
    overlay.add_edge(None, &hub.id(), &x.id(), "knows").unwrap();

    overlay.set_write_partition("q");
    let y = overlay.add_vertex(Some(ElementId::new("y"))).unwrap();
    overlay.add_edge(None, &hub.id(), &y.id(), "knows").unwrap();

    // The second edge is filtered out when the stream is consumed as is.
    assert_eq!(hub.edges(Direction::Out, &[]).unwrap().count(), 1);

    // Widening the read set between pulls makes the second edge appear:
    // the decision is made per element at pull time, not at call time.
    let mut stream = hub.edges(Direction::Out, &[]).unwrap();
    assert!(stream.next().is_some());
    overlay.add_read_partition("q");
    assert!(stream.next().is_some());
    assert!(stream.next().is_none());
}

#[test]
fn test_removals_pass_through_the_overlay() {
    let base = base_graph();
    let overlay = PartitionGraph::new(Arc::clone(&base), KEY, "p");
    let a = overlay.add_vertex(None).unwrap();
    let b = overlay.add_vertex(None).unwrap();
    let e = overlay.add_edge(None, &a.id(), &b.id(), "knows").unwrap();

    overlay.remove_edge(&e.id()).unwrap();
    assert!(base.edge(&e.id()).unwrap().is_none());

    overlay.remove_vertex(&a.id()).unwrap();
    assert!(base.vertex(&a.id()).unwrap().is_none());
}

#[test]
fn test_partition_tag_is_an_ordinary_property() {
    let overlay = PartitionGraph::new(base_graph(), KEY, "p");
    let v = overlay.add_vertex(None).unwrap();

    assert_eq!(v.property(KEY).unwrap(), Some(Value::from("p")));
    assert!(v.property_keys().unwrap().contains(KEY));
}
