//! Shared fixtures for integration tests

use graphmantle::{Element, ElementId, Graph, MemoryGraph, Value};
use std::sync::Arc;

/// Initialize test logging once; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A small social graph:
///
/// ```text
/// alice -knows-> bob -knows-> carol
/// carol -likes-> alice
/// ```
pub struct SocialGraph {
    pub graph: Arc<MemoryGraph>,
    pub alice: ElementId,
    pub bob: ElementId,
    pub carol: ElementId,
}

pub fn social_graph() -> SocialGraph {
    init_logging();
    let graph = Arc::new(MemoryGraph::new());

    let alice = graph.add_vertex(Some(ElementId::new("alice"))).unwrap();
    alice.set_property("name", Value::from("Alice")).unwrap();
    let bob = graph.add_vertex(Some(ElementId::new("bob"))).unwrap();
    bob.set_property("name", Value::from("Bob")).unwrap();
    let carol = graph.add_vertex(Some(ElementId::new("carol"))).unwrap();
    carol.set_property("name", Value::from("Carol")).unwrap();

    graph
        .add_edge(None, &alice.id(), &bob.id(), "knows")
        .unwrap();
    graph.add_edge(None, &bob.id(), &carol.id(), "knows").unwrap();
    graph
        .add_edge(None, &carol.id(), &alice.id(), "likes")
        .unwrap();

    SocialGraph {
        graph,
        alice: alice.id(),
        bob: bob.id(),
        carol: carol.id(),
    }
}
