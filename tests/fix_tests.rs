//! Tests for the fixed-point combinator's initialization contract.
//!
//! The builder closure must run at most once: lazily on first use, exactly
//! once under concurrent first access, and never again afterwards.

use refract::adapter::{JsonAdapter, fix};
use refract::json::json_array;
use refract::{lens, specification};
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

#[derive(Clone, Debug, PartialEq)]
struct Node {
    children: Vec<Node>,
}

fn counted_node_adapter(runs: &Arc<AtomicUsize>) -> JsonAdapter<Node> {
    let observer = Arc::clone(runs);
    fix(move |adapter| {
        observer.fetch_add(1, Ordering::SeqCst);
        JsonAdapter::new(
            specification! {
                "children" => json_array(lens!(Node, children), &adapter),
            },
            || Node { children: vec![] },
        )
    })
}

#[rstest]
fn test_builder_does_not_run_at_construction() {
    let runs = Arc::new(AtomicUsize::new(0));
    let _adapter = counted_node_adapter(&runs);
    assert_eq!(runs.load(Ordering::SeqCst), 0);
}

#[rstest]
fn test_builder_runs_once_across_repeated_use() {
    let runs = Arc::new(AtomicUsize::new(0));
    let adapter = counted_node_adapter(&runs);
    let node = Node {
        children: vec![Node { children: vec![] }],
    };

    let encoded = adapter.transform(&node).unwrap();
    assert_eq!(adapter.reverse_transform(&encoded), Ok(node.clone()));
    let _ = adapter.transform(&node).unwrap();

    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_builder_runs_once_when_clones_are_used() {
    let runs = Arc::new(AtomicUsize::new(0));
    let adapter = counted_node_adapter(&runs);
    let clone = adapter.clone();
    let node = Node { children: vec![] };

    let _ = adapter.transform(&node).unwrap();
    let _ = clone.transform(&node).unwrap();

    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_builder_runs_once_under_concurrent_first_access() {
    let runs = Arc::new(AtomicUsize::new(0));
    let adapter = counted_node_adapter(&runs);
    let node = Node {
        children: vec![Node { children: vec![] }],
    };
    let expected = json!({ "children": [{ "children": [] }] });

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                assert_eq!(adapter.transform(&node), Ok(expected.clone()));
            });
        }
    });

    assert_eq!(runs.load(Ordering::SeqCst), 1);
}
