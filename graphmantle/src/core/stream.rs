// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Lazy, closeable traversal sequences
//!
//! Traversal results are produced incrementally, never materialized
//! eagerly, and may be backed by resources (native cursors, iterators)
//! that require explicit release. `ElementStream` couples a boxed lazy
//! iterator with an optional close hook that is guaranteed to run exactly
//! once: on explicit `close()`, on drop after exhaustion, or on drop
//! after partial consumption.

use crate::core::element::{EdgeRef, VertexRef};

/// A lazy traversal sequence with a guaranteed-once release step
pub struct ElementStream<T> {
    iter: Box<dyn Iterator<Item = T> + Send>,
    on_close: Option<Box<dyn FnOnce() + Send>>,
}

/// Lazy sequence of vertices
pub type VertexStream = ElementStream<VertexRef>;

/// Lazy sequence of edges
pub type EdgeStream = ElementStream<EdgeRef>;

impl<T> ElementStream<T> {
    /// Wrap a lazy iterator with no release step
    pub fn new(iter: impl Iterator<Item = T> + Send + 'static) -> Self {
        ElementStream {
            iter: Box::new(iter),
            on_close: None,
        }
    }

    /// Wrap a lazy iterator with a release hook.
    ///
    /// The hook runs exactly once, even if the stream is dropped before
    /// it is exhausted.
    pub fn with_close(
        iter: impl Iterator<Item = T> + Send + 'static,
        on_close: impl FnOnce() + Send + 'static,
    ) -> Self {
        ElementStream {
            iter: Box::new(iter),
            on_close: Some(Box::new(on_close)),
        }
    }

    /// An empty stream
    pub fn empty() -> Self
    where
        T: Send + 'static,
    {
        ElementStream::new(std::iter::empty())
    }

    /// A stream over an already materialized sequence
    pub fn from_vec(items: Vec<T>) -> Self
    where
        T: Send + 'static,
    {
        ElementStream::new(items.into_iter())
    }

    /// Concatenate several streams, preserving per-stream order.
    ///
    /// Used for multi-label unions and for BOTH-direction traversal
    /// (the IN stream followed by the OUT stream). Each inner stream's
    /// release hook runs as the chain advances past it or when the chain
    /// itself is dropped.
    pub fn chain(streams: Vec<ElementStream<T>>) -> Self
    where
        T: Send + 'static,
    {
        ElementStream::new(streams.into_iter().flatten())
    }

    /// Lazily filter and re-wrap elements, element by element.
    ///
    /// This is the overlay's interception step: the source stream moves
    /// into the result, so its release hook stays armed and runs when the
    /// adapted stream is dropped. The decision closure is evaluated at
    /// the moment each element is pulled.
    pub fn filter_wrap<U>(
        self,
        mut f: impl FnMut(T) -> Option<U> + Send + 'static,
    ) -> ElementStream<U>
    where
        T: Send + 'static,
    {
        ElementStream {
            iter: Box::new(self.filter_map(move |item| f(item))),
            on_close: None,
        }
    }

    /// Release the stream's backing resources without consuming the rest
    pub fn close(self) {
        // Drop runs the hook.
    }
}

impl<T> Iterator for ElementStream<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }
}

impl<T> Drop for ElementStream<T> {
    fn drop(&mut self) {
        if let Some(on_close) = self.on_close.take() {
            on_close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counted_stream(counter: &Arc<AtomicUsize>) -> ElementStream<i32> {
        let counter = Arc::clone(counter);
        ElementStream::with_close(vec![1, 2, 3].into_iter(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_close_hook_runs_once_on_early_drop() {
        let closed = Arc::new(AtomicUsize::new(0));
        let mut stream = counted_stream(&closed);
        assert_eq!(stream.next(), Some(1));
        drop(stream);
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_close_hook_runs_once_on_exhaustion() {
        let closed = Arc::new(AtomicUsize::new(0));
        let stream = counted_stream(&closed);
        let items: Vec<i32> = stream.collect();
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_explicit_close() {
        let closed = Arc::new(AtomicUsize::new(0));
        let stream = counted_stream(&closed);
        stream.close();
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_chain_preserves_per_stream_order() {
        let a = ElementStream::from_vec(vec![1, 2]);
        let b = ElementStream::from_vec(vec![3]);
        let chained: Vec<i32> = ElementStream::chain(vec![a, b]).collect();
        assert_eq!(chained, vec![1, 2, 3]);
    }

    #[test]
    fn test_chain_releases_unconsumed_streams() {
        let closed = Arc::new(AtomicUsize::new(0));
        let a = counted_stream(&closed);
        let b = counted_stream(&closed);
        let mut chained = ElementStream::chain(vec![a, b]);
        assert_eq!(chained.next(), Some(1));
        drop(chained);
        assert_eq!(closed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_filter_wrap_is_lazy_and_keeps_close_hook() {
        let closed = Arc::new(AtomicUsize::new(0));
        let pulled = Arc::new(AtomicUsize::new(0));
        let pulled_in_filter = Arc::clone(&pulled);
        let mut filtered = counted_stream(&closed).filter_wrap(move |n| {
            pulled_in_filter.fetch_add(1, Ordering::SeqCst);
            (n % 2 == 1).then_some(n * 10)
        });

        assert_eq!(filtered.next(), Some(10));
        assert_eq!(pulled.load(Ordering::SeqCst), 1);
        assert_eq!(closed.load(Ordering::SeqCst), 0);

        drop(filtered);
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }
}
