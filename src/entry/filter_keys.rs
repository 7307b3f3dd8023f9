use core::fmt;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream that keeps only the pairs whose key passes a predicate.
///
/// This `struct` is created by the [`filter_keys`] method on
/// [`EntrySequenceExt`]. See its documentation for more.
///
/// [`filter_keys`]: crate::entry::EntrySequenceExt::filter_keys
/// [`EntrySequenceExt`]: crate::entry::EntrySequenceExt
#[pin_project]
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct FilterKeys<S, P> {
    #[pin]
    stream: S,
    predicate: P,
}

impl<S, P> FilterKeys<S, P> {
    pub(crate) fn new(stream: S, predicate: P) -> Self {
        Self { stream, predicate }
    }
}

impl<S, P, K, V> Stream for FilterKeys<S, P>
where
    S: Stream<Item = (K, V)>,
    P: FnMut(&K) -> bool,
{
    type Item = (K, V);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some((key, value)) => {
                    if (this.predicate)(&key) {
                        return Poll::Ready(Some((key, value)));
                    }
                }
                None => return Poll::Ready(None),
            }
        }
    }
}

impl<S: fmt::Debug, P> fmt::Debug for FilterKeys<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterKeys")
            .field("stream", &self.stream)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::source;
    use futures_lite::future::block_on;
    use futures_lite::prelude::*;

    #[test]
    fn filters_by_key() {
        block_on(async {
            let kept: Vec<_> = source::of_iter([(1, "a"), (2, "b"), (3, "c")])
                .filter_keys(|k| k % 2 == 1)
                .collect()
                .await;
            assert_eq!(kept, [(1, "a"), (3, "c")]);
        });
    }
}
