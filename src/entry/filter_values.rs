use core::fmt;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream that keeps only the pairs whose value passes a predicate.
///
/// This `struct` is created by the [`filter_values`] method on
/// [`EntrySequenceExt`]. See its documentation for more.
///
/// [`filter_values`]: crate::entry::EntrySequenceExt::filter_values
/// [`EntrySequenceExt`]: crate::entry::EntrySequenceExt
#[pin_project]
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct FilterValues<S, P> {
    #[pin]
    stream: S,
    predicate: P,
}

impl<S, P> FilterValues<S, P> {
    pub(crate) fn new(stream: S, predicate: P) -> Self {
        Self { stream, predicate }
    }
}

impl<S, P, K, V> Stream for FilterValues<S, P>
where
    S: Stream<Item = (K, V)>,
    P: FnMut(&V) -> bool,
{
    type Item = (K, V);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some((key, value)) => {
                    if (this.predicate)(&value) {
                        return Poll::Ready(Some((key, value)));
                    }
                }
                None => return Poll::Ready(None),
            }
        }
    }
}

impl<S: fmt::Debug, P> fmt::Debug for FilterValues<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterValues")
            .field("stream", &self.stream)
            .finish_non_exhaustive()
    }
}
