use core::fmt;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream that yields a head of literal values before an inner stream.
///
/// This `struct` is created by the [`prepend`] method on [`SequenceExt`].
/// See its documentation for more.
///
/// [`prepend`]: crate::sequence::SequenceExt::prepend
/// [`SequenceExt`]: crate::sequence::SequenceExt
#[pin_project]
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct Prepend<S, I> {
    #[pin]
    stream: S,
    head: I,
}

impl<S, I> Prepend<S, I> {
    pub(crate) fn new(stream: S, head: I) -> Self {
        Self { stream, head }
    }
}

impl<S, I> Stream for Prepend<S, I>
where
    S: Stream,
    I: Iterator<Item = S::Item>,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if let Some(item) = this.head.next() {
            return Poll::Ready(Some(item));
        }
        this.stream.poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (stream_lo, stream_hi) = self.stream.size_hint();
        let (head_lo, head_hi) = self.head.size_hint();
        let hi = match (stream_hi, head_hi) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (stream_lo.saturating_add(head_lo), hi)
    }
}

impl<S: fmt::Debug, I: fmt::Debug> fmt::Debug for Prepend<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prepend")
            .field("stream", &self.stream)
            .field("head", &self.head)
            .finish()
    }
}
