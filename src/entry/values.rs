use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream that projects each pair to its value.
///
/// This `struct` is created by the [`values`] method on [`EntrySequenceExt`].
/// See its documentation for more.
///
/// [`values`]: crate::entry::EntrySequenceExt::values
/// [`EntrySequenceExt`]: crate::entry::EntrySequenceExt
#[pin_project]
#[derive(Debug)]
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct Values<S> {
    #[pin]
    stream: S,
}

impl<S> Values<S> {
    pub(crate) fn new(stream: S) -> Self {
        Self { stream }
    }
}

impl<S, K, V> Stream for Values<S>
where
    S: Stream<Item = (K, V)>,
{
    type Item = V;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        Poll::Ready(ready!(this.stream.poll_next(cx)).map(|(_, value)| value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}
