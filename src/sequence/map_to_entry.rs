use core::fmt;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream that pairs each element with a derived key and value.
///
/// This `struct` is created by the [`map_to_entry`] and [`map_to_entry_with`]
/// methods on [`SequenceExt`]. See their documentation for more.
///
/// [`map_to_entry`]: crate::sequence::SequenceExt::map_to_entry
/// [`map_to_entry_with`]: crate::sequence::SequenceExt::map_to_entry_with
/// [`SequenceExt`]: crate::sequence::SequenceExt
#[pin_project]
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct MapToEntry<S, FK, FV> {
    #[pin]
    stream: S,
    key_fn: FK,
    value_fn: FV,
}

impl<S, FK, FV> MapToEntry<S, FK, FV> {
    pub(crate) fn new(stream: S, key_fn: FK, value_fn: FV) -> Self {
        Self {
            stream,
            key_fn,
            value_fn,
        }
    }
}

impl<S, FK, FV, K, V> Stream for MapToEntry<S, FK, FV>
where
    S: Stream,
    FK: FnMut(&S::Item) -> K,
    FV: FnMut(S::Item) -> V,
{
    type Item = (K, V);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        match ready!(this.stream.poll_next(cx)) {
            Some(item) => {
                let key = (this.key_fn)(&item);
                let value = (this.value_fn)(item);
                Poll::Ready(Some((key, value)))
            }
            None => Poll::Ready(None),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

impl<S: fmt::Debug, FK, FV> fmt::Debug for MapToEntry<S, FK, FV> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapToEntry")
            .field("stream", &self.stream)
            .finish_non_exhaustive()
    }
}
