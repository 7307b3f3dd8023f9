use core::fmt;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream that maps the key of each pair, leaving values untouched.
///
/// This `struct` is created by the [`map_keys`] method on
/// [`EntrySequenceExt`]. See its documentation for more.
///
/// [`map_keys`]: crate::entry::EntrySequenceExt::map_keys
/// [`EntrySequenceExt`]: crate::entry::EntrySequenceExt
#[pin_project]
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct MapKeys<S, F> {
    #[pin]
    stream: S,
    f: F,
}

impl<S, F> MapKeys<S, F> {
    pub(crate) fn new(stream: S, f: F) -> Self {
        Self { stream, f }
    }
}

impl<S, F, K, K2, V> Stream for MapKeys<S, F>
where
    S: Stream<Item = (K, V)>,
    F: FnMut(K) -> K2,
{
    type Item = (K2, V);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        Poll::Ready(ready!(this.stream.poll_next(cx)).map(|(key, value)| ((this.f)(key), value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for MapKeys<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapKeys")
            .field("stream", &self.stream)
            .finish_non_exhaustive()
    }
}
