use core::fmt;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream that maps the value of each pair, leaving keys untouched.
///
/// This `struct` is created by the [`map_values`] method on
/// [`EntrySequenceExt`]. See its documentation for more.
///
/// [`map_values`]: crate::entry::EntrySequenceExt::map_values
/// [`EntrySequenceExt`]: crate::entry::EntrySequenceExt
#[pin_project]
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct MapValues<S, F> {
    #[pin]
    stream: S,
    f: F,
}

impl<S, F> MapValues<S, F> {
    pub(crate) fn new(stream: S, f: F) -> Self {
        Self { stream, f }
    }
}

impl<S, F, K, V, V2> Stream for MapValues<S, F>
where
    S: Stream<Item = (K, V)>,
    F: FnMut(V) -> V2,
{
    type Item = (K, V2);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        Poll::Ready(ready!(this.stream.poll_next(cx)).map(|(key, value)| (key, (this.f)(value))))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for MapValues<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapValues")
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
    fn maps_values_only() {
        block_on(async {
            let pairs: Vec<_> = source::of_iter([(1, 10), (2, 20)])
                .map_values(|v| v + 1)
                .collect()
                .await;
            assert_eq!(pairs, [(1, 11), (2, 21)]);
        });
    }
}
