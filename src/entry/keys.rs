use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream that projects each pair to its key.
///
/// This `struct` is created by the [`keys`] method on [`EntrySequenceExt`].
/// See its documentation for more.
///
/// [`keys`]: crate::entry::EntrySequenceExt::keys
/// [`EntrySequenceExt`]: crate::entry::EntrySequenceExt
#[pin_project]
#[derive(Debug)]
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct Keys<S> {
    #[pin]
    stream: S,
}

impl<S> Keys<S> {
    pub(crate) fn new(stream: S) -> Self {
        Self { stream }
    }
}

impl<S, K, V> Stream for Keys<S>
where
    S: Stream<Item = (K, V)>,
{
    type Item = K;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        Poll::Ready(ready!(this.stream.poll_next(cx)).map(|(key, _)| key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::source;
    use futures_lite::future::block_on;
    use futures_lite::prelude::*;

    #[test]
    fn projects_keys_in_order() {
        block_on(async {
            let keys: Vec<_> = source::of_iter([(1, "a"), (2, "b")]).keys().collect().await;
            assert_eq!(keys, [1, 2]);
        });
    }
}
