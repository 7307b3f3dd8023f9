use core::fmt;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream that maps each element to a collection and yields the produced
/// elements one by one.
///
/// This `struct` is created by the [`flat_collection`] method on
/// [`SequenceExt`]. See its documentation for more.
///
/// [`flat_collection`]: crate::sequence::SequenceExt::flat_collection
/// [`SequenceExt`]: crate::sequence::SequenceExt
#[pin_project]
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct FlatCollection<S, F, C: IntoIterator> {
    #[pin]
    stream: S,
    f: F,
    current: Option<C::IntoIter>,
}

/// A stream that expands each element into the entries of its associated
/// mapping.
///
/// This is [`FlatCollection`] specialized to `(key, value)` collections;
/// created by the [`flat_map_to_entry`] method on [`SequenceExt`].
///
/// [`flat_map_to_entry`]: crate::sequence::SequenceExt::flat_map_to_entry
/// [`SequenceExt`]: crate::sequence::SequenceExt
pub type FlatMapToEntry<S, F, M> = FlatCollection<S, F, M>;

impl<S, F, C: IntoIterator> FlatCollection<S, F, C> {
    pub(crate) fn new(stream: S, f: F) -> Self {
        Self {
            stream,
            f,
            current: None,
        }
    }
}

impl<S, F, C> Stream for FlatCollection<S, F, C>
where
    S: Stream,
    F: FnMut(S::Item) -> C,
    C: IntoIterator,
{
    type Item = C::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(iter) = this.current.as_mut() {
                if let Some(item) = iter.next() {
                    return Poll::Ready(Some(item));
                }
                *this.current = None;
            }
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(item) => *this.current = Some((this.f)(item).into_iter()),
                None => return Poll::Ready(None),
            }
        }
    }
}

impl<S, F, C> fmt::Debug for FlatCollection<S, F, C>
where
    S: fmt::Debug,
    C: IntoIterator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatCollection")
            .field("stream", &self.stream)
            .finish_non_exhaustive()
    }
}
