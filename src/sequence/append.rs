use core::fmt;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream that yields an inner stream followed by a tail of literal
/// values.
///
/// This `struct` is created by the [`append`] method on [`SequenceExt`]. See
/// its documentation for more.
///
/// [`append`]: crate::sequence::SequenceExt::append
/// [`SequenceExt`]: crate::sequence::SequenceExt
#[pin_project]
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct Append<S, I> {
    #[pin]
    stream: S,
    tail: I,
    head_done: bool,
}

impl<S, I> Append<S, I> {
    pub(crate) fn new(stream: S, tail: I) -> Self {
        Self {
            stream,
            tail,
            head_done: false,
        }
    }
}

impl<S, I> Stream for Append<S, I>
where
    S: Stream,
    I: Iterator<Item = S::Item>,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if !*this.head_done {
            match ready!(this.stream.poll_next(cx)) {
                Some(item) => return Poll::Ready(Some(item)),
                None => *this.head_done = true,
            }
        }
        Poll::Ready(this.tail.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (stream_lo, stream_hi) = self.stream.size_hint();
        let (tail_lo, tail_hi) = self.tail.size_hint();
        let hi = match (stream_hi, tail_hi) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (stream_lo.saturating_add(tail_lo), hi)
    }
}

impl<S: fmt::Debug, I: fmt::Debug> fmt::Debug for Append<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Append")
            .field("stream", &self.stream)
            .field("tail", &self.tail)
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
    fn appends_after_the_stream() {
        block_on(async {
            let all: Vec<_> = source::of_iter([1, 2]).append([3, 4]).collect().await;
            assert_eq!(all, [1, 2, 3, 4]);
        });
    }

    #[test]
    fn zero_values_is_a_no_op() {
        block_on(async {
            let all: Vec<i32> = source::of_iter([1, 2]).append([]).collect().await;
            assert_eq!(all, [1, 2]);
        });
    }
}
