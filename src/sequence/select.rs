use core::any::Any;
use core::fmt;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream that keeps only the elements whose runtime type is `U`.
///
/// This `struct` is created by the [`select`] method on [`SequenceExt`]. See
/// its documentation for more.
///
/// [`select`]: crate::sequence::SequenceExt::select
/// [`SequenceExt`]: crate::sequence::SequenceExt
#[pin_project]
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct Select<S, U> {
    #[pin]
    stream: S,
    _marker: PhantomData<U>,
}

impl<S, U> Select<S, U> {
    pub(crate) fn new(stream: S) -> Self {
        Self {
            stream,
            _marker: PhantomData,
        }
    }
}

impl<S, U> Stream for Select<S, U>
where
    S: Stream<Item = Box<dyn Any>>,
    U: Any,
{
    type Item = U;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(item) => match item.downcast::<U>() {
                    Ok(selected) => return Poll::Ready(Some(*selected)),
                    Err(_) => continue,
                },
                None => return Poll::Ready(None),
            }
        }
    }
}

impl<S: fmt::Debug, U> fmt::Debug for Select<S, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select").field("stream", &self.stream).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::source;
    use futures_lite::future::block_on;
    use futures_lite::prelude::*;
    use std::any::Any;

    #[test]
    fn keeps_matching_types_in_order() {
        block_on(async {
            let mixed: Vec<Box<dyn Any>> = vec![
                Box::new(1u32),
                Box::new("skipped"),
                Box::new(2u32),
                Box::new(0.5f64),
                Box::new(3u32),
            ];
            let numbers: Vec<u32> = source::of_iter(mixed).select::<u32>().collect().await;
            assert_eq!(numbers, [1, 2, 3]);
        });
    }

    #[test]
    fn no_match_yields_nothing() {
        block_on(async {
            let mixed: Vec<Box<dyn Any>> = vec![Box::new("a"), Box::new("b")];
            let numbers: Vec<u32> = source::of_iter(mixed).select::<u32>().collect().await;
            assert!(numbers.is_empty());
        });
    }
}
