use core::fmt;
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// Creates an infinite sequence: the seed, then each successive application
/// of the step function to the previous element.
///
/// Must be bounded (`take`, `take_while`) before a full-consumption
/// terminal — eagerly consuming an unbounded sequence never returns.
///
/// # Examples
///
/// ```
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use sequex::source;
///
/// block_on(async {
///     let powers: Vec<u32> = source::iterate(1, |n| n * 2).take(4).collect().await;
///     assert_eq!(powers, [1, 2, 4, 8]);
/// })
/// ```
pub fn iterate<T, F>(seed: T, step: F) -> Iterate<T, F>
where
    F: FnMut(&T) -> T,
{
    Iterate { state: seed, step }
}

/// A stream produced from a seed and a step function.
///
/// This `struct` is created by the [`iterate`] function. See its
/// documentation for more.
#[pin_project]
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct Iterate<T, F> {
    state: T,
    step: F,
}

impl<T, F> Stream for Iterate<T, F>
where
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        let next = (this.step)(this.state);
        Poll::Ready(Some(mem::replace(this.state, next)))
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Iterate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iterate").field("state", &self.state).finish_non_exhaustive()
    }
}
