use futures_core::Stream;

/// Conversion into a sequence.
///
/// Values that already are streams convert to themselves — the identity
/// impl below means wrapping an existing sequence costs nothing and never
/// nests. Whether a value "already is" the abstraction is answered by the
/// type system, not a runtime check.
pub trait IntoSequence {
    /// The type of the elements being iterated over.
    type Item;

    /// Which kind of stream are we turning this into?
    type IntoSequence: Stream<Item = Self::Item>;

    /// Creates a stream from a value.
    fn into_sequence(self) -> Self::IntoSequence;
}

impl<S: Stream> IntoSequence for S {
    type Item = S::Item;
    type IntoSequence = S;

    #[inline]
    fn into_sequence(self) -> S {
        self
    }
}
