use futures_lite::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, BufReader, Lines};

/// Creates a lazy sequence over the lines of a reader.
///
/// The reader is wrapped in a [`BufReader`]; use
/// [`of_buffered_lines`] for readers that already buffer. Lines are read as
/// the sequence is pulled, and each item is an `io::Result<String>` —
/// reader failures surface unchanged at the element where they occur. The
/// reader's lifecycle stays with the caller; this layer never closes it.
///
/// # Examples
///
/// ```
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use sequex::source;
///
/// block_on(async {
///     let lines: Vec<String> = source::of_lines(&b"one\ntwo\n"[..])
///         .try_collect()
///         .await
///         .unwrap();
///     assert_eq!(lines, ["one", "two"]);
/// })
/// ```
pub fn of_lines<R: AsyncRead>(reader: R) -> Lines<BufReader<R>> {
    BufReader::new(reader).lines()
}

/// Creates a lazy sequence over the lines of an already-buffered reader.
///
/// No extra buffer is inserted. See [`of_lines`] for the semantics.
pub fn of_buffered_lines<R: AsyncBufRead>(reader: R) -> Lines<R> {
    reader.lines()
}
