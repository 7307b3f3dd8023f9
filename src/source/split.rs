use core::fmt;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::Stream;
use regex::Regex;

/// Creates a lazy sequence over the segments of `text` produced by
/// regex-splitting on `pattern`.
///
/// The pattern literal is compiled first; a malformed pattern is returned
/// as a [`regex::Error`]. All segments are yielded, including empty ones at
/// match boundaries; a zero-width match advances by one character, matching
/// [`regex::Regex::split`] semantics.
///
/// # Examples
///
/// ```
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use sequex::source;
///
/// block_on(async {
///     let parts: Vec<&str> = source::split("a,,b", ",").unwrap().collect().await;
///     assert_eq!(parts, ["a", "", "b"]);
///
///     assert!(source::split("a", "(unclosed").is_err());
/// })
/// ```
pub fn split<'t>(text: &'t str, pattern: &str) -> Result<Split<'t>, regex::Error> {
    Ok(split_pattern(text, Regex::new(pattern)?))
}

/// Creates a lazy sequence over the segments of `text` produced by
/// splitting on an already-compiled pattern.
pub fn split_pattern(text: &str, pattern: Regex) -> Split<'_> {
    Split {
        pattern,
        text,
        last: 0,
        search: 0,
        finished: false,
    }
}

/// A stream over the segments of a regex split.
///
/// This `struct` is created by the [`split`] and [`split_pattern`]
/// functions. See their documentation for more.
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct Split<'t> {
    pattern: Regex,
    text: &'t str,
    /// End of the previous match; the next segment starts here.
    last: usize,
    /// Where the next match scan begins. Diverges from `last` only after a
    /// zero-width match.
    search: usize,
    finished: bool,
}

impl<'t> Stream for Split<'t> {
    type Item = &'t str;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.finished {
            return Poll::Ready(None);
        }
        let found = if this.search > this.text.len() {
            None
        } else {
            this.pattern.find_at(this.text, this.search)
        };
        Poll::Ready(Some(match found {
            Some(m) => {
                let segment = &this.text[this.last..m.start()];
                this.last = m.end();
                this.search = if m.is_empty() {
                    next_char_boundary(this.text, m.end())
                } else {
                    m.end()
                };
                segment
            }
            None => {
                this.finished = true;
                &this.text[this.last..]
            }
        }))
    }
}

/// One position past the char at `at`; past the end of `text` when `at` is
/// already at the end, which terminates the scan.
fn next_char_boundary(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map_or(at + 1, |c| at + c.len_utf8())
}

impl fmt::Debug for Split<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Split")
            .field("pattern", &self.pattern.as_str())
            .field("text", &self.text)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}
