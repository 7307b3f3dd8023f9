use core::fmt;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::io::{Read, Seek};

use futures_core::Stream;
use zip::result::ZipResult;
use zip::ZipArchive;

/// Metadata for one archive entry.
///
/// Carries what the central directory knows; entry contents are never
/// opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Entry path inside the archive.
    pub name: String,
    /// Uncompressed size in bytes.
    pub size: u64,
    /// Compressed size in bytes.
    pub compressed_size: u64,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

/// Creates a lazy sequence over the entry metadata of a zip (or jar — jars
/// are zips) archive, in archive order.
///
/// Each item is a `ZipResult<ArchiveEntry>`: a corrupt central-directory
/// record surfaces as an error at that entry, without ending the sequence.
/// The archive stays borrowed for the duration and its lifecycle — opening
/// and closing the underlying reader — remains the caller's.
///
/// # Examples
///
/// ```
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use sequex::source;
/// use std::io::{Cursor, Write};
/// use zip::write::SimpleFileOptions;
///
/// let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
/// writer.start_file("a.txt", SimpleFileOptions::default()).unwrap();
/// writer.write_all(b"hello").unwrap();
/// let buf = writer.finish().unwrap();
///
/// block_on(async {
///     let mut archive = zip::ZipArchive::new(buf).unwrap();
///     let names: Vec<String> = source::of_entries(&mut archive)
///         .map(|entry| entry.unwrap().name)
///         .collect()
///         .await;
///     assert_eq!(names, ["a.txt"]);
/// })
/// ```
pub fn of_entries<R: Read + Seek>(archive: &mut ZipArchive<R>) -> ArchiveEntries<'_, R> {
    ArchiveEntries { archive, index: 0 }
}

/// A stream over the entry metadata of an archive.
///
/// This `struct` is created by the [`of_entries`] function. See its
/// documentation for more.
#[must_use = "streams do nothing unless polled or .awaited"]
pub struct ArchiveEntries<'a, R> {
    archive: &'a mut ZipArchive<R>,
    index: usize,
}

impl<R: Read + Seek> Stream for ArchiveEntries<'_, R> {
    type Item = ZipResult<ArchiveEntry>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.index >= this.archive.len() {
            return Poll::Ready(None);
        }
        // `by_index_raw` reads metadata only; contents stay untouched.
        let entry = this.archive.by_index_raw(this.index).map(|file| ArchiveEntry {
            name: file.name().to_owned(),
            size: file.size(),
            compressed_size: file.compressed_size(),
            is_dir: file.is_dir(),
        });
        this.index += 1;
        Poll::Ready(Some(entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.archive.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<R> fmt::Debug for ArchiveEntries<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArchiveEntries")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
