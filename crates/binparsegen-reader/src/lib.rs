//! Runtime support for code generated by binparsegen.
//!
//! Generated accessors only need two things from their environment:
//! - [`ReaderAt`]: positional byte-range reads over the decoded source
//! - [`Structure`]: the fixed declared size of a generated structure
//!
//! [`PagedReader`] wraps any `ReaderAt` with a page cache so that decoding many
//! fields of the same structure does not hit the underlying source every time.

use std::fs::File;
use std::io;

mod paged;


pub use paged::{PagedReader, DEFAULT_PAGE_COUNT, DEFAULT_PAGE_SIZE};

/// Positional reads over a byte-addressable source.
///
/// Implementations fill as much of `buf` as is available at `offset` and return
/// the number of bytes written. Reading past the end of the source yields a
/// short count (possibly zero), not an error.
pub trait ReaderAt {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize>;
}

/// A generated structure with a schema-declared size.
pub trait Structure {
    fn size(&self) -> u64;
}

impl ReaderAt for [u8] {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        let Ok(start) = usize::try_from(offset) else {
            return Ok(0);
        };
        if start >= self.len() {
            return Ok(0);
        }
        let n = buf.len().min(self.len() - start);
        buf[..n].copy_from_slice(&self[start..start + n]);
        Ok(n)
    }
}

impl ReaderAt for Vec<u8> {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        self.as_slice().read_at(offset, buf)
    }
}

impl<R: ReaderAt + ?Sized> ReaderAt for &R {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read_at(offset, buf)
    }
}

impl<R: ReaderAt + ?Sized> ReaderAt for Box<R> {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read_at(offset, buf)
    }
}

impl ReaderAt for File {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        let mut total = 0;
        while total < buf.len() {
            match positional_read(self, &mut buf[total..], offset.saturating_add(total as u64)) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(total)
    }
}

#[cfg(unix)]
fn positional_read(file: &File, buf: &mut [u8], offset: u64) -> io::Result<usize> {
    std::os::unix::fs::FileExt::read_at(file, buf, offset)
}

#[cfg(windows)]
fn positional_read(file: &File, buf: &mut [u8], offset: u64) -> io::Result<usize> {
    std::os::windows::fs::FileExt::seek_read(file, buf, offset)
}
