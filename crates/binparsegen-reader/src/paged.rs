//! Page-caching reader.

use std::cell::RefCell;
use std::io;
use std::num::NonZeroUsize;

use lru::LruCache;
use tracing::trace;

use crate::ReaderAt;

pub const DEFAULT_PAGE_SIZE: usize = 4096;
pub const DEFAULT_PAGE_COUNT: usize = 100;

/// Caches whole pages of an underlying [`ReaderAt`].
///
/// Pages are evicted least-recently-used first. A page that was only partially
/// available (end of source) is cached with its short length.
pub struct PagedReader<R> {
    inner: R,
    page_size: usize,
    cache: RefCell<LruCache<u64, Vec<u8>>>,
}

impl<R: ReaderAt> PagedReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_geometry(inner, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_COUNT)
    }

    /// A reader caching `capacity` pages of `page_size` bytes.
    ///
    /// Zero values are bumped to one.
    pub fn with_geometry(inner: R, page_size: usize, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            page_size: page_size.max(1),
            cache: RefCell::new(LruCache::new(capacity)),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn cached_pages(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Copy from the cached page `page` starting at `within`; returns bytes copied.
    fn read_from_page(&self, page: u64, within: usize, out: &mut [u8]) -> io::Result<usize> {
        let mut cache = self.cache.borrow_mut();
        let data = cache.try_get_or_insert(page, || -> io::Result<Vec<u8>> {
            let mut data = vec![0u8; self.page_size];
            let n = self.inner.read_at(page * self.page_size as u64, &mut data)?;
            data.truncate(n);
            trace!(page, len = n, "page fill");
            Ok(data)
        })?;

        if within >= data.len() {
            return Ok(0);
        }
        let n = out.len().min(data.len() - within);
        out[..n].copy_from_slice(&data[within..within + n]);
        Ok(n)
    }
}

impl<R: ReaderAt> ReaderAt for PagedReader<R> {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        let page_size = self.page_size as u64;
        let mut total = 0;
        while total < buf.len() {
            let Some(position) = offset.checked_add(total as u64) else {
                break;
            };
            let page = position / page_size;
            let within = (position % page_size) as usize;
            let n = self.read_from_page(page, within, &mut buf[total..])?;
            total += n;
            // A short page means the source ends inside it.
            if n == 0 || within + n < self.page_size {
                break;
            }
        }
        Ok(total)
    }
}
