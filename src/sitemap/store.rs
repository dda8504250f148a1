//! Byte-level file access used by the sitemap codec.
//!
//! The codec never touches `std::fs` directly; it goes through a [`FileStore`]
//! passed to [`SitemapCodec::new`](super::SitemapCodec::new). Tests substitute
//! their own store to exercise open/read/close/write failures.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Read, Write},
    path::Path,
};

/// Permission bits for written sitemap files.
pub const FILE_MODE: u32 = 0o644;

/// Path-addressed byte store.
pub trait FileStore {
    /// Readable handle returned by [`FileStore::open`].
    type Reader: Read;

    fn open(&self, path: &Path) -> io::Result<Self::Reader>;

    /// Release a handle obtained from [`FileStore::open`].
    fn close(&self, reader: Self::Reader) -> io::Result<()>;

    /// Create or truncate `path` and write `bytes` to it.
    fn write(&self, path: &Path, bytes: &[u8], mode: u32) -> io::Result<()>;
}

/// [`FileStore`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FileStore for FsStore {
    type Reader = File;

    fn open(&self, path: &Path) -> io::Result<File> {
        File::open(path)
    }

    fn close(&self, reader: File) -> io::Result<()> {
        // std reports no error on close; dropping is all there is.
        drop(reader);
        Ok(())
    }

    fn write(&self, path: &Path, bytes: &[u8], mode: u32) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let mut file = options.open(path)?;
        file.write_all(bytes)?;
        file.flush()
    }
}

/// Read an entire file through `store`, closing the handle afterwards.
///
/// Returns the read result and the close result separately so the caller can
/// decide which one to surface.
pub(super) fn read_all<S: FileStore>(
    store: &S,
    mut reader: S::Reader,
) -> (io::Result<Vec<u8>>, io::Result<()>) {
    let mut bytes = Vec::new();
    let read = reader.read_to_end(&mut bytes).map(|_| bytes);
    let close = store.close(reader);
    (read, close)
}

/// Ensure the parent directory of `path` exists.
pub fn create_parent_dirs(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
