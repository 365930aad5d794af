//! Database header parsing for SQLite format.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};

use thiserror::Error;

/// Offset of the page size field in the database header.
const PAGE_SIZE_OFFSET: u64 = 16;

/// Errors from reading the raw database file header.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("no such file: {0}")]
    NotFound(String),
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("file is too short to contain a page size")]
    TruncatedHeader,
}

/// Read the page size from the database header.
///
/// The page size is stored at byte offset 16-17 in the database header
/// as a 2-byte big-endian integer, regardless of file length. The value
/// is returned verbatim: the format defines a stored value of `1` to
/// mean 65536, and that remapping is deliberately not applied here.
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
///
/// # Returns
///
/// Returns the raw page size field, or an error if the file is missing,
/// unreadable, or shorter than 18 bytes.
pub fn read_page_size(path: &str) -> Result<u16, FileError> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FileError::NotFound(path.to_string()),
        _ => FileError::Io(e),
    })?;

    file.seek(SeekFrom::Start(PAGE_SIZE_OFFSET))?;
    let mut field = [0u8; 2];
    file.read_exact(&mut field).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => FileError::TruncatedHeader,
        _ => FileError::Io(e),
    })?;

    Ok(u16::from_be_bytes(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with_bytes(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_big_endian_page_size() {
        let mut header = vec![0u8; 100];
        header[16] = 0x10;
        header[17] = 0x00;
        let file = file_with_bytes(&header);

        let page_size = read_page_size(file.path().to_str().unwrap()).unwrap();
        assert_eq!(page_size, 4096);
    }

    #[test]
    fn returns_raw_value_one_without_remapping() {
        // Stored value 1 means 65536 in the format; the reader reports 1.
        let mut header = vec![0u8; 100];
        header[17] = 0x01;
        let file = file_with_bytes(&header);

        let page_size = read_page_size(file.path().to_str().unwrap()).unwrap();
        assert_eq!(page_size, 1);
    }

    #[test]
    fn short_file_is_a_truncated_header() {
        let file = file_with_bytes(&[0u8; 17]);
        let err = read_page_size(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, FileError::TruncatedHeader));
    }

    #[test]
    fn empty_file_is_a_truncated_header() {
        let file = file_with_bytes(&[]);
        let err = read_page_size(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, FileError::TruncatedHeader));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = read_page_size("/no/such/place/test.db").unwrap_err();
        assert!(matches!(err, FileError::NotFound(_)));
    }
}
