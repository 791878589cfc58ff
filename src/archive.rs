use std::fs::File;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use log::debug;
use tar::{Archive, Builder};

/// Concatenate the submission's files into one in-memory tar archive.
///
/// Files are appended in list order under their final path component, so
/// the server can re-extract them by name. No compression is applied; the
/// archive goes straight into payload encryption.
///
/// # Arguments
/// * `files` - Ordered, already-validated file paths
///
/// # Returns
/// The raw tar bytes, ready to encrypt
pub fn pack_files(files: &[PathBuf]) -> io::Result<Vec<u8>> {
    let mut builder = Builder::new(Vec::new());

    for path in files {
        let name = path.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path {} has no file name", path.display()),
            )
        })?;

        debug!("Adding file to archive: {}", path.display());
        // Validation happened at add time, but the file can vanish between
        // then and now; the open error aborts before anything is sent.
        let mut file = File::open(path)?;
        builder.append_file(name, &mut file)?;
    }

    builder.into_inner()
}

/// Extract a tar archive produced by `pack_files` into a directory.
///
/// The client never unpacks on the submission path; this is the inverse
/// used by round-trip verification.
pub fn unpack_archive(data: &[u8], output_dir: &Path) -> io::Result<()> {
    let mut archive = Archive::new(Cursor::new(data));
    archive.unpack(output_dir)
}
