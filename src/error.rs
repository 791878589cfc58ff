use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between building a submission and reading
/// the server's response. `send` never panics; every failure mode lands on
/// one of these variants with a message fit for printing to the user.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A file handed to `add_file` is missing or cannot be opened for
    /// reading. Raised at the point of addition, before any network work.
    #[error("file {} does not exist or is not readable", .0.display())]
    Validation(PathBuf),

    /// `send` was called with an empty file list.
    #[error("no files to be submitted")]
    NoFiles,

    /// Key generation, key parsing, wrapping, or payload encryption failed.
    #[error("{0}")]
    Crypto(String),

    /// The server refused or aborted the connection.
    #[error("the submission server is either down or is not accepting connections")]
    ServerUnreachable(#[source] io::Error),

    /// Any other I/O failure while packaging, writing the frame, or reading
    /// the response.
    #[error("{0}")]
    Transmission(#[source] io::Error),
}
