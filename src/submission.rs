use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use rsa::RsaPublicKey;

use crate::cryptography::{encrypt_payload, wrap_secret, KeyMaterial};
use crate::error::SubmitError;
use crate::wire::EncryptedEnvelope;
use crate::{archive, networking};

/// One coursework submission: course id, lab id, and an ordered set of
/// files, sent as a single atomic exchange.
///
/// Files are validated as they are added, so by the time `send` runs the
/// only remaining failure points are crypto and the network. `send`
/// consumes the submission; there is no retry and no partial success —
/// either the full frame goes out and a response comes back, or nothing
/// was sent at all.
pub struct Submission {
    course_id: String,
    lab_id: String,
    files: Vec<PathBuf>,
    public_key: RsaPublicKey,
}

impl Submission {
    /// Start collecting a submission. The public key everything is wrapped
    /// under is injected here rather than read from global state.
    pub fn new(course_id: String, lab_id: String, public_key: RsaPublicKey) -> Self {
        Submission {
            course_id,
            lab_id,
            files: Vec::new(),
            public_key,
        }
    }

    /// Append a file, verifying right now that it exists and is readable.
    ///
    /// A bad path is rejected immediately with `SubmitError::Validation`
    /// and leaves the file list untouched.
    pub fn add_file(&mut self, path: &Path) -> Result<(), SubmitError> {
        if !path.is_file() || File::open(path).is_err() {
            return Err(SubmitError::Validation(path.to_path_buf()));
        }

        debug!("Validated file: {}", path.display());
        self.files.push(path.to_path_buf());
        Ok(())
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Package, encrypt, and transmit the submission, returning the
    /// server's one-line response.
    ///
    /// An empty file list fails with `SubmitError::NoFiles` before any
    /// socket is touched. A refused or aborted connection maps to
    /// `SubmitError::ServerUnreachable`; every other packaging or I/O
    /// failure maps to `SubmitError::Transmission`.
    pub fn send(self, host: &str, port: u16) -> Result<String, SubmitError> {
        if self.files.is_empty() {
            return Err(SubmitError::NoFiles);
        }

        debug!("Generating key material");
        let material = KeyMaterial::generate()?;

        debug!("Wrapping key material under the submission public key");
        let wrapped_key = wrap_secret(&self.public_key, &material.key)?;
        let wrapped_iv = wrap_secret(&self.public_key, &material.iv)?;

        debug!("Packaging {} file(s)", self.files.len());
        let payload = archive::pack_files(&self.files).map_err(map_send_error)?;
        let ciphertext = encrypt_payload(&material, &payload);

        let envelope = EncryptedEnvelope {
            wrapped_key,
            wrapped_iv,
            ciphertext,
        };

        debug!("Transmitting submission for {}/{}", self.course_id, self.lab_id);
        networking::transmit(host, port, &self.course_id, &self.lab_id, &envelope)
            .map_err(map_send_error)
    }
}

/// Refused and aborted connections get the dedicated down-server error;
/// anything else during the send phase is a generic transmission failure.
fn map_send_error(e: io::Error) -> SubmitError {
    match e.kind() {
        io::ErrorKind::ConnectionRefused | io::ErrorKind::ConnectionAborted => {
            SubmitError::ServerUnreachable(e)
        }
        _ => SubmitError::Transmission(e),
    }
}
