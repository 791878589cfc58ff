use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::net::TcpStream;

use log::debug;

use crate::wire::{write_frame, EncryptedEnvelope};

/// Open a blocking TCP connection to the collection server, write one
/// submission frame, and read back the server's one-line status.
///
/// The whole exchange is synchronous and untimed: a hung server blocks the
/// caller indefinitely. The connection is scoped to this call and closed
/// when the stream drops, on success and on error alike. No retries.
pub fn transmit(
    host: &str,
    port: u16,
    course_id: &str,
    lab_id: &str,
    envelope: &EncryptedEnvelope,
) -> io::Result<String> {
    debug!("Connecting to {}:{}", host, port);
    let stream = TcpStream::connect((host, port))?;

    let mut writer = BufWriter::new(&stream);
    write_frame(&mut writer, course_id, lab_id, envelope)?;
    writer.flush()?;
    drop(writer);
    debug!("Frame written, waiting for server response");

    let mut reader = BufReader::new(&stream);
    let mut response = String::new();
    let bytes_read = reader.read_line(&mut response)?;
    if bytes_read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "server closed the connection without a response",
        ));
    }

    Ok(response.trim_end().to_string())
}
