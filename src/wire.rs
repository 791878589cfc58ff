use std::io::{self, Write};

/// The three encrypted blobs of one submission: the RSA-wrapped symmetric
/// key, the RSA-wrapped IV, and the AES-encrypted archive. Built once per
/// submission and serialized exactly once.
pub struct EncryptedEnvelope {
    pub wrapped_key: Vec<u8>,
    pub wrapped_iv: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

/// Write a 4-byte big-endian length followed by the bytes themselves.
///
/// The server reads the length to know how many bytes to consume next, so
/// the prefix must always equal the field's exact byte length.
pub fn write_length_prefixed<W: Write>(writer: &mut W, data: &[u8]) -> io::Result<()> {
    writer.write_all(&(data.len() as u32).to_be_bytes())?;
    writer.write_all(data)
}

/// Serialize one full submission frame:
///
/// ```text
/// <course_id> "\n"
/// <lab_id> "\n"
/// u32_be len | wrapped_key
/// u32_be len | wrapped_iv
/// u32_be len | ciphertext
/// ```
///
/// Pure layout; the writer decides whether this hits a socket or a buffer.
pub fn write_frame<W: Write>(
    writer: &mut W,
    course_id: &str,
    lab_id: &str,
    envelope: &EncryptedEnvelope,
) -> io::Result<()> {
    writer.write_all(course_id.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.write_all(lab_id.as_bytes())?;
    writer.write_all(b"\n")?;

    write_length_prefixed(writer, &envelope.wrapped_key)?;
    write_length_prefixed(writer, &envelope.wrapped_iv)?;
    write_length_prefixed(writer, &envelope.ciphertext)
}
