use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;
use rsa::pkcs8::DecodePublicKey;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};

use crate::error::SubmitError;
use crate::{IV_SIZE, KEY_SIZE};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Symmetric key and IV for one submission's payload encryption.
///
/// Generated fresh for every submission, handed to the payload encryption
/// and the asymmetric wrapper, and dropped when the submission completes.
/// Never reused and never written anywhere.
pub struct KeyMaterial {
    pub key: [u8; KEY_SIZE],
    pub iv: [u8; IV_SIZE],
}

impl KeyMaterial {
    /// Draw a fresh AES-256 key and CBC IV from the OS entropy source.
    ///
    /// Fails only if the entropy source itself is unavailable, which is
    /// fatal to the submission.
    pub fn generate() -> Result<Self, SubmitError> {
        let mut key = [0u8; KEY_SIZE];
        let mut iv = [0u8; IV_SIZE];
        OsRng
            .try_fill_bytes(&mut key)
            .and_then(|_| OsRng.try_fill_bytes(&mut iv))
            .map_err(|e| SubmitError::Crypto(format!("secure random source unavailable: {}", e)))?;

        Ok(KeyMaterial { key, iv })
    }
}

/// Parse an SPKI PEM public key (the embedded submission key, or an
/// injected replacement).
pub fn load_public_key(pem: &str) -> Result<RsaPublicKey, SubmitError> {
    RsaPublicKey::from_public_key_pem(pem)
        .map_err(|e| SubmitError::Crypto(format!("malformed public key: {}", e)))
}

/// Encrypt a short secret (the symmetric key or the IV) under the server's
/// RSA public key with PKCS#1 v1.5 padding.
///
/// The plaintext must fit the padding scheme's limit for the key's modulus.
/// Key and IV are far below it, so an error here means a malformed key or
/// a caller bug, and it aborts the submission.
pub fn wrap_secret(public_key: &RsaPublicKey, secret: &[u8]) -> Result<Vec<u8>, SubmitError> {
    public_key
        .encrypt(&mut OsRng, Pkcs1v15Encrypt, secret)
        .map_err(|e| SubmitError::Crypto(format!("key wrapping failed: {}", e)))
}

/// Encrypt the packaged archive with AES-256-CBC and PKCS#7 padding.
pub fn encrypt_payload(material: &KeyMaterial, plaintext: &[u8]) -> Vec<u8> {
    Aes256CbcEnc::new(&material.key.into(), &material.iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Inverse of `encrypt_payload`. The client never decrypts on the wire
/// path; this exists for round-trip verification.
pub fn decrypt_payload(material: &KeyMaterial, ciphertext: &[u8]) -> Result<Vec<u8>, SubmitError> {
    Aes256CbcDec::new(&material.key.into(), &material.iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|e| SubmitError::Crypto(format!("payload decryption failed: {}", e)))
}
