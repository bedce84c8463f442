use hmac::{Mac, SimpleHmac};
use sha2::Sha256;

use super::errors::CryptoError;

/// Hex-encoded HMAC-SHA256 webhook signature.
pub struct Signature<'a>(pub &'a str);

impl<'a> Signature<'a> {
    /// Check if a signature is valid. Only lowercase hex is accepted.
    pub fn is_valid(&self, body: &[u8], secret: &str) -> Result<bool, CryptoError> {
        if self.0.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(CryptoError::InvalidSignatureFormat {
                sig: self.0.to_string(),
            });
        }

        let decoded_signature =
            &hex::decode(self.0).map_err(|_| CryptoError::InvalidSignatureFormat {
                sig: self.0.to_string(),
            })?;

        let mut hmac = new_hmac(secret)?;
        hmac.update(body);
        Ok(hmac.verify_slice(decoded_signature).is_ok())
    }

    /// Compute the lowercase hex signature of a body.
    pub fn compute(body: &[u8], secret: &str) -> Result<String, CryptoError> {
        let mut hmac = new_hmac(secret)?;
        hmac.update(body);
        Ok(hex::encode(hmac.finalize().into_bytes()))
    }
}

fn new_hmac(secret: &str) -> Result<SimpleHmac<Sha256>, CryptoError> {
    SimpleHmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|_| CryptoError::InvalidSecretKeyLength)
}
