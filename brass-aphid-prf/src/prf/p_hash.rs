//! The `P_hash` data expansion function shared by every TLS PRF.
//!
//! ```text
//! P_hash(secret, seed) = HMAC_hash(secret, A(1) + seed) +
//!                        HMAC_hash(secret, A(2) + seed) + ...
//! A(0) = seed
//! A(i) = HMAC_hash(secret, A(i-1))
//! ```
//! [RFC 5246 section 5](https://www.rfc-editor.org/rfc/rfc5246#section-5)

use ::hmac::{Hmac, Mac};
use aws_lc_rs::hmac as aws_hmac;
use md5::Md5;

use crate::error::KdfError;

/// The HMAC hash behind a `P_hash` stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::Display)]
pub enum HmacHash {
    Md5,
    Sha1,
    Sha256,
    Sha384,
}

impl HmacHash {
    pub fn output_len(&self) -> usize {
        match self {
            HmacHash::Md5 => 16,
            HmacHash::Sha1 => 20,
            HmacHash::Sha256 => 32,
            HmacHash::Sha384 => 48,
        }
    }
}

/// An HMAC key, keyed once and reused for every block of the stream.
enum HmacKey {
    AwsLc(aws_hmac::Key),
    // aws-lc-rs doesn't expose MD5
    Md5(Hmac<Md5>),
}

impl HmacKey {
    fn new(hash: HmacHash, secret: &[u8]) -> Result<Self, KdfError> {
        let algorithm = match hash {
            HmacHash::Md5 => {
                return Hmac::<Md5>::new_from_slice(secret)
                    .map(HmacKey::Md5)
                    .map_err(|e| KdfError::key_derivation(format!("unable to key HMAC-MD5: {e}")));
            }
            HmacHash::Sha1 => aws_hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            HmacHash::Sha256 => aws_hmac::HMAC_SHA256,
            HmacHash::Sha384 => aws_hmac::HMAC_SHA384,
        };
        Ok(HmacKey::AwsLc(aws_hmac::Key::new(algorithm, secret)))
    }

    /// HMAC over the concatenation of `parts`.
    fn sign(&self, parts: &[&[u8]]) -> Vec<u8> {
        match self {
            HmacKey::AwsLc(key) => {
                let mut context = aws_hmac::Context::with_key(key);
                for part in parts {
                    context.update(part);
                }
                context.sign().as_ref().to_vec()
            }
            HmacKey::Md5(keyed) => {
                let mut mac = keyed.clone();
                for part in parts {
                    mac.update(part);
                }
                mac.finalize().into_bytes().to_vec()
            }
        }
    }
}

/// Expand `secret` and `seed` into exactly `output_len` bytes.
///
/// An empty `secret` is keyed as the empty HMAC key.
pub fn p_hash(
    hash: HmacHash,
    secret: &[u8],
    seed: &[u8],
    output_len: usize,
) -> Result<Vec<u8>, KdfError> {
    let key = HmacKey::new(hash, secret)?;

    let mut output = Vec::with_capacity(output_len + hash.output_len());
    let mut a = seed.to_vec();
    while output.len() < output_len {
        a = key.sign(&[a.as_slice()]);
        output.extend_from_slice(&key.sign(&[a.as_slice(), seed]));
    }
    output.truncate(output_len);
    Ok(output)
}
