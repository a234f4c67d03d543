//! The pseudo-random functions used to derive TLS secrets.
//!
//! Each protocol version fixes one construction:
//! - SSLv3: the MD5/SHA-1 salted construction from RFC 6101
//! - TLS 1.0 and 1.1: `P_MD5(S1, label + seed) XOR P_SHA1(S2, label + seed)`
//!   where S1 and S2 are the two (possibly overlapping) halves of the secret
//! - TLS 1.2: `P_<hash>(secret, label + seed)`, SHA-256 unless the cipher suite
//!   says otherwise

mod p_hash;
mod ssl3;

pub use p_hash::{p_hash, HmacHash};
pub use ssl3::SSL3_MAX_OUTPUT_LEN;

use crate::{error::KdfError, protocol::ProtocolVersion};

/// The hash behind the TLS 1.2 PRF.
///
/// Cipher suites ending in `_SHA384` use SHA-384, everything else uses SHA-256.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::EnumIter, strum::Display)]
pub enum PrfHash {
    #[default]
    Sha256,
    Sha384,
}

impl PrfHash {
    fn hmac_hash(&self) -> HmacHash {
        match self {
            PrfHash::Sha256 => HmacHash::Sha256,
            PrfHash::Sha384 => HmacHash::Sha384,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prf {
    Ssl3,
    Tls10,
    Tls12(PrfHash),
}

impl Prf {
    /// The PRF a version uses by default. TLS 1.2 gets SHA-256.
    pub fn for_version(version: ProtocolVersion) -> Self {
        match version {
            ProtocolVersion::SSLv3 => Prf::Ssl3,
            ProtocolVersion::TLSv1_0 | ProtocolVersion::TLSv1_1 => Prf::Tls10,
            ProtocolVersion::TLSv1_2 => Prf::Tls12(PrfHash::Sha256),
        }
    }

    /// The PRF for `version` with an explicit TLS 1.2 hash.
    ///
    /// Only TLS 1.2 lets the cipher suite choose, so asking for SHA-384 with
    /// an older version is an error.
    pub fn with_hash(version: ProtocolVersion, hash: PrfHash) -> Result<Self, KdfError> {
        match (Self::for_version(version), hash) {
            (Prf::Tls12(_), hash) => Ok(Prf::Tls12(hash)),
            (prf, PrfHash::Sha256) => Ok(prf),
            (_, hash) => Err(KdfError::invalid_input(format!(
                "{version} has a fixed PRF, it can't use {hash}"
            ))),
        }
    }

    /// Length of the handshake hash this PRF pairs with, which is what an
    /// extended master secret session hash has to be.
    ///
    /// SSLv3 predates RFC 7627, so it has none.
    pub fn session_hash_len(&self) -> Option<usize> {
        match self {
            Prf::Ssl3 => None,
            // MD5 + SHA-1
            Prf::Tls10 => Some(HmacHash::Md5.output_len() + HmacHash::Sha1.output_len()),
            Prf::Tls12(hash) => Some(hash.hmac_hash().output_len()),
        }
    }

    /// Compute `output_len` bytes of PRF output.
    ///
    /// * `label`: ASCII label, e.g. `b"master secret"`. Ignored by SSLv3.
    pub fn derive(
        &self,
        secret: &[u8],
        label: &[u8],
        seed: &[u8],
        output_len: usize,
    ) -> Result<Vec<u8>, KdfError> {
        match self {
            Prf::Ssl3 => ssl3::ssl3_prf(secret, seed, output_len),
            Prf::Tls10 => {
                let label_seed = concat(label, seed);
                // S1 and S2 share the middle byte of an odd length secret
                let half = secret.len().div_ceil(2);
                let s1 = &secret[..half];
                let s2 = &secret[secret.len() - half..];

                let mut output = p_hash(HmacHash::Md5, s1, &label_seed, output_len)?;
                let sha1 = p_hash(HmacHash::Sha1, s2, &label_seed, output_len)?;
                output.iter_mut().zip(sha1).for_each(|(o, s)| *o ^= s);
                Ok(output)
            }
            Prf::Tls12(hash) => p_hash(hash.hmac_hash(), secret, &concat(label, seed), output_len),
        }
    }
}

fn concat(label: &[u8], seed: &[u8]) -> Vec<u8> {
    let mut label_seed = Vec::with_capacity(label.len() + seed.len());
    label_seed.extend_from_slice(label);
    label_seed.extend_from_slice(seed);
    label_seed
}

/// Compute `output_len` bytes of the PRF that `version` defines.
pub fn prf(
    version: ProtocolVersion,
    secret: &[u8],
    label: &[u8],
    seed: &[u8],
    output_len: usize,
) -> Result<Vec<u8>, KdfError> {
    Prf::for_version(version).derive(secret, label, seed, output_len)
}
