//! Master secret derivation.
//!
//! ```text
//! master_secret = PRF(pre_master_secret, "master secret",
//!                     ClientHello.random + ServerHello.random)[0..47]
//! ```
//! [RFC 5246 section 8.1](https://www.rfc-editor.org/rfc/rfc5246#section-8.1)
//!
//! With the extended master secret extension the randoms are replaced by the
//! session hash:
//! ```text
//! master_secret = PRF(pre_master_secret, "extended master secret",
//!                     session_hash)[0..47]
//! ```
//! [RFC 7627 section 4](https://www.rfc-editor.org/rfc/rfc7627#section-4)
//!
//! Everything here is a pure function of its arguments.

use std::fmt::Debug;

use crate::{
    codec::DecodeValue,
    error::KdfError,
    premaster::PremasterSecret,
    prf::{Prf, PrfHash},
    protocol::{ProtocolVersion, VersionPair},
};

pub const MASTER_SECRET_LEN: usize = 48;
pub const RANDOM_LEN: usize = 32;

const MASTER_SECRET_LABEL: &[u8] = b"master secret";
const EXTENDED_MASTER_SECRET_LABEL: &[u8] = b"extended master secret";

/// A derived master secret, along with the client version that was embedded in
/// the premaster secret.
#[derive(Clone, PartialEq, Eq)]
pub struct MasterSecret {
    secret: [u8; MASTER_SECRET_LEN],
    client_version: Option<VersionPair>,
}

impl MasterSecret {
    pub fn as_bytes(&self) -> &[u8; MASTER_SECRET_LEN] {
        &self.secret
    }

    /// The rollback-check version pair.
    ///
    /// For RSA key exchange this is the `client_version` the client put in
    /// the premaster secret, which the server compares to the version the
    /// client offered in its ClientHello to catch version rollback. Other
    /// key exchanges don't carry a version and report `None`.
    pub fn client_version(&self) -> Option<VersionPair> {
        self.client_version
    }
}

impl Debug for MasterSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterSecret")
            .field("client_version", &self.client_version)
            .finish_non_exhaustive()
    }
}

/// Derive the master secret for `version`, using SHA-256 for the TLS 1.2 PRF.
///
/// * `client_random`: ClientHello.random, exactly 32 bytes
/// * `server_random`: ServerHello.random, exactly 32 bytes
pub fn derive_master_secret(
    premaster: &PremasterSecret,
    version: ProtocolVersion,
    client_random: &[u8],
    server_random: &[u8],
) -> Result<MasterSecret, KdfError> {
    derive_master_secret_with_hash(premaster, version, PrfHash::Sha256, client_random, server_random)
}

/// Derive the master secret with an explicit TLS 1.2 PRF hash.
///
/// `prf_hash` must be SHA-256 for anything older than TLS 1.2.
pub fn derive_master_secret_with_hash(
    premaster: &PremasterSecret,
    version: ProtocolVersion,
    prf_hash: PrfHash,
    client_random: &[u8],
    server_random: &[u8],
) -> Result<MasterSecret, KdfError> {
    check_length("client random", client_random, RANDOM_LEN)?;
    check_length("server random", server_random, RANDOM_LEN)?;
    let prf = Prf::with_hash(version, prf_hash)?;

    let mut seed = Vec::with_capacity(2 * RANDOM_LEN);
    seed.extend_from_slice(client_random);
    seed.extend_from_slice(server_random);

    derive(prf, premaster, MASTER_SECRET_LABEL, &seed)
}

/// Derive an extended master secret (RFC 7627).
///
/// `session_hash` is the hash of the handshake messages through the
/// ClientKeyExchange: MD5 + SHA-1 (36 bytes) for TLS 1.0 and 1.1, the PRF hash
/// for TLS 1.2. SSLv3 has no extended master secret.
pub fn derive_extended_master_secret(
    premaster: &PremasterSecret,
    version: ProtocolVersion,
    prf_hash: PrfHash,
    session_hash: &[u8],
) -> Result<MasterSecret, KdfError> {
    let prf = Prf::with_hash(version, prf_hash)?;
    let Some(hash_len) = prf.session_hash_len() else {
        return Err(KdfError::invalid_input(format!(
            "{version} does not define an extended master secret"
        )));
    };
    check_length("session hash", session_hash, hash_len)?;

    derive(prf, premaster, EXTENDED_MASTER_SECRET_LABEL, session_hash)
}

fn derive(
    prf: Prf,
    premaster: &PremasterSecret,
    label: &[u8],
    seed: &[u8],
) -> Result<MasterSecret, KdfError> {
    let client_version = embedded_client_version(premaster)?;

    let output = prf.derive(premaster.bytes(), label, seed, MASTER_SECRET_LEN)?;
    let secret = output.try_into().map_err(|output: Vec<u8>| {
        KdfError::key_derivation(format!("PRF returned {} bytes", output.len()))
    })?;

    Ok(MasterSecret {
        secret,
        client_version,
    })
}

/// The leading `client_version` of an RSA premaster secret.
fn embedded_client_version(premaster: &PremasterSecret) -> Result<Option<VersionPair>, KdfError> {
    if !premaster.algorithm().embeds_version() {
        return Ok(None);
    }
    let (client_version, _random) = VersionPair::decode_from(premaster.bytes()).map_err(|e| {
        KdfError::invalid_input(format!(
            "{} of {} bytes has no client version: {e}",
            premaster.algorithm(),
            premaster.bytes().len()
        ))
    })?;
    Ok(Some(client_version))
}

fn check_length(name: &str, value: &[u8], expected: usize) -> Result<(), KdfError> {
    if value.len() != expected {
        return Err(KdfError::invalid_input(format!(
            "{name} must be {expected} bytes, got {}",
            value.len()
        )));
    }
    Ok(())
}
