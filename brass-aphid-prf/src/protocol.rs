use std::fmt::Display;

use brass_aphid_prf_macros::{DecodeEnum, DecodeStruct};

use crate::{codec::DecodeValue, discriminant::impl_byte_value, error::KdfError};

/// The protocol versions that define a master secret.
///
/// TLS 1.3 replaced the master secret with the HKDF key schedule, so it is
/// absent. The discriminant is the on-the-wire `ProtocolVersion`
/// from [RFC 5246 section 6.2.1](https://www.rfc-editor.org/rfc/rfc5246#section-6.2.1).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter, strum::Display, DecodeEnum,
)]
#[repr(u16)]
pub enum ProtocolVersion {
    #[strum(to_string = "SSLv3")]
    SSLv3 = 0x0300,
    #[strum(to_string = "TLSv1.0")]
    TLSv1_0 = 0x0301,
    #[strum(to_string = "TLSv1.1")]
    TLSv1_1 = 0x0302,
    #[strum(to_string = "TLSv1.2")]
    TLSv1_2 = 0x0303,
}
impl_byte_value!(ProtocolVersion, u16);

impl ProtocolVersion {
    /// Look up a version from its `(major, minor)` bytes, e.g. `(3, 1)` for TLS 1.0.
    pub fn from_pair(major: u8, minor: u8) -> Result<Self, KdfError> {
        Self::decode_from_exact(&[major, minor]).map_err(|e| {
            KdfError::key_derivation(format!("no master secret PRF for version ({major},{minor}): {e}"))
        })
    }

    pub fn pair(&self) -> VersionPair {
        let [major, minor] = self.byte_value().to_be_bytes();
        VersionPair { major, minor }
    }
}

impl TryFrom<VersionPair> for ProtocolVersion {
    type Error = KdfError;

    fn try_from(pair: VersionPair) -> Result<Self, Self::Error> {
        Self::from_pair(pair.major, pair.minor)
    }
}

/// A `(major, minor)` version as it appears on the wire.
///
/// This is also the shape of the `client_version` at the front of an RSA
/// premaster secret, which is what the rollback check reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DecodeStruct)]
pub struct VersionPair {
    pub major: u8,
    pub minor: u8,
}

impl VersionPair {
    pub fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl Display for VersionPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.major, self.minor)
    }
}
