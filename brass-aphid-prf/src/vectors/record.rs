use std::str::FromStr;

use crate::{
    premaster::{PremasterAlgorithm, PremasterSecret},
    protocol::VersionPair,
    vectors::VectorError,
};

/// Lines that belong to a master secret record start with this.
pub const RECORD_PREFIX: &str = "m-";

/// How the corpus spells "this premaster secret has no client version".
pub const UNSET_VERSION: (i32, i32) = (-1, -1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::IntoStaticStr, strum::EnumIter)]
pub enum Field {
    #[strum(serialize = "m-algorithm")]
    Algorithm,
    #[strum(serialize = "m-premaster")]
    Premaster,
    #[strum(serialize = "m-crandom")]
    ClientRandom,
    #[strum(serialize = "m-srandom")]
    ServerRandom,
    #[strum(serialize = "m-protomajor")]
    ProtocolMajor,
    #[strum(serialize = "m-protominor")]
    ProtocolMinor,
    #[strum(serialize = "m-premajor")]
    PremasterMajor,
    #[strum(serialize = "m-preminor")]
    PremasterMinor,
    /// Completes the record.
    #[strum(serialize = "m-master")]
    Master,
}

impl Field {
    pub fn name(&self) -> &'static str {
        (*self).into()
    }
}

/// One complete known-answer vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorRecord {
    /// line of the `m-master` field that completed this record
    pub line: usize,
    pub premaster: PremasterSecret,
    pub client_random: Vec<u8>,
    pub server_random: Vec<u8>,
    pub protocol: VersionPair,
    /// premajor/preminor, `UNSET_VERSION` when no version is embedded
    pub expected_client_version: (i32, i32),
    pub expected_master: Vec<u8>,
}

/// Render the deriver's rollback-check pair the way the corpus does.
pub fn reported_version(client_version: Option<VersionPair>) -> (i32, i32) {
    client_version.map_or(UNSET_VERSION, |v| (v.major.into(), v.minor.into()))
}

/// Decode hex pairs separated by colons and/or whitespace, e.g. `03:01:ab` or `03 01 ab`.
pub fn parse_hex(value: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let digits: String = value
        .chars()
        .filter(|c| *c != ':' && !c.is_whitespace())
        .collect();
    hex::decode(digits)
}

/// The record currently being accumulated by the reader.
#[derive(Debug, Default, Clone)]
pub(crate) struct RecordBuilder {
    algorithm: Option<String>,
    premaster: Option<Vec<u8>>,
    client_random: Option<Vec<u8>>,
    server_random: Option<Vec<u8>>,
    protocol_major: Option<u8>,
    protocol_minor: Option<u8>,
    premaster_major: Option<i32>,
    premaster_minor: Option<i32>,
}

impl RecordBuilder {
    /// Store a non-terminal field. The error is the reason the value was rejected.
    pub(crate) fn set(&mut self, field: Field, value: &str) -> Result<(), String> {
        match field {
            Field::Algorithm => self.algorithm = Some(value.to_owned()),
            Field::Premaster => self.premaster = Some(bytes(field, value)?),
            Field::ClientRandom => self.client_random = Some(bytes(field, value)?),
            Field::ServerRandom => self.server_random = Some(bytes(field, value)?),
            Field::ProtocolMajor => self.protocol_major = Some(integer(field, value)?),
            Field::ProtocolMinor => self.protocol_minor = Some(integer(field, value)?),
            Field::PremasterMajor => self.premaster_major = Some(integer(field, value)?),
            Field::PremasterMinor => self.premaster_minor = Some(integer(field, value)?),
            Field::Master => return Err("m-master completes a record, it can't be stored".to_owned()),
        }
        Ok(())
    }

    pub(crate) fn build(&self, line: usize, expected_master: Vec<u8>) -> Result<VectorRecord, VectorError> {
        fn required<T: Clone>(value: &Option<T>, line: usize, field: Field) -> Result<T, VectorError> {
            value.clone().ok_or(VectorError::MissingField {
                line,
                field: field.name(),
            })
        }

        let algorithm = required(&self.algorithm, line, Field::Algorithm)?;
        let premaster = required(&self.premaster, line, Field::Premaster)?;

        Ok(VectorRecord {
            line,
            premaster: PremasterSecret::new(premaster, PremasterAlgorithm::from_name(&algorithm)),
            client_random: required(&self.client_random, line, Field::ClientRandom)?,
            server_random: required(&self.server_random, line, Field::ServerRandom)?,
            protocol: VersionPair::new(
                required(&self.protocol_major, line, Field::ProtocolMajor)?,
                required(&self.protocol_minor, line, Field::ProtocolMinor)?,
            ),
            expected_client_version: (
                required(&self.premaster_major, line, Field::PremasterMajor)?,
                required(&self.premaster_minor, line, Field::PremasterMinor)?,
            ),
            expected_master,
        })
    }
}

fn bytes(field: Field, value: &str) -> Result<Vec<u8>, String> {
    parse_hex(value).map_err(|e| format!("bad hex in {}: {e}", field.name()))
}

fn integer<T: FromStr>(field: Field, value: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| format!("bad integer {value:?} in {}: {e}", field.name()))
}
