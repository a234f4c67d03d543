use std::{collections::BTreeMap, path::Path};

use serde::Serialize;

use crate::{
    master_secret::derive_master_secret,
    protocol::ProtocolVersion,
    vectors::{
        reader::{RecordMode, VectorReader},
        record::{reported_version, VectorRecord},
        VectorError,
    },
};

/// What a successful run checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub records: usize,
    /// keyed by protocol version name, e.g. "TLSv1.2"
    pub by_version: BTreeMap<String, usize>,
    /// keyed by premaster algorithm tag
    pub by_algorithm: BTreeMap<String, usize>,
}

impl RunSummary {
    fn add(&mut self, version: ProtocolVersion, record: &VectorRecord) {
        self.records += 1;
        *self.by_version.entry(version.to_string()).or_default() += 1;
        *self
            .by_algorithm
            .entry(record.premaster.algorithm().name().to_owned())
            .or_default() += 1;
    }
}

/// Derive the master secret for one record and compare it to the expected
/// values.
pub fn check_record(record: &VectorRecord) -> Result<ProtocolVersion, VectorError> {
    let derivation = |source| VectorError::Derivation {
        line: record.line,
        source,
    };

    let version = ProtocolVersion::try_from(record.protocol).map_err(derivation)?;
    let master = derive_master_secret(
        &record.premaster,
        version,
        &record.client_random,
        &record.server_random,
    )
    .map_err(derivation)?;

    if master.as_bytes()[..] != record.expected_master[..] {
        return Err(VectorError::Mismatch {
            line: record.line,
            expected: hex::encode(&record.expected_master),
            actual: hex::encode(master.as_bytes()),
        });
    }

    let actual = reported_version(master.client_version());
    if actual != record.expected_client_version {
        return Err(VectorError::VersionMismatch {
            line: record.line,
            expected: record.expected_client_version,
            actual,
        });
    }

    Ok(version)
}

/// Check every record, stopping at the first failure.
///
/// A run that completes no records is a failure.
pub fn run_vectors<I>(records: I) -> Result<RunSummary, VectorError>
where
    I: IntoIterator<Item = Result<VectorRecord, VectorError>>,
{
    let mut summary = RunSummary::default();
    for record in records {
        let record = record?;
        let version = check_record(&record)?;
        tracing::debug!(
            line = record.line,
            %version,
            algorithm = %record.premaster.algorithm(),
            "master secret matched"
        );
        summary.add(version, &record);
    }

    if summary.records == 0 {
        return Err(VectorError::NoTests);
    }
    tracing::info!(records = summary.records, "known-answer run passed");
    Ok(summary)
}

pub fn run_file(path: impl AsRef<Path>, mode: RecordMode) -> Result<RunSummary, VectorError> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), ?mode, "reading master secret vectors");
    run_vectors(VectorReader::open(path, mode)?)
}
