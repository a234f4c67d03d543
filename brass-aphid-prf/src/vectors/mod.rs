//! Known-answer testing against a master secret vector corpus.
//!
//! The corpus is line oriented. Only lines starting with `m-` are read, so
//! comments and data for other generators can share the file:
//!
//! ```text
//! m-algorithm:  TlsRsaPremasterSecret
//! m-premaster:  03:01:9f:10:...
//! m-crandom:    bf:84:57:7f:...
//! m-srandom:    33:26:04:fe:...
//! m-protomajor: 3
//! m-protominor: 0
//! m-premajor:   3
//! m-preminor:   1
//! m-master:     f8:f8:7c:ff:...
//! ```
//!
//! Each `m-master` line completes a record, which is derived and compared
//! immediately. `m-premajor`/`m-preminor` hold the expected rollback-check
//! version pair, `-1` when the premaster secret carries none. See
//! [`RecordMode`] for what happens to fields between records.

mod error;
mod reader;
mod record;
mod runner;

pub use error::VectorError;
pub use reader::{RecordMode, VectorReader};
pub use record::{parse_hex, reported_version, Field, VectorRecord, RECORD_PREFIX, UNSET_VERSION};
pub use runner::{check_record, run_file, run_vectors, RunSummary};
