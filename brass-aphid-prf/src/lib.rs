//! TLS master secret derivation for SSLv3 through TLS 1.2, and a known-answer
//! harness that checks it against a vector corpus.
//!
//! ```
//! use brass_aphid_prf::{derive_master_secret, PremasterSecret, ProtocolVersion};
//!
//! let mut premaster = vec![0x03, 0x03];
//! premaster.extend_from_slice(&[0x5a; 46]);
//! let premaster = PremasterSecret::rsa(premaster);
//!
//! let master = derive_master_secret(&premaster, ProtocolVersion::TLSv1_2, &[1; 32], &[2; 32])?;
//! assert_eq!(master.as_bytes().len(), 48);
//! assert_eq!(master.client_version().map(|v| (v.major, v.minor)), Some((3, 3)));
//! # Ok::<(), brass_aphid_prf::KdfError>(())
//! ```

pub mod codec;
pub mod error;
pub mod master_secret;
pub mod premaster;
pub mod prf;
pub mod protocol;
pub mod vectors;
#[cfg(test)]
mod testing;

pub use error::KdfError;
pub use master_secret::{
    derive_extended_master_secret, derive_master_secret, derive_master_secret_with_hash,
    MasterSecret, MASTER_SECRET_LEN, RANDOM_LEN,
};
pub use premaster::{PremasterAlgorithm, PremasterSecret};
pub use prf::{prf, Prf, PrfHash};
pub use protocol::{ProtocolVersion, VersionPair};

mod discriminant {
    macro_rules! impl_byte_value {
        ($enum:ident, $repr:ty) => {
            impl $enum {
                /// The `#[repr]` discriminant, which is the on-the-wire value.
                pub fn byte_value(&self) -> $repr {
                    *self as $repr
                }
            }
        };
    }

    pub(crate) use impl_byte_value;
}
