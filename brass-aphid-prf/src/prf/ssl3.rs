//! The SSLv3 key derivation construction.
//!
//! ```text
//! output = MD5(secret + SHA1("A"   + secret + seed)) +
//!          MD5(secret + SHA1("BB"  + secret + seed)) +
//!          MD5(secret + SHA1("CCC" + secret + seed)) + ...
//! ```
//! [RFC 6101 section 6.1](https://www.rfc-editor.org/rfc/rfc6101#section-6.1)
//!
//! There is no label. The round salts play that part.

use aws_lc_rs::digest;
use md5::{Digest, Md5};

use crate::error::KdfError;

const MD5_LEN: usize = 16;

/// The salts run out at "ZZZ...Z".
pub const SSL3_MAX_OUTPUT_LEN: usize = 26 * MD5_LEN;

pub(crate) fn ssl3_prf(secret: &[u8], seed: &[u8], output_len: usize) -> Result<Vec<u8>, KdfError> {
    if output_len > SSL3_MAX_OUTPUT_LEN {
        return Err(KdfError::key_derivation(format!(
            "SSLv3 can derive at most {SSL3_MAX_OUTPUT_LEN} bytes, {output_len} requested"
        )));
    }

    let mut output = Vec::with_capacity(output_len + MD5_LEN);
    for (round, letter) in (b'A'..=b'Z').enumerate() {
        if output.len() >= output_len {
            break;
        }
        let salt = vec![letter; round + 1];

        let mut sha1 = digest::Context::new(&digest::SHA1_FOR_LEGACY_USE_ONLY);
        sha1.update(&salt);
        sha1.update(secret);
        sha1.update(seed);
        let inner = sha1.finish();

        let mut md5 = Md5::new();
        md5.update(secret);
        md5.update(inner.as_ref());
        output.extend_from_slice(md5.finalize().as_slice());
    }
    output.truncate(output_len);
    Ok(output)
}
