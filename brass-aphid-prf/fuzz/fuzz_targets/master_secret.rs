#![no_main]

use brass_aphid_prf::{
    codec::DecodeValue, derive_master_secret, PremasterSecret, ProtocolVersion, VersionPair,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let _ = VersionPair::decode_from(data);
    let Ok(version) = ProtocolVersion::decode_from_exact(&data[..2]) else {
        return;
    };

    let premaster = PremasterSecret::rsa(data[2..].to_vec());
    if let Ok(master) = derive_master_secret(&premaster, version, &[0; 32], &[0; 32]) {
        assert_eq!(master.client_version(), VersionPair::decode_from(&data[2..]).ok().map(|(v, _)| v));
    }
});
