use strum::IntoEnumIterator;

use crate::{
    master_secret::{derive_master_secret, MasterSecret},
    premaster::PremasterSecret,
    protocol::ProtocolVersion,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_types_are_send_and_sync() {
    assert_send_sync::<PremasterSecret>();
    assert_send_sync::<MasterSecret>();
    assert_send_sync::<crate::Prf>();
    assert_send_sync::<crate::KdfError>();
}

/// Derivations share nothing, so many threads at once must agree with a
/// single-threaded run.
#[test]
fn parallel_derivations_agree() {
    let mut bytes = vec![0x03, 0x03];
    bytes.extend_from_slice(&[0x5a; 46]);
    let premaster = PremasterSecret::rsa(bytes);
    let client_random = [0x11; 32];
    let server_random = [0x22; 32];

    let derive = |version| derive_master_secret(&premaster, version, &client_random, &server_random).unwrap();
    let expected: Vec<MasterSecret> = ProtocolVersion::iter().map(derive).collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    (0..16)
                        .map(|_| ProtocolVersion::iter().map(derive).collect::<Vec<_>>())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for run in handle.join().unwrap() {
                assert_eq!(run, expected);
            }
        }
    });
}
