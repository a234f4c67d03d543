//! PRF outputs published alongside the TLS RFCs, plus a check of the TLS 1.2
//! PRF against an HMAC chain built straight on aws-lc-rs.

use aws_lc_rs::hmac;

use crate::{
    prf::{prf, Prf, PrfHash, SSL3_MAX_OUTPUT_LEN},
    protocol::ProtocolVersion,
};

/// The "PRF Testvector" that circulated with RFC 2246 implementations.
#[test]
fn tls10_prf_testvector() {
    let expected = "d3d4d1e349b5d515044666d51de32bab258cb521b6b053463e354832fd976754\
                    443bcf9a296519bc289abcbc1187e4ebd31e602353776c408aafb74cbc85eff6\
                    9255f9788faa184cbb957a9819d84a5d7eb006eb459d3ae8de9810454b8b2d8f\
                    1afbc655a8c9a013";

    for version in [ProtocolVersion::TLSv1_0, ProtocolVersion::TLSv1_1] {
        let output = prf(version, &[0xab; 48], b"PRF Testvector", &[0xcd; 64], 104).unwrap();
        assert_eq!(hex::encode(output), expected, "{version}");
    }
}

/// TLS 1.2 PRF test vectors posted to the IETF TLS list during RFC 5246 review.
#[test]
fn tls12_sha256() {
    let secret = hex::decode("9bbe436ba940f017b17652849a71db35").unwrap();
    let seed = hex::decode("a0ba9f936cda311827a6f796ffd5198c").unwrap();
    let expected = "e3f229ba727be17b8d122620557cd453c2aab21d07c3d495329b52d4e61edb5a\
                    6b301791e90d35c9c9a46b4e14baf9af0fa022f7077def17abfd3797c0564bab\
                    4fbc91666e9def9b97fce34f796789baa48082d122ee42c5a72e5a5110fff701\
                    87347b66";

    let output = prf(ProtocolVersion::TLSv1_2, &secret, b"test label", &seed, 100).unwrap();
    assert_eq!(hex::encode(output), expected);
}

#[test]
fn tls12_sha384() {
    let secret = hex::decode("b80b733d6ceefcdc71566ea48e5567df").unwrap();
    let seed = hex::decode("cd665cf6a8447dd6ff8b27555edb7465").unwrap();
    let expected = "7b0c18e9ced410ed1804f2cfa34a336a1c14dffb4900bb5fd7942107e81c83cd\
                    e9ca0faa60be9fe34f82b1233c9146a0e534cb400fed2700884f9dc236f80edd\
                    8bfa961144c9e8d792eca722a7b32fc3d416d473ebc2c5fd4abfdad05d918425\
                    9b5bf8cd4d90fa0d31e2dec479e4f1a26066f2eea9a69236a3e52655c9e9aee6\
                    91c8f3a26854308d5eaa3be85e0990703d73e56f";

    let output = Prf::Tls12(PrfHash::Sha384)
        .derive(&secret, b"test label", &seed, 148)
        .unwrap();
    assert_eq!(hex::encode(output), expected);
}

#[test]
fn ssl3_last_block() {
    let output = prf(ProtocolVersion::SSLv3, &[0x05; 5], b"", b"seed", SSL3_MAX_OUTPUT_LEN).unwrap();
    assert_eq!(hex::encode(&output[SSL3_MAX_OUTPUT_LEN - 16..]), "7ecfcb2486728a7b8a369db71a10265f");
}

/// P_hash written out one HMAC call at a time.
fn reference_p_hash(algorithm: hmac::Algorithm, secret: &[u8], seed: &[u8], len: usize) -> Vec<u8> {
    let key = hmac::Key::new(algorithm, secret);
    let mut output = Vec::new();
    let mut a = hmac::sign(&key, seed).as_ref().to_vec();
    while output.len() < len {
        let mut block = hmac::Context::with_key(&key);
        block.update(&a);
        block.update(seed);
        output.extend_from_slice(block.sign().as_ref());
        a = hmac::sign(&key, &a).as_ref().to_vec();
    }
    output.truncate(len);
    output
}

#[test]
fn tls12_matches_reference_hmac_chain() {
    let cases = [
        (PrfHash::Sha256, hmac::HMAC_SHA256),
        (PrfHash::Sha384, hmac::HMAC_SHA384),
    ];
    for (hash, algorithm) in cases {
        for secret_len in [1, 16, 48, 200] {
            for seed_len in [0, 13, 64] {
                for len in [1, 31, 32, 48, 49, 97, 257] {
                    let secret: Vec<u8> = (0..secret_len).map(|i| i as u8).collect();
                    let seed: Vec<u8> = (0..seed_len).map(|i| (i * 7) as u8).collect();

                    let mut label_seed = b"key expansion".to_vec();
                    label_seed.extend_from_slice(&seed);

                    let expected = reference_p_hash(algorithm, &secret, &label_seed, len);
                    let actual = Prf::Tls12(hash)
                        .derive(&secret, b"key expansion", &seed, len)
                        .unwrap();
                    assert_eq!(actual, expected, "{hash:?} {secret_len} {seed_len} {len}");
                }
            }
        }
    }
}
