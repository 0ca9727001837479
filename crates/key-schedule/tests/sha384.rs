//! A SHA-384 handshake fed through a live transcript.

use sha2::Digest;
use tls_key_schedule::{EarlySecret, Sha384};

fn hex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

#[test]
fn test_full_handshake() {
    let mut transcript = Sha384::new();
    let early = EarlySecret::<Sha384>::new(None);

    transcript.update(b"ClientHello");
    assert_eq!(
        early.client_early_traffic_secret(&transcript).as_bytes(),
        hex("fdb41cfb0934de3f21d9f2a3482a3e2161861a93aa487ec0b61af2ff2d085783051790463bba6008539ba8f513d25d3a")
    );

    let shared_secret: Vec<u8> = (1..=48).collect();
    let handshake = early.handshake_secret(&shared_secret);

    transcript.update(b"ServerHello");
    assert_eq!(
        handshake.client_handshake_traffic_secret(&transcript).as_bytes(),
        hex("0f44ab3ed8210ded1441e9d00c33aab9471027150c4257ef06ac4423d5186cbefd905726d2d66301c0b3656bee567b1e")
    );
    assert_eq!(
        handshake.server_handshake_traffic_secret(&transcript).as_bytes(),
        hex("7852924fd52c8ee477e7a1973ab6d52894ec0b193062ec07bcda45b95de2b2533bd7b9ae0b36b6ec5d6c532bc21aa7b2")
    );

    let master = handshake.master_secret();

    for message in [
        &b"EncryptedExtensions"[..],
        b"Certificate",
        b"CertificateVerify",
        b"Finished",
    ] {
        transcript.update(message);
    }
    assert_eq!(
        master.client_application_traffic_secret(&transcript).as_bytes(),
        hex("673b6dba5b01a48737971dec52855008b9b4df25726d8c13a477b7170400687406d0fb66d80b2fdfdba58a974f597e7a")
    );
    assert_eq!(
        master.server_application_traffic_secret(&transcript).as_bytes(),
        hex("f0ddb68504501548496886d0240e1f13c7bd83da0241d3b4a6ad75679d1cafbe07eaa349a78341ee3befb8da3d0c9045")
    );
    assert_eq!(
        master
            .exporter_master_secret(&transcript)
            .exporter(b"EXPORTER-Test", b"context", 32)
            .as_bytes(),
        hex("3d559438f1a8872a1dad1430629f32bc8096f68fa3b1dd9c925c707726dcd98c")
    );

    transcript.update(b"Finished");
    assert_eq!(
        master.resumption_master_secret(&transcript).as_bytes(),
        hex("acabdcbad107da13c47a7e8616900a0023e0e3509255b568d18bcbab41684b20297591bbb7ce78032bb335f4f53a90c9")
    );
}

#[test]
fn test_early_data_with_psk() {
    let early = EarlySecret::<Sha384>::new(Some(&[0xaa; 48]));
    let transcript = Sha384::new_with_prefix(b"ClientHello");

    assert_eq!(
        early.external_binder_key().as_bytes(),
        hex("0529f2b5320fd270eb0cea1f3ef4b04d81069a1847c10c33ec1ce242fd913c039500a3dd9bd0bd01a3dfa95ad4d789dd")
    );
    assert_eq!(
        early
            .early_exporter_master_secret(&transcript)
            .exporter(b"EXPORTER-early", b"", 16)
            .as_bytes(),
        hex("a4e12c09331ceed170b7dafc3cc0b429")
    );
}
