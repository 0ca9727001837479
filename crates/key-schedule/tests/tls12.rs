#![cfg(feature = "tls12")]

use sha2::Digest;
use tls_key_schedule::{
    tls12::{self, Side, MASTER_SECRET_LENGTH, VERIFY_DATA_LENGTH},
    Sha256,
};

#[test]
fn test_extended_master_secret_session() {
    let mut pms = vec![0x03, 0x03];
    pms.extend(0..46u8);

    let session_hash = Sha256::digest(b"ClientHello||ServerHello||Certificate||ClientKeyExchange");
    let ms = tls12::extended_master_secret::<Sha256>(&pms, &session_hash);
    assert_eq!(ms.len(), MASTER_SECRET_LENGTH);
    assert_eq!(
        hex::encode(ms.as_bytes()),
        "d31e6463af5a616bafca5851a4717fb2c7325e374bd73c8003033c6a4926749b786c99b08d5c013d1d38a7c7d3c9d22d"
    );

    let keys = tls12::key_block::<Sha256>(&ms, &[2u8; 32], &[1u8; 32], 40);
    assert_eq!(keys.len(), 40);

    let handshake_hash = Sha256::digest(b"handshake");
    let client = tls12::finished_verify_data::<Sha256>(&ms, Side::Client, &handshake_hash);
    let server = tls12::finished_verify_data::<Sha256>(&ms, Side::Server, &handshake_hash);
    assert_eq!(client.len(), VERIFY_DATA_LENGTH);
    assert_ne!(client, server);
}
