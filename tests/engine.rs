use shabench::digest::{Digest, DigestAlgorithm, SHA256};
use shabench::{sha256, sha256_hex, DigestError, SHA256Digest};

#[test]
fn library_one_shot_matches_incremental() {
    let message = b"The quick brown fox jumps over the lazy dog";

    let mut engine = SHA256::new();
    for piece in message.chunks(5) {
        engine.update(piece).unwrap();
    }
    let incremental = engine.finalize().unwrap();

    assert_eq!(incremental, sha256(message).unwrap());
    assert_eq!(
        sha256_hex(message).unwrap(),
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
    );
}

#[test]
fn library_misuse_is_reported() {
    let mut engine = SHA256::new();
    engine.update(b"payload").unwrap();
    let digest = engine.finalize().unwrap();

    assert_eq!(engine.update(b"late"), Err(DigestError::AlreadyFinalized));
    assert_eq!(engine.finalize(), Err(DigestError::AlreadyFinalized));

    engine.reset();
    engine.update(b"payload").unwrap();
    assert_eq!(engine.finalize().unwrap(), digest);
}

#[test]
fn library_digest_conversions() {
    let digest = sha256(b"abc").unwrap();
    let boxed: Box<[u8]> = digest.into();
    assert_eq!(&boxed[..], digest.as_ref());
    assert_eq!(digest.to_bytes().len(), SHA256Digest::LEN);
    assert_eq!(SHA256Digest::from_bytes(digest.to_bytes()), digest);
    assert_eq!(digest.to_hex(), digest.to_string());
}
