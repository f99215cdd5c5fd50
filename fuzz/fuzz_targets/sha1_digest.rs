#![no_main]
use libfuzzer_sys::fuzz_target;
use rsha1::crypto::sha1::sha1_hex;

fuzz_target!(|data: &[u8]| {
    let digest = sha1_hex(data).unwrap();
    assert_eq!(digest.len(), 40);
    assert!(digest
        .bytes()
        .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    assert_eq!(digest, sha1_hex(data).unwrap());
});
