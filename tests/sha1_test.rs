/// Test SHA-1 implementation against known vectors
use rsha1::crypto::encoding::hex_encode;
use rsha1::crypto::sha1::{sha1, sha1_hex};

#[test]
fn test_sha1_empty() {
    assert_eq!(
        sha1_hex(b"").unwrap(),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
}

#[test]
fn test_sha1_abc() {
    assert_eq!(
        sha1_hex(b"abc").unwrap(),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
}

#[test]
fn test_sha1_two_block_message() {
    let input = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    assert_eq!(
        sha1_hex(input).unwrap(),
        "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
    );
}

#[test]
fn test_sha1_quick_brown_fox() {
    let input = b"The quick brown fox jumps over the lazy dog";
    assert_eq!(
        sha1_hex(input).unwrap(),
        "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"
    );
}

#[test]
fn test_sha1_million_a() {
    let input = vec![b'a'; 1_000_000];
    assert_eq!(
        sha1_hex(&input).unwrap(),
        "34aa973cd4c4daa4f61eeb2bdbad27316534016f"
    );
}

/// Lengths that straddle the padding and block boundaries
#[test]
fn test_sha1_padding_boundaries() {
    let expected = [
        (55, "c1c8bbdc22796e28c0e15163d20899b65621d65a"),
        (56, "c2db330f6083854c99d4b5bfb6e8f29f201be699"),
        (57, "f08f24908d682555111be7ff6f004e78283d989a"),
        (63, "03f09f5b158a7a8cdad920bddc29b81c18a551f5"),
        (64, "0098ba824b5c16427bd7a1122a5a442a25ec644d"),
        (65, "11655326c708d70319be2610e8a57d9a5b959d3b"),
    ];
    for (len, digest) in expected {
        let input = vec![b'a'; len];
        assert_eq!(sha1_hex(&input).unwrap(), digest, "length {}", len);
    }
}

#[test]
fn test_sha1_deterministic() {
    let input = b"The quick brown fox jumps over the lazy dog";
    assert_eq!(sha1_hex(input).unwrap(), sha1_hex(input).unwrap());
}

#[test]
fn test_sha1_output_shape() {
    for input in [&b""[..], b"a", b"abc", &[0u8; 200]] {
        let digest = sha1_hex(input).unwrap();
        assert_eq!(digest.len(), 40);
        assert!(digest
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }
}

/// Flipping any single bit of the input must change the digest
#[test]
fn test_sha1_avalanche() {
    let input = b"The quick brown fox jumps over the lazy dog";
    let base = sha1_hex(input).unwrap();

    for byte in 0..input.len() {
        for bit in 0..8 {
            let mut flipped = input.to_vec();
            flipped[byte] ^= 1 << bit;
            assert_ne!(
                sha1_hex(&flipped).unwrap(),
                base,
                "byte {} bit {}",
                byte,
                bit
            );
        }
    }
}

#[test]
fn test_sha1_raw_and_hex_agree() {
    let input = b"abc";
    assert_eq!(hex_encode(&sha1(input).unwrap()), sha1_hex(input).unwrap());
}
