//! Known-answer tests for the 3-Way cipher.
//!
//! Word-level vectors are the published 3-Way reference vectors plus the
//! all-zero oracle. Expected values are frozen: any change in output means
//! a transform, a constant, or the round structure has drifted.

use threeway::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use threeway::consts::{DRCON, ERCON, ROUNDS};
use threeway::utils::converter::{blocks_to_bytes, bytes_to_blocks, key_from_bytes};
use threeway::ThreeWay;

/// (key, plaintext, ciphertext)
const VECTORS: [([u32; 3], [u32; 3], [u32; 3]); 5] = [
    (
        [0x0000_0000, 0x0000_0000, 0x0000_0000],
        [0x0000_0000, 0x0000_0000, 0x0000_0000],
        [0x44e1_7bb8, 0x8e5d_b349, 0xc213_c836],
    ),
    (
        [0x0000_0000, 0x0000_0000, 0x0000_0000],
        [0x0000_0001, 0x0000_0001, 0x0000_0001],
        [0x4059_c76e, 0x83ae_9dc4, 0xad21_ecf7],
    ),
    (
        [0x0000_0006, 0x0000_0005, 0x0000_0004],
        [0x0000_0003, 0x0000_0002, 0x0000_0001],
        [0xd2f0_5b5e, 0xd614_4138, 0xcab9_20cd],
    ),
    (
        [0xdef0_1234, 0x4567_89ab, 0xbcde_f012],
        [0x2345_6789, 0x9abc_def0, 0x0123_4567],
        [0x0aa5_5dbb, 0x9cdd_db6d, 0x7cdb_76b2],
    ),
    (
        [0xd2f0_5b5e, 0xd614_4138, 0xcab9_20cd],
        [0x4059_c76e, 0x83ae_9dc4, 0xad21_ecf7],
        [0x478e_a871, 0x6b13_f17c, 0x15b1_55ed],
    ),
];

/// (key, derived decryption key)
const DECRYPTION_KEYS: [([u32; 3], [u32; 3]); 4] = [
    ([0, 0, 0], [0, 0, 0]),
    ([6, 5, 4], [0x2080_e020, 0xa0c0_e0a0, 0x6040_e060]),
    (
        [0xdef0_1234, 0x4567_89ab, 0xbcde_f012],
        [0x9290_f63e, 0x4983_f548, 0x2eb3_c4f5],
    ),
    (
        [0xd2f0_5b5e, 0xd614_4138, 0xcab9_20cd],
        [0xabf0_a509, 0x6498_ee0c, 0xfcfd_57ff],
    ),
];

// ═══════════════════════════════════════════════════════════════════════
// Word-level API
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn zero_key_zero_plaintext_oracle() {
    let mut tw = ThreeWay::new();
    tw.key_generator(0, 0, 0);
    assert_eq!(tw.decryption_key(), [0, 0, 0]);
    assert_eq!(
        tw.encrypt_block(0, 0, 0),
        (0x44e1_7bb8, 0x8e5d_b349, 0xc213_c836)
    );
}

#[test]
fn encrypt_reference_vectors() {
    for (i, (key, plain, cipher)) in VECTORS.iter().enumerate() {
        let mut tw = ThreeWay::new();
        tw.key_generator(key[0], key[1], key[2]);
        let got = tw.encrypt_block(plain[0], plain[1], plain[2]);
        assert_eq!(got, (cipher[0], cipher[1], cipher[2]), "vector {}", i);
    }
}

#[test]
fn decrypt_reference_vectors() {
    for (i, (key, plain, cipher)) in VECTORS.iter().enumerate() {
        let tw = ThreeWay::with_key(*key);
        let got = tw.decrypt_block(cipher[0], cipher[1], cipher[2]);
        assert_eq!(got, (plain[0], plain[1], plain[2]), "vector {}", i);
    }
}

#[test]
fn in_place_reference_vectors() {
    for (key, plain, cipher) in VECTORS.iter() {
        let tw = ThreeWay::with_key(*key);
        let mut block = *plain;
        tw.encrypt(&mut block);
        assert_eq!(block, *cipher);
        tw.decrypt(&mut block);
        assert_eq!(block, *plain);
    }
}

#[test]
fn decryption_key_snapshots() {
    for (key, expected) in DECRYPTION_KEYS.iter() {
        let tw = ThreeWay::with_key(*key);
        assert_eq!(tw.key(), *key);
        assert_eq!(tw.decryption_key(), *expected, "key {:08x?}", key);
    }
}

/// Vectors chained: the ciphertext of one feeds the key of the next.
#[test]
fn chained_vector_feeds_next_key() {
    let first = ThreeWay::with_key([6, 5, 4]);
    let (c0, c1, c2) = first.encrypt_block(3, 2, 1);

    let second = ThreeWay::with_key([c0, c1, c2]);
    assert_eq!(
        second.encrypt_block(0x4059_c76e, 0x83ae_9dc4, 0xad21_ecf7),
        (0x478e_a871, 0x6b13_f17c, 0x15b1_55ed)
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Constant tables
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn round_constant_tables_are_frozen() {
    assert_eq!(ROUNDS, 11);
    assert_eq!(
        ERCON,
        [
            0x0b0b, 0x1616, 0x2c2c, 0x5858, 0xb0b0, 0x7171, 0xe2e2, 0xd5d5, 0xbbbb, 0x6767,
            0xcece, 0x8d8d
        ]
    );
    assert_eq!(
        DRCON,
        [
            0xb1b1, 0x7373, 0xe6e6, 0xdddd, 0xabab, 0x4747, 0x8e8e, 0x0d0d, 0x1a1a, 0x3434,
            0x6868, 0xd0d0
        ]
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Byte-level API (big-endian words)
// ═══════════════════════════════════════════════════════════════════════

/// (key hex, plaintext hex, ciphertext hex)
const BYTE_VECTORS: [(&str, &str, &str); 3] = [
    (
        "000000000000000000000000",
        "000000010000000100000001",
        "4059c76e83ae9dc4ad21ecf7",
    ),
    (
        "000000060000000500000004",
        "000000030000000200000001",
        "d2f05b5ed6144138cab920cd",
    ),
    (
        "def01234456789abbcdef012",
        "234567899abcdef001234567",
        "0aa55dbb9cdddb6d7cdb76b2",
    ),
];

#[test]
fn block_cipher_trait_vectors() {
    for (key_hex, plain_hex, cipher_hex) in BYTE_VECTORS {
        let key = hex::decode(key_hex).unwrap();
        let plain = hex::decode(plain_hex).unwrap();

        let tw = ThreeWay::new_from_slice(&key).unwrap();
        let mut block = GenericArray::clone_from_slice(&plain);

        BlockEncrypt::encrypt_block(&tw, &mut block);
        assert_eq!(hex::encode(block.as_slice()), cipher_hex);

        BlockDecrypt::decrypt_block(&tw, &mut block);
        assert_eq!(hex::encode(block.as_slice()), plain_hex);
    }
}

#[test]
fn converter_matches_block_cipher_trait() {
    for (key_hex, plain_hex, cipher_hex) in BYTE_VECTORS {
        let key = key_from_bytes(&hex::decode(key_hex).unwrap()).unwrap();
        let tw = ThreeWay::with_key(key);

        let mut blocks = bytes_to_blocks(&hex::decode(plain_hex).unwrap()).unwrap();
        for block in blocks.iter_mut() {
            tw.encrypt(block);
        }
        assert_eq!(hex::encode(blocks_to_bytes(&blocks)), cipher_hex);
    }
}

#[test]
fn key_init_rejects_wrong_key_length() {
    assert!(ThreeWay::new_from_slice(&[0u8; 8]).is_err());
    assert!(ThreeWay::new_from_slice(&[0u8; 16]).is_err());
    assert!(key_from_bytes(&[0u8; 16]).is_err());
}
