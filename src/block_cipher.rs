//! RustCrypto `cipher` trait integration.
//!
//! Exposes [`ThreeWay`] as a 12-byte-block, 12-byte-key
//! [`BlockCipher`] so it can be driven by generic mode implementations.
//! Keys and blocks use the big-endian word layout of
//! [`utils::converter`](crate::utils::converter).

use std::fmt;

use cipher::{
    consts::{U1, U12},
    inout::InOut,
    AlgorithmName, Block, BlockBackend, BlockCipher, BlockClosure, BlockDecrypt, BlockEncrypt,
    BlockSizeUser, Key, KeyInit, KeySizeUser, ParBlocksSizeUser,
};

use crate::utils::converter::{load_block, store_block};
use crate::ThreeWay;

impl KeySizeUser for ThreeWay {
    type KeySize = U12;
}

impl BlockSizeUser for ThreeWay {
    type BlockSize = U12;
}

impl BlockCipher for ThreeWay {}

impl KeyInit for ThreeWay {
    fn new(key: &Key<Self>) -> Self {
        ThreeWay::with_key(load_block(key))
    }
}

impl AlgorithmName for ThreeWay {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("3-Way")
    }
}

impl BlockEncrypt for ThreeWay {
    fn encrypt_with_backend(&self, f: impl BlockClosure<BlockSize = U12>) {
        f.call(&mut EncBackend(self))
    }
}

impl BlockDecrypt for ThreeWay {
    fn decrypt_with_backend(&self, f: impl BlockClosure<BlockSize = U12>) {
        f.call(&mut DecBackend(self))
    }
}

/// Single-block encryption backend.
struct EncBackend<'a>(&'a ThreeWay);

impl BlockSizeUser for EncBackend<'_> {
    type BlockSize = U12;
}

impl ParBlocksSizeUser for EncBackend<'_> {
    type ParBlocksSize = U1;
}

impl BlockBackend for EncBackend<'_> {
    #[inline]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let words = self.0.encrypt_words(load_block(block.get_in()));
        store_block(&words, block.get_out());
    }
}

/// Single-block decryption backend.
struct DecBackend<'a>(&'a ThreeWay);

impl BlockSizeUser for DecBackend<'_> {
    type BlockSize = U12;
}

impl ParBlocksSizeUser for DecBackend<'_> {
    type ParBlocksSize = U1;
}

impl BlockBackend for DecBackend<'_> {
    #[inline]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let words = self.0.decrypt_words(load_block(block.get_in()));
        store_block(&words, block.get_out());
    }
}
