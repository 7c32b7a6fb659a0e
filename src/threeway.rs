//! ThreeWay: the 3-Way block cipher engine.
//!
//! Holds the encryption key and the decryption key derived from it, and
//! drives 11 rounds of [`rho`] plus a finalization step over 96-bit blocks
//! (three `u32` words).

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{DRCON, ERCON, ROUNDS};
use crate::transforms::{mu, rho, theta};
use crate::Block;

/// 3-Way block cipher operating on 96-bit blocks with a 96-bit key.
///
/// # Key material
///
/// The encryption key `k` is stored verbatim. The decryption key `ki` is
/// `mu(theta(k))` and is only ever written together with `k` by
/// [`key_generator`](Self::key_generator), so the two never disagree.
///
/// An instance that was never keyed behaves exactly like one keyed with
/// `(0, 0, 0)`.
///
/// # Concurrency
///
/// Encryption and decryption take `&self` and touch no shared mutable
/// state, so a keyed instance can be shared between threads freely.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct ThreeWay {
    k: [u32; 3],
    ki: [u32; 3],
}

impl fmt::Debug for ThreeWay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThreeWay {{ ... }}")
    }
}

impl ThreeWay {
    /// Creates an unkeyed instance.
    ///
    /// Call [`key_generator`](Self::key_generator) before encrypting.
    ///
    /// # Examples
    ///
    /// ```
    /// use threeway::ThreeWay;
    ///
    /// let mut tw = ThreeWay::new();
    /// tw.key_generator(1, 2, 3);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an instance and runs the key schedule for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use threeway::ThreeWay;
    ///
    /// let tw = ThreeWay::with_key([0, 0, 0]);
    /// assert_eq!(
    ///     tw.encrypt_block(1, 1, 1),
    ///     (0x4059_c76e, 0x83ae_9dc4, 0xad21_ecf7)
    /// );
    /// ```
    pub fn with_key(key: [u32; 3]) -> Self {
        let mut tw = Self::new();
        tw.key_generator(key[0], key[1], key[2]);
        tw
    }

    /// Key schedule: stores the encryption key and derives the decryption
    /// key as `mu(theta(k0, k1, k2))`.
    ///
    /// Every 96-bit value is a valid key. Calling this again re-keys the
    /// instance.
    pub fn key_generator(&mut self, k0: u32, k1: u32, k2: u32) {
        self.k = [k0, k1, k2];
        self.ki = mu(theta(self.k));
        log::trace!("3-Way key schedule complete");
    }

    /// Encrypts one block given as three words.
    ///
    /// # Examples
    ///
    /// ```
    /// use threeway::ThreeWay;
    ///
    /// let tw = ThreeWay::with_key([6, 5, 4]);
    /// let (c0, c1, c2) = tw.encrypt_block(3, 2, 1);
    /// assert_eq!(tw.decrypt_block(c0, c1, c2), (3, 2, 1));
    /// ```
    pub fn encrypt_block(&self, a0: u32, a1: u32, a2: u32) -> (u32, u32, u32) {
        let [c0, c1, c2] = self.encrypt_words([a0, a1, a2]);
        (c0, c1, c2)
    }

    /// Decrypts one block given as three words.
    pub fn decrypt_block(&self, c0: u32, c1: u32, c2: u32) -> (u32, u32, u32) {
        let [a0, a1, a2] = self.decrypt_words([c0, c1, c2]);
        (a0, a1, a2)
    }

    /// Encrypts a block in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use threeway::ThreeWay;
    ///
    /// let tw = ThreeWay::with_key([0xdef0_1234, 0x4567_89ab, 0xbcde_f012]);
    /// let original = [0x2345_6789, 0x9abc_def0, 0x0123_4567];
    /// let mut block = original;
    ///
    /// tw.encrypt(&mut block);
    /// assert_eq!(block, [0x0aa5_5dbb, 0x9cdd_db6d, 0x7cdb_76b2]);
    ///
    /// tw.decrypt(&mut block);
    /// assert_eq!(block, original);
    /// ```
    pub fn encrypt(&self, block: &mut Block) {
        *block = self.encrypt_words(*block);
    }

    /// Decrypts a block in place.
    pub fn decrypt(&self, block: &mut Block) {
        *block = self.decrypt_words(*block);
    }

    /// Returns the encryption key.
    pub fn key(&self) -> [u32; 3] {
        self.k
    }

    /// Returns the derived decryption key.
    pub fn decryption_key(&self) -> [u32; 3] {
        self.ki
    }

    pub(crate) fn encrypt_words(&self, block: Block) -> Block {
        theta(Self::rounds(block, &self.k, &ERCON))
    }

    /// Decryption runs the encryption round shape over the mu-image of the
    /// ciphertext with the decryption key, then maps back through mu.
    pub(crate) fn decrypt_words(&self, block: Block) -> Block {
        mu(theta(Self::rounds(mu(block), &self.ki, &DRCON)))
    }

    /// 11 keyed rounds of `rho` followed by the finalization key injection.
    #[inline]
    fn rounds(mut a: Block, key: &[u32; 3], rcon: &[u32; ROUNDS + 1]) -> Block {
        for &rc in rcon.iter().take(ROUNDS) {
            a = rho(Self::add_round_key(a, key, rc));
        }
        Self::add_round_key(a, key, rcon[ROUNDS])
    }

    /// XORs the round key `(k0 ^ (rc << 16), k1, k2 ^ rc)` into the state.
    #[inline(always)]
    fn add_round_key(a: Block, key: &[u32; 3], rc: u32) -> Block {
        [a[0] ^ key[0] ^ (rc << 16), a[1] ^ key[1], a[2] ^ key[2] ^ rc]
    }
}
