//! 3-Way block cipher.
//!
//! 3-Way is a substitution-permutation network over a 96-bit block made of
//! three 32-bit words, keyed with a 96-bit key. Every block goes through 11
//! rounds of the round function followed by a final key injection and a
//! diffusion step.
//!
//! This crate provides the word-level primitive. Modes of operation and
//! padding are left to the caller; the block type also implements the
//! RustCrypto [`cipher`] traits so it can be plugged into generic mode
//! implementations.
//!
//! # Architecture
//!
//! ```text
//! transforms  (mu, gamma, theta, pi1, pi2 → rho = pi2 ∘ gamma ∘ pi1 ∘ theta)
//!     ↓
//! ThreeWay    (key schedule + 11 rounds + finalization, encrypt / decrypt)
//!     ↓
//! cipher      (KeyInit / BlockEncrypt / BlockDecrypt over 12-byte blocks)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a block of three words:
//!
//! ```
//! use threeway::ThreeWay;
//!
//! let mut tw = ThreeWay::new();
//! tw.key_generator(0, 0, 0);
//!
//! let (c0, c1, c2) = tw.encrypt_block(1, 1, 1);
//! assert_eq!((c0, c1, c2), (0x4059_c76e, 0x83ae_9dc4, 0xad21_ecf7));
//!
//! assert_eq!(tw.decrypt_block(c0, c1, c2), (1, 1, 1));
//! ```
//!
//! Through the `cipher` traits, on bytes:
//!
//! ```
//! use threeway::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
//! use threeway::ThreeWay;
//!
//! let tw = ThreeWay::new_from_slice(&[0x42; 12]).unwrap();
//! let mut block = GenericArray::from([7u8; 12]);
//!
//! BlockEncrypt::encrypt_block(&tw, &mut block);
//! BlockDecrypt::decrypt_block(&tw, &mut block);
//! assert_eq!(block, GenericArray::from([7u8; 12]));
//! ```

#![deny(clippy::all)]

pub use cipher;

pub mod consts;
pub mod error;
pub mod transforms;
pub mod utils;

mod block_cipher;
mod threeway;

pub use crate::error::ThreeWayError;
pub use crate::threeway::ThreeWay;

/// A 32-bit cipher word.
pub type Word = u32;

/// A 96-bit block: three words in significant order.
pub type Block = [Word; 3];
