//! Fixed parameters of the 3-Way cipher.

/// Number of full rounds. A twelfth key injection follows as finalization.
pub const ROUNDS: usize = 11;

/// Round constants for the encryption rounds.
///
/// Index [`ROUNDS`] is only used by the finalization step.
pub const ERCON: [u32; ROUNDS + 1] = [
    0x0b0b, 0x1616, 0x2c2c, 0x5858, 0xb0b0, 0x7171, 0xe2e2, 0xd5d5, 0xbbbb, 0x6767, 0xcece,
    0x8d8d,
];

/// Round constants for the decryption rounds.
///
/// Index [`ROUNDS`] is only used by the finalization step.
pub const DRCON: [u32; ROUNDS + 1] = [
    0xb1b1, 0x7373, 0xe6e6, 0xdddd, 0xabab, 0x4747, 0x8e8e, 0x0d0d, 0x1a1a, 0x3434, 0x6868,
    0xd0d0,
];
