//! Bit-level transforms composing a 3-Way round.
//!
//! All functions are total over `[u32; 3]`. Bits shifted out of a `u32` are
//! discarded; every shift amount is a constant strictly between 0 and 32.
//!
//! ```text
//! rho = pi2 ∘ gamma ∘ pi1 ∘ theta
//! ```

use crate::Block;

/// Reverses the bit order of each word and the order of the words.
///
/// Input word 0 lands, bit-reversed, in output word 2 and vice versa; the
/// middle word keeps its position. `mu` is an involution.
///
/// # Examples
///
/// ```
/// use threeway::transforms::mu;
///
/// assert_eq!(mu([1, 0, 0]), [0, 0, 0x8000_0000]);
/// assert_eq!(mu(mu([1, 2, 3])), [1, 2, 3]);
/// ```
#[inline]
pub fn mu(a: Block) -> Block {
    [a[2].reverse_bits(), a[1].reverse_bits(), a[0].reverse_bits()]
}

/// Nonlinear substitution layer, applied bitwise across all 32 lanes.
///
/// Each output bit depends on the three bits at the same position of the
/// input words.
#[inline]
pub fn gamma(a: Block) -> Block {
    [
        !a[0] ^ (!a[1] & a[2]),
        !a[1] ^ (!a[2] & a[0]),
        !a[2] ^ (!a[0] & a[1]),
    ]
}

/// Linear diffusion layer.
///
/// Each output word XORs its input word with six shift pairs taken from
/// all three words; `w1` and `w2` repeat the pattern of `w0` with the word
/// indices cycled by one. Linear over XOR.
#[inline]
pub fn theta(a: Block) -> Block {
    let [a0, a1, a2] = a;

    let w0 = a0
        ^ (a0 >> 16) ^ (a1 << 16)
        ^ (a1 >> 16) ^ (a2 << 16)
        ^ (a1 >> 24) ^ (a2 << 8)
        ^ (a2 >> 8) ^ (a0 << 24)
        ^ (a2 >> 16) ^ (a0 << 16)
        ^ (a2 >> 24) ^ (a0 << 8);

    let w1 = a1
        ^ (a1 >> 16) ^ (a2 << 16)
        ^ (a2 >> 16) ^ (a0 << 16)
        ^ (a2 >> 24) ^ (a0 << 8)
        ^ (a0 >> 8) ^ (a1 << 24)
        ^ (a0 >> 16) ^ (a1 << 16)
        ^ (a0 >> 24) ^ (a1 << 8);

    let w2 = a2
        ^ (a2 >> 16) ^ (a0 << 16)
        ^ (a0 >> 16) ^ (a1 << 16)
        ^ (a0 >> 24) ^ (a1 << 8)
        ^ (a1 >> 8) ^ (a2 << 24)
        ^ (a1 >> 16) ^ (a2 << 16)
        ^ (a1 >> 24) ^ (a2 << 8);

    [w0, w1, w2]
}

/// First permutation: word 0 right by 10, word 2 left by 1.
#[inline]
pub fn pi1(a: Block) -> Block {
    [a[0].rotate_right(10), a[1], a[2].rotate_left(1)]
}

/// Second permutation: word 0 left by 1, word 2 right by 10.
///
/// Not the inverse of [`pi1`]: `pi2(pi1(x))` rotates words 0 and 2 right
/// by 9. It inverts the mu-conjugate of `pi1`, `mu(pi1(mu(pi2(x)))) == x`.
#[inline]
pub fn pi2(a: Block) -> Block {
    [a[0].rotate_left(1), a[1], a[2].rotate_right(10)]
}

/// Round function: diffuse, permute, substitute, permute back out.
#[inline]
pub fn rho(a: Block) -> Block {
    pi2(gamma(pi1(theta(a))))
}
