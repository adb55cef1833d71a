//! Fixed-base power table: windowed precomputation for repeated multiplication of one
//! base point (component B). Mirrors the source's `PowerTable`: low-to-high digit
//! decomposition, one block of `2^w` precomputed multiples per `w`-bit window.

use crate::affine::Affine;
use crate::group::Group;
use crate::scalarfield::ScalarField;

/// Default window width, matching the source's `window_size=4` default.
pub const DEFAULT_WINDOW_SIZE: u32 = 4;

/// Default maximum scalar bit-length. The source defaults to 450 bits for its
/// 248-bit-order production curve; this workspace's toy scalar ring `Z_59` needs only 6
/// bits, but 64 is kept as the default so a table built for one base can be reused for
/// any `u64`-range scalar, not just reduced ring elements.
pub const DEFAULT_MAX_BITS: u32 = 64;

/// Precomputed multiples of a fixed base point, in windows of `window_size` bits.
#[derive(Clone, Debug)]
pub struct PowerTable {
    window_size: u32,
    table: Vec<Vec<Affine>>,
}

impl PowerTable {
    /// `Build(P, w, B)`: for block `i` in `[0, ceil(B/w))`, store
    /// `[j * (2^(i*w) * P) for j in 0..2^w)`.
    pub fn build(base: Affine, window_size: u32, max_bits: u32) -> Self {
        assert!(window_size > 0 && window_size <= 16, "window size out of range");
        let num_blocks = max_bits.div_ceil(window_size);
        let block_size = 1usize << window_size;

        let mut table = Vec::with_capacity(num_blocks as usize);
        let mut current = base;
        for _ in 0..num_blocks {
            let mut block = Vec::with_capacity(block_size);
            block.push(Affine::INFINITY);
            for j in 1..block_size {
                block.push(block[j - 1] + current);
            }
            table.push(block);
            for _ in 0..window_size {
                current = current.double();
            }
        }

        PowerTable {
            window_size,
            table,
        }
    }

    /// Build with the default window size and bit-length.
    pub fn build_default(base: Affine) -> Self {
        Self::build(base, DEFAULT_WINDOW_SIZE, DEFAULT_MAX_BITS)
    }

    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    /// `Multiply(tbl, k)`: decompose `k` into base-`2^w` digits low-to-high, accumulating
    /// `result += tbl[i][digit_i]`, seeded at `tbl[0][0]` (identity).
    pub fn multiply(&self, scalar: &ScalarField) -> Affine {
        let mut k = scalar.value();
        let mask = (1u64 << self.window_size) - 1;
        let mut result = self.table[0][0];
        let mut block_idx = 0usize;
        while k > 0 {
            assert!(
                block_idx < self.table.len(),
                "scalar exceeds table's maximum bit-length"
            );
            let digit = (k & mask) as usize;
            result = result + self.table[block_idx][digit];
            k >>= self.window_size;
            block_idx += 1;
        }
        result
    }
}
