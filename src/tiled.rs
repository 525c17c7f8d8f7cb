/*
 * Copyright (c) the nv12t contributors, 8/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Address computation for the 64x32 tiled macroblock layout.
//!
//! The layout stores a plane as 64-byte-wide, 32-row blocks of 2048 bytes
//! each. Blocks are laid out in a hardware-defined scan order: odd block rows
//! are skewed against the preceding even row, even block rows use one of two
//! formulas depending on whether they sit in the last incomplete row group of
//! the image. The formulas below encode a fixed hardware memory contract and
//! are reproduced bit-exact.

/// Width of one tiled block in samples.
pub const TILE_WIDTH: usize = 64;
/// Height of one tiled block in rows.
pub const TILE_HEIGHT: usize = 32;
/// Bytes per tiled block.
pub const TILE_SIZE: usize = TILE_WIDTH * TILE_HEIGHT;

#[inline]
pub(crate) const fn align_up(value: usize, alignment: usize) -> usize {
    (value + alignment - 1) & !(alignment - 1)
}

/// Blocks per block row. The hardware rounds the plane width up to a pair of
/// blocks (128 samples) before slicing it into 64-sample columns.
#[inline]
pub(crate) const fn row_blocks(width: usize) -> usize {
    align_up(width, 2 * TILE_WIDTH) / TILE_WIDTH
}

/// Byte offset of tiled block `(bx, by)` inside a `width` x `height` plane.
///
/// Closed form over block coordinates. `width` and `height` are the
/// dimensions of the tiled plane itself (for a cropped linear-to-tiled
/// conversion that is the cropped size, not the full image size).
#[inline]
pub fn tiled_block_offset(width: usize, height: usize, bx: usize, by: usize) -> usize {
    let per_row = row_blocks(width);
    let index = if by & 0x1 != 0 {
        // Odd block row: skewed against the even row above it.
        (by - 1) * per_row + bx + 2 + (bx & !3)
    } else if (by + 2) * TILE_HEIGHT <= align_up(height, TILE_HEIGHT) {
        // Even block row with a full odd row below: pairs of columns are
        // interleaved with the skewed odd row.
        bx + ((bx + 2) & !3) + by * per_row
    } else {
        // Last incomplete row group: plain row-major blocks.
        bx + by * per_row
    };
    index * TILE_SIZE
}

/// Byte offset of the 4-byte group holding pixel `(x, y)` inside a tiled
/// `width` x `height` plane.
///
/// Per-pixel bank-interleaved formula; the low two bits of `x` are dropped,
/// callers add `x & 0x3` to address a single byte. Total over
/// `0 <= x < width`, `0 <= y < height`; callers never pass out-of-range
/// coordinates.
#[inline]
pub fn tiled_pixel_offset(width: usize, height: usize, x: usize, y: usize) -> usize {
    let pixel_x_m1 = width - 1;
    let pixel_y_m1 = height - 1;
    let roundup_x = (pixel_x_m1 >> 7) + 1;
    let x_addr = x >> 2;

    let linear_addr0 = ((y & 0x1f) << 4) | (x_addr & 0xf);
    let last_even_row_group = height <= y + TILE_HEIGHT
        && y < height
        && ((pixel_y_m1 >> 5) & 0x1) == 0
        && ((y >> 5) & 0x1) == 0;
    let linear_addr1 = if last_even_row_group {
        ((y >> 6) & 0xff) * roundup_x + ((x_addr >> 6) & 0x3f)
    } else {
        ((y >> 6) & 0xff) * roundup_x + ((x_addr >> 5) & 0x7f)
    };
    let bank_addr = if ((x_addr >> 5) & 0x1) == ((y >> 5) & 0x1) {
        (x_addr >> 4) & 0x1
    } else {
        0x2 | ((x_addr >> 4) & 0x1)
    };

    (linear_addr1 << 13) | (bank_addr << 11) | (linear_addr0 << 2)
}

/// Total byte size of a tiled plane of the given dimensions.
#[inline]
pub fn tiled_plane_size(width: usize, height: usize) -> usize {
    row_blocks(width) * (align_up(height, TILE_HEIGHT) / TILE_HEIGHT) * TILE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    // The closed block form and the per-pixel formula describe the same
    // hardware layout; they must agree wherever both are defined.
    fn assert_formulas_agree(width: usize, height: usize) {
        for y in 0..height {
            for x in 0..width {
                let per_pixel = tiled_pixel_offset(width, height, x, y) + (x & 0x3);
                let block = tiled_block_offset(width, height, x / TILE_WIDTH, y / TILE_HEIGHT)
                    + TILE_WIDTH * (y % TILE_HEIGHT)
                    + (x % TILE_WIDTH);
                assert_eq!(
                    per_pixel, block,
                    "mismatch at ({x},{y}) in {width}x{height}"
                );
            }
        }
    }

    #[test]
    fn block_and_pixel_formulas_agree_even_row_groups() {
        assert_formulas_agree(128, 64);
        assert_formulas_agree(256, 64);
        assert_formulas_agree(192, 128);
    }

    #[test]
    fn block_and_pixel_formulas_agree_odd_row_groups() {
        assert_formulas_agree(128, 32);
        assert_formulas_agree(256, 96);
        assert_formulas_agree(512, 32);
    }

    #[test]
    fn block_and_pixel_formulas_agree_hd() {
        assert_formulas_agree(1280, 720);
    }

    fn assert_injective_and_bounded(width: usize, height: usize) {
        let mut seen = vec![false; tiled_plane_size(width, height)];
        for y in 0..height {
            for x in 0..width {
                let offset = tiled_pixel_offset(width, height, x, y) + (x & 0x3);
                assert!(
                    offset < seen.len(),
                    "offset {offset} out of plane at ({x},{y}) in {width}x{height}"
                );
                assert!(
                    !seen[offset],
                    "offset {offset} hit twice at ({x},{y}) in {width}x{height}"
                );
                seen[offset] = true;
            }
        }
    }

    #[test]
    fn addressing_is_injective_small() {
        assert_injective_and_bounded(128, 64);
    }

    #[test]
    fn addressing_is_injective_hd() {
        assert_injective_and_bounded(1280, 720);
    }

    #[test]
    fn aligned_plane_is_dense() {
        // For block-aligned dimensions every byte of the plane is hit, so the
        // tiled plane is exactly width*height bytes.
        let (width, height) = (128, 64);
        assert_eq!(tiled_plane_size(width, height), width * height);
        let mut seen = vec![false; width * height];
        for y in 0..height {
            for x in 0..width {
                seen[tiled_pixel_offset(width, height, x, y) + (x & 0x3)] = true;
            }
        }
        assert!(seen.iter().all(|&hit| hit));
    }
}
