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
//! Linear to tiled plane conversion.
//!
//! Unlike the tiled-to-linear direction, the tiled destination here is
//! addressed with the cropped dimensions: cropping first, then tiling the
//! remaining region. The linear source keeps its full-frame stride.

use crate::interleave::interleave_uv;
use crate::tiled::{tiled_block_offset, TILE_HEIGHT, TILE_WIDTH};

/// Converts a linear plane to tiled, dropping `left`/`top`/`right`/`bottom`
/// samples from the source. The destination plane is laid out for the
/// cropped dimensions. Works for a luma plane or an interleaved chroma
/// plane kept interleaved.
///
/// # Panics
///
/// Panics if `linear` is shorter than `width * height` or `tiled` does not
/// cover the tiled plane for the cropped dimensions.
pub fn linear_to_tiled_crop(
    tiled: &mut [u8],
    linear: &[u8],
    width: usize,
    height: usize,
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
) {
    let tiled_w = width - left - right;
    let tiled_h = height - top - bottom;
    let aligned_w = tiled_w & !(TILE_WIDTH - 1);
    let aligned_h = tiled_h & !(TILE_HEIGHT - 1);

    // Whole 64x32 blocks.
    for y in (0..aligned_h).step_by(TILE_HEIGHT) {
        for x in (0..aligned_w).step_by(TILE_WIDTH) {
            let block = tiled_block_offset(tiled_w, tiled_h, x / TILE_WIDTH, y / TILE_HEIGHT);
            for row in 0..TILE_HEIGHT {
                let src = left + x + width * (y + top + row);
                tiled[block + TILE_WIDTH * row..][..TILE_WIDTH]
                    .copy_from_slice(&linear[src..src + TILE_WIDTH]);
            }
        }
    }

    // Rows below the last 32-aligned boundary, two at a time.
    for y in (aligned_h..tiled_h).step_by(2) {
        for x in (0..aligned_w).step_by(TILE_WIDTH) {
            let block = tiled_block_offset(tiled_w, tiled_h, x / TILE_WIDTH, y / TILE_HEIGHT);
            for row in 0..2 {
                let src = left + x + width * (y + top + row);
                tiled[block + TILE_WIDTH * (y % TILE_HEIGHT + row)..][..TILE_WIDTH]
                    .copy_from_slice(&linear[src..src + TILE_WIDTH]);
            }
        }
    }

    // Columns right of the last 64-aligned boundary, two samples per step.
    for y in (0..tiled_h).step_by(2) {
        for x in (aligned_w..tiled_w).step_by(2) {
            let block = tiled_block_offset(tiled_w, tiled_h, x / TILE_WIDTH, y / TILE_HEIGHT);
            let dst = block + x % TILE_WIDTH + TILE_WIDTH * (y % TILE_HEIGHT);
            for row in 0..2 {
                let src = left + x + width * (y + top + row);
                tiled[dst + TILE_WIDTH * row..][..2].copy_from_slice(&linear[src..src + 2]);
            }
        }
    }
}

/// Converts separate linear U and V planes to one tiled interleaved chroma
/// plane. `width` is the luma width (the interleaved plane is `width` bytes
/// wide), `uv_height` the chroma plane height; crop margins are in luma
/// sample units.
///
/// # Panics
///
/// Panics if either source is shorter than `width * uv_height / 2` or
/// `uv_dst` does not cover the tiled plane for the cropped dimensions.
pub fn linear_to_tiled_interleave_crop(
    uv_dst: &mut [u8],
    u_src: &[u8],
    v_src: &[u8],
    width: usize,
    uv_height: usize,
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
) {
    let tiled_w = width - left - right;
    let tiled_h = uv_height - top - bottom;
    let aligned_w = tiled_w & !(TILE_WIDTH - 1);
    let aligned_h = tiled_h & !(TILE_HEIGHT - 1);
    let half_stride = width / 2;

    // Whole 64x32 blocks, 32 chroma pairs per destination row.
    for y in (0..aligned_h).step_by(TILE_HEIGHT) {
        for x in (0..aligned_w).step_by(TILE_WIDTH) {
            let block = tiled_block_offset(tiled_w, tiled_h, x / TILE_WIDTH, y / TILE_HEIGHT);
            for row in 0..TILE_HEIGHT {
                let src = left / 2 + x / 2 + half_stride * (y + top + row);
                interleave_uv(
                    &mut uv_dst[block + TILE_WIDTH * row..][..TILE_WIDTH],
                    &u_src[src..],
                    &v_src[src..],
                    TILE_WIDTH / 2,
                );
            }
        }
    }

    // Rows below the last 32-aligned boundary.
    for y in aligned_h..tiled_h {
        for x in (0..aligned_w).step_by(TILE_WIDTH) {
            let block = tiled_block_offset(tiled_w, tiled_h, x / TILE_WIDTH, y / TILE_HEIGHT);
            let src = left / 2 + x / 2 + half_stride * (y + top);
            interleave_uv(
                &mut uv_dst[block + TILE_WIDTH * (y % TILE_HEIGHT)..][..TILE_WIDTH],
                &u_src[src..],
                &v_src[src..],
                TILE_WIDTH / 2,
            );
        }
    }

    // Columns right of the last 64-aligned boundary, one pair per step.
    for y in 0..tiled_h {
        for x in (aligned_w..tiled_w).step_by(2) {
            let block = tiled_block_offset(tiled_w, tiled_h, x / TILE_WIDTH, y / TILE_HEIGHT);
            let dst = block + x % TILE_WIDTH + TILE_WIDTH * (y % TILE_HEIGHT);
            let src = left / 2 + x / 2 + half_stride * (y + top);
            uv_dst[dst] = u_src[src];
            uv_dst[dst + 1] = v_src[src];
        }
    }
}

/// Converts a full linear luma plane to tiled.
pub fn linear_to_tiled_y(y_dst: &mut [u8], y_src: &[u8], width: usize, height: usize) {
    linear_to_tiled_crop(y_dst, y_src, width, height, 0, 0, 0, 0);
}

/// Converts a full linear interleaved chroma plane to tiled. `uv_height` is
/// half the image height.
pub fn linear_to_tiled_uv(uv_dst: &mut [u8], uv_src: &[u8], width: usize, uv_height: usize) {
    linear_to_tiled_crop(uv_dst, uv_src, width, uv_height, 0, 0, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiled::tiled_plane_size;
    use crate::tiled_to_linear::{
        tiled_to_linear_uv_deinterleave, tiled_to_linear_y,
    };
    use rand::Rng;

    #[test]
    fn luma_round_trip_is_identity() {
        let (width, height) = (192, 64);
        let mut rng = rand::rng();
        let linear: Vec<u8> = (0..width * height).map(|_| rng.random()).collect();

        let mut tiled = vec![0u8; tiled_plane_size(width, height)];
        linear_to_tiled_y(&mut tiled, &linear, width, height);

        let mut back = vec![0u8; width * height];
        tiled_to_linear_y(&mut back, &tiled, width, height);
        assert_eq!(back, linear);
    }

    #[test]
    fn unaligned_dimensions_round_trip() {
        // 80x48 exercises both the row and the column remainder paths.
        let (width, height) = (80, 48);
        let mut rng = rand::rng();
        let linear: Vec<u8> = (0..width * height).map(|_| rng.random()).collect();

        let mut tiled = vec![0u8; tiled_plane_size(width, height)];
        linear_to_tiled_y(&mut tiled, &linear, width, height);

        let mut back = vec![0u8; width * height];
        tiled_to_linear_y(&mut back, &tiled, width, height);
        assert_eq!(back, linear);
    }

    #[test]
    fn cropped_tiling_keeps_interior_region() {
        let (width, height) = (256, 96);
        let (l, t, r, b) = (32, 16, 32, 16);
        let (out_w, out_h) = (width - l - r, height - t - b);
        let mut rng = rand::rng();
        let linear: Vec<u8> = (0..width * height).map(|_| rng.random()).collect();

        let mut tiled = vec![0u8; tiled_plane_size(out_w, out_h)];
        linear_to_tiled_crop(&mut tiled, &linear, width, height, l, t, r, b);

        let mut back = vec![0u8; out_w * out_h];
        tiled_to_linear_y(&mut back, &tiled, out_w, out_h);
        for y in 0..out_h {
            assert_eq!(
                &back[y * out_w..][..out_w],
                &linear[(y + t) * width + l..][..out_w],
                "row {y}"
            );
        }
    }

    #[test]
    fn chroma_round_trip_is_identity() {
        let (width, uv_height) = (128, 32);
        let half = width / 2 * uv_height;
        let mut rng = rand::rng();
        let u: Vec<u8> = (0..half).map(|_| rng.random()).collect();
        let v: Vec<u8> = (0..half).map(|_| rng.random()).collect();

        let mut tiled = vec![0u8; tiled_plane_size(width, uv_height)];
        linear_to_tiled_interleave_crop(&mut tiled, &u, &v, width, uv_height, 0, 0, 0, 0);

        let mut u_back = vec![0u8; half];
        let mut v_back = vec![0u8; half];
        tiled_to_linear_uv_deinterleave(&mut u_back, &mut v_back, &tiled, width, uv_height);
        assert_eq!(u_back, u);
        assert_eq!(v_back, v);
    }

    #[test]
    fn cropped_chroma_round_trip_keeps_interior() {
        let (width, uv_height) = (192, 48);
        let (l, t, r, b) = (16, 8, 16, 8);
        let (out_w, out_h) = (width - l - r, uv_height - t - b);
        let half_stride = width / 2;
        let mut rng = rand::rng();
        let u: Vec<u8> = (0..half_stride * uv_height).map(|_| rng.random()).collect();
        let v: Vec<u8> = (0..half_stride * uv_height).map(|_| rng.random()).collect();

        let mut tiled = vec![0u8; tiled_plane_size(out_w, out_h)];
        linear_to_tiled_interleave_crop(&mut tiled, &u, &v, width, uv_height, l, t, r, b);

        let mut u_back = vec![0u8; out_w / 2 * out_h];
        let mut v_back = vec![0u8; out_w / 2 * out_h];
        tiled_to_linear_uv_deinterleave(&mut u_back, &mut v_back, &tiled, out_w, out_h);
        for y in 0..out_h {
            assert_eq!(
                &u_back[y * out_w / 2..][..out_w / 2],
                &u[(y + t) * half_stride + l / 2..][..out_w / 2],
                "u row {y}"
            );
            assert_eq!(
                &v_back[y * out_w / 2..][..out_w / 2],
                &v[(y + t) * half_stride + l / 2..][..out_w / 2],
                "v row {y}"
            );
        }
    }
}
