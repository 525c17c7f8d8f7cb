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
//! Tiled to linear plane conversion.
//!
//! The tiled source is always addressed with the full image dimensions; the
//! crop margins select which region lands in the linear destination. The
//! destination is written compactly: row length equals the cropped width and
//! no byte outside the cropped region is touched.

use crate::interleave::deinterleave_uv;
use crate::tiled::{tiled_block_offset, tiled_pixel_offset, TILE_HEIGHT, TILE_WIDTH};

/// Walks the cropped region row by row and hands every contiguous tiled run
/// to `emit` as `(linear_offset, tiled_offset, run_length)`.
///
/// Three regimes by effective cropped width, matching the hardware driver:
/// at least four blocks wide uses the closed block form, at least one block
/// wide uses the per-pixel formula per 64-column chunk, anything narrower
/// goes two pixels at a time.
fn for_each_tiled_run(
    width: usize,
    height: usize,
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
    mut emit: impl FnMut(usize, usize, usize),
) {
    let out_width = width - left - right;
    let chunked = out_width >= TILE_WIDTH;
    let closed_form = out_width >= 4 * TILE_WIDTH;

    for y in top..height - bottom {
        let mut linear = out_width * (y - top);
        let mut x = left;
        while x < width - right {
            let run = if chunked {
                (TILE_WIDTH - (x % TILE_WIDTH)).min(width - right - x)
            } else {
                2
            };
            let tiled = if closed_form {
                tiled_block_offset(width, height, x / TILE_WIDTH, y / TILE_HEIGHT)
                    + TILE_WIDTH * (y % TILE_HEIGHT)
                    + (x % TILE_WIDTH)
            } else {
                tiled_pixel_offset(width, height, x, y) + (x & 0x3)
            };
            emit(linear, tiled, run);
            linear += run;
            x += run;
        }
    }
}

/// Converts a tiled plane to linear, cropping `left`/`top`/`right`/`bottom`
/// samples. Works for a luma plane or an interleaved chroma plane kept
/// interleaved (`height` is the plane height: full for luma, halved for
/// chroma).
///
/// # Panics
///
/// Panics if `tiled` does not cover the tiled plane or `linear` is shorter
/// than `(width - left - right) * (height - top - bottom)`.
pub fn tiled_to_linear_crop(
    linear: &mut [u8],
    tiled: &[u8],
    width: usize,
    height: usize,
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
) {
    for_each_tiled_run(width, height, left, top, right, bottom, |dst, src, run| {
        linear[dst..dst + run].copy_from_slice(&tiled[src..src + run]);
    });
}

/// Converts a tiled interleaved chroma plane to two linear planes, splitting
/// even bytes into `u_dst` and odd bytes into `v_dst`. `uv_height` is the
/// chroma plane height (half the image height); crop margins are in luma
/// sample units.
///
/// # Panics
///
/// Panics if `uv_src` does not cover the tiled plane or either destination
/// is shorter than `(width - left - right) * (uv_height - top - bottom) / 2`.
pub fn tiled_to_linear_deinterleave_crop(
    u_dst: &mut [u8],
    v_dst: &mut [u8],
    uv_src: &[u8],
    width: usize,
    uv_height: usize,
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
) {
    for_each_tiled_run(width, uv_height, left, top, right, bottom, |dst, src, run| {
        let half = dst / 2;
        deinterleave_uv(
            &mut u_dst[half..],
            &mut v_dst[half..],
            &uv_src[src..src + run],
            run,
        );
    });
}

/// Converts a full tiled luma plane to linear.
pub fn tiled_to_linear_y(y_dst: &mut [u8], y_src: &[u8], width: usize, height: usize) {
    tiled_to_linear_crop(y_dst, y_src, width, height, 0, 0, 0, 0);
}

/// Converts a full tiled interleaved chroma plane to linear, staying
/// interleaved. `uv_height` is half the image height.
pub fn tiled_to_linear_uv(uv_dst: &mut [u8], uv_src: &[u8], width: usize, uv_height: usize) {
    tiled_to_linear_crop(uv_dst, uv_src, width, uv_height, 0, 0, 0, 0);
}

/// Converts a full tiled interleaved chroma plane into separate linear U and
/// V planes. `uv_height` is half the image height.
pub fn tiled_to_linear_uv_deinterleave(
    u_dst: &mut [u8],
    v_dst: &mut [u8],
    uv_src: &[u8],
    width: usize,
    uv_height: usize,
) {
    tiled_to_linear_deinterleave_crop(u_dst, v_dst, uv_src, width, uv_height, 0, 0, 0, 0);
}
