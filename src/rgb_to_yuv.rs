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
//! RGB to YUV 4:2:0 conversion, BT.601 studio range.
//!
//! Fixed-point 8-bit coefficients, no clamping: out-of-range intermediate
//! values wrap the way the original hardware-adjacent code expects. Chroma
//! is point-sampled from the top-left pixel of every 2x2 quad.

#[inline]
fn luma(r: i32, g: i32, b: i32) -> u8 {
    (((66 * r + 129 * g + 25 * b + 128) >> 8) + 16) as u8
}

#[inline]
fn chroma_u(r: i32, g: i32, b: i32) -> u8 {
    (((-38 * r - 74 * g + 112 * b + 128) >> 8) + 128) as u8
}

#[inline]
fn chroma_v(r: i32, g: i32, b: i32) -> u8 {
    (((112 * r - 94 * g - 18 * b + 128) >> 8) + 128) as u8
}

/// Converts little-endian RGB565 to YUV 4:2:0 with separate U and V planes.
///
/// # Panics
///
/// Panics if `rgb` is shorter than `2 * width * height` bytes, `y_dst` is
/// shorter than `width * height`, or either chroma plane is shorter than
/// `width * height / 4`.
pub fn rgb565_to_yuv420_planar(
    y_dst: &mut [u8],
    u_dst: &mut [u8],
    v_dst: &mut [u8],
    rgb: &[u8],
    width: usize,
    height: usize,
) {
    let mut chroma = 0;
    for row in 0..height {
        for col in 0..width {
            let pixel = &rgb[2 * (row * width + col)..];
            let tmp = u16::from_le_bytes([pixel[0], pixel[1]]) as i32;
            let r = (tmp & 0xF800) >> 8;
            let g = (tmp & 0x07E0) >> 3;
            let b = (tmp & 0x001F) << 3;

            y_dst[row * width + col] = luma(r, g, b);
            if row % 2 == 0 && col % 2 == 0 {
                u_dst[chroma] = chroma_u(r, g, b);
                v_dst[chroma] = chroma_v(r, g, b);
                chroma += 1;
            }
        }
    }
}

/// Converts little-endian RGB565 to YUV 4:2:0 with an interleaved UV plane.
///
/// # Panics
///
/// Panics if `rgb` is shorter than `2 * width * height` bytes, `y_dst` is
/// shorter than `width * height`, or `uv_dst` is shorter than
/// `width * height / 2`.
pub fn rgb565_to_yuv420_semi_planar(
    y_dst: &mut [u8],
    uv_dst: &mut [u8],
    rgb: &[u8],
    width: usize,
    height: usize,
) {
    let mut chroma = 0;
    for row in 0..height {
        for col in 0..width {
            let pixel = &rgb[2 * (row * width + col)..];
            let tmp = u16::from_le_bytes([pixel[0], pixel[1]]) as i32;
            let r = ((tmp & 0xF800) >> 11) * 8;
            let g = ((tmp & 0x07E0) >> 5) * 4;
            let b = (tmp & 0x001F) * 8;

            y_dst[row * width + col] = luma(r, g, b);
            if row % 2 == 0 && col % 2 == 0 {
                uv_dst[chroma] = chroma_u(r, g, b);
                uv_dst[chroma + 1] = chroma_v(r, g, b);
                chroma += 2;
            }
        }
    }
}

/// Converts ARGB8888 (little-endian words, alpha in the high byte, ignored)
/// to YUV 4:2:0 with separate U and V planes.
///
/// # Panics
///
/// Panics if `argb` is shorter than `4 * width * height` bytes, `y_dst` is
/// shorter than `width * height`, or either chroma plane is shorter than
/// `width * height / 4`.
pub fn argb8888_to_yuv420_planar(
    y_dst: &mut [u8],
    u_dst: &mut [u8],
    v_dst: &mut [u8],
    argb: &[u8],
    width: usize,
    height: usize,
) {
    let mut chroma = 0;
    for row in 0..height {
        for col in 0..width {
            let pixel = &argb[4 * (row * width + col)..];
            let tmp = u32::from_le_bytes([pixel[0], pixel[1], pixel[2], pixel[3]]);
            let r = ((tmp >> 16) & 0xFF) as i32;
            let g = ((tmp >> 8) & 0xFF) as i32;
            let b = (tmp & 0xFF) as i32;

            y_dst[row * width + col] = luma(r, g, b);
            if row % 2 == 0 && col % 2 == 0 {
                u_dst[chroma] = chroma_u(r, g, b);
                v_dst[chroma] = chroma_v(r, g, b);
                chroma += 1;
            }
        }
    }
}

/// Converts ARGB8888 (little-endian words, alpha in the high byte, ignored)
/// to YUV 4:2:0 with an interleaved UV plane.
///
/// # Panics
///
/// Panics if `argb` is shorter than `4 * width * height` bytes, `y_dst` is
/// shorter than `width * height`, or `uv_dst` is shorter than
/// `width * height / 2`.
pub fn argb8888_to_yuv420_semi_planar(
    y_dst: &mut [u8],
    uv_dst: &mut [u8],
    argb: &[u8],
    width: usize,
    height: usize,
) {
    let mut chroma = 0;
    for row in 0..height {
        for col in 0..width {
            let pixel = &argb[4 * (row * width + col)..];
            let tmp = u32::from_le_bytes([pixel[0], pixel[1], pixel[2], pixel[3]]);
            let r = ((tmp >> 16) & 0xFF) as i32;
            let g = ((tmp >> 8) & 0xFF) as i32;
            let b = (tmp & 0xFF) as i32;

            y_dst[row * width + col] = luma(r, g, b);
            if row % 2 == 0 && col % 2 == 0 {
                uv_dst[chroma] = chroma_u(r, g, b);
                uv_dst[chroma + 1] = chroma_v(r, g, b);
                chroma += 2;
            }
        }
    }
}
