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
//! Byte-level split/merge helpers for interleaved chroma planes.

/// Splits interleaved `src` into two planes: even-indexed bytes into `dst1`,
/// odd-indexed bytes into `dst2`.
///
/// `len` is the number of interleaved source bytes to consume; `len / 2`
/// bytes are written to each destination.
///
/// # Panics
///
/// Panics if `src` is shorter than `len` or either destination is shorter
/// than `len / 2`.
#[inline]
pub fn deinterleave_uv(dst1: &mut [u8], dst2: &mut [u8], src: &[u8], len: usize) {
    let pairs = len / 2;
    for ((d1, d2), pair) in dst1[..pairs]
        .iter_mut()
        .zip(dst2[..pairs].iter_mut())
        .zip(src[..pairs * 2].chunks_exact(2))
    {
        *d1 = pair[0];
        *d2 = pair[1];
    }
}

/// Merges `src1` and `src2` into interleaved `dst`: `dst[2i] = src1[i]`,
/// `dst[2i + 1] = src2[i]`.
///
/// `len` is the number of bytes consumed from each source; `2 * len` bytes
/// are written to `dst`.
///
/// # Panics
///
/// Panics if either source is shorter than `len` or `dst` is shorter than
/// `2 * len`.
#[inline]
pub fn interleave_uv(dst: &mut [u8], src1: &[u8], src2: &[u8], len: usize) {
    for (pair, (s1, s2)) in dst[..len * 2]
        .chunks_exact_mut(2)
        .zip(src1[..len].iter().zip(src2[..len].iter()))
    {
        pair[0] = *s1;
        pair[1] = *s2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn deinterleave_then_interleave_is_identity() {
        let mut rng = rand::rng();
        let original: Vec<u8> = (0..512).map(|_| rng.random()).collect();

        let mut u = vec![0u8; 256];
        let mut v = vec![0u8; 256];
        deinterleave_uv(&mut u, &mut v, &original, original.len());

        let mut merged = vec![0u8; 512];
        interleave_uv(&mut merged, &u, &v, u.len());
        assert_eq!(merged, original);
    }

    #[test]
    fn interleave_then_deinterleave_is_identity() {
        let mut rng = rand::rng();
        let u: Vec<u8> = (0..300).map(|_| rng.random()).collect();
        let v: Vec<u8> = (0..300).map(|_| rng.random()).collect();

        let mut merged = vec![0u8; 600];
        interleave_uv(&mut merged, &u, &v, u.len());

        let mut u_back = vec![0u8; 300];
        let mut v_back = vec![0u8; 300];
        deinterleave_uv(&mut u_back, &mut v_back, &merged, merged.len());
        assert_eq!(u_back, u);
        assert_eq!(v_back, v);
    }

    #[test]
    fn partial_length_leaves_tail_untouched() {
        let src = [1u8, 2, 3, 4, 5, 6];
        let mut d1 = [0xAAu8; 4];
        let mut d2 = [0xAAu8; 4];
        deinterleave_uv(&mut d1, &mut d2, &src, 4);
        assert_eq!(d1, [1, 3, 0xAA, 0xAA]);
        assert_eq!(d2, [2, 4, 0xAA, 0xAA]);
    }
}
