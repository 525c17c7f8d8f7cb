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
mod converter;
mod csc_error;
mod formats;
mod hwconverter;
mod interleave;
mod linear_to_tiled;
mod rgb_to_yuv;
mod tiled;
mod tiled_to_linear;

pub use csc_error::CscError;

pub use formats::ColorFormat;
pub use formats::FormatDescriptor;
pub use formats::HAL_ARGB_8888;
pub use formats::HAL_RGB_565;
pub use formats::HAL_YCBCR_420_P;
pub use formats::HAL_YCBCR_420_SP;
pub use formats::HAL_YCBCR_420_SP_TILED;
pub use formats::OMX_ARGB_8888;
pub use formats::OMX_NV12_TILED;
pub use formats::OMX_RGB_565;
pub use formats::OMX_YUV420_PLANAR;
pub use formats::OMX_YUV420_SEMI_PLANAR;

pub use tiled::tiled_block_offset;
pub use tiled::tiled_pixel_offset;
pub use tiled::tiled_plane_size;
pub use tiled::TILE_HEIGHT;
pub use tiled::TILE_SIZE;
pub use tiled::TILE_WIDTH;

pub use tiled_to_linear::tiled_to_linear_crop;
pub use tiled_to_linear::tiled_to_linear_deinterleave_crop;
pub use tiled_to_linear::tiled_to_linear_uv;
pub use tiled_to_linear::tiled_to_linear_uv_deinterleave;
pub use tiled_to_linear::tiled_to_linear_y;

pub use linear_to_tiled::linear_to_tiled_crop;
pub use linear_to_tiled::linear_to_tiled_interleave_crop;
pub use linear_to_tiled::linear_to_tiled_uv;
pub use linear_to_tiled::linear_to_tiled_y;

pub use interleave::deinterleave_uv;
pub use interleave::interleave_uv;

pub use rgb_to_yuv::argb8888_to_yuv420_planar;
pub use rgb_to_yuv::argb8888_to_yuv420_semi_planar;
pub use rgb_to_yuv::rgb565_to_yuv420_planar;
pub use rgb_to_yuv::rgb565_to_yuv420_semi_planar;

pub use hwconverter::open_default_backend;
pub use hwconverter::HardwareConverter;
pub use hwconverter::HardwareKind;
pub use hwconverter::PlaneAddresses;
pub use hwconverter::MAX_PLANES;

pub use converter::Converter;
pub use converter::Method;
pub use converter::SourceBuffers;
pub use converter::TargetBuffers;
