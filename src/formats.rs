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
//! Pixel format identifiers and frame geometry.
//!
//! Two external numbering spaces name the same formats: the display (HAL)
//! space used by graphics buffers and the codec (OMX) space used by video
//! components. Both are mapped explicitly; unknown codes fall back to the
//! planar layout, which is what legacy callers relied on.

/// Display-space code for three-plane YUV 4:2:0.
pub const HAL_YCBCR_420_P: u32 = 0x101;
/// Display-space code for two-plane YUV 4:2:0.
pub const HAL_YCBCR_420_SP: u32 = 0x105;
/// Display-space code for the 64x32 tiled two-plane layout.
pub const HAL_YCBCR_420_SP_TILED: u32 = 0x107;
/// Display-space code for 32-bit ARGB.
pub const HAL_ARGB_8888: u32 = 0x108;
/// Display-space code for 16-bit RGB565.
pub const HAL_RGB_565: u32 = 4;

/// Codec-space code for three-plane YUV 4:2:0.
pub const OMX_YUV420_PLANAR: u32 = 19;
/// Codec-space code for two-plane YUV 4:2:0.
pub const OMX_YUV420_SEMI_PLANAR: u32 = 21;
/// Codec-space code for the 64x32 tiled two-plane layout.
pub const OMX_NV12_TILED: u32 = 0x7FC0_0002;
/// Codec-space code for 32-bit ARGB.
pub const OMX_ARGB_8888: u32 = 16;
/// Codec-space code for 16-bit RGB565.
pub const OMX_RGB_565: u32 = 6;

/// Pixel layouts the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// Y plane followed by separate U and V planes, 4:2:0.
    Yuv420Planar,
    /// Y plane followed by one interleaved UV plane, 4:2:0.
    Yuv420SemiPlanar,
    /// Two-plane 4:2:0 in the 64x32 tiled macroblock layout.
    Nv12Tiled,
    /// Packed 16-bit RGB, little endian.
    Rgb565,
    /// Packed 32-bit ARGB, little endian, alpha in the high byte.
    Argb8888,
}

impl ColorFormat {
    /// Looks up a display-space code.
    pub fn from_hal(value: u32) -> Option<ColorFormat> {
        match value {
            HAL_YCBCR_420_P => Some(ColorFormat::Yuv420Planar),
            HAL_YCBCR_420_SP => Some(ColorFormat::Yuv420SemiPlanar),
            HAL_YCBCR_420_SP_TILED => Some(ColorFormat::Nv12Tiled),
            HAL_ARGB_8888 => Some(ColorFormat::Argb8888),
            HAL_RGB_565 => Some(ColorFormat::Rgb565),
            _ => None,
        }
    }

    /// Looks up a display-space code, falling back to the planar layout for
    /// codes the table does not know.
    pub fn from_hal_or_planar(value: u32) -> ColorFormat {
        ColorFormat::from_hal(value).unwrap_or(ColorFormat::Yuv420Planar)
    }

    pub fn to_hal(self) -> u32 {
        match self {
            ColorFormat::Yuv420Planar => HAL_YCBCR_420_P,
            ColorFormat::Yuv420SemiPlanar => HAL_YCBCR_420_SP,
            ColorFormat::Nv12Tiled => HAL_YCBCR_420_SP_TILED,
            ColorFormat::Argb8888 => HAL_ARGB_8888,
            ColorFormat::Rgb565 => HAL_RGB_565,
        }
    }

    /// Looks up a codec-space code.
    pub fn from_omx(value: u32) -> Option<ColorFormat> {
        match value {
            OMX_YUV420_PLANAR => Some(ColorFormat::Yuv420Planar),
            OMX_YUV420_SEMI_PLANAR => Some(ColorFormat::Yuv420SemiPlanar),
            OMX_NV12_TILED => Some(ColorFormat::Nv12Tiled),
            OMX_ARGB_8888 => Some(ColorFormat::Argb8888),
            OMX_RGB_565 => Some(ColorFormat::Rgb565),
            _ => None,
        }
    }

    /// Looks up a codec-space code, falling back to the planar layout for
    /// codes the table does not know.
    pub fn from_omx_or_planar(value: u32) -> ColorFormat {
        ColorFormat::from_omx(value).unwrap_or(ColorFormat::Yuv420Planar)
    }

    pub fn to_omx(self) -> u32 {
        match self {
            ColorFormat::Yuv420Planar => OMX_YUV420_PLANAR,
            ColorFormat::Yuv420SemiPlanar => OMX_YUV420_SEMI_PLANAR,
            ColorFormat::Nv12Tiled => OMX_NV12_TILED,
            ColorFormat::Argb8888 => OMX_ARGB_8888,
            ColorFormat::Rgb565 => OMX_RGB_565,
        }
    }
}

/// Frame geometry on one side of a conversion.
///
/// `width` and `height` describe the full allocated frame; the crop
/// rectangle selects the active region. The software paths operate on full
/// frames, the crop fields are forwarded to hardware backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub width: usize,
    pub height: usize,
    pub crop_left: usize,
    pub crop_top: usize,
    pub crop_width: usize,
    pub crop_height: usize,
    pub color_format: ColorFormat,
    /// Whether the underlying buffer is CPU cacheable. Only meaningful to
    /// hardware backends.
    pub cacheable: bool,
}

impl FormatDescriptor {
    /// A full-frame descriptor with the crop rectangle covering the whole
    /// frame.
    pub fn full_frame(width: usize, height: usize, color_format: ColorFormat) -> FormatDescriptor {
        FormatDescriptor {
            width,
            height,
            crop_left: 0,
            crop_top: 0,
            crop_width: width,
            crop_height: height,
            color_format,
            cacheable: true,
        }
    }
}
