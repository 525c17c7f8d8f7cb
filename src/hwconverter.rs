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
//! Hardware converter backend interface.
//!
//! Two generations of blitter exist: the older FIMC-style devices accept
//! their formats and plane addresses only at conversion time, the newer
//! Gscaler-style devices are programmed as soon as the session learns them.
//! The dispatcher keys that timing off [`HardwareKind`].

use crate::csc_error::CscError;
use crate::formats::FormatDescriptor;

/// Maximum planes a hardware buffer can carry (Y, U/UV, V).
pub const MAX_PLANES: usize = 3;

/// Device addresses of the planes of one frame. Unused entries are zero.
pub type PlaneAddresses = [usize; MAX_PLANES];

/// Programming model of a hardware backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareKind {
    /// Formats and planes are programmed at conversion time.
    Fimc,
    /// Formats are programmed as soon as they are set on the session.
    Gscaler,
}

/// A 2D blitter that can perform the conversion in hardware.
pub trait HardwareConverter {
    fn kind(&self) -> HardwareKind;
    fn set_src_format(&mut self, desc: &FormatDescriptor) -> Result<(), CscError>;
    fn set_dst_format(&mut self, desc: &FormatDescriptor) -> Result<(), CscError>;
    fn set_src_planes(&mut self, planes: PlaneAddresses) -> Result<(), CscError>;
    fn set_dst_planes(&mut self, planes: PlaneAddresses) -> Result<(), CscError>;
    fn convert(&mut self) -> Result<(), CscError>;
}

/// Looks for a hardware converter device.
///
/// No backend is available on this build; sessions that merely prefer
/// hardware fall back to the software routines.
pub fn open_default_backend() -> Option<Box<dyn HardwareConverter>> {
    None
}
