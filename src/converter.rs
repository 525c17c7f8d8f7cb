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
//! Conversion session: format negotiation and routing between the software
//! routines and an optional hardware backend.

use log::{debug, error};

use crate::csc_error::CscError;
use crate::formats::{ColorFormat, FormatDescriptor};
use crate::hwconverter::{
    open_default_backend, HardwareConverter, HardwareKind, PlaneAddresses, MAX_PLANES,
};
use crate::interleave::{deinterleave_uv, interleave_uv};
use crate::rgb_to_yuv::{argb8888_to_yuv420_planar, argb8888_to_yuv420_semi_planar};
use crate::tiled_to_linear::{
    tiled_to_linear_uv, tiled_to_linear_uv_deinterleave, tiled_to_linear_y,
};

/// How a session performs its conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// CPU routines only.
    Software,
    /// Hardware backend only; conversion fails if none is available.
    Hardware,
    /// Hardware when a backend exists, otherwise silently software.
    PreferHardware,
}

/// Read-only planes of the source frame. Unused planes stay `None`.
#[derive(Clone, Copy, Default)]
pub struct SourceBuffers<'a> {
    planes: [Option<&'a [u8]>; MAX_PLANES],
    backing_fd: Option<i32>,
}

impl<'a> SourceBuffers<'a> {
    /// A packed single-plane frame (RGB formats).
    pub fn packed(data: &'a [u8]) -> SourceBuffers<'a> {
        SourceBuffers {
            planes: [Some(data), None, None],
            backing_fd: None,
        }
    }

    /// A two-plane frame: Y plus interleaved UV.
    pub fn two_plane(y: &'a [u8], uv: &'a [u8]) -> SourceBuffers<'a> {
        SourceBuffers {
            planes: [Some(y), Some(uv), None],
            backing_fd: None,
        }
    }

    /// A three-plane frame: Y, U, V.
    pub fn three_plane(y: &'a [u8], u: &'a [u8], v: &'a [u8]) -> SourceBuffers<'a> {
        SourceBuffers {
            planes: [Some(y), Some(u), Some(v)],
            backing_fd: None,
        }
    }

    /// Attaches the dma-buf descriptor backing these planes. Opaque to the
    /// software routines; backends that import buffers by descriptor read
    /// it through [`SourceBuffers::backing_fd`].
    pub fn with_backing_fd(mut self, fd: i32) -> SourceBuffers<'a> {
        self.backing_fd = Some(fd);
        self
    }

    pub fn backing_fd(&self) -> Option<i32> {
        self.backing_fd
    }
}

/// Writable planes of the destination frame. Unused planes stay `None`.
#[derive(Default)]
pub struct TargetBuffers<'a> {
    planes: [Option<&'a mut [u8]>; MAX_PLANES],
    backing_fd: Option<i32>,
}

impl<'a> TargetBuffers<'a> {
    /// A packed single-plane frame (RGB formats).
    pub fn packed(data: &'a mut [u8]) -> TargetBuffers<'a> {
        TargetBuffers {
            planes: [Some(data), None, None],
            backing_fd: None,
        }
    }

    /// A two-plane frame: Y plus interleaved UV.
    pub fn two_plane(y: &'a mut [u8], uv: &'a mut [u8]) -> TargetBuffers<'a> {
        TargetBuffers {
            planes: [Some(y), Some(uv), None],
            backing_fd: None,
        }
    }

    /// A three-plane frame: Y, U, V.
    pub fn three_plane(y: &'a mut [u8], u: &'a mut [u8], v: &'a mut [u8]) -> TargetBuffers<'a> {
        TargetBuffers {
            planes: [Some(y), Some(u), Some(v)],
            backing_fd: None,
        }
    }

    /// Attaches the dma-buf descriptor backing these planes. Opaque to the
    /// software routines; backends that import buffers by descriptor read
    /// it through [`TargetBuffers::backing_fd`].
    pub fn with_backing_fd(mut self, fd: i32) -> TargetBuffers<'a> {
        self.backing_fd = Some(fd);
        self
    }

    pub fn backing_fd(&self) -> Option<i32> {
        self.backing_fd
    }
}

fn require<'b>(plane: Option<&'b [u8]>) -> Result<&'b [u8], CscError> {
    plane.ok_or(CscError::NotInitialized)
}

fn require_mut<'b>(plane: &'b mut Option<&mut [u8]>) -> Result<&'b mut [u8], CscError> {
    plane.as_deref_mut().ok_or(CscError::NotInitialized)
}

/// A conversion session.
///
/// Formats and buffers are set independently; [`Converter::convert`] checks
/// that everything needed is present and routes to the right routine. The
/// software routines always work on full frames; the crop rectangles in the
/// descriptors are forwarded to hardware backends only.
pub struct Converter<'a> {
    method: Method,
    backend: Option<Box<dyn HardwareConverter>>,
    src_format: Option<FormatDescriptor>,
    dst_format: Option<FormatDescriptor>,
    src: Option<SourceBuffers<'a>>,
    dst: Option<TargetBuffers<'a>>,
}

impl<'a> Converter<'a> {
    /// Opens a session. For the hardware methods this looks for a backend
    /// device; a session that merely prefers hardware downgrades itself to
    /// software when none is found, while a hardware-only session fails
    /// outright with [`CscError::OutOfResources`] and no handle is handed
    /// out.
    pub fn new(method: Method) -> Result<Converter<'a>, CscError> {
        let backend = match method {
            Method::Software => None,
            Method::Hardware | Method::PreferHardware => open_default_backend(),
        };
        let method = match method {
            Method::PreferHardware if backend.is_none() => {
                debug!("no hardware converter found, using software routines");
                Method::Software
            }
            Method::Hardware if backend.is_none() => {
                error!("hardware-only session requested but no backend is available");
                return Err(CscError::OutOfResources);
            }
            other => other,
        };
        Ok(Converter {
            method,
            backend,
            src_format: None,
            dst_format: None,
            src: None,
            dst: None,
        })
    }

    /// Opens a session around an explicit hardware backend.
    pub fn with_backend(method: Method, backend: Box<dyn HardwareConverter>) -> Converter<'a> {
        Converter {
            method,
            backend: Some(backend),
            src_format: None,
            dst_format: None,
            src: None,
            dst: None,
        }
    }

    /// The method the session will actually use, after any downgrade.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Changes the conversion method, probing for a backend when one is
    /// needed and not yet open.
    pub fn set_method(&mut self, method: Method) {
        if method != Method::Software && self.backend.is_none() {
            self.backend = open_default_backend();
        }
        self.method = if method == Method::PreferHardware && self.backend.is_none() {
            debug!("no hardware converter found, using software routines");
            Method::Software
        } else {
            method
        };
    }

    pub fn src_format(&self) -> Option<FormatDescriptor> {
        self.src_format
    }

    pub fn dst_format(&self) -> Option<FormatDescriptor> {
        self.dst_format
    }

    /// Sets the source frame geometry. Backends that are programmed eagerly
    /// learn the format immediately.
    pub fn set_src_format(&mut self, desc: FormatDescriptor) -> Result<(), CscError> {
        self.src_format = Some(desc);
        if let Some(backend) = self.backend.as_mut() {
            if backend.kind() == HardwareKind::Gscaler {
                backend.set_src_format(&desc)?;
            }
        }
        Ok(())
    }

    /// Sets the destination frame geometry. Backends that are programmed
    /// eagerly learn the format immediately.
    pub fn set_dst_format(&mut self, desc: FormatDescriptor) -> Result<(), CscError> {
        self.dst_format = Some(desc);
        if let Some(backend) = self.backend.as_mut() {
            if backend.kind() == HardwareKind::Gscaler {
                backend.set_dst_format(&desc)?;
            }
        }
        Ok(())
    }

    /// Sets the source planes. Backends that are programmed eagerly learn
    /// the plane addresses immediately.
    pub fn set_src_buffer(&mut self, buffers: SourceBuffers<'a>) -> Result<(), CscError> {
        let addrs = plane_addresses_of(&buffers);
        self.src = Some(buffers);
        if let Some(backend) = self.backend.as_mut() {
            if backend.kind() == HardwareKind::Gscaler {
                backend.set_src_planes(addrs)?;
            }
        }
        Ok(())
    }

    /// Sets the destination planes. Backends that are programmed eagerly
    /// learn the plane addresses immediately.
    pub fn set_dst_buffer(&mut self, buffers: TargetBuffers<'a>) -> Result<(), CscError> {
        let addrs = plane_addresses_of_mut(&buffers);
        self.dst = Some(buffers);
        if let Some(backend) = self.backend.as_mut() {
            if backend.kind() == HardwareKind::Gscaler {
                backend.set_dst_planes(addrs)?;
            }
        }
        Ok(())
    }

    /// Runs the conversion with whatever method the session settled on.
    pub fn convert(&mut self) -> Result<(), CscError> {
        let src_format = self.src_format.ok_or(CscError::NotInitialized)?;
        let dst_format = self.dst_format.ok_or(CscError::NotInitialized)?;
        if self.src.is_none() || self.dst.is_none() {
            return Err(CscError::NotInitialized);
        }
        match self.method {
            Method::Software => self.convert_sw(src_format, dst_format),
            Method::Hardware | Method::PreferHardware => {
                self.convert_hw(src_format, dst_format)
            }
        }
    }

    fn convert_sw(
        &mut self,
        src_format: FormatDescriptor,
        dst_format: FormatDescriptor,
    ) -> Result<(), CscError> {
        let width = src_format.width;
        let height = src_format.height;
        let src = self.src.ok_or(CscError::NotInitialized)?.planes;
        let dst = self.dst.as_mut().ok_or(CscError::NotInitialized)?;
        let [d0, d1, d2] = &mut dst.planes;

        match (src_format.color_format, dst_format.color_format) {
            (ColorFormat::Nv12Tiled, ColorFormat::Yuv420Planar) => {
                tiled_to_linear_y(require_mut(d0)?, require(src[0])?, width, height);
                tiled_to_linear_uv_deinterleave(
                    require_mut(d1)?,
                    require_mut(d2)?,
                    require(src[1])?,
                    width,
                    height / 2,
                );
            }
            (ColorFormat::Nv12Tiled, ColorFormat::Yuv420SemiPlanar) => {
                tiled_to_linear_y(require_mut(d0)?, require(src[0])?, width, height);
                tiled_to_linear_uv(require_mut(d1)?, require(src[1])?, width, height / 2);
            }
            (ColorFormat::Yuv420Planar, ColorFormat::Yuv420Planar) => {
                let size = width * height;
                require_mut(d0)?[..size].copy_from_slice(&require(src[0])?[..size]);
                require_mut(d1)?[..size / 4].copy_from_slice(&require(src[1])?[..size / 4]);
                require_mut(d2)?[..size / 4].copy_from_slice(&require(src[2])?[..size / 4]);
            }
            (ColorFormat::Yuv420Planar, ColorFormat::Yuv420SemiPlanar) => {
                let size = width * height;
                require_mut(d0)?[..size].copy_from_slice(&require(src[0])?[..size]);
                interleave_uv(
                    require_mut(d1)?,
                    require(src[1])?,
                    require(src[2])?,
                    size / 4,
                );
            }
            (ColorFormat::Yuv420SemiPlanar, ColorFormat::Yuv420Planar) => {
                let size = width * height;
                require_mut(d0)?[..size].copy_from_slice(&require(src[0])?[..size]);
                deinterleave_uv(
                    require_mut(d1)?,
                    require_mut(d2)?,
                    require(src[1])?,
                    size / 2,
                );
            }
            (ColorFormat::Yuv420SemiPlanar, ColorFormat::Yuv420SemiPlanar) => {
                let size = width * height;
                require_mut(d0)?[..size].copy_from_slice(&require(src[0])?[..size]);
                require_mut(d1)?[..size / 2].copy_from_slice(&require(src[1])?[..size / 2]);
            }
            (ColorFormat::Argb8888, ColorFormat::Yuv420Planar) => {
                argb8888_to_yuv420_planar(
                    require_mut(d0)?,
                    require_mut(d1)?,
                    require_mut(d2)?,
                    require(src[0])?,
                    width,
                    height,
                );
            }
            (ColorFormat::Argb8888, ColorFormat::Yuv420SemiPlanar) => {
                argb8888_to_yuv420_semi_planar(
                    require_mut(d0)?,
                    require_mut(d1)?,
                    require(src[0])?,
                    width,
                    height,
                );
            }
            (from, to) => {
                error!("no software routine for {from:?} -> {to:?}");
                return Err(CscError::UnsupportedFormat);
            }
        }
        Ok(())
    }

    fn convert_hw(
        &mut self,
        src_format: FormatDescriptor,
        dst_format: FormatDescriptor,
    ) -> Result<(), CscError> {
        let backend = match self.backend.as_mut() {
            Some(backend) => backend,
            None => {
                error!("hardware conversion requested but no backend is open");
                return Err(CscError::OutOfResources);
            }
        };

        // Late-programmed devices learn formats and addresses only now; the
        // eagerly programmed kind already has both from the setters.
        if backend.kind() == HardwareKind::Fimc {
            backend.set_src_format(&src_format)?;
            backend.set_dst_format(&dst_format)?;
            let src_planes = plane_addresses_of(&self.src.ok_or(CscError::NotInitialized)?);
            let dst_planes =
                plane_addresses_of_mut(self.dst.as_ref().ok_or(CscError::NotInitialized)?);
            backend.set_src_planes(src_planes)?;
            backend.set_dst_planes(dst_planes)?;
        }

        if let Err(e) = backend.convert() {
            error!("hardware conversion failed: {e}");
        }
        // The hardware path has never produced frames this crate could hand
        // back; callers are expected to retry in software.
        Err(CscError::NotImplemented)
    }
}

fn plane_addresses_of(buffers: &SourceBuffers<'_>) -> PlaneAddresses {
    let mut addrs = [0usize; MAX_PLANES];
    for (addr, plane) in addrs.iter_mut().zip(buffers.planes.iter()) {
        if let Some(data) = plane {
            *addr = data.as_ptr() as usize;
        }
    }
    addrs
}

fn plane_addresses_of_mut(buffers: &TargetBuffers<'_>) -> PlaneAddresses {
    let mut addrs = [0usize; MAX_PLANES];
    for (addr, plane) in addrs.iter_mut().zip(buffers.planes.iter()) {
        if let Some(data) = plane {
            *addr = data.as_ptr() as usize;
        }
    }
    addrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::linear_to_tiled::linear_to_tiled_interleave_crop;
    use crate::tiled::tiled_plane_size;
    use rand::Rng;

    const W: usize = 64;
    const H: usize = 32;

    fn random_bytes(len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random()).collect()
    }

    fn session<'a>(src_fmt: ColorFormat, dst_fmt: ColorFormat) -> Converter<'a> {
        let mut conv = Converter::new(Method::Software).unwrap();
        conv.set_src_format(FormatDescriptor::full_frame(W, H, src_fmt))
            .unwrap();
        conv.set_dst_format(FormatDescriptor::full_frame(W, H, dst_fmt))
            .unwrap();
        conv
    }

    #[test]
    fn prefer_hardware_downgrades_to_software() {
        let src_y = random_bytes(W * H);
        let src_uv = random_bytes(W * H / 2);
        let mut dst_y = vec![0u8; W * H];
        let mut dst_uv = vec![0u8; W * H / 2];

        // The downgraded session must still convert, in software.
        let mut conv = Converter::new(Method::PreferHardware).unwrap();
        assert_eq!(conv.method(), Method::Software);
        conv.set_src_format(FormatDescriptor::full_frame(W, H, ColorFormat::Yuv420SemiPlanar))
            .unwrap();
        conv.set_dst_format(FormatDescriptor::full_frame(W, H, ColorFormat::Yuv420SemiPlanar))
            .unwrap();
        conv.set_src_buffer(SourceBuffers::two_plane(&src_y, &src_uv)).unwrap();
        conv.set_dst_buffer(TargetBuffers::two_plane(&mut dst_y, &mut dst_uv)).unwrap();
        conv.convert().unwrap();
        assert_eq!(dst_y, src_y);
        assert_eq!(dst_uv, src_uv);
    }

    #[test]
    fn hardware_only_without_backend_fails_at_open() {
        // No handle comes back at all; the failure is not deferred to
        // convert time.
        assert_eq!(
            Converter::new(Method::Hardware).err(),
            Some(CscError::OutOfResources)
        );
    }

    #[test]
    fn switching_to_hardware_without_backend_fails_at_convert() {
        let src_y = vec![0u8; W * H];
        let src_uv = vec![0u8; W * H / 2];
        let mut dst_y = vec![0u8; W * H];
        let mut dst_uv = vec![0u8; W * H / 2];

        let mut conv = session(ColorFormat::Yuv420SemiPlanar, ColorFormat::Yuv420SemiPlanar);
        conv.set_method(Method::Hardware);
        assert_eq!(conv.method(), Method::Hardware);
        conv.set_src_buffer(SourceBuffers::two_plane(&src_y, &src_uv)).unwrap();
        conv.set_dst_buffer(TargetBuffers::two_plane(&mut dst_y, &mut dst_uv)).unwrap();
        assert_eq!(conv.convert(), Err(CscError::OutOfResources));
    }

    #[test]
    fn missing_buffers_are_reported() {
        let mut conv = session(ColorFormat::Yuv420Planar, ColorFormat::Yuv420Planar);
        assert_eq!(conv.convert(), Err(CscError::NotInitialized));
    }

    #[test]
    fn unsupported_pair_is_rejected() {
        let mut conv = session(ColorFormat::Rgb565, ColorFormat::Yuv420Planar);
        let src = vec![0u8; 2 * W * H];
        let mut y = vec![0u8; W * H];
        let mut u = vec![0u8; W * H / 4];
        let mut v = vec![0u8; W * H / 4];
        conv.set_src_buffer(SourceBuffers::packed(&src)).unwrap();
        conv.set_dst_buffer(TargetBuffers::three_plane(&mut y, &mut u, &mut v)).unwrap();
        assert_eq!(conv.convert(), Err(CscError::UnsupportedFormat));
    }

    #[test]
    fn planar_bypass_copies_all_planes() {
        let mut conv = session(ColorFormat::Yuv420Planar, ColorFormat::Yuv420Planar);
        let src_y = random_bytes(W * H);
        let src_u = random_bytes(W * H / 4);
        let src_v = random_bytes(W * H / 4);
        let mut dst_y = vec![0u8; W * H];
        let mut dst_u = vec![0u8; W * H / 4];
        let mut dst_v = vec![0u8; W * H / 4];
        conv.set_src_buffer(SourceBuffers::three_plane(&src_y, &src_u, &src_v)).unwrap();
        conv.set_dst_buffer(TargetBuffers::three_plane(&mut dst_y, &mut dst_u, &mut dst_v)).unwrap();
        conv.convert().unwrap();
        assert_eq!(dst_y, src_y);
        assert_eq!(dst_u, src_u);
        assert_eq!(dst_v, src_v);
    }

    #[test]
    fn planar_to_semi_planar_interleaves_chroma() {
        let mut conv = session(ColorFormat::Yuv420Planar, ColorFormat::Yuv420SemiPlanar);
        let src_y = random_bytes(W * H);
        let src_u = random_bytes(W * H / 4);
        let src_v = random_bytes(W * H / 4);
        let mut dst_y = vec![0u8; W * H];
        let mut dst_uv = vec![0u8; W * H / 2];
        conv.set_src_buffer(SourceBuffers::three_plane(&src_y, &src_u, &src_v)).unwrap();
        conv.set_dst_buffer(TargetBuffers::two_plane(&mut dst_y, &mut dst_uv)).unwrap();
        conv.convert().unwrap();
        assert_eq!(dst_y, src_y);
        for i in 0..W * H / 4 {
            assert_eq!(dst_uv[2 * i], src_u[i]);
            assert_eq!(dst_uv[2 * i + 1], src_v[i]);
        }
    }

    #[test]
    fn semi_planar_to_planar_splits_chroma() {
        let mut conv = session(ColorFormat::Yuv420SemiPlanar, ColorFormat::Yuv420Planar);
        let src_y = random_bytes(W * H);
        let src_uv = random_bytes(W * H / 2);
        let mut dst_y = vec![0u8; W * H];
        let mut dst_u = vec![0u8; W * H / 4];
        let mut dst_v = vec![0u8; W * H / 4];
        conv.set_src_buffer(SourceBuffers::two_plane(&src_y, &src_uv)).unwrap();
        conv.set_dst_buffer(TargetBuffers::three_plane(&mut dst_y, &mut dst_u, &mut dst_v)).unwrap();
        conv.convert().unwrap();
        assert_eq!(dst_y, src_y);
        for i in 0..W * H / 4 {
            assert_eq!(dst_u[i], src_uv[2 * i]);
            assert_eq!(dst_v[i], src_uv[2 * i + 1]);
        }
    }

    #[test]
    fn tiled_to_planar_recovers_linear_frame() {
        let mut conv = session(ColorFormat::Nv12Tiled, ColorFormat::Yuv420Planar);
        let lin_y = random_bytes(W * H);
        let lin_u = random_bytes(W * H / 4);
        let lin_v = random_bytes(W * H / 4);

        let mut tiled_y = vec![0u8; tiled_plane_size(W, H)];
        crate::linear_to_tiled::linear_to_tiled_y(&mut tiled_y, &lin_y, W, H);
        let mut tiled_uv = vec![0u8; tiled_plane_size(W, H / 2)];
        linear_to_tiled_interleave_crop(&mut tiled_uv, &lin_u, &lin_v, W, H / 2, 0, 0, 0, 0);

        let mut dst_y = vec![0u8; W * H];
        let mut dst_u = vec![0u8; W * H / 4];
        let mut dst_v = vec![0u8; W * H / 4];
        conv.set_src_buffer(SourceBuffers::two_plane(&tiled_y, &tiled_uv)).unwrap();
        conv.set_dst_buffer(TargetBuffers::three_plane(&mut dst_y, &mut dst_u, &mut dst_v)).unwrap();
        conv.convert().unwrap();
        assert_eq!(dst_y, lin_y);
        assert_eq!(dst_u, lin_u);
        assert_eq!(dst_v, lin_v);
    }

    #[test]
    fn argb_to_semi_planar_goes_through_color_math() {
        let mut conv = session(ColorFormat::Argb8888, ColorFormat::Yuv420SemiPlanar);
        let src = 0xFFFF_FFFFu32.to_le_bytes().repeat(W * H);
        let mut dst_y = vec![0u8; W * H];
        let mut dst_uv = vec![0u8; W * H / 2];
        conv.set_src_buffer(SourceBuffers::packed(&src)).unwrap();
        conv.set_dst_buffer(TargetBuffers::two_plane(&mut dst_y, &mut dst_uv)).unwrap();
        conv.convert().unwrap();
        assert!(dst_y.iter().all(|&s| s == 235));
        assert!(dst_uv.iter().all(|&s| s == 128));
    }

    struct MockBackend {
        kind: HardwareKind,
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl HardwareConverter for MockBackend {
        fn kind(&self) -> HardwareKind {
            self.kind
        }
        fn set_src_format(&mut self, _: &FormatDescriptor) -> Result<(), CscError> {
            self.calls.borrow_mut().push("src_format");
            Ok(())
        }
        fn set_dst_format(&mut self, _: &FormatDescriptor) -> Result<(), CscError> {
            self.calls.borrow_mut().push("dst_format");
            Ok(())
        }
        fn set_src_planes(&mut self, _: PlaneAddresses) -> Result<(), CscError> {
            self.calls.borrow_mut().push("src_planes");
            Ok(())
        }
        fn set_dst_planes(&mut self, _: PlaneAddresses) -> Result<(), CscError> {
            self.calls.borrow_mut().push("dst_planes");
            Ok(())
        }
        fn convert(&mut self) -> Result<(), CscError> {
            self.calls.borrow_mut().push("convert");
            Ok(())
        }
    }

    fn hw_session<'a>(
        kind: HardwareKind,
    ) -> (Converter<'a>, Rc<RefCell<Vec<&'static str>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let backend = Box::new(MockBackend {
            kind,
            calls: Rc::clone(&calls),
        });
        let mut conv = Converter::with_backend(Method::Hardware, backend);
        conv.set_src_format(FormatDescriptor::full_frame(W, H, ColorFormat::Nv12Tiled))
            .unwrap();
        conv.set_dst_format(FormatDescriptor::full_frame(W, H, ColorFormat::Yuv420SemiPlanar))
            .unwrap();
        (conv, calls)
    }

    #[test]
    fn fimc_backend_is_programmed_at_convert_time() {
        let src_y = vec![0u8; tiled_plane_size(W, H)];
        let src_uv = vec![0u8; tiled_plane_size(W, H / 2)];
        let mut dst_y = vec![0u8; W * H];
        let mut dst_uv = vec![0u8; W * H / 2];

        let (mut conv, calls) = hw_session(HardwareKind::Fimc);
        assert!(calls.borrow().is_empty());
        conv.set_src_buffer(SourceBuffers::two_plane(&src_y, &src_uv)).unwrap();
        conv.set_dst_buffer(TargetBuffers::two_plane(&mut dst_y, &mut dst_uv)).unwrap();
        // Nothing is programmed until the conversion itself runs.
        assert!(calls.borrow().is_empty());
        assert_eq!(conv.convert(), Err(CscError::NotImplemented));
        assert_eq!(
            *calls.borrow(),
            ["src_format", "dst_format", "src_planes", "dst_planes", "convert"]
        );
    }

    #[test]
    fn gscaler_backend_is_programmed_at_set_time() {
        let src_y = vec![0u8; tiled_plane_size(W, H)];
        let src_uv = vec![0u8; tiled_plane_size(W, H / 2)];
        let mut dst_y = vec![0u8; W * H];
        let mut dst_uv = vec![0u8; W * H / 2];

        let (mut conv, calls) = hw_session(HardwareKind::Gscaler);
        assert_eq!(*calls.borrow(), ["src_format", "dst_format"]);
        conv.set_src_buffer(SourceBuffers::two_plane(&src_y, &src_uv)).unwrap();
        conv.set_dst_buffer(TargetBuffers::two_plane(&mut dst_y, &mut dst_uv)).unwrap();
        // Addresses landed in the device as the buffers were set.
        assert_eq!(
            *calls.borrow(),
            ["src_format", "dst_format", "src_planes", "dst_planes"]
        );
        assert_eq!(conv.convert(), Err(CscError::NotImplemented));
        assert_eq!(
            *calls.borrow(),
            ["src_format", "dst_format", "src_planes", "dst_planes", "convert"]
        );
    }
}
