//! The boundary to the live graphics context.
//!
//! A [`Driver`] exposes one query and one mutation entry point per tracked
//! state item. Not every driver provides every entry point; [`Driver::has_entry`]
//! reports which ones are present, and the helpers in this module assert
//! presence before calling through.

use std::fmt;

use crate::gl::*;

macro_rules! entries {
    ($($variant:ident => $name:literal,)*) => {
        /// A driver entry point, named after the native function it wraps.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(non_camel_case_types)]
        pub enum Entry {
            $($variant,)*
        }

        impl Entry {
            pub const ALL: &'static [Entry] = &[$(Entry::$variant,)*];

            /// The native function name, e.g. `glDepthFunc`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Entry::$variant => $name,)*
                }
            }
        }
    };
}

entries! {
    IsEnabled => "glIsEnabled",
    IsEnabledi => "glIsEnabledi",
    IsEnabledIndexedExt => "glIsEnabledIndexedEXT",
    GetBooleanv => "glGetBooleanv",
    GetIntegerv => "glGetIntegerv",
    GetFloatv => "glGetFloatv",
    GetDoublev => "glGetDoublev",
    GetIntegeri_v => "glGetIntegeri_v",
    GetFloati_v => "glGetFloati_v",
    GetDoublei_v => "glGetDoublei_v",
    GetClipPlane => "glGetClipPlane",
    Enable => "glEnable",
    Disable => "glDisable",
    Enablei => "glEnablei",
    Disablei => "glDisablei",
    EnableIndexedExt => "glEnableIndexedEXT",
    DisableIndexedExt => "glDisableIndexedEXT",
    ClampColor => "glClampColor",
    DepthFunc => "glDepthFunc",
    ClearDepth => "glClearDepth",
    ClearDepthf => "glClearDepthf",
    DepthMask => "glDepthMask",
    ClearStencil => "glClearStencil",
    StencilFunc => "glStencilFunc",
    StencilFuncSeparate => "glStencilFuncSeparate",
    StencilMask => "glStencilMask",
    StencilMaskSeparate => "glStencilMaskSeparate",
    StencilOp => "glStencilOp",
    StencilOpSeparate => "glStencilOpSeparate",
    CullFace => "glCullFace",
    FrontFace => "glFrontFace",
    PolygonMode => "glPolygonMode",
    PolygonOffset => "glPolygonOffset",
    ClipPlane => "glClipPlane",
    MatrixMode => "glMatrixMode",
    Hint => "glHint",
    ListBase => "glListBase",
    ClearAccum => "glClearAccum",
    Scissor => "glScissor",
    ScissorArrayv => "glScissorArrayv",
    ScissorIndexed => "glScissorIndexed",
    ScissorIndexedv => "glScissorIndexedv",
    Viewport => "glViewport",
    ViewportArrayv => "glViewportArrayv",
    ViewportIndexedf => "glViewportIndexedf",
    ViewportIndexedfv => "glViewportIndexedfv",
    DepthRange => "glDepthRange",
    DepthRangef => "glDepthRangef",
    DepthRangeArrayv => "glDepthRangeArrayv",
    DepthRangeIndexed => "glDepthRangeIndexed",
    LineWidth => "glLineWidth",
    LineStipple => "glLineStipple",
    SampleCoverage => "glSampleCoverage",
    MinSampleShading => "glMinSampleShading",
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Query and mutation entry points of a live context.
///
/// Methods mirror the native functions one to one. Queries write into the
/// provided slice and leave it untouched for names they do not know.
pub trait Driver {
    /// Whether the entry point is available. Callers must not invoke an
    /// entry point for which this returns `false`.
    fn has_entry(&self, _entry: Entry) -> bool {
        true
    }

    fn is_enabled(&mut self, cap: GLenum) -> bool;
    fn is_enabledi(&mut self, cap: GLenum, index: GLuint) -> bool;
    fn is_enabled_indexed_ext(&mut self, cap: GLenum, index: GLuint) -> bool;
    fn get_booleanv(&mut self, pname: GLenum, data: &mut [bool]);
    fn get_integerv(&mut self, pname: GLenum, data: &mut [GLint]);
    fn get_floatv(&mut self, pname: GLenum, data: &mut [GLfloat]);
    fn get_doublev(&mut self, pname: GLenum, data: &mut [GLdouble]);
    fn get_integeri_v(&mut self, pname: GLenum, index: GLuint, data: &mut [GLint]);
    fn get_floati_v(&mut self, pname: GLenum, index: GLuint, data: &mut [GLfloat]);
    fn get_doublei_v(&mut self, pname: GLenum, index: GLuint, data: &mut [GLdouble]);
    fn get_clip_plane(&mut self, plane: GLenum, equation: &mut [GLdouble; 4]);

    fn enable(&mut self, cap: GLenum);
    fn disable(&mut self, cap: GLenum);
    fn enablei(&mut self, cap: GLenum, index: GLuint);
    fn disablei(&mut self, cap: GLenum, index: GLuint);
    fn enable_indexed_ext(&mut self, cap: GLenum, index: GLuint);
    fn disable_indexed_ext(&mut self, cap: GLenum, index: GLuint);
    fn clamp_color(&mut self, target: GLenum, clamp: GLenum);

    fn depth_func(&mut self, func: GLenum);
    fn clear_depth(&mut self, depth: GLdouble);
    fn clear_depthf(&mut self, depth: GLfloat);
    fn depth_mask(&mut self, flag: bool);

    fn clear_stencil(&mut self, s: GLint);
    fn stencil_func(&mut self, func: GLenum, reference: GLint, mask: GLuint);
    fn stencil_func_separate(
        &mut self,
        face: GLenum,
        func: GLenum,
        reference: GLint,
        mask: GLuint,
    );
    fn stencil_mask(&mut self, mask: GLuint);
    fn stencil_mask_separate(&mut self, face: GLenum, mask: GLuint);
    fn stencil_op(&mut self, fail: GLenum, zfail: GLenum, zpass: GLenum);
    fn stencil_op_separate(
        &mut self,
        face: GLenum,
        fail: GLenum,
        zfail: GLenum,
        zpass: GLenum,
    );

    fn cull_face(&mut self, mode: GLenum);
    fn front_face(&mut self, mode: GLenum);
    fn polygon_mode(&mut self, face: GLenum, mode: GLenum);
    fn polygon_offset(&mut self, factor: GLfloat, units: GLfloat);

    fn clip_plane(&mut self, plane: GLenum, equation: &[GLdouble; 4]);
    fn matrix_mode(&mut self, mode: GLenum);
    fn hint(&mut self, target: GLenum, mode: GLenum);
    fn list_base(&mut self, base: GLuint);
    fn clear_accum(&mut self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);

    fn scissor(&mut self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn scissor_arrayv(&mut self, first: GLuint, boxes: &[[GLint; 4]]);
    fn scissor_indexed(
        &mut self,
        index: GLuint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    );
    fn scissor_indexedv(&mut self, index: GLuint, v: &[GLint; 4]);

    fn viewport(&mut self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn viewport_arrayv(&mut self, first: GLuint, viewports: &[[GLfloat; 4]]);
    fn viewport_indexedf(&mut self, index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat, h: GLfloat);
    fn viewport_indexedfv(&mut self, index: GLuint, v: &[GLfloat; 4]);
    fn depth_range(&mut self, near: GLdouble, far: GLdouble);
    fn depth_rangef(&mut self, near: GLfloat, far: GLfloat);
    fn depth_range_arrayv(&mut self, first: GLuint, ranges: &[[GLdouble; 2]]);
    fn depth_range_indexed(&mut self, index: GLuint, near: GLdouble, far: GLdouble);

    fn line_width(&mut self, width: GLfloat);
    fn line_stipple(&mut self, factor: GLint, pattern: GLushort);
    fn sample_coverage(&mut self, value: GLfloat, invert: bool);
    fn min_sample_shading(&mut self, value: GLfloat);
}

/// Panic unless `driver` provides `entry`.
///
/// A missing entry point is an integration bug, not a runtime condition.
#[track_caller]
pub fn require<D: Driver + ?Sized>(driver: &D, entry: Entry) {
    assert!(
        driver.has_entry(entry),
        "driver is missing required entry point {}",
        entry
    );
}

/// Enable or disable a capability.
pub fn set_enable<D: Driver + ?Sized>(driver: &mut D, cap: GLenum, enable: bool) {
    if enable {
        require(driver, Entry::Enable);
        driver.enable(cap);
    } else {
        require(driver, Entry::Disable);
        driver.disable(cap);
    }
}

pub fn is_enabled<D: Driver + ?Sized>(driver: &mut D, cap: GLenum) -> bool {
    require(driver, Entry::IsEnabled);
    driver.is_enabled(cap)
}

pub fn is_enabledi<D: Driver + ?Sized>(driver: &mut D, cap: GLenum, index: GLuint) -> bool {
    require(driver, Entry::IsEnabledi);
    driver.is_enabledi(cap, index)
}

pub fn is_enabled_indexed_ext<D: Driver + ?Sized>(
    driver: &mut D,
    cap: GLenum,
    index: GLuint,
) -> bool {
    require(driver, Entry::IsEnabledIndexedExt);
    driver.is_enabled_indexed_ext(cap, index)
}

pub fn get_boolean<D: Driver + ?Sized>(driver: &mut D, pname: GLenum) -> bool {
    require(driver, Entry::GetBooleanv);
    let mut data = [false];
    driver.get_booleanv(pname, &mut data);
    data[0]
}

pub fn get_integer<D: Driver + ?Sized>(driver: &mut D, pname: GLenum) -> GLint {
    get_integers::<D, 1>(driver, pname)[0]
}

pub fn get_integers<D: Driver + ?Sized, const N: usize>(
    driver: &mut D,
    pname: GLenum,
) -> [GLint; N] {
    require(driver, Entry::GetIntegerv);
    let mut data = [0; N];
    driver.get_integerv(pname, &mut data);
    data
}

/// Query an enum-valued parameter.
pub fn get_enum<D: Driver + ?Sized>(driver: &mut D, pname: GLenum) -> GLenum {
    get_integer(driver, pname) as GLenum
}

pub fn get_float<D: Driver + ?Sized>(driver: &mut D, pname: GLenum) -> GLfloat {
    get_floats::<D, 1>(driver, pname)[0]
}

pub fn get_floats<D: Driver + ?Sized, const N: usize>(
    driver: &mut D,
    pname: GLenum,
) -> [GLfloat; N] {
    require(driver, Entry::GetFloatv);
    let mut data = [0.0; N];
    driver.get_floatv(pname, &mut data);
    data
}

pub fn get_double<D: Driver + ?Sized>(driver: &mut D, pname: GLenum) -> GLdouble {
    require(driver, Entry::GetDoublev);
    let mut data = [0.0];
    driver.get_doublev(pname, &mut data);
    data[0]
}

pub fn get_integers_i<D: Driver + ?Sized, const N: usize>(
    driver: &mut D,
    pname: GLenum,
    index: GLuint,
) -> [GLint; N] {
    require(driver, Entry::GetIntegeri_v);
    let mut data = [0; N];
    driver.get_integeri_v(pname, index, &mut data);
    data
}

pub fn get_floats_i<D: Driver + ?Sized, const N: usize>(
    driver: &mut D,
    pname: GLenum,
    index: GLuint,
) -> [GLfloat; N] {
    require(driver, Entry::GetFloati_v);
    let mut data = [0.0; N];
    driver.get_floati_v(pname, index, &mut data);
    data
}

pub fn get_doubles_i<D: Driver + ?Sized, const N: usize>(
    driver: &mut D,
    pname: GLenum,
    index: GLuint,
) -> [GLdouble; N] {
    require(driver, Entry::GetDoublei_v);
    let mut data = [0.0; N];
    driver.get_doublei_v(pname, index, &mut data);
    data
}

pub fn get_clip_plane<D: Driver + ?Sized>(driver: &mut D, plane: GLenum) -> [GLdouble; 4] {
    require(driver, Entry::GetClipPlane);
    let mut equation = [0.0; 4];
    driver.get_clip_plane(plane, &mut equation);
    equation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulated::SimulatedContext;

    #[test]
    fn entry_names() {
        assert_eq!(Entry::DepthFunc.to_string(), "glDepthFunc");
        assert_eq!(Entry::IsEnabledIndexedExt.to_string(), "glIsEnabledIndexedEXT");
        assert_eq!(Entry::GetDoublei_v.to_string(), "glGetDoublei_v");
    }

    #[test]
    fn set_enable_toggles() {
        let mut ctx = SimulatedContext::new();
        set_enable(&mut ctx, GL_BLEND, true);
        assert!(is_enabled(&mut ctx, GL_BLEND));
        set_enable(&mut ctx, GL_BLEND, false);
        assert!(!is_enabled(&mut ctx, GL_BLEND));
    }

    #[test]
    fn stencil_mask_reads_back_unsigned() {
        let mut ctx = SimulatedContext::new();
        assert_eq!(get_integer(&mut ctx, GL_STENCIL_VALUE_MASK) as GLuint, !0);
    }

    #[test]
    #[should_panic(expected = "driver is missing required entry point glIsEnabled")]
    fn missing_query_entry_panics() {
        let mut ctx = SimulatedContext::new().without(Entry::IsEnabled);
        is_enabled(&mut ctx, GL_DEPTH_TEST);
    }

    #[test]
    #[should_panic(expected = "glDisable")]
    fn missing_mutation_entry_panics() {
        let mut ctx = SimulatedContext::new().without(Entry::Disable);
        set_enable(&mut ctx, GL_DITHER, false);
    }
}
