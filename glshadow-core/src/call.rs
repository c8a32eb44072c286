//! Mutation calls as values.
//!
//! State groups describe their apply and diff output as a list of [`Call`]s.
//! A call can be issued to a [`Driver`], shadowed into a
//! [`ContextState`](crate::context::ContextState), or rendered as a statement.

use std::fmt;

use crate::driver::{require, Driver, Entry};
use crate::gl::*;
use crate::token::{BoolToken, ClampToken, Token};

/// One invocation of a mutation entry point, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Enable(GLenum),
    Disable(GLenum),
    Enablei(GLenum, GLuint),
    Disablei(GLenum, GLuint),
    EnableIndexedExt(GLenum, GLuint),
    DisableIndexedExt(GLenum, GLuint),
    ClampColor(GLenum, GLenum),
    DepthFunc(GLenum),
    ClearDepth(GLdouble),
    ClearDepthf(GLfloat),
    DepthMask(bool),
    ClearStencil(GLint),
    StencilFunc(GLenum, GLint, GLuint),
    StencilFuncSeparate(GLenum, GLenum, GLint, GLuint),
    StencilMask(GLuint),
    StencilMaskSeparate(GLenum, GLuint),
    StencilOp(GLenum, GLenum, GLenum),
    StencilOpSeparate(GLenum, GLenum, GLenum, GLenum),
    CullFace(GLenum),
    FrontFace(GLenum),
    PolygonMode(GLenum, GLenum),
    PolygonOffset(GLfloat, GLfloat),
    ClipPlane(GLenum, [GLdouble; 4]),
    MatrixMode(GLenum),
    Hint(GLenum, GLenum),
    ListBase(GLuint),
    ClearAccum([GLfloat; 4]),
    /// `x, y, width, height`
    Scissor([GLint; 4]),
    ScissorArrayv(GLuint, Vec<[GLint; 4]>),
    ScissorIndexed(GLuint, [GLint; 4]),
    ScissorIndexedv(GLuint, [GLint; 4]),
    Viewport([GLint; 4]),
    ViewportArrayv(GLuint, Vec<[GLfloat; 4]>),
    ViewportIndexedf(GLuint, [GLfloat; 4]),
    ViewportIndexedfv(GLuint, [GLfloat; 4]),
    DepthRange(GLdouble, GLdouble),
    DepthRangef(GLfloat, GLfloat),
    DepthRangeArrayv(GLuint, Vec<[GLdouble; 2]>),
    DepthRangeIndexed(GLuint, GLdouble, GLdouble),
    LineWidth(GLfloat),
    LineStipple(GLint, GLushort),
    SampleCoverage(GLfloat, bool),
    MinSampleShading(GLfloat),
}

impl Call {
    /// `glEnable(cap)` or `glDisable(cap)`.
    pub fn capability(cap: GLenum, enable: bool) -> Call {
        if enable {
            Call::Enable(cap)
        } else {
            Call::Disable(cap)
        }
    }

    /// `glEnablei(cap, index)` or `glDisablei(cap, index)`.
    pub fn capability_indexed(cap: GLenum, index: GLuint, enable: bool) -> Call {
        if enable {
            Call::Enablei(cap, index)
        } else {
            Call::Disablei(cap, index)
        }
    }

    /// `glEnableIndexedEXT(cap, index)` or `glDisableIndexedEXT(cap, index)`.
    pub fn capability_ext(cap: GLenum, index: GLuint, enable: bool) -> Call {
        if enable {
            Call::EnableIndexedExt(cap, index)
        } else {
            Call::DisableIndexedExt(cap, index)
        }
    }

    /// The entry point this call goes through.
    pub fn entry(&self) -> Entry {
        match self {
            Call::Enable(..) => Entry::Enable,
            Call::Disable(..) => Entry::Disable,
            Call::Enablei(..) => Entry::Enablei,
            Call::Disablei(..) => Entry::Disablei,
            Call::EnableIndexedExt(..) => Entry::EnableIndexedExt,
            Call::DisableIndexedExt(..) => Entry::DisableIndexedExt,
            Call::ClampColor(..) => Entry::ClampColor,
            Call::DepthFunc(..) => Entry::DepthFunc,
            Call::ClearDepth(..) => Entry::ClearDepth,
            Call::ClearDepthf(..) => Entry::ClearDepthf,
            Call::DepthMask(..) => Entry::DepthMask,
            Call::ClearStencil(..) => Entry::ClearStencil,
            Call::StencilFunc(..) => Entry::StencilFunc,
            Call::StencilFuncSeparate(..) => Entry::StencilFuncSeparate,
            Call::StencilMask(..) => Entry::StencilMask,
            Call::StencilMaskSeparate(..) => Entry::StencilMaskSeparate,
            Call::StencilOp(..) => Entry::StencilOp,
            Call::StencilOpSeparate(..) => Entry::StencilOpSeparate,
            Call::CullFace(..) => Entry::CullFace,
            Call::FrontFace(..) => Entry::FrontFace,
            Call::PolygonMode(..) => Entry::PolygonMode,
            Call::PolygonOffset(..) => Entry::PolygonOffset,
            Call::ClipPlane(..) => Entry::ClipPlane,
            Call::MatrixMode(..) => Entry::MatrixMode,
            Call::Hint(..) => Entry::Hint,
            Call::ListBase(..) => Entry::ListBase,
            Call::ClearAccum(..) => Entry::ClearAccum,
            Call::Scissor(..) => Entry::Scissor,
            Call::ScissorArrayv(..) => Entry::ScissorArrayv,
            Call::ScissorIndexed(..) => Entry::ScissorIndexed,
            Call::ScissorIndexedv(..) => Entry::ScissorIndexedv,
            Call::Viewport(..) => Entry::Viewport,
            Call::ViewportArrayv(..) => Entry::ViewportArrayv,
            Call::ViewportIndexedf(..) => Entry::ViewportIndexedf,
            Call::ViewportIndexedfv(..) => Entry::ViewportIndexedfv,
            Call::DepthRange(..) => Entry::DepthRange,
            Call::DepthRangef(..) => Entry::DepthRangef,
            Call::DepthRangeArrayv(..) => Entry::DepthRangeArrayv,
            Call::DepthRangeIndexed(..) => Entry::DepthRangeIndexed,
            Call::LineWidth(..) => Entry::LineWidth,
            Call::LineStipple(..) => Entry::LineStipple,
            Call::SampleCoverage(..) => Entry::SampleCoverage,
            Call::MinSampleShading(..) => Entry::MinSampleShading,
        }
    }

    /// Invoke the call on `driver`.
    ///
    /// Panics if the driver lacks the entry point.
    pub fn issue<D: Driver + ?Sized>(&self, driver: &mut D) {
        require(driver, self.entry());
        match *self {
            Call::Enable(cap) => driver.enable(cap),
            Call::Disable(cap) => driver.disable(cap),
            Call::Enablei(cap, i) => driver.enablei(cap, i),
            Call::Disablei(cap, i) => driver.disablei(cap, i),
            Call::EnableIndexedExt(cap, i) => driver.enable_indexed_ext(cap, i),
            Call::DisableIndexedExt(cap, i) => driver.disable_indexed_ext(cap, i),
            Call::ClampColor(target, clamp) => driver.clamp_color(target, clamp),
            Call::DepthFunc(func) => driver.depth_func(func),
            Call::ClearDepth(depth) => driver.clear_depth(depth),
            Call::ClearDepthf(depth) => driver.clear_depthf(depth),
            Call::DepthMask(flag) => driver.depth_mask(flag),
            Call::ClearStencil(s) => driver.clear_stencil(s),
            Call::StencilFunc(func, reference, mask) => driver.stencil_func(func, reference, mask),
            Call::StencilFuncSeparate(face, func, reference, mask) => {
                driver.stencil_func_separate(face, func, reference, mask)
            }
            Call::StencilMask(mask) => driver.stencil_mask(mask),
            Call::StencilMaskSeparate(face, mask) => driver.stencil_mask_separate(face, mask),
            Call::StencilOp(fail, zfail, zpass) => driver.stencil_op(fail, zfail, zpass),
            Call::StencilOpSeparate(face, fail, zfail, zpass) => {
                driver.stencil_op_separate(face, fail, zfail, zpass)
            }
            Call::CullFace(mode) => driver.cull_face(mode),
            Call::FrontFace(mode) => driver.front_face(mode),
            Call::PolygonMode(face, mode) => driver.polygon_mode(face, mode),
            Call::PolygonOffset(factor, units) => driver.polygon_offset(factor, units),
            Call::ClipPlane(plane, ref equation) => driver.clip_plane(plane, equation),
            Call::MatrixMode(mode) => driver.matrix_mode(mode),
            Call::Hint(target, mode) => driver.hint(target, mode),
            Call::ListBase(base) => driver.list_base(base),
            Call::ClearAccum([r, g, b, a]) => driver.clear_accum(r, g, b, a),
            Call::Scissor([x, y, w, h]) => driver.scissor(x, y, w, h),
            Call::ScissorArrayv(first, ref boxes) => driver.scissor_arrayv(first, boxes),
            Call::ScissorIndexed(i, [x, y, w, h]) => driver.scissor_indexed(i, x, y, w, h),
            Call::ScissorIndexedv(i, ref v) => driver.scissor_indexedv(i, v),
            Call::Viewport([x, y, w, h]) => driver.viewport(x, y, w, h),
            Call::ViewportArrayv(first, ref viewports) => driver.viewport_arrayv(first, viewports),
            Call::ViewportIndexedf(i, [x, y, w, h]) => driver.viewport_indexedf(i, x, y, w, h),
            Call::ViewportIndexedfv(i, ref v) => driver.viewport_indexedfv(i, v),
            Call::DepthRange(near, far) => driver.depth_range(near, far),
            Call::DepthRangef(near, far) => driver.depth_rangef(near, far),
            Call::DepthRangeArrayv(first, ref ranges) => driver.depth_range_arrayv(first, ranges),
            Call::DepthRangeIndexed(i, near, far) => driver.depth_range_indexed(i, near, far),
            Call::LineWidth(width) => driver.line_width(width),
            Call::LineStipple(factor, pattern) => driver.line_stipple(factor, pattern),
            Call::SampleCoverage(value, invert) => driver.sample_coverage(value, invert),
            Call::MinSampleShading(value) => driver.min_sample_shading(value),
        }
    }
}

/// Issue every call in order.
pub fn issue_all<D: Driver + ?Sized>(driver: &mut D, calls: &[Call]) {
    for call in calls {
        call.issue(driver);
    }
}

/// Formats a slice as `{a,b,c}`.
struct Braced<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for Braced<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", v)?;
        }
        f.write_str("}")
    }
}

fn write_arrays<T: fmt::Display, const N: usize>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    first: GLuint,
    values: &[[T; N]],
) -> fmt::Result {
    write!(f, "{}({},{}", name, first, values.len())?;
    for v in values {
        write!(f, ",{}", Braced(v))?;
    }
    f.write_str(")")
}

/// Plane tokens print as `GL_CLIP_PLANEi` rather than the aliased clip distance name.
struct Plane(GLenum);

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.checked_sub(GL_CLIP_PLANE0) {
            Some(i) if (i as usize) < MAX_CLIP_PLANES => write!(f, "GL_CLIP_PLANE{}", i),
            _ => write!(f, "{}", Token(self.0)),
        }
    }
}

/// Renders the call without the trailing `;`, e.g. `glDepthFunc(GL_LESS)`.
impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.entry().name();
        match self {
            Call::Enable(cap) | Call::Disable(cap) => write!(f, "{}({})", name, Token(*cap)),
            Call::Enablei(cap, i)
            | Call::Disablei(cap, i)
            | Call::EnableIndexedExt(cap, i)
            | Call::DisableIndexedExt(cap, i) => write!(f, "{}({},{})", name, Token(*cap), i),
            Call::ClampColor(target, clamp) => {
                write!(f, "{}({},{})", name, Token(*target), ClampToken(*clamp))
            }
            Call::DepthFunc(v) | Call::CullFace(v) | Call::FrontFace(v) | Call::MatrixMode(v) => {
                write!(f, "{}({})", name, Token(*v))
            }
            Call::ClearDepth(v) => write!(f, "{}({})", name, v),
            Call::ClearDepthf(v) => write!(f, "{}({})", name, v),
            Call::DepthMask(v) => write!(f, "{}({})", name, BoolToken(*v)),
            Call::ClearStencil(v) => write!(f, "{}({})", name, v),
            Call::StencilFunc(func, reference, mask) => {
                write!(f, "{}({},{},0x{:x})", name, Token(*func), reference, mask)
            }
            Call::StencilFuncSeparate(face, func, reference, mask) => write!(
                f,
                "{}({},{},{},0x{:x})",
                name,
                Token(*face),
                Token(*func),
                reference,
                mask
            ),
            Call::StencilMask(mask) => write!(f, "{}(0x{:x})", name, mask),
            Call::StencilMaskSeparate(face, mask) => {
                write!(f, "{}({},0x{:x})", name, Token(*face), mask)
            }
            Call::StencilOp(fail, zfail, zpass) => write!(
                f,
                "{}({},{},{})",
                name,
                Token(*fail),
                Token(*zfail),
                Token(*zpass)
            ),
            Call::StencilOpSeparate(face, fail, zfail, zpass) => write!(
                f,
                "{}({},{},{},{})",
                name,
                Token(*face),
                Token(*fail),
                Token(*zfail),
                Token(*zpass)
            ),
            Call::PolygonMode(face, mode) | Call::Hint(face, mode) => {
                write!(f, "{}({},{})", name, Token(*face), Token(*mode))
            }
            Call::PolygonOffset(factor, units) => write!(f, "{}({},{})", name, factor, units),
            Call::ClipPlane(plane, equation) => {
                write!(f, "{}({},{})", name, Plane(*plane), Braced(equation))
            }
            Call::ListBase(base) => write!(f, "{}({})", name, base),
            Call::ClearAccum([r, g, b, a]) => write!(f, "{}({},{},{},{})", name, r, g, b, a),
            Call::Scissor([x, y, w, h]) | Call::Viewport([x, y, w, h]) => {
                write!(f, "{}({},{},{},{})", name, x, y, w, h)
            }
            Call::ScissorIndexed(i, [x, y, w, h]) | Call::ScissorIndexedv(i, [x, y, w, h]) => {
                write!(f, "{}({},{},{},{},{})", name, i, x, y, w, h)
            }
            Call::ViewportIndexedf(i, [x, y, w, h]) | Call::ViewportIndexedfv(i, [x, y, w, h]) => {
                write!(f, "{}({},{},{},{},{})", name, i, x, y, w, h)
            }
            Call::ScissorArrayv(first, v) => write_arrays(f, name, *first, v),
            Call::ViewportArrayv(first, v) => write_arrays(f, name, *first, v),
            Call::DepthRangeArrayv(first, v) => write_arrays(f, name, *first, v),
            Call::DepthRange(near, far) => write!(f, "{}({},{})", name, near, far),
            Call::DepthRangef(near, far) => write!(f, "{}({},{})", name, near, far),
            Call::DepthRangeIndexed(i, near, far) => write!(f, "{}({},{},{})", name, i, near, far),
            Call::LineWidth(v) | Call::MinSampleShading(v) => write!(f, "{}({})", name, v),
            Call::LineStipple(factor, pattern) => {
                write!(f, "{}({},0x{:x})", name, factor, pattern)
            }
            Call::SampleCoverage(value, invert) => {
                write!(f, "{}({},{})", name, value, BoolToken(*invert))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulated::SimulatedContext;

    #[test]
    fn renders_statements() {
        assert_eq!(Call::Enable(GL_DEPTH_TEST).to_string(), "glEnable(GL_DEPTH_TEST)");
        assert_eq!(Call::Disablei(GL_BLEND, 3).to_string(), "glDisablei(GL_BLEND,3)");
        assert_eq!(
            Call::StencilFuncSeparate(GL_FRONT, GL_ALWAYS, 0, !0).to_string(),
            "glStencilFuncSeparate(GL_FRONT,GL_ALWAYS,0,0xffffffff)"
        );
        assert_eq!(Call::ClearDepth(1.0).to_string(), "glClearDepth(1)");
        assert_eq!(Call::ClearDepthf(0.5).to_string(), "glClearDepthf(0.5)");
        assert_eq!(Call::DepthRangef(0.0, 1.0).to_string(), "glDepthRangef(0,1)");
        assert_eq!(
            Call::ViewportIndexedfv(3, [0.0, 0.0, 8.0, 8.0]).to_string(),
            "glViewportIndexedfv(3,0,0,8,8)"
        );
        assert_eq!(Call::DepthMask(true).to_string(), "glDepthMask(GL_TRUE)");
        assert_eq!(
            Call::ClampColor(GL_CLAMP_VERTEX_COLOR, GL_TRUE).to_string(),
            "glClampColor(GL_CLAMP_VERTEX_COLOR,GL_TRUE)"
        );
        assert_eq!(Call::LineStipple(1, 0xffff).to_string(), "glLineStipple(1,0xffff)");
        assert_eq!(
            Call::ClipPlane(GL_CLIP_PLANE0 + 2, [0.0, 1.0, 0.5, -2.0]).to_string(),
            "glClipPlane(GL_CLIP_PLANE2,{0,1,0.5,-2})"
        );
        assert_eq!(
            Call::DepthRangeArrayv(1, vec![[0.0, 1.0], [0.25, 0.75]]).to_string(),
            "glDepthRangeArrayv(1,2,{0,1},{0.25,0.75})"
        );
    }

    #[test]
    fn capability_helpers() {
        assert_eq!(Call::capability(GL_FOG, true), Call::Enable(GL_FOG));
        assert_eq!(Call::capability(GL_FOG, false), Call::Disable(GL_FOG));
        assert_eq!(
            Call::capability_indexed(GL_BLEND, 1, true),
            Call::Enablei(GL_BLEND, 1)
        );
        assert_eq!(
            Call::capability_ext(GL_TEXTURE_2D, 4, false),
            Call::DisableIndexedExt(GL_TEXTURE_2D, 4)
        );
    }

    #[test]
    fn issue_reaches_driver() {
        let mut ctx = SimulatedContext::new();
        Call::DepthFunc(GL_GEQUAL).issue(&mut ctx);
        Call::ScissorIndexed(2, [1, 2, 3, 4]).issue(&mut ctx);
        let state = ctx.state();
        assert_eq!(state.depth.func, GL_GEQUAL);
        assert_eq!(state.scissor.boxes[2], [1, 2, 3, 4]);
        assert_eq!(
            ctx.take_log(),
            vec![
                Call::DepthFunc(GL_GEQUAL),
                Call::ScissorIndexed(2, [1, 2, 3, 4])
            ]
        );
    }

    #[test]
    #[should_panic(expected = "glLineWidth")]
    fn issue_requires_entry() {
        let mut ctx = SimulatedContext::new().without(Entry::LineWidth);
        Call::LineWidth(2.0).issue(&mut ctx);
    }
}
