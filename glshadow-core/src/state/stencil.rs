use serde::{Deserialize, Serialize};

use super::faces;
use crate::call::Call;
use crate::driver::{get_enum, get_integer};
use crate::gl::*;

/// Arguments of `glStencilFuncSeparate` for one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StencilFunc {
    pub func: GLenum,
    #[serde(rename = "ref")]
    pub reference: GLint,
    pub value_mask: GLuint,
}

impl Default for StencilFunc {
    fn default() -> Self {
        StencilFunc {
            func: GL_ALWAYS,
            reference: 0,
            value_mask: !0,
        }
    }
}

/// Arguments of `glStencilOpSeparate` for one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StencilOp {
    pub fail: GLenum,
    pub zfail: GLenum,
    pub zpass: GLenum,
}

impl Default for StencilOp {
    fn default() -> Self {
        StencilOp {
            fail: GL_KEEP,
            zfail: GL_KEEP,
            zpass: GL_KEEP,
        }
    }
}

fn capture_func<D: crate::driver::Driver + ?Sized>(
    dt: &mut D,
    func: GLenum,
    reference: GLenum,
    value_mask: GLenum,
) -> StencilFunc {
    StencilFunc {
        func: get_enum(dt, func),
        reference: get_integer(dt, reference),
        value_mask: get_integer(dt, value_mask) as GLuint,
    }
}

fn capture_op<D: crate::driver::Driver + ?Sized>(
    dt: &mut D,
    fail: GLenum,
    zfail: GLenum,
    zpass: GLenum,
) -> StencilOp {
    StencilOp {
        fail: get_enum(dt, fail),
        zfail: get_enum(dt, zfail),
        zpass: get_enum(dt, zpass),
    }
}

state_group! {
    /// Stencil buffer state, `GL_STENCIL_BUFFER_BIT`, with separate front
    /// and back face settings.
    pub struct Stencil("stencil", STENCIL_BUFFER) {
        cap test: bool = false => { GL_STENCIL_TEST };
        param clear: GLint = 0 => {
            get |dt| get_integer(dt, GL_STENCIL_CLEAR_VALUE),
            set |v| Call::ClearStencil(v)
        };
        param front_func: StencilFunc = StencilFunc::default() => {
            get |dt| capture_func(dt, GL_STENCIL_FUNC, GL_STENCIL_REF, GL_STENCIL_VALUE_MASK),
            set |v| Call::StencilFuncSeparate(GL_FRONT, v.func, v.reference, v.value_mask)
        };
        param front_write_mask: GLuint = !0 => {
            get |dt| get_integer(dt, GL_STENCIL_WRITEMASK) as GLuint,
            set |v| Call::StencilMaskSeparate(GL_FRONT, v)
        };
        param front_op: StencilOp = StencilOp::default() => {
            get |dt| capture_op(
                dt,
                GL_STENCIL_FAIL,
                GL_STENCIL_PASS_DEPTH_FAIL,
                GL_STENCIL_PASS_DEPTH_PASS
            ),
            set |v| Call::StencilOpSeparate(GL_FRONT, v.fail, v.zfail, v.zpass)
        };
        param back_func: StencilFunc = StencilFunc::default() => {
            get |dt| capture_func(
                dt,
                GL_STENCIL_BACK_FUNC,
                GL_STENCIL_BACK_REF,
                GL_STENCIL_BACK_VALUE_MASK
            ),
            set |v| Call::StencilFuncSeparate(GL_BACK, v.func, v.reference, v.value_mask)
        };
        param back_write_mask: GLuint = !0 => {
            get |dt| get_integer(dt, GL_STENCIL_BACK_WRITEMASK) as GLuint,
            set |v| Call::StencilMaskSeparate(GL_BACK, v)
        };
        param back_op: StencilOp = StencilOp::default() => {
            get |dt| capture_op(
                dt,
                GL_STENCIL_BACK_FAIL,
                GL_STENCIL_BACK_PASS_DEPTH_FAIL,
                GL_STENCIL_BACK_PASS_DEPTH_PASS
            ),
            set |v| Call::StencilOpSeparate(GL_BACK, v.fail, v.zfail, v.zpass)
        };
    }
}

impl Stencil {
    pub fn gl_clear_stencil(&mut self, s: GLint) {
        self.clear = s;
    }

    /// Sets both faces.
    pub fn gl_stencil_func(&mut self, func: GLenum, reference: GLint, mask: GLuint) {
        self.gl_stencil_func_separate(GL_FRONT_AND_BACK, func, reference, mask);
    }

    /// Panics if `face` is not `GL_FRONT`, `GL_BACK` or `GL_FRONT_AND_BACK`.
    pub fn gl_stencil_func_separate(
        &mut self,
        face: GLenum,
        func: GLenum,
        reference: GLint,
        mask: GLuint,
    ) {
        let value = StencilFunc {
            func,
            reference,
            value_mask: mask,
        };
        let (front, back) = faces(face);
        if front {
            self.front_func = value;
        }
        if back {
            self.back_func = value;
        }
    }

    /// Sets both faces.
    pub fn gl_stencil_mask(&mut self, mask: GLuint) {
        self.gl_stencil_mask_separate(GL_FRONT_AND_BACK, mask);
    }

    pub fn gl_stencil_mask_separate(&mut self, face: GLenum, mask: GLuint) {
        let (front, back) = faces(face);
        if front {
            self.front_write_mask = mask;
        }
        if back {
            self.back_write_mask = mask;
        }
    }

    /// Sets both faces.
    pub fn gl_stencil_op(&mut self, fail: GLenum, zfail: GLenum, zpass: GLenum) {
        self.gl_stencil_op_separate(GL_FRONT_AND_BACK, fail, zfail, zpass);
    }

    pub fn gl_stencil_op_separate(
        &mut self,
        face: GLenum,
        fail: GLenum,
        zfail: GLenum,
        zpass: GLenum,
    ) {
        let value = StencilOp { fail, zfail, zpass };
        let (front, back) = faces(face);
        if front {
            self.front_op = value;
        }
        if back {
            self.back_op = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulated::SimulatedContext;
    use crate::state::StateGroup;

    #[test]
    fn defaults_serialize_both_faces() {
        assert_eq!(
            Stencil::default().to_statements("\n"),
            "glDisable(GL_STENCIL_TEST);\n\
             glClearStencil(0);\n\
             glStencilFuncSeparate(GL_FRONT,GL_ALWAYS,0,0xffffffff);\n\
             glStencilMaskSeparate(GL_FRONT,0xffffffff);\n\
             glStencilOpSeparate(GL_FRONT,GL_KEEP,GL_KEEP,GL_KEEP);\n\
             glStencilFuncSeparate(GL_BACK,GL_ALWAYS,0,0xffffffff);\n\
             glStencilMaskSeparate(GL_BACK,0xffffffff);\n\
             glStencilOpSeparate(GL_BACK,GL_KEEP,GL_KEEP,GL_KEEP);\n"
        );
    }

    #[test]
    fn face_fan_out() {
        let mut s = Stencil::default();
        s.gl_stencil_func(GL_EQUAL, 3, 0xff);
        assert_eq!(s.front_func, s.back_func);
        assert_eq!(s.front_func.func, GL_EQUAL);

        s.gl_stencil_op_separate(GL_BACK, GL_ZERO, GL_INCR_WRAP, GL_REPLACE);
        assert_eq!(s.front_op, StencilOp::default());
        assert_eq!(
            s.back_op,
            StencilOp {
                fail: GL_ZERO,
                zfail: GL_INCR_WRAP,
                zpass: GL_REPLACE
            }
        );

        s.gl_stencil_mask_separate(GL_FRONT, 0x0f);
        assert_eq!(s.front_write_mask, 0x0f);
        assert_eq!(s.back_write_mask, !0);
    }

    #[test]
    #[should_panic(expected = "invalid face selector")]
    fn invalid_face_panics() {
        Stencil::default().gl_stencil_mask_separate(GL_CW, 0);
    }

    #[test]
    fn round_trip() {
        let mut ctx = SimulatedContext::new();
        let mut s = Stencil::default();
        s.test = true;
        s.gl_clear_stencil(7);
        s.gl_stencil_func_separate(GL_FRONT, GL_NOTEQUAL, 1, 0x7f);
        s.gl_stencil_op_separate(GL_BACK, GL_INVERT, GL_DECR, GL_DECR_WRAP);
        s.gl_stencil_mask_separate(GL_BACK, 0x3);
        s.apply(&mut ctx);
        assert_eq!(Stencil::capture(&mut ctx), s);
    }

    #[test]
    fn diff_is_per_face() {
        let previous = Stencil::default();
        let mut target = previous.clone();
        target.gl_stencil_op_separate(GL_FRONT, GL_KEEP, GL_KEEP, GL_REPLACE);
        let mut calls = Vec::new();
        target.diff_calls(&previous, &mut calls);
        assert_eq!(
            calls,
            vec![Call::StencilOpSeparate(GL_FRONT, GL_KEEP, GL_KEEP, GL_REPLACE)]
        );
    }
}
