use crate::call::Call;
use crate::driver::{get_boolean, get_double, get_enum};
use crate::gl::*;

state_group! {
    /// Depth buffer state, `GL_DEPTH_BUFFER_BIT`.
    pub struct Depth("depth", DEPTH_BUFFER) {
        cap test: bool = false => { GL_DEPTH_TEST };
        param func: GLenum = GL_LESS => {
            get |dt| get_enum(dt, GL_DEPTH_FUNC),
            set |v| Call::DepthFunc(v)
        };
        param clear: GLdouble = 1.0 => {
            get |dt| get_double(dt, GL_DEPTH_CLEAR_VALUE),
            set |v| Call::ClearDepth(v)
        };
        /// Depth writes enabled.
        param mask: bool = true => {
            get |dt| get_boolean(dt, GL_DEPTH_WRITEMASK),
            set |v| Call::DepthMask(v)
        };
    }
}

impl Depth {
    pub fn gl_depth_func(&mut self, func: GLenum) {
        self.func = func;
    }

    pub fn gl_clear_depth(&mut self, depth: GLdouble) {
        self.clear = depth;
    }

    /// The single precision form, widened.
    pub fn gl_clear_depthf(&mut self, depth: GLfloat) {
        self.clear = depth as GLdouble;
    }

    pub fn gl_depth_mask(&mut self, flag: bool) {
        self.mask = flag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Driver;
    use crate::simulated::SimulatedContext;
    use crate::state::StateGroup;

    #[test]
    fn defaults_serialize() {
        assert_eq!(
            Depth::default().to_statements("\n"),
            "glDisable(GL_DEPTH_TEST);\n\
             glDepthFunc(GL_LESS);\n\
             glClearDepth(1);\n\
             glDepthMask(GL_TRUE);\n"
        );
    }

    #[test]
    fn round_trip_and_diff() {
        let mut ctx = SimulatedContext::new();
        let previous = Depth::default();
        let mut target = Depth::default();
        target.gl_depth_func(GL_LEQUAL);
        target.gl_clear_depth(0.5);
        target.apply(&mut ctx);
        assert_eq!(Depth::capture(&mut ctx), target);

        let mut calls = Vec::new();
        target.diff_calls(&previous, &mut calls);
        assert_eq!(calls, vec![Call::DepthFunc(GL_LEQUAL), Call::ClearDepth(0.5)]);
    }

    #[test]
    fn single_precision_clear_value() {
        let mut d = Depth::default();
        d.gl_clear_depthf(0.25);
        assert_eq!(d.clear, 0.25);

        let mut ctx = SimulatedContext::new();
        ctx.clear_depthf(0.5);
        assert_eq!(ctx.state().depth.clear, 0.5);
        assert_eq!(ctx.take_log(), vec![Call::ClearDepthf(0.5)]);
        assert_eq!(Depth::capture(&mut ctx).clear, 0.5);
    }

    #[test]
    fn equal_states_diff_to_nothing() {
        let mut ctx = SimulatedContext::new();
        let mut d = Depth::default();
        d.gl_depth_mask(false);
        d.apply_diff(&mut ctx, &d.clone());
        assert_eq!(ctx.mutation_count(), 0);
    }

    #[test]
    fn depth_test_tracked() {
        let mut d = Depth::default();
        assert!(d.set_capability(GL_DEPTH_TEST, None, true));
        assert!(d.test);
        assert!(!d.set_capability(GL_DEPTH_TEST, Some(0), false));
        assert!(d.test);
        assert!(!d.set_capability(GL_STENCIL_TEST, None, true));
    }
}
