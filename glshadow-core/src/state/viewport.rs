use crate::call::Call;
use crate::driver::{get_doubles_i, get_floats_i};
use crate::gl::*;

use super::{fill_range, set_slot};

state_group! {
    /// Viewport rectangles and depth ranges, `GL_VIEWPORT_BIT`.
    pub struct Viewport("viewport", VIEWPORT) {
        /// `x, y, width, height` per viewport.
        arrayv viewports: [[GLfloat; 4]; MAX_VIEWPORTS] = [[0.0; 4]; MAX_VIEWPORTS] => {
            get |dt, i| get_floats_i(dt, GL_VIEWPORT, i),
            set |i, v| Call::ViewportIndexedf(i, v),
            set_all |v| Call::ViewportArrayv(0, v.to_vec())
        };
        /// `near, far` per viewport.
        arrayv depth_ranges: [[GLdouble; 2]; MAX_VIEWPORTS] = [[0.0, 1.0]; MAX_VIEWPORTS] => {
            get |dt, i| get_doubles_i(dt, GL_DEPTH_RANGE, i),
            set |i, v| Call::DepthRangeIndexed(i, v[0], v[1]),
            set_all |v| Call::DepthRangeArrayv(0, v.to_vec())
        };
    }
}

impl Viewport {
    /// Sets every viewport.
    pub fn gl_viewport(&mut self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        let v = [x as GLfloat, y as GLfloat, width as GLfloat, height as GLfloat];
        self.viewports = [v; MAX_VIEWPORTS];
    }

    pub fn gl_viewport_arrayv(&mut self, first: GLuint, viewports: &[[GLfloat; 4]]) {
        fill_range(&mut self.viewports, first, viewports);
    }

    pub fn gl_viewport_indexedf(
        &mut self,
        index: GLuint,
        x: GLfloat,
        y: GLfloat,
        w: GLfloat,
        h: GLfloat,
    ) {
        set_slot(&mut self.viewports, index, [x, y, w, h]);
    }

    pub fn gl_viewport_indexedfv(&mut self, index: GLuint, v: &[GLfloat; 4]) {
        set_slot(&mut self.viewports, index, *v);
    }

    /// Sets every viewport's depth range.
    pub fn gl_depth_range(&mut self, near: GLdouble, far: GLdouble) {
        self.depth_ranges = [[near, far]; MAX_VIEWPORTS];
    }

    /// The single precision form of [`Viewport::gl_depth_range`].
    pub fn gl_depth_rangef(&mut self, near: GLfloat, far: GLfloat) {
        self.gl_depth_range(near as GLdouble, far as GLdouble);
    }

    pub fn gl_depth_range_arrayv(&mut self, first: GLuint, ranges: &[[GLdouble; 2]]) {
        fill_range(&mut self.depth_ranges, first, ranges);
    }

    pub fn gl_depth_range_indexed(&mut self, index: GLuint, near: GLdouble, far: GLdouble) {
        set_slot(&mut self.depth_ranges, index, [near, far]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Driver;
    use crate::simulated::SimulatedContext;
    use crate::state::StateGroup;

    #[test]
    fn default_depth_range_is_unit() {
        let v = Viewport::default();
        assert!(v.depth_ranges.iter().all(|r| *r == [0.0, 1.0]));
        let text = v.to_statements("\n");
        assert!(text.starts_with("glViewportIndexedf(0,0,0,0,0);\n"));
        assert!(text.ends_with("glDepthRangeIndexed(15,0,1);\n"));
    }

    #[test]
    fn fan_out_and_clamping() {
        let mut v = Viewport::default();
        v.gl_viewport(0, 0, 640, 480);
        assert!(v.viewports.iter().all(|r| *r == [0.0, 0.0, 640.0, 480.0]));
        v.gl_depth_range(0.1, 0.9);
        assert!(v.depth_ranges.iter().all(|r| *r == [0.1, 0.9]));

        let before = v.clone();
        v.gl_viewport_indexedf(16, 1.0, 1.0, 1.0, 1.0);
        v.gl_depth_range_indexed(100, 0.0, 0.0);
        v.gl_depth_range_arrayv(16, &[[0.0, 0.5]]);
        assert_eq!(v, before);

        v.gl_viewport_arrayv(15, &[[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]]);
        assert_eq!(v.viewports[15], [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.viewports[14], [0.0, 0.0, 640.0, 480.0]);
    }

    #[test]
    fn single_precision_and_vector_forms() {
        let mut v = Viewport::default();
        v.gl_depth_rangef(0.25, 0.75);
        assert!(v.depth_ranges.iter().all(|r| *r == [0.25, 0.75]));

        v.gl_viewport_indexedfv(4, &[1.0, 2.0, 30.0, 40.0]);
        assert_eq!(v.viewports[4], [1.0, 2.0, 30.0, 40.0]);
        let before = v.clone();
        v.gl_viewport_indexedfv(MAX_VIEWPORTS as GLuint, &[9.0; 4]);
        assert_eq!(v, before);

        let mut ctx = SimulatedContext::new();
        ctx.depth_rangef(0.5, 1.0);
        ctx.viewport_indexedfv(1, &[0.0, 0.0, 64.0, 64.0]);
        assert_eq!(ctx.state().viewport.depth_ranges[15], [0.5, 1.0]);
        assert_eq!(ctx.state().viewport.viewports[1], [0.0, 0.0, 64.0, 64.0]);
        assert_eq!(Viewport::capture(&mut ctx), ctx.state().viewport);
    }

    #[test]
    fn round_trip_and_diff() {
        let mut ctx = SimulatedContext::new();
        let previous = Viewport::default();
        let mut target = previous.clone();
        target.gl_viewport_indexedf(2, 8.0, 8.0, 100.0, 50.0);
        target.gl_depth_range_indexed(5, 0.25, 0.5);
        target.apply(&mut ctx);
        assert_eq!(Viewport::capture(&mut ctx), target);
        assert_eq!(ctx.mutation_count(), 2);

        let mut calls = Vec::new();
        target.diff_calls(&previous, &mut calls);
        assert_eq!(
            calls,
            vec![
                Call::ViewportIndexedf(2, [8.0, 8.0, 100.0, 50.0]),
                Call::DepthRangeIndexed(5, 0.25, 0.5),
            ]
        );
    }

    #[test]
    fn diff_of_many_slots_uses_array_call() {
        let previous = Viewport::default();
        let mut target = previous.clone();
        target.gl_viewport(0, 0, 320, 240);
        let mut calls = Vec::new();
        target.diff_calls(&previous, &mut calls);
        assert_eq!(
            calls,
            vec![Call::ViewportArrayv(0, vec![[0.0, 0.0, 320.0, 240.0]; MAX_VIEWPORTS])]
        );

        let mut ctx = SimulatedContext::with_state(crate::context::ContextState::default());
        target.apply_diff(&mut ctx, &previous);
        assert_eq!(ctx.state().viewport, target);
        assert_eq!(ctx.mutation_count(), 1);
    }
}
