use crate::call::Call;
use crate::driver::{get_clip_plane, get_enum};
use crate::gl::*;

use super::set_slot;

state_group! {
    /// Clip planes and matrix mode, `GL_TRANSFORM_BIT`.
    pub struct Transform("transform", TRANSFORM) {
        cap_range clip_plane_enabled: [bool; MAX_CLIP_PLANES] = [false; MAX_CLIP_PLANES] => {
            GL_CLIP_PLANE0
        };
        /// Plane equations in eye coordinates, as returned by `glGetClipPlane`.
        slots clip_plane: [[GLdouble; 4]; MAX_CLIP_PLANES] = [[0.0; 4]; MAX_CLIP_PLANES] => {
            get |dt, i| get_clip_plane(dt, GL_CLIP_PLANE0 + i),
            set |i, v| Call::ClipPlane(GL_CLIP_PLANE0 + i, v)
        };
        param matrix_mode: GLenum = GL_MODELVIEW => {
            get |dt| get_enum(dt, GL_MATRIX_MODE),
            set |v| Call::MatrixMode(v)
        };
        cap normalize: bool = false => { GL_NORMALIZE };
        cap rescale_normal: bool = false => { GL_RESCALE_NORMAL };
        cap depth_clamp: bool = false => { GL_DEPTH_CLAMP };
    }
}

impl Transform {
    /// Planes outside the tracked range are ignored.
    pub fn gl_clip_plane(&mut self, plane: GLenum, equation: [GLdouble; 4]) {
        match plane.checked_sub(GL_CLIP_PLANE0) {
            Some(i) => set_slot(&mut self.clip_plane, i, equation),
            None => tracing::trace!(plane, "ignoring untracked clip plane"),
        }
    }

    pub fn gl_matrix_mode(&mut self, mode: GLenum) {
        self.matrix_mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulated::SimulatedContext;
    use crate::state::StateGroup;

    #[test]
    fn defaults() {
        let t = Transform::default();
        assert_eq!(t.matrix_mode, GL_MODELVIEW);
        assert_eq!(t.clip_plane, [[0.0; 4]; MAX_CLIP_PLANES]);
        let text = t.to_statements("\n");
        assert!(text.starts_with("glDisable(GL_CLIP_DISTANCE0);\n"));
        assert!(text.contains("glClipPlane(GL_CLIP_PLANE7,{0,0,0,0});\n"));
        assert!(text.contains("glMatrixMode(GL_MODELVIEW);\n"));
        assert!(text.ends_with("glDisable(GL_DEPTH_CLAMP);\n"));
    }

    #[test]
    fn clip_plane_out_of_range() {
        let mut t = Transform::default();
        let before = t.clone();
        t.gl_clip_plane(GL_CLIP_PLANE0 + MAX_CLIP_PLANES as GLenum, [1.0; 4]);
        t.gl_clip_plane(GL_LIGHT0, [1.0; 4]);
        t.gl_clip_plane(0, [1.0; 4]);
        assert_eq!(t, before);
        t.gl_clip_plane(GL_CLIP_PLANE0 + 3, [0.0, 1.0, 0.0, -4.0]);
        assert_eq!(t.clip_plane[3], [0.0, 1.0, 0.0, -4.0]);
    }

    #[test]
    fn round_trip() {
        let mut ctx = SimulatedContext::new();
        let mut t = Transform::default();
        t.clip_plane_enabled[1] = true;
        t.gl_clip_plane(GL_CLIP_PLANE0 + 1, [1.0, 0.0, 0.0, 2.5]);
        t.gl_matrix_mode(GL_PROJECTION);
        t.rescale_normal = true;
        t.apply(&mut ctx);
        assert_eq!(Transform::capture(&mut ctx), t);
    }

    #[test]
    fn diff_per_plane() {
        let previous = Transform::default();
        let mut target = previous.clone();
        target.gl_clip_plane(GL_CLIP_PLANE0 + 6, [0.0, 0.0, 1.0, 0.0]);
        target.clip_plane_enabled[6] = true;
        let mut calls = Vec::new();
        target.diff_calls(&previous, &mut calls);
        assert_eq!(
            calls,
            vec![
                Call::Enable(GL_CLIP_PLANE0 + 6),
                Call::ClipPlane(GL_CLIP_PLANE0 + 6, [0.0, 0.0, 1.0, 0.0]),
            ]
        );
    }
}
