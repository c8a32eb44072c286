use crate::call::Call;
use crate::driver::get_integers_i;
use crate::gl::*;

use super::{fill_range, set_slot};

state_group! {
    /// Per viewport scissor test and box, `GL_SCISSOR_BIT`.
    pub struct Scissor("scissor", SCISSOR) {
        capi test: [bool; MAX_VIEWPORTS] = [false; MAX_VIEWPORTS] => { GL_SCISSOR_TEST };
        /// `x, y, width, height` per viewport.
        arrayv boxes: [[GLint; 4]; MAX_VIEWPORTS] = [[0; 4]; MAX_VIEWPORTS] => {
            get |dt, i| get_integers_i(dt, GL_SCISSOR_BOX, i),
            set |i, v| Call::ScissorIndexed(i, v),
            set_all |v| Call::ScissorArrayv(0, v.to_vec())
        };
    }
}

impl Scissor {
    /// Sets every viewport's box.
    pub fn gl_scissor(&mut self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.boxes = [[x, y, width, height]; MAX_VIEWPORTS];
    }

    pub fn gl_scissor_arrayv(&mut self, first: GLuint, boxes: &[[GLint; 4]]) {
        fill_range(&mut self.boxes, first, boxes);
    }

    pub fn gl_scissor_indexed(
        &mut self,
        index: GLuint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        set_slot(&mut self.boxes, index, [x, y, width, height]);
    }

    pub fn gl_scissor_indexedv(&mut self, index: GLuint, v: &[GLint; 4]) {
        set_slot(&mut self.boxes, index, *v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Driver;
    use crate::simulated::SimulatedContext;
    use crate::state::StateGroup;

    #[test]
    fn full_apply_uses_array_form() {
        let mut calls = Vec::new();
        Scissor::default().full_calls(&mut calls);
        assert_eq!(calls.len(), MAX_VIEWPORTS + 1);
        assert_eq!(
            calls.last(),
            Some(&Call::ScissorArrayv(0, vec![[0; 4]; MAX_VIEWPORTS]))
        );
    }

    #[test]
    fn serialize_is_per_index() {
        let text = Scissor::default().to_statements("\n");
        assert!(text.contains("glDisablei(GL_SCISSOR_TEST,15);\n"));
        assert!(text.contains("glScissorIndexed(0,0,0,0,0);\n"));
        assert!(text.ends_with("glScissorIndexed(15,0,0,0,0);\n"));
    }

    #[test]
    fn fan_out_and_clamping() {
        let mut s = Scissor::default();
        s.gl_scissor(1, 2, 3, 4);
        assert!(s.boxes.iter().all(|b| *b == [1, 2, 3, 4]));

        let before = s.clone();
        s.gl_scissor_indexed(MAX_VIEWPORTS as GLuint, 9, 9, 9, 9);
        assert_eq!(s, before);

        s.gl_scissor_arrayv(14, &[[5, 5, 5, 5], [6, 6, 6, 6], [7, 7, 7, 7]]);
        assert_eq!(s.boxes[13], [1, 2, 3, 4]);
        assert_eq!(s.boxes[14], [5, 5, 5, 5]);
        assert_eq!(s.boxes[15], [6, 6, 6, 6]);
    }

    #[test]
    fn vector_form_sets_one_box() {
        let mut ctx = SimulatedContext::new();
        ctx.scissor_indexedv(6, &[1, 2, 3, 4]);
        ctx.scissor_indexedv(MAX_VIEWPORTS as GLuint, &[5, 5, 5, 5]);
        let shadow = &ctx.state().scissor;
        assert_eq!(shadow.boxes[6], [1, 2, 3, 4]);
        assert_eq!(shadow.boxes[5], [0; 4]);
        assert_eq!(ctx.mutation_count(), 2);
    }

    #[test]
    fn round_trip_and_diff() {
        let mut ctx = SimulatedContext::new();
        let previous = Scissor::default();
        let mut target = previous.clone();
        target.test[3] = true;
        target.gl_scissor_indexed(3, 10, 20, 30, 40);
        target.apply(&mut ctx);
        assert_eq!(Scissor::capture(&mut ctx), target);

        let mut calls = Vec::new();
        target.diff_calls(&previous, &mut calls);
        assert_eq!(
            calls,
            vec![
                Call::Enablei(GL_SCISSOR_TEST, 3),
                Call::ScissorIndexed(3, [10, 20, 30, 40]),
            ]
        );
    }
}
