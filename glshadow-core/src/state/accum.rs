use crate::call::Call;
use crate::driver::get_floats;
use crate::gl::*;

state_group! {
    /// Accumulation buffer clear color, `GL_ACCUM_BUFFER_BIT`.
    pub struct Accum("accum", ACCUM_BUFFER) {
        param clear: [GLfloat; 4] = [0.0; 4] => {
            get |dt| get_floats(dt, GL_ACCUM_CLEAR_VALUE),
            set |v| Call::ClearAccum(v)
        };
    }
}

impl Accum {
    pub fn gl_clear_accum(&mut self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        self.clear = [red, green, blue, alpha];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulated::SimulatedContext;
    use crate::state::StateGroup;

    #[test]
    fn default_and_round_trip() {
        assert_eq!(Accum::default().to_statements(""), "glClearAccum(0,0,0,0);");
        let mut ctx = SimulatedContext::new();
        let mut a = Accum::default();
        a.gl_clear_accum(0.25, 0.5, 0.75, 1.0);
        a.apply(&mut ctx);
        assert_eq!(Accum::capture(&mut ctx), a);
        assert_eq!(a.to_statements(""), "glClearAccum(0.25,0.5,0.75,1);");
    }
}
