use crate::call::Call;
use crate::driver::get_integer;
use crate::gl::*;

state_group! {
    /// Display list base, `GL_LIST_BIT`.
    pub struct List("list", LIST) {
        param base: GLuint = 0 => {
            get |dt| get_integer(dt, GL_LIST_BASE) as GLuint,
            set |v| Call::ListBase(v)
        };
    }
}

impl List {
    pub fn gl_list_base(&mut self, base: GLuint) {
        self.base = base;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulated::SimulatedContext;
    use crate::state::StateGroup;

    #[test]
    fn default_and_round_trip() {
        assert_eq!(List::default().to_statements("\n"), "glListBase(0);\n");
        let mut ctx = SimulatedContext::new();
        let mut l = List::default();
        l.gl_list_base(42);
        l.apply(&mut ctx);
        assert_eq!(List::capture(&mut ctx), l);
        assert_eq!(ctx.take_log(), vec![Call::ListBase(42)]);
    }

    #[test]
    fn tracks_no_capabilities() {
        let mut l = List::default();
        assert!(!l.set_capability(GL_DEPTH_TEST, None, true));
        assert_eq!(l.capability(GL_DEPTH_TEST, None), None);
    }
}
