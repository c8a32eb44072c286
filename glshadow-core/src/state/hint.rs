use crate::call::Call;
use crate::driver::get_enum;
use crate::gl::*;

state_group! {
    /// Implementation hints, `GL_HINT_BIT`.
    pub struct Hint("hint", HINT) {
        param perspective_correction: GLenum = GL_DONT_CARE => {
            get |dt| get_enum(dt, GL_PERSPECTIVE_CORRECTION_HINT),
            set |v| Call::Hint(GL_PERSPECTIVE_CORRECTION_HINT, v)
        };
        param point_smooth: GLenum = GL_DONT_CARE => {
            get |dt| get_enum(dt, GL_POINT_SMOOTH_HINT),
            set |v| Call::Hint(GL_POINT_SMOOTH_HINT, v)
        };
        param line_smooth: GLenum = GL_DONT_CARE => {
            get |dt| get_enum(dt, GL_LINE_SMOOTH_HINT),
            set |v| Call::Hint(GL_LINE_SMOOTH_HINT, v)
        };
        param polygon_smooth: GLenum = GL_DONT_CARE => {
            get |dt| get_enum(dt, GL_POLYGON_SMOOTH_HINT),
            set |v| Call::Hint(GL_POLYGON_SMOOTH_HINT, v)
        };
        param fog: GLenum = GL_DONT_CARE => {
            get |dt| get_enum(dt, GL_FOG_HINT),
            set |v| Call::Hint(GL_FOG_HINT, v)
        };
        param generate_mipmap: GLenum = GL_DONT_CARE => {
            get |dt| get_enum(dt, GL_GENERATE_MIPMAP_HINT),
            set |v| Call::Hint(GL_GENERATE_MIPMAP_HINT, v)
        };
        param texture_compression: GLenum = GL_DONT_CARE => {
            get |dt| get_enum(dt, GL_TEXTURE_COMPRESSION_HINT),
            set |v| Call::Hint(GL_TEXTURE_COMPRESSION_HINT, v)
        };
        param fragment_shader_derivative: GLenum = GL_DONT_CARE => {
            get |dt| get_enum(dt, GL_FRAGMENT_SHADER_DERIVATIVE_HINT),
            set |v| Call::Hint(GL_FRAGMENT_SHADER_DERIVATIVE_HINT, v)
        };
    }
}

impl Hint {
    fn slot_mut(&mut self, target: GLenum) -> Option<&mut GLenum> {
        match target {
            GL_PERSPECTIVE_CORRECTION_HINT => Some(&mut self.perspective_correction),
            GL_POINT_SMOOTH_HINT => Some(&mut self.point_smooth),
            GL_LINE_SMOOTH_HINT => Some(&mut self.line_smooth),
            GL_POLYGON_SMOOTH_HINT => Some(&mut self.polygon_smooth),
            GL_FOG_HINT => Some(&mut self.fog),
            GL_GENERATE_MIPMAP_HINT => Some(&mut self.generate_mipmap),
            GL_TEXTURE_COMPRESSION_HINT => Some(&mut self.texture_compression),
            GL_FRAGMENT_SHADER_DERIVATIVE_HINT => Some(&mut self.fragment_shader_derivative),
            _ => None,
        }
    }

    /// Untracked targets are ignored.
    pub fn gl_hint(&mut self, target: GLenum, mode: GLenum) {
        match self.slot_mut(target) {
            Some(slot) => *slot = mode,
            None => tracing::debug!(target, "ignoring untracked hint target"),
        }
    }

    /// The mode for `target`, if tracked.
    pub fn get(&self, target: GLenum) -> Option<GLenum> {
        let v = match target {
            GL_PERSPECTIVE_CORRECTION_HINT => self.perspective_correction,
            GL_POINT_SMOOTH_HINT => self.point_smooth,
            GL_LINE_SMOOTH_HINT => self.line_smooth,
            GL_POLYGON_SMOOTH_HINT => self.polygon_smooth,
            GL_FOG_HINT => self.fog,
            GL_GENERATE_MIPMAP_HINT => self.generate_mipmap,
            GL_TEXTURE_COMPRESSION_HINT => self.texture_compression,
            GL_FRAGMENT_SHADER_DERIVATIVE_HINT => self.fragment_shader_derivative,
            _ => return None,
        };
        Some(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulated::SimulatedContext;
    use crate::state::StateGroup;

    #[test]
    fn defaults_are_dont_care() {
        let text = Hint::default().to_statements("\n");
        assert_eq!(text.lines().count(), 8);
        assert!(text.lines().all(|l| l.ends_with(",GL_DONT_CARE);")));
        assert!(text.starts_with("glHint(GL_PERSPECTIVE_CORRECTION_HINT,GL_DONT_CARE);"));
    }

    #[test]
    fn untracked_target_is_ignored() {
        let mut h = Hint::default();
        h.gl_hint(0x8000, GL_NICEST);
        assert_eq!(h, Hint::default());
        h.gl_hint(GL_FOG_HINT, GL_NICEST);
        assert_eq!(h.fog, GL_NICEST);
        assert_eq!(h.get(GL_FOG_HINT), Some(GL_NICEST));
        assert_eq!(h.get(0x8000), None);
    }

    #[test]
    fn round_trip() {
        let mut ctx = SimulatedContext::new();
        let mut h = Hint::default();
        h.gl_hint(GL_LINE_SMOOTH_HINT, GL_FASTEST);
        h.gl_hint(GL_GENERATE_MIPMAP_HINT, GL_NICEST);
        h.apply(&mut ctx);
        assert_eq!(Hint::capture(&mut ctx), h);
    }
}
