use serde::{Deserialize, Serialize};

use crate::call::Call;
use crate::driver::{get_float, get_integer};
use crate::gl::*;

/// Arguments of `glLineStipple`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStipple {
    pub repeat: GLint,
    pub pattern: GLushort,
}

impl Default for LineStipple {
    fn default() -> Self {
        LineStipple {
            repeat: 1,
            pattern: 0xffff,
        }
    }
}

state_group! {
    /// Line rasterization state, `GL_LINE_BIT`.
    pub struct Line("line", LINE) {
        param width: GLfloat = 1.0 => {
            get |dt| get_float(dt, GL_LINE_WIDTH),
            set |v| Call::LineWidth(v)
        };
        cap smooth: bool = false => { GL_LINE_SMOOTH };
        cap stipple_enabled: bool = false => { GL_LINE_STIPPLE };
        param stipple: LineStipple = LineStipple::default() => {
            get |dt| LineStipple {
                repeat: get_integer(dt, GL_LINE_STIPPLE_REPEAT),
                pattern: get_integer(dt, GL_LINE_STIPPLE_PATTERN) as GLushort,
            },
            set |v| Call::LineStipple(v.repeat, v.pattern)
        };
    }
}

impl Line {
    pub fn gl_line_width(&mut self, width: GLfloat) {
        self.width = width;
    }

    pub fn gl_line_stipple(&mut self, repeat: GLint, pattern: GLushort) {
        self.stipple = LineStipple { repeat, pattern };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulated::SimulatedContext;
    use crate::state::StateGroup;

    #[test]
    fn defaults_serialize() {
        assert_eq!(
            Line::default().to_statements("\n"),
            "glLineWidth(1);\n\
             glDisable(GL_LINE_SMOOTH);\n\
             glDisable(GL_LINE_STIPPLE);\n\
             glLineStipple(1,0xffff);\n"
        );
    }

    #[test]
    fn round_trip() {
        let mut ctx = SimulatedContext::new();
        let mut l = Line::default();
        l.gl_line_width(2.5);
        l.gl_line_stipple(3, 0xaaaa);
        l.stipple_enabled = true;
        l.apply(&mut ctx);
        assert_eq!(Line::capture(&mut ctx), l);
    }
}
