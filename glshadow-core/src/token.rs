//! Symbolic names for GL enum values, used when rendering calls.

use std::fmt;

use crate::gl::*;

/// An enum argument, displayed by its symbolic name.
///
/// Values without a known name are displayed as hexadecimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token(pub GLenum);

/// A `glClampColor` argument. Clamp values share `0` and `1` with
/// `GL_FALSE`/`GL_TRUE`, so they get their own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampToken(pub GLenum);

/// A boolean argument, displayed as `GL_TRUE` or `GL_FALSE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolToken(pub bool);

/// Look up the symbolic name of a non-indexed enum value.
pub fn name(value: GLenum) -> Option<&'static str> {
    let s = match value {
        // Only stencil ops reach zero among the tracked enum arguments.
        GL_ZERO => "GL_ZERO",
        GL_NEVER => "GL_NEVER",
        GL_LESS => "GL_LESS",
        GL_EQUAL => "GL_EQUAL",
        GL_LEQUAL => "GL_LEQUAL",
        GL_GREATER => "GL_GREATER",
        GL_NOTEQUAL => "GL_NOTEQUAL",
        GL_GEQUAL => "GL_GEQUAL",
        GL_ALWAYS => "GL_ALWAYS",
        GL_FRONT => "GL_FRONT",
        GL_BACK => "GL_BACK",
        GL_FRONT_AND_BACK => "GL_FRONT_AND_BACK",
        GL_CW => "GL_CW",
        GL_CCW => "GL_CCW",
        GL_POINT => "GL_POINT",
        GL_LINE => "GL_LINE",
        GL_FILL => "GL_FILL",
        GL_KEEP => "GL_KEEP",
        GL_REPLACE => "GL_REPLACE",
        GL_INCR => "GL_INCR",
        GL_DECR => "GL_DECR",
        GL_INVERT => "GL_INVERT",
        GL_INCR_WRAP => "GL_INCR_WRAP",
        GL_DECR_WRAP => "GL_DECR_WRAP",
        GL_MODELVIEW => "GL_MODELVIEW",
        GL_PROJECTION => "GL_PROJECTION",
        GL_TEXTURE => "GL_TEXTURE",
        GL_COLOR => "GL_COLOR",
        GL_DONT_CARE => "GL_DONT_CARE",
        GL_FASTEST => "GL_FASTEST",
        GL_NICEST => "GL_NICEST",
        GL_CLAMP_VERTEX_COLOR => "GL_CLAMP_VERTEX_COLOR",
        GL_CLAMP_FRAGMENT_COLOR => "GL_CLAMP_FRAGMENT_COLOR",
        GL_CLAMP_READ_COLOR => "GL_CLAMP_READ_COLOR",
        GL_FIXED_ONLY => "GL_FIXED_ONLY",
        GL_ALPHA_TEST => "GL_ALPHA_TEST",
        GL_AUTO_NORMAL => "GL_AUTO_NORMAL",
        GL_BLEND => "GL_BLEND",
        GL_COLOR_LOGIC_OP => "GL_COLOR_LOGIC_OP",
        GL_COLOR_MATERIAL => "GL_COLOR_MATERIAL",
        GL_COLOR_SUM => "GL_COLOR_SUM",
        GL_COLOR_TABLE => "GL_COLOR_TABLE",
        GL_CONVOLUTION_1D => "GL_CONVOLUTION_1D",
        GL_CONVOLUTION_2D => "GL_CONVOLUTION_2D",
        GL_CULL_FACE => "GL_CULL_FACE",
        GL_DEPTH_CLAMP => "GL_DEPTH_CLAMP",
        GL_DEPTH_TEST => "GL_DEPTH_TEST",
        GL_DITHER => "GL_DITHER",
        GL_FOG => "GL_FOG",
        GL_FRAMEBUFFER_SRGB => "GL_FRAMEBUFFER_SRGB",
        GL_HISTOGRAM => "GL_HISTOGRAM",
        GL_INDEX_LOGIC_OP => "GL_INDEX_LOGIC_OP",
        GL_LIGHTING => "GL_LIGHTING",
        GL_LINE_SMOOTH => "GL_LINE_SMOOTH",
        GL_LINE_STIPPLE => "GL_LINE_STIPPLE",
        GL_MINMAX => "GL_MINMAX",
        GL_MULTISAMPLE => "GL_MULTISAMPLE",
        GL_NORMALIZE => "GL_NORMALIZE",
        GL_POINT_SMOOTH => "GL_POINT_SMOOTH",
        GL_POINT_SPRITE => "GL_POINT_SPRITE",
        GL_POLYGON_OFFSET_FILL => "GL_POLYGON_OFFSET_FILL",
        GL_POLYGON_OFFSET_LINE => "GL_POLYGON_OFFSET_LINE",
        GL_POLYGON_OFFSET_POINT => "GL_POLYGON_OFFSET_POINT",
        GL_POLYGON_SMOOTH => "GL_POLYGON_SMOOTH",
        GL_POLYGON_STIPPLE => "GL_POLYGON_STIPPLE",
        GL_POST_COLOR_MATRIX_COLOR_TABLE => "GL_POST_COLOR_MATRIX_COLOR_TABLE",
        GL_POST_CONVOLUTION_COLOR_TABLE => "GL_POST_CONVOLUTION_COLOR_TABLE",
        GL_PROGRAM_POINT_SIZE => "GL_PROGRAM_POINT_SIZE",
        GL_RESCALE_NORMAL => "GL_RESCALE_NORMAL",
        GL_SAMPLE_ALPHA_TO_COVERAGE => "GL_SAMPLE_ALPHA_TO_COVERAGE",
        GL_SAMPLE_ALPHA_TO_ONE => "GL_SAMPLE_ALPHA_TO_ONE",
        GL_SAMPLE_COVERAGE => "GL_SAMPLE_COVERAGE",
        GL_SAMPLE_SHADING => "GL_SAMPLE_SHADING",
        GL_SEPARABLE_2D => "GL_SEPARABLE_2D",
        GL_SCISSOR_TEST => "GL_SCISSOR_TEST",
        GL_STENCIL_TEST => "GL_STENCIL_TEST",
        GL_TEXTURE_1D => "GL_TEXTURE_1D",
        GL_TEXTURE_2D => "GL_TEXTURE_2D",
        GL_TEXTURE_3D => "GL_TEXTURE_3D",
        GL_TEXTURE_CUBE_MAP => "GL_TEXTURE_CUBE_MAP",
        GL_TEXTURE_GEN_S => "GL_TEXTURE_GEN_S",
        GL_TEXTURE_GEN_T => "GL_TEXTURE_GEN_T",
        GL_TEXTURE_GEN_R => "GL_TEXTURE_GEN_R",
        GL_TEXTURE_GEN_Q => "GL_TEXTURE_GEN_Q",
        GL_VERTEX_PROGRAM_TWO_SIDE => "GL_VERTEX_PROGRAM_TWO_SIDE",
        GL_PERSPECTIVE_CORRECTION_HINT => "GL_PERSPECTIVE_CORRECTION_HINT",
        GL_POINT_SMOOTH_HINT => "GL_POINT_SMOOTH_HINT",
        GL_LINE_SMOOTH_HINT => "GL_LINE_SMOOTH_HINT",
        GL_POLYGON_SMOOTH_HINT => "GL_POLYGON_SMOOTH_HINT",
        GL_FOG_HINT => "GL_FOG_HINT",
        GL_GENERATE_MIPMAP_HINT => "GL_GENERATE_MIPMAP_HINT",
        GL_TEXTURE_COMPRESSION_HINT => "GL_TEXTURE_COMPRESSION_HINT",
        GL_FRAGMENT_SHADER_DERIVATIVE_HINT => "GL_FRAGMENT_SHADER_DERIVATIVE_HINT",
        _ => return None,
    };
    Some(s)
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if let Some(s) = name(v) {
            return f.write_str(s);
        }
        // GL_CLIP_PLANEi aliases GL_CLIP_DISTANCEi; the core-profile name wins.
        if (GL_CLIP_DISTANCE0..GL_CLIP_DISTANCE0 + MAX_CLIP_DISTANCES as GLenum).contains(&v) {
            return write!(f, "GL_CLIP_DISTANCE{}", v - GL_CLIP_DISTANCE0);
        }
        if (GL_LIGHT0..GL_LIGHT0 + MAX_LIGHTS as GLenum).contains(&v) {
            return write!(f, "GL_LIGHT{}", v - GL_LIGHT0);
        }
        write!(f, "0x{:04x}", v)
    }
}

impl fmt::Display for ClampToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            GL_FALSE => f.write_str("GL_FALSE"),
            GL_TRUE => f.write_str("GL_TRUE"),
            GL_FIXED_ONLY => f.write_str("GL_FIXED_ONLY"),
            other => write!(f, "0x{:04x}", other),
        }
    }
}

impl fmt::Display for BoolToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "GL_TRUE" } else { "GL_FALSE" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names() {
        assert_eq!(Token(GL_DEPTH_TEST).to_string(), "GL_DEPTH_TEST");
        assert_eq!(Token(GL_LESS).to_string(), "GL_LESS");
        assert_eq!(Token(GL_ZERO).to_string(), "GL_ZERO");
    }

    #[test]
    fn ranged_names() {
        assert_eq!(Token(GL_LIGHT0 + 3).to_string(), "GL_LIGHT3");
        assert_eq!(Token(GL_CLIP_PLANE0 + 5).to_string(), "GL_CLIP_DISTANCE5");
    }

    #[test]
    fn unknown_is_hex() {
        assert_eq!(Token(0xdead).to_string(), "0xdead");
        assert_eq!(Token(0x12).to_string(), "0x0012");
    }

    #[test]
    fn clamp_values() {
        assert_eq!(ClampToken(GL_TRUE).to_string(), "GL_TRUE");
        assert_eq!(ClampToken(GL_FALSE).to_string(), "GL_FALSE");
        assert_eq!(ClampToken(GL_FIXED_ONLY).to_string(), "GL_FIXED_ONLY");
    }
}
