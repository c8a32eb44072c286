use crate::call::Call;
use crate::driver::get_enum;
use crate::gl::*;

state_group! {
    /// Capability flags saved by `GL_ENABLE_BIT`, plus the color clamp modes.
    ///
    /// Clamp modes are applied before the flags.
    pub struct Enable("enable", ENABLE) {
        param clamp_fragment_color: GLenum = GL_FIXED_ONLY => {
            get |dt| get_enum(dt, GL_CLAMP_FRAGMENT_COLOR),
            set |v| Call::ClampColor(GL_CLAMP_FRAGMENT_COLOR, v)
        };
        param clamp_read_color: GLenum = GL_FIXED_ONLY => {
            get |dt| get_enum(dt, GL_CLAMP_READ_COLOR),
            set |v| Call::ClampColor(GL_CLAMP_READ_COLOR, v)
        };
        param clamp_vertex_color: GLenum = GL_TRUE => {
            get |dt| get_enum(dt, GL_CLAMP_VERTEX_COLOR),
            set |v| Call::ClampColor(GL_CLAMP_VERTEX_COLOR, v)
        };
        cap alpha_test: bool = false => { GL_ALPHA_TEST };
        cap auto_normal: bool = false => { GL_AUTO_NORMAL };
        /// Per draw buffer.
        capi blend: [bool; MAX_DRAW_BUFFERS] = [false; MAX_DRAW_BUFFERS] => { GL_BLEND };
        cap_range clip_distance: [bool; MAX_CLIP_DISTANCES] = [false; MAX_CLIP_DISTANCES] => {
            GL_CLIP_DISTANCE0
        };
        cap color_logic_op: bool = false => { GL_COLOR_LOGIC_OP };
        cap color_material: bool = false => { GL_COLOR_MATERIAL };
        cap color_sum: bool = false => { GL_COLOR_SUM };
        cap color_table: bool = false => { GL_COLOR_TABLE };
        cap convolution_1d: bool = false => { GL_CONVOLUTION_1D };
        cap convolution_2d: bool = false => { GL_CONVOLUTION_2D };
        cap cull_face: bool = false => { GL_CULL_FACE };
        cap depth_clamp: bool = false => { GL_DEPTH_CLAMP };
        cap depth_test: bool = false => { GL_DEPTH_TEST };
        cap dither: bool = true => { GL_DITHER };
        cap fog: bool = false => { GL_FOG };
        cap framebuffer_srgb: bool = false => { GL_FRAMEBUFFER_SRGB };
        cap histogram: bool = false => { GL_HISTOGRAM };
        cap index_logic_op: bool = false => { GL_INDEX_LOGIC_OP };
        cap_range light: [bool; MAX_LIGHTS] = [false; MAX_LIGHTS] => { GL_LIGHT0 };
        cap lighting: bool = false => { GL_LIGHTING };
        cap line_smooth: bool = false => { GL_LINE_SMOOTH };
        cap line_stipple: bool = false => { GL_LINE_STIPPLE };
        cap minmax: bool = false => { GL_MINMAX };
        cap multisample: bool = true => { GL_MULTISAMPLE };
        cap normalize: bool = false => { GL_NORMALIZE };
        cap point_smooth: bool = false => { GL_POINT_SMOOTH };
        cap point_sprite: bool = false => { GL_POINT_SPRITE };
        cap polygon_offset_fill: bool = false => { GL_POLYGON_OFFSET_FILL };
        cap polygon_offset_line: bool = false => { GL_POLYGON_OFFSET_LINE };
        cap polygon_offset_point: bool = false => { GL_POLYGON_OFFSET_POINT };
        cap polygon_smooth: bool = false => { GL_POLYGON_SMOOTH };
        cap polygon_stipple: bool = false => { GL_POLYGON_STIPPLE };
        cap post_color_matrix_color_table: bool = false => { GL_POST_COLOR_MATRIX_COLOR_TABLE };
        cap post_convolution_color_table: bool = false => { GL_POST_CONVOLUTION_COLOR_TABLE };
        cap program_point_size: bool = false => { GL_PROGRAM_POINT_SIZE };
        cap rescale_normal: bool = false => { GL_RESCALE_NORMAL };
        cap sample_alpha_to_coverage: bool = false => { GL_SAMPLE_ALPHA_TO_COVERAGE };
        cap sample_alpha_to_one: bool = false => { GL_SAMPLE_ALPHA_TO_ONE };
        cap sample_coverage: bool = false => { GL_SAMPLE_COVERAGE };
        cap sample_shading: bool = false => { GL_SAMPLE_SHADING };
        cap separable_2d: bool = false => { GL_SEPARABLE_2D };
        /// Per viewport.
        capi scissor_test: [bool; MAX_VIEWPORTS] = [false; MAX_VIEWPORTS] => { GL_SCISSOR_TEST };
        cap stencil_test: bool = false => { GL_STENCIL_TEST };
        cap vertex_program_two_side: bool = false => { GL_VERTEX_PROGRAM_TWO_SIDE };
        cap_ext texture_1d: [bool; MAX_TEXTURE_UNITS] = [false; MAX_TEXTURE_UNITS] => {
            GL_TEXTURE_1D
        };
        cap_ext texture_2d: [bool; MAX_TEXTURE_UNITS] = [false; MAX_TEXTURE_UNITS] => {
            GL_TEXTURE_2D
        };
        cap_ext texture_3d: [bool; MAX_TEXTURE_UNITS] = [false; MAX_TEXTURE_UNITS] => {
            GL_TEXTURE_3D
        };
        cap_ext texture_cube_map: [bool; MAX_TEXTURE_UNITS] = [false; MAX_TEXTURE_UNITS] => {
            GL_TEXTURE_CUBE_MAP
        };
        cap_ext texture_gen_s: [bool; MAX_TEXTURE_UNITS] = [false; MAX_TEXTURE_UNITS] => {
            GL_TEXTURE_GEN_S
        };
        cap_ext texture_gen_t: [bool; MAX_TEXTURE_UNITS] = [false; MAX_TEXTURE_UNITS] => {
            GL_TEXTURE_GEN_T
        };
        cap_ext texture_gen_r: [bool; MAX_TEXTURE_UNITS] = [false; MAX_TEXTURE_UNITS] => {
            GL_TEXTURE_GEN_R
        };
        cap_ext texture_gen_q: [bool; MAX_TEXTURE_UNITS] = [false; MAX_TEXTURE_UNITS] => {
            GL_TEXTURE_GEN_Q
        };
    }
}

impl Enable {
    /// Shadow `glClampColor`. Unknown targets are ignored.
    pub fn gl_clamp_color(&mut self, target: GLenum, clamp: GLenum) {
        match target {
            GL_CLAMP_FRAGMENT_COLOR => self.clamp_fragment_color = clamp,
            GL_CLAMP_READ_COLOR => self.clamp_read_color = clamp,
            GL_CLAMP_VERTEX_COLOR => self.clamp_vertex_color = clamp,
            other => tracing::debug!(target = other, "ignoring untracked clamp target"),
        }
    }

    /// The clamp mode for `target`, if tracked.
    pub fn clamp_color(&self, target: GLenum) -> Option<GLenum> {
        match target {
            GL_CLAMP_FRAGMENT_COLOR => Some(self.clamp_fragment_color),
            GL_CLAMP_READ_COLOR => Some(self.clamp_read_color),
            GL_CLAMP_VERTEX_COLOR => Some(self.clamp_vertex_color),
            _ => None,
        }
    }
}
