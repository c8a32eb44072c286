//! OpenGL types and the token values tracked by the state groups.
//!
//! Values are the ones from the Khronos registry. Only the tokens the shadow
//! engine reads or writes are listed here.
#![allow(non_upper_case_globals)]

pub type GLenum = u32;
pub type GLint = i32;
pub type GLuint = u32;
pub type GLsizei = i32;
pub type GLfloat = f32;
pub type GLdouble = f64;
pub type GLushort = u16;
pub type GLbitfield = u32;

/// Number of draw buffers with independent blend enables.
pub const MAX_DRAW_BUFFERS: usize = 8;
/// Number of `GL_CLIP_DISTANCEi` enables.
pub const MAX_CLIP_DISTANCES: usize = 8;
/// Number of user clip planes (enable and equation).
pub const MAX_CLIP_PLANES: usize = 8;
/// Number of fixed-function lights.
pub const MAX_LIGHTS: usize = 8;
/// Number of viewports, scissor boxes and depth ranges.
pub const MAX_VIEWPORTS: usize = 16;
/// Number of texture units with fixed-function enables.
pub const MAX_TEXTURE_UNITS: usize = 16;

pub const GL_FALSE: GLenum = 0;
pub const GL_TRUE: GLenum = 1;
pub const GL_ZERO: GLenum = 0;

// Comparison functions
pub const GL_NEVER: GLenum = 0x0200;
pub const GL_LESS: GLenum = 0x0201;
pub const GL_EQUAL: GLenum = 0x0202;
pub const GL_LEQUAL: GLenum = 0x0203;
pub const GL_GREATER: GLenum = 0x0204;
pub const GL_NOTEQUAL: GLenum = 0x0205;
pub const GL_GEQUAL: GLenum = 0x0206;
pub const GL_ALWAYS: GLenum = 0x0207;

// Faces and winding
pub const GL_FRONT: GLenum = 0x0404;
pub const GL_BACK: GLenum = 0x0405;
pub const GL_FRONT_AND_BACK: GLenum = 0x0408;
pub const GL_CW: GLenum = 0x0900;
pub const GL_CCW: GLenum = 0x0901;

// Polygon rasterization modes
pub const GL_POINT: GLenum = 0x1B00;
pub const GL_LINE: GLenum = 0x1B01;
pub const GL_FILL: GLenum = 0x1B02;

// Stencil operations
pub const GL_KEEP: GLenum = 0x1E00;
pub const GL_REPLACE: GLenum = 0x1E01;
pub const GL_INCR: GLenum = 0x1E02;
pub const GL_DECR: GLenum = 0x1E03;
pub const GL_INVERT: GLenum = 0x150A;
pub const GL_INCR_WRAP: GLenum = 0x8507;
pub const GL_DECR_WRAP: GLenum = 0x8508;

// Matrix modes
pub const GL_MODELVIEW: GLenum = 0x1700;
pub const GL_PROJECTION: GLenum = 0x1701;
pub const GL_TEXTURE: GLenum = 0x1702;
pub const GL_COLOR: GLenum = 0x1800;

// Hint modes
pub const GL_DONT_CARE: GLenum = 0x1100;
pub const GL_FASTEST: GLenum = 0x1101;
pub const GL_NICEST: GLenum = 0x1102;

// Color clamping
pub const GL_CLAMP_VERTEX_COLOR: GLenum = 0x891A;
pub const GL_CLAMP_FRAGMENT_COLOR: GLenum = 0x891B;
pub const GL_CLAMP_READ_COLOR: GLenum = 0x891C;
pub const GL_FIXED_ONLY: GLenum = 0x891D;

// Capabilities
pub const GL_ALPHA_TEST: GLenum = 0x0BC0;
pub const GL_AUTO_NORMAL: GLenum = 0x0D80;
pub const GL_BLEND: GLenum = 0x0BE2;
pub const GL_CLIP_DISTANCE0: GLenum = 0x3000;
pub const GL_CLIP_PLANE0: GLenum = 0x3000;
pub const GL_COLOR_LOGIC_OP: GLenum = 0x0BF2;
pub const GL_COLOR_MATERIAL: GLenum = 0x0B57;
pub const GL_COLOR_SUM: GLenum = 0x8458;
pub const GL_COLOR_TABLE: GLenum = 0x80D0;
pub const GL_CONVOLUTION_1D: GLenum = 0x8010;
pub const GL_CONVOLUTION_2D: GLenum = 0x8011;
pub const GL_CULL_FACE: GLenum = 0x0B44;
pub const GL_DEPTH_CLAMP: GLenum = 0x864F;
pub const GL_DEPTH_TEST: GLenum = 0x0B71;
pub const GL_DITHER: GLenum = 0x0BD0;
pub const GL_FOG: GLenum = 0x0B60;
pub const GL_FRAMEBUFFER_SRGB: GLenum = 0x8DB9;
pub const GL_HISTOGRAM: GLenum = 0x8024;
pub const GL_INDEX_LOGIC_OP: GLenum = 0x0BF1;
pub const GL_LIGHT0: GLenum = 0x4000;
pub const GL_LIGHTING: GLenum = 0x0B50;
pub const GL_LINE_SMOOTH: GLenum = 0x0B20;
pub const GL_LINE_STIPPLE: GLenum = 0x0B24;
pub const GL_MINMAX: GLenum = 0x802E;
pub const GL_MULTISAMPLE: GLenum = 0x809D;
pub const GL_NORMALIZE: GLenum = 0x0BA1;
pub const GL_POINT_SMOOTH: GLenum = 0x0B10;
pub const GL_POINT_SPRITE: GLenum = 0x8861;
pub const GL_POLYGON_OFFSET_FILL: GLenum = 0x8037;
pub const GL_POLYGON_OFFSET_LINE: GLenum = 0x2A02;
pub const GL_POLYGON_OFFSET_POINT: GLenum = 0x2A01;
pub const GL_POLYGON_SMOOTH: GLenum = 0x0B41;
pub const GL_POLYGON_STIPPLE: GLenum = 0x0B42;
pub const GL_POST_COLOR_MATRIX_COLOR_TABLE: GLenum = 0x80D2;
pub const GL_POST_CONVOLUTION_COLOR_TABLE: GLenum = 0x80D1;
pub const GL_PROGRAM_POINT_SIZE: GLenum = 0x8642;
pub const GL_RESCALE_NORMAL: GLenum = 0x803A;
pub const GL_SAMPLE_ALPHA_TO_COVERAGE: GLenum = 0x809E;
pub const GL_SAMPLE_ALPHA_TO_ONE: GLenum = 0x809F;
pub const GL_SAMPLE_COVERAGE: GLenum = 0x80A0;
pub const GL_SAMPLE_SHADING: GLenum = 0x8C36;
pub const GL_SEPARABLE_2D: GLenum = 0x8012;
pub const GL_SCISSOR_TEST: GLenum = 0x0C11;
pub const GL_STENCIL_TEST: GLenum = 0x0B90;
pub const GL_TEXTURE_1D: GLenum = 0x0DE0;
pub const GL_TEXTURE_2D: GLenum = 0x0DE1;
pub const GL_TEXTURE_3D: GLenum = 0x806F;
pub const GL_TEXTURE_CUBE_MAP: GLenum = 0x8513;
pub const GL_TEXTURE_GEN_S: GLenum = 0x0C60;
pub const GL_TEXTURE_GEN_T: GLenum = 0x0C61;
pub const GL_TEXTURE_GEN_R: GLenum = 0x0C62;
pub const GL_TEXTURE_GEN_Q: GLenum = 0x0C63;
pub const GL_VERTEX_PROGRAM_TWO_SIDE: GLenum = 0x8643;

// Depth queries
pub const GL_DEPTH_RANGE: GLenum = 0x0B70;
pub const GL_DEPTH_WRITEMASK: GLenum = 0x0B72;
pub const GL_DEPTH_CLEAR_VALUE: GLenum = 0x0B73;
pub const GL_DEPTH_FUNC: GLenum = 0x0B74;

// Stencil queries
pub const GL_STENCIL_CLEAR_VALUE: GLenum = 0x0B91;
pub const GL_STENCIL_FUNC: GLenum = 0x0B92;
pub const GL_STENCIL_VALUE_MASK: GLenum = 0x0B93;
pub const GL_STENCIL_FAIL: GLenum = 0x0B94;
pub const GL_STENCIL_PASS_DEPTH_FAIL: GLenum = 0x0B95;
pub const GL_STENCIL_PASS_DEPTH_PASS: GLenum = 0x0B96;
pub const GL_STENCIL_REF: GLenum = 0x0B97;
pub const GL_STENCIL_WRITEMASK: GLenum = 0x0B98;
pub const GL_STENCIL_BACK_FUNC: GLenum = 0x8800;
pub const GL_STENCIL_BACK_FAIL: GLenum = 0x8801;
pub const GL_STENCIL_BACK_PASS_DEPTH_FAIL: GLenum = 0x8802;
pub const GL_STENCIL_BACK_PASS_DEPTH_PASS: GLenum = 0x8803;
pub const GL_STENCIL_BACK_REF: GLenum = 0x8CA3;
pub const GL_STENCIL_BACK_VALUE_MASK: GLenum = 0x8CA4;
pub const GL_STENCIL_BACK_WRITEMASK: GLenum = 0x8CA5;

// Polygon queries
pub const GL_POLYGON_MODE: GLenum = 0x0B40;
pub const GL_CULL_FACE_MODE: GLenum = 0x0B45;
pub const GL_FRONT_FACE: GLenum = 0x0B46;
pub const GL_POLYGON_OFFSET_UNITS: GLenum = 0x2A00;
pub const GL_POLYGON_OFFSET_FACTOR: GLenum = 0x8038;

// Transform queries
pub const GL_MATRIX_MODE: GLenum = 0x0BA0;

// Hint targets
pub const GL_PERSPECTIVE_CORRECTION_HINT: GLenum = 0x0C50;
pub const GL_POINT_SMOOTH_HINT: GLenum = 0x0C51;
pub const GL_LINE_SMOOTH_HINT: GLenum = 0x0C52;
pub const GL_POLYGON_SMOOTH_HINT: GLenum = 0x0C53;
pub const GL_FOG_HINT: GLenum = 0x0C54;
pub const GL_GENERATE_MIPMAP_HINT: GLenum = 0x8192;
pub const GL_TEXTURE_COMPRESSION_HINT: GLenum = 0x84EF;
pub const GL_FRAGMENT_SHADER_DERIVATIVE_HINT: GLenum = 0x8B8B;

// Miscellaneous queries
pub const GL_LIST_BASE: GLenum = 0x0B32;
pub const GL_ACCUM_CLEAR_VALUE: GLenum = 0x0B80;
pub const GL_SCISSOR_BOX: GLenum = 0x0C10;
pub const GL_VIEWPORT: GLenum = 0x0BA2;
pub const GL_LINE_WIDTH: GLenum = 0x0B21;
pub const GL_LINE_STIPPLE_PATTERN: GLenum = 0x0B25;
pub const GL_LINE_STIPPLE_REPEAT: GLenum = 0x0B26;
pub const GL_SAMPLE_COVERAGE_VALUE: GLenum = 0x80AA;
pub const GL_SAMPLE_COVERAGE_INVERT: GLenum = 0x80AB;
pub const GL_MIN_SAMPLE_SHADING_VALUE: GLenum = 0x8C37;

// glPushAttrib bits
pub const GL_LINE_BIT: GLbitfield = 0x0000_0004;
pub const GL_POLYGON_BIT: GLbitfield = 0x0000_0008;
pub const GL_DEPTH_BUFFER_BIT: GLbitfield = 0x0000_0100;
pub const GL_ACCUM_BUFFER_BIT: GLbitfield = 0x0000_0200;
pub const GL_STENCIL_BUFFER_BIT: GLbitfield = 0x0000_0400;
pub const GL_VIEWPORT_BIT: GLbitfield = 0x0000_0800;
pub const GL_TRANSFORM_BIT: GLbitfield = 0x0000_1000;
pub const GL_ENABLE_BIT: GLbitfield = 0x0000_2000;
pub const GL_HINT_BIT: GLbitfield = 0x0000_8000;
pub const GL_LIST_BIT: GLbitfield = 0x0002_0000;
pub const GL_SCISSOR_BIT: GLbitfield = 0x0008_0000;
pub const GL_MULTISAMPLE_BIT: GLbitfield = 0x2000_0000;
