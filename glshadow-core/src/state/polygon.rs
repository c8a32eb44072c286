use serde::{Deserialize, Serialize};

use super::faces;
use crate::call::Call;
use crate::driver::{get_enum, get_float, get_integers};
use crate::gl::*;

/// Arguments of `glPolygonOffset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonOffset {
    pub factor: GLfloat,
    pub units: GLfloat,
}

state_group! {
    /// Rasterization state saved by `GL_POLYGON_BIT`.
    pub struct Polygon("polygon", POLYGON) {
        cap cull: bool = false => { GL_CULL_FACE };
        param cull_face: GLenum = GL_BACK => {
            get |dt| get_enum(dt, GL_CULL_FACE_MODE),
            set |v| Call::CullFace(v)
        };
        param front_face: GLenum = GL_CCW => {
            get |dt| get_enum(dt, GL_FRONT_FACE),
            set |v| Call::FrontFace(v)
        };
        param front_mode: GLenum = GL_FILL => {
            get |dt| get_integers::<_, 2>(dt, GL_POLYGON_MODE)[0] as GLenum,
            set |v| Call::PolygonMode(GL_FRONT, v)
        };
        param back_mode: GLenum = GL_FILL => {
            get |dt| get_integers::<_, 2>(dt, GL_POLYGON_MODE)[1] as GLenum,
            set |v| Call::PolygonMode(GL_BACK, v)
        };
        cap smooth: bool = false => { GL_POLYGON_SMOOTH };
        cap stipple: bool = false => { GL_POLYGON_STIPPLE };
        cap offset_fill: bool = false => { GL_POLYGON_OFFSET_FILL };
        cap offset_line: bool = false => { GL_POLYGON_OFFSET_LINE };
        cap offset_point: bool = false => { GL_POLYGON_OFFSET_POINT };
        param offset: PolygonOffset = PolygonOffset::default() => {
            get |dt| PolygonOffset {
                factor: get_float(dt, GL_POLYGON_OFFSET_FACTOR),
                units: get_float(dt, GL_POLYGON_OFFSET_UNITS),
            },
            set |v| Call::PolygonOffset(v.factor, v.units)
        };
    }
}

impl Polygon {
    pub fn gl_cull_face(&mut self, mode: GLenum) {
        self.cull_face = mode;
    }

    pub fn gl_front_face(&mut self, mode: GLenum) {
        self.front_face = mode;
    }

    /// Panics if `face` is not `GL_FRONT`, `GL_BACK` or `GL_FRONT_AND_BACK`.
    pub fn gl_polygon_mode(&mut self, face: GLenum, mode: GLenum) {
        let (front, back) = faces(face);
        if front {
            self.front_mode = mode;
        }
        if back {
            self.back_mode = mode;
        }
    }

    pub fn gl_polygon_offset(&mut self, factor: GLfloat, units: GLfloat) {
        self.offset = PolygonOffset { factor, units };
    }
}
