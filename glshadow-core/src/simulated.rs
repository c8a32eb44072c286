//! An in-memory context that answers queries from its own [`ContextState`].
//!
//! Used by the tests and by the command line tool to replay snapshots without
//! a GL implementation.

use std::collections::BTreeSet;

use tracing::trace;

use crate::call::Call;
use crate::context::ContextState;
use crate::driver::{Driver, Entry};
use crate::gl::*;

/// A [`Driver`] backed by a [`ContextState`].
///
/// Every mutation is recorded as a [`Call`] and shadowed into the live state.
#[derive(Debug, Clone, Default)]
pub struct SimulatedContext {
    live: ContextState,
    log: Vec<Call>,
    mutations: usize,
    missing: BTreeSet<Entry>,
}

impl SimulatedContext {
    /// A context in the native default state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: ContextState) -> Self {
        SimulatedContext {
            live: state,
            ..Default::default()
        }
    }

    /// Remove an entry point, as on an implementation that lacks it.
    pub fn without(mut self, entry: Entry) -> Self {
        self.missing.insert(entry);
        self
    }

    pub fn state(&self) -> &ContextState {
        &self.live
    }

    /// The calls received since the last call to `take_log`.
    pub fn take_log(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.log)
    }

    /// Total number of mutating calls received.
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    fn record(&mut self, call: Call) {
        trace!(%call, "simulated call");
        self.live.shadow(&call);
        self.log.push(call);
        self.mutations += 1;
    }

    /// Values of a non-indexed query, widened to `f64`.
    fn values(&self, pname: GLenum) -> Option<Vec<f64>> {
        let s = &self.live;
        let e = |v: GLenum| v as f64;
        let b = |v: bool| if v { 1.0 } else { 0.0 };
        let values = match pname {
            GL_CLAMP_FRAGMENT_COLOR => vec![e(s.enable.clamp_fragment_color)],
            GL_CLAMP_READ_COLOR => vec![e(s.enable.clamp_read_color)],
            GL_CLAMP_VERTEX_COLOR => vec![e(s.enable.clamp_vertex_color)],

            GL_DEPTH_FUNC => vec![e(s.depth.func)],
            GL_DEPTH_CLEAR_VALUE => vec![s.depth.clear],
            GL_DEPTH_WRITEMASK => vec![b(s.depth.mask)],

            GL_STENCIL_CLEAR_VALUE => vec![s.stencil.clear as f64],
            GL_STENCIL_FUNC => vec![e(s.stencil.front_func.func)],
            GL_STENCIL_REF => vec![s.stencil.front_func.reference as f64],
            GL_STENCIL_VALUE_MASK => vec![e(s.stencil.front_func.value_mask)],
            GL_STENCIL_WRITEMASK => vec![e(s.stencil.front_write_mask)],
            GL_STENCIL_FAIL => vec![e(s.stencil.front_op.fail)],
            GL_STENCIL_PASS_DEPTH_FAIL => vec![e(s.stencil.front_op.zfail)],
            GL_STENCIL_PASS_DEPTH_PASS => vec![e(s.stencil.front_op.zpass)],
            GL_STENCIL_BACK_FUNC => vec![e(s.stencil.back_func.func)],
            GL_STENCIL_BACK_REF => vec![s.stencil.back_func.reference as f64],
            GL_STENCIL_BACK_VALUE_MASK => vec![e(s.stencil.back_func.value_mask)],
            GL_STENCIL_BACK_WRITEMASK => vec![e(s.stencil.back_write_mask)],
            GL_STENCIL_BACK_FAIL => vec![e(s.stencil.back_op.fail)],
            GL_STENCIL_BACK_PASS_DEPTH_FAIL => vec![e(s.stencil.back_op.zfail)],
            GL_STENCIL_BACK_PASS_DEPTH_PASS => vec![e(s.stencil.back_op.zpass)],

            GL_CULL_FACE_MODE => vec![e(s.polygon.cull_face)],
            GL_FRONT_FACE => vec![e(s.polygon.front_face)],
            GL_POLYGON_MODE => vec![e(s.polygon.front_mode), e(s.polygon.back_mode)],
            GL_POLYGON_OFFSET_FACTOR => vec![s.polygon.offset.factor as f64],
            GL_POLYGON_OFFSET_UNITS => vec![s.polygon.offset.units as f64],

            GL_MATRIX_MODE => vec![e(s.transform.matrix_mode)],

            GL_PERSPECTIVE_CORRECTION_HINT
            | GL_POINT_SMOOTH_HINT
            | GL_LINE_SMOOTH_HINT
            | GL_POLYGON_SMOOTH_HINT
            | GL_FOG_HINT
            | GL_GENERATE_MIPMAP_HINT
            | GL_TEXTURE_COMPRESSION_HINT
            | GL_FRAGMENT_SHADER_DERIVATIVE_HINT => vec![e(s.hint.get(pname)?)],

            GL_LIST_BASE => vec![e(s.list.base)],
            GL_ACCUM_CLEAR_VALUE => s.accum.clear.iter().map(|&v| v as f64).collect(),

            GL_LINE_WIDTH => vec![s.line.width as f64],
            GL_LINE_STIPPLE_REPEAT => vec![s.line.stipple.repeat as f64],
            GL_LINE_STIPPLE_PATTERN => vec![s.line.stipple.pattern as f64],

            GL_SAMPLE_COVERAGE_VALUE => vec![s.multisample.coverage.value as f64],
            GL_SAMPLE_COVERAGE_INVERT => vec![b(s.multisample.coverage.invert)],
            GL_MIN_SAMPLE_SHADING_VALUE => vec![s.multisample.min_sample_shading as f64],

            // The non-indexed forms of the per viewport queries report index 0.
            GL_SCISSOR_BOX | GL_VIEWPORT | GL_DEPTH_RANGE => self.indexed_values(pname, 0)?,

            _ => return None,
        };
        Some(values)
    }

    fn indexed_values(&self, pname: GLenum, index: GLuint) -> Option<Vec<f64>> {
        let s = &self.live;
        let i = index as usize;
        let values = match pname {
            GL_SCISSOR_BOX => s.scissor.boxes.get(i)?.iter().map(|&v| v as f64).collect(),
            GL_VIEWPORT => s.viewport.viewports.get(i)?.iter().map(|&v| v as f64).collect(),
            GL_DEPTH_RANGE => s.viewport.depth_ranges.get(i)?.to_vec(),
            _ => return None,
        };
        Some(values)
    }

    fn query<T>(
        &self,
        pname: GLenum,
        values: Option<Vec<f64>>,
        data: &mut [T],
        convert: fn(f64) -> T,
    ) {
        match values {
            Some(values) => {
                for (slot, value) in data.iter_mut().zip(values) {
                    *slot = convert(value);
                }
            }
            None => trace!(pname, "unanswered query"),
        }
    }
}

fn to_int(v: f64) -> GLint {
    // Through i64 so that unsigned masks wrap instead of saturating.
    v as i64 as GLint
}

impl Driver for SimulatedContext {
    fn has_entry(&self, entry: Entry) -> bool {
        !self.missing.contains(&entry)
    }

    fn is_enabled(&mut self, cap: GLenum) -> bool {
        self.live.capability(cap, None).unwrap_or(false)
    }

    fn is_enabledi(&mut self, cap: GLenum, index: GLuint) -> bool {
        self.live.capability(cap, Some(index)).unwrap_or(false)
    }

    fn is_enabled_indexed_ext(&mut self, cap: GLenum, index: GLuint) -> bool {
        self.live.capability(cap, Some(index)).unwrap_or(false)
    }

    fn get_booleanv(&mut self, pname: GLenum, data: &mut [bool]) {
        self.query(pname, self.values(pname), data, |v| v != 0.0);
    }

    fn get_integerv(&mut self, pname: GLenum, data: &mut [GLint]) {
        self.query(pname, self.values(pname), data, to_int);
    }

    fn get_floatv(&mut self, pname: GLenum, data: &mut [GLfloat]) {
        self.query(pname, self.values(pname), data, |v| v as GLfloat);
    }

    fn get_doublev(&mut self, pname: GLenum, data: &mut [GLdouble]) {
        self.query(pname, self.values(pname), data, |v| v);
    }

    fn get_integeri_v(&mut self, pname: GLenum, index: GLuint, data: &mut [GLint]) {
        self.query(pname, self.indexed_values(pname, index), data, to_int);
    }

    fn get_floati_v(&mut self, pname: GLenum, index: GLuint, data: &mut [GLfloat]) {
        self.query(pname, self.indexed_values(pname, index), data, |v| v as GLfloat);
    }

    fn get_doublei_v(&mut self, pname: GLenum, index: GLuint, data: &mut [GLdouble]) {
        self.query(pname, self.indexed_values(pname, index), data, |v| v);
    }

    fn get_clip_plane(&mut self, plane: GLenum, equation: &mut [GLdouble; 4]) {
        let slot = plane
            .checked_sub(GL_CLIP_PLANE0)
            .and_then(|i| self.live.transform.clip_plane.get(i as usize));
        match slot {
            Some(v) => *equation = *v,
            None => trace!(plane, "unanswered clip plane query"),
        }
    }

    fn enable(&mut self, cap: GLenum) {
        self.record(Call::Enable(cap));
    }

    fn disable(&mut self, cap: GLenum) {
        self.record(Call::Disable(cap));
    }

    fn enablei(&mut self, cap: GLenum, index: GLuint) {
        self.record(Call::Enablei(cap, index));
    }

    fn disablei(&mut self, cap: GLenum, index: GLuint) {
        self.record(Call::Disablei(cap, index));
    }

    fn enable_indexed_ext(&mut self, cap: GLenum, index: GLuint) {
        self.record(Call::EnableIndexedExt(cap, index));
    }

    fn disable_indexed_ext(&mut self, cap: GLenum, index: GLuint) {
        self.record(Call::DisableIndexedExt(cap, index));
    }

    fn clamp_color(&mut self, target: GLenum, clamp: GLenum) {
        self.record(Call::ClampColor(target, clamp));
    }

    fn depth_func(&mut self, func: GLenum) {
        self.record(Call::DepthFunc(func));
    }

    fn clear_depth(&mut self, depth: GLdouble) {
        self.record(Call::ClearDepth(depth));
    }

    fn clear_depthf(&mut self, depth: GLfloat) {
        self.record(Call::ClearDepthf(depth));
    }

    fn depth_mask(&mut self, flag: bool) {
        self.record(Call::DepthMask(flag));
    }

    fn clear_stencil(&mut self, s: GLint) {
        self.record(Call::ClearStencil(s));
    }

    fn stencil_func(&mut self, func: GLenum, reference: GLint, mask: GLuint) {
        self.record(Call::StencilFunc(func, reference, mask));
    }

    fn stencil_func_separate(
        &mut self,
        face: GLenum,
        func: GLenum,
        reference: GLint,
        mask: GLuint,
    ) {
        self.record(Call::StencilFuncSeparate(face, func, reference, mask));
    }

    fn stencil_mask(&mut self, mask: GLuint) {
        self.record(Call::StencilMask(mask));
    }

    fn stencil_mask_separate(&mut self, face: GLenum, mask: GLuint) {
        self.record(Call::StencilMaskSeparate(face, mask));
    }

    fn stencil_op(&mut self, fail: GLenum, zfail: GLenum, zpass: GLenum) {
        self.record(Call::StencilOp(fail, zfail, zpass));
    }

    fn stencil_op_separate(
        &mut self,
        face: GLenum,
        fail: GLenum,
        zfail: GLenum,
        zpass: GLenum,
    ) {
        self.record(Call::StencilOpSeparate(face, fail, zfail, zpass));
    }

    fn cull_face(&mut self, mode: GLenum) {
        self.record(Call::CullFace(mode));
    }

    fn front_face(&mut self, mode: GLenum) {
        self.record(Call::FrontFace(mode));
    }

    fn polygon_mode(&mut self, face: GLenum, mode: GLenum) {
        self.record(Call::PolygonMode(face, mode));
    }

    fn polygon_offset(&mut self, factor: GLfloat, units: GLfloat) {
        self.record(Call::PolygonOffset(factor, units));
    }

    fn clip_plane(&mut self, plane: GLenum, equation: &[GLdouble; 4]) {
        self.record(Call::ClipPlane(plane, *equation));
    }

    fn matrix_mode(&mut self, mode: GLenum) {
        self.record(Call::MatrixMode(mode));
    }

    fn hint(&mut self, target: GLenum, mode: GLenum) {
        self.record(Call::Hint(target, mode));
    }

    fn list_base(&mut self, base: GLuint) {
        self.record(Call::ListBase(base));
    }

    fn clear_accum(&mut self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        self.record(Call::ClearAccum([red, green, blue, alpha]));
    }

    fn scissor(&mut self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.record(Call::Scissor([x, y, width, height]));
    }

    fn scissor_arrayv(&mut self, first: GLuint, boxes: &[[GLint; 4]]) {
        self.record(Call::ScissorArrayv(first, boxes.to_vec()));
    }

    fn scissor_indexed(
        &mut self,
        index: GLuint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.record(Call::ScissorIndexed(index, [x, y, width, height]));
    }

    fn scissor_indexedv(&mut self, index: GLuint, v: &[GLint; 4]) {
        self.record(Call::ScissorIndexedv(index, *v));
    }

    fn viewport(&mut self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.record(Call::Viewport([x, y, width, height]));
    }

    fn viewport_arrayv(&mut self, first: GLuint, viewports: &[[GLfloat; 4]]) {
        self.record(Call::ViewportArrayv(first, viewports.to_vec()));
    }

    fn viewport_indexedf(&mut self, index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat, h: GLfloat) {
        self.record(Call::ViewportIndexedf(index, [x, y, w, h]));
    }

    fn viewport_indexedfv(&mut self, index: GLuint, v: &[GLfloat; 4]) {
        self.record(Call::ViewportIndexedfv(index, *v));
    }

    fn depth_range(&mut self, near: GLdouble, far: GLdouble) {
        self.record(Call::DepthRange(near, far));
    }

    fn depth_rangef(&mut self, near: GLfloat, far: GLfloat) {
        self.record(Call::DepthRangef(near, far));
    }

    fn depth_range_arrayv(&mut self, first: GLuint, ranges: &[[GLdouble; 2]]) {
        self.record(Call::DepthRangeArrayv(first, ranges.to_vec()));
    }

    fn depth_range_indexed(&mut self, index: GLuint, near: GLdouble, far: GLdouble) {
        self.record(Call::DepthRangeIndexed(index, near, far));
    }

    fn line_width(&mut self, width: GLfloat) {
        self.record(Call::LineWidth(width));
    }

    fn line_stipple(&mut self, factor: GLint, pattern: GLushort) {
        self.record(Call::LineStipple(factor, pattern));
    }

    fn sample_coverage(&mut self, value: GLfloat, invert: bool) {
        self.record(Call::SampleCoverage(value, invert));
    }

    fn min_sample_shading(&mut self, value: GLfloat) {
        self.record(Call::MinSampleShading(value));
    }
}
