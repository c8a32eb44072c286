//! The full shadow of one context: every state group side by side.

use anyhow::{bail, Context as _, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::call::{issue_all, Call};
use crate::driver::Driver;
use crate::gl::*;
use crate::serialize::render;
use crate::state::*;

/// A state group stored in a [`ContextState`].
pub trait Member: StateGroup {
    fn of(state: &ContextState) -> &Self;
    fn of_mut(state: &mut ContextState) -> &mut Self;
}

macro_rules! members {
    ($($field:ident: $ty:ident),*) => {
        $(
            impl Member for $ty {
                fn of(state: &ContextState) -> &Self {
                    &state.$field
                }
                fn of_mut(state: &mut ContextState) -> &mut Self {
                    &mut state.$field
                }
            }
        )*
    };
}

/// Expands `$body` once for every group selected by `$mask`, in apply order,
/// with `$T` naming the group type.
macro_rules! each_group {
    ($mask:expr, |$T:ident| $body:block) => {
        each_group!(@types $mask, $T, $body;
            Enable, Depth, Stencil, Polygon, Transform, Hint,
            List, Accum, Scissor, Viewport, Line, Multisample)
    };
    (@types $mask:expr, $T:ident, $body:block; $($ty:ident),*) => {
        $(
            if $mask.contains(<$ty as StateGroup>::MASK) {
                type $T = $ty;
                $body
            }
        )*
    };
}

/// Snapshot of every tracked state group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextState {
    pub enable: Enable,
    pub depth: Depth,
    pub stencil: Stencil,
    pub polygon: Polygon,
    pub transform: Transform,
    pub hint: Hint,
    pub list: List,
    pub accum: Accum,
    pub scissor: Scissor,
    pub viewport: Viewport,
    pub line: Line,
    pub multisample: Multisample,
}

members! {
    enable: Enable,
    depth: Depth,
    stencil: Stencil,
    polygon: Polygon,
    transform: Transform,
    hint: Hint,
    list: List,
    accum: Accum,
    scissor: Scissor,
    viewport: Viewport,
    line: Line,
    multisample: Multisample
}

impl ContextState {
    /// Read the groups selected by `mask` from the live context, leaving the
    /// others untouched.
    pub fn capture<D: Driver + ?Sized>(&mut self, driver: &mut D, mask: AttribMask) {
        each_group!(mask, |T| {
            *T::of_mut(self) = T::capture(&mut *driver);
        });
    }

    /// Full apply calls of the selected groups.
    pub fn full_calls(&self, mask: AttribMask) -> Vec<Call> {
        let mut out = Vec::new();
        each_group!(mask, |T| {
            T::of(self).full_calls(&mut out);
        });
        out
    }

    /// Calls that move a context holding `previous` to `self`, for the selected groups.
    pub fn diff_calls(&self, previous: &ContextState, mask: AttribMask) -> Vec<Call> {
        let mut out = Vec::new();
        each_group!(mask, |T| {
            T::of(self).diff_calls(T::of(previous), &mut out);
        });
        out
    }

    pub fn serialize_calls(&self, mask: AttribMask) -> Vec<Call> {
        let mut out = Vec::new();
        each_group!(mask, |T| {
            T::of(self).serialize_calls(&mut out);
        });
        out
    }

    pub fn apply<D: Driver + ?Sized>(&self, driver: &mut D, mask: AttribMask) {
        issue_all(driver, &self.full_calls(mask));
    }

    pub fn apply_diff<D: Driver + ?Sized>(
        &self,
        driver: &mut D,
        mask: AttribMask,
        previous: &ContextState,
    ) {
        issue_all(driver, &self.diff_calls(previous, mask));
    }

    /// Statements for the selected groups, each followed by `delimiter`.
    pub fn to_statements(&self, mask: AttribMask, delimiter: &str) -> String {
        render(&self.serialize_calls(mask), delimiter)
    }

    /// Shadow an enable or disable into every group that tracks `cap`.
    pub fn set_capability(&mut self, cap: GLenum, index: Option<GLuint>, enabled: bool) -> bool {
        let mut tracked = false;
        each_group!(AttribMask::TRACKED, |T| {
            tracked |= T::of_mut(self).set_capability(cap, index, enabled);
        });
        if !tracked {
            tracing::debug!(cap, ?index, enabled, "ignoring untracked capability");
        }
        tracked
    }

    /// The shadowed value of `cap`, from the first group that tracks it.
    pub fn capability(&self, cap: GLenum, index: Option<GLuint>) -> Option<bool> {
        each_group!(AttribMask::TRACKED, |T| {
            if let Some(v) = T::of(self).capability(cap, index) {
                return Some(v);
            }
        });
        None
    }

    /// Copy the groups selected by `mask` from `other`.
    pub fn copy_from(&mut self, other: &ContextState, mask: AttribMask) {
        each_group!(mask, |T| {
            T::of_mut(self).clone_from(T::of(other));
        });
    }

    /// Update the shadow as if `call` had been issued to the context.
    ///
    /// Panics on an invalid face selector, like the group mutators.
    pub fn shadow(&mut self, call: &Call) {
        match *call {
            Call::Enable(cap) => {
                self.set_capability(cap, None, true);
            }
            Call::Disable(cap) => {
                self.set_capability(cap, None, false);
            }
            Call::Enablei(cap, i) | Call::EnableIndexedExt(cap, i) => {
                self.set_capability(cap, Some(i), true);
            }
            Call::Disablei(cap, i) | Call::DisableIndexedExt(cap, i) => {
                self.set_capability(cap, Some(i), false);
            }
            Call::ClampColor(target, clamp) => self.enable.gl_clamp_color(target, clamp),
            Call::DepthFunc(func) => self.depth.gl_depth_func(func),
            Call::ClearDepth(depth) => self.depth.gl_clear_depth(depth),
            Call::ClearDepthf(depth) => self.depth.gl_clear_depthf(depth),
            Call::DepthMask(flag) => self.depth.gl_depth_mask(flag),
            Call::ClearStencil(s) => self.stencil.gl_clear_stencil(s),
            Call::StencilFunc(func, reference, mask) => {
                self.stencil.gl_stencil_func(func, reference, mask)
            }
            Call::StencilFuncSeparate(face, func, reference, mask) => {
                self.stencil.gl_stencil_func_separate(face, func, reference, mask)
            }
            Call::StencilMask(mask) => self.stencil.gl_stencil_mask(mask),
            Call::StencilMaskSeparate(face, mask) => {
                self.stencil.gl_stencil_mask_separate(face, mask)
            }
            Call::StencilOp(fail, zfail, zpass) => self.stencil.gl_stencil_op(fail, zfail, zpass),
            Call::StencilOpSeparate(face, fail, zfail, zpass) => {
                self.stencil.gl_stencil_op_separate(face, fail, zfail, zpass)
            }
            Call::CullFace(mode) => self.polygon.gl_cull_face(mode),
            Call::FrontFace(mode) => self.polygon.gl_front_face(mode),
            Call::PolygonMode(face, mode) => self.polygon.gl_polygon_mode(face, mode),
            Call::PolygonOffset(factor, units) => self.polygon.gl_polygon_offset(factor, units),
            Call::ClipPlane(plane, equation) => self.transform.gl_clip_plane(plane, equation),
            Call::MatrixMode(mode) => self.transform.gl_matrix_mode(mode),
            Call::Hint(target, mode) => self.hint.gl_hint(target, mode),
            Call::ListBase(base) => self.list.gl_list_base(base),
            Call::ClearAccum([r, g, b, a]) => self.accum.gl_clear_accum(r, g, b, a),
            Call::Scissor([x, y, w, h]) => self.scissor.gl_scissor(x, y, w, h),
            Call::ScissorArrayv(first, ref boxes) => self.scissor.gl_scissor_arrayv(first, boxes),
            Call::ScissorIndexed(i, [x, y, w, h]) => {
                self.scissor.gl_scissor_indexed(i, x, y, w, h)
            }
            Call::ScissorIndexedv(i, ref v) => self.scissor.gl_scissor_indexedv(i, v),
            Call::Viewport([x, y, w, h]) => self.viewport.gl_viewport(x, y, w, h),
            Call::ViewportArrayv(first, ref viewports) => {
                self.viewport.gl_viewport_arrayv(first, viewports)
            }
            Call::ViewportIndexedf(i, [x, y, w, h]) => {
                self.viewport.gl_viewport_indexedf(i, x, y, w, h)
            }
            Call::ViewportIndexedfv(i, ref v) => self.viewport.gl_viewport_indexedfv(i, v),
            Call::DepthRange(near, far) => self.viewport.gl_depth_range(near, far),
            Call::DepthRangef(near, far) => self.viewport.gl_depth_rangef(near, far),
            Call::DepthRangeArrayv(first, ref ranges) => {
                self.viewport.gl_depth_range_arrayv(first, ranges)
            }
            Call::DepthRangeIndexed(i, near, far) => {
                self.viewport.gl_depth_range_indexed(i, near, far)
            }
            Call::LineWidth(width) => self.line.gl_line_width(width),
            Call::LineStipple(factor, pattern) => self.line.gl_line_stipple(factor, pattern),
            Call::SampleCoverage(value, invert) => {
                self.multisample.gl_sample_coverage(value, invert)
            }
            Call::MinSampleShading(value) => self.multisample.gl_min_sample_shading(value),
        }
    }

    /// The snapshot document for this state.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        let snapshot = Snapshot {
            type_: SNAPSHOT_TYPE.to_string(),
            state: self.clone(),
        };
        finite_value(&snapshot)
    }

    /// Parse a snapshot document. Groups and fields it omits keep their defaults.
    pub fn from_json(value: serde_json::Value) -> Result<ContextState> {
        let snapshot: Snapshot =
            serde_json::from_value(value).context("parsing context state snapshot")?;
        Ok(snapshot.state)
    }

    /// Structural difference from `self` to `other`, as a JSON Patch.
    pub fn json_diff(&self, other: &ContextState) -> Result<json_patch::Patch> {
        let from = finite_value(self)?;
        let to = finite_value(other)?;
        Ok(json_patch::diff(&from, &to))
    }
}

/// Serialize to JSON, refusing values JSON cannot hold.
///
/// serde_json writes NaN and infinities as `null`, which would not read back.
/// No state field is optional, so any `null` comes from such a float.
fn finite_value<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    let value = serde_json::to_value(value).context("serializing context state")?;
    if let Some(path) = null_path(&value, String::new()) {
        bail!("non-finite number at {} cannot be stored in a snapshot", path);
    }
    Ok(value)
}

fn null_path(value: &serde_json::Value, path: String) -> Option<String> {
    match value {
        serde_json::Value::Null => Some(path),
        serde_json::Value::Array(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| null_path(item, format!("{}/{}", path, i))),
        serde_json::Value::Object(map) => map
            .iter()
            .find_map(|(k, item)| null_path(item, format!("{}/{}", path, k))),
        _ => None,
    }
}

const SNAPSHOT_TYPE: &str = "glshadowSnapshot";

/// The root of a snapshot file.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    #[serde(rename = "_type", deserialize_with = "type_is_snapshot")]
    type_: String,
    #[serde(flatten)]
    state: ContextState,
}

fn type_is_snapshot<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    if s == SNAPSHOT_TYPE {
        Ok(s)
    } else {
        Err(serde::de::Error::custom(format!(
            "unexpected _type in snapshot: expected '{}', got '{}'",
            SNAPSHOT_TYPE, s
        )))
    }
}

/// Names of the groups selected by `mask`, in apply order.
pub fn group_names(mask: AttribMask) -> Vec<&'static str> {
    let mut names = Vec::new();
    each_group!(mask, |T| {
        names.push(T::NAME);
    });
    names
}

/// The attribute bit of the group called `name`.
pub fn group_mask(name: &str) -> Result<AttribMask> {
    each_group!(AttribMask::TRACKED, |T| {
        if T::NAME == name {
            return Ok(T::MASK);
        }
    });
    bail!(
        "unknown state group '{}', expected one of: {}",
        name,
        group_names(AttribMask::TRACKED).join(", ")
    )
}
