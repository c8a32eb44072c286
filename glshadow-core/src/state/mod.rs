//! State groups: one value type per coherent slice of context configuration.
//!
//! Each group is declared once as a field table with [`state_group!`]. The
//! table names, per field, its type and native default, how to query it and
//! which call sets it. Capture, full apply, diff apply, serialization and
//! capability shadowing are expanded from that table. Per-call shadow
//! mutators are written by hand next to each table.
//!
//! Field kinds:
//!
//! - `cap`: one capability flag, `glEnable`/`glDisable`.
//! - `capi`: a capability with a flag per index, `glEnablei`/`glDisablei`.
//! - `cap_ext`: a per texture unit capability, `glEnableIndexedEXT`.
//! - `cap_range`: consecutive capability tokens starting at the given one,
//!   such as `GL_LIGHT0 + i`.
//! - `param`: a value with a query and a single setter call.
//! - `slots`: an array whose elements are queried and set per index.
//! - `arrayv`: like `slots`, but a full apply sets every element with a single
//!   array call.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

use crate::call::{issue_all, Call};
use crate::driver::Driver;
use crate::gl::*;
use crate::serialize::render;

bitflags::bitflags! {
    /// `glPushAttrib` mask bits, one per state group.
    ///
    /// Bits without a group are kept but have no effect.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct AttribMask: GLbitfield {
        const LINE = GL_LINE_BIT;
        const POLYGON = GL_POLYGON_BIT;
        const DEPTH_BUFFER = GL_DEPTH_BUFFER_BIT;
        const ACCUM_BUFFER = GL_ACCUM_BUFFER_BIT;
        const STENCIL_BUFFER = GL_STENCIL_BUFFER_BIT;
        const VIEWPORT = GL_VIEWPORT_BIT;
        const TRANSFORM = GL_TRANSFORM_BIT;
        const ENABLE = GL_ENABLE_BIT;
        const HINT = GL_HINT_BIT;
        const LIST = GL_LIST_BIT;
        const SCISSOR = GL_SCISSOR_BIT;
        const MULTISAMPLE = GL_MULTISAMPLE_BIT;

        const _ = !0;
    }
}

impl AttribMask {
    /// Every bit that selects a state group.
    pub const TRACKED: AttribMask = AttribMask::LINE
        .union(AttribMask::POLYGON)
        .union(AttribMask::DEPTH_BUFFER)
        .union(AttribMask::ACCUM_BUFFER)
        .union(AttribMask::STENCIL_BUFFER)
        .union(AttribMask::VIEWPORT)
        .union(AttribMask::TRANSFORM)
        .union(AttribMask::ENABLE)
        .union(AttribMask::HINT)
        .union(AttribMask::LIST)
        .union(AttribMask::SCISSOR)
        .union(AttribMask::MULTISAMPLE);
}

/// Contract shared by all state groups.
pub trait StateGroup:
    Clone + Default + PartialEq + fmt::Debug + Serialize + DeserializeOwned
{
    /// Name used in snapshots and on the command line.
    const NAME: &'static str;
    /// The attribute bit selecting this group.
    const MASK: AttribMask;
    /// Whether [`StateGroup::diff_calls`] is minimal rather than the full list.
    const HAS_DIFF: bool = false;

    /// Read every field from the live context.
    ///
    /// Panics if the driver lacks a query entry point the group needs.
    fn capture<D: Driver + ?Sized>(driver: &mut D) -> Self;

    /// The calls that set every field, unconditionally, in apply order.
    fn full_calls(&self, out: &mut Vec<Call>);

    /// The calls that move a context holding `previous` to `self`.
    ///
    /// Never more calls than [`StateGroup::full_calls`], but not always the
    /// same entry points: an `arrayv` field with one changed slot is set with
    /// its indexed call (`glScissorIndexed`, `glViewportIndexedf`,
    /// `glDepthRangeIndexed`) rather than the array call.
    fn diff_calls(&self, previous: &Self, out: &mut Vec<Call>) {
        let _ = previous;
        self.full_calls(out);
    }

    /// One call per field, indexed fields per index.
    fn serialize_calls(&self, out: &mut Vec<Call>);

    /// Shadow an enable or disable. Returns whether the group tracks `cap`.
    fn set_capability(&mut self, cap: GLenum, index: Option<GLuint>, enabled: bool) -> bool;

    /// The shadowed value of `cap`, if the group tracks it.
    fn capability(&self, cap: GLenum, index: Option<GLuint>) -> Option<bool>;

    fn apply<D: Driver + ?Sized>(&self, driver: &mut D) {
        let mut calls = Vec::new();
        self.full_calls(&mut calls);
        tracing::trace!(group = Self::NAME, calls = calls.len(), "apply");
        issue_all(driver, &calls);
    }

    fn apply_diff<D: Driver + ?Sized>(&self, driver: &mut D, previous: &Self) {
        let mut calls = Vec::new();
        self.diff_calls(previous, &mut calls);
        tracing::trace!(group = Self::NAME, calls = calls.len(), "apply diff");
        issue_all(driver, &calls);
    }

    fn to_statements(&self, delimiter: &str) -> String {
        let mut calls = Vec::new();
        self.serialize_calls(&mut calls);
        render(&calls, delimiter)
    }
}

/// Panic unless `face` selects front, back or both faces.
#[track_caller]
pub(crate) fn faces(face: GLenum) -> (bool, bool) {
    match face {
        GL_FRONT => (true, false),
        GL_BACK => (false, true),
        GL_FRONT_AND_BACK => (true, true),
        other => panic!("invalid face selector 0x{:04x}", other),
    }
}

/// Copy `values` into `slots` starting at `first`, dropping what does not fit.
pub(crate) fn fill_range<T: Copy>(slots: &mut [T], first: GLuint, values: &[T]) {
    let first = first as usize;
    let end = first.saturating_add(values.len()).min(slots.len());
    if end < first.saturating_add(values.len()) {
        tracing::trace!(
            first,
            count = values.len(),
            bound = slots.len(),
            "clamping array range"
        );
    }
    if first < end {
        slots[first..end].copy_from_slice(&values[..end - first]);
    }
}

/// Set one slot, ignoring indices at or beyond the bound.
pub(crate) fn set_slot<T>(slots: &mut [T], index: GLuint, value: T) {
    match slots.get_mut(index as usize) {
        Some(slot) => *slot = value,
        None => tracing::trace!(index, bound = slots.len(), "ignoring out of range index"),
    }
}

/// Expands one operation for one field of a [`state_group!`] table.
macro_rules! field {
    // capture
    (capture cap, $t:expr, $d:expr, { $cap:expr }) => {
        $t = $crate::driver::is_enabled(&mut *$d, $cap);
    };
    (capture capi, $t:expr, $d:expr, { $cap:expr }) => {
        for (i, slot) in $t.iter_mut().enumerate() {
            *slot = $crate::driver::is_enabledi(&mut *$d, $cap, i as $crate::gl::GLuint);
        }
    };
    (capture cap_ext, $t:expr, $d:expr, { $cap:expr }) => {
        for (i, slot) in $t.iter_mut().enumerate() {
            *slot =
                $crate::driver::is_enabled_indexed_ext(&mut *$d, $cap, i as $crate::gl::GLuint);
        }
    };
    (capture cap_range, $t:expr, $d:expr, { $cap:expr }) => {
        for (i, slot) in $t.iter_mut().enumerate() {
            *slot = $crate::driver::is_enabled(&mut *$d, $cap + i as $crate::gl::GLenum);
        }
    };
    (capture param, $t:expr, $d:expr,
        { get |$dt:ident| $get:expr, set |$v:ident| $set:expr }) => {{
        let $dt = &mut *$d;
        $t = $get;
    }};
    (capture slots, $t:expr, $d:expr,
        { get |$dt:ident, $i:ident| $get:expr, set |$si:ident, $v:ident| $set:expr }) => {
        for (k, slot) in $t.iter_mut().enumerate() {
            let $dt = &mut *$d;
            let $i = k as $crate::gl::GLuint;
            *slot = $get;
        }
    };
    (capture arrayv, $t:expr, $d:expr,
        { get |$dt:ident, $i:ident| $get:expr, set |$si:ident, $v:ident| $set:expr,
          set_all |$av:ident| $all:expr }) => {
        field!(capture slots, $t, $d, { get |$dt, $i| $get, set |$si, $v| $set });
    };

    // full apply
    (full cap, $val:expr, $out:expr, { $cap:expr }) => {
        $out.push($crate::call::Call::capability($cap, $val));
    };
    (full capi, $val:expr, $out:expr, { $cap:expr }) => {
        for (i, &on) in $val.iter().enumerate() {
            $out.push($crate::call::Call::capability_indexed($cap, i as $crate::gl::GLuint, on));
        }
    };
    (full cap_ext, $val:expr, $out:expr, { $cap:expr }) => {
        for (i, &on) in $val.iter().enumerate() {
            $out.push($crate::call::Call::capability_ext($cap, i as $crate::gl::GLuint, on));
        }
    };
    (full cap_range, $val:expr, $out:expr, { $cap:expr }) => {
        for (i, &on) in $val.iter().enumerate() {
            $out.push($crate::call::Call::capability($cap + i as $crate::gl::GLenum, on));
        }
    };
    (full param, $val:expr, $out:expr,
        { get |$dt:ident| $get:expr, set |$v:ident| $set:expr }) => {{
        let $v = $val;
        $out.push($set);
    }};
    (full slots, $val:expr, $out:expr,
        { get |$dt:ident, $i:ident| $get:expr, set |$si:ident, $v:ident| $set:expr }) => {
        for (k, &value) in $val.iter().enumerate() {
            let $si = k as $crate::gl::GLuint;
            let $v = value;
            $out.push($set);
        }
    };
    (full arrayv, $val:expr, $out:expr,
        { get |$dt:ident, $i:ident| $get:expr, set |$si:ident, $v:ident| $set:expr,
          set_all |$av:ident| $all:expr }) => {{
        let $av = &$val;
        $out.push($all);
    }};

    // diff apply
    (diff cap, $new:expr, $old:expr, $out:expr, { $cap:expr }) => {
        if $new != $old {
            $out.push($crate::call::Call::capability($cap, $new));
        }
    };
    (diff capi, $new:expr, $old:expr, $out:expr, { $cap:expr }) => {
        for (i, (&on, &was)) in $new.iter().zip($old.iter()).enumerate() {
            if on != was {
                $out.push($crate::call::Call::capability_indexed(
                    $cap,
                    i as $crate::gl::GLuint,
                    on,
                ));
            }
        }
    };
    (diff cap_ext, $new:expr, $old:expr, $out:expr, { $cap:expr }) => {
        for (i, (&on, &was)) in $new.iter().zip($old.iter()).enumerate() {
            if on != was {
                $out.push($crate::call::Call::capability_ext($cap, i as $crate::gl::GLuint, on));
            }
        }
    };
    (diff cap_range, $new:expr, $old:expr, $out:expr, { $cap:expr }) => {
        for (i, (&on, &was)) in $new.iter().zip($old.iter()).enumerate() {
            if on != was {
                $out.push($crate::call::Call::capability($cap + i as $crate::gl::GLenum, on));
            }
        }
    };
    (diff param, $new:expr, $old:expr, $out:expr,
        { get |$dt:ident| $get:expr, set |$v:ident| $set:expr }) => {
        if $new != $old {
            let $v = $new;
            $out.push($set);
        }
    };
    (diff slots, $new:expr, $old:expr, $out:expr,
        { get |$dt:ident, $i:ident| $get:expr, set |$si:ident, $v:ident| $set:expr }) => {
        for (k, (&value, &was)) in $new.iter().zip($old.iter()).enumerate() {
            if value != was {
                let $si = k as $crate::gl::GLuint;
                let $v = value;
                $out.push($set);
            }
        }
    };
    (diff arrayv, $new:expr, $old:expr, $out:expr,
        { get |$dt:ident, $i:ident| $get:expr, set |$si:ident, $v:ident| $set:expr,
          set_all |$av:ident| $all:expr }) => {{
        // More than one changed slot costs more than the single array call.
        let changed = $new.iter().zip($old.iter()).filter(|(a, b)| a != b).count();
        if changed > 1 {
            let $av = &$new;
            $out.push($all);
        } else {
            field!(diff slots, $new, $old, $out, { get |$dt, $i| $get, set |$si, $v| $set });
        }
    }};

    // serialization lists array state per index
    (serialize arrayv, $val:expr, $out:expr,
        { get |$dt:ident, $i:ident| $get:expr, set |$si:ident, $v:ident| $set:expr,
          set_all |$av:ident| $all:expr }) => {
        field!(full slots, $val, $out, { get |$dt, $i| $get, set |$si, $v| $set });
    };
    (serialize $kind:ident, $val:expr, $out:expr, $body:tt) => {
        field!(full $kind, $val, $out, $body);
    };

    // capability shadowing
    (set_cap cap, $t:expr, $c:expr, $idx:expr, $on:expr, $tracked:ident, { $cap:expr }) => {
        if $c == $cap && $idx.is_none() {
            $t = $on;
            $tracked = true;
        }
    };
    (set_cap capi, $t:expr, $c:expr, $idx:expr, $on:expr, $tracked:ident, { $cap:expr }) => {
        if $c == $cap {
            match $idx {
                None => $t.iter_mut().for_each(|slot| *slot = $on),
                Some(i) => $crate::state::set_slot(&mut $t, i, $on),
            }
            $tracked = true;
        }
    };
    (set_cap cap_ext, $t:expr, $c:expr, $idx:expr, $on:expr, $tracked:ident, { $cap:expr }) => {
        if $c == $cap {
            // Without an index, unit 0 stands in for the active texture unit.
            $crate::state::set_slot(&mut $t, $idx.unwrap_or(0), $on);
            $tracked = true;
        }
    };
    (set_cap cap_range, $t:expr, $c:expr, $idx:expr, $on:expr, $tracked:ident, { $cap:expr }) => {
        if $idx.is_none() && $c >= $cap && (($c - $cap) as usize) < $t.len() {
            $t[($c - $cap) as usize] = $on;
            $tracked = true;
        }
    };
    (set_cap $kind:ident, $($rest:tt)*) => {};

    (get_cap cap, $t:expr, $c:expr, $idx:expr, { $cap:expr }) => {
        if $c == $cap && $idx.is_none() {
            return Some($t);
        }
    };
    (get_cap capi, $t:expr, $c:expr, $idx:expr, { $cap:expr }) => {
        if $c == $cap {
            return $t.get($idx.unwrap_or(0) as usize).copied();
        }
    };
    (get_cap cap_ext, $t:expr, $c:expr, $idx:expr, { $cap:expr }) => {
        if $c == $cap {
            return $t.get($idx.unwrap_or(0) as usize).copied();
        }
    };
    (get_cap cap_range, $t:expr, $c:expr, $idx:expr, { $cap:expr }) => {
        if $idx.is_none() && $c >= $cap && (($c - $cap) as usize) < $t.len() {
            return Some($t[($c - $cap) as usize]);
        }
    };
    (get_cap $kind:ident, $($rest:tt)*) => {};
}

/// Declares a state group from its field table.
///
/// ```text
/// state_group! {
///     pub struct Depth("depth", DEPTH_BUFFER) {
///         cap test: bool = false => { GL_DEPTH_TEST };
///         param func: GLenum = GL_LESS => {
///             get |dt| get_enum(dt, GL_DEPTH_FUNC),
///             set |v| Call::DepthFunc(v)
///         };
///     }
/// }
/// ```
///
/// Fields are applied and serialized in table order.
macro_rules! state_group {
    (
        $(#[$meta:meta])*
        pub struct $group:ident ($name:literal, $mask:ident) {
            $(
                $(#[$fmeta:meta])*
                $kind:ident $field:ident : $ty:ty = $default:expr => { $($body:tt)* };
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $group {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl Default for $group {
            fn default() -> Self {
                $group {
                    $($field: $default,)*
                }
            }
        }

        impl $crate::state::StateGroup for $group {
            const NAME: &'static str = $name;
            const MASK: $crate::state::AttribMask = $crate::state::AttribMask::$mask;
            const HAS_DIFF: bool = true;

            fn capture<D: $crate::driver::Driver + ?Sized>(driver: &mut D) -> Self {
                let mut s = Self::default();
                $(field!(capture $kind, s.$field, driver, { $($body)* });)*
                s
            }

            fn full_calls(&self, out: &mut Vec<$crate::call::Call>) {
                $(field!(full $kind, self.$field, out, { $($body)* });)*
            }

            fn diff_calls(&self, previous: &Self, out: &mut Vec<$crate::call::Call>) {
                $(field!(diff $kind, self.$field, previous.$field, out, { $($body)* });)*
            }

            fn serialize_calls(&self, out: &mut Vec<$crate::call::Call>) {
                $(field!(serialize $kind, self.$field, out, { $($body)* });)*
            }

            #[allow(unused_mut, unused_variables)]
            fn set_capability(
                &mut self,
                cap: $crate::gl::GLenum,
                index: Option<$crate::gl::GLuint>,
                enabled: bool,
            ) -> bool {
                let mut tracked = false;
                $(field!(set_cap $kind, self.$field, cap, index, enabled, tracked, { $($body)* });)*
                tracked
            }

            #[allow(unused_variables)]
            fn capability(
                &self,
                cap: $crate::gl::GLenum,
                index: Option<$crate::gl::GLuint>,
            ) -> Option<bool> {
                $(field!(get_cap $kind, self.$field, cap, index, { $($body)* });)*
                None
            }
        }
    };
}

mod accum;
mod depth;
mod enable;
mod hint;
mod line;
mod list;
mod multisample;
mod polygon;
mod scissor;
mod stencil;
mod transform;
mod viewport;

pub use accum::Accum;
pub use depth::Depth;
pub use enable::Enable;
pub use hint::Hint;
pub use line::{Line, LineStipple};
pub use list::List;
pub use multisample::{Multisample, SampleCoverage};
pub use polygon::{Polygon, PolygonOffset};
pub use scissor::Scissor;
pub use stencil::{Stencil, StencilFunc, StencilOp};
pub use transform::Transform;
pub use viewport::Viewport;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_bits_match_native_values() {
        assert_eq!(AttribMask::ENABLE.bits(), 0x2000);
        assert_eq!(AttribMask::DEPTH_BUFFER.bits(), 0x100);
        assert_eq!(AttribMask::STENCIL_BUFFER.bits(), 0x400);
        assert_eq!(AttribMask::POLYGON.bits(), 0x8);
        assert_eq!(AttribMask::TRANSFORM.bits(), 0x1000);
        assert_eq!(AttribMask::HINT.bits(), 0x8000);
        assert_eq!(AttribMask::LIST.bits(), 0x20000);
        assert_eq!(AttribMask::ACCUM_BUFFER.bits(), 0x200);
        assert_eq!(AttribMask::SCISSOR.bits(), 0x80000);
        assert_eq!(AttribMask::VIEWPORT.bits(), 0x800);
        assert_eq!(AttribMask::LINE.bits(), 0x4);
        assert_eq!(AttribMask::MULTISAMPLE.bits(), 0x2000_0000);
    }

    #[test]
    fn unknown_mask_bits_are_kept() {
        let mask = AttribMask::from_bits_retain(0x0010_0000 | GL_LINE_BIT);
        assert!(mask.contains(AttribMask::LINE));
        assert_eq!(mask.bits(), 0x0010_0004);
        assert!(!AttribMask::TRACKED.contains(mask));
    }

    #[test]
    fn fill_range_clamps() {
        let mut slots = [0; 4];
        fill_range(&mut slots, 2, &[7, 8, 9]);
        assert_eq!(slots, [0, 0, 7, 8]);
        fill_range(&mut slots, 10, &[1]);
        assert_eq!(slots, [0, 0, 7, 8]);
        fill_range(&mut slots, u32::MAX, &[1, 2]);
        assert_eq!(slots, [0, 0, 7, 8]);
    }

    #[test]
    fn set_slot_ignores_out_of_range() {
        let mut slots = [false; 2];
        set_slot(&mut slots, 1, true);
        set_slot(&mut slots, 2, true);
        assert_eq!(slots, [false, true]);
    }

    #[test]
    fn face_selectors() {
        assert_eq!(faces(GL_FRONT), (true, false));
        assert_eq!(faces(GL_BACK), (false, true));
        assert_eq!(faces(GL_FRONT_AND_BACK), (true, true));
    }

    #[test]
    #[should_panic(expected = "invalid face selector")]
    fn bad_face_panics() {
        faces(GL_CCW);
    }
}
