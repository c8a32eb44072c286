//! Shadow copies of OpenGL context state.
//!
//! A [`ContextState`] mirrors the parts of a context that `glPushAttrib`
//! saves. It can be captured from a live context through a [`Driver`],
//! applied back in full or as a minimal diff, serialized as readable call
//! statements, and saved on an [`AttribStack`] to emulate
//! `glPushAttrib`/`glPopAttrib` where the native stack is unavailable.

pub mod call;
pub mod context;
pub mod driver;
pub mod gl;
pub mod serialize;
pub mod simulated;
pub mod stack;
pub mod state;
pub mod token;

pub use call::Call;
pub use context::{group_mask, group_names, ContextState};
pub use driver::{Driver, Entry};
pub use simulated::SimulatedContext;
pub use stack::{AttribStack, StackError, StackOptions};
pub use state::{AttribMask, StateGroup};
