//! Attribute save/restore, the emulation of `glPushAttrib`/`glPopAttrib`.

use std::fmt;

use tracing::debug;

use crate::call::Call;
use crate::context::ContextState;
use crate::driver::Driver;
use crate::state::AttribMask;

/// Stack behavior chosen by the owning context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackOptions {
    /// Maximum number of saved entries. `None` means unbounded.
    pub max_depth: Option<usize>,
    /// Restore with the minimal diff against the shadow instead of a full apply.
    pub prefer_diff: bool,
}

impl Default for StackOptions {
    fn default() -> Self {
        StackOptions {
            max_depth: None,
            prefer_diff: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// Pop without a matching push.
    Underflow,
    /// Push beyond the configured maximum depth.
    Overflow { limit: usize },
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::Underflow => write!(f, "attribute stack underflow"),
            StackError::Overflow { limit } => {
                write!(f, "attribute stack overflow (limit {})", limit)
            }
        }
    }
}

impl std::error::Error for StackError {}

/// One saved entry: the pushed mask and the values of the groups it selects.
#[derive(Debug, Clone)]
struct SavedAttribs {
    mask: AttribMask,
    state: Box<ContextState>,
}

/// LIFO of saved attribute groups.
///
/// The stack does not own the shadow; callers pass the context's
/// [`ContextState`] to each operation so that it stays the single source of
/// truth about the live context.
#[derive(Debug, Clone, Default)]
pub struct AttribStack {
    options: StackOptions,
    entries: Vec<SavedAttribs>,
}

impl AttribStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: StackOptions) -> Self {
        AttribStack {
            options,
            entries: Vec::new(),
        }
    }

    pub fn options(&self) -> &StackOptions {
        &self.options
    }

    /// Save the groups selected by `mask` from the shadow. Issues no driver queries.
    pub fn push(&mut self, mask: AttribMask, shadow: &ContextState) -> Result<(), StackError> {
        if let Some(limit) = self.options.max_depth {
            if self.entries.len() >= limit {
                return Err(StackError::Overflow { limit });
            }
        }
        let mut state = Box::<ContextState>::default();
        state.copy_from(shadow, mask);
        self.entries.push(SavedAttribs { mask, state });
        debug!(mask = ?mask, depth = self.entries.len(), "push attributes");
        Ok(())
    }

    /// Refresh the selected groups of the shadow from the live context, then push.
    pub fn push_captured<D: Driver + ?Sized>(
        &mut self,
        driver: &mut D,
        mask: AttribMask,
        shadow: &mut ContextState,
    ) -> Result<(), StackError> {
        if let Some(limit) = self.options.max_depth {
            if self.entries.len() >= limit {
                return Err(StackError::Overflow { limit });
            }
        }
        shadow.capture(driver, mask);
        self.push(mask, shadow)
    }

    /// Restore the most recently saved groups to the live context and the shadow.
    ///
    /// Returns the mask that was pushed.
    pub fn pop<D: Driver + ?Sized>(
        &mut self,
        driver: &mut D,
        shadow: &mut ContextState,
    ) -> Result<AttribMask, StackError> {
        let saved = self.entries.pop().ok_or(StackError::Underflow)?;
        let calls = self.restore_calls(&saved, shadow);
        debug!(
            mask = ?saved.mask,
            depth = self.entries.len(),
            calls = calls.len(),
            "pop attributes"
        );
        for call in &calls {
            call.issue(driver);
            // Groups share some flags; shadowing each call keeps them in agreement.
            shadow.shadow(call);
        }
        shadow.copy_from(&saved.state, saved.mask);
        Ok(saved.mask)
    }

    fn restore_calls(&self, saved: &SavedAttribs, shadow: &ContextState) -> Vec<Call> {
        if self.options.prefer_diff {
            saved.state.diff_calls(shadow, saved.mask)
        } else {
            saved.state.full_calls(saved.mask)
        }
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every saved entry without restoring anything.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            debug!(depth = self.entries.len(), "discarding attribute stack");
        }
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::*;
    use crate::simulated::SimulatedContext;

    fn setup() -> (SimulatedContext, ContextState, AttribStack) {
        (
            SimulatedContext::new(),
            ContextState::default(),
            AttribStack::new(),
        )
    }

    /// Issue a call to the context and keep the shadow in step, as an
    /// interception layer would.
    fn forward(ctx: &mut SimulatedContext, shadow: &mut ContextState, call: Call) {
        call.issue(ctx);
        shadow.shadow(&call);
    }

    #[test]
    fn flip_three_flags_and_pop() {
        let (mut ctx, mut shadow, mut stack) = setup();
        let before = ctx.state().clone();
        stack.push(AttribMask::ENABLE, &shadow).unwrap();
        forward(&mut ctx, &mut shadow, Call::Enable(GL_BLEND));
        forward(&mut ctx, &mut shadow, Call::Disable(GL_DITHER));
        forward(&mut ctx, &mut shadow, Call::Enable(GL_LIGHT0 + 3));
        ctx.take_log();

        assert_eq!(stack.pop(&mut ctx, &mut shadow), Ok(AttribMask::ENABLE));
        assert_eq!(ctx.state(), &before);
        assert_eq!(&shadow, &before);
        assert_eq!(
            ctx.take_log(),
            vec![
                Call::Disablei(GL_BLEND, 0),
                Call::Disablei(GL_BLEND, 1),
                Call::Disablei(GL_BLEND, 2),
                Call::Disablei(GL_BLEND, 3),
                Call::Disablei(GL_BLEND, 4),
                Call::Disablei(GL_BLEND, 5),
                Call::Disablei(GL_BLEND, 6),
                Call::Disablei(GL_BLEND, 7),
                Call::Enable(GL_DITHER),
                Call::Disable(GL_LIGHT0 + 3),
            ]
        );
    }

    #[test]
    fn nested_pushes_restore_in_reverse() {
        let (mut ctx, mut shadow, mut stack) = setup();
        let s0 = ctx.state().clone();
        stack
            .push(AttribMask::DEPTH_BUFFER | AttribMask::LINE, &shadow)
            .unwrap();
        forward(&mut ctx, &mut shadow, Call::DepthFunc(GL_GREATER));
        forward(&mut ctx, &mut shadow, Call::LineWidth(4.0));
        let s1 = ctx.state().clone();

        stack.push(AttribMask::DEPTH_BUFFER, &shadow).unwrap();
        forward(&mut ctx, &mut shadow, Call::DepthFunc(GL_NEVER));
        forward(&mut ctx, &mut shadow, Call::ClearDepth(0.0));
        assert_eq!(stack.depth(), 2);

        assert_eq!(
            stack.pop(&mut ctx, &mut shadow),
            Ok(AttribMask::DEPTH_BUFFER)
        );
        assert_eq!(ctx.state(), &s1);
        assert_eq!(
            stack.pop(&mut ctx, &mut shadow),
            Ok(AttribMask::DEPTH_BUFFER | AttribMask::LINE)
        );
        assert_eq!(ctx.state(), &s0);
        assert!(stack.is_empty());
    }

    #[test]
    fn unmasked_changes_survive_pop() {
        let (mut ctx, mut shadow, mut stack) = setup();
        stack.push(AttribMask::HINT, &shadow).unwrap();
        forward(&mut ctx, &mut shadow, Call::Hint(GL_FOG_HINT, GL_NICEST));
        forward(&mut ctx, &mut shadow, Call::ListBase(5));
        stack.pop(&mut ctx, &mut shadow).unwrap();
        assert_eq!(ctx.state().hint.fog, GL_DONT_CARE);
        assert_eq!(ctx.state().list.base, 5);
        assert_eq!(shadow.list.base, 5);
    }

    #[test]
    fn pop_without_changes_issues_nothing() {
        let (mut ctx, mut shadow, mut stack) = setup();
        stack.push(AttribMask::TRACKED, &shadow).unwrap();
        stack.pop(&mut ctx, &mut shadow).unwrap();
        assert_eq!(ctx.mutation_count(), 0);
    }

    #[test]
    fn full_restore_when_diff_disabled() {
        let mut ctx = SimulatedContext::new();
        let mut shadow = ContextState::default();
        let mut stack = AttribStack::with_options(StackOptions {
            prefer_diff: false,
            ..Default::default()
        });
        stack.push(AttribMask::LIST, &shadow).unwrap();
        stack.pop(&mut ctx, &mut shadow).unwrap();
        assert_eq!(ctx.take_log(), vec![Call::ListBase(0)]);
    }

    #[test]
    fn shared_flags_stay_consistent() {
        let (mut ctx, mut shadow, mut stack) = setup();
        stack.push(AttribMask::ENABLE, &shadow).unwrap();
        forward(&mut ctx, &mut shadow, Call::Enable(GL_DEPTH_TEST));
        stack.pop(&mut ctx, &mut shadow).unwrap();
        assert!(!shadow.enable.depth_test);
        assert!(!shadow.depth.test);
    }

    #[test]
    fn push_captured_reads_live_state() {
        let mut ctx = SimulatedContext::new();
        // The context changed behind the shadow's back.
        Call::FrontFace(GL_CW).issue(&mut ctx);
        let mut shadow = ContextState::default();
        let mut stack = AttribStack::new();
        stack
            .push_captured(&mut ctx, AttribMask::POLYGON, &mut shadow)
            .unwrap();
        assert_eq!(shadow.polygon.front_face, GL_CW);

        forward(&mut ctx, &mut shadow, Call::FrontFace(GL_CCW));
        stack.pop(&mut ctx, &mut shadow).unwrap();
        assert_eq!(ctx.state().polygon.front_face, GL_CW);
    }

    #[test]
    fn underflow_and_overflow() {
        let mut ctx = SimulatedContext::new();
        let mut shadow = ContextState::default();
        let mut stack = AttribStack::with_options(StackOptions {
            max_depth: Some(1),
            ..Default::default()
        });
        assert_eq!(
            stack.pop(&mut ctx, &mut shadow),
            Err(StackError::Underflow)
        );
        stack.push(AttribMask::LINE, &shadow).unwrap();
        assert_eq!(
            stack.push(AttribMask::LINE, &shadow),
            Err(StackError::Overflow { limit: 1 })
        );
        assert_eq!(stack.depth(), 1);
        assert_eq!(
            StackError::Overflow { limit: 1 }.to_string(),
            "attribute stack overflow (limit 1)"
        );
    }

    #[test]
    fn clear_discards_entries() {
        let (mut ctx, mut shadow, mut stack) = setup();
        stack.push(AttribMask::LINE, &shadow).unwrap();
        stack.push(AttribMask::HINT, &shadow).unwrap();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(
            stack.pop(&mut ctx, &mut shadow),
            Err(StackError::Underflow)
        );
    }
}
