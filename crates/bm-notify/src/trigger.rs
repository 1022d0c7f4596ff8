//! `Trigger`: user-registered notification condition.
//!
//! A trigger is evaluated once per scheduler update against a host-supplied
//! context `C` (typically a snapshot of session state).  Any
//! `FnMut(&C) -> TriggerResult<bool>` closure is a trigger:
//!
//! ```ignore
//! scheduler.register_trigger(
//!     |s: &Snapshot| Ok(s.boost == 0.0),
//!     Notification::custom("empty", "Out of boost!"),
//! );
//! ```

use crate::TriggerResult;

pub trait Trigger<C> {
    /// `Ok(true)` shows the trigger's template notification.
    fn evaluate(&mut self, ctx: &C) -> TriggerResult<bool>;
}

impl<C, F> Trigger<C> for F
where
    F: FnMut(&C) -> TriggerResult<bool>,
{
    #[inline]
    fn evaluate(&mut self, ctx: &C) -> TriggerResult<bool> {
        self(ctx)
    }
}
