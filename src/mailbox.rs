//! Single-slot handoff between the button interrupt and the main loop.
//!
//! The interrupt publishes at most one [`PendingAction`]; the main loop takes
//! it. A second publish before the loop drains the slot overwrites the first.
//! The dirty flag is not stored separately: the slot is dirty exactly when it
//! holds `Increment` or `Decrement`, so the pairs (None, clean) and
//! (Increment/Decrement, dirty) are the only ones that can be observed.
//!
//! Accesses go through a `critical_section::Mutex`, which works on cores
//! without atomic read-modify-write instructions (Cortex-M0+).

use core::cell::Cell;
use critical_section::Mutex;

/// Action requested by a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PendingAction {
    /// Nothing to do.
    #[default]
    None,
    /// Advance the counter by one.
    Increment,
    /// Step the counter back by one.
    Decrement,
}

impl PendingAction {
    /// Whether this action marks the mailbox dirty.
    #[inline]
    pub const fn is_some(self) -> bool {
        !matches!(self, PendingAction::None)
    }
}

/// Shared state handed by reference to both the interrupt handler and the
/// render loop.
///
/// Designed to live in a `static`: [`ActionMailbox::new`] is `const`.
pub struct ActionMailbox {
    slot: Mutex<Cell<PendingAction>>,
}

impl ActionMailbox {
    /// Creates an empty, clean mailbox.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Cell::new(PendingAction::None)),
        }
    }

    /// Stores an action, replacing any unconsumed one, and marks the slot dirty.
    ///
    /// Publishing `PendingAction::None` clears the slot.
    pub fn publish(&self, action: PendingAction) {
        critical_section::with(|cs| self.slot.borrow(cs).set(action));
    }

    /// Returns the action currently waiting, without consuming it.
    pub fn pending(&self) -> PendingAction {
        critical_section::with(|cs| self.slot.borrow(cs).get())
    }

    /// Whether an unconsumed action is waiting.
    pub fn is_dirty(&self) -> bool {
        self.pending().is_some()
    }

    /// Consumes the waiting action, leaving the slot clean.
    ///
    /// Read and clear happen inside one critical section, so a press landing
    /// right after this call is kept for the next one rather than lost.
    pub fn take(&self) -> Option<PendingAction> {
        let action = critical_section::with(|cs| self.slot.borrow(cs).replace(PendingAction::None));
        action.is_some().then_some(action)
    }
}

impl Default for ActionMailbox {
    fn default() -> Self {
        Self::new()
    }
}
