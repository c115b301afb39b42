//! Button edge handling for interrupt context.
//!
//! [`InputController`] is meant to be called from the GPIO interrupt handler.
//! It never blocks: it reads the clock, possibly reads one pin, and possibly
//! publishes one action to the [`ActionMailbox`].

use crate::config::{BUTTON_A_PIN, BUTTON_B_PIN, DEBOUNCE_WINDOW_MS};
use crate::mailbox::{ActionMailbox, PendingAction};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use embedded_hal::digital::InputPin;

/// One of the two push-buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Increments the counter.
    A,
    /// Decrements the counter.
    B,
}

impl Button {
    /// Action published when this button is pressed.
    #[inline]
    pub const fn action(self) -> PendingAction {
        match self {
            Button::A => PendingAction::Increment,
            Button::B => PendingAction::Decrement,
        }
    }

    const fn index(self) -> usize {
        match self {
            Button::A => 0,
            Button::B => 1,
        }
    }
}

/// Maps GPIO numbers to buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMap {
    /// GPIO of button A.
    pub a: u8,
    /// GPIO of button B.
    pub b: u8,
}

impl ButtonMap {
    /// Returns the button wired to `pin`, if any.
    pub const fn resolve(&self, pin: u8) -> Option<Button> {
        if pin == self.a {
            Some(Button::A)
        } else if pin == self.b {
            Some(Button::B)
        } else {
            None
        }
    }
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self {
            a: BUTTON_A_PIN,
            b: BUTTON_B_PIN,
        }
    }
}

/// Edge-type bitmask reported by the platform with each interrupt.
///
/// Bit values follow the RP2040 `INTR` register layout. The controller does
/// not trust the mask to tell presses from releases; it reads the settled pin
/// level instead. The mask is kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeMask(pub u32);

impl EdgeMask {
    /// Falling edge (high to low). A press, for an active-low button.
    pub const FALL: EdgeMask = EdgeMask(0x4);
    /// Rising edge (low to high).
    pub const RISE: EdgeMask = EdgeMask(0x8);
    /// Both edges latched before the handler ran.
    pub const BOTH: EdgeMask = EdgeMask(Self::FALL.0 | Self::RISE.0);

    /// Whether every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: EdgeMask) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for EdgeMask {
    type Output = EdgeMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        EdgeMask(self.0 | rhs.0)
    }
}

/// Reads the level of the button inputs.
///
/// Buttons are active-low: a pressed button reads low.
pub trait ButtonPins {
    /// Returns `true` if the button's pin currently reads logic 0.
    fn is_low(&mut self, button: Button) -> bool;
}

/// [`ButtonPins`] over two `embedded-hal` input pins.
///
/// A pin read error counts as "not pressed".
pub struct ButtonPair<A, B> {
    a: A,
    b: B,
}

impl<A: InputPin, B: InputPin> ButtonPair<A, B> {
    /// Wraps the pins for button A and button B.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// Releases the pins.
    pub fn release(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A: InputPin, B: InputPin> ButtonPins for ButtonPair<A, B> {
    fn is_low(&mut self, button: Button) -> bool {
        match button {
            Button::A => self.a.is_low().unwrap_or(false),
            Button::B => self.b.is_low().unwrap_or(false),
        }
    }
}

/// What the controller did with an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// A press was accepted and published.
    Accepted(PendingAction),
    /// The edge came within the debounce window of the last accepted press.
    Debounced,
    /// The pin reads released; nothing published.
    Released,
    /// The pin is not one of the buttons.
    UnknownPin,
}

/// Debounced press detection for two active-low buttons.
///
/// Keeps one last-accepted timestamp per button, written only from the
/// interrupt path. An edge is discarded when it comes no later than the
/// debounce window after that button's last accepted press; otherwise it is
/// accepted only if the pin reads pressed.
///
/// # Type Parameters
/// * `'m` - Lifetime of the shared mailbox (usually `'static`)
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `P` - Button pin reader
pub struct InputController<'m, I: TimeInstant, T: TimeSource<I>, P: ButtonPins> {
    mailbox: &'m ActionMailbox,
    time_source: T,
    pins: P,
    map: ButtonMap,
    debounce_window: I::Duration,
    last_accepted: [Option<I>; 2],
}

impl<'m, I: TimeInstant, T: TimeSource<I>, P: ButtonPins> InputController<'m, I, T, P> {
    /// Creates a controller with the default pin map and debounce window.
    pub fn new(mailbox: &'m ActionMailbox, time_source: T, pins: P) -> Self {
        Self {
            mailbox,
            time_source,
            pins,
            map: ButtonMap::default(),
            debounce_window: I::Duration::from_millis(DEBOUNCE_WINDOW_MS),
            last_accepted: [None; 2],
        }
    }

    /// Overrides the debounce window.
    pub fn with_debounce_window(mut self, millis: u64) -> Self {
        self.debounce_window = I::Duration::from_millis(millis);
        self
    }

    /// Overrides which GPIOs belong to which button.
    pub fn with_button_map(mut self, map: ButtonMap) -> Self {
        self.map = map;
        self
    }

    /// Returns the pin map in use.
    pub fn button_map(&self) -> ButtonMap {
        self.map
    }

    /// Returns a mutable reference to the pin reader, e.g. to acknowledge
    /// latched interrupt flags before handling the edge.
    pub fn pins_mut(&mut self) -> &mut P {
        &mut self.pins
    }

    /// Entry point for the GPIO interrupt: resolves the pin and handles the edge.
    pub fn on_interrupt(&mut self, pin: u8, events: EdgeMask) -> EdgeOutcome {
        match self.map.resolve(pin) {
            Some(button) => self.handle_edge(button, events),
            None => EdgeOutcome::UnknownPin,
        }
    }

    /// Applies the debounce policy to an edge on `button`.
    #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
    pub fn handle_edge(&mut self, button: Button, events: EdgeMask) -> EdgeOutcome {
        let now = self.time_source.now();

        if let Some(last) = self.last_accepted[button.index()] {
            let elapsed = now.duration_since(last);
            if elapsed.as_millis() <= self.debounce_window.as_millis() {
                return EdgeOutcome::Debounced;
            }
        }

        if !self.pins.is_low(button) {
            return EdgeOutcome::Released;
        }

        let action = button.action();
        self.mailbox.publish(action);
        self.last_accepted[button.index()] = Some(now);

        #[cfg(feature = "defmt")]
        defmt::debug!("button {} pressed (edges {=u32:#x}) -> {}", button, events.0, action);

        EdgeOutcome::Accepted(action)
    }
}
