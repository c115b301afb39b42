#![no_std]
#![no_main]

use core::cell::RefCell;
use critical_section::Mutex;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::gpio::FunctionPio0;
use rp_pico::hal::pac::{self, interrupt};
use rp_pico::hal::pio::PIOExt;
use rp_pico::hal::{Clock, Sio, Timer, clocks::init_clocks_and_plls, watchdog::Watchdog};
use rtt_target::{rprintln, rtt_init_print};

use digit_matrix::config::{BUTTON_A_PIN, BUTTON_B_PIN};
use digit_matrix::{
    ActionMailbox, Button, EdgeMask, EdgeOutcome, InputController, MatrixRenderer, RenderLoop,
};
use rp_pico_demos::buttons::BoardButtons;
use rp_pico_demos::time::{HardwareTimer, Instant};
use rp_pico_demos::ws2812::Ws2812Matrix;

type Input = InputController<'static, Instant, HardwareTimer, BoardButtons>;

/// Handoff between the GPIO interrupt and the main loop
static MAILBOX: ActionMailbox = ActionMailbox::new();

/// Input controller, moved here once bring-up is done
static INPUT: Mutex<RefCell<Option<Input>>> = Mutex::new(RefCell::new(None));

/// GPIO bank 0 interrupt - both buttons, both edges
#[interrupt]
fn IO_IRQ_BANK0() {
    critical_section::with(|cs| {
        let mut slot = INPUT.borrow_ref_mut(cs);
        let Some(input) = slot.as_mut() else {
            return;
        };

        for (pin, button) in [(BUTTON_A_PIN, Button::A), (BUTTON_B_PIN, Button::B)] {
            let edges = input.pins_mut().take_edges(button);
            if edges == EdgeMask::default() {
                continue;
            }
            if let EdgeOutcome::Accepted(action) = input.on_interrupt(pin, edges) {
                rprintln!("Button {:?} pressed: {:?}", button, action);
            }
        }
    });
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Digit Matrix ===");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // Set up the Single Cycle IO (for GPIO access)
    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // Hardware timer: clock for debouncing, busy-wait delays for the main loop
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // GPIO13: heartbeat LED
    let heartbeat = pins.gpio13.into_push_pull_output();

    // GPIO5 / GPIO6: buttons to ground, internal pull-ups
    let buttons = BoardButtons::new(
        pins.gpio5.into_pull_up_input(),
        pins.gpio6.into_pull_up_input(),
    );
    rprintln!("Buttons configured on GPIO5 (A, +1) and GPIO6 (B, -1)");

    // GPIO7: WS2812 5x5 matrix on PIO0 SM0
    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let strip = Ws2812Matrix::new(
        pins.gpio7.into_function::<FunctionPio0>(),
        &mut pio,
        sm0,
        clocks.peripheral_clock.freq(),
    );
    rprintln!("LED matrix configured on GPIO7 (PIO0)");

    // Hand the input side to the interrupt, then let it fire
    let input = InputController::new(&MAILBOX, HardwareTimer::new(timer), buttons);
    critical_section::with(|cs| {
        INPUT.borrow(cs).replace(Some(input));
    });
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    let mut app = RenderLoop::new(&MAILBOX, MatrixRenderer::new(strip), timer, heartbeat);
    app.start();

    rprintln!("=== System Ready ===");
    rprintln!("Current digit: {}", app.digit());

    loop {
        if let Some(digit) = app.tick() {
            rprintln!("Current digit: {}", digit);
        }
    }
}
