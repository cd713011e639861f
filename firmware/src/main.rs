#![no_main]
#![no_std]

use morse_chirp::{board::Board, BeaconConfig};
use msp430_rt::entry;
use panic_msp430 as _;

// Plays "TRE" on P1.4 (beeper) and P1.6 (flag) whenever the LDR on P1.0 reads below 90.
#[entry]
fn main() -> ! {
    let periph = msp430fr2355::Peripherals::take().unwrap();
    let board = Board::init(periph);

    let mut beacon = board.into_beacon(BeaconConfig::default()).unwrap();
    // Port 1 outputs are infallible and the ADC only ever blocks, so `run` never returns
    match beacon.run() {
        Ok(never) => match never {},
        Err(_) => panic!(),
    }
}

// The compiler will emit calls to the abort() compiler intrinsic if debug assertions are
// enabled (default for dev profile). MSP430 does not actually have meaningful abort() support
// so for now, we create our own in each application where debug assertions are present.
#[no_mangle]
extern "C" fn abort() -> ! {
    panic!();
}
