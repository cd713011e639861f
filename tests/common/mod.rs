//! Recording fakes for the output lines, the delay provider and the light sensor.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use morse_chirp::LightSensor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Tone,
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    High(Line),
    Low(Line),
    /// Nanoseconds
    Wait(u64),
}

pub type Trace = Rc<RefCell<Vec<Event>>>;

pub fn trace() -> Trace {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct FakePin {
    line: Line,
    trace: Trace,
    /// Number of writes that succeed before the pin starts failing
    fail_after: Option<usize>,
    writes: usize,
}

impl FakePin {
    pub fn new(line: Line, trace: &Trace) -> Self {
        FakePin {
            line,
            trace: trace.clone(),
            fail_after: None,
            writes: 0,
        }
    }

    pub fn failing_after(line: Line, trace: &Trace, writes: usize) -> Self {
        FakePin {
            fail_after: Some(writes),
            ..FakePin::new(line, trace)
        }
    }

    fn write(&mut self, event: Event) -> Result<(), ErrorKind> {
        if self.fail_after.is_some_and(|limit| self.writes >= limit) {
            return Err(ErrorKind::Other);
        }
        self.writes += 1;
        self.trace.borrow_mut().push(event);
        Ok(())
    }
}

impl ErrorType for FakePin {
    type Error = ErrorKind;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(Event::Low(self.line))
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(Event::High(self.line))
    }
}

pub struct FakeDelay {
    trace: Trace,
}

impl FakeDelay {
    pub fn new(trace: &Trace) -> Self {
        FakeDelay {
            trace: trace.clone(),
        }
    }

    fn wait(&mut self, ns: u64) {
        self.trace.borrow_mut().push(Event::Wait(ns));
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.wait(ns as u64);
    }

    fn delay_us(&mut self, us: u32) {
        self.wait(us as u64 * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wait(ms as u64 * 1_000_000);
    }
}

/// Sensor that answers `WouldBlock` once before every reading and fails when it runs dry.
pub struct FakeSensor {
    readings: VecDeque<u16>,
    converting: bool,
    pub polls: usize,
}

impl FakeSensor {
    pub fn new(readings: &[u16]) -> Self {
        FakeSensor {
            readings: readings.iter().copied().collect(),
            converting: false,
            polls: 0,
        }
    }
}

impl LightSensor for FakeSensor {
    type Error = ();

    fn read(&mut self) -> nb::Result<u16, Self::Error> {
        self.polls += 1;
        if !self.converting {
            self.converting = true;
            return Err(nb::Error::WouldBlock);
        }
        self.converting = false;
        self.readings.pop_front().ok_or(nb::Error::Other(()))
    }
}

/// A span of time where a line was high, in nanoseconds from the start of the trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: u64,
    pub end: u64,
}

impl Window {
    pub fn len(&self) -> u64 {
        self.end - self.start
    }
}

/// High windows of `line`, in order.
pub fn windows(events: &[Event], line: Line) -> Vec<Window> {
    let mut now = 0;
    let mut start = None;
    let mut out = Vec::new();
    for event in events {
        match *event {
            Event::Wait(ns) => now += ns,
            Event::High(l) if l == line => {
                start.get_or_insert(now);
            }
            Event::Low(l) if l == line => {
                if let Some(start) = start.take() {
                    out.push(Window { start, end: now });
                }
            }
            _ => {}
        }
    }
    out
}

/// Total time covered by the trace.
pub fn duration(events: &[Event]) -> u64 {
    events
        .iter()
        .map(|event| match event {
            Event::Wait(ns) => *ns,
            _ => 0,
        })
        .sum()
}

/// Total time the tone line spent high.
pub fn tone_high(events: &[Event]) -> u64 {
    windows(events, Line::Tone).iter().map(Window::len).sum()
}

/// Reads the flag windows back as Morse text, one space between letters.
pub fn decode(events: &[Event], unit_ns: u64, dot: u32, mark_gap: u32) -> String {
    let flags = windows(events, Line::Flag);
    let mut text = String::new();
    for (i, window) in flags.iter().enumerate() {
        if i > 0 && window.start - flags[i - 1].end != mark_gap as u64 * unit_ns {
            text.push(' ');
        }
        text.push(if window.len() == dot as u64 * unit_ns {
            '.'
        } else {
            '-'
        });
    }
    text
}
