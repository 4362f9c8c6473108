//! Outer control loop tests: one cycle is brightness then blink

use std::cell::RefCell;
use std::rc::Rc;

use pwm_blinky::demo::BlinkyDemo;
use pwm_blinky::error::BlinkyError;
use pwm_blinky::output::{BlinkOutput, PwmOutput, Sleeper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Pwm(u32, u32),
    Toggle,
    Sleep(u32),
}

type Log = Rc<RefCell<Vec<Event>>>;

struct LoggingPwm {
    log: Log,
    fail: bool,
}

impl PwmOutput for LoggingPwm {
    fn set(&mut self, period_ns: u32, pulse_ns: u32) -> Result<(), BlinkyError> {
        if self.fail {
            return Err(BlinkyError::ApplyFailure(-1));
        }
        self.log.borrow_mut().push(Event::Pwm(period_ns, pulse_ns));
        Ok(())
    }
}

struct LoggingLed {
    log: Log,
}

impl BlinkOutput for LoggingLed {
    fn toggle(&mut self) -> Result<(), BlinkyError> {
        self.log.borrow_mut().push(Event::Toggle);
        Ok(())
    }
}

struct LoggingSleeper {
    log: Log,
}

impl Sleeper for LoggingSleeper {
    fn sleep_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Sleep(ms));
    }
}

fn make_demo(period_ns: u32, fail_pwm: bool) -> (BlinkyDemo<LoggingPwm, LoggingLed, LoggingSleeper>, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let demo = BlinkyDemo::new(
        LoggingPwm { log: log.clone(), fail: fail_pwm },
        LoggingLed { log: log.clone() },
        LoggingSleeper { log: log.clone() },
        period_ns,
    );
    (demo, log)
}

#[test]
fn test_cycle_runs_brightness_then_blink() {
    let (mut demo, log) = make_demo(1000, false);

    demo.run_cycle().unwrap();

    let events = log.borrow();
    let events: &[Event] = &events;

    // Three brightness phases, each applied then held for 5 s.
    assert_eq!(
        events[..6],
        [
            Event::Pwm(999, 999),
            Event::Sleep(5000),
            Event::Pwm(10, 1),
            Event::Sleep(5000),
            Event::Pwm(1, 0),
            Event::Sleep(5000),
        ]
    );

    // Then the full blink window: 55 toggle/sleep pairs.
    let blink = &events[6..];
    assert_eq!(blink.len(), 110);
    for pair in blink.chunks(2) {
        assert_eq!(pair[0], Event::Toggle);
        assert!(matches!(pair[1], Event::Sleep(100) | Event::Sleep(1000)));
    }

    // No PWM traffic overlaps the blink phase.
    assert!(blink.iter().all(|e| !matches!(e, Event::Pwm(_, _))));
}

#[test]
fn test_cycles_repeat_identically() {
    let (mut demo, log) = make_demo(1000, false);

    demo.run_cycle().unwrap();
    let first: Vec<Event> = log.borrow().clone();

    log.borrow_mut().clear();
    demo.run_cycle().unwrap();

    assert_eq!(*log.borrow(), first);
}

#[test]
fn test_apply_failure_stops_the_cycle() {
    let (mut demo, log) = make_demo(1000, true);

    let err = demo.run_cycle().unwrap_err();

    assert_eq!(err, BlinkyError::ApplyFailure(-1));
    // Nothing ran: no holds, no toggles.
    assert!(log.borrow().is_empty());
}

#[test]
fn test_run_returns_the_fatal_error() {
    let (mut demo, _log) = make_demo(1000, true);

    assert_eq!(demo.run(), BlinkyError::ApplyFailure(-1));
}
