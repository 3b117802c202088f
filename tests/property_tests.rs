//! Property-based tests for generated machines.
//!
//! A traffic light is driven with random event sequences and checked
//! against a plain `match` model of the same table.

use proptest::prelude::*;
use static_fsm::{Outcome, State, fsm};

#[derive(Default)]
struct Red;
#[derive(Default)]
struct Green;
#[derive(Default)]
struct Yellow;

struct Timer;
struct Emergency;
struct Ping;

#[fsm(initial = Red, machine = Light)]
#[transition(from = Red, event = Timer, to = Green)]
#[transition(from = Green, event = Timer, to = Yellow)]
#[transition(from = Yellow, event = Timer, to = Red)]
#[transition(from = Green, event = Emergency, to = Red, guard = armed)]
#[transition(from = Yellow, event = Emergency, to = Red, guard = armed)]
#[state(name = Red, internal(event = Ping, action = count_ping))]
#[state(name = Green, internal(event = Ping, action = count_ping))]
#[derive(Default)]
struct Signal {
    armed: bool,
    pings: u32,
}

impl State<Signal> for Red {}
impl State<Signal> for Green {}
impl State<Signal> for Yellow {}

fn armed(_event: &Emergency, signal: &Signal) -> bool {
    signal.armed
}

fn count_ping(_event: &Ping, signal: &mut Signal) {
    signal.pings += 1;
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Timer,
    Emergency,
    Ping,
    Arm(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Model {
    Red,
    Green,
    Yellow,
}

impl Model {
    fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
        }
    }

    /// The next state and whether the step counts a ping, or `None` when
    /// the step is refused.
    fn step(self, step: Step, armed: bool) -> Option<(Self, bool)> {
        match (self, step) {
            (Self::Red, Step::Timer) => Some((Self::Green, false)),
            (Self::Green, Step::Timer) => Some((Self::Yellow, false)),
            (Self::Yellow, Step::Timer) => Some((Self::Red, false)),
            (Self::Green | Self::Yellow, Step::Emergency) if armed => Some((Self::Red, false)),
            (Self::Red | Self::Green, Step::Ping) => Some((self, true)),
            _ => None,
        }
    }
}

fn submit(light: &mut Light, step: Step) -> Outcome {
    match step {
        Step::Timer => light.process(Timer),
        Step::Emergency => light.process(Emergency),
        Step::Ping => light.process(Ping),
        Step::Arm(armed) => {
            light.context_mut().armed = armed;
            Outcome::Done
        }
    }
}

fn arbitrary_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Timer),
        Just(Step::Emergency),
        Just(Step::Ping),
        any::<bool>().prop_map(Step::Arm),
    ]
}

fn in_exactly_one_state(light: &Light) -> bool {
    let flags = [
        light.is_in_state::<Red>(),
        light.is_in_state::<Green>(),
        light.is_in_state::<Yellow>(),
    ];
    flags.iter().filter(|f| **f).count() == 1
}

proptest! {
    #[test]
    fn machine_follows_model(steps in prop::collection::vec(arbitrary_step(), 0..64)) {
        let mut light = Light::new(Signal::default());
        let mut model = Model::Red;
        let mut pings = 0;

        for step in steps {
            let outcome = submit(&mut light, step);
            if let Step::Arm(_) = step {
                continue;
            }
            match model.step(step, light.context().armed) {
                Some((next, pinged)) => {
                    prop_assert_eq!(outcome, Outcome::Done);
                    model = next;
                    pings += u32::from(pinged);
                }
                None => prop_assert_eq!(outcome, Outcome::Refused),
            }
            prop_assert_eq!(light.state_name(), model.name());
            prop_assert_eq!(light.context().pings, pings);
            prop_assert!(in_exactly_one_state(&light));
        }
    }

    #[test]
    fn refusals_change_nothing(steps in prop::collection::vec(arbitrary_step(), 0..32)) {
        let mut light = Light::new(Signal::default());
        for step in steps {
            let before = (light.state_name(), light.context().pings);
            if submit(&mut light, step).is_refused() {
                prop_assert_eq!((light.state_name(), light.context().pings), before);
                prop_assert!(submit(&mut light, step).is_refused());
                prop_assert_eq!((light.state_name(), light.context().pings), before);
            }
        }
    }

    #[test]
    fn internal_transitions_keep_state(timers in 0..6usize, pings in 1..16u32) {
        let mut light = Light::new(Signal::default());
        for _ in 0..timers {
            prop_assert!(light.process(Timer).is_done());
        }
        let state = light.state_name();
        let handles_ping = light.is_in_state::<Red>() || light.is_in_state::<Green>();

        for _ in 0..pings {
            prop_assert_eq!(light.process(Ping).is_done(), handles_ping);
            prop_assert_eq!(light.state_name(), state);
        }
        let expected = if handles_ping { pings } else { 0 };
        prop_assert_eq!(light.context().pings, expected);
    }
}
