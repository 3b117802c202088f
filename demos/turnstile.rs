//! Example: coin-operated turnstile.
//!
//! Run with `RUST_LOG=debug` to see every dispatch.

use static_fsm::{State, fsm, not};
use tracing_subscriber::prelude::*;

#[derive(Debug, Default)]
pub struct Locked;

#[derive(Debug, Default)]
pub struct Unlocked {
    pub paid: u32,
}

#[derive(Debug)]
pub struct Coin {
    pub cents: u32,
}

#[derive(Debug)]
pub struct Push;

#[fsm(initial = Locked)]
#[transition(from = Locked, event = Coin, to = Unlocked, action = accept, guard = not(is_slug))]
#[transition(from = Unlocked, event = Push, to = Locked, action = pass)]
#[state(name = Locked, internal(event = Push, action = alarm))]
#[state(name = Unlocked, internal(event = Coin, action = refund))]
#[derive(Debug, Default)]
pub struct Turnstile {
    pub takings: u32,
    pub passages: u32,
    pub alarms: u32,
}

impl State<Turnstile> for Locked {
    fn on_entry(&mut self, _turnstile: &mut Turnstile) {
        tracing::info!("barrier closed");
    }
}

impl State<Turnstile> for Unlocked {
    fn on_entry(&mut self, _turnstile: &mut Turnstile) {
        tracing::info!("barrier open");
    }
}

fn is_slug(coin: &Coin, _turnstile: &Turnstile) -> bool {
    coin.cents == 0
}

fn accept(coin: &Coin, turnstile: &mut Turnstile, _locked: &mut Locked, unlocked: &mut Unlocked) {
    turnstile.takings += coin.cents;
    unlocked.paid = coin.cents;
}

fn pass(_push: &Push, turnstile: &mut Turnstile) {
    turnstile.passages += 1;
}

fn alarm(_push: &Push, turnstile: &mut Turnstile) {
    turnstile.alarms += 1;
    tracing::warn!(alarms = turnstile.alarms, "push on a locked barrier");
}

fn refund(coin: &Coin, _turnstile: &mut Turnstile, unlocked: &mut Unlocked) {
    tracing::info!(cents = coin.cents, paid = unlocked.paid, "already open, coin returned");
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut gate = TurnstileMachine::new(Turnstile::default());

    let _ = gate.process(Push);
    let _ = gate.process(Coin { cents: 0 });
    let _ = gate.process(Coin { cents: 50 });
    let _ = gate.process(Coin { cents: 50 });
    let _ = gate.process(Push);

    if let Err(refused) = gate.try_process(Coin { cents: 0 }) {
        tracing::info!(%refused, "slug rejected");
    }

    println!("{:?} in state {}", gate.context(), gate.state_name());
}
