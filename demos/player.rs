//! Example: media player with event-aware hooks and guard combinators.

use static_fsm::{EventUnion, State, and, fsm, or};
use tracing_subscriber::prelude::*;

#[derive(Debug, Default)]
pub struct Stopped;

#[derive(Debug, Default)]
pub struct Playing {
    pub position: u32,
}

#[derive(Debug, Default)]
pub struct Paused {
    pub position: u32,
}

#[derive(Debug)]
pub struct Play {
    pub track: String,
}

#[derive(Debug)]
pub struct Pause;
#[derive(Debug)]
pub struct Resume;
#[derive(Debug)]
pub struct Stop;
#[derive(Debug)]
pub struct Tick;

#[fsm(initial = Stopped, machine = Player, name = "player")]
#[transition(from = Stopped, event = Play, to = Playing, action = load, guard = and((has_power, known_track)))]
#[transition(from = Playing, event = Pause, to = Paused, action = hold)]
#[transition(from = Paused, event = Resume, to = Playing, action = unhold)]
#[transition(from = Playing, event = Stop, to = Stopped, guard = or((is_admin, finished)))]
#[transition(from = Paused, event = Stop, to = Stopped)]
#[state(name = Playing, internal(event = Tick, action = advance))]
#[derive(Debug)]
pub struct Deck {
    pub powered: bool,
    pub admin: bool,
    pub library: Vec<String>,
    pub track: Option<String>,
    pub length: u32,
}

impl State<Deck> for Stopped {
    fn on_entry(&mut self, deck: &mut Deck) {
        deck.track = None;
    }
}

impl State<Deck> for Playing {
    fn on_entry_with(&mut self, event: &DeckEvent, deck: &mut Deck) {
        tracing::info!(via = event.name(), track = ?deck.track, "playing");
    }
}

impl State<Deck> for Paused {
    fn on_exit(&mut self, _deck: &mut Deck) {
        tracing::info!(position = self.position, "leaving pause");
    }
}

fn has_power(_play: &Play, deck: &Deck) -> bool {
    deck.powered
}

fn known_track(play: &Play, deck: &Deck) -> bool {
    deck.library.contains(&play.track)
}

fn is_admin(_stop: &Stop, deck: &Deck) -> bool {
    deck.admin
}

fn finished(_stop: &Stop, deck: &Deck, playing: &Playing) -> bool {
    playing.position >= deck.length
}

fn load(play: &Play, deck: &mut Deck) {
    deck.track = Some(play.track.clone());
}

fn hold(_pause: &Pause, _deck: &mut Deck, playing: &mut Playing, paused: &mut Paused) {
    paused.position = playing.position;
}

fn unhold(_resume: &Resume, _deck: &mut Deck, paused: &mut Paused, playing: &mut Playing) {
    playing.position = paused.position;
}

fn advance(_tick: &Tick, _deck: &mut Deck, playing: &mut Playing) {
    playing.position += 1;
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut player = Player::new(Deck {
        powered: true,
        admin: false,
        library: vec!["intro".to_owned(), "outro".to_owned()],
        track: None,
        length: 3,
    });

    for event in [
        Play {
            track: "missing".to_owned(),
        },
        Play {
            track: "intro".to_owned(),
        },
    ] {
        if let Err(refused) = player.try_process(event) {
            tracing::warn!(%refused);
        }
    }

    let _ = player.process(Tick);
    let _ = player.process(Pause);
    let _ = player.process(Tick);
    let _ = player.process(Resume);

    while player.try_process(Stop).is_err() {
        let _ = player.process(Tick);
    }

    println!("stopped: {}", player.is_in_state::<Stopped>());
}
