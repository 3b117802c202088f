use std::io;
use std::sync::{Arc, Mutex};

use static_fsm::{State, fsm};
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[derive(Default)]
struct Off;
#[derive(Default)]
struct On;

struct Press;
struct Jiggle;

#[fsm(initial = Off, name = "lamp")]
#[transition(from = Off, event = Press, to = On)]
#[transition(from = On, event = Jiggle, to = Off, guard = loose)]
struct Lamp;

impl State<Lamp> for Off {}
impl State<Lamp> for On {}

fn loose(_event: &Jiggle, _lamp: &Lamp) -> bool {
    false
}

#[test]
fn test_dispatch_is_logged() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut lamp = LampMachine::new(Lamp);
        assert!(lamp.process(Press).is_done());
        assert!(lamp.process(Jiggle).is_refused());
    });

    let text = captured.text();
    assert!(text.contains("state machine started"), "{text}");
    assert!(text.contains("event processed"), "{text}");
    assert!(text.contains("event refused"), "{text}");
    assert!(text.contains("guard rejected"), "{text}");
    assert!(text.contains("state machine stopped"), "{text}");
    assert!(text.contains("lamp"), "{text}");
}
