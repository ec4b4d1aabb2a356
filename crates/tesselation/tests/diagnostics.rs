//! The N-ality-0 warning is a structured `tracing` event, not console output.

use std::io;
use std::sync::{Arc, Mutex};

use tesselation::{fj, kmin, DynkinLabel};
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink for a fmt subscriber.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn captured<T>(f: impl FnOnce() -> T) -> (T, String) {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, capture.contents())
}

#[test]
fn nality_zero_emits_warning() {
    let adj = DynkinLabel::adjoint(3).unwrap();
    let (k, log) = captured(|| kmin(&adj).unwrap());
    assert_eq!(k, 1);
    assert!(log.contains("WARN"), "{log}");
    assert!(log.contains("N-ality 0"), "{log}");
    assert!(log.contains("[1, 1]"), "{log}");
}

#[test]
fn fj_on_trivial_label_warns_once() {
    let trivial = DynkinLabel::trivial(5).unwrap();
    let (f, log) = captured(|| fj(&trivial).unwrap());
    assert_eq!(f, trivial);
    assert_eq!(log.matches("WARN").count(), 1, "{log}");
}

#[test]
fn nonzero_nality_is_silent_at_warn() {
    let triplet = DynkinLabel::fundamental(3, 1).unwrap();
    let (k, log) = captured(|| kmin(&triplet).unwrap());
    assert_eq!(k, 0);
    assert!(log.is_empty(), "{log}");
}
