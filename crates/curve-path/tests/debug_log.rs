// File: crates/curve-path/tests/debug_log.rs
// Purpose: Debug mode reports each subdivision with its interval bounds through `log`.
// Notes:
// - Installs a process-wide capturing logger; records are keyed by thread so the
//   tests in this binary can run in parallel.

use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use curve_path::{build_quadratic_function_path, Point};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct Capture {
    records: Mutex<Vec<(ThreadId, Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((thread::current().id(), record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture { records: Mutex::new(Vec::new()) };
static INIT: Once = Once::new();

/// Run `f` and return the (level, message) records it logged on this thread.
fn captured(f: impl FnOnce()) -> Vec<(Level, String)> {
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).expect("install capturing logger");
        log::set_max_level(LevelFilter::Trace);
    });
    let me = thread::current().id();
    CAPTURE.records.lock().expect("lock").retain(|(id, _, _)| *id != me);
    f();
    CAPTURE
        .records
        .lock()
        .expect("lock")
        .iter()
        .filter(|(id, _, _)| *id == me)
        .map(|(_, level, msg)| (*level, msg.clone()))
        .collect()
}

// x^3 on [-1, 1] with two samples: equal end tangents (3, 3) force exactly one
// bisection at 0, after which both halves solve.
fn build_cubic(debug: bool) {
    let path = build_quadratic_function_path(
        |x| x * x * x,
        |x| 3.0 * x * x,
        -1.0,
        1.0,
        2,
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        debug,
    );
    assert_eq!(path.segment_count(), 2);
}

fn subdivision_reports(records: &[(Level, String)]) -> Vec<(Level, &str)> {
    records
        .iter()
        .filter(|(_, msg)| msg.starts_with("dividing between"))
        .map(|(level, msg)| (*level, msg.as_str()))
        .collect()
}

#[test]
fn debug_mode_reports_each_subdivision_at_debug_level() {
    let records = captured(|| build_cubic(true));
    let reports = subdivision_reports(&records);
    assert_eq!(reports.len(), 1, "{:?}", records);
    let (level, msg) = reports[0];
    assert_eq!(level, Level::Debug);
    assert!(msg.starts_with("dividing between -1 and 1"), "{}", msg);
}

#[test]
fn quiet_mode_keeps_subdivisions_below_debug_level() {
    let records = captured(|| build_cubic(false));
    let reports = subdivision_reports(&records);
    assert_eq!(reports.len(), 1, "{:?}", records);
    assert!(reports.iter().all(|(level, _)| *level == Level::Trace));
    assert!(!records.iter().any(|(level, _)| *level <= Level::Debug), "{:?}", records);
}
