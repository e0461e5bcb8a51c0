// Boot sequencer scenarios: reveal order, deadline, exactly-once completion, teardown.

use backdrop_core::boot::{BootConfig, BootPhase, BootSequencer};
use backdrop_core::timer::CompletionHook;
use backdrop_core::ConfigError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn counting_hook() -> (CompletionHook, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    (CompletionHook::new(move || c.set(c.get() + 1)), calls)
}

fn make(config: BootConfig) -> (BootSequencer<StdRng>, Rc<Cell<u32>>) {
    let (hook, calls) = counting_hook();
    let seq = BootSequencer::new(config, StdRng::seed_from_u64(42), hook).expect("valid config");
    (seq, calls)
}

#[test]
fn default_deadline_matches_formula() {
    let cfg = BootConfig::default();
    assert_eq!(cfg.messages.len(), 6);
    assert_eq!(cfg.deadline(), ms((6 * 400u64).max(2500) + 500));
    let long = BootConfig::default().with_messages((0..10).map(|i| format!("line {i}")));
    assert_eq!(long.deadline(), ms(4500));
}

#[test]
fn lines_reveal_in_order_every_interval() {
    let cfg = BootConfig::default();
    let expected = cfg.messages.clone();
    let (mut seq, _) = make(cfg);

    seq.tick(ms(399));
    assert!(seq.state().revealed_lines.is_empty());
    seq.tick(ms(400));
    assert_eq!(seq.state().revealed_lines, expected[..1]);
    seq.tick(ms(2399));
    assert_eq!(seq.state().revealed_lines, expected[..5]);
    seq.tick(ms(2400));
    assert_eq!(seq.state().revealed_lines, expected);
    seq.tick(ms(2900));
    assert_eq!(seq.state().revealed_lines, expected, "no line revealed twice");
    assert_eq!(seq.phase(), BootPhase::Booting);
}

#[test]
fn completes_once_within_one_deadline_of_the_deadline() {
    let cfg = BootConfig::default();
    let deadline = cfg.deadline();
    let (mut seq, calls) = make(cfg);

    let mut fired_at = None;
    let mut t = 0u64;
    while t <= 10_000 {
        seq.tick(ms(t));
        if fired_at.is_none() && calls.get() == 1 {
            fired_at = Some(ms(t));
        }
        if t < deadline.as_millis() as u64 {
            assert!(!seq.state().is_complete, "complete too early at {t} ms");
        }
        t += 16;
    }
    let fired_at = fired_at.expect("completion callback never ran");
    assert!(fired_at >= deadline);
    assert!(fired_at <= deadline * 2, "fired at {fired_at:?}");
    assert_eq!(calls.get(), 1);
    assert_eq!(seq.phase(), BootPhase::Finished);
    assert!(seq.state().is_complete);

    for extra in 0..50 {
        assert!(!seq.tick(ms(10_000 + extra * 16)));
    }
    assert_eq!(calls.get(), 1, "callback fired a second time");
}

#[test]
fn complete_state_precedes_callback_by_exit_delay() {
    let (mut seq, calls) = make(BootConfig::default());
    seq.tick(ms(3000));
    assert_eq!(seq.phase(), BootPhase::Complete);
    assert!(seq.state().is_complete);
    assert_eq!(calls.get(), 0);
    seq.tick(ms(4199));
    assert_eq!(calls.get(), 0);
    seq.tick(ms(4200));
    assert_eq!(calls.get(), 1);
    assert!(seq.is_done());
}

#[test]
fn progress_climbs_in_bounded_steps_and_stops_at_100() {
    let (mut seq, _) = make(BootConfig::default());
    let mut prev = 0;
    for step in 1..=20u64 {
        seq.tick(ms(step * 300));
        let p = seq.state().progress_percent;
        assert!(p <= 100);
        assert!(p >= prev);
        if prev < 100 && !seq.state().is_complete {
            let delta = p - prev;
            assert!(delta == 100 - prev || (5..20).contains(&delta), "step {delta}");
        }
        prev = p;
    }
}

#[test]
fn progress_is_not_forced_to_100_by_default() {
    // Slow progress timer: only one increment lands before the deadline.
    let cfg = BootConfig {
        progress_interval: ms(2000),
        ..BootConfig::default()
    };
    let (mut seq, _) = make(cfg);
    seq.tick(ms(3000));
    assert!(seq.state().is_complete);
    assert!(seq.state().progress_percent < 100);
}

#[test]
fn sync_flag_snaps_progress_on_complete() {
    let cfg = BootConfig {
        progress_interval: ms(2000),
        sync_progress_on_complete: true,
        ..BootConfig::default()
    };
    let (mut seq, _) = make(cfg);
    seq.tick(ms(3000));
    assert_eq!(seq.state().progress_percent, 100);
}

#[test]
fn coarse_tick_fires_everything_in_order() {
    let cfg = BootConfig::default();
    let expected = cfg.messages.clone();
    let (mut seq, calls) = make(cfg);
    assert!(seq.tick(ms(60_000)));
    assert_eq!(seq.state().revealed_lines, expected);
    assert_eq!(calls.get(), 1);
    assert_eq!(seq.phase(), BootPhase::Finished);
}

#[test]
fn cancel_mid_sequence_freezes_state() {
    let (mut seq, calls) = make(BootConfig::default());
    seq.tick(ms(600));
    let snapshot = seq.state().clone();
    assert_eq!(snapshot.revealed_lines.len(), 1);

    seq.cancel();
    assert_eq!(seq.phase(), BootPhase::Cancelled);
    for t in (600..20_000).step_by(16) {
        assert!(!seq.tick(ms(t)));
    }
    assert_eq!(seq.state(), &snapshot);
    assert_eq!(calls.get(), 0);

    seq.cancel();
    assert_eq!(seq.phase(), BootPhase::Cancelled);
}

#[test]
fn dropping_before_completion_never_runs_callback() {
    let (mut seq, calls) = make(BootConfig::default());
    seq.tick(ms(1000));
    drop(seq);
    assert_eq!(calls.get(), 0);
}

#[test]
fn cancel_after_finish_is_a_no_op() {
    let (mut seq, calls) = make(BootConfig::default());
    seq.tick(ms(5000));
    seq.cancel();
    assert_eq!(seq.phase(), BootPhase::Finished);
    assert_eq!(calls.get(), 1);
}

#[test]
fn empty_message_list_still_completes() {
    let cfg = BootConfig::default().with_messages(Vec::<String>::new());
    assert_eq!(cfg.deadline(), ms(3000));
    let (mut seq, calls) = make(cfg);
    seq.tick(ms(5000));
    assert!(seq.state().revealed_lines.is_empty());
    assert_eq!(calls.get(), 1);
}

#[test]
fn callback_observes_sequence_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let l = log.clone();
    let hook = CompletionHook::new(move || l.borrow_mut().push("done"));
    let mut seq =
        BootSequencer::new(BootConfig::default(), StdRng::seed_from_u64(1), hook).unwrap();
    seq.tick(ms(2999));
    assert!(log.borrow().is_empty());
    seq.tick(ms(4200));
    assert_eq!(*log.borrow(), vec!["done"]);
}

#[test]
fn invalid_configs_are_rejected() {
    let zero = BootConfig {
        line_interval: Duration::ZERO,
        ..BootConfig::default()
    };
    assert_eq!(
        zero.validate(),
        Err(ConfigError::ZeroInterval {
            field: "line_interval"
        })
    );
    let bad_step = BootConfig {
        progress_step: (20, 5),
        ..BootConfig::default()
    };
    assert!(matches!(
        bad_step.validate(),
        Err(ConfigError::BadProgressStep { .. })
    ));
    assert!(BootSequencer::new(bad_step, StdRng::seed_from_u64(0), CompletionHook::default()).is_err());
}

#[test]
fn sub_millisecond_intervals_are_valid() {
    let cfg = BootConfig {
        line_interval: Duration::from_micros(500),
        progress_interval: Duration::from_micros(500),
        ..BootConfig::default()
    };
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn huge_line_interval_saturates_the_deadline() {
    let cfg = BootConfig {
        line_interval: Duration::MAX / 2,
        ..BootConfig::default()
    };
    assert_eq!(cfg.deadline(), Duration::MAX);
    let (mut seq, calls) = make(cfg);
    assert!(seq.tick(ms(10_000)));
    assert_eq!(seq.phase(), BootPhase::Booting);
    assert_eq!(calls.get(), 0);
}
