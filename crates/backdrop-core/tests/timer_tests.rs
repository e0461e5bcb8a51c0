// Virtual timer queue, completion hook and easing helpers.

use backdrop_core::easing::{count_up, ease_out_cubic, lerp, progress};
use backdrop_core::timer::{CompletionHook, TimerQueue};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn drain(q: &mut TimerQueue, until: Duration) -> Vec<backdrop_core::TimerId> {
    let mut fired = Vec::new();
    while let Some(id) = q.pop_due(until) {
        fired.push(id);
    }
    q.settle(until);
    fired
}

#[test]
fn timeout_fires_once_at_deadline() {
    let mut q = TimerQueue::new();
    let t = q.set_timeout(ms(100));
    assert!(drain(&mut q, ms(99)).is_empty());
    assert_eq!(drain(&mut q, ms(100)), vec![t]);
    assert!(drain(&mut q, ms(1000)).is_empty());
    assert!(q.is_empty());
}

#[test]
fn interval_catches_up_in_order() {
    let mut q = TimerQueue::new();
    let a = q.set_interval(ms(100));
    let b = q.set_interval(ms(150));
    let fired = drain(&mut q, ms(300));
    // a@100, b@150, a@200, a@300 and b@300 tie -> armed-first wins
    assert_eq!(fired, vec![a, b, a, a, b]);
    assert_eq!(q.now(), ms(300));
}

#[test]
fn cleared_timers_never_fire() {
    let mut q = TimerQueue::new();
    let a = q.set_interval(ms(10));
    let b = q.set_timeout(ms(20));
    assert!(q.clear(a));
    assert!(!q.clear(a));
    assert!(!q.is_pending(a));
    assert_eq!(drain(&mut q, ms(100)), vec![b]);
    q.set_interval(ms(5));
    q.clear_all();
    assert!(drain(&mut q, ms(1000)).is_empty());
}

#[test]
fn timers_armed_mid_drain_start_from_fire_time() {
    let mut q = TimerQueue::new();
    let first = q.set_timeout(ms(100));
    assert_eq!(q.pop_due(ms(1000)), Some(first));
    let second = q.set_timeout(ms(50));
    assert_eq!(q.next_due(), Some((second, ms(150))));
}

#[test]
fn zero_interval_does_not_spin() {
    let mut q = TimerQueue::new();
    q.set_interval(Duration::ZERO);
    assert_eq!(drain(&mut q, ms(10)).len(), 10);
}

#[test]
fn time_never_runs_backwards() {
    let mut q = TimerQueue::new();
    q.settle(ms(500));
    q.settle(ms(100));
    assert_eq!(q.now(), ms(500));
}

#[test]
fn completion_hook_runs_at_most_once() {
    let n = Rc::new(Cell::new(0));
    let c = n.clone();
    let mut hook = CompletionHook::new(move || c.set(c.get() + 1));
    assert!(hook.is_armed());
    assert!(hook.fire());
    assert!(!hook.fire());
    assert_eq!(n.get(), 1);

    let m = Rc::new(Cell::new(0));
    let c = m.clone();
    let mut hook = CompletionHook::new(move || c.set(1));
    hook.disarm();
    assert!(!hook.fire());
    assert_eq!(m.get(), 0);
    assert_eq!(format!("{hook:?}"), "CompletionHook(\"spent\")");
}

#[test]
fn easing_endpoints() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
    assert!(ease_out_cubic(0.5) > 0.5);
    assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
    assert_eq!(lerp(3.0, 7.0, 1.0), 7.0);
    assert_eq!(progress(ms(5), Duration::ZERO), 1.0);
}

#[test]
fn count_up_eases_to_target() {
    let d = ms(1800);
    assert_eq!(count_up(50, Duration::ZERO, d), 0);
    assert_eq!(count_up(50, d, d), 50);
    assert_eq!(count_up(50, ms(10_000), d), 50);
    assert_eq!(count_up(7, ms(1), Duration::ZERO), 7);
    let mut prev = 0;
    for t in (0..=1800).step_by(60) {
        let v = count_up(1000, ms(t), d);
        assert!(v >= prev);
        prev = v;
    }
}
