use super::*;

#[test]
fn pops_in_time_order_and_only_when_due() {
    let mut q = TimerQueue::new();
    q.schedule(300.0, "late");
    q.schedule(100.0, "early");
    q.schedule(200.0, "middle");

    assert!(q.pop_due(99.0).is_none());
    assert_eq!(q.pop_due(250.0).map(|f| f.action), Some("early"));
    assert_eq!(q.pop_due(250.0).map(|f| f.action), Some("middle"));
    assert!(q.pop_due(250.0).is_none());
    assert_eq!(q.next_fire_at(), Some(300.0));
    assert_eq!(q.pop_due(300.0).map(|f| f.action), Some("late"));
    assert!(q.is_empty());
}

#[test]
fn equal_times_are_fifo() {
    let mut q = TimerQueue::new();
    for i in 0..5 {
        q.schedule(50.0, i);
    }
    let order: Vec<i32> = std::iter::from_fn(|| q.pop_due(50.0).map(|f| f.action)).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
}

#[test]
fn cancel_removes_a_single_entry() {
    let mut q = TimerQueue::new();
    let a = q.schedule(10.0, 'a');
    q.schedule(20.0, 'b');
    assert!(q.cancel(a));
    assert!(!q.cancel(a));
    assert_eq!(q.len(), 1);
    assert_eq!(q.pop_due(100.0).map(|f| f.action), Some('b'));
}

#[test]
fn clear_drops_everything() {
    let mut q = TimerQueue::new();
    q.schedule(1.0, ());
    q.schedule(2.0, ());
    q.clear();
    assert!(q.is_empty());
    assert!(q.pop_due(f64::INFINITY).is_none());
}

#[test]
fn fired_entries_report_their_scheduled_time() {
    let mut q = TimerQueue::new();
    let id = q.schedule(40.0, "x");
    let fired = q.pop_due(1_000.0).unwrap();
    assert_eq!(fired.id, id);
    assert_eq!(fired.fire_at, 40.0);
}
