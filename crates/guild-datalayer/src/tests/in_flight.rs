use crate::InFlight;

#[test]
fn given_idle_slot_when_begun_then_busy_until_guard_dropped() {
    let in_flight = InFlight::new();
    assert!(!in_flight.is_busy());

    let guard = in_flight.try_begin();
    assert!(guard.is_some());
    assert!(in_flight.is_busy());

    drop(guard);
    assert!(!in_flight.is_busy());
}

#[test]
fn given_busy_slot_when_begun_again_then_refused() {
    let in_flight = InFlight::new();
    let _guard = in_flight.try_begin().unwrap();

    assert!(in_flight.try_begin().is_none());
}

#[test]
fn given_released_slot_when_begun_again_then_granted() {
    let in_flight = InFlight::new();
    drop(in_flight.try_begin());

    assert!(in_flight.try_begin().is_some());
}
