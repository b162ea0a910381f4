// Integration tests for util/clamped.rs — range-limited option values

use ktxapp::util::Clamped;

#[test]
fn starts_at_default() {
    let c = Clamped::new(64, 1, 1024);
    assert_eq!(c.get(), 64);
    assert_eq!(c.default_value(), 64);
    assert_eq!((c.min(), c.max()), (1, 1024));
}

#[test]
fn set_clamps_both_ends() {
    let mut c = Clamped::new(64, 1, 1024);
    assert_eq!(c.set(0), 1);
    assert_eq!(c.get(), 1);
    assert_eq!(c.set(5000), 1024);
    assert_eq!(c.set(256), 256);
}

#[test]
fn clear_restores_default() {
    let mut c = Clamped::new(0.5f32, 0.0, 1.0);
    c.set(0.9);
    c.clear();
    assert_eq!(c.get(), 0.5);
}

#[test]
fn in_range_is_inclusive() {
    let c = Clamped::new(2u8, 1, 4);
    assert!(c.in_range(1));
    assert!(c.in_range(4));
    assert!(!c.in_range(0));
    assert!(!c.in_range(5));
}
