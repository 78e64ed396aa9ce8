use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn unit_draws_stay_in_half_open_interval() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_f64_01();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn ranges_respect_bounds() {
    let mut rng = Rng64::new(99);
    for _ in 0..1000 {
        let v = rng.range(800.0, 1000.0);
        assert!((800.0..1000.0).contains(&v));
        let s = rng.symmetric(0.15);
        assert!((-0.15..0.15).contains(&s));
    }
}

#[test]
fn chance_extremes() {
    let mut rng = Rng64::new(1);
    for _ in 0..100 {
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
    }
}
