use chacha_stream::range::{RangeError, UniformRange};
use chacha_stream::rng::{ChaChaRng, Rounds};

fn seed42() -> ChaChaRng {
    ChaChaRng::from_u64_seed(42, Rounds::R20)
}

#[test]
fn test_seed42_first_words_are_pinned() {
    let mut rng = seed42();

    assert_eq!(rng.next_u32(), 0xd7b54878);
    assert_eq!(rng.next_u32(), 0x8398bc11);
}

#[test]
fn test_gen_range_u64_is_pinned() {
    let mut rng = seed42();
    let values: Vec<u64> = (0..5).map(|_| rng.gen_range_u64(0, 100).unwrap()).collect();

    assert_eq!(values, [51, 41, 9, 16, 16]);
}

#[test]
fn test_gen_range_u64_wide_range_is_pinned() {
    let mut rng = seed42();
    let values: Vec<u64> = (0..3)
        .map(|_| rng.gen_range_u64(1000, 1_000_000_000_000).unwrap())
        .collect();

    assert_eq!(values, [514049296250, 410198806824, 97813867236]);
}

#[test]
fn test_gen_range_u64_full_domain_returns_raw_words() {
    let mut rng = seed42();

    assert_eq!(rng.gen_range(0..=u64::MAX), Ok(9482535800248027256));
    assert_eq!(rng.gen_range(0..=u64::MAX), Ok(7566832397956113305));
}

#[test]
fn test_gen_range_u64_stays_in_bounds() {
    let mut rng = seed42();

    for (low, high) in [(0u64, 1u64), (5, 6), (10, 17), (0, 3), (u64::MAX - 9, u64::MAX)] {
        for _ in 0..500 {
            let value = rng.gen_range_u64(low, high).unwrap();
            assert!(value >= low && value < high);
        }
    }
}

#[test]
fn test_gen_range_u32_rejection_is_pinned() {
    let mut rng = seed42();
    let values: Vec<u32> = (0..6).map(|_| rng.gen_range_u32(0, 10).unwrap()).collect();

    assert_eq!(values, [8, 3, 3, 7, 9, 7]);
}

#[test]
fn test_gen_range_u32_power_of_two_masks() {
    let mut rng = seed42();
    let values: Vec<u32> = (0..4).map(|_| rng.gen_range_u32(100, 164).unwrap()).collect();

    assert_eq!(values, [156, 117, 125, 157]);
    // One word per sample.
    assert_eq!(rng.get_word_pos(), 4);
}

#[test]
fn test_gen_range_i32_is_pinned() {
    let mut rng = seed42();
    let values: Vec<i32> = (0..6).map(|_| rng.gen_range_i32(-5, 5).unwrap()).collect();

    assert_eq!(values, [3, -2, -2, 2, 4, 2]);
}

#[test]
fn test_gen_range_i32_spanning_full_width() {
    let mut rng = seed42();

    for _ in 0..200 {
        assert!(rng.gen_range(i32::MIN..=i32::MAX).is_ok());

        let bounded = rng.gen_range_i32(i32::MIN, i32::MIN + 3).unwrap();
        assert!((i32::MIN..i32::MIN + 3).contains(&bounded));
    }
}

#[test]
fn test_gen_range_i64_is_pinned() {
    let mut rng = seed42();
    let values: Vec<i64> = (0..4).map(|_| rng.gen_range_i64(-1000, 1000).unwrap()).collect();

    assert_eq!(values, [28, -180, -805, -666]);
}

#[test]
fn test_gen_range_i64_extreme_bounds() {
    let mut rng = seed42();

    for _ in 0..200 {
        let value = rng.gen_range_i64(i64::MIN, i64::MAX).unwrap();
        assert!(value < i64::MAX);

        let inclusive = rng.gen_range(-3i64..=3).unwrap();
        assert!((-3..=3).contains(&inclusive));
    }
}

#[test]
fn test_gen_range_f64_is_pinned() {
    let mut rng = seed42();
    let values: Vec<f64> = (0..3).map(|_| rng.gen_range_f64(-2.0, 3.0).unwrap()).collect();

    assert_eq!(values, [0.5702464788251205, 0.05099403117442902, -1.510930668327806]);
}

#[test]
fn test_gen_range_f64_draws_one_word_per_call() {
    let mut rng = ChaChaRng::from_u64_seed(1, Rounds::R8);
    let (low, high) = (1.0, 1.0 + f64::EPSILON);

    for i in 1..=20_000u128 {
        let value = rng.gen_range_f64(low, high).unwrap();
        assert!(value >= low && value < high);
        assert_eq!(rng.get_word_pos(), 2 * i);
    }
}

#[test]
fn test_gen_range_f64_accepts_widths_beyond_f64_max() {
    let mut rng = seed42();

    for i in 1..=1000u128 {
        let value = rng.gen_range_f64(-f64::MAX, f64::MAX).unwrap();
        assert!(value.is_finite());
        assert!(value < f64::MAX);
        assert_eq!(rng.get_word_pos(), 2 * i);
    }

    let value = rng.gen_range_f64(f64::MIN, 0.0).unwrap();
    assert!((f64::MIN..0.0).contains(&value));
}

#[test]
fn test_gen_unit_f64_in_half_open_interval() {
    let mut rng = seed42();

    for _ in 0..1000 {
        let value = rng.gen_unit_f64();
        assert!((0.0..1.0).contains(&value));
    }
}

#[test]
fn test_rejects_empty_ranges_without_consuming() {
    let mut rng = seed42();

    assert_eq!(rng.gen_range_u32(5, 5), Err(RangeError::EmptyRange));
    assert_eq!(rng.gen_range_i32(3, -3), Err(RangeError::EmptyRange));
    assert_eq!(rng.gen_range_u64(9, 1), Err(RangeError::EmptyRange));
    assert_eq!(rng.gen_range_i64(0, 0), Err(RangeError::EmptyRange));
    assert_eq!(rng.gen_range_f64(1.0, 1.0), Err(RangeError::EmptyRange));
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = 4u64..=3;
    assert_eq!(rng.gen_range(reversed), Err(RangeError::EmptyRange));

    assert_eq!(rng.get_word_pos(), 0);
}

#[test]
fn test_rejects_non_finite_float_bounds() {
    let mut rng = seed42();

    assert_eq!(rng.gen_range_f64(f64::NAN, 1.0), Err(RangeError::NonFinite));
    assert_eq!(rng.gen_range_f64(0.0, f64::INFINITY), Err(RangeError::NonFinite));
    assert_eq!(rng.gen_range_f64(f64::NEG_INFINITY, 0.0), Err(RangeError::NonFinite));

    assert_eq!(rng.get_word_pos(), 0);
}

#[test]
fn test_inclusive_single_value() {
    let mut rng = seed42();

    assert_eq!(rng.gen_range(7u32..=7), Ok(7));
    assert_eq!(rng.gen_range(-7i32..=-7), Ok(-7));
    assert_eq!(rng.gen_range(7u64..=7), Ok(7));
}

#[test]
fn test_works_through_dyn_rng_core() {
    let mut rng = seed42();
    let dynamic: &mut dyn rand_core::RngCore = &mut rng;

    assert_eq!(dynamic.gen_range_u64(0, 100), Ok(51));
}
