//! Sampling properties of the public generators.

use random_core::{Arg, Pool, PoolId, Random, StringArgs};

const SAMPLES: usize = 10_000;

#[test]
fn test_natural_and_integer_stay_in_bounds() {
    let mut random = Random::new();
    let cases = [(0, 0), (0, 1), (3, 9), (-20, -10), (-5, 5), (0, 1 << 40)];

    for (min, max) in cases {
        for _ in 0..SAMPLES {
            let n = random.natural(min, max);
            assert!((min..=max).contains(&n), "natural({min}, {max}) = {n}");

            let i = random.integer(min, max);
            assert!((min..=max).contains(&i), "integer({min}, {max}) = {i}");
        }
    }
}

#[test]
fn test_reversed_bounds_stay_in_bounds() {
    let mut random = Random::new();

    for _ in 0..SAMPLES {
        let n = random.natural(10, 2);
        assert!((2..=10).contains(&n));
    }
}

#[test]
fn test_endpoints_have_half_weight() {
    // round(u * 2): 0 for u < 0.25, 1 for u in [0.25, 0.75), 2 above.
    let mut random = Random::seeded(42);
    let mut counts = [0usize; 3];

    for _ in 0..SAMPLES {
        counts[random.natural(0, 2) as usize] += 1;
    }

    assert!(counts[1] > counts[0] + counts[0] / 2);
    assert!(counts[1] > counts[2] + counts[2] / 2);
}

#[test]
fn test_float_exact_fraction_digits() {
    let mut random = Random::new();

    for _ in 0..SAMPLES {
        let value = random.float(0, 0, 5, 5);
        let shown = value.to_string();
        let (integral, fraction) = shown.split_once('.').expect("fractional part");
        assert_eq!(integral, "0");
        assert_eq!(fraction.len(), 5, "{shown}");
        assert_ne!(fraction.chars().last(), Some('0'), "{shown}");
    }
}

#[test]
fn test_character_pools() {
    let mut random = Random::new();
    let number = Pool::resolve("number").unwrap();
    let unknown = Pool::resolve("unknownpool").unwrap();

    for _ in 0..SAMPLES {
        assert!("0123456789".contains(random.character(&number)));
        assert!("unknownpool".contains(random.character(&unknown)));
    }
}

#[test]
fn test_default_character_pool_covers_all_classes() {
    let mut random = Random::seeded(7);
    let pool = Pool::default();
    let drawn: Vec<char> = (0..SAMPLES).map(|_| random.character(&pool)).collect();

    assert!(drawn.iter().any(|c| c.is_ascii_lowercase()));
    assert!(drawn.iter().any(|c| c.is_ascii_uppercase()));
    assert!(drawn.iter().any(|c| c.is_ascii_digit()));
    assert!(drawn.iter().any(|c| Pool::named(PoolId::Symbol).contains(*c)));
}

#[test]
fn test_string_number_pool_length() {
    let s = random_core::string_from_args(&["number".into(), 4.into()]).unwrap();
    assert_eq!(s.len(), 4);
    assert!(s.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_two_numbers_mean_length_bounds() {
    let mut random = Random::new();
    let full = Pool::default();

    for _ in 0..1000 {
        let s = random
            .string_from_args(&[Arg::Number(2), Arg::Number(5)])
            .unwrap();
        assert!((2..=5).contains(&s.chars().count()), "{s}");
        assert!(s.chars().all(|c| full.contains(c)));
    }
}

#[test]
fn test_typed_string_args() {
    let s = random_core::string(&StringArgs::PoolBetween {
        pool: Pool::named(PoolId::Alpha),
        min: 10,
        max: 10,
    });
    assert_eq!(s.len(), 10);
    assert!(s.chars().all(|c| c.is_ascii_alphabetic()));
}

#[test]
fn test_ranges() {
    assert_eq!(random_core::generate_range_from_args(&[5]), vec![0, 1, 2, 3, 4]);
    assert_eq!(random_core::generate_range_from_args(&[2, 5]), vec![2, 3, 4]);
    assert_eq!(random_core::range(0, 10, 3), vec![0, 3, 6, 9]);
    assert_eq!(random_core::generate_range_from_args(&[5, 2]), Vec::<i64>::new());
}

#[test]
fn test_ip_shape() {
    for _ in 0..1000 {
        let ip = random_core::ip();
        let octets: Vec<&str> = ip.split('.').collect();
        assert_eq!(octets.len(), 4, "{ip}");
        for octet in octets {
            assert!((1..=3).contains(&octet.len()), "{ip}");
            assert!(octet.chars().all(|c| c.is_ascii_digit()), "{ip}");
            assert!(octet.parse::<u16>().unwrap() <= 255, "{ip}");
        }
    }
}

#[test]
fn test_unseeded_calls_differ() {
    let first = random_core::string_from_args(&[Arg::Number(16)]).unwrap();
    let differs = (0..5).any(|_| random_core::string_from_args(&[Arg::Number(16)]).unwrap() != first);
    assert!(differs);
}
