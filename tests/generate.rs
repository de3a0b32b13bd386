use std::collections::HashSet;

use passgen::entropy::{RandomSource, RngSource};
use passgen::pass::charset::{self, LOWERCASE, NUMBERS, UPPERCASE};
use passgen::pass::{GenerateError, GenerationConfig, generate, generate_batch};

struct ZeroSource;

impl RandomSource for ZeroSource {
    fn below(&mut self, _upper: usize) -> usize {
        0
    }
}

fn lowercase_only() -> GenerationConfig {
    GenerationConfig {
        use_numbers: false,
        allow_capital_letters: false,
        use_special_chars: false,
        ensure_one_of_each: false,
        ..Default::default()
    }
}

#[test]
fn length_stays_in_range_and_covers_it() {
    let config = GenerationConfig {
        min_length: 6,
        max_length: 11,
        ..Default::default()
    };
    let mut rng = RngSource::seeded(2024);
    let mut seen = HashSet::new();

    for _ in 0..600 {
        let len = generate(&config, &mut rng).unwrap().chars().count();
        assert!((6..=11).contains(&len), "length {len} out of range");
        seen.insert(len);
    }
    assert_eq!(seen.len(), 6);
}

#[test]
fn every_char_is_from_the_pool() {
    let config = GenerationConfig {
        special_chars_list: "!?~".into(),
        exclude_chars: "lI1O0".into(),
        no_consecutive_repeats: true,
        ..Default::default()
    };
    let pool: HashSet<char> = charset::build(&config).into_iter().collect();
    let mut rng = RngSource::seeded(11);

    for pass in generate_batch(&config, 200, &mut rng).unwrap() {
        assert!(pass.chars().all(|c| pool.contains(&c)), "{pass} left the pool");
    }
}

#[test]
fn excluded_chars_never_appear() {
    let config = GenerationConfig {
        exclude_chars: "aeiouAEIOU013!".into(),
        ..Default::default()
    }
    .with_length(40);
    let mut rng = RngSource::seeded(8);

    for pass in generate_batch(&config, 100, &mut rng).unwrap() {
        assert!(!pass.chars().any(|c| config.exclude_chars.contains(c)));
    }
}

#[test]
fn excluding_every_lowercase_letter_is_empty_pool() {
    let config = GenerationConfig {
        exclude_chars: LOWERCASE.into(),
        ..lowercase_only()
    };
    for seed in 0..10 {
        assert_eq!(
            generate(&config, &mut RngSource::seeded(seed)),
            Err(GenerateError::EmptyPool)
        );
    }
}

#[test]
fn one_of_each_enabled_class_is_present() {
    let config = GenerationConfig {
        special_chars_list: "#%".into(),
        exclude_chars: "0123456".into(),
        ensure_one_of_each: true,
        ..Default::default()
    }
    .with_length(4);
    let mut rng = RngSource::seeded(77);

    for pass in generate_batch(&config, 300, &mut rng).unwrap() {
        assert!(pass.chars().any(|c| UPPERCASE.contains(c)), "{pass}: no uppercase");
        assert!(pass.chars().any(|c| "789".contains(c)), "{pass}: no digit");
        assert!(pass.chars().any(|c| "#%".contains(c)), "{pass}: no special");
    }
}

#[test]
fn fully_excluded_specials_still_generate() {
    let config = GenerationConfig {
        use_special_chars: true,
        special_chars_list: "!@#".into(),
        exclude_chars: "!@#".into(),
        ensure_one_of_each: true,
        ..Default::default()
    }
    .with_length(10);
    let mut rng = RngSource::seeded(4);

    for pass in generate_batch(&config, 50, &mut rng).unwrap() {
        assert_eq!(pass.chars().count(), 10);
        assert!(!pass.contains(['!', '@', '#']));
        assert!(pass.chars().any(|c| NUMBERS.contains(c)));
    }
}

#[test]
fn same_seed_same_passwords() {
    let config = GenerationConfig::default();
    let first = generate_batch(&config, 20, &mut RngSource::seeded(123)).unwrap();
    let second = generate_batch(&config, 20, &mut RngSource::seeded(123)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn constant_source_golden_output() {
    let config = GenerationConfig {
        use_numbers: true,
        ensure_one_of_each: true,
        ..lowercase_only()
    }
    .with_length(8);
    assert_eq!(generate(&config, &mut ZeroSource).unwrap(), "aaaaaaa0");
}

#[test]
fn shuffle_may_leave_adjacent_repeats() {
    // Two-letter pool with repeats banned: the fill alternates, the final
    // shuffle is free to put equal letters side by side.
    let config = GenerationConfig {
        exclude_chars: "cdefghijklmnopqrstuvwxyz".into(),
        no_consecutive_repeats: true,
        ..lowercase_only()
    }
    .with_length(12);
    let mut rng = RngSource::seeded(31);

    let found = (0..200).any(|_| {
        let pass: Vec<char> = generate(&config, &mut rng).unwrap().chars().collect();
        pass.windows(2).any(|w| w[0] == w[1])
    });
    assert!(found);
}

#[test]
fn single_char_pool_terminates_with_repeats() {
    let config = GenerationConfig {
        exclude_chars: "bcdefghijklmnopqrstuvwxyz".into(),
        no_consecutive_repeats: true,
        ..lowercase_only()
    }
    .with_length(25);
    let pass = generate(&config, &mut RngSource::seeded(1)).unwrap();
    assert_eq!(pass, "a".repeat(25));
}

#[test]
fn batches_draw_lengths_independently() {
    let config = GenerationConfig {
        min_length: 8,
        max_length: 32,
        ..Default::default()
    };
    let lengths: HashSet<usize> = generate_batch(&config, 50, &mut RngSource::seeded(5))
        .unwrap()
        .iter()
        .map(|p| p.chars().count())
        .collect();
    assert!(lengths.len() > 1);
}

#[test]
fn parallel_calls_need_no_coordination() {
    let config = GenerationConfig::default();
    let handles: Vec<_> = (0..4)
        .map(|seed| {
            let config = config.clone();
            std::thread::spawn(move || generate_batch(&config, 25, &mut RngSource::seeded(seed)))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap().len(), 25);
    }
}
