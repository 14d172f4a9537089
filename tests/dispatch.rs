use rand::prelude::*;

use sort_suite::{
    shell, sort, sort_by_name, sort_with_rng, sorted, Algorithm, GapFamily, GapSequence, Gaps,
    PivotStrategy, SortConfig, SortError, SpaceStrategy,
};
use sort_test_tools::{is_non_decreasing, is_permutation};

fn all_algorithms() -> Vec<Algorithm> {
    vec![
        Algorithm::Insertion,
        Algorithm::Bubble,
        Algorithm::Shell {
            gaps: GapSequence::Named(GapFamily::Ciura),
        },
        Algorithm::Shell {
            gaps: GapSequence::Named(GapFamily::Knuth),
        },
        Algorithm::Shell {
            gaps: GapSequence::Named(GapFamily::Shell),
        },
        Algorithm::Merge {
            space: SpaceStrategy::NotInPlace,
        },
        Algorithm::Merge {
            space: SpaceStrategy::InPlace,
        },
        Algorithm::Quick {
            pivot: PivotStrategy::First,
        },
        Algorithm::Quick {
            pivot: PivotStrategy::Middle,
        },
        Algorithm::Quick {
            pivot: PivotStrategy::Random,
        },
        Algorithm::Heap,
        Algorithm::Counting { max_range: 1 << 20 },
        Algorithm::Radix { base: 10 },
        Algorithm::Radix { base: 2 },
        Algorithm::Radix { base: 1 << 16 },
        Algorithm::AmericanFlag { base: 10 },
        Algorithm::AmericanFlag { base: 2 },
        Algorithm::AmericanFlag { base: 256 },
        Algorithm::AmericanFlag { base: 1 << 16 },
    ]
}

fn random_vec(rng: &mut StdRng, len: usize, range: std::ops::Range<i32>) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

#[test]
fn empty_and_single() {
    for algorithm in all_algorithms() {
        let mut empty: Vec<i32> = Vec::new();
        sort(&algorithm, &mut empty).unwrap();
        assert!(empty.is_empty(), "{algorithm:?}");

        let mut single = vec![5];
        sort(&algorithm, &mut single).unwrap();
        assert_eq!(single, [5], "{algorithm:?}");
    }
}

#[test]
fn quicksort_first_pivot_three() {
    let algorithm = Algorithm::Quick {
        pivot: PivotStrategy::First,
    };
    assert_eq!(sorted(&algorithm, vec![3, 1, 2]).unwrap(), [1, 2, 3]);
}

#[test]
fn heapsort_reversed() {
    assert_eq!(
        sorted(&Algorithm::Heap, vec![5, 4, 3, 2, 1]).unwrap(),
        [1, 2, 3, 4, 5]
    );
}

#[test]
fn merge_strategies_agree() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let input = random_vec(&mut rng, 10_000, 0..100_000);

    let not_in_place = sorted(
        &Algorithm::Merge {
            space: SpaceStrategy::NotInPlace,
        },
        input.clone(),
    )
    .unwrap();
    let in_place = sorted(
        &Algorithm::Merge {
            space: SpaceStrategy::InPlace,
        },
        input.clone(),
    )
    .unwrap();

    let mut expected = input;
    expected.sort_unstable();

    assert_eq!(not_in_place, in_place);
    assert_eq!(in_place, expected);
}

#[test]
fn radix_base_10() {
    assert_eq!(
        sorted(&Algorithm::Radix { base: 10 }, vec![170, 45, 75, 90, 802, 24]).unwrap(),
        [24, 45, 75, 90, 170, 802]
    );
}

#[test]
fn all_algorithms_match_std() {
    let mut rng = StdRng::seed_from_u64(0xD15C);

    for len in [2, 3, 10, 64, 257, 1000] {
        let inputs = [
            random_vec(&mut rng, len, -1000..1000),
            random_vec(&mut rng, len, 0..4),
            (0..len as i32).collect(),
            (0..len as i32).rev().collect(),
            vec![-3; len],
        ];

        for input in inputs {
            let mut expected = input.clone();
            expected.sort();

            for algorithm in all_algorithms() {
                let mut v = input.clone();
                sort_with_rng(&algorithm, &mut v, &mut rng).unwrap();
                assert!(is_non_decreasing(&v), "{algorithm:?} len: {len}");
                assert!(is_permutation(&v, &input), "{algorithm:?} len: {len}");
                assert_eq!(v, expected, "{algorithm:?} len: {len}");
            }
        }
    }
}

#[test]
fn sorted_input_is_unchanged() {
    let input: Vec<i32> = (0..500).map(|i| i / 3).collect();

    for algorithm in all_algorithms() {
        assert_eq!(sorted(&algorithm, input.clone()).unwrap(), input, "{algorithm:?}");
    }
}

#[test]
fn other_key_types() {
    for algorithm in all_algorithms() {
        if matches!(algorithm, Algorithm::Counting { .. }) {
            continue;
        }

        let v = sorted(&algorithm, vec![u64::MAX, 0, 1 << 40, 7, u64::MAX - 1]).unwrap();
        assert_eq!(v, [0, 7, 1 << 40, u64::MAX - 1, u64::MAX], "{algorithm:?}");

        let v = sorted(&algorithm, vec![i8::MIN, 3, -1, i8::MAX, 0]).unwrap();
        assert_eq!(v, [i8::MIN, -1, 0, 3, i8::MAX], "{algorithm:?}");

        let v = sorted(&algorithm, "sorting".chars().collect()).unwrap();
        assert_eq!(v, ['g', 'i', 'n', 'o', 'r', 's', 't'], "{algorithm:?}");
    }
}

#[test]
fn counting_sort_negative_values() {
    let algorithm = Algorithm::Counting { max_range: 64 };
    assert_eq!(
        sorted(&algorithm, vec![-5i64, 3, -5, 0, -1, 12]).unwrap(),
        [-5, -5, -1, 0, 3, 12]
    );
}

#[test]
fn counting_sort_rejects_wide_range() {
    let algorithm = Algorithm::Counting { max_range: 100 };
    let original = vec![0, 50, 100, 3];

    let mut v = original.clone();
    let err = sort(&algorithm, &mut v).unwrap_err();
    assert!(matches!(
        err,
        SortError::KeyRangeTooLarge {
            range: 101,
            limit: 100
        }
    ));
    assert_eq!(v, original);

    // Exactly at the limit.
    let mut v = vec![99, 0, 42];
    sort(&algorithm, &mut v).unwrap();
    assert_eq!(v, [0, 42, 99]);
}

#[test]
fn counting_sort_rejects_zero_range() {
    let mut v = vec![2, 1];
    let err = sort(&Algorithm::Counting { max_range: 0 }, &mut v).unwrap_err();
    assert!(matches!(err, SortError::InvalidCountingRange));
    assert!(err.is_invalid_argument());
    assert_eq!(v, [2, 1]);
}

#[test]
fn invalid_base_rejected() {
    for base in [0, 1, (1 << 16) + 1] {
        for algorithm in [Algorithm::Radix { base }, Algorithm::AmericanFlag { base }] {
            let mut v = vec![3, 2, 1];
            let err = sort(&algorithm, &mut v).unwrap_err();
            assert!(matches!(err, SortError::InvalidBase(b) if b == base));
            assert_eq!(v, [3, 2, 1]);
        }
    }
}

#[test]
fn gap_validation() {
    assert!(matches!(
        Gaps::new(vec![]).unwrap_err(),
        SortError::EmptyGapSequence
    ));
    assert!(matches!(
        Gaps::new(vec![4, 0]).unwrap_err(),
        SortError::ZeroGap
    ));
    assert!(matches!(
        Gaps::new(vec![4, 4, 1]).unwrap_err(),
        SortError::GapSequenceNotDecreasing { prev: 4, next: 4 }
    ));
    assert!(matches!(
        Gaps::new(vec![1, 4]).unwrap_err(),
        SortError::GapSequenceNotDecreasing { prev: 1, next: 4 }
    ));
    assert!(matches!(
        Gaps::new(vec![10, 4, 2]).unwrap_err(),
        SortError::GapSequenceNotEndingInOne(2)
    ));

    assert_eq!(Gaps::new(vec![1]).unwrap().as_slice(), [1]);
    assert_eq!(Gaps::new(vec![23, 10, 4, 1]).unwrap().as_slice(), [23, 10, 4, 1]);
}

#[test]
fn explicit_gaps() {
    let mut rng = StdRng::seed_from_u64(7);

    for gaps in [vec![1], vec![5, 3, 1], vec![100, 1], vec![9, 8, 7, 6, 5, 4, 3, 2, 1]] {
        let algorithm = Algorithm::Shell {
            gaps: GapSequence::Explicit(Gaps::new(gaps).unwrap()),
        };

        let input = random_vec(&mut rng, 300, -50..50);
        let mut expected = input.clone();
        expected.sort();

        assert_eq!(sorted(&algorithm, input).unwrap(), expected, "{algorithm:?}");
    }
}

#[test]
fn generated_gaps() {
    assert_eq!(shell::shell_gaps(0).as_slice(), [1]);
    assert_eq!(shell::shell_gaps(16).as_slice(), [8, 4, 2, 1]);
    assert_eq!(shell::shell_gaps(17).as_slice(), [8, 4, 2, 1]);

    assert_eq!(shell::knuth_gaps(0).as_slice(), [1]);
    assert_eq!(shell::knuth_gaps(100).as_slice(), [13, 4, 1]);

    assert_eq!(shell::ciura_gaps(0).as_slice(), [1]);
    assert_eq!(shell::ciura_gaps(50).as_slice(), [23, 10, 4, 1]);
    assert_eq!(
        shell::ciura_gaps(1000).as_slice(),
        [701, 301, 132, 57, 23, 10, 4, 1]
    );
    assert_eq!(
        shell::ciura_gaps(2000).as_slice(),
        [1577, 701, 301, 132, 57, 23, 10, 4, 1]
    );
}

#[test]
fn american_flag_large_base() {
    let mut rng = StdRng::seed_from_u64(0xF1A6);

    for input in [
        (0..20_000).map(|_| rng.gen::<i32>()).collect::<Vec<_>>(),
        random_vec(&mut rng, 20_000, 0..1 << 20),
        random_vec(&mut rng, 20_000, -50..50),
    ] {
        let mut expected = input.clone();
        expected.sort();

        let v = sorted(&Algorithm::AmericanFlag { base: 1 << 16 }, input).unwrap();
        assert_eq!(v, expected);
    }
}

#[test]
fn sorted_input_takes_one_pass() {
    let len = 1000;

    for input in [(0..len as i32).collect::<Vec<_>>(), vec![7; len]] {
        let mut comparisons = 0usize;
        let mut v = input.clone();
        sort_suite::bubble::bubble_sort(&mut v, &mut |a, b| {
            comparisons += 1;
            a < b
        });
        assert_eq!(v, input);
        assert_eq!(comparisons, len - 1, "bubble_sort");

        let mut comparisons = 0usize;
        let mut v = input.clone();
        sort_suite::insertion::insertion_sort(&mut v, &mut |a, b| {
            comparisons += 1;
            a < b
        });
        assert_eq!(v, input);
        assert_eq!(comparisons, len - 1, "insertion_sort");
    }
}

#[test]
fn seeded_random_pivot_is_reproducible() {
    let mut rng = StdRng::seed_from_u64(1);
    let input = random_vec(&mut rng, 2000, 0..1000);
    let algorithm = Algorithm::Quick {
        pivot: PivotStrategy::Random,
    };

    let count_comparisons = |seed: u64| {
        let mut v = input.clone();
        let mut comparisons = 0usize;
        let mut rng = StdRng::seed_from_u64(seed);
        sort_suite::quicksort::quicksort(&mut v, PivotStrategy::Random, &mut rng, &mut |a, b| {
            comparisons += 1;
            a < b
        });
        assert!(is_non_decreasing(&v));
        comparisons
    };

    assert_eq!(count_comparisons(42), count_comparisons(42));

    let mut v = input.clone();
    sort_with_rng(&algorithm, &mut v, &mut StdRng::seed_from_u64(42)).unwrap();
    assert!(is_non_decreasing(&v));
}

#[test]
fn from_name() {
    let config = SortConfig::default();

    for (name, expected) in [
        ("insertion", Algorithm::Insertion),
        ("Insertion-Sort", Algorithm::Insertion),
        ("bubble_sort", Algorithm::Bubble),
        ("heapsort", Algorithm::Heap),
        ("heap", Algorithm::Heap),
        (
            "quicksort",
            Algorithm::Quick {
                pivot: PivotStrategy::Random,
            },
        ),
        (
            "merge",
            Algorithm::Merge {
                space: SpaceStrategy::NotInPlace,
            },
        ),
        (
            "shell",
            Algorithm::Shell {
                gaps: GapSequence::Named(GapFamily::Ciura),
            },
        ),
        ("counting", Algorithm::Counting { max_range: 1 << 20 }),
        ("radix_sort", Algorithm::Radix { base: 10 }),
        ("american-flag-sort", Algorithm::AmericanFlag { base: 10 }),
    ] {
        assert_eq!(Algorithm::from_name(name, &config).unwrap(), expected, "{name}");
    }

    assert!(matches!(
        Algorithm::from_name("bogo", &config).unwrap_err(),
        SortError::UnknownAlgorithm(name) if name == "bogo"
    ));
    assert!(Algorithm::from_name("bogo", &config)
        .unwrap_err()
        .is_invalid_argument());

    let config = SortConfig {
        base: 1,
        ..SortConfig::default()
    };
    assert!(matches!(
        Algorithm::from_name("radix", &config).unwrap_err(),
        SortError::InvalidBase(1)
    ));
    // Options of other algorithms are not checked.
    assert_eq!(
        Algorithm::from_name("heap", &config).unwrap(),
        Algorithm::Heap
    );
}

#[test]
fn stability_flags() {
    let stable: Vec<&str> = all_algorithms()
        .iter()
        .filter(|a| a.is_stable())
        .map(|a| a.name())
        .collect();

    assert!(stable.contains(&"insertion_sort"));
    assert!(stable.contains(&"bubble_sort"));
    assert!(stable.contains(&"merge_sort"));
    assert!(stable.contains(&"counting_sort"));
    assert!(stable.contains(&"radix_sort"));
    assert!(!stable.contains(&"quicksort"));
    assert!(!stable.contains(&"heapsort"));
    assert!(!stable.contains(&"shell_sort"));
    assert!(!stable.contains(&"american_flag_sort"));
}

#[test]
fn config_from_json() {
    let config = SortConfig::from_json("{}").unwrap();
    assert_eq!(config, SortConfig::default());

    let config = SortConfig::from_json(
        r#"{
            "pivot": "MIDDLE",
            "space": "IN_PLACE",
            "gaps": [57, 23, 10, 4, 1],
            "base": 16,
            "max_counting_range": 1000,
            "seed": 99
        }"#,
    )
    .unwrap();

    assert_eq!(config.pivot, PivotStrategy::Middle);
    assert_eq!(config.space, SpaceStrategy::InPlace);
    assert_eq!(
        config.gaps,
        GapSequence::Explicit(Gaps::new(vec![57, 23, 10, 4, 1]).unwrap())
    );
    assert_eq!(config.base, 16);
    assert_eq!(config.max_counting_range, 1000);
    assert_eq!(config.seed, Some(99));

    let config = SortConfig::from_json(r#"{"gaps": "KNUTH"}"#).unwrap();
    assert_eq!(config.gaps, GapSequence::Named(GapFamily::Knuth));
}

#[test]
fn config_from_json_rejects_malformed() {
    for json in [
        r#"{"pivot": "LAST"}"#,
        r#"{"gaps": [4, 10, 1]}"#,
        r#"{"gaps": [4, 2]}"#,
        r#"{"gaps": []}"#,
        r#"{"unknown": 1}"#,
        "not json",
    ] {
        assert!(
            matches!(SortConfig::from_json(json), Err(SortError::Config(_))),
            "{json}"
        );
    }
}

#[test]
fn sort_by_name_with_config() {
    let config = SortConfig::from_json(r#"{"pivot": "RANDOM", "seed": 5}"#).unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    let input = random_vec(&mut rng, 1000, -100..100);
    let mut expected = input.clone();
    expected.sort();

    for name in [
        "insertion",
        "bubble",
        "shell",
        "merge",
        "quick",
        "heap",
        "counting",
        "radix",
        "american_flag",
    ] {
        let mut v = input.clone();
        sort_by_name(name, &config, &mut v).unwrap();
        assert_eq!(v, expected, "{name}");
    }

    let mut v = input.clone();
    assert!(sort_by_name("sleep_sort", &config, &mut v).is_err());
    assert_eq!(v, input);
}
