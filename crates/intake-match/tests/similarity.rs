use intake_match::similarity;
use proptest::prelude::*;

#[test]
fn symmetric_on_name_pairs() {
    let pairs = [
        ("martha", "marhta"),
        ("dwayne", "duane"),
        ("michael", "mikey"),
        ("jon", "john"),
        ("smith", "smyth"),
        ("catherine", "kathryn"),
        ("alice", "bob"),
    ];
    for (a, b) in pairs {
        assert_eq!(similarity(a, b), similarity(b, a), "{a} / {b}");
    }
}

#[test]
fn misspellings_rank_above_unrelated_names() {
    let close = similarity("johnson", "jonson");
    let far = similarity("johnson", "williams");
    assert!(close > 0.9, "{close}");
    assert!(far < 0.5, "{far}");
}

proptest! {
    #[test]
    fn bounded_between_zero_and_one(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "{}", score);
    }

    #[test]
    fn symmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn reflexive_for_non_empty(a in "\\PC{1,16}") {
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn empty_input_scores_zero(a in "\\PC{0,16}") {
        prop_assert_eq!(similarity("", &a), 0.0);
        prop_assert_eq!(similarity(&a, ""), 0.0);
    }

    #[test]
    fn distinct_strings_score_below_one(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        prop_assume!(a != b);
        prop_assert!(similarity(&a, &b) < 1.0);
    }
}
