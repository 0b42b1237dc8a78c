use fpmeter::core::Error;
use fpmeter::vaf::{
    compute_vaf, compute_vaf_or_default, uniform_scores, GscFactor, GscScore, VAF_MAX, VAF_MIN,
};
use proptest::prelude::*;
use rust_decimal_macros::dec;

fn sheet(scores: [u8; 14]) -> Vec<GscScore> {
    GscFactor::ALL
        .into_iter()
        .zip(scores)
        .map(|(factor, score)| GscScore::new(factor, score))
        .collect()
}

#[test]
fn floor_ceiling_and_regression_sheets() {
    assert_eq!(compute_vaf(&uniform_scores(0)).unwrap().vaf, dec!(0.6500));
    assert_eq!(compute_vaf(&uniform_scores(5)).unwrap().vaf, dec!(1.3500));

    // Regression sheet from the review center's reference cases
    let outcome = compute_vaf(&sheet([4, 3, 4, 3, 3, 4, 4, 3, 3, 2, 2, 3, 1, 3])).unwrap();
    assert_eq!(outcome.vaf, dec!(1.0700));
}

#[test]
fn wrong_sheet_sizes_are_validation_errors() {
    for n in [0usize, 1, 13, 15, 28] {
        let scores: Vec<GscScore> = uniform_scores(2)
            .into_iter()
            .cycle()
            .take(n)
            .collect();
        let err = compute_vaf(&scores).unwrap_err();
        assert!(
            matches!(err, Error::GscScoreCount { found } if found == n),
            "n={n}"
        );
    }
}

#[test]
fn full_sheet_with_a_duplicate_factor_is_rejected() {
    let mut scores = uniform_scores(2);
    scores[13] = GscScore::new(GscFactor::DataCommunications, 2);
    let err = compute_vaf(&scores).unwrap_err();
    assert!(matches!(err, Error::DuplicateGscFactor { factor } if factor == "TF01"));
}

#[test]
fn out_of_range_score_is_never_silently_clamped() {
    let mut scores = uniform_scores(0);
    scores[7].score = 6;
    let err = compute_vaf(&scores).unwrap_err();
    assert!(matches!(err, Error::GscScoreOutOfRange { score: 6, .. }));

    // even with the fallback enabled the result is flagged, not clamped
    let outcome = compute_vaf_or_default(&scores, true).unwrap();
    assert!(outcome.defaulted);
    assert_eq!(outcome.vaf, dec!(0.6500));
}

proptest! {
    #[test]
    fn vaf_stays_within_the_clamp_range(scores in prop::array::uniform14(0u8..=5)) {
        let outcome = compute_vaf(&sheet(scores)).unwrap();
        prop_assert!(outcome.vaf >= VAF_MIN);
        prop_assert!(outcome.vaf <= VAF_MAX);
    }

    #[test]
    fn vaf_is_monotone_in_every_single_score(
        scores in prop::array::uniform14(0u8..=4),
        index in 0usize..14,
    ) {
        let base = compute_vaf(&sheet(scores)).unwrap();

        let mut raised = scores;
        raised[index] += 1;
        let bumped = compute_vaf(&sheet(raised)).unwrap();

        prop_assert!(bumped.vaf >= base.vaf);
        prop_assert_eq!(bumped.total_influence - base.total_influence, dec!(1));
    }

    #[test]
    fn vaf_is_determined_by_the_score_sum(scores in prop::array::uniform14(0u8..=5)) {
        let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
        let outcome = compute_vaf(&sheet(scores)).unwrap();
        let expected = dec!(0.65) + dec!(0.01) * rust_decimal::Decimal::from(sum);
        prop_assert_eq!(outcome.vaf, fpmeter::round_size(expected));
    }
}
