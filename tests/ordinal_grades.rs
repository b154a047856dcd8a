use std::cmp::Ordering;

use grade_vocab::{DaVinciGrade, EnrichmentGrade, OrdinalGrade, Scale, VocabError, lookup};

#[test]
fn da_vinci_scale_is_strictly_descending() {
    use DaVinciGrade::*;
    assert!(Excellent > Merit);
    assert!(Merit > Satisfactory);
    assert!(Satisfactory > Unsatisfactory);
    assert!(Excellent > Unsatisfactory);

    for (i, a) in DaVinciGrade::ALL.iter().enumerate() {
        for (j, b) in DaVinciGrade::ALL.iter().enumerate() {
            assert_eq!(a == b, i == j);
            assert_eq!(a.cmp(b), j.cmp(&i), "{a} vs {b}");
        }
    }
}

#[test]
fn enrichment_scale_is_strictly_descending() {
    use EnrichmentGrade::*;
    assert!(Distinction > Merit);
    assert!(Merit > Pass);
    assert!(Pass > Fail);
    assert!(Fail <= Pass);
    assert!(Distinction >= Merit);

    let mut sorted = EnrichmentGrade::ALL.to_vec();
    sorted.sort();
    assert_eq!(sorted, vec![Fail, Pass, Merit, Distinction]);
}

#[test]
fn merit_orders_against_both_families() {
    let merit = OrdinalGrade::Merit;
    assert!(merit.is_above(OrdinalGrade::Satisfactory));
    assert!(merit.is_below(OrdinalGrade::Excellent));
    assert!(merit.is_above(OrdinalGrade::Pass));
    assert!(merit.is_below(OrdinalGrade::Distinction));

    assert!(OrdinalGrade::Excellent.is_above(merit));
    assert!(OrdinalGrade::Fail.is_below(merit));
    assert!(OrdinalGrade::Unsatisfactory.is_at_most(merit));
    assert!(OrdinalGrade::Distinction.is_at_least(merit));
}

#[test]
fn merit_against_merit_is_equal() {
    let merit = OrdinalGrade::Merit;
    assert_eq!(merit.try_cmp(merit), Ok(Ordering::Equal));
    assert!(merit.is_at_least(merit));
    assert!(merit.is_at_most(merit));
    assert!(!merit.is_above(merit));
    assert!(!merit.is_below(merit));
    assert_eq!(DaVinciGrade::Merit.cmp(&DaVinciGrade::Merit), Ordering::Equal);
    assert_eq!(EnrichmentGrade::Merit.cmp(&EnrichmentGrade::Merit), Ordering::Equal);
}

#[test]
fn merit_agrees_with_plain_rank_comparison() {
    for other in OrdinalGrade::ALL {
        if let Some(rank) = other.da_vinci_rank() {
            assert_eq!(OrdinalGrade::Merit.try_cmp(other), Ok(2_u8.cmp(&rank)));
        }
        if let Some(rank) = other.enrichment_rank() {
            assert_eq!(OrdinalGrade::Merit.try_cmp(other), Ok(2_u8.cmp(&rank)));
        }
    }
}

#[test]
fn grades_without_a_shared_scale_do_not_order() {
    let err = OrdinalGrade::Excellent
        .try_cmp(OrdinalGrade::Pass)
        .unwrap_err();
    assert!(matches!(err, VocabError::IncomparableScales { .. }));
    assert!(!OrdinalGrade::Excellent.is_above(OrdinalGrade::Pass));
    assert!(!OrdinalGrade::Excellent.is_below(OrdinalGrade::Pass));
    assert!(!OrdinalGrade::Fail.is_at_most(OrdinalGrade::Satisfactory));
}

#[test]
fn distinct_names_are_never_equal() {
    for (i, a) in OrdinalGrade::ALL.iter().enumerate() {
        for (j, b) in OrdinalGrade::ALL.iter().enumerate() {
            assert_eq!(a == b, i == j, "{a} vs {b}");
        }
    }
}

#[test]
fn products_with_numbers_are_zero() {
    for g in OrdinalGrade::ALL {
        for n in [0.0_f64, 1.0, 4.0, -2.5, 1e9] {
            assert_eq!(g * n, 0.0);
            assert_eq!(n * g, 0.0);
        }
        assert_eq!(g * 4_u32, 0);
        assert_eq!(5_i32 * g, 0);
        assert_eq!(g.credit_weight(), 0.0);
    }
    assert_eq!(DaVinciGrade::Excellent * 4.0_f64, 0.0);
    assert_eq!(3.0_f64 * EnrichmentGrade::Distinction, 0.0);
}

#[test]
fn names_round_trip_through_the_registry() {
    for g in OrdinalGrade::ALL {
        let name = g.to_string();
        assert_eq!(name, g.name());
        let back = lookup(&name).expect("qualitative grade in registry");
        assert_eq!(back.as_ordinal(), Some(g));
    }
    assert_eq!(OrdinalGrade::Merit.to_string(), "MERIT");
    assert_eq!(OrdinalGrade::Fail.to_string(), "FAIL");
}

#[test]
fn scale_conversions_reject_foreign_grades() {
    assert_eq!(DaVinciGrade::try_from(OrdinalGrade::Merit), Ok(DaVinciGrade::Merit));
    assert_eq!(EnrichmentGrade::try_from(OrdinalGrade::Merit), Ok(EnrichmentGrade::Merit));
    let err = DaVinciGrade::try_from(OrdinalGrade::Distinction).unwrap_err();
    assert_eq!(err.to_string(), "DISTINCTION is not on the Da Vinci scale.");
    assert_eq!(OrdinalGrade::Pass.scales(), &[Scale::Enrichment]);
}

#[test]
fn merit_compares_directly_with_scale_grades() {
    assert!(OrdinalGrade::Merit > DaVinciGrade::Satisfactory);
    assert!(OrdinalGrade::Merit < DaVinciGrade::Excellent);
    assert!(OrdinalGrade::Merit > EnrichmentGrade::Pass);
    assert!(OrdinalGrade::Merit < EnrichmentGrade::Distinction);
    assert!(OrdinalGrade::Merit >= DaVinciGrade::Merit);
    assert!(OrdinalGrade::Merit <= EnrichmentGrade::Merit);
    assert!(DaVinciGrade::Excellent > OrdinalGrade::Merit);
    assert!(EnrichmentGrade::Fail < OrdinalGrade::Merit);

    assert_eq!(OrdinalGrade::Merit, DaVinciGrade::Merit);
    assert_eq!(EnrichmentGrade::Merit, OrdinalGrade::Merit);
    assert_ne!(OrdinalGrade::Excellent, DaVinciGrade::Merit);
}

#[test]
fn off_scale_grades_do_not_order_against_scale_grades() {
    assert_eq!(OrdinalGrade::Pass.partial_cmp(&DaVinciGrade::Satisfactory), None);
    assert!(!(OrdinalGrade::Pass > DaVinciGrade::Unsatisfactory));
    assert!(!(OrdinalGrade::Pass < DaVinciGrade::Excellent));
    assert!(!(DaVinciGrade::Excellent >= OrdinalGrade::Fail));
    assert_ne!(OrdinalGrade::Excellent, EnrichmentGrade::Distinction);
}

#[test]
fn mixed_comparisons_agree_with_try_cmp() {
    for a in OrdinalGrade::ALL {
        for b in DaVinciGrade::ALL {
            assert_eq!(a.partial_cmp(&b), a.try_cmp(b.into()).ok(), "{a} vs {b}");
        }
        for b in EnrichmentGrade::ALL {
            assert_eq!(a.partial_cmp(&b), a.try_cmp(b.into()).ok(), "{a} vs {b}");
        }
    }
}
