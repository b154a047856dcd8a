use std::{cmp::Ordering, collections::HashSet};

use grade_vocab::{Grade, GradeRegistry, NumericGrade, OrdinalGrade, VocabError, lookup, registry};

#[test]
fn registry_holds_letters_and_qualitative_names() {
    let reg = registry();
    assert_eq!(reg.len(), 18);
    assert!(!reg.is_empty());
    for key in ["A+", "F", "EXCELLENT", "MERIT", "UNSATISFACTORY", "DISTINCTION", "PASS", "FAIL"] {
        assert!(reg.contains(key), "missing {key}");
    }
}

#[test]
fn keys_are_unique_and_round_trip() {
    let reg = GradeRegistry::new();
    let keys: HashSet<&str> = reg.keys().collect();
    assert_eq!(keys.len(), reg.len());
    for (key, grade) in reg.iter() {
        assert_eq!(grade.to_string(), key);
        assert_eq!(reg.lookup(key), Ok(grade));
    }
}

#[test]
fn unknown_names_fail() {
    for key in ["Z", "", "a+", "merit", "E+", "FOUNDATION"] {
        let err = lookup(key).unwrap_err();
        assert!(matches!(err, VocabError::UnrecognizedKey { .. }), "{key}");
        assert_eq!(registry().get(key), None);
    }
}

#[test]
fn from_str_uses_the_registry() {
    assert_eq!("B+".parse::<Grade>(), Ok(Grade::Numeric(NumericGrade::BPlus)));
    assert_eq!("PASS".parse::<Grade>(), Ok(Grade::Ordinal(OrdinalGrade::Pass)));
    assert!("Z".parse::<Grade>().is_err());
}

#[test]
fn qualitative_grades_carry_no_credit_weight() {
    let credits = [(4.0, "A"), (4.0, "MERIT"), (2.0, "B"), (2.0, "FAIL")];
    let points: f64 = credits
        .iter()
        .map(|(mc, key)| mc * lookup(key).expect("known grade").credit_weight())
        .sum();
    assert_eq!(points, 4.0 * 5.0 + 2.0 * 3.5);
}

#[test]
fn mixed_comparisons() {
    let a = Grade::from(NumericGrade::A);
    let a_plus = Grade::from(NumericGrade::APlus);
    let b = Grade::from(NumericGrade::B);
    let merit = Grade::from(OrdinalGrade::Merit);

    assert_eq!(a.try_cmp(a_plus), Ok(Ordering::Equal));
    assert_eq!(b.try_cmp(a), Ok(Ordering::Less));
    assert_eq!(merit.try_cmp(Grade::from(OrdinalGrade::Pass)), Ok(Ordering::Greater));
    assert!(a.try_cmp(merit).is_err());
}

#[test]
fn shared_registry_is_a_single_instance() {
    assert!(std::ptr::eq(registry(), registry()));
    let handle = std::thread::spawn(|| registry() as *const GradeRegistry as usize);
    let other = handle.join().expect("thread");
    assert_eq!(other, registry() as *const GradeRegistry as usize);
}
