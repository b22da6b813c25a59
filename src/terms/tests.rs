use super::*;

fn set(terms: &[&str]) -> TermSet {
    terms.iter().copied().collect()
}

#[test]
fn test_extracts_year_proper_nouns_and_numbers() {
    let terms = extract_terms("The Treaty of Versailles was signed in 1919.");
    assert_eq!(terms, set(&["The Treaty", "Versailles", "1919"]));
}

#[test]
fn test_ordinals_and_months() {
    let terms = extract_terms("the 19th amendment passed on the 4th of June");
    assert!(terms.contains("19th"));
    assert!(terms.contains("4th"));
    assert!(terms.contains("June"));
}

#[test]
fn test_month_overlapping_proper_noun_is_deduplicated() {
    let terms = extract_terms("it happened in March");
    assert_eq!(terms, set(&["March"]));
}

#[test]
fn test_consecutive_capitalized_words_form_one_term() {
    let terms = extract_terms("signed by George Washington and John Adams");
    assert!(terms.contains("George Washington"));
    assert!(terms.contains("John Adams"));
    assert!(!terms.contains("George"));
}

#[test]
fn test_purely_conceptual_text_has_no_terms() {
    let terms = extract_terms("energy is conserved in a closed system");
    assert!(terms.is_empty());
}

#[test]
fn test_case_sensitive() {
    assert!(extract_terms("paris is a city in france").is_empty());
    assert_eq!(extract_terms("Paris is a city"), set(&["Paris"]));
}

#[test]
fn test_all_caps_words_are_not_proper_nouns() {
    let terms = extract_terms("the DNA molecule");
    assert!(terms.is_empty());
}

#[test]
fn test_coverage_by() {
    let key = set(&["The Treaty", "Versailles", "1919"]);
    let student = set(&["The Treaty", "Versailles", "1920"]);

    let ratio = key.coverage_by(&student).expect("key has terms");
    assert!((ratio - 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(TermSet::new().coverage_by(&student), None);
}

#[test]
fn test_difference_and_join() {
    let key = set(&["Versailles", "1919"]);
    let student = set(&["Versailles", "1920"]);

    assert_eq!(key.difference(&student).joined(), "1919");
    assert_eq!(student.difference(&key).joined(), "1920");
    assert_eq!(set(&["b", "a"]).joined(), "a, b");
}

#[test]
fn test_extraction_is_deterministic() {
    let text = "On July 20th 1969 Neil Armstrong walked on the Moon.";
    assert_eq!(extract_terms(text), extract_terms(text));
}
