use crate::logs::{
    AggregateReport, CategoryCounts, ERRORS_BUCKET, GENERAL_BUCKET, TypeCounts, parse_text, tally,
};
use pretty_assertions::assert_eq;

fn tallied(text: &str) -> (TypeCounts, CategoryCounts) {
    let mut report = AggregateReport::new();
    report.fold_all(parse_text(text));
    tally(report.unique_entries())
}

#[test]
fn bucket_for_maps_known_types() {
    assert_eq!(TypeCounts::bucket_for(Some("Error")), ERRORS_BUCKET);
    assert_eq!(TypeCounts::bucket_for(Some("Warning")), "warnings");
    assert_eq!(TypeCounts::bucket_for(Some("Verbose")), "verbose");
    assert_eq!(TypeCounts::bucket_for(Some("Display")), "display");
    assert_eq!(TypeCounts::bucket_for(None), GENERAL_BUCKET);
}

#[test]
fn new_type_counts_have_fixed_buckets() {
    let counts = TypeCounts::new();

    let buckets: Vec<_> = counts.iter().collect();
    assert_eq!(
        buckets,
        vec![("errors", 0), ("warnings", 0), ("verbose", 0), ("general", 0)]
    );
}

#[test]
fn counts_unique_entries_not_occurrences() {
    let (types, categories) = tallied(
        "LogNet: Error: timeout\nLogNet: Error: timeout\nLogNet: Error: timeout\nLogCore: Warning: slow\n",
    );

    assert_eq!(types.errors(), 1);
    assert_eq!(types.warnings(), 1);
    assert_eq!(categories.get("Net"), 1);
    assert_eq!(categories.get("Core"), 1);
}

#[test]
fn custom_types_get_their_own_bucket() {
    let (types, _) = tallied("LogA: Display: a\nLogB: Display: b\nLogC: Log: c\n");

    assert_eq!(types.get("display"), 2);
    assert_eq!(types.get("log"), 1);

    let custom: Vec<_> = types.iter().skip(4).collect();
    assert_eq!(custom, vec![("display", 2), ("log", 1)]);
}

#[test]
fn verbose_type_lands_in_fixed_bucket() {
    let (types, _) = tallied("LogA: Verbose: chatty\n");

    assert_eq!(types.verbose(), 1);
    assert_eq!(types.iter().count(), 4);
}

#[test]
fn missing_type_and_category_count_as_general() {
    let (types, categories) = tallied("LogA: no type here\nLog: broken\n");

    assert_eq!(types.general(), 2);
    assert_eq!(categories.general(), 1);
    assert_eq!(categories.get("A"), 1);
}

#[test]
fn bucket_total_matches_unique_entries() {
    let text = "LogA: Error: a\nLogB: Warning: b\nLogC: Custom: c\nLogD: d\nLogA: Error: a\n";
    let mut report = AggregateReport::new();
    report.fold_all(parse_text(text));

    let (types, _) = tally(report.unique_entries());

    assert_eq!(types.total(), report.unique_entries().len() as u64);
}

#[test]
fn category_rows_list_general_last() {
    let (_, categories) = tallied("LogB: x\nLog: broken\nLogA: y\n");

    let rows: Vec<_> = categories.iter().collect();
    assert_eq!(rows, vec![(Some("A"), 1), (Some("B"), 1), (None, 1)]);
}
