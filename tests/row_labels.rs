use rowdag::level::Row;

#[test]
fn label_is_prefix_plus_number() {
    let row = Row::new(12).unwrap();

    assert_eq!(row.to_string(), "row12");
    assert_eq!(row.label(), "row12");
}

#[test]
fn multi_digit_rows_compare_numerically() {
    let nine = Row::new(9).unwrap();
    let ten = Row::new(10).unwrap();

    assert!(ten > nine);
    // The labels themselves sort the other way round.
    assert!(ten.label() < nine.label());
}

#[test]
fn row_zero_is_rejected() {
    assert!(Row::new(0).is_none());
    assert_eq!(Row::new(1), Some(Row::ROOT));
}

#[test]
fn next_row_is_one_higher() {
    assert_eq!(Row::ROOT.next().get(), 2);
}
