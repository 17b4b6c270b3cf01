// This file is part of kalends.

//! End-to-end walks through the everyday operations, with hand-checked
//! expected values.

use crate::{Civil, Coptic, Coptic13, Date, DateError, TabularIslamic, Weekday};

#[test]
fn shifting_across_a_month_boundary() {
    let date = Date::<Civil>::try_new(2023, 3, 15).unwrap();
    let later = date.plus_days(20).unwrap();
    assert_eq!(later.year_month_day(), (2023, 4, 4));
    assert_eq!(later.days_since(date), 20);
    assert_eq!(later - date, 20);
    assert_eq!(later.plus_days(-20).unwrap(), date);
}

#[test]
fn year_lengths_around_a_leap_year() {
    let y2023 = Date::<Civil>::try_new(2023, 1, 1).unwrap();
    let y2024 = y2023.with_year(2024).unwrap();
    let y2025 = y2023.with_year(2025).unwrap();
    assert_eq!(y2024 - y2023, 365);
    assert_eq!(y2025 - y2024, 366);
    assert!(!y2023.is_in_leap_year());
    assert!(y2024.is_in_leap_year());
    assert_eq!(y2024.end_of_year().day_of_year(), 366);
}

#[test]
fn weekday_adjustment_from_a_wednesday() {
    let wednesday = Date::<Civil>::try_new(2023, 3, 15).unwrap();
    assert_eq!(wednesday.day_of_week(), Weekday::Wednesday);

    let friday = wednesday.next(Weekday::Friday).unwrap();
    assert_eq!(friday.year_month_day(), (2023, 3, 17));
    assert_eq!(wednesday.next_or_same(Weekday::Friday).unwrap(), friday);

    // On a matching day the two forms diverge.
    assert_eq!(friday.next_or_same(Weekday::Friday).unwrap(), friday);
    assert_eq!(
        friday.next(Weekday::Friday).unwrap().year_month_day(),
        (2023, 3, 24)
    );

    assert_eq!(
        wednesday.previous(Weekday::Friday).unwrap().year_month_day(),
        (2023, 3, 10)
    );
    assert_eq!(
        wednesday.nearest(Weekday::Sunday).unwrap().year_month_day(),
        (2023, 3, 12)
    );
}

#[test]
fn rejected_components_name_themselves() {
    assert_eq!(
        Date::<Civil>::try_new(2023, 13, 1),
        Err(DateError::OutOfRange {
            field: "month",
            value: 13,
            min: 1,
            max: 12,
        })
    );
    assert_eq!(
        Date::<Civil>::try_new(2023, 2, 29),
        Err(DateError::OutOfRange {
            field: "day",
            value: 29,
            min: 1,
            max: 28,
        })
    );
    assert_eq!(
        Date::<Civil>::try_from_ordinal(2023, 366),
        Err(DateError::OutOfRange {
            field: "day_of_year",
            value: 366,
            min: 1,
            max: 365,
        })
    );
    assert_eq!(
        Date::<Civil>::MAX.with_year(10_000),
        Err(DateError::OutOfRange {
            field: "year",
            value: 10_000,
            min: 1,
            max: 9999,
        })
    );
}

#[test]
fn walking_the_coptic_epagomenal_run() {
    // Coptic 1687 is a leap year; the run is six days long.
    let mut date = Date::<Coptic>::try_new(1687, 12, 30).unwrap();
    assert!(!date.is_epagomenal_day());
    for expected in 1..=6u8 {
        date = date.next_day().unwrap();
        assert_eq!(date.epagomenal_number(), Some(expected));
        assert!(date.is_supplementary_day());
    }
    assert_eq!(date, date.end_of_year());
    assert_eq!(date.next_day().unwrap().year_month_day(), (1688, 1, 1));

    // The 13-month presentation sees the same run as its virtual month.
    let thirteen = date.to_calendar::<Coptic13>().unwrap();
    assert_eq!(thirteen.year_month_day(), (1687, 13, 6));
    assert_eq!(thirteen.month(), thirteen.virtual_month());
}

#[test]
fn overflow_kinds_at_the_domain_edges() {
    // Leaving the supported domain is not an integer overflow.
    assert_eq!(Date::<Civil>::MAX.next_day(), Err(DateError::DomainOverflow));
    assert_eq!(Date::<Civil>::MIN.previous_day(), Err(DateError::DomainOverflow));
    assert_eq!(
        Date::<Civil>::MAX.next(Weekday::Monday),
        Err(DateError::DomainOverflow)
    );
    assert_eq!(
        Date::<Civil>::MIN.previous(Weekday::Monday),
        Err(DateError::DomainOverflow)
    );

    // A shift that cannot even be computed is.
    assert_eq!(
        Date::<Civil>::MAX.plus_days(i32::MAX),
        Err(DateError::ArithmeticOverflow)
    );

    // The edges themselves are fine.
    assert_eq!(Date::<Civil>::MAX.next_or_same(Date::<Civil>::MAX.day_of_week()), Ok(Date::<Civil>::MAX));
}

#[test]
fn changing_months_revalidates_the_day() {
    // Muharram has 30 days, Safar 29.
    let date = Date::<TabularIslamic>::try_new(1444, 1, 30).unwrap();
    assert_eq!(
        date.with_month(2),
        Err(DateError::OutOfRange {
            field: "day",
            value: 30,
            min: 1,
            max: 29,
        })
    );
    assert_eq!(date.with_month(3).unwrap().year_month_day(), (1444, 3, 30));
}
