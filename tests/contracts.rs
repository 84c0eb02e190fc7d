use chrono::{DateTime, Datelike, Weekday};
use datekit::{
    DateError, FixedClock, TimingOptions, WeekStart, WeekdayStyle, calendar_date, format_date,
    get_current_timing_with, get_month_matrix, get_week_number, get_weekday_names,
    is_date_disabled, merge_date_and_time, parse_date, DisabledDateRules,
};

#[test]
fn week_number_of_new_year_2025() {
    let d = calendar_date(2025, 1, 1).unwrap();
    assert_eq!(d.weekday(), Weekday::Wed);
    assert_eq!(get_week_number(d), 1);
}

#[test]
fn format_iso_pattern() {
    let d = calendar_date(2025, 8, 18).unwrap();
    assert_eq!(format_date(d, "YYYY-MM-DD"), "2025-08-18");
}

#[test]
fn weekday_names_start() {
    assert_eq!(
        get_weekday_names("en-US", WeekdayStyle::Short, WeekStart::Sunday)[0],
        "Sun"
    );
    assert_eq!(
        get_weekday_names("en-US", WeekdayStyle::Short, WeekStart::Monday)[0],
        "Mon"
    );
}

#[test]
fn disabled_by_min() {
    let min = calendar_date(2025, 1, 10).unwrap();
    let rules = DisabledDateRules::new().min(min);
    assert!(is_date_disabled(calendar_date(2025, 1, 1).unwrap(), &rules));
    assert!(!is_date_disabled(min, &rules));
}

#[test]
fn parse_then_format() {
    let d = parse_date("18/08/2025", "DD/MM/YYYY").unwrap();
    assert_eq!(format_date(d, "YYYY-MM-DD"), "2025-08-18");
    assert_eq!(format_date(d, "dddd"), "Monday");
}

#[test]
fn merge_time_then_format() {
    let d = merge_date_and_time(calendar_date(2025, 1, 1).unwrap(), 14, 30);
    assert_eq!(d.to_string(), "2025-01-01 14:30:00");
}

#[test]
fn month_matrix_by_name_and_number_agree() {
    for (number, name) in [(1, "January"), (2, "February"), (9, "September"), (12, "Dec")] {
        assert_eq!(
            get_month_matrix(2025, number).unwrap(),
            get_month_matrix(2025, name).unwrap(),
            "{name}"
        );
    }
}

#[test]
fn month_matrix_unknown_name_is_an_error() {
    assert!(matches!(
        get_month_matrix(2025, "Brumaire"),
        Err(DateError::UnknownMonthName(_))
    ));
}

#[test]
fn timing_with_fixed_clock() {
    let clock = FixedClock(DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z").unwrap());
    let timing = get_current_timing_with(&clock, &TimingOptions::default());
    assert_eq!((timing.year, timing.month, timing.date), (2025, 1, 1));
    assert_eq!(timing.day, "Wednesday");
    assert_eq!(timing.timestamp, 1_735_689_600_000);
    assert_eq!(timing.utc, "Wed, 01 Jan 2025 00:00:00 GMT");
}

#[test]
fn rules_shared_across_threads() {
    let rules = DisabledDateRules::new().exclude(|d| d.weekday() == Weekday::Sun);
    let sunday = calendar_date(2025, 8, 17).unwrap();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert!(is_date_disabled(sunday, &rules)));
        }
    });
}
