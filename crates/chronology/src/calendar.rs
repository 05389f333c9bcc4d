use chrono::NaiveDate;

/// January 1 of `year`.
pub fn year_start(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).expect("valid calendar year")
}

/// Whole days from `a` to `b`; negative when `b` precedes `a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Resolves a whole-year span to a single representative calendar date.
///
/// A single-year span anchors on June 15. A multi-year span takes the
/// fractional midpoint of the range and converts the fractional year into a
/// month (anchored on the 15th), so long spans land on a plausible month
/// inside the span instead of clustering on January 1.
pub fn year_span_anchor(start_year: i32, end_year: i32) -> NaiveDate {
    if start_year == end_year {
        return NaiveDate::from_ymd_opt(start_year, 6, 15).expect("valid calendar year");
    }

    let mid = (start_year + end_year) as f64 / 2.0;
    let year = mid.floor() as i32;
    let month = ((mid - year as f64) * 12.0).floor() as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 15).expect("mid-month anchor is a valid date")
}
