use chrono::NaiveDate;
use js_sys::Date;
use shared::models::iso_date;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Value for an `<input type="date">`
pub fn to_input_value(date: NaiveDate) -> String {
    date.format(iso_date::FORMAT).to_string()
}

/// Parse the value of an `<input type="date">`; empty or partial input is `None`.
pub fn parse_input_value(value: &str) -> Option<NaiveDate> {
    iso_date::parse(value)
}

/// Short axis label, e.g. `03/10`
pub fn format_axis_label(date: NaiveDate) -> String {
    date.format("%m/%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_value_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(to_input_value(date), "2024-03-09");
        assert_eq!(parse_input_value("2024-03-09"), Some(date));
    }

    #[test]
    fn test_parse_input_value_rejects_partial() {
        assert_eq!(parse_input_value(""), None);
        assert_eq!(parse_input_value("2024-03"), None);
    }

    #[test]
    fn test_format_axis_label() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_axis_label(date), "03/09");
    }
}
