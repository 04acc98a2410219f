use chrono::{Datelike, NaiveDate};
use shared::DATE_BORN_FORMAT;

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "enero", 2 => "febrero", 3 => "marzo", 4 => "abril",
        5 => "mayo", 6 => "junio", 7 => "julio", 8 => "agosto",
        9 => "septiembre", 10 => "octubre", 11 => "noviembre", 12 => "diciembre",
        _ => "enero",
    }
}

/// Format a YYYY-MM-DD birth date for display (e.g., "15 de junio de 2019")
///
/// Values that do not parse are returned unchanged.
pub fn format_birth_date(date_born: &str) -> String {
    match NaiveDate::parse_from_str(date_born.trim(), DATE_BORN_FORMAT) {
        Ok(date) => format!("{} de {} de {}", date.day(), month_name(date.month()), date.year()),
        Err(_) => date_born.to_string(),
    }
}

/// Pluralized age label for the kids list
pub fn format_age(years: u32) -> String {
    match years {
        1 => "1 año".to_string(),
        n => format!("{} años", n),
    }
}

/// Current local date from the browser clock
pub fn today() -> Option<NaiveDate> {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day)
}
