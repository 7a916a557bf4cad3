use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc, Weekday};

const MONTHS_MALAY: [&str; 12] = [
    "Januari", "Februari", "Mac", "April", "Mei", "Jun", "Julai", "Ogos", "September",
    "Oktober", "November", "Disember",
];

fn digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Groups a 12 digit IC number as `123456-12-1234`.
///
/// Input that does not contain exactly 12 digits is returned unchanged.
pub fn format_ic_number(ic: &str) -> String {
    let cleaned = digits(ic);
    if cleaned.len() != 12 {
        return ic.to_string();
    }
    format!("{}-{}-{}", &cleaned[..6], &cleaned[6..8], &cleaned[8..])
}

/// Groups a 10 or 11 digit mobile number as `01X-XXXXXXX(X)`.
pub fn format_phone_number(phone: &str) -> String {
    let cleaned = digits(phone);
    match cleaned.len() {
        10 | 11 => format!("{}-{}", &cleaned[..3], &cleaned[3..]),
        _ => phone.to_string(),
    }
}

/// Formats an amount in sen as ringgit, e.g. `RM 1,234.56`.
pub fn format_currency(amount_sen: i64) -> String {
    let sign = if amount_sen < 0 { "-" } else { "" };
    let abs = amount_sen.unsigned_abs();
    let ringgit = (abs / 100).to_string();
    let sen = abs % 100;

    let mut grouped = String::with_capacity(ringgit.len() + ringgit.len() / 3);
    for (i, c) in ringgit.chars().enumerate() {
        if i > 0 && (ringgit.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}RM {}.{:02}", sign, grouped, sen)
}

/// Formats ringgit input such as `50`, `50.5` or `1,234.56` into sen.
///
/// Returns `None` for anything that is not a plain non-negative amount with at most
/// two decimal places.
pub fn parse_ringgit(input: &str) -> Option<i64> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    let (whole, fraction) = match cleaned.split_once('.') {
        Some((w, f)) => (w, f),
        None => (cleaned.as_str(), ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
        || fraction.len() > 2
    {
        return None;
    }

    let ringgit: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let sen: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };

    ringgit.checked_mul(100)?.checked_add(sen)
}

/// `dd/MM/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `dd/MM/yyyy HH:MM` in the given local offset.
pub fn format_date_time(at: DateTime<Utc>, offset: &FixedOffset) -> String {
    at.with_timezone(offset).format("%d/%m/%Y %H:%M").to_string()
}

/// Malay month name for a 1-based month number.
pub fn month_name_malay(month: u32) -> &'static str {
    MONTHS_MALAY
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

pub fn day_name_malay(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Ahad",
        Weekday::Mon => "Isnin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Khamis",
        Weekday::Fri => "Jumaat",
        Weekday::Sat => "Sabtu",
    }
}

/// Long Malay date, e.g. `Ahad, 19 Oktober 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        day_name_malay(date.weekday()),
        date.day(),
        month_name_malay(date.month()),
        date.year()
    )
}

/// Shortens text to `max_chars` characters, appending `...` when cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_ic_number() {
        assert_eq!(format_ic_number("900101145678"), "900101-14-5678");
        assert_eq!(format_ic_number("900101-14-5678"), "900101-14-5678");
        assert_eq!(format_ic_number("12345"), "12345");
    }

    #[test]
    fn groups_phone_number() {
        assert_eq!(format_phone_number("0123456789"), "012-3456789");
        assert_eq!(format_phone_number("01123456789"), "011-23456789");
        assert_eq!(format_phone_number("123"), "123");
    }

    #[test]
    fn formats_ringgit_with_thousands() {
        assert_eq!(format_currency(0), "RM 0.00");
        assert_eq!(format_currency(5_000), "RM 50.00");
        assert_eq!(format_currency(123_456), "RM 1,234.56");
        assert_eq!(format_currency(100_000_000), "RM 1,000,000.00");
        assert_eq!(format_currency(-250), "-RM 2.50");
    }

    #[test]
    fn parses_ringgit_input() {
        assert_eq!(parse_ringgit("50"), Some(5_000));
        assert_eq!(parse_ringgit("50.5"), Some(5_050));
        assert_eq!(parse_ringgit("1,234.56"), Some(123_456));
        assert_eq!(parse_ringgit(".75"), Some(75));
        assert_eq!(parse_ringgit(""), None);
        assert_eq!(parse_ringgit("-5"), None);
        assert_eq!(parse_ringgit("1.234"), None);
        assert_eq!(parse_ringgit("abc"), None);
    }

    #[test]
    fn names_months_and_days_in_malay() {
        assert_eq!(month_name_malay(3), "Mac");
        assert_eq!(month_name_malay(12), "Disember");
        assert_eq!(month_name_malay(13), "");

        let date = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
        assert_eq!(format_long_date(date), "Ahad, 19 Oktober 2025");
    }

    #[test]
    fn truncates_on_character_boundary() {
        assert_eq!(truncate_text("Kelas Mengaji", 5), "Kelas...");
        assert_eq!(truncate_text("Solat", 10), "Solat");
    }
}
