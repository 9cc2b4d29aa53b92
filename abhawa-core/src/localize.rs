use chrono::{DateTime, Datelike, FixedOffset};

/// English/Bangla short day names, indexed Sunday = 0 .. Saturday = 6.
const DAY_NAMES: [(&str, &str); 7] = [
    ("Sun", "রবি"),
    ("Mon", "সোম"),
    ("Tue", "মঙ্গল"),
    ("Wed", "বুধ"),
    ("Thu", "বৃহঃ"),
    ("Fri", "শুক্র"),
    ("Sat", "শনি"),
];

/// Label pair used for the current-conditions element.
pub const TODAY_NAMES: (&str, &str) = ("Today", "আজ");

/// Bangla display text for a raw condition string.
///
/// The rules deliberately overlap the classifier's categories: "few
/// clouds" reads as partly cloudy even though it classifies as `cloud`.
pub fn localize_condition(condition: &str) -> &'static str {
    let lower = condition.to_lowercase();

    if lower.contains("rain") {
        "বৃষ্টি"
    } else if lower.contains("cloud") && lower.contains("few") {
        "আংশিক মেঘলা"
    } else if lower.contains("cloud") {
        "মেঘলা"
    } else if lower.contains("clear") || lower.contains("sun") {
        "রৌদ্রোজ্জ্বল"
    } else {
        "আংশিক মেঘলা"
    }
}

/// Paired English/Bangla short day name for the calendar day a UNIX
/// timestamp falls on at the given UTC offset.
pub fn day_names(timestamp: i64, offset: FixedOffset) -> (&'static str, &'static str) {
    let index = DateTime::from_timestamp(timestamp, 0)
        .map(|utc| utc.with_timezone(&offset).weekday().num_days_from_sunday() as usize)
        .unwrap_or(0);

    DAY_NAMES[index]
}
