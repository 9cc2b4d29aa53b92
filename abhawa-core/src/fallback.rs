use crate::model::{IconTag, WeatherSnapshot};

/// Static seven-day outlook served whenever live acquisition fails.
///
/// Field values are generic and fixed; nothing here depends on network
/// state or the current date.
pub fn fallback_forecast() -> Vec<WeatherSnapshot> {
    vec![
        entry("Today", "আজ", 31, "Clouds", "মেঘলা", IconTag::Cloud, 74),
        entry("Mon", "সোম", 32, "Clear", "রৌদ্রোজ্জ্বল", IconTag::Clear, 68),
        entry("Tue", "মঙ্গল", 30, "Rain", "বৃষ্টি", IconTag::Rain, 85),
        entry("Wed", "বুধ", 29, "Rain", "বৃষ্টি", IconTag::Rain, 88),
        entry("Thu", "বৃহঃ", 31, "Clouds", "মেঘলা", IconTag::Cloud, 76),
        entry("Fri", "শুক্র", 32, "Haze", "আংশিক মেঘলা", IconTag::PartlyCloudy, 70),
        entry("Sat", "শনি", 33, "Clear", "রৌদ্রোজ্জ্বল", IconTag::Clear, 64),
    ]
}

fn entry(
    day: &str,
    day_localized: &str,
    temperature_c: i32,
    condition: &str,
    condition_localized: &str,
    icon: IconTag,
    humidity_pct: u8,
) -> WeatherSnapshot {
    WeatherSnapshot {
        day: day.to_string(),
        day_localized: day_localized.to_string(),
        temperature_c,
        condition: condition.to_string(),
        condition_localized: condition_localized.to_string(),
        icon,
        humidity_pct,
    }
}
