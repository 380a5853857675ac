//! Форматирование значений для отображения

use chrono::{DateTime, NaiveDateTime};

/// Релевантность чанка с двумя знаками: `0.92`
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Размер файла в B/KB/MB
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// ISO datetime → `DD.MM.YYYY HH:MM`.
///
/// Понимает RFC 3339 и naive-формат backend'а (без зоны, с микросекундами).
/// Нераспознанная строка возвращается как есть.
pub fn format_uploaded_at(value: &str) -> String {
    const OUT: &str = "%d.%m.%Y %H:%M";
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format(OUT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(OUT).to_string();
    }
    value.to_string()
}

/// Обрезать текст до `max` символов с многоточием
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.92), "0.92");
        assert_eq!(format_score(0.9271), "0.93");
        assert_eq!(format_score(1.0), "1.00");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(20480), "20.0 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
    }

    #[test]
    fn test_format_uploaded_at() {
        assert_eq!(format_uploaded_at("2025-03-01T10:15:00.123456"), "01.03.2025 10:15");
        assert_eq!(format_uploaded_at("2025-03-01T10:15:00"), "01.03.2025 10:15");
        assert_eq!(format_uploaded_at("2025-03-01T10:15:00Z"), "01.03.2025 10:15");
        assert_eq!(format_uploaded_at("yesterday"), "yesterday");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("Привет мир", 6), "Привет…");
    }
}
