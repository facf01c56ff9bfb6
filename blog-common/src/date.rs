use chrono::{Datelike, NaiveDate};

use crate::error::{BlogError, Result};

/// 葡萄牙语（巴西）月份名称
const MONTHS_PT_BR: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

/// 解析 `YYYY-MM-DD` 日期，月和日允许一位数字
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| BlogError::InvalidDate(date_str.to_string()))
}

/// 将日历日期格式化为 "15 de setembro de 2025"
///
/// 日历日期不携带时区，结果与宿主进程的本地时区无关。
pub fn format_naive_date(date: NaiveDate) -> String {
    format!(
        "{:02} de {} de {}",
        date.day(),
        MONTHS_PT_BR[date.month0() as usize],
        date.year()
    )
}

/// 将 ISO 日期字符串格式化为展示文本
pub fn format_date(date_str: &str) -> Result<String> {
    parse_date(date_str).map(format_naive_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-09-15").unwrap(), "15 de setembro de 2025");
        assert_eq!(format_date("2025-03-01").unwrap(), "01 de março de 2025");
        assert_eq!(format_date("2024-12-31").unwrap(), "31 de dezembro de 2024");
    }

    #[test]
    fn test_format_date_accepts_unpadded_day() {
        assert_eq!(format_date("2025-08-9").unwrap(), "09 de agosto de 2025");
    }

    #[test]
    fn test_format_date_rejects_garbage() {
        assert!(matches!(format_date("ontem"), Err(BlogError::InvalidDate(_))));
        assert!(format_date("2025-02-30").is_err());
    }

    #[test]
    fn test_first_day_of_year_stays_in_year() {
        // 负偏移时区下本地时间会落到前一天
        assert_eq!(format_date("2025-01-01").unwrap(), "01 de janeiro de 2025");
    }
}
