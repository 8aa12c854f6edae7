use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AppError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(AppError::validation("Invalid email format"))
    }
}

/// Trims the value and treats blank text as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation("Invalid date format, expected YYYY-MM-DD"))
}

/// Page number and size as supplied on the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn parse(page: Option<&str>, page_size: Option<&str>) -> Result<Self, AppError> {
        Ok(Self {
            page: parse_positive("page", page, DEFAULT_PAGE)?,
            page_size: parse_positive("page_size", page_size, DEFAULT_PAGE_SIZE)?,
        })
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

fn parse_positive(name: &str, raw: Option<&str>, default: u32) -> Result<u32, AppError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(AppError::validation(format!(
            "{name} must be a positive integer"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.co")]
    #[case("first.last+tag@sub.example.org")]
    #[case("under_score%x@host-name.io")]
    fn accepts_well_formed_addresses(#[case] email: &str) {
        assert!(is_valid_email(email));
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("a@b.c")]
    #[case("@example.com")]
    #[case("john@")]
    #[case("john doe@example.com")]
    #[case("")]
    fn rejects_malformed_addresses(#[case] email: &str) {
        assert!(!is_valid_email(email));
        assert_eq!(
            validate_email(email),
            Err(AppError::validation("Invalid email format"))
        );
    }

    #[test]
    fn page_defaults_to_first_ten() {
        let page = PageRequest::parse(None, None).unwrap();
        assert_eq!(page, PageRequest::default());
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let page = PageRequest::parse(Some("3"), Some("25")).unwrap();
        assert_eq!(page.offset(), 50);
        assert_eq!(page.limit(), 25);
    }

    #[rstest]
    #[case(Some("0"), None)]
    #[case(Some("-1"), None)]
    #[case(Some("two"), None)]
    #[case(None, Some("0"))]
    #[case(None, Some("1.5"))]
    fn rejects_non_positive_or_non_numeric(#[case] page: Option<&str>, #[case] size: Option<&str>) {
        assert!(matches!(
            PageRequest::parse(page, size),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn blank_text_counts_as_missing() {
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(Some(" Ada ".into())), Some("Ada".into()));
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn dates_must_be_iso_calendar_days() {
        assert_eq!(
            parse_date("2026-02-14").unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
        );
        assert!(parse_date("14/02/2026").is_err());
        assert!(parse_date("2026-02-30").is_err());
    }
}
