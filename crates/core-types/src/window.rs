use crate::error::CoreError;

/// How many minutes of history a request covers.
///
/// Always within `MIN..=MAX`; construct it with [`LookbackWindow::new`] or
/// [`LookbackWindow::from_query`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackWindow(u32);

impl LookbackWindow {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 60;
    pub const DEFAULT: u32 = 30;

    pub fn new(minutes: i64) -> Result<Self, CoreError> {
        if minutes < i64::from(Self::MIN) || minutes > i64::from(Self::MAX) {
            return Err(CoreError::InvalidRange(minutes));
        }
        Ok(Self(minutes as u32))
    }

    /// Interprets the raw `m` query parameter.
    ///
    /// A missing value, or one without a leading integer, falls back to `DEFAULT`.
    /// Trailing garbage after the digits is ignored, so `"12abc"` means 12.
    pub fn from_query(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw.and_then(parse_leading_integer) {
            Some(minutes) => Self::new(minutes),
            None => Ok(Self::default()),
        }
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl Default for LookbackWindow {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Reads an optionally signed run of decimal digits from the start of `raw`.
/// Values too large for an `i64` saturate, which still lands outside the valid range.
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
