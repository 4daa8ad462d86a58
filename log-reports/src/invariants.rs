use std::{str::FromStr, sync::LazyLock};

use chrono::DateTime;
use derive_more::{AsRef, Debug, Display};
use regex::Regex;
use serde::Serialize;

static FILENAME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+\.\w+").expect("valid regex"));

// Timestamp format in the log: 01/Jun/1995:00:00:59 -0600
const LOG_TS_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";
const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// A filename-like token (word characters, a dot, word characters)
/// extracted from a request path.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Filename(String);

impl Filename {
    /// Leftmost filename-like token in a path, if any.
    pub fn first_in(path: &str) -> Option<Self> {
        FILENAME_TOKEN
            .find(path)
            .map(|m| Self(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A log timestamp reformatted as `YYYY/MM/DD HH:MM:SS` in its own
/// UTC offset. `Ord` is plain string order, which is also the report
/// sort order; offsets are never normalized, so ordering across mixed
/// offsets is not an instant ordering.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FormattedTime(String);

impl FormattedTime {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for FormattedTime {
    type Err = chrono::format::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let moment = DateTime::parse_from_str(s, LOG_TS_FORMAT)?;
        Ok(Self(moment.format(DISPLAY_FORMAT).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    #[test]
    fn filename_is_leftmost_dotted_token() {
        let filename = Filename::first_in("/images/logo.png").unwrap();
        assert_eq!(filename.as_str(), "logo.png");

        let filename = Filename::first_in("/a/page.php/backup.old").unwrap();
        assert_eq!(filename.as_str(), "page.php");
    }

    #[test]
    fn path_without_dot_has_no_filename() {
        assert_that!(Filename::first_in("/api/v1/users")).is_none();
    }

    #[test]
    fn formatted_time_keeps_own_offset() {
        let time: FormattedTime = "10/Oct/2023:13:55:36 -0700".parse().unwrap();
        assert_eq!(time.as_str(), "2023/10/10 13:55:36");

        let time: FormattedTime = "01/Jan/2024:00:00:00 +0000".parse().unwrap();
        assert_eq!(time.as_str(), "2024/01/01 00:00:00");
    }

    #[test]
    fn formatted_time_rejects_malformed_input() {
        assert_that!("not a timestamp".parse::<FormattedTime>()).is_err();
        assert_that!("32/Jan/2024:00:00:00 +0000".parse::<FormattedTime>()).is_err();
    }

    #[test]
    fn formatted_time_orders_as_string() {
        let earlier: FormattedTime = "01/Jan/2024:00:00:00 +0000".parse().unwrap();
        let later: FormattedTime = "02/Jan/2024:00:00:00 +0000".parse().unwrap();
        assert!(earlier < later);
    }
}
