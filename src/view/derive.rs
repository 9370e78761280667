//! Display fields derived from record text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::data::Exhibition;

/// Year shown when neither the record nor its title carries one.
pub const DEFAULT_YEAR: &str = "2020";

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").expect("valid year regex"));
static YEAR_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\d{4}.*").expect("valid year suffix regex"));

/// First two whitespace-separated tokens of a name.
pub fn short_name(name: &str) -> String {
    name.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
}

/// Bio text up to (not including) the first period.
pub fn short_bio(bio: &str) -> &str {
    bio.split('.').next().unwrap_or_default()
}

/// First run of four digits in a title.
pub fn year_in_title(title: &str) -> Option<&str> {
    YEAR.find(title).map(|m| m.as_str())
}

/// The explicit year, else the year in the title, else [`DEFAULT_YEAR`].
pub fn exhibition_year(exhibition: &Exhibition) -> String {
    exhibition
        .year
        .clone()
        .or_else(|| year_in_title(&exhibition.title).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_YEAR.to_string())
}

/// Title with the year and everything after it removed.
pub fn short_title(title: &str) -> String {
    YEAR_SUFFIX.replace(title, "").trim().to_string()
}
