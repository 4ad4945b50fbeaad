use once_cell::sync::Lazy;
use regex::Regex;

/// Link reference definitions (`[label]: url`) are not section content
pub static LINK_LABEL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[[^\[\]]*\] *?:").expect("Failed to compile link label regex"));

/// An h1 or h2 markdown heading opens a new section
pub static SECTION_HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^##? ?[^#]").expect("Failed to compile section heading regex"));

pub static VERSION_LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[?(v?[\w.-]+\.[\w.-]+[a-zA-Z0-9])\]?")
        .expect("Failed to compile version label regex")
});

pub static HEADING_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r".*[ ](\d{1,4}[-/.]\d{1,2}[-/.]\d{1,4}).*")
        .expect("Failed to compile heading date regex")
});
