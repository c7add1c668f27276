/// Tokens that never qualify as keywords, regardless of length.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
];

/// Tokens must be longer than this many characters to become keywords.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Max keywords kept per transcript line.
pub const MAX_KEYWORDS: usize = 5;

/// Max search links produced for a whole session.
pub const MAX_LINKS: usize = 5;

pub const DEFAULT_TRUSTED_SOURCES: &[&str] = &[
    "https://developer.mozilla.org",
    "https://docs.python.org",
    "https://stackoverflow.com/questions",
];

pub const SEARCH_PATH: &str = "/search?q=";

pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

pub const CONFIG_DIR_NAME: &str = "speechlink";
pub const CONFIG_FILE_NAME: &str = "config.json";
