use chrono::{DateTime, Local};

/// Source of capture timestamps for transcript segments.
pub trait Clock: Send {
    fn now(&self) -> DateTime<Local>;
}
