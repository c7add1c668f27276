pub mod buf_read_line_source;
pub mod system_clock;
