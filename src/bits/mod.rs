pub mod reader;
pub use reader::{bytes_match_at, read_u32_le, u32_le_at};
