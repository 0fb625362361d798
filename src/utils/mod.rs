pub mod format;
pub mod share;

pub use format::format_thousands;
pub use share::share_text;
