pub mod activity;
pub mod error;
pub mod rank;
pub mod score;

pub use activity::*;
pub use error::*;
pub use rank::*;
pub use score::*;
