pub mod session;

pub use session::{GamePhase, GameSession, GameSettings};
