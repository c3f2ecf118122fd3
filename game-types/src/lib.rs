pub mod game;
pub mod messages;
pub mod word;
pub mod errors;

use uuid::Uuid;

pub type WordId = Uuid;
pub type TryId = Uuid;
pub type GameId = Uuid;
pub type UserId = Uuid;

// Re-export all types
pub use game::*;
pub use messages::*;
pub use word::*;
pub use errors::*;
