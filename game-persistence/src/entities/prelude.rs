pub use super::game_tries::Entity as GameTries;
pub use super::games::Entity as Games;
pub use super::tries::Entity as Tries;
pub use super::words::Entity as Words;
