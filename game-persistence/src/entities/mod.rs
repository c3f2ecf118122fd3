pub mod prelude;

pub mod game_tries;
pub mod games;
pub mod tries;
pub mod words;
