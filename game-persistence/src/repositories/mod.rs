pub mod game_repository;
pub mod try_repository;
pub mod word_repository;

pub use game_repository::GameRepository;
pub use try_repository::TryRepository;
pub use word_repository::WordRepository;
