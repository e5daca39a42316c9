pub mod kitten;
pub mod memory;
pub mod user;

pub use kitten::PostgresKittenRepository;
pub use memory::InMemoryKittenRepository;
pub use memory::InMemoryUserRepository;
pub use user::PostgresUserRepository;
