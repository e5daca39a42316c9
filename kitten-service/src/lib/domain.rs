pub mod kitten;
pub mod user;
