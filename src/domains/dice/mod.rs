pub mod models;

pub use models::RandomDie;
