//! Post store backed by SeaORM.

mod base;
mod connections;
mod post_repo;

pub mod entity;

pub use base::SeaOrmBaseRepository;
pub use connections::{DatabaseConfig, connect};
pub use post_repo::SeaOrmPostRepository;

#[cfg(test)]
mod tests;
