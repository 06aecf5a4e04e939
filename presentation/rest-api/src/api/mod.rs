pub mod error;
pub mod health;
pub mod inventory;
pub mod product;
pub mod recommendation;
pub mod tags;
