pub mod action_recommender;
pub mod client;
pub mod label_extractor;
