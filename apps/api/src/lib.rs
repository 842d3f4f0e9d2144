pub mod analysis;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod lexicon;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod state;
pub mod synthesis;
pub mod text;
