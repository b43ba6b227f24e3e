pub mod config;
pub mod config_processors;
pub mod errors;
pub mod index;
pub mod io;
pub mod recommender;
