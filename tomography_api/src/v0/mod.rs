pub mod api_models;
pub mod assembly;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
mod router;
pub mod window;

pub use router::router;
