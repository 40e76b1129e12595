/// Community Service Library
///
/// In-memory community feed: posts grouped into communities, hashtag and text
/// filtering, three feed tabs, per-viewer votes on posts and comments, and a
/// composer for new posts and comments. All state lives in process.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `services`: Business logic layer over the shared store
/// - `middleware`: Request extractors (viewer identity)
/// - `state`: Handler state wiring
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
/// - `openapi`: API document
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod openapi;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
