//! API layer - HTTP endpoints and response shaping

pub mod health;
pub mod router;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_support;

pub use router::create_router;
pub use state::AppState;
