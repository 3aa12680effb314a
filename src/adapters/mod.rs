// Adapters layer: concrete implementations for external systems.

pub mod api_client;
pub mod gemini;

#[cfg(feature = "cli")]
pub mod terminal;
