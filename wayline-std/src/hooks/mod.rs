//! Standard hook implementations.

pub mod chain;
pub mod logging;

pub use chain::HookChain;
pub use logging::LoggingHook;
