/// Pair with a bridge and obtain an application key
pub mod auth;
/// Find bridges on the local network
pub mod discover;
/// Fetch a resource from the configured bridge
pub mod get;
/// Write the settings file
pub mod setup;
