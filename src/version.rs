// Build-time identity, logged on stderr when a replay starts

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary/package name, e.g. "printstate".
pub const NAME: &str = env!("CARGO_PKG_NAME");
