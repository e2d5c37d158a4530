pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
