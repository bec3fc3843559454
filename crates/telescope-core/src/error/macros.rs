//! Error macros for telescope

/// Return early with a configuration error
#[macro_export]
macro_rules! bail_config {
    ($($arg:tt)*) => {
        return Err($crate::error::TelescopeError::config(format!($($arg)*)))
    };
}

/// Return early with a network error
#[macro_export]
macro_rules! bail_network {
    ($($arg:tt)*) => {
        return Err($crate::error::TelescopeError::network(format!($($arg)*)))
    };
}
