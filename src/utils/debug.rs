use once_cell::sync::Lazy;

/// Set when `MOVEQUOTE_DEBUG` is present in the environment; checked once per process
pub static DEBUG_MODE: Lazy<bool> = Lazy::new(|| std::env::var("MOVEQUOTE_DEBUG").is_ok());

/// `eprintln!` that only fires under `MOVEQUOTE_DEBUG`.
///
/// Quote traces (rate fallbacks, catalog lookups, trip facts) go to stderr
/// so the breakdown on stdout can still be piped as JSON.
///
/// ```
/// use movequote::debug_println;
/// let truck_days = 4;
/// debug_println!("Truck days: {}", truck_days);
/// ```
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if *$crate::utils::debug::DEBUG_MODE {
            eprintln!($($arg)*);
        }
    };
}

pub use debug_println;
