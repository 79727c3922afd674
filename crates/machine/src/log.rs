//! Logging front-end.
//!
//! Hardware builds log through `defmt`, host builds through `tracing`. With
//! neither feature enabled the macros evaluate their arguments by reference
//! and emit nothing. Format strings must stick to `{}` placeholders so they
//! are valid for both backends.

macro_rules! log_at {
    ($level:ident, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::$level!($fmt $(, $arg)*);
        #[cfg(feature = "tracing")]
        tracing::$level!($fmt $(, $arg)*);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        {
            $(let _ = &$arg;)*
        }
    }};
}

macro_rules! debug {
    ($($t:tt)*) => { $crate::log::log_at!(debug, $($t)*) };
}

macro_rules! info {
    ($($t:tt)*) => { $crate::log::log_at!(info, $($t)*) };
}

// `warn` collides with the builtin lint attribute.
macro_rules! warning {
    ($($t:tt)*) => { $crate::log::log_at!(warn, $($t)*) };
}

macro_rules! error {
    ($($t:tt)*) => { $crate::log::log_at!(error, $($t)*) };
}

pub(crate) use {debug, error, info, log_at, warning};
