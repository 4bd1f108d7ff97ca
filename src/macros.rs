//! A small handful of helper macros

#[cfg(test)]
use std::sync::atomic::AtomicBool;

// Helper macro so that the structural preconditions of the node methods can be checked in debug
// mode, but skipped in release mode.
macro_rules! weak_assert {
    ($cond:expr $(,)?) => {{
        if cfg!(debug_assertions) && !$cond {
            panic!(concat!("debug assertion failed: ", stringify!($cond)));
        }
    }};
    ($cond:expr, $($args:tt)+) => {{
        if cfg!(debug_assertions) && !$cond {
            panic!($($args)+);
        }
    }};
}

#[cfg(test)]
pub(crate) static DEBUG: AtomicBool = AtomicBool::new(false);

#[cfg(test)]
macro_rules! enable_debug {
    () => {{
        $crate::macros::DEBUG.store(true, std::sync::atomic::Ordering::SeqCst);
    }};
}

#[cfg(test)]
macro_rules! disable_debug {
    () => {{
        $crate::macros::DEBUG.store(false, std::sync::atomic::Ordering::SeqCst);
    }};
}

macro_rules! debug_println {
    ($($args:tt)*) => {
        #[cfg(test)]
        {
            if $crate::macros::DEBUG.load(std::sync::atomic::Ordering::SeqCst) {
                println!($($args)*);
            }
        };
    };
}
