//! Debug utilities for tracing codec decisions
//!
//! Enable with `--features debug`; `trace!` then forwards to the `log` facade.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// `0x`-prefixed lowercase hex
pub fn hex_prefixed(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Format an uncompressed point as `(0x<x>, 0x<y>)`. Each coordinate is half the buffer.
pub fn point_to_hex(point: &[u8]) -> String {
    let (x, y) = point.split_at(point.len() / 2);
    format!("({}, {})", hex_prefixed(x), hex_prefixed(y))
}

/// Debug trace macro
#[cfg(feature = "debug")]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::__log::trace!($($arg)*)
    };
}

/// Debug trace macro (noop when debug feature disabled)
#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}
