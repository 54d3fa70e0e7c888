//! Logging shims for the drawing code.
//!
//! Strokes log at `trace`, repaints and skipped raster work at `debug`, and
//! raster paths tiny-skia refuses to build at `warn`. With the `tracing`
//! feature off, every macro drops its arguments without evaluating them.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

// `#[macro_export]` puts these at the crate root; the prefixed names keep them
// from showing up as `shapedraw::debug!` and friends.
#[cfg(not(feature = "tracing"))]
mod disabled {
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __shapedraw_debug {
        ($($arg:tt)*) => {};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __shapedraw_trace {
        ($($arg:tt)*) => {};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __shapedraw_warn {
        ($($arg:tt)*) => {};
    }
}

#[cfg(not(feature = "tracing"))]
pub use crate::{
    __shapedraw_debug as debug, __shapedraw_trace as trace, __shapedraw_warn as warn,
};
