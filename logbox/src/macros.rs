//!
//! Logging macros bound to the process-wide logger installed by
//! [`init`](crate::init). Each macro captures the call site from the
//! expansion location, so frames point at the caller and not at this
//! crate.
//!

/// Logs at [`Verbose`](crate::Level::Verbose) via the global logger.
#[macro_export]
macro_rules! logv {
    (tag: $tag:expr, $content:expr) => {
        $crate::impls::log_impl(
            $crate::Level::Verbose,
            ::core::option::Option::Some($tag),
            ::core::convert::Into::into($content),
            $crate::CallSite::new(file!(), line!(), module_path!()),
        )
    };
    ($content:expr) => {
        $crate::impls::log_impl(
            $crate::Level::Verbose,
            ::core::option::Option::None,
            ::core::convert::Into::into($content),
            $crate::CallSite::new(file!(), line!(), module_path!()),
        )
    };
}

/// Logs at [`Debug`](crate::Level::Debug) via the global logger.
#[macro_export]
macro_rules! logd {
    (tag: $tag:expr, $content:expr) => {
        $crate::impls::log_impl(
            $crate::Level::Debug,
            ::core::option::Option::Some($tag),
            ::core::convert::Into::into($content),
            $crate::CallSite::new(file!(), line!(), module_path!()),
        )
    };
    ($content:expr) => {
        $crate::impls::log_impl(
            $crate::Level::Debug,
            ::core::option::Option::None,
            ::core::convert::Into::into($content),
            $crate::CallSite::new(file!(), line!(), module_path!()),
        )
    };
}

/// Logs at [`Info`](crate::Level::Info) via the global logger.
#[macro_export]
macro_rules! logi {
    (tag: $tag:expr, $content:expr) => {
        $crate::impls::log_impl(
            $crate::Level::Info,
            ::core::option::Option::Some($tag),
            ::core::convert::Into::into($content),
            $crate::CallSite::new(file!(), line!(), module_path!()),
        )
    };
    ($content:expr) => {
        $crate::impls::log_impl(
            $crate::Level::Info,
            ::core::option::Option::None,
            ::core::convert::Into::into($content),
            $crate::CallSite::new(file!(), line!(), module_path!()),
        )
    };
}

/// Logs at [`Warn`](crate::Level::Warn) via the global logger.
#[macro_export]
macro_rules! logw {
    (tag: $tag:expr, $content:expr) => {
        $crate::impls::log_impl(
            $crate::Level::Warn,
            ::core::option::Option::Some($tag),
            ::core::convert::Into::into($content),
            $crate::CallSite::new(file!(), line!(), module_path!()),
        )
    };
    ($content:expr) => {
        $crate::impls::log_impl(
            $crate::Level::Warn,
            ::core::option::Option::None,
            ::core::convert::Into::into($content),
            $crate::CallSite::new(file!(), line!(), module_path!()),
        )
    };
}

/// Logs at [`Error`](crate::Level::Error) via the global logger.
#[macro_export]
macro_rules! loge {
    (tag: $tag:expr, $content:expr) => {
        $crate::impls::log_impl(
            $crate::Level::Error,
            ::core::option::Option::Some($tag),
            ::core::convert::Into::into($content),
            $crate::CallSite::new(file!(), line!(), module_path!()),
        )
    };
    ($content:expr) => {
        $crate::impls::log_impl(
            $crate::Level::Error,
            ::core::option::Option::None,
            ::core::convert::Into::into($content),
            $crate::CallSite::new(file!(), line!(), module_path!()),
        )
    };
}
