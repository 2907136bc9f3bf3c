#[macro_export]
macro_rules! trace {
    ($($tt:tt)*) => {};
}

#[macro_export]
macro_rules! debug {
    ($($tt:tt)*) => {};
}

#[macro_export]
macro_rules! info {
    ($($tt:tt)*) => {};
}

#[macro_export]
macro_rules! warn {
    ($($tt:tt)*) => {};
}

#[macro_export]
macro_rules! error {
    ($($tt:tt)*) => {};
}

#[macro_export]
macro_rules! event {
    ($($tt:tt)*) => {};
}

/// Always `false` when tracing is disabled.
#[macro_export]
macro_rules! enabled {
    ($($tt:tt)*) => {
        false
    };
}
