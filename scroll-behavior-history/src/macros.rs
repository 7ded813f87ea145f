#[cfg(feature = "tracing")]
macro_rules! hdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scroll_behavior_history", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! hdebug {
    ($($tt:tt)*) => {};
}
