// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Run the given block only when the `$cond` flag is `true`. This is used to gate debug
/// logging behind module level `const DEBUG_*: bool` flags, so that the hot paths don't
/// pay for formatting when the flag is off.
///
/// ```
/// use snapshot_history::call_if_true;
/// const DEBUG: bool = true;
/// call_if_true!(DEBUG, {
///     tracing::debug!(message = "history saved", len = 3);
/// });
/// ```
#[macro_export]
macro_rules! call_if_true {
    ($cond:ident, $block: expr) => {{
        if $cond {
            $block
        }
    }};
}
