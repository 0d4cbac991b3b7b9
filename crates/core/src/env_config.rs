//! Numeric settings read from the environment.

use std::fmt::Display;
use std::str::FromStr;

/// Read `var` as a `T`, or `default` when it is unset, blank or unparsable.
///
/// Only the unparsable case is logged: it is the one that hides a typo such as
/// `WEBSHELF_DB_POOL_SIZE=fuor`.
pub fn env_parse_with_default<T>(var: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Ok(raw) = std::env::var(var) else {
        return default;
    };
    let value = raw.trim();
    if value.is_empty() {
        return default;
    }
    value.parse().unwrap_or_else(|err| {
        tracing::warn!(var, value, %err, fallback = %default, "ignoring unparsable setting");
        default
    })
}
