//! Ordered strategy chains.

use crate::Error;

/// One named alternative of a chain.
pub(crate) type Strategy<'a, T> = (&'static str, &'a dyn Fn() -> Result<T, Error>);

/// Run strategies in order and return the first success.
///
/// When every strategy fails, the error of the last one is returned.
pub(crate) fn first_success<T>(type_name: &str, strategies: &[Strategy<'_, T>]) -> Result<T, Error> {
    let mut last_error = None;
    for (name, strategy) in strategies {
        match strategy() {
            Ok(value) => return Ok(value),
            Err(err) => {
                log::debug!("{} strategy failed for {}: {}", name, type_name, err);
                last_error = Some(err);
            }
        }
    }
    Err(last_error.unwrap_or_else(|| Error::EmptyResult {
        type_name: type_name.to_string(),
        strategy: "chain",
    }))
}
