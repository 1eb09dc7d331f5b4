pub mod list;
pub mod serve;
pub mod signup;
pub mod unregister;

use roster_server::ServerError;

/// Wrap a client failure, pointing at `roster serve` when nothing is listening.
pub(crate) fn with_hint(err: ServerError) -> anyhow::Error {
    let unreachable = matches!(err, ServerError::NotRunning { .. });
    let err = anyhow::Error::new(err);
    if unreachable {
        err.context("no roster server answered; start one with `roster serve`")
    } else {
        err
    }
}
