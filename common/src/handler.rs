//! [`Handler`] abstractions.

use std::future::Future;

/// Handler executing `Args` and producing either [`Handler::Ok`] or
/// [`Handler::Err`].
///
/// Commands, queries and storage operations are all expressed as
/// implementations of this trait for the different `Args` they accept.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
