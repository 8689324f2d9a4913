//! The operation interface every raster operator implements
use raster_core::buffer::PixelBuffer;
use raster_core::log::trace;

use crate::errors::OpsErrors;

/// Encapsulates a single raster operation.
///
/// The operator borrows the buffer for the duration of one call,
/// mutates it in place (the histogram being the one read-only
/// exception) and never retains it afterwards. Calls are synchronous
/// and run to completion; there is no partial-result or abort path.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation, manipulating the buffer in place
    ///
    /// # Errors
    /// Any operation error is propagated to the caller; the buffer is
    /// untouched when an error is returned.
    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), OpsErrors>;

    /// Execute the operation, logging it before delegating to
    /// [`execute_impl`](Self::execute_impl)
    ///
    /// # Errors
    /// Any operation error is propagated to the caller.
    fn execute(&self, buffer: &mut PixelBuffer) -> Result<(), OpsErrors> {
        trace!("Running operation {}", self.name());
        self.execute_impl(buffer)
    }
}
