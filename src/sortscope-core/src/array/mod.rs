//! Array storage: the plain model and its shared, versioned handle.

mod model;
mod shared;

pub use model::{ArrayModel, MAX_ARRAY_LEN};
pub use shared::SharedArray;
