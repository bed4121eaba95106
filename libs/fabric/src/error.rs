pub use courier_core::error::{Error, Result};
