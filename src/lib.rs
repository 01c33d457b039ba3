pub mod codec;
pub mod compare;
pub mod error;
pub mod models;
pub mod report;

pub use codec::CodecRegistry;
pub use compare::{compare, rmse_between};
pub use error::{CodecError, CompareError};
