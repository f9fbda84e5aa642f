pub mod assignment;
pub mod draw;
pub mod error;
pub mod predictor;
pub mod report;
pub mod types;

pub use error::{PredictError, Result};
