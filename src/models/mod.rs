pub mod rates;
pub mod response;

pub use rates::*;
pub use response::*;
