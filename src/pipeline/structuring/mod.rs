pub mod types;
pub mod parser;
pub mod fingerprint;

pub use types::*;
pub use parser::*;
pub use fingerprint::*;
