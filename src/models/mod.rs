pub mod params;
pub mod record;

pub use params::*;
pub use record::*;
