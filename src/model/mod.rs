pub mod bike;
pub mod bike_instance;
pub mod brand;
pub mod common;

pub use bike::*;
pub use bike_instance::*;
pub use brand::*;
pub use common::*;
