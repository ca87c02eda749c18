pub mod bike_handlers;
pub mod brand_handlers;
pub mod error;
pub mod handlers;
pub mod instance_handlers;
pub mod routes;

pub use bike_handlers::*;
pub use brand_handlers::*;
pub use error::*;
pub use handlers::*;
pub use instance_handlers::*;
pub use routes::*;
