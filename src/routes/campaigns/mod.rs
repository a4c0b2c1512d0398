mod campaign;
mod routes;

pub use campaign::*;
pub use routes::*;
