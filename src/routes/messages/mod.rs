mod generate;
mod message;
mod routes;

pub use generate::*;
pub use message::*;
pub use routes::*;
