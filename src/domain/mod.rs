mod campaign;
mod message;
mod profile;
mod validation;

pub use campaign::*;
pub use message::*;
pub use profile::*;
pub use validation::*;
