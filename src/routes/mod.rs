mod campaigns;
mod health_check;
mod messages;

pub use campaigns::*;
pub use health_check::*;
pub use messages::*;
