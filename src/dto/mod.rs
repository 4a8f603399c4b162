mod node;
mod request;
mod response;

pub use node::*;
pub use request::*;
pub use response::*;
