//! Problem domain models: a route request and the data supplied by collaborators.

mod closures;
pub use self::closures::*;

mod request;
pub use self::request::*;

mod weather;
pub use self::weather::*;
