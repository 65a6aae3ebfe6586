pub mod config;
pub mod error;
pub mod requests;

// Portal core
pub mod dashboard;
pub mod gate;
pub mod identity;
pub mod navigation;
pub mod role;
pub mod routes;
pub mod session;

pub use config::*;
pub use error::*;
pub use requests::*;

pub use dashboard::*;
pub use gate::*;
pub use identity::*;
pub use navigation::*;
pub use role::*;
pub use routes::*;
pub use session::*;
