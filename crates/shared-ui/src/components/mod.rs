pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod page_header;
pub mod separator;
pub mod skeleton;
pub mod toast;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use page_header::*;
pub use separator::*;
pub use skeleton::*;
pub use toast::*;
