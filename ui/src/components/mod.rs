pub mod alerts;
pub mod footer;
pub mod listens;
pub mod login;
pub mod modal;
pub mod pin;
pub mod simple;

pub use alerts::*;
pub use footer::Footer;
pub use listens::*;
pub use login::Login;
pub use modal::*;
pub use pin::*;
pub use simple::*;
