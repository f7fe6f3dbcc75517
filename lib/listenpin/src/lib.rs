pub mod error;
pub mod listenbrainz;
pub mod services;
pub mod traits;

pub use services::{Services, ServicesBuilder};
pub use traits::{AccountProvider, ListenSource, PinService};
