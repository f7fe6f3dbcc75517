mod home;
mod login;
mod profile;

pub use home::HomePage;
pub use login::LoginPage;
pub use profile::ProfilePage;
