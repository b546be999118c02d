pub mod home;
pub mod login;
pub mod profile;
pub mod register;

pub use home::HomePage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
