mod login;
pub use login::Login;

mod home;
pub use home::Home;

mod users;
pub use users::Users;
