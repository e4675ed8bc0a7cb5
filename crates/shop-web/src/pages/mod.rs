//! Page Components

mod home;
mod product;
mod success;

pub use home::HomePage;
pub use product::ProductPage;
pub use success::SuccessPage;
