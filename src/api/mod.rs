pub mod health;
pub mod reviews;
pub mod swagger;
pub mod users;
