pub mod picture;
pub mod secret;
