pub mod cli;
pub mod config;
pub mod constants;
pub mod io;
pub mod probe;
pub mod stego;

pub use stego::channel;
pub use stego::embed;
pub use stego::extract;
pub use stego::placement;
