//! Virtual device implementations — output pin, climate sensor, link, console.

mod console;
mod dht11;
mod link;
mod output;

pub use console::LogConsole;
pub use dht11::VirtualDht11;
pub use link::VirtualLink;
pub use output::{OutputProbe, VirtualOutput};
