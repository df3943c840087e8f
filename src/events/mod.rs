pub mod pointer;
pub mod resize;

pub use pointer::pointer_listener;
pub use resize::resize_listener;
