mod pointer;
mod resize;

pub use pointer::wire_pointer_tracking;
pub use resize::wire_debounced_resize;
