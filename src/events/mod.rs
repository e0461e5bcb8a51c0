mod pointer;
mod scroll;

pub use pointer::wire_pointer;
pub use scroll::{read_scroll, wire_scroll};
