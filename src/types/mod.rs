mod lat_long;
mod point;
mod rect;

pub use lat_long::*;
pub use point::*;
pub use rect::*;
