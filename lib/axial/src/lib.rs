mod axial;
mod layout;
mod map;

pub use axial::{round, Axial, DIRECTIONS};
pub use layout::{Convert, Layout};
pub use map::Map;
