//! Room entity.

pub mod model;
pub mod types;

pub use model::{CreateRoom, Room, UpdateRoom};
pub use types::{RoomStatus, RoomType};
