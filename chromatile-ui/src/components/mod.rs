pub mod space_selector;
pub mod tile;

pub use space_selector::SpaceSelector;
pub use tile::ChannelTile;
