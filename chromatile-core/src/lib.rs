pub mod channel;
pub mod color;
pub mod convert;
pub mod range;
pub mod raster;
pub mod session;
pub mod space;

pub use channel::{Channel, ChannelSpec, Crosshair, LinearChannel, RadialChannel, SurfaceCoord, SurfacePoint};
pub use color::{ColorPatch, ColorRecord};
pub use convert::{convert_record, to_display_rgb};
pub use range::{scale, Range};
pub use raster::{in_gamut, rasterize, rasterize_with, RasterCache};
pub use session::{initial_color, Session};
pub use space::{space, Mode, SpaceDescriptor, SpaceError};
