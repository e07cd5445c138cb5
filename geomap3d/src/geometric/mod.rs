pub mod bar;
pub mod surface;

pub use bar::Bar;
pub use surface::{Surface, SurfacePoint};
