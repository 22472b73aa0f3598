pub mod canvas;
pub mod halfblock;
pub mod paint;
pub mod surface;

pub use canvas::{Canvas, ColorMode, RenderMode};
pub use paint::{ColorStop, LinearGradient, Paint, Rgb};
pub use surface::{SCENE_SIZE, Surface, Viewport};
