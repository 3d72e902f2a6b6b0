pub mod slide_canvas;

pub use slide_canvas::{FrameSurface, PointerListeners, SlideCanvas};
