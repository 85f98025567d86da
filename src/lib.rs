mod controllers;
mod core;
mod presenters;

pub use controllers::julia_probe::probe_julia_set;
pub use controllers::pipeline::bounded_queue::{BoundedQueue, QueueClosed};
pub use controllers::pipeline::view_pipeline::{QUEUE_CAPACITY, ViewPipeline};
pub use controllers::ports::frame_presenter::FramePresenterPort;
pub use controllers::session::{
    ExplorerSession, SessionError, VIEW_HEIGHT, VIEW_WIDTH, ZOOM_FACTOR,
};
pub use controllers::zoom_demo::zoom_demo_controller;
pub use controllers::zoom_sequencer::{ANIMATION_FRAMES, ZoomError, sequence_zoom};
pub use crate::core::actions::rasterize_frame::rasterize_frame;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame::{FractalFrame, IterationStats, MIN_ITERATIONS};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::iteration::escape_iterations;
pub use crate::core::fractals::kinds::FractalKind;
pub use crate::core::fractals::palette::{OPAQUE_BLACK, PALETTE_SIZE, colour_for_iterations};
pub use crate::core::util::estimate_iterations::estimate_iterations;
pub use presenters::ppm::PpmFilePresenter;
