use crate::core::data::frame::FractalFrame;
use std::path::Path;

pub trait FramePresenterPort {
    fn present(&self, frame: &FractalFrame, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
