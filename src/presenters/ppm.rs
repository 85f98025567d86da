use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::data::frame::FractalFrame;
use std::io::Write;
use std::path::Path;

pub struct PpmFilePresenter {}

impl FramePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FractalFrame, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = std::fs::File::create(filepath)?;
        let buffer = frame.buffer();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", buffer.width(), buffer.height())?;
        writeln!(file, "255")?;

        let mut rgb = Vec::with_capacity(buffer.pixels().len() * 3);
        for &argb in buffer.pixels() {
            rgb.push((argb >> 16) as u8);
            rgb.push((argb >> 8) as u8);
            rgb.push(argb as u8);
        }
        file.write_all(&rgb)?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
