use std::time::Instant;

use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::controllers::session::{ExplorerSession, ZOOM_FACTOR};
use crate::controllers::zoom_sequencer::ANIMATION_FRAMES;
use crate::presenters::ppm::PpmFilePresenter;

/// Drives the pipeline end to end as a stand-in display collaborator: reset
/// to the default view, run one zoom gesture towards the seahorse valley,
/// drain the animation in order, and save the final frame.
pub fn zoom_demo_controller() -> Result<(), Box<dyn std::error::Error>> {
    let filepath = "output/mandelbrot.ppm";
    let mut session = ExplorerSession::new();

    println!("Rendering default Mandelbrot view...");
    session.reset()?;
    let mut current = session.next_frame()?;
    println!(
        "Initial view: size {:.2}, {} iterations",
        current.viewport().width(),
        current.max_iterations()
    );

    // Pixel (167, 187) of the default view sits near (-0.75, 0.1).
    println!("Zooming {}x towards the seahorse valley...", ZOOM_FACTOR);
    session.start_zoom(167.0, 187.0, ZOOM_FACTOR, None)?;

    let start = Instant::now();
    for _ in 0..ANIMATION_FRAMES {
        current = session.next_frame()?;
        println!(
            "  frame: size {:.4}, {} iterations",
            current.viewport().width(),
            current.max_iterations()
        );
    }
    println!("Rendered {} frames in {:?}", ANIMATION_FRAMES, start.elapsed());

    std::fs::create_dir_all("output")?;
    PpmFilePresenter::new().present(&current, filepath)?;
    println!("Saved to {}", filepath);

    session.shutdown();
    Ok(())
}
