pub mod rasterize_frame;
