fn main() -> Result<(), Box<dyn std::error::Error>> {
    fractal_zoom::zoom_demo_controller()
}
