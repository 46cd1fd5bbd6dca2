use canvas_ruler;

fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the ruler demo application
    canvas_ruler::run_app()
}
