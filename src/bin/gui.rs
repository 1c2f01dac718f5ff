use env_logger::Env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    mandelbrot_explorer::run_gui(mandelbrot_explorer::ViewerConfig::default())
}
