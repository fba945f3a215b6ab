use launcher_icons::{generate, logger, GeneratorConfig, IconError};

fn main() -> Result<(), IconError> {
    logger::init();

    let config = GeneratorConfig::default();
    if let Err(e) = generate(&config) {
        logger::log_error("launcher icon generation failed", &e);
        return Err(e);
    }

    println!("\nAll launcher icons created successfully!");
    Ok(())
}
