use hexmap_rs::{HexMapError, MapConfig, generate_map, success_message};

fn main() -> Result<(), HexMapError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MapConfig::default();
    generate_map(&config)?;

    println!("{}", success_message(&config.output_path));
    Ok(())
}
