use std::path::Path;

pub mod bot;
pub mod configuration;
pub mod dialogues;
pub mod logic;
pub mod telemetry;
pub mod web;

pub fn set_env() {
    let env_file = Path::new(".env");
    if env_file.exists() {
        if let Err(err) = dotenv::from_filename(".env") {
            eprintln!("Failed to load .env: {err}");
        }
    }
}
