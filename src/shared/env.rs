/// Load `.env.{RUST_ENV}` if it exists, otherwise `.env`. Missing files are fine;
/// the process environment always wins over either.
pub fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}
