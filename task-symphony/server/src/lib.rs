pub mod config {
    use serde::Deserialize;
    use std::path::PathBuf;

    pub const DEFAULT_PORT: u16 = 4500;
    /// Where `dx bundle --package task_symphony_web --release` leaves the web app.
    pub const DEFAULT_ROOT: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../target/dx/task_symphony_web/release/web/public"
    );

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct ServerConfig {
        /// Port bound on every interface.
        pub port: u16,
        /// Directory holding `index.html` and the bundled assets.
        pub root: PathBuf,
    }

    impl ServerConfig {
        /// Builds the configuration. Only built-in defaults are consulted, so
        /// the server always comes up on the same port and directory.
        pub fn load() -> Result<Self, config::ConfigError> {
            let settings = config::Config::builder()
                .set_default("port", i64::from(DEFAULT_PORT))?
                .set_default("root", DEFAULT_ROOT)?
                .build()?;

            settings.try_deserialize()
        }
    }

}

pub mod web;
