#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub distance_unit: String,
    pub distance_precision: u8,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            distance_unit: std::env::var("DISTANCE_UNIT")
                .unwrap_or_else(|_| "kilometers".to_string()),
            distance_precision: std::env::var("DISTANCE_PRECISION")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .unwrap_or(3),
        }
    }
}
