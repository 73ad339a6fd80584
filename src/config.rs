#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub logger_timezone: chrono::FixedOffset,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub preview_max_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/predict".to_string(),
            logger_timezone: utc(),
            window_title: "Intel Scene Classifier".to_string(),
            window_size: [480.0, 720.0],
            preview_max_height: 256.0,
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(0).unwrap()
}
