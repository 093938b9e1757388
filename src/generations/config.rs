pub static API_URL: &str = "https://api.infip.pro";
pub static GENERATIONS_PATH: &str = "/v1/images/generations";

pub fn generations_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), GENERATIONS_PATH)
}
