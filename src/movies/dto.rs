use serde::Deserialize;

fn default_page() -> u32 {
    1
}

fn default_language() -> String {
    "ru-RU".into()
}

#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    #[serde(default = "default_language")]
    pub language: String,
}
