use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StatusCheckCreateDto {
    pub client_name: String,
}
