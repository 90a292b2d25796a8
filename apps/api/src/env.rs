use std::sync::OnceLock;

use serde::Deserialize;

fn default_port() -> u16 {
    8080
}

fn default_s3_region() -> String {
    "us-east-1".to_string()
}

#[derive(Deserialize)]
pub struct Env {
    #[serde(default = "default_port")]
    pub port: u16,

    pub s3_bucket_name: String,
    #[serde(default = "default_s3_region")]
    pub s3_region: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    #[serde(default)]
    pub s3_endpoint_url: Option<String>,

    pub assemblyai_api_key: String,
    #[serde(default)]
    pub assemblyai_api_base: Option<String>,
}

impl Env {
    pub fn s3_config(&self) -> blockify_s3::Config {
        blockify_s3::Config {
            bucket: self.s3_bucket_name.clone(),
            region: self.s3_region.clone(),
            access_key_id: self.aws_access_key_id.clone(),
            secret_access_key: self.aws_secret_access_key.clone(),
            endpoint_url: self.s3_endpoint_url.clone(),
        }
    }
}

static ENV: OnceLock<Env> = OnceLock::new();

pub fn env() -> &'static Env {
    ENV.get_or_init(|| {
        let _ = dotenvy::dotenv();
        envy::from_env().expect("Failed to load environment")
    })
}

/// Pipeline tuning knobs are read separately so their serde defaults apply
/// per field (`SPEAKER_DETECTION`, `MAX_RETRIES`, ...).
pub fn blockifier_config() -> blockify_blockifier::BlockifierConfig {
    envy::from_env().expect("Failed to load blockifier configuration")
}
