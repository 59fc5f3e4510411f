//! src/configuration.rs
use config::{Config, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub site: SiteSettings,
    #[serde(default)]
    pub waitlist: Option<WaitlistSettings>,
}

impl Settings {
    pub fn set_waitlist_url(&mut self, endpoint_url: String) {
        match &mut self.waitlist {
            Some(waitlist_settings) => waitlist_settings.endpoint_url = endpoint_url,
            None => {
                self.waitlist = Some(WaitlistSettings {
                    endpoint_url,
                    response_mode: ResponseMode::default(),
                })
            }
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SiteSettings {
    /// The landing document: input and output of the pre-render step, and the
    /// file served at `/`.
    pub document: PathBuf,
    #[serde(default)]
    pub meta: MetaSettings,
}

/// Strings synchronized into the document head. Every field falls back to the
/// production copy, so a configuration file only needs to name what it
/// overrides.
#[derive(Deserialize, Clone, Debug)]
pub struct MetaSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_keywords")]
    pub keywords: String,
    #[serde(default = "default_og_image")]
    pub og_image: String,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_author")]
    pub author: String,
}

impl Default for MetaSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            keywords: default_keywords(),
            og_image: default_og_image(),
            url: default_url(),
            author: default_author(),
        }
    }
}

fn default_title() -> String {
    "MyCandid - Authentic Social Media Platform | Real Moments, Real Connections".into()
}

fn default_description() -> String {
    "Join MyCandid, the social media platform where authenticity is everything. \
     Share only what you capture in the moment. No filters, no fake content - \
     just real human connections."
        .into()
}

fn default_keywords() -> String {
    "authentic social media, real moments, genuine connections, unfiltered content, \
     capture only app, authentic social network, candid moments, real social media, \
     social media for real people"
        .into()
}

fn default_og_image() -> String {
    "https://images.unsplash.com/photo-1765294661150-130e24807964?w=1200&h=630&fit=crop".into()
}

fn default_url() -> String {
    "https://www.mycandid.social".into()
}

fn default_author() -> String {
    "MyCandid".into()
}

#[derive(Deserialize, Clone, Debug)]
pub struct WaitlistSettings {
    pub endpoint_url: String,
    #[serde(default)]
    pub response_mode: ResponseMode,
}

/// How much of the collection endpoint's response the client is allowed to
/// see. The spreadsheet-backed endpoint only confirms dispatch, so `Opaque`
/// is the default; `Readable` expects a JSON `{success, message}` body.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    #[default]
    Opaque,
    Readable,
}

#[derive(PartialEq)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if not specified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");

    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(File::from(configuration_directory.join(environment.as_str())).required(true))
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;

    if environment == Environment::Local {
        let waitlist_file_path = configuration_directory.join("waitlist");
        let _ = dotenvy::from_filename(waitlist_file_path);
    }

    // The collection endpoint comes from the environment, never from the
    // files. An absent endpoint is legal: the client reports it as a
    // configuration error at submit time instead of failing the boot.
    settings.waitlist = envy::prefixed("WAITLIST_")
        .from_env::<WaitlistSettings>()
        .ok();

    Ok(settings)
}
