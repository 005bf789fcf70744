#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeploymentEnvironment {
    Local,
    Dev,
    Staging,
    Prod,
}

impl DeploymentEnvironment {
    /// Reads CURR_ENV; unset or unrecognized values fall back to Local.
    pub fn from_env() -> Self {
        match std::env::var("CURR_ENV") {
            Ok(value) => Self::parse(&value),
            Err(_) => DeploymentEnvironment::Local,
        }
    }

    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "dev" | "development" => DeploymentEnvironment::Dev,
            "stg" | "staging" => DeploymentEnvironment::Staging,
            "prd" | "prod" | "production" => DeploymentEnvironment::Prod,
            _ => DeploymentEnvironment::Local,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentEnvironment::Local => "local",
            DeploymentEnvironment::Dev => "dev",
            DeploymentEnvironment::Staging => "staging",
            DeploymentEnvironment::Prod => "prod",
        }
    }
}
