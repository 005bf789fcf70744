use std::sync::atomic::AtomicU64;

use crate::validation::comment_rules::comment_ruleset;

use super::deployment_environment::DeploymentEnvironment;
use super::server_state::ServerState;

#[derive(Default)]
pub struct ServerStateBuilder {
    app_name_version: Option<String>,
    server_start_time: Option<tokio::time::Instant>,
}

impl ServerStateBuilder {
    pub fn app_name_version(mut self, app_name_version: String) -> Self {
        self.app_name_version = Some(app_name_version);
        self
    }

    pub fn server_start_time(mut self, server_start_time: tokio::time::Instant) -> Self {
        self.server_start_time = Some(server_start_time);
        self
    }

    pub fn build(self) -> anyhow::Result<ServerState> {
        Ok(ServerState {
            app_name_version: self
                .app_name_version
                .ok_or_else(|| anyhow::anyhow!("app_name_version is required"))?,
            server_start_time: self
                .server_start_time
                .ok_or_else(|| anyhow::anyhow!("server_start_time is required"))?,
            responses_handled: AtomicU64::new(0),
            deployment_environment: DeploymentEnvironment::from_env(),
            comment_rules: comment_ruleset(),
        })
    }
}
