use std::sync::atomic::{AtomicU64, Ordering};

use crate::dto::requests::submit_comment_request::SubmitCommentRequest;
use crate::validation::rules::Ruleset;

use super::builder::ServerStateBuilder;
use super::deployment_environment::DeploymentEnvironment;

pub struct ServerState {
    pub(crate) app_name_version: String,
    pub(crate) server_start_time: tokio::time::Instant,
    pub(crate) responses_handled: AtomicU64,
    pub(crate) deployment_environment: DeploymentEnvironment,
    // Built once at startup; every request validates against the same table.
    pub(crate) comment_rules: Ruleset<SubmitCommentRequest>,
}

impl ServerState {
    pub fn builder() -> ServerStateBuilder {
        ServerStateBuilder::default()
    }

    pub fn get_app_name_version(&self) -> &str {
        &self.app_name_version
    }

    pub fn get_uptime(&self) -> std::time::Duration {
        self.server_start_time.elapsed()
    }

    pub fn add_responses_handled(&self) {
        self.responses_handled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_responses_handled(&self) -> u64 {
        self.responses_handled.load(Ordering::Relaxed)
    }

    pub fn get_deployment_environment(&self) -> DeploymentEnvironment {
        self.deployment_environment
    }

    pub fn comment_rules(&self) -> &Ruleset<SubmitCommentRequest> {
        &self.comment_rules
    }
}

#[cfg(test)]
mod tests {
    use super::ServerState;

    #[test]
    fn responses_counter_accumulates() {
        let state = ServerState::builder()
            .app_name_version("comment-board test".to_string())
            .server_start_time(tokio::time::Instant::now())
            .build()
            .unwrap();

        assert_eq!(state.get_responses_handled(), 0);
        state.add_responses_handled();
        state.add_responses_handled();
        assert_eq!(state.get_responses_handled(), 2);
    }
}
