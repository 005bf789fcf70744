use init::server_init::server_init_proc;
use mimalloc::MiMalloc;
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

// modules tree
pub mod build_info;
pub mod docs;
pub mod dto {
    pub mod requests {
        pub mod submit_comment_request;
    }
    pub mod responses {
        pub mod response_data;
        pub mod response_meta;
        pub mod submit_comment_response;
    }
}
pub mod errors {
    pub mod code_error;
    pub mod validation_error;
}
pub mod handlers {
    pub mod comment {
        pub mod submit_comment;
    }
    pub mod server {
        pub mod healthcheck;
        pub mod root;
    }
}
pub mod routes {
    pub mod main_router;
    pub mod middleware {
        pub mod logging;
    }
}
pub mod init {
    pub mod config;
    pub mod server_init;
    pub mod state;
}
pub mod util {
    pub mod extract {
        pub mod payload;
    }
    pub mod time {
        pub mod duration_formatter;
        pub mod now;
    }
}
pub mod validation {
    pub mod comment_rules;
    pub mod rules;
}

// main function
#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let start = tokio::time::Instant::now();
    tracing_subscriber::fmt().init();

    info!("Initializing server...");
    server_init_proc(start).await?;

    Ok(())
}
