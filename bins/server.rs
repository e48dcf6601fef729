use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> std::process::ExitCode {
    // .env first, so RUST_LOG / DATABASE_URL / SERVER_PORT take effect
    dotenv().ok();

    // Config decides the log format and level, so it loads before the subscriber
    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Fall back to default logging just to report the bad config
            common::utils::logging::init_logging_default(false);
            error!(service = "bookshelf", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    // Shared logging init: compact or JSON, debug flag raises the default level
    common::utils::logging::init_logging(cfg.server.debug, cfg.server.log_json);
    info!(service = "bookshelf", event = "logger_init", "tracing subscriber initialized");

    // Service instance context (nothing sensitive)
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panic hook: log panics as structured error events
    std::panic::set_hook(Box::new({
        let service_id = service_id;
        move |info| {
            error!(
                service = "bookshelf",
                event = "panic",
                %service_id,
                pid,
                message = %info,
                "unhandled panic occurred"
            );
        }
    }));

    // Tokio runtime with the configured worker thread count
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "bookshelf", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    // Service start event
    info!(
        service = "bookshelf",
        event = "start",
        %service_id,
        pid,
        version,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "bookshelf service starting"
    );

    // server::run returns once Ctrl+C has drained in-flight requests
    rt.block_on(async move {
        match server::run(cfg).await {
            Ok(()) => {
                info!(service = "bookshelf", event = "stop", %service_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                // Bind, database or serve failure
                error!(service = "bookshelf", event = "run_failed", error = %e, "server::run returned error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
