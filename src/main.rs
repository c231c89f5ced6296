/// flowcanvas: design-time canvas editor for workflow automation builders
///
/// Main entry point. Loads configuration and starts the HTTP server that backs
/// the designer front end.

use flowcanvas::{config::Config, server::start_server};

/// Application entry point
///
/// The server provides:
/// - Workflow list and designer lifecycle at /api/workflows, /api/view, /api/designer/*
/// - Template palette at /api/templates
/// - Canvas events at /api/designer/events
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:3004, seeded sample workflows)
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
