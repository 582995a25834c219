
use crate::build_context;

use tempfile::TempDir;
use vv_config::Config;
use vv_session::SessionContext;

pub(crate) const DOCTOR_EMAIL: &str = "sarah.johnson@hospital.com";
pub(crate) const DOCTOR_PASSWORD: &str = "doctor123";

/// Context over a fresh config directory, already initialized.
pub(crate) async fn temp_context(dir: &TempDir) -> SessionContext {
    let config = Config::default();
    let context = build_context(&config, dir.path());
    context.initialize().await;
    context
}
