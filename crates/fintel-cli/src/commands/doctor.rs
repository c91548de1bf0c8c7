use fintel_db::repos::health::{ConnectionReport, TableStatus};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_rows};

#[derive(Debug, Serialize)]
struct DoctorResponse {
    healthy: bool,
    database: &'static str,
    location: String,
    auth_configured: bool,
    signed_in: bool,
    total_records: i64,
    tables: Vec<TableStatus>,
}

/// Count rows in every table and report how the app is wired up.
///
/// An unhealthy database is reported, and also fails the command so scripts
/// can check the exit status.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx.service.check_connection().await;
    let healthy = report.is_healthy();
    let response = describe(ctx, report);

    match flags.format {
        OutputFormat::Table => {
            output_rows(&response.tables, flags.format)?;
            println!(
                "\n{} database at {}: {} records",
                response.database, response.location, response.total_records
            );
        }
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format)?,
    }

    if !healthy {
        anyhow::bail!("database check failed");
    }
    Ok(())
}

fn describe(ctx: &AppContext, report: ConnectionReport) -> DoctorResponse {
    let database = &ctx.config.database;
    let (kind, location) = if ctx.service.db().is_remote() {
        ("remote", database.url.clone())
    } else {
        ("local", database.local_path.clone())
    };
    DoctorResponse {
        healthy: report.is_healthy(),
        database: kind,
        location,
        auth_configured: ctx.config.auth.is_configured(),
        signed_in: ctx.is_authenticated(),
        total_records: report.total_records,
        tables: report.tables,
    }
}
