use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::router::RouteTable;

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let table = RouteTable::portfolio();

    match output_format {
        OutputFormat::Json => {
            output_success(&output_format, "Route table", Some(json!({ "routes": table.entries() })))?;
        }
        OutputFormat::Text => {
            for entry in table.entries() {
                let guard = match entry.matched.iter().rev().find_map(|m| m.required_role.as_deref()) {
                    Some(role) => format!("auth, role={}", role),
                    None if entry.matched.iter().any(|m| m.requires_auth) => "auth".to_string(),
                    None => "public".to_string(),
                };
                println!("{:<18} {:<20} {}", entry.name, entry.pattern, guard);
            }
        }
    }

    Ok(())
}
