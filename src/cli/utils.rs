use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::toast::Toast;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(target), Some(Value::Object(extra))) = (response.as_object_mut(), data) {
                target.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(
    output_format: &OutputFormat,
    message: &str,
    error_code: Option<&str>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(code) = error_code {
                response["error_code"] = json!(code);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Text listing of toasts, oldest first; JSON callers embed the toasts instead
pub fn print_toasts(toasts: &[Toast]) {
    if toasts.is_empty() {
        println!("No toasts");
        return;
    }

    for toast in toasts {
        let expiry = if toast.expires() {
            format!("{}ms", toast.duration_ms)
        } else {
            "sticky".to_string()
        };
        println!("  [{}] {} ({}, {})", toast.kind, toast.message, expiry, toast.id);
    }
}
