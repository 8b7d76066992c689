use clap::Args;
use serde_json::json;
use std::time::Duration;

use crate::cli::utils::{output_success, print_toasts};
use crate::cli::OutputFormat;
use crate::toast::NewToast;
use crate::types::ToastKind;
use crate::UiContext;

#[derive(Args)]
pub struct ToastArgs {
    #[arg(help = "Toast message")]
    pub message: String,

    #[arg(long, default_value = "default", help = "success|error|info|warning|default|upcoming|new-feature")]
    pub kind: ToastKind,

    #[arg(long, help = "Milliseconds until expiry, 0 keeps it until dismissed")]
    pub duration_ms: Option<u64>,

    #[arg(long, default_value_t = 1, help = "Add the toast this many times")]
    pub repeat: usize,

    #[arg(long, help = "Wait this long before listing, to watch toasts expire")]
    pub wait_ms: Option<u64>,
}

pub async fn handle(args: ToastArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let ui = UiContext::from_env();

    for n in 1..=args.repeat.max(1) {
        let message = if args.repeat > 1 {
            format!("{} #{}", args.message, n)
        } else {
            args.message.clone()
        };

        let mut toast = NewToast::new(message).kind(args.kind);
        if let Some(duration_ms) = args.duration_ms {
            toast = toast.duration_ms(duration_ms);
        }
        ui.toasts.add_toast(toast);
    }

    if let Some(wait_ms) = args.wait_ms {
        tokio::time::sleep(Duration::from_millis(wait_ms)).await;
    }

    let toasts = ui.toasts.toasts();
    let message = format!(
        "{} of {} toast(s) in the queue (capacity {})",
        toasts.len(),
        args.repeat.max(1),
        ui.toasts.capacity()
    );

    match output_format {
        OutputFormat::Json => output_success(&output_format, &message, Some(json!({ "toasts": toasts })))?,
        OutputFormat::Text => {
            output_success(&output_format, &message, None)?;
            print_toasts(&toasts);
        }
    }

    Ok(())
}
