use clap::Args;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{AuthSession, Profile, User};
use crate::cli::utils::{output_success, print_toasts};
use crate::cli::OutputFormat;
use crate::modal::{ReplyKind, ScriptedReply, ScriptedResponder};
use crate::UiContext;

#[derive(Args)]
pub struct NavigateArgs {
    #[arg(help = "Path to navigate to, e.g. /admin/projects")]
    pub path: String,

    #[arg(long, help = "Navigate as a signed-in user")]
    pub authenticated: bool,

    #[arg(long, help = "Profile role of the signed-in user")]
    pub role: Option<String>,

    #[arg(long, default_value = "confirm", help = "How every modal is answered: confirm|cancel|close")]
    pub reply: ReplyKind,

    #[arg(long, help = "Attach {\"accepted\": true} to the reply payload")]
    pub accept: bool,
}

pub async fn handle(args: NavigateArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let ui = UiContext::from_env();

    let session = if args.authenticated {
        let user = User {
            id: Uuid::new_v4(),
            email: "cli@localhost".to_string(),
        };
        let profile = args.role.as_deref().map(|role| Profile::new(user.id, role));
        AuthSession::signed_in(user, profile)
    } else {
        AuthSession::new()
    };

    let payload = args.accept.then(|| json!({ "accepted": true }));
    let responder = ScriptedResponder::new()
        .otherwise(ScriptedReply::new(args.reply, payload))
        .spawn(&ui.modals);

    let router = ui.router(Arc::new(session));
    let outcome = router.push(&args.path).await;
    responder.abort();
    let report = outcome?;

    let toasts = ui.toasts.toasts();
    let message = if report.redirects.is_empty() {
        format!("Navigated to {} ({})", report.location.path, report.location.name)
    } else {
        format!(
            "Navigation to {} redirected to {} ({})",
            report.requested, report.location.path, report.location.name
        )
    };

    match output_format {
        OutputFormat::Json => output_success(
            &output_format,
            &message,
            Some(json!({ "navigation": report, "toasts": toasts })),
        )?,
        OutputFormat::Text => {
            output_success(&output_format, &message, None)?;
            if !report.redirects.is_empty() {
                println!("Redirects: {}", report.redirects.join(" -> "));
            }
            print_toasts(&toasts);
        }
    }

    Ok(())
}
