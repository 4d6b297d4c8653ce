//! Notification feed command.

use anyhow::Result;
use brew_app::NotificationKind;
use chrono::Utc;
use console::style;

use crate::context::Context;

/// Run the notifications command.
pub fn run(ctx: &mut Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.app.notifications().all());
        return Ok(());
    }

    render_feed(ctx);
    Ok(())
}

/// Render the feed; shared with the interactive session.
pub fn render_feed(ctx: &Context) {
    let output = &ctx.output;
    output.header("Notifications");

    let feed = ctx.app.notifications();
    if feed.is_empty() {
        output.info("Nothing here yet.");
        return;
    }

    let now = Utc::now().timestamp();
    for notification in feed.all() {
        let title = match notification.kind {
            NotificationKind::Success => style(&notification.title).green().bold(),
            NotificationKind::Info => style(&notification.title).cyan().bold(),
            NotificationKind::Neutral => style(&notification.title).bold(),
        };
        output.info(&format!("{title}"));
        output.kv("", &notification.body);
        output.kv("", &style(notification.age_display(now)).dim().to_string());
    }
}
