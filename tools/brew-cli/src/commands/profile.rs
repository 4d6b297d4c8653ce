//! Profile commands.

use anyhow::{Context as _, Result};
use brew_auth::ProfileUpdate;
use dialoguer::Input;

use super::{ProfileArgs, ProfileCommand};
use crate::context::Context;

/// Run the profile command.
pub fn run(args: ProfileArgs, ctx: &mut Context) -> Result<()> {
    match args.command {
        Some(ProfileCommand::Show) | None => show(ctx),
        Some(ProfileCommand::Edit {
            name,
            email,
            avatar,
        }) => edit(ctx, name, email, avatar),
    }
}

fn show(ctx: &mut Context) -> Result<()> {
    ctx.app
        .user()
        .require_token()
        .context("Sign in to view your profile")?;

    if ctx.output.is_json() {
        ctx.output.json(ctx.app.user().profile());
        return Ok(());
    }

    render_profile(ctx);
    Ok(())
}

/// Render the profile card; shared with the interactive session.
pub fn render_profile(ctx: &Context) {
    let output = &ctx.output;
    let profile = ctx.app.user().profile();
    let flags = ctx.app.user().flags();

    output.header("Profile");
    output.kv("Name", &profile.name);
    output.kv("Email", &profile.email);
    if !profile.avatar.is_empty() {
        output.kv("Avatar", &profile.avatar);
    }
    output.kv("Age verified", if flags.age_verified { "yes" } else { "no" });
    output.kv(
        "Location access",
        if flags.location_granted { "granted" } else { "not granted" },
    );
}

fn edit(
    ctx: &mut Context,
    name: Option<String>,
    email: Option<String>,
    avatar: Option<String>,
) -> Result<()> {
    ctx.app
        .user()
        .require_token()
        .context("Sign in to edit your profile")?;

    let update = if name.is_none() && email.is_none() && avatar.is_none() {
        prompt_update(ctx)?
    } else {
        ProfileUpdate {
            name,
            email,
            avatar,
        }
    };

    ctx.app.user_mut().update_profile(update);
    ctx.output.success("Profile updated.");
    Ok(())
}

/// Interactively edit every field, keeping current values as defaults.
pub fn prompt_update(ctx: &Context) -> Result<ProfileUpdate> {
    let profile = ctx.app.user().profile();

    let name: String = Input::new()
        .with_prompt("Name")
        .with_initial_text(&profile.name)
        .allow_empty(true)
        .interact_text()?;
    let email: String = Input::new()
        .with_prompt("Email")
        .with_initial_text(&profile.email)
        .allow_empty(true)
        .interact_text()?;
    let avatar: String = Input::new()
        .with_prompt("Avatar URL")
        .with_initial_text(&profile.avatar)
        .allow_empty(true)
        .interact_text()?;

    Ok(ProfileUpdate::default()
        .name(name)
        .email(email)
        .avatar(avatar))
}
