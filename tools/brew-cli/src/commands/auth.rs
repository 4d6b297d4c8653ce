//! Session commands: login and logout.

use anyhow::{Context as _, Result};
use dialoguer::{Confirm, Input, Password};

use super::{LoginArgs, LogoutArgs};
use crate::context::Context;

/// Run the login command.
pub fn login(args: LoginArgs, ctx: &mut Context) -> Result<()> {
    if ctx.app.user().is_authenticated() {
        ctx.output.info(&format!(
            "Already signed in as {}",
            ctx.app.user().profile().email
        ));
        return Ok(());
    }

    let email = match args.email {
        Some(email) => email,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password: String = Password::new().with_prompt("Password").interact()?;

    prompt_session(ctx, &email, &password)
}

/// Sign in and report the outcome. Shared with the interactive session.
pub fn prompt_session(ctx: &mut Context, email: &str, password: &str) -> Result<()> {
    ctx.app
        .login(email, password)
        .context("Sign in failed")?;
    ctx.output
        .success(&format!("Signed in as {}", ctx.app.user().profile().email));
    Ok(())
}

/// Run the logout command.
pub fn logout(args: LogoutArgs, ctx: &mut Context) -> Result<()> {
    if !ctx.app.user().is_authenticated() {
        ctx.output.info("Not signed in.");
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Sign out? Your cart will be emptied")
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Cancelled.");
            return Ok(());
        }
    }

    ctx.app.logout();
    ctx.output.success("Signed out.");
    Ok(())
}
