//! Interactive shopping session.
//!
//! One long-lived process standing in for the app's screens: onboarding
//! gates, browsing, the cart, checkout, orders, and the profile. The
//! cart lives and dies with the session; only the auth state and device
//! flags persist.

use std::thread;
use std::time::Duration;

use anyhow::{bail, Context as _, Result};
use brew_commerce::catalog::Product;
use brew_commerce::orders::OrderStatus;
use dialoguer::{Confirm, Input, Password, Select};

use super::{auth, notifications, product, profile};
use crate::context::Context;
use crate::output::status_badge;

/// Run the interactive session.
pub fn run(ctx: &mut Context) -> Result<()> {
    onboarding(ctx)?;

    loop {
        let cart_items = ctx.app.shop().cart().item_count();
        let menu = [
            "Browse beers".to_string(),
            format!("Cart ({cart_items})"),
            "Checkout".to_string(),
            "Orders".to_string(),
            "Notifications".to_string(),
            "Profile".to_string(),
            "Exit".to_string(),
        ];

        let choice = Select::new()
            .with_prompt(format!("\n{} — what next?", ctx.app.config().name))
            .items(&menu)
            .default(0)
            .interact()?;

        match choice {
            0 => browse_screen(ctx)?,
            1 => cart_screen(ctx)?,
            2 => checkout_screen(ctx)?,
            3 => orders_screen(ctx)?,
            4 => notifications::render_feed(ctx),
            5 => {
                if profile_screen(ctx)? {
                    break;
                }
            }
            _ => break,
        }
    }

    ctx.output.info("Thanks for stopping by!");
    Ok(())
}

/// First-run gates: welcome, age verification, location permission,
/// sign-in. Answers are persisted as device flags, so each gate shows
/// at most once per device.
fn onboarding(ctx: &mut Context) -> Result<()> {
    if !ctx.app.user().flags().welcome_seen {
        ctx.output.header(&format!("Welcome to {}", ctx.app.config().name));
        ctx.output.info("Craft beer, delivered cold.");
        ctx.app.user_mut().set_welcome_seen();
    }

    if !ctx.app.user().flags().age_verified {
        let of_age = Confirm::new()
            .with_prompt("Are you of legal drinking age?")
            .default(false)
            .interact()?;
        if !of_age {
            bail!("BrewDash is only available to users of legal drinking age");
        }
        ctx.app.user_mut().set_age_verified(true);
    }

    if !ctx.app.user().flags().location_granted {
        let granted = Confirm::new()
            .with_prompt("Allow location access for delivery estimates?")
            .default(true)
            .interact()?;
        ctx.app.user_mut().set_location_granted(granted);
    }

    if !ctx.app.user().is_authenticated() {
        ctx.output.info("Sign in to start shopping.");
        let email: String = Input::new().with_prompt("Email").interact_text()?;
        let password: String = Password::new().with_prompt("Password").interact()?;
        auth::prompt_session(ctx, &email, &password)?;
    }

    Ok(())
}

fn browse_screen(ctx: &mut Context) -> Result<()> {
    loop {
        let products: Vec<Product> = ctx.app.catalog().products().to_vec();
        let mut items: Vec<String> = products
            .iter()
            .map(super::browse::listing_line)
            .collect();
        items.push("Back".to_string());

        let choice = Select::new()
            .with_prompt("Pick a beer")
            .items(&items)
            .default(0)
            .interact()?;
        let Some(picked) = products.get(choice) else {
            return Ok(());
        };

        let category = ctx
            .app
            .catalog()
            .category_name(&picked.category)
            .unwrap_or(picked.category.as_str())
            .to_string();
        product::render_detail(&ctx.output, picked, &category);

        let add = Confirm::new()
            .with_prompt("Add to cart?")
            .default(true)
            .interact()?;
        if !add {
            continue;
        }

        let quantity: u32 = Input::new()
            .with_prompt("Quantity")
            .default(1)
            .interact_text()?;
        match ctx.app.shop_mut().add_to_cart(picked, quantity) {
            Ok(()) => ctx
                .output
                .success(&format!("Added {quantity} × {} to cart", picked.name)),
            Err(e) => ctx.output.warn(&e.to_string()),
        }
    }
}

fn cart_screen(ctx: &mut Context) -> Result<()> {
    loop {
        if ctx.app.shop().cart().is_empty() {
            ctx.output.info("Your cart is empty.");
            return Ok(());
        }

        render_cart(ctx)?;

        let lines = ctx.app.shop().cart().lines().to_vec();
        let mut items: Vec<String> = lines
            .iter()
            .map(|l| format!("{} × {}", l.quantity, l.name))
            .collect();
        items.push("Back".to_string());

        let choice = Select::new()
            .with_prompt("Adjust a line")
            .items(&items)
            .default(items.len() - 1)
            .interact()?;
        let Some(line) = lines.get(choice) else {
            return Ok(());
        };

        let actions = ["Add one", "Remove one", "Remove line", "Back"];
        let action = Select::new()
            .with_prompt(&line.name)
            .items(&actions)
            .default(3)
            .interact()?;

        match action {
            0 => {
                let picked = ctx.app.catalog().require(&line.product_id)?.clone();
                if let Err(e) = ctx.app.shop_mut().add_to_cart(&picked, 1) {
                    ctx.output.warn(&e.to_string());
                }
            }
            1 => {
                ctx.app.shop_mut().remove_one_from_cart(&line.product_id);
            }
            2 => {
                ctx.app.shop_mut().remove_from_cart(&line.product_id);
            }
            _ => {}
        }
    }
}

fn render_cart(ctx: &Context) -> Result<()> {
    ctx.output.header("Your Cart");
    let cart = ctx.app.shop().cart();

    for line in cart.lines() {
        let total = line.line_total().context("Cart total overflow")?;
        ctx.output.list_item(&format!(
            "{} × {} @ {} = {}",
            line.quantity,
            line.name,
            line.unit_price.display(),
            total.display()
        ));
    }

    let subtotal = cart.subtotal().context("Cart total overflow")?;
    ctx.output.kv("Total", &subtotal.display());
    Ok(())
}

fn checkout_screen(ctx: &mut Context) -> Result<()> {
    if ctx.app.shop().cart().is_empty() {
        ctx.output.warn("Your cart is empty — add something first.");
        return Ok(());
    }

    render_cart(ctx)?;

    let confirmed = Confirm::new()
        .with_prompt("Place this order?")
        .default(true)
        .interact()?;
    if !confirmed {
        ctx.output.info("Cancelled.");
        return Ok(());
    }

    let spinner = ctx.output.spinner("Placing your order...");
    thread::sleep(Duration::from_millis(400));
    let placed = ctx.app.shop_mut().place_order().context("Checkout failed")?;
    spinner.finish_and_clear();

    match placed {
        Some(id) => {
            let order = ctx
                .app
                .shop()
                .order(&id)
                .context("Placed order missing from history")?;
            ctx.output.success(&format!(
                "Order #{id} placed — total {}",
                order.total.display()
            ));
            ctx.output.info("Track it from the Orders screen.");
        }
        None => ctx.output.warn("Your cart is empty — add something first."),
    }
    Ok(())
}

fn orders_screen(ctx: &mut Context) -> Result<()> {
    if ctx.app.shop().orders().is_empty() {
        ctx.output.info("No orders yet.");
        return Ok(());
    }

    ctx.output.header("Your Orders");
    ctx.output.table_row(
        &["ORDER", "DATE", "ITEMS", "TOTAL", "STATUS"],
        &[20, 22, 6, 10, 10],
    );
    ctx.output.info(&"-".repeat(76));

    let orders = ctx.app.shop().orders().to_vec();
    for order in &orders {
        ctx.output.table_row(
            &[
                order.id.as_str(),
                &order.date,
                &order.item_count().to_string(),
                &order.total.display(),
                &status_badge(order.status),
            ],
            &[20, 22, 6, 10, 10],
        );
    }

    let mut items: Vec<String> = orders.iter().map(|o| format!("#{}", o.id)).collect();
    items.push("Back".to_string());
    let choice = Select::new()
        .with_prompt("Open an order")
        .items(&items)
        .default(items.len() - 1)
        .interact()?;
    let Some(order) = orders.get(choice) else {
        return Ok(());
    };

    let actions = ["Track delivery", "Mark delivered", "Back"];
    let action = Select::new()
        .with_prompt(format!("Order #{}", order.id))
        .items(&actions)
        .default(0)
        .interact()?;

    match action {
        0 => track_screen(ctx, &order.id)?,
        1 => {
            if ctx
                .app
                .shop_mut()
                .update_order_status(&order.id, OrderStatus::Delivered)
            {
                ctx.output.success("Marked as delivered. Cheers!");
            } else {
                ctx.output.warn("Nothing to update for that order.");
            }
        }
        _ => {}
    }
    Ok(())
}

fn track_screen(ctx: &Context, id: &brew_commerce::ids::OrderId) -> Result<()> {
    let order = ctx.app.shop().order(id).context("Order not found")?;

    ctx.output.header(&format!("Order #{}", order.id));
    ctx.output.kv("Status", &status_badge(order.status));
    ctx.output.kv("Placed", &order.date);

    if order.is_delivered() {
        ctx.output.info("Delivered — enjoy!");
    } else {
        ctx.output.kv("Estimated time", "20 minutes");
        ctx.output.kv("Delivery partner", "Sanjay (+91 99999 88888)");
        ctx.output.kv("Location", "Near your area, Lucknow");
    }
    Ok(())
}

/// Returns `true` when the user signed out, which ends the session.
fn profile_screen(ctx: &mut Context) -> Result<bool> {
    profile::render_profile(ctx);

    let actions = ["Edit profile", "Sign out", "Back"];
    let action = Select::new()
        .with_prompt("Profile")
        .items(&actions)
        .default(2)
        .interact()?;

    match action {
        0 => {
            let update = profile::prompt_update(ctx)?;
            ctx.app.user_mut().update_profile(update);
            ctx.output.success("Profile updated.");
            Ok(false)
        }
        1 => {
            let confirmed = Confirm::new()
                .with_prompt("Sign out? Your cart will be emptied")
                .default(false)
                .interact()?;
            if confirmed {
                ctx.app.logout();
                ctx.output.success("Signed out. See you soon!");
                return Ok(true);
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}
