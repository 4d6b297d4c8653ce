//! Product detail command.

use anyhow::Result;
use brew_commerce::catalog::Product;
use brew_commerce::ids::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::output::{rating_stars, Output};

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &mut Context) -> Result<()> {
    let catalog = ctx.app.catalog();
    let product = catalog.require(&ProductId::new(args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    let category = catalog
        .category_name(&product.category)
        .unwrap_or(product.category.as_str());
    render_detail(&ctx.output, product, category);
    Ok(())
}

/// Render the detail card; shared with the interactive session.
pub fn render_detail(output: &Output, product: &Product, category: &str) {
    output.header(&product.name);
    output.info(&product.tagline);
    output.kv("Price", &product.price.display());
    output.kv(
        "Rating",
        &format!("{} ({} reviews)", rating_stars(product.rating), product.reviews),
    );
    output.kv("Category", category);
    output.kv("Pour", &format!("{} · {}", product.volume, product.abv));
    output.kv("Image", &product.image);
}
