//! Catalog browsing command.

use anyhow::{bail, Result};
use brew_commerce::browse::{BrowseQuery, Filter, SortKey, SortOrder};
use brew_commerce::money::Money;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::rating_stars;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &mut Context) -> Result<()> {
    let query = build_query(&args, ctx)?;
    let catalog = ctx.app.catalog();
    let results = query.apply(catalog.products());

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output.header(&format!("{} Catalog", ctx.app.config().name));

    if results.is_empty() {
        ctx.output.info("No products match those filters.");
        return Ok(());
    }

    ctx.output.table_row(
        &["ID", "NAME", "CATEGORY", "PRICE", "RATING", "POUR"],
        &[4, 22, 10, 10, 8, 18],
    );
    ctx.output.info(&"-".repeat(80));

    for product in &results {
        let category = catalog
            .category_name(&product.category)
            .unwrap_or(product.category.as_str());
        let pour = format!("{} · {}", product.volume, product.abv);
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                category,
                &product.price.display(),
                &format!("{:.1}", product.rating),
                &pour,
            ],
            &[4, 22, 10, 10, 8, 18],
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!(
        "{} of {} products",
        results.len(),
        catalog.len()
    ));

    Ok(())
}

/// Translate CLI flags into a browse query.
pub fn build_query(args: &BrowseArgs, ctx: &Context) -> Result<BrowseQuery> {
    let Some(sort) = SortKey::from_str(&args.sort) else {
        bail!("Unknown sort key '{}' (expected name, price, or rating)", args.sort);
    };
    let order = if args.desc { SortOrder::Desc } else { SortOrder::Asc };

    let mut query = BrowseQuery::new().with_sort(sort, order);
    if let Some(category) = &args.category {
        query = query.with_filter(Filter::category(category.as_str()));
    }
    if let Some(search) = &args.search {
        query = query.with_text(search.clone());
    }
    if let Some(max) = args.max_price {
        let currency = ctx.app.shop().cart().currency();
        query = query.with_filter(Filter::price_range(
            None,
            Some(Money::from_major(max, currency)),
        ));
    }
    if let Some(min) = args.min_rating {
        query = query.with_filter(Filter::min_rating(min));
    }
    Ok(query)
}

/// Render one product as a list line for interactive pickers.
pub fn listing_line(product: &brew_commerce::catalog::Product) -> String {
    format!(
        "{} — {} ({})",
        product.name,
        product.price.display(),
        rating_stars(product.rating)
    )
}
