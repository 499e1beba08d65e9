//! Command handlers. Each loads the catalog, drives a
//! [`SelectionController`] and prints to stdout; logs go to stderr.

use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use swatch_core::{
    AppConfig, DisplayPayload, ResolvedState, SelectionController, SelectionStatus,
    VariationCatalog,
};

use crate::source::{load_source, CatalogSource};
use crate::CatalogArgs;

/// JSON document printed by `resolve`.
#[derive(Debug, Serialize)]
pub(crate) struct ResolveReport<'a> {
    product: Option<&'a str>,
    status: SelectionStatus,
    purchase_enabled: bool,
    rendered: String,
    display: &'a DisplayPayload,
    state: &'a ResolvedState,
}

pub(crate) fn run_validate(config: &AppConfig, args: &CatalogArgs) -> anyhow::Result<()> {
    let source = load_source(args, &config.catalog_path)?;
    let catalog = &source.catalog;

    let eligible = catalog
        .variations_for(swatch_core::VariationFilter::Eligible)
        .count();
    println!(
        "catalog ok: {} axes, {} variations ({} purchasable and in stock)",
        catalog.axes().len(),
        catalog.variations().len(),
        eligible
    );
    for axis in catalog.axes() {
        println!("  {} ({}): {}", axis.label, axis.name, axis.options.len());
    }
    if let Some(range) = catalog.price_range() {
        println!("  price: {}", range.render(&config.price_format));
    }
    Ok(())
}

pub(crate) fn run_resolve(
    config: &AppConfig,
    args: &CatalogArgs,
    choices: &[(String, String)],
    no_defaults: bool,
) -> anyhow::Result<()> {
    let source = load_source(args, &config.catalog_path)?;
    let (controller, product_name) = build_controller(source, choices, no_defaults)?;

    let state = controller.current_state();
    let display = DisplayPayload::from_state(state, controller.catalog());
    let report = ResolveReport {
        product: product_name.as_deref(),
        status: state.status(),
        purchase_enabled: display.purchase_enabled(),
        rendered: display.render(&config.price_format),
        display: &display,
        state,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) fn run_options(
    config: &AppConfig,
    args: &CatalogArgs,
    choices: &[(String, String)],
    no_defaults: bool,
) -> anyhow::Result<()> {
    let source = load_source(args, &config.catalog_path)?;
    let (controller, _) = build_controller(source, choices, no_defaults)?;
    print!("{}", render_options(controller.catalog(), controller.current_state()));
    Ok(())
}

/// Seeds defaults (unless disabled) and applies `choices` in order.
pub(crate) fn build_controller(
    source: CatalogSource,
    choices: &[(String, String)],
    no_defaults: bool,
) -> anyhow::Result<(SelectionController, Option<String>)> {
    let catalog = Arc::new(source.catalog);
    let mut controller = if no_defaults {
        SelectionController::new(catalog)
    } else {
        SelectionController::with_defaults(catalog, &source.default_attributes)
            .context("default attributes do not fit the catalog")?
    };

    for (axis, slug) in choices {
        controller
            .set_option(axis, slug)
            .with_context(|| format!("cannot select {axis}={slug}"))?;
    }

    if let Some(ambiguity) = &controller.current_state().ambiguity {
        tracing::warn!(%ambiguity, "selection is ambiguous; showing it as unavailable");
    }

    Ok((controller, source.product_name))
}

/// One block per axis; every option stays listed, marked `*` when chosen
/// and `-` when choosing it would dead-end.
pub(crate) fn render_options(catalog: &VariationCatalog, state: &ResolvedState) -> String {
    let mut out = String::new();
    for axis in catalog.axes() {
        out.push_str(&format!("{} ({})\n", axis.label, axis.name));
        let chosen = state.selection.get(&axis.name);
        for option in &axis.options {
            let marker = if chosen == Some(option.slug.as_str()) {
                '*'
            } else if state.is_option_available(&axis.name, &option.slug) {
                ' '
            } else {
                '-'
            };
            let mut line = format!("  {marker} {} ({})", option.display_name, option.slug);
            if marker == '-' {
                line.push_str("  unavailable");
            }
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}
