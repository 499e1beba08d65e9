//! End-to-end: WooCommerce JSON in, resolved storefront state out.

use std::sync::Arc;

use serde_json::json;

use swatch_core::{DisplayPayload, PriceFormat, SelectionController, SelectionStatus};
use swatch_woo::{normalize_product, parse_product_json, WooError};

fn hoodie_json() -> serde_json::Value {
    json!({
        "id": 311,
        "name": "Zip Hoodie",
        "attributes": [
            {
                "name": "pa_color",
                "label": "Color",
                "options": [
                    {"slug": "black", "name": "Black"},
                    {"slug": "sand", "name": "Sand"}
                ]
            },
            {
                "name": "pa_size",
                "options": [
                    {"slug": "m", "name": "M"},
                    {"slug": "l", "name": "L"}
                ]
            }
        ],
        "variations": [
            {
                "variation_id": 312,
                "sku": "ZIP-BLK-M",
                "attributes": {"attribute_pa_color": "black", "attribute_pa_size": "m"},
                "display_price": 45,
                "display_regular_price": 60,
                "is_in_stock": true,
                "is_purchasable": true,
                "variation_is_active": true,
                "min_qty": 1,
                "max_qty": ""
            },
            {
                "variation_id": 313,
                "sku": "",
                "attributes": {"attribute_pa_color": "black", "attribute_pa_size": "l"},
                "display_price": 60,
                "display_regular_price": 60,
                "is_in_stock": false,
                "is_purchasable": true,
                "variation_is_active": true,
                "min_qty": 1,
                "max_qty": ""
            },
            {
                "variation_id": 314,
                "sku": "ZIP-SND",
                "attributes": {"attribute_pa_color": "sand", "attribute_pa_size": ""},
                "display_price": 58.5,
                "display_regular_price": 58.5,
                "is_in_stock": true,
                "is_purchasable": true,
                "variation_is_active": true,
                "min_qty": 1,
                "max_qty": 3
            }
        ],
        "default_attributes": {"pa_color": "black"}
    })
}

fn controller() -> SelectionController {
    let product = parse_product_json(&hoodie_json().to_string()).expect("fixture parses");
    let normalized = normalize_product(product).expect("fixture normalizes");
    SelectionController::with_defaults(Arc::new(normalized.catalog), &normalized.default_attributes)
        .expect("defaults are valid")
}

#[test]
fn defaults_preselect_color_and_grey_out_sold_out_size() {
    let controller = controller();
    let state = controller.current_state();
    assert_eq!(state.selection.get("pa_color"), Some("black"));
    assert_eq!(state.status(), SelectionStatus::Incomplete);
    assert!(state.is_option_available("pa_size", "m"));
    assert!(!state.is_option_available("pa_size", "l"));
}

#[test]
fn any_size_variation_opens_every_size_for_sand() {
    let mut controller = controller();
    let state = controller.set_option("pa_color", "sand").unwrap();
    assert!(state.is_option_available("pa_size", "m"));
    assert!(state.is_option_available("pa_size", "l"));

    let state = controller.set_option("pa_size", "l").unwrap();
    assert_eq!(
        state.matched_variation.as_ref().map(|v| v.id.as_str()),
        Some("314")
    );
}

#[test]
fn resolved_sale_variation_renders_discount() {
    let mut controller = controller();
    let state = controller.set_option("pa_size", "m").unwrap().clone();
    let payload = DisplayPayload::from_state(&state, controller.catalog());
    assert_eq!(
        payload.render(&PriceFormat::default()),
        "$45.00 (was $60.00) -25% · In stock"
    );
    let DisplayPayload::Variation { quantity, .. } = payload else {
        panic!("expected variation payload");
    };
    assert_eq!(quantity.min, Some(1));
    assert_eq!(quantity.max, None);
}

#[test]
fn incomplete_selection_shows_range_over_in_stock_variations() {
    let controller = controller();
    let payload = DisplayPayload::from_state(controller.current_state(), controller.catalog());
    assert_eq!(payload.render(&PriceFormat::default()), "$45.00 – $58.50");
}

#[test]
fn unknown_option_in_payload_is_rejected() {
    let mut raw = hoodie_json();
    raw["variations"][0]["attributes"]["attribute_pa_color"] = json!("red");
    let product = parse_product_json(&raw.to_string()).unwrap();
    let err = normalize_product(product).unwrap_err();
    assert!(matches!(err, WooError::Catalog { .. }));
}
