//! Shared fixtures for unit tests.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::axis::{AttributeAxis, AxisOption};
use crate::catalog::VariationCatalog;
use crate::variation::VariationRecord;

pub(crate) fn dec(raw: &str) -> Decimal {
    Decimal::from_str(raw).expect("valid decimal literal")
}

pub(crate) fn color_axis() -> AttributeAxis {
    AttributeAxis::new(
        "pa_color",
        "Color",
        vec![AxisOption::new("red", "Red"), AxisOption::new("blue", "Blue")],
    )
}

pub(crate) fn size_axis() -> AttributeAxis {
    AttributeAxis::new(
        "pa_size",
        "Size",
        vec![AxisOption::new("s", "Small"), AxisOption::new("m", "Medium")],
    )
}

pub(crate) fn variation(id: &str, color: &str, size: &str, price: &str) -> VariationRecord {
    VariationRecord::new(id)
        .with_value("pa_color", color)
        .with_value("pa_size", size)
        .with_price(dec(price), None)
}

/// Color {red, blue} x Size {s, m} with (red, s) $10, (red, m) $12 out of
/// stock and (blue, s) $11.
pub(crate) fn tee_catalog() -> VariationCatalog {
    VariationCatalog::load(
        vec![color_axis(), size_axis()],
        vec![
            variation("1", "red", "s", "10.00"),
            variation("2", "red", "m", "12.00").with_stock(false),
            variation("3", "blue", "s", "11.00"),
        ],
    )
    .expect("fixture catalog is valid")
}
