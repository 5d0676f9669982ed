//! Product Validation Rules

use crate::validation::{FieldRules, RuleChain, body, param};

pub(crate) const ID_PARAM: &str = "id";

const INVALID_ID: &str = "ID no válido";
const EMPTY_NAME: &str = "El nombre de Producto no puede ir vacio";
const INVALID_VALUE: &str = "Valor no válido";
const EMPTY_PRICE: &str = "El precio de Producto no puede ir vacio";
const INVALID_PRICE: &str = "Precio no válido";
const INVALID_AVAILABILITY: &str = "Valor para disponibilidad no válido";

fn id() -> FieldRules {
    param(ID_PARAM).is_int(INVALID_ID)
}

fn name() -> FieldRules {
    body("name").not_blank(EMPTY_NAME)
}

fn price() -> FieldRules {
    body("price")
        .is_numeric(INVALID_VALUE)
        .not_empty(EMPTY_PRICE)
        .positive(INVALID_PRICE)
}

fn availability() -> FieldRules {
    body("availability").is_boolean(INVALID_AVAILABILITY)
}

/// Routes addressing a single product by id.
pub(crate) fn product_id() -> RuleChain {
    RuleChain::new().field(id())
}

pub(crate) fn create_product() -> RuleChain {
    RuleChain::new().field(name()).field(price())
}

pub(crate) fn update_product() -> RuleChain {
    RuleChain::new()
        .field(id())
        .field(name())
        .field(price())
        .field(availability())
}
