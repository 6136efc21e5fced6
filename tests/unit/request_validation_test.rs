//! Request body validation.
//!
//! Violations are reported as `field: message`, joined with ", " when more
//! than one rule fails.

use franchise_api::branches::models::{CreateBranchRequest, UpdateBranchNameRequest};
use franchise_api::franchises::models::{CreateFranchiseRequest, UpdateFranchiseNameRequest};
use franchise_api::products::models::{
    CreateProductRequest, UpdateProductNameRequest, UpdateStockRequest,
};

fn parse<T: serde::de::DeserializeOwned>(body: &str) -> T {
    serde_json::from_str(body).expect("Failed to parse request body")
}

#[test]
fn test_franchise_name_is_required() {
    let missing: CreateFranchiseRequest = parse("{}");
    let blank: CreateFranchiseRequest = parse(r#"{"name":"  "}"#);
    let ok: CreateFranchiseRequest = parse(r#"{"name":"Cadena"}"#);

    assert_eq!(
        missing.validate().unwrap_err().to_string(),
        "name: Name is required"
    );
    assert!(blank.validate().unwrap_err().is_validation());
    assert!(ok.validate().is_ok());
}

#[test]
fn test_franchise_rename_name_is_required() {
    let blank: UpdateFranchiseNameRequest = parse(r#"{"name":""}"#);
    assert!(blank.validate().is_err());

    let ok: UpdateFranchiseNameRequest = parse(r#"{"name":"Nueva"}"#);
    assert!(ok.validate().is_ok());
}

#[test]
fn test_branch_requests() {
    let create: CreateBranchRequest = parse(r#"{"name":"\t"}"#);
    assert_eq!(
        create.validate().unwrap_err().to_string(),
        "name: Name is required"
    );

    let rename: UpdateBranchNameRequest = parse(r#"{"name":"Norte"}"#);
    assert!(rename.validate().is_ok());
}

#[test]
fn test_product_create_collects_every_violation() {
    let request: CreateProductRequest = parse(r#"{"name":"","stock":-1}"#);

    assert_eq!(
        request.validate().unwrap_err().to_string(),
        "name: Name is required, stock: Stock cannot be negative"
    );
}

#[test]
fn test_product_create_accepts_zero_stock_and_description() {
    let request: CreateProductRequest =
        parse(r#"{"name":"Café","description":"Tostado","stock":0}"#);

    assert!(request.validate().is_ok());
    assert_eq!(request.description.as_deref(), Some("Tostado"));
    assert_eq!(request.stock, Some(0));
}

#[test]
fn test_stock_update_rules() {
    let missing: UpdateStockRequest = parse("{}");
    let negative: UpdateStockRequest = parse(r#"{"stock":-5}"#);
    let zero: UpdateStockRequest = parse(r#"{"stock":0}"#);

    assert_eq!(
        missing.validate().unwrap_err().to_string(),
        "stock: Stock is required"
    );
    assert_eq!(
        negative.validate().unwrap_err().to_string(),
        "stock: Stock cannot be negative"
    );
    assert!(zero.validate().is_ok());
}

#[test]
fn test_product_rename_name_is_required() {
    let blank: UpdateProductNameRequest = parse(r#"{"name":" "}"#);
    assert!(blank.validate().is_err());
}
