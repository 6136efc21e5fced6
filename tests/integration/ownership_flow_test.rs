//! Ownership rules across the three services.
//!
//! Every mutation checks the parent chain top-down before touching the store,
//! and a failed check leaves the store unchanged.

#[path = "../helpers/mod.rs"]
mod helpers;

use franchise_api::{AppError, AppServices};
use helpers::*;

#[actix_web::test]
async fn test_full_hierarchy_flow() {
    let services = AppServices::in_memory();

    let franchise = seed_franchise(&services, "Cadena").await;
    let branch = seed_branch(&services, franchise.id, "Centro").await;
    let product = seed_product(&services, branch.id, "Pan", 10).await;

    assert_eq!(branch.franchise_id, franchise.id);
    assert_eq!(product.branch_id, branch.id);

    let renamed = services
        .franchises
        .rename(franchise.id, "Cadena Nueva")
        .await
        .unwrap();
    assert_eq!(renamed.id, franchise.id);
    assert_eq!(renamed.name, "Cadena Nueva");

    let updated = services
        .products
        .update_stock(branch.id, product.id, Some(25))
        .await
        .unwrap();
    assert_eq!(updated.stock, 25);

    services.products.delete(branch.id, product.id).await.unwrap();

    let report = services
        .products
        .max_stock_per_branch(franchise.id)
        .await
        .unwrap();
    assert!(report.is_empty());
}

#[actix_web::test]
async fn test_branch_cannot_be_renamed_through_foreign_franchise() {
    let services = AppServices::in_memory();
    let owner = seed_franchise(&services, "Owner").await;
    let other = seed_franchise(&services, "Other").await;
    let branch = seed_branch(&services, owner.id, "Centro").await;

    let err = services
        .branches
        .rename(other.id, branch.id, "Robada")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        format!("Sucursal does not belong to franquicia: {}", other.id)
    );

    let stored = services.branches.resolve(branch.id).await.unwrap();
    assert_eq!(stored.name, "Centro");
    assert_eq!(stored.franchise_id, owner.id);
}

#[actix_web::test]
async fn test_branch_rename_checks_franchise_before_branch() {
    let services = AppServices::in_memory();

    let err = services.branches.rename(5, 6, "X").await.unwrap_err();

    assert_eq!(err.to_string(), "Franquicia not found: 5");
}

#[actix_web::test]
async fn test_delete_through_foreign_branch_leaves_product() {
    let services = AppServices::in_memory();
    let franchise = seed_franchise(&services, "F").await;
    let b1 = seed_branch(&services, franchise.id, "Uno").await;
    let b2 = seed_branch(&services, franchise.id, "Dos").await;
    let product = seed_product(&services, b1.id, "Pan", 7).await;

    let err = services
        .products
        .delete(b2.id, product.id)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(
        err.to_string(),
        format!("Producto not found in sucursal: {}", product.id)
    );

    // Still reachable through its real branch
    let updated = services
        .products
        .update_name(b1.id, product.id, "Pan dulce")
        .await
        .unwrap();
    assert_eq!(updated.name, "Pan dulce");
    assert_eq!(updated.stock, 7);
}

#[actix_web::test]
async fn test_update_distinguishes_missing_from_foreign_product() {
    let services = AppServices::in_memory();
    let franchise = seed_franchise(&services, "F").await;
    let b1 = seed_branch(&services, franchise.id, "Uno").await;
    let b2 = seed_branch(&services, franchise.id, "Dos").await;
    let product = seed_product(&services, b1.id, "Pan", 7).await;

    let missing = services
        .products
        .update_stock(b1.id, 999, Some(1))
        .await
        .unwrap_err();
    assert_eq!(missing.to_string(), "Producto not found: 999");

    let foreign = services
        .products
        .update_name(b2.id, product.id, "X")
        .await
        .unwrap_err();
    assert_eq!(
        foreign.to_string(),
        format!("Producto does not belong to sucursal: {}", b2.id)
    );
}

#[actix_web::test]
async fn test_negative_stock_update_is_rejected_and_stock_kept() {
    let services = AppServices::in_memory();
    let franchise = seed_franchise(&services, "F").await;
    let branch = seed_branch(&services, franchise.id, "Centro").await;
    let product = seed_product(&services, branch.id, "Pan", 9).await;

    let err = services
        .products
        .update_stock(branch.id, product.id, Some(-1))
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Stock cannot be negative");

    let report = services
        .products
        .max_stock_per_branch(franchise.id)
        .await
        .unwrap();
    assert_eq!(report[0].stock, 9);
}

#[actix_web::test]
async fn test_stock_update_without_value_keeps_stock() {
    let services = AppServices::in_memory();
    let franchise = seed_franchise(&services, "F").await;
    let branch = seed_branch(&services, franchise.id, "Centro").await;
    let product = seed_product(&services, branch.id, "Pan", 9).await;

    let unchanged = services
        .products
        .update_stock(branch.id, product.id, None)
        .await
        .unwrap();

    assert_eq!(unchanged.stock, 9);
}

#[actix_web::test]
async fn test_create_branch_in_unknown_franchise_stores_nothing() {
    let services = AppServices::in_memory();

    let err = services.branches.create(42, "Centro").await.unwrap_err();
    assert_eq!(err.to_string(), "Franquicia not found: 42");

    let franchise = seed_franchise(&services, "F").await;
    assert!(services
        .branches
        .list_by_franchise(franchise.id)
        .await
        .unwrap()
        .is_empty());
}

#[actix_web::test]
async fn test_ids_are_unique_per_entity_kind() {
    let services = AppServices::in_memory();
    let f1 = seed_franchise(&services, &TestDataFactory::unique_name("F")).await;
    let f2 = seed_franchise(&services, &TestDataFactory::unique_name("F")).await;

    assert_ne!(f1.id, f2.id);
    assert!(f1.id > 0 && f2.id > 0);
}
