//! MySQL repository tests.
//!
//! Ignored by default. Run with `cargo test -- --ignored` and point
//! TEST_DATABASE_URL at a disposable database.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use franchise_api::branches::{Branch, BranchRepository, MySqlBranchRepository};
use franchise_api::core::Repository;
use franchise_api::franchises::{Franchise, MySqlFranchiseRepository};
use franchise_api::products::{MySqlProductRepository, Product, ProductRepository};
use franchise_api::{AppServices, Storage};
use helpers::*;

#[actix_web::test]
#[ignore]
async fn test_franchise_crud() {
    let pool = create_test_pool().await;
    let repo = MySqlFranchiseRepository::new(pool);

    let name = TestDataFactory::unique_name("franchise");
    let created = repo.create(Franchise::new(name.clone())).await.unwrap();
    assert!(created.id > 0);

    let mut found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.name, name);

    found.name = TestDataFactory::unique_name("renamed");
    let updated = repo.update(&found).await.unwrap();
    assert_eq!(updated.name, found.name);

    repo.delete(created.id).await.unwrap();
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[actix_web::test]
#[ignore]
async fn test_branches_listed_by_id() {
    let pool = create_test_pool().await;
    let franchises = MySqlFranchiseRepository::new(pool.clone());
    let branches = MySqlBranchRepository::new(pool);

    let franchise = franchises
        .create(Franchise::new(TestDataFactory::unique_name("F")))
        .await
        .unwrap();
    let first = branches
        .create(Branch::new(franchise.id, "Uno"))
        .await
        .unwrap();
    let second = branches
        .create(Branch::new(franchise.id, "Dos"))
        .await
        .unwrap();

    let listed = branches.find_by_franchise_id(franchise.id).await.unwrap();
    let ids: Vec<i64> = listed.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[actix_web::test]
#[ignore]
async fn test_product_queries() {
    let pool = create_test_pool().await;
    let franchises = MySqlFranchiseRepository::new(pool.clone());
    let branches = MySqlBranchRepository::new(pool.clone());
    let products = MySqlProductRepository::new(pool);

    let franchise = franchises
        .create(Franchise::new(TestDataFactory::unique_name("F")))
        .await
        .unwrap();
    let branch = branches
        .create(Branch::new(franchise.id, "Centro"))
        .await
        .unwrap();
    let other = branches
        .create(Branch::new(franchise.id, "Norte"))
        .await
        .unwrap();

    let first = products
        .create(Product::new(branch.id, "A", Some("desc".to_string()), 8))
        .await
        .unwrap();
    products
        .create(Product::new(branch.id, "B", None, 8))
        .await
        .unwrap();
    products
        .create(Product::new(branch.id, "C", None, 2))
        .await
        .unwrap();

    assert!(products
        .exists_by_id_and_branch_id(first.id, branch.id)
        .await
        .unwrap());
    assert!(!products
        .exists_by_id_and_branch_id(first.id, other.id)
        .await
        .unwrap());

    let held = products.find_by_branch_id(branch.id).await.unwrap();
    assert_eq!(held.len(), 3);
    assert_eq!(held[0].id, first.id);

    let top = products
        .find_max_stock_by_branch_id(branch.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(top.id, first.id);
    assert_eq!(top.description.as_deref(), Some("desc"));

    assert!(products
        .find_max_stock_by_branch_id(other.id)
        .await
        .unwrap()
        .is_none());
}

#[actix_web::test]
#[ignore]
async fn test_services_over_mysql() {
    let pool = create_test_pool().await;
    let services = AppServices::with_repositories(
        Storage::MySql(pool.clone()),
        Arc::new(MySqlFranchiseRepository::new(pool.clone())),
        Arc::new(MySqlBranchRepository::new(pool.clone())),
        Arc::new(MySqlProductRepository::new(pool)),
    );

    let franchise = seed_franchise(&services, &TestDataFactory::unique_name("F")).await;
    let branch = seed_branch(&services, franchise.id, "Centro").await;
    let product = seed_product(&services, branch.id, "Pan", 4).await;

    let err = services
        .products
        .update_stock(branch.id, product.id, Some(-3))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let report = services
        .products
        .max_stock_per_branch(franchise.id)
        .await
        .unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].stock, 4);

    services.storage.ping().await.unwrap();
}

#[actix_web::test]
#[ignore]
async fn test_update_of_deleted_row_fails() {
    let pool = create_test_pool().await;
    let franchises = MySqlFranchiseRepository::new(pool.clone());
    let branches = MySqlBranchRepository::new(pool.clone());
    let products = MySqlProductRepository::new(pool);

    let franchise = franchises
        .create(Franchise::new(TestDataFactory::unique_name("F")))
        .await
        .unwrap();
    let branch = branches
        .create(Branch::new(franchise.id, "Centro"))
        .await
        .unwrap();
    let product = products
        .create(Product::new(branch.id, "Pan", None, 3))
        .await
        .unwrap();

    // Unchanged values still succeed while the row exists
    products.update(&product).await.unwrap();

    products.delete(product.id).await.unwrap();
    let err = products.update(&product).await.unwrap_err();
    assert!(err.is_not_found());

    branches.delete(branch.id).await.unwrap();
    assert!(branches.update(&branch).await.unwrap_err().is_not_found());

    franchises.delete(franchise.id).await.unwrap();
    assert!(franchises.update(&franchise).await.unwrap_err().is_not_found());
}
