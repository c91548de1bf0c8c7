//! End-to-end checks against an on-disk database.

use fintel_core::identity::AuthIdentity;
use fintel_db::repos::catalog::CatalogSeed;
use fintel_db::service::FintelService;
use pretty_assertions::assert_eq;

const SEED: &str = r#"{
    "brands": [
        { "id": "brd-f45train", "name": "F45 Training", "sector": "Fitness & Health", "net_profit_margin": 30 },
        { "id": "brd-snapfit1", "name": "Snap Fitness", "sector": "Fitness & Health", "net_profit_margin": 18 }
    ]
}"#;

#[tokio::test]
async fn data_survives_reopen_and_stays_owner_scoped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fintel.db");
    let path = path.to_str().unwrap();

    {
        let svc = FintelService::new_local(path, Some(AuthIdentity::new("user-a")))
            .await
            .unwrap();
        svc.import_catalog(&CatalogSeed::from_json(SEED).unwrap())
            .await
            .unwrap();
        let gyms = svc.create_collection("Gyms", None).await.unwrap();
        svc.add_to_collection(&gyms.id, "brd-f45train").await.unwrap();
        svc.create_comparison("brd-f45train", "brd-snapfit1", "margins")
            .await
            .unwrap();
    }

    let mut svc = FintelService::new_local(path, Some(AuthIdentity::new("user-a")))
        .await
        .unwrap();
    let collections = svc.list_collections().await.unwrap();
    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].brand_ids(), vec!["brd-f45train"]);
    assert_eq!(svc.list_comparisons().await.unwrap().len(), 1);

    svc.set_identity(Some(AuthIdentity::new("user-b")));
    assert!(svc.list_collections().await.unwrap().is_empty());
    assert!(svc.list_comparisons().await.unwrap().is_empty());

    svc.set_identity(None);
    assert!(svc.list_collections().await.is_err());
    assert_eq!(svc.check_connection().await.total_records, 5);
}
