use fintel_core::entities::NewFranchiseBrand;
use fintel_core::identity::AuthIdentity;
use fintel_db::service::FintelService;

pub async fn service(user: Option<&str>) -> FintelService {
    FintelService::new_local(":memory:", user.map(AuthIdentity::new))
        .await
        .unwrap()
}

/// Insert a brand and return its id.
pub async fn seed_brand(
    svc: &FintelService,
    name: &str,
    sector: &str,
    margin: Option<f64>,
) -> String {
    let brand = NewFranchiseBrand {
        id: None,
        name: name.into(),
        sector: sector.into(),
        description: String::new(),
        logo_url: None,
        website: None,
        startup_cost_min: None,
        startup_cost_max: None,
        net_profit_margin: margin,
        summary_pdf_url: None,
    };
    svc.upsert_brand(&brand).await.unwrap().id
}
