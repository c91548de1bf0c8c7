//! Comparison repository: owner-scoped pairs of brands with notes.

use fintel_core::entities::{Comparison, ComparisonWithBrands};
use fintel_core::ids::PREFIX_COMPARISON;
use fintel_core::validation::validate_comparison_pair;

use crate::error::DatabaseError;
use crate::helpers::{BRAND_COLUMN_COUNT, brand_columns, now, parse_datetime, row_to_brand, timestamp};
use crate::service::FintelService;

const COMPARISON_COLUMN_COUNT: i32 = 6;

fn row_to_comparison(row: &libsql::Row) -> Result<Comparison, DatabaseError> {
    Ok(Comparison {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        franchise_a_id: row.get::<String>(2)?,
        franchise_b_id: row.get::<String>(3)?,
        notes: row.get::<Option<String>>(4)?.unwrap_or_default(),
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

fn row_to_comparison_with_brands(row: &libsql::Row) -> Result<ComparisonWithBrands, DatabaseError> {
    Ok(ComparisonWithBrands {
        comparison: row_to_comparison(row)?,
        franchise_a: row_to_brand(row, COMPARISON_COLUMN_COUNT)?,
        franchise_b: row_to_brand(row, COMPARISON_COLUMN_COUNT + BRAND_COLUMN_COUNT)?,
    })
}

fn select_joined(filter: &str) -> String {
    format!(
        "SELECT c.id, c.user_id, c.franchise_a_id, c.franchise_b_id, c.notes, c.created_at, {}, {}
         FROM franchise_comparisons c
         JOIN franchise_brands a ON a.id = c.franchise_a_id
         JOIN franchise_brands b ON b.id = c.franchise_b_id
         WHERE {filter}",
        brand_columns("a"),
        brand_columns("b"),
    )
}

impl FintelService {
    /// The current user's comparisons, newest first, with both brands joined.
    pub async fn list_comparisons(&self) -> Result<Vec<ComparisonWithBrands>, DatabaseError> {
        let owner = self.owner_id()?;
        let sql = format!(
            "{} ORDER BY c.created_at DESC, c.rowid DESC",
            select_joined("c.user_id = ?1")
        );
        let mut rows = self.db().query(&sql, [owner]).await?;
        let mut comparisons = Vec::new();
        while let Some(row) = rows.next().await? {
            comparisons.push(row_to_comparison_with_brands(&row)?);
        }
        Ok(comparisons)
    }

    pub async fn get_comparison(&self, id: &str) -> Result<ComparisonWithBrands, DatabaseError> {
        let owner = self.owner_id()?;
        let sql = select_joined("c.id = ?1 AND c.user_id = ?2");
        let mut rows = self.db().query(&sql, [id, owner]).await?;
        match rows.next().await? {
            Some(row) => row_to_comparison_with_brands(&row),
            None => Err(DatabaseError::NotFound {
                entity_type: "Comparison",
                id: id.to_string(),
            }),
        }
    }

    /// Save a comparison of two different, existing brands.
    pub async fn create_comparison(
        &self,
        franchise_a_id: &str,
        franchise_b_id: &str,
        notes: &str,
    ) -> Result<Comparison, DatabaseError> {
        validate_comparison_pair(franchise_a_id, franchise_b_id)?;
        let owner = self.owner_id()?;
        let a = self.get_franchise(franchise_a_id).await?;
        let b = self.get_franchise(franchise_b_id).await?;

        let id = self.db().generate_id(PREFIX_COMPARISON).await?;
        let now = now();
        self.db()
            .execute(
                "INSERT INTO franchise_comparisons (id, user_id, franchise_a_id, franchise_b_id, notes, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![id.as_str(), owner, a.id.as_str(), b.id.as_str(), notes, timestamp(now)],
            )
            .await?;

        tracing::debug!(%id, a = %a.name, b = %b.name, "created comparison");
        Ok(Comparison {
            id,
            user_id: owner.to_string(),
            franchise_a_id: a.id,
            franchise_b_id: b.id,
            notes: notes.to_string(),
            created_at: now,
        })
    }

    pub async fn delete_comparison(&self, id: &str) -> Result<(), DatabaseError> {
        let owner = self.owner_id()?;
        let deleted = self
            .db()
            .execute(
                "DELETE FROM franchise_comparisons WHERE id = ?1 AND user_id = ?2",
                [id, owner],
            )
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::NotFound {
                entity_type: "Comparison",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fintel_core::identity::AuthIdentity;
    use pretty_assertions::assert_eq;

    use crate::error::DatabaseError;
    use crate::test_support::helpers::{BrandSeed, seed_brand, test_service, test_service_as};

    #[tokio::test]
    async fn create_then_list_joins_both_brands() {
        let svc = test_service_as("user-a").await;
        let f45 = seed_brand(&svc, BrandSeed::new("F45 Training")).await;
        let snap = seed_brand(&svc, BrandSeed::new("Snap Fitness")).await;

        let created = svc
            .create_comparison(&f45, &snap, "F45 has higher margins")
            .await
            .unwrap();
        let listed = svc.list_comparisons().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].comparison, created);
        assert_eq!(listed[0].franchise_a.name, "F45 Training");
        assert_eq!(listed[0].franchise_b.name, "Snap Fitness");
    }

    #[tokio::test]
    async fn identical_pair_is_rejected() {
        let svc = test_service_as("user-a").await;
        let f45 = seed_brand(&svc, BrandSeed::new("F45 Training")).await;
        let err = svc.create_comparison(&f45, &f45, "").await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
        assert!(svc.list_comparisons().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_brand_is_not_found() {
        let svc = test_service_as("user-a").await;
        let f45 = seed_brand(&svc, BrandSeed::new("F45 Training")).await;
        let err = svc
            .create_comparison(&f45, "brd-missing", "")
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn comparisons_are_owner_scoped() {
        let mut svc = test_service_as("user-a").await;
        let f45 = seed_brand(&svc, BrandSeed::new("F45 Training")).await;
        let snap = seed_brand(&svc, BrandSeed::new("Snap Fitness")).await;
        let mine = svc.create_comparison(&f45, &snap, "").await.unwrap();

        svc.set_identity(Some(AuthIdentity::new("user-b")));
        assert!(svc.list_comparisons().await.unwrap().is_empty());
        assert!(svc.get_comparison(&mine.id).await.is_err());
        assert!(svc.delete_comparison(&mine.id).await.is_err());

        svc.set_identity(Some(AuthIdentity::new("user-a")));
        svc.delete_comparison(&mine.id).await.unwrap();
        assert!(svc.list_comparisons().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn comparisons_require_identity() {
        let svc = test_service().await;
        assert!(matches!(
            svc.list_comparisons().await,
            Err(DatabaseError::NotAuthenticated)
        ));
    }
}
