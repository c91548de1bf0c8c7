//! Collection repository: owner-scoped CRUD plus item membership.
//!
//! Every statement against the collections table goes through
//! [`with_legacy_fallback`]. Item statements never run before the parent
//! collection has been checked against the current owner.

use fintel_core::entities::{
    Collection, CollectionItem, CollectionItemWithBrand, CollectionWithItems,
};
use fintel_core::ids::{PREFIX_COLLECTION, PREFIX_COLLECTION_ITEM};
use fintel_core::validation::validate_collection_name;

use crate::error::DatabaseError;
use crate::fallback::{COLLECTIONS, with_legacy_fallback};
use crate::helpers::{brand_columns, get_opt_string, now, parse_datetime, row_to_brand, timestamp};
use crate::service::FintelService;

const SELECT_COLS: &str = "id, user_id, name, description, created_at";

fn row_to_collection(row: &libsql::Row) -> Result<Collection, DatabaseError> {
    Ok(Collection {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        name: row.get::<String>(2)?,
        description: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

fn not_found(id: &str) -> DatabaseError {
    DatabaseError::NotFound {
        entity_type: "Collection",
        id: id.to_string(),
    }
}

fn normalize_description(description: Option<&str>) -> Option<&str> {
    description.map(str::trim).filter(|d| !d.is_empty())
}

impl FintelService {
    /// The current user's collections, newest first, each with its items in
    /// insertion order.
    pub async fn list_collections(&self) -> Result<Vec<CollectionWithItems>, DatabaseError> {
        let owner = self.owner_id()?;
        let collections =
            with_legacy_fallback(COLLECTIONS, |table| self.select_collections(table, owner))
                .await?;

        let mut result = Vec::with_capacity(collections.len());
        for collection in collections {
            let items = self.collection_items(&collection.id).await?;
            result.push(CollectionWithItems { collection, items });
        }
        Ok(result)
    }

    pub async fn get_collection(&self, id: &str) -> Result<CollectionWithItems, DatabaseError> {
        let collection = self.owned_collection(id).await?;
        let items = self.collection_items(&collection.id).await?;
        Ok(CollectionWithItems { collection, items })
    }

    pub async fn create_collection(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Collection, DatabaseError> {
        validate_collection_name(name)?;
        let owner = self.owner_id()?;
        let id = self.db().generate_id(PREFIX_COLLECTION).await?;
        let now = now();
        let description = normalize_description(description);

        with_legacy_fallback(COLLECTIONS, |table| {
            let sql = format!(
                "INSERT INTO {table} (id, user_id, name, description, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)"
            );
            let params = libsql::params![id.as_str(), owner, name, description, timestamp(now)];
            async move { self.db().execute(&sql, params).await }
        })
        .await?;

        tracing::debug!(%id, "created collection");
        Ok(Collection {
            id,
            user_id: owner.to_string(),
            name: name.to_string(),
            description: description.map(String::from),
            created_at: now,
        })
    }

    pub async fn update_collection(
        &self,
        id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Collection, DatabaseError> {
        validate_collection_name(name)?;
        let owner = self.owner_id()?;
        let description = normalize_description(description);

        let updated = with_legacy_fallback(COLLECTIONS, |table| {
            let sql =
                format!("UPDATE {table} SET name = ?1, description = ?2 WHERE id = ?3 AND user_id = ?4");
            let params = libsql::params![name, description, id, owner];
            async move { self.db().execute(&sql, params).await }
        })
        .await?;
        if updated == 0 {
            return Err(not_found(id));
        }
        self.owned_collection(id).await
    }

    /// Delete a collection. Its items go with it.
    pub async fn delete_collection(&self, id: &str) -> Result<(), DatabaseError> {
        let owner = self.owner_id()?;
        let deleted = with_legacy_fallback(COLLECTIONS, |table| {
            let sql = format!("DELETE FROM {table} WHERE id = ?1 AND user_id = ?2");
            async move { self.db().execute(&sql, [id, owner]).await }
        })
        .await?;
        if deleted == 0 {
            return Err(not_found(id));
        }
        tracing::debug!(id, "deleted collection");
        Ok(())
    }

    /// Add a brand to one of the current user's collections.
    pub async fn add_to_collection(
        &self,
        collection_id: &str,
        brand_id: &str,
    ) -> Result<CollectionItem, DatabaseError> {
        let collection = self.owned_collection(collection_id).await?;
        let brand = self.get_franchise(brand_id).await?;

        let mut rows = self
            .db()
            .query(
                "SELECT 1 FROM collection_items WHERE collection_id = ?1 AND brand_id = ?2",
                [collection.id.as_str(), brand.id.as_str()],
            )
            .await?;
        if rows.next().await?.is_some() {
            return Err(DatabaseError::Validation(format!(
                "{} is already in {}",
                brand.name, collection.name
            )));
        }

        let id = self.db().generate_id(PREFIX_COLLECTION_ITEM).await?;
        let now = now();
        self.db()
            .execute(
                "INSERT INTO collection_items (id, collection_id, brand_id, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    id.as_str(),
                    collection.id.as_str(),
                    brand.id.as_str(),
                    timestamp(now)
                ],
            )
            .await?;

        Ok(CollectionItem {
            id,
            collection_id: collection.id,
            brand_id: brand.id,
            created_at: now,
        })
    }

    /// Remove a brand from one of the current user's collections.
    pub async fn remove_from_collection(
        &self,
        collection_id: &str,
        brand_id: &str,
    ) -> Result<(), DatabaseError> {
        let collection = self.owned_collection(collection_id).await?;
        let removed = self
            .db()
            .execute(
                "DELETE FROM collection_items WHERE collection_id = ?1 AND brand_id = ?2",
                [collection.id.as_str(), brand_id],
            )
            .await?;
        if removed == 0 {
            return Err(DatabaseError::NotFound {
                entity_type: "Collection item",
                id: brand_id.to_string(),
            });
        }
        Ok(())
    }

    /// Fetch a collection only if the current user owns it.
    async fn owned_collection(&self, id: &str) -> Result<Collection, DatabaseError> {
        let owner = self.owner_id()?;
        with_legacy_fallback(COLLECTIONS, |table| async move {
            let sql = format!("SELECT {SELECT_COLS} FROM {table} WHERE id = ?1 AND user_id = ?2");
            let mut rows = self.db().query(&sql, [id, owner]).await?;
            match rows.next().await? {
                Some(row) => row_to_collection(&row),
                None => Err(not_found(id)),
            }
        })
        .await
    }

    async fn select_collections(
        &self,
        table: &str,
        owner: &str,
    ) -> Result<Vec<Collection>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM {table} WHERE user_id = ?1
             ORDER BY created_at DESC, rowid DESC"
        );
        let mut rows = self.db().query(&sql, [owner]).await?;
        let mut collections = Vec::new();
        while let Some(row) = rows.next().await? {
            collections.push(row_to_collection(&row)?);
        }
        Ok(collections)
    }

    async fn collection_items(
        &self,
        collection_id: &str,
    ) -> Result<Vec<CollectionItemWithBrand>, DatabaseError> {
        let sql = format!(
            "SELECT i.id, {} FROM collection_items i
             JOIN franchise_brands b ON b.id = i.brand_id
             WHERE i.collection_id = ?1
             ORDER BY i.created_at ASC, i.rowid ASC",
            brand_columns("b")
        );
        let mut rows = self.db().query(&sql, [collection_id]).await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(CollectionItemWithBrand {
                id: row.get::<String>(0)?,
                brand: row_to_brand(&row, 1)?,
            });
        }
        Ok(items)
    }
}
