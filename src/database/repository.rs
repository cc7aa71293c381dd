use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Contact, ContactPatch, NewContact};
use crate::database::store::ContactStore;

const CONTACT_COLUMNS: &str =
    "id, owner, name, email, phone, address, city, state, country, postal_code, created_at";

/// `ContactStore` backed by the PostgreSQL `contacts` table
#[derive(Clone)]
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Contact>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM contacts WHERE owner = $1 ORDER BY created_at DESC, seq DESC",
            CONTACT_COLUMNS
        );
        let rows = sqlx::query_as::<_, Contact>(&sql)
            .bind(owner)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, DatabaseError> {
        let sql = format!("SELECT {} FROM contacts WHERE id = $1", CONTACT_COLUMNS);
        let row = sqlx::query_as::<_, Contact>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, contact: NewContact) -> Result<Contact, DatabaseError> {
        let sql = format!(
            "INSERT INTO contacts ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING {}",
            CONTACT_COLUMNS, CONTACT_COLUMNS
        );
        let row = sqlx::query_as::<_, Contact>(&sql)
            .bind(Uuid::new_v4())
            .bind(contact.owner)
            .bind(&contact.name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .bind(&contact.address)
            .bind(&contact.city)
            .bind(&contact.state)
            .bind(&contact.country)
            .bind(&contact.postal_code)
            .bind(contact.created_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_by_id(&self, id: Uuid, patch: &ContactPatch) -> Result<Option<Contact>, DatabaseError> {
        // COALESCE keeps the stored value for every slot the patch leaves empty
        let sql = format!(
            r#"
            UPDATE contacts SET
                name        = COALESCE($2, name),
                email       = COALESCE($3, email),
                phone       = COALESCE($4, phone),
                address     = COALESCE($5, address),
                city        = COALESCE($6, city),
                state       = COALESCE($7, state),
                country     = COALESCE($8, country),
                postal_code = COALESCE($9, postal_code)
            WHERE id = $1
            RETURNING {}
            "#,
            CONTACT_COLUMNS
        );
        let row = sqlx::query_as::<_, Contact>(&sql)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.email)
            .bind(&patch.phone)
            .bind(&patch.address)
            .bind(&patch.city)
            .bind(&patch.state)
            .bind(&patch.country)
            .bind(&patch.postal_code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
