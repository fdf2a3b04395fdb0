//! PostgreSQL implementation of CatalogLookup.
//!
//! Reads the AdventureWorks `saleslt` schema. Every user-supplied value is
//! passed as a bound parameter.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::catalog::{CustomerId, CustomerProfile, Money, Product, ProductId};
use crate::ports::{CatalogLookup, LookupError};

const PRODUCT_COLUMNS: &str = r#"
    SELECT p.productid AS product_id,
           p.name,
           coalesce(p.color, '') AS color,
           p.listprice AS list_price,
           p.thumbnailphoto AS thumbnail,
           c.name AS category,
           m.name AS model
      FROM saleslt.product p
      JOIN saleslt.productcategory c ON c.productcategoryid = p.productcategoryid
      JOIN saleslt.productmodel m ON m.productmodelid = p.productmodelid
"#;

const BEST_SELLERS_FILTER: &str = r#"
     WHERE p.productid IN (
           SELECT s.productid
             FROM saleslt.salesorderdetail s
            GROUP BY s.productid
            ORDER BY sum(s.orderqty) DESC
            LIMIT 5)
     ORDER BY p.productid
"#;

const NAME_FILTER: &str = r#"
     WHERE p.name ILIKE '%' || $1 || '%'
     ORDER BY p.productid
"#;

const ID_FILTER: &str = " WHERE p.productid = $1";

/// PostgreSQL implementation of the CatalogLookup port.
pub struct PostgresCatalogReader {
    pool: PgPool,
}

impl PostgresCatalogReader {
    /// Creates a new reader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    product_id: i32,
    name: String,
    color: String,
    list_price: Decimal,
    thumbnail: Option<Vec<u8>>,
    category: String,
    model: String,
}

/// Row for customer queries.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    customer_id: i32,
    customer_name: String,
    company_name: Option<String>,
    email: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            product_id: ProductId::new(row.product_id),
            name: row.name,
            color: row.color,
            list_price: Money::new(row.list_price),
            photo_ref: row.thumbnail.map(|bytes| STANDARD.encode(bytes)).unwrap_or_default(),
            category: row.category,
            model: row.model,
        }
    }
}

impl From<CustomerRow> for CustomerProfile {
    fn from(row: CustomerRow) -> Self {
        CustomerProfile {
            customer_id: Some(CustomerId::new(row.customer_id)),
            customer_name: row.customer_name,
            company_name: row.company_name.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
        }
    }
}

/// Escapes LIKE wildcards so the filter matches literally.
fn escape_like(filter: &str) -> String {
    let mut escaped = String::with_capacity(filter.len());
    for c in filter.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn map_sqlx_error(err: sqlx::Error) -> LookupError {
    match err {
        sqlx::Error::PoolTimedOut => LookupError::Timeout,
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            LookupError::Decode(err.to_string())
        }
        other => LookupError::Database(other.to_string()),
    }
}

#[async_trait]
impl CatalogLookup for PostgresCatalogReader {
    #[tracing::instrument(skip(self))]
    async fn customer_by_email(
        &self,
        email: &str,
    ) -> Result<Option<CustomerProfile>, LookupError> {
        let row: Option<CustomerRow> = sqlx::query_as(
            r#"
            SELECT customerid AS customer_id,
                   concat_ws(' ', title, firstname, lastname, suffix) AS customer_name,
                   companyname AS company_name,
                   emailaddress AS email
              FROM saleslt.customer
             WHERE emailaddress = $1
             LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(CustomerProfile::from))
    }

    #[tracing::instrument(skip(self))]
    async fn products(&self, filter: Option<&str>) -> Result<Vec<Product>, LookupError> {
        let rows: Vec<ProductRow> = match filter {
            None => {
                let sql = format!("{}{}", PRODUCT_COLUMNS, BEST_SELLERS_FILTER);
                sqlx::query_as(&sql).fetch_all(&self.pool).await
            }
            Some(text) => {
                let sql = format!("{}{}", PRODUCT_COLUMNS, NAME_FILTER);
                sqlx::query_as(&sql)
                    .bind(escape_like(text))
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_sqlx_error)?;

        tracing::debug!(count = rows.len(), "products loaded");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn product_by_id(&self, id: ProductId) -> Result<Option<Product>, LookupError> {
        let sql = format!("{}{}", PRODUCT_COLUMNS, ID_FILTER);
        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(Product::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn product_row(thumbnail: Option<Vec<u8>>) -> ProductRow {
        ProductRow {
            product_id: 680,
            name: "HL Road Frame - Black, 58".to_string(),
            color: "Black".to_string(),
            list_price: Decimal::from_str("1431.50").unwrap(),
            thumbnail,
            category: "Road Frames".to_string(),
            model: "HL Road Frame".to_string(),
        }
    }

    #[test]
    fn product_row_encodes_thumbnail_as_base64() {
        let product = Product::from(product_row(Some(b"GIF89a".to_vec())));

        assert_eq!(product.product_id, ProductId::new(680));
        assert_eq!(product.photo_ref, "R0lGODlh");
        assert_eq!(product.list_price.display(), "1,431.50");
        assert_eq!(product.description(), "Road Frames - HL Road Frame - Black");
    }

    #[test]
    fn missing_thumbnail_becomes_empty_reference() {
        let product = Product::from(product_row(None));
        assert!(product.photo_ref.is_empty());
    }

    #[test]
    fn customer_row_fills_every_field() {
        let profile = CustomerProfile::from(CustomerRow {
            customer_id: 29485,
            customer_name: "Mr. Orlando Gee".to_string(),
            company_name: Some("A Bike Store".to_string()),
            email: Some("orlando0@adventure-works.com".to_string()),
        });

        assert_eq!(profile.customer_id, Some(CustomerId::new(29485)));
        assert_eq!(profile.customer_name, "Mr. Orlando Gee");
        assert_eq!(profile.company_name, "A Bike Store");
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("mountain"), "mountain");
        assert_eq!(escape_like("100%_off\\"), "100\\%\\_off\\\\");
    }

    #[test]
    fn pool_timeout_maps_to_lookup_timeout() {
        assert_eq!(map_sqlx_error(sqlx::Error::PoolTimedOut), LookupError::Timeout);
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            LookupError::Database(_)
        ));
    }
}
