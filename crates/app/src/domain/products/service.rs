//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        models::{Product, ProductId},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn find_product(
        &self,
        product: ProductId,
    ) -> Result<Option<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.find_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, product),
        fields(product_id = tracing::field::Empty),
        err
    )]
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        tracing::Span::current().record("product_id", created.id.into_inner());

        Ok(created)
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, update),
        fields(product_id = %product),
        err
    )]
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(
        name = "products.service.delete_product",
        skip(self),
        fields(product_id = %product),
        err
    )]
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

/// Record store for products.
///
/// Each call is a single-row operation in its own transaction. Read-then-write
/// sequences spanning two calls are not isolated from concurrent writers.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, newest id first.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Looks up a single product, `None` when no row has the given id.
    async fn find_product(
        &self,
        product: ProductId,
    ) -> Result<Option<Product>, ProductsServiceError>;

    /// Inserts a product; the store assigns the id and default availability.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Overwrites name, price and availability of an existing product.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Removes a product permanently.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
