use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, ProductPatch};
use crate::domain::types::ProductId;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, ProductChangeset,
};
use crate::repository::{
    DieselRepository, ProductListQuery, ProductReader, ProductWriter, RepositoryError,
    RepositoryResult,
};

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category) = query.category {
            items = items.filter(products::category.eq(category));
        }

        if let Some(is_active) = query.is_active {
            items = items.filter(products::is_active.eq(is_active));
        }

        let items = items
            .order((products::created_at.desc(), products::id.desc()))
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .find(id.get())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product: Option<Product> = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let created = diesel::insert_into(products::table)
            .values(db_product)
            .get_result::<DbProduct>(&mut conn)?;

        let created: Product = created.try_into()?;
        Ok(created)
    }

    fn update_product(&self, id: ProductId, patch: &ProductPatch) -> RepositoryResult<Product> {
        use crate::schema::products;

        // An empty SET clause is a query builder error in Diesel.
        if patch.is_empty() {
            return self
                .get_product_by_id(id)?
                .ok_or(RepositoryError::NotFound);
        }

        let mut conn = self.conn()?;
        let changeset: ProductChangeset = patch.clone().into();

        let updated = diesel::update(products::table.find(id.get()))
            .set(changeset)
            .get_result::<DbProduct>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        let updated: Product = updated.try_into()?;
        Ok(updated)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::delete(products::table.find(id.get())).execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
