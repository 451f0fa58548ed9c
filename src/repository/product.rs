use chrono::Utc;
use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::types::ProductId;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, ProductChangeset,
};
use crate::repository::{DieselRepository, ProductReader, ProductWriter, RepositoryResult};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let items = products::table
            .order(products::id.asc())
            .select(DbProduct::as_select())
            .load(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(id.get()))
            .select(DbProduct::as_select())
            .first(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();
        let db_product = DbNewProduct::from_domain(product.clone(), now);

        let created = diesel::insert_into(products::table)
            .values(db_product)
            .returning(DbProduct::as_returning())
            .get_result(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();
        let changeset = ProductChangeset::from_domain(update.clone(), now);

        let updated = diesel::update(products::table.filter(products::id.eq(id.get())))
            .set(changeset)
            .returning(DbProduct::as_returning())
            .get_result(&mut conn)
            .optional()?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(products::table.filter(products::id.eq(id.get()))).execute(&mut conn)?;

        Ok(affected)
    }
}
