use common::forms::{FieldStore, ListView, SubmissionCoordinator};
use common::model::extra_subproduct::{ExtraSubProductForm, ExtraSubProductRecord};
use common::model::product::ProductRecord;
use common::requests::EntityRoute;
use web_sys::File;

pub struct ExtraSubProductsPage {
    pub form: FieldStore<ExtraSubProductForm<File>>,
    pub coordinator: SubmissionCoordinator,
    pub list: ListView<ExtraSubProductRecord>,
    /// Choices of the product dropdown.
    pub products: ListView<ProductRecord>,
}

impl ExtraSubProductsPage {
    pub fn new() -> Self {
        Self {
            form: FieldStore::new(),
            coordinator: SubmissionCoordinator::new(),
            list: ListView::new(EntityRoute::ExtraSubProducts),
            products: ListView::new(EntityRoute::Products),
        }
    }

    /// Display name of the product a record belongs to. Falls back to the
    /// product list when the API did not populate the reference.
    pub fn product_name<'a>(&'a self, record: &'a ExtraSubProductRecord) -> &'a str {
        record
            .product_id
            .name()
            .or_else(|| {
                self.products
                    .find(record.product_id.id())
                    .map(|product| product.product_name.as_str())
            })
            .unwrap_or("Unknown product")
    }
}
