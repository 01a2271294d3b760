use common::forms::{FieldStore, ListView, SubmissionCoordinator};
use common::model::heading::{HeadingForm, HeadingRecord};
use common::model::product::ProductRecord;
use common::requests::EntityRoute;
use web_sys::File;

pub struct HeadingsPage {
    pub form: FieldStore<HeadingForm<File>>,
    pub coordinator: SubmissionCoordinator,
    pub list: ListView<HeadingRecord>,
    pub products: ListView<ProductRecord>,
}

impl HeadingsPage {
    pub fn new() -> Self {
        Self {
            form: FieldStore::new(),
            coordinator: SubmissionCoordinator::new(),
            list: ListView::new(EntityRoute::Headings),
            products: ListView::new(EntityRoute::Products),
        }
    }

    pub fn product_name<'a>(&'a self, record: &'a HeadingRecord) -> &'a str {
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
