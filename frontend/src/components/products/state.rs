use common::forms::{ListView, SubmissionCoordinator};
use common::model::product::{ProductRecord, ProductWorkspace};
use common::requests::EntityRoute;
use web_sys::File;

pub struct ProductsPage {
    /// Form plus the sub-product and recipe editors.
    pub workspace: ProductWorkspace<File>,
    pub coordinator: SubmissionCoordinator,
    pub list: ListView<ProductRecord>,
    /// Product whose images are shown in the preview sheet.
    pub previewing: Option<String>,
}

impl ProductsPage {
    pub fn new() -> Self {
        Self {
            workspace: ProductWorkspace::new(),
            coordinator: SubmissionCoordinator::new(),
            list: ListView::new(EntityRoute::Products),
            previewing: None,
        }
    }
}
