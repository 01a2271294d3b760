use common::forms::{ListView, SubmissionCoordinator};
use common::model::blog::{BlogRecord, BlogWorkspace};
use common::requests::EntityRoute;
use web_sys::File;

pub struct BlogsPage {
    pub workspace: BlogWorkspace<File>,
    pub coordinator: SubmissionCoordinator,
    pub list: ListView<BlogRecord>,
}

impl BlogsPage {
    pub fn new() -> Self {
        Self {
            workspace: BlogWorkspace::new(),
            coordinator: SubmissionCoordinator::new(),
            list: ListView::new(EntityRoute::Blogs),
        }
    }
}
