use common::error::ApiError;
use common::forms::SubmitTicket;
use common::model::extra_subproduct::{ExtraSubProductField, ExtraSubProductRecord};
use common::model::product::ProductRecord;
use web_sys::File;

pub enum Msg {
    ProductsLoaded(Result<Vec<ProductRecord>, ApiError>),
    Loaded(Result<Vec<ExtraSubProductRecord>, ApiError>),
    Field(ExtraSubProductField<File>),
    Submit,
    Submitted(SubmitTicket, Result<(), ApiError>),
    Edit(String),
    CancelEdit,
    Delete(String),
    Deleted(Result<String, ApiError>),
}
