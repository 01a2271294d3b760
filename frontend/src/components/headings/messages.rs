use common::error::ApiError;
use common::forms::SubmitTicket;
use common::model::heading::{HeadingField, HeadingRecord};
use common::model::product::ProductRecord;

pub enum Msg {
    ProductsLoaded(Result<Vec<ProductRecord>, ApiError>),
    Loaded(Result<Vec<HeadingRecord>, ApiError>),
    Field(HeadingField),
    Submit,
    Submitted(SubmitTicket, Result<(), ApiError>),
    Edit(String),
    CancelEdit,
    Delete(String),
    Deleted(Result<String, ApiError>),
}
