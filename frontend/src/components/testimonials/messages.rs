use common::error::ApiError;
use common::forms::SubmitTicket;
use common::model::testimonial::{TestimonialField, TestimonialRecord};
use web_sys::File;

pub enum Msg {
    Loaded(Result<Vec<TestimonialRecord>, ApiError>),
    Field(TestimonialField<File>),
    Submit,
    Submitted(SubmitTicket, Result<(), ApiError>),
    Edit(String),
    CancelEdit,
    Delete(String),
    Deleted(Result<String, ApiError>),
}
