use common::error::ApiError;
use common::forms::SubmitTicket;
use common::model::product::{ProductField, ProductRecipeField, ProductRecord, SubProductField};
use web_sys::File;

pub enum Msg {
    Loaded(Result<Vec<ProductRecord>, ApiError>),
    Field(ProductField<File>),

    SubProduct(SubProductField<File>),
    CommitSubProduct,
    EditSubProduct(usize),
    RemoveSubProduct(usize),
    CancelSubProduct,

    Recipe(ProductRecipeField<File>),
    AddStep,
    UpdateStep(usize, String),
    RemoveStep(usize),
    CommitRecipe,
    EditRecipe(usize),
    RemoveRecipe(usize),
    CancelRecipe,

    Submit,
    Submitted(SubmitTicket, Result<(), ApiError>),

    /// Opens a listed product in the form.
    Edit(String),
    CancelEdit,
    Delete(String),
    Deleted(Result<String, ApiError>),

    /// `None` closes the image preview.
    Preview(Option<String>),
}
