use common::error::ApiError;
use common::forms::SubmitTicket;
use common::model::blog::{BlogField, BlogRecipeField, BlogRecipeList, BlogRecord};
use web_sys::File;

pub enum Msg {
    Loaded(Result<Vec<BlogRecord>, ApiError>),
    Field(BlogField<File>),

    Recipe(BlogRecipeField<File>),
    AddItem(BlogRecipeList),
    UpdateItem(BlogRecipeList, usize, String),
    RemoveItem(BlogRecipeList, usize),
    CommitRecipe,
    EditRecipe(usize),
    RemoveRecipe(usize),
    CancelRecipe,

    Submit,
    Submitted(SubmitTicket, Result<(), ApiError>),
    Edit(String),
    CancelEdit,
    Delete(String),
    Deleted(Result<String, ApiError>),
}
