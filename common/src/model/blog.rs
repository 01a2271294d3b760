//! Blog posts and the recipes attached to them.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::FileRef;
use super::serde_helpers::{numeric_value, string_or_first, string_or_number};
use crate::forms::validator::{
    require_any_item, require_file, require_non_empty, require_positive, require_text,
};
use crate::forms::{
    CommitOutcome, EditFrom, FieldStore, Form, FormErrors, ListRecord, MultipartPayload,
    NestedCollectionEditor, Reset, SubRecord, Submittable, Validate, ValidationContext,
};
use crate::error::EditorError;
use crate::requests::{EntityRoute, RequestBody};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Parses the value of the difficulty select; unknown values fall back to `Easy`.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == label)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(deserialize_with = "string_or_first")]
    pub blog_image: Option<String>,
    #[serde(deserialize_with = "string_or_first")]
    pub blog_banner: Option<String>,
    #[serde(deserialize_with = "string_or_first")]
    pub blog_banner_mobile: Option<String>,
    pub recipes: Vec<BlogRecipeRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlogRecipeRecord {
    #[serde(rename = "recipeName")]
    pub recipe_name: String,
    pub description: String,
    #[serde(deserialize_with = "string_or_number")]
    pub serving: String,
    #[serde(deserialize_with = "string_or_number")]
    pub prep_time: String,
    #[serde(deserialize_with = "string_or_number")]
    pub cook_time: String,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub cooking_instructions: Vec<String>,
    #[serde(rename = "recipeImage", alias = "image", deserialize_with = "string_or_first")]
    pub recipe_image: Option<String>,
}

impl ListRecord for BlogRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

// --- recipes ----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BlogRecipe<F> {
    pub name: String,
    pub description: String,
    pub serving: String,
    pub prep_time: String,
    pub cook_time: String,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image: FileRef<F>,
}

impl<F> Default for BlogRecipe<F> {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            serving: "1".to_string(),
            prep_time: String::new(),
            cook_time: String::new(),
            difficulty: Difficulty::Easy,
            ingredients: vec![String::new()],
            instructions: vec![String::new()],
            image: FileRef::Empty,
        }
    }
}

pub enum BlogRecipeField<F> {
    Name(String),
    Description(String),
    Serving(String),
    PrepTime(String),
    CookTime(String),
    Difficulty(Difficulty),
    Image(FileRef<F>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogRecipeList {
    Ingredients,
    Instructions,
}

impl<F> Form for BlogRecipe<F> {
    type Field = BlogRecipeField<F>;

    fn apply(&mut self, field: BlogRecipeField<F>) -> &'static str {
        match field {
            BlogRecipeField::Name(name) => {
                self.name = name;
                "recipeName"
            }
            BlogRecipeField::Description(description) => {
                self.description = description;
                "description"
            }
            BlogRecipeField::Serving(serving) => {
                self.serving = serving;
                "serving"
            }
            BlogRecipeField::PrepTime(minutes) => {
                self.prep_time = minutes;
                "prep_time"
            }
            BlogRecipeField::CookTime(minutes) => {
                self.cook_time = minutes;
                "cook_time"
            }
            BlogRecipeField::Difficulty(difficulty) => {
                self.difficulty = difficulty;
                "difficulty"
            }
            BlogRecipeField::Image(image) => {
                self.image = image;
                "recipeImage"
            }
        }
    }
}

impl<F> Validate for BlogRecipe<F> {
    fn validate(&self, ctx: &ValidationContext) -> FormErrors {
        let mut errors = FormErrors::new();
        require_text(&mut errors, "recipeName", &self.name, "Recipe name is required");
        require_text(&mut errors, "description", &self.description, "Description is required");
        require_positive(&mut errors, "serving", &self.serving, "Serving must be > 0");
        require_positive(&mut errors, "prep_time", &self.prep_time, "Prep time required");
        require_positive(&mut errors, "cook_time", &self.cook_time, "Cook time required");
        require_any_item(&mut errors, "ingredients", &self.ingredients, "At least one ingredient required");
        require_any_item(
            &mut errors,
            "cooking_instructions",
            &self.instructions,
            "At least one step required",
        );
        require_file(&mut errors, "recipeImage", &self.image, ctx, "Recipe image is required");
        errors
    }
}

impl<F: Clone> SubRecord for BlogRecipe<F> {
    type ListField = BlogRecipeList;

    fn list_mut(&mut self, field: BlogRecipeList) -> &mut Vec<String> {
        match field {
            BlogRecipeList::Ingredients => &mut self.ingredients,
            BlogRecipeList::Instructions => &mut self.instructions,
        }
    }

    fn list_key(field: BlogRecipeList) -> &'static str {
        match field {
            BlogRecipeList::Ingredients => "ingredients",
            BlogRecipeList::Instructions => "cooking_instructions",
        }
    }
}

fn filled(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect()
}

impl<F> BlogRecipe<F> {
    /// Every scalar field, as sent inside the `recipes` JSON part. Blank list
    /// rows left over in the editor are dropped.
    pub fn wire(&self) -> Value {
        json!({
            "recipeName": self.name.trim(),
            "description": self.description.trim(),
            "serving": numeric_value(&self.serving),
            "prep_time": numeric_value(&self.prep_time),
            "cook_time": numeric_value(&self.cook_time),
            "difficulty": self.difficulty,
            "ingredients": filled(&self.ingredients),
            "cooking_instructions": filled(&self.instructions),
        })
    }
}

impl<F> From<&BlogRecipeRecord> for BlogRecipe<F> {
    fn from(record: &BlogRecipeRecord) -> Self {
        Self {
            name: record.recipe_name.clone(),
            description: record.description.clone(),
            serving: record.serving.clone(),
            prep_time: record.prep_time.clone(),
            cook_time: record.cook_time.clone(),
            difficulty: record.difficulty,
            ingredients: record.ingredients.clone(),
            instructions: record.cooking_instructions.clone(),
            image: FileRef::from_url(record.recipe_image.as_deref()),
        }
    }
}

// --- blog -------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BlogForm<F> {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: FileRef<F>,
    pub banner: FileRef<F>,
    pub banner_mobile: FileRef<F>,
    pub recipes: Vec<BlogRecipe<F>>,
}

impl<F> Default for BlogForm<F> {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            category: String::new(),
            image: FileRef::Empty,
            banner: FileRef::Empty,
            banner_mobile: FileRef::Empty,
            recipes: Vec::new(),
        }
    }
}

pub enum BlogField<F> {
    Title(String),
    Description(String),
    Category(String),
    Image(FileRef<F>),
    Banner(FileRef<F>),
    BannerMobile(FileRef<F>),
}

impl<F> Form for BlogForm<F> {
    type Field = BlogField<F>;

    fn apply(&mut self, field: BlogField<F>) -> &'static str {
        match field {
            BlogField::Title(title) => {
                self.title = title;
                "title"
            }
            BlogField::Description(description) => {
                self.description = description;
                "description"
            }
            BlogField::Category(category) => {
                self.category = category;
                "category"
            }
            BlogField::Image(image) => {
                self.image = image;
                "blogImage"
            }
            BlogField::Banner(banner) => {
                self.banner = banner;
                "blogBanner"
            }
            BlogField::BannerMobile(banner) => {
                self.banner_mobile = banner;
                "blogBannerMobile"
            }
        }
    }
}

impl<F> Validate for BlogForm<F> {
    fn validate(&self, ctx: &ValidationContext) -> FormErrors {
        let mut errors = FormErrors::new();
        require_text(&mut errors, "title", &self.title, "Title is required");
        require_text(&mut errors, "description", &self.description, "Description is required");
        require_text(&mut errors, "category", &self.category, "Category is required");
        require_file(&mut errors, "blogImage", &self.image, ctx, "Blog Image is required");
        require_file(&mut errors, "blogBanner", &self.banner, ctx, "Blog Banner is required");
        require_file(
            &mut errors,
            "blogBannerMobile",
            &self.banner_mobile,
            ctx,
            "Blog Banner(mobile) is required",
        );
        require_non_empty(&mut errors, "recipes", &self.recipes, "At least one recipe is required");
        errors
    }
}

impl<F: Clone> Submittable for BlogForm<F> {
    type File = F;

    fn route(&self) -> EntityRoute {
        EntityRoute::Blogs
    }

    fn identifier(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn to_body(&self) -> Result<RequestBody<F>, serde_json::Error> {
        let recipes: Vec<Value> = self.recipes.iter().map(BlogRecipe::wire).collect();

        let mut payload = MultipartPayload::new();
        payload
            .text("title", self.title.trim())
            .text("description", self.description.trim())
            .text("category", self.category.trim());
        payload.json("recipes", &recipes)?;
        payload
            .file("blogImage", &self.image)
            .file("blogBanner", &self.banner)
            .file("blogBannerMobile", &self.banner_mobile);
        for (index, recipe) in self.recipes.iter().enumerate() {
            payload.indexed_file("recipeImage", index, &recipe.image);
        }
        Ok(RequestBody::Multipart(payload))
    }
}

impl<F> From<&BlogRecord> for BlogForm<F> {
    fn from(record: &BlogRecord) -> Self {
        Self {
            id: Some(record.id.clone()).filter(|id| !id.is_empty()),
            title: record.title.clone(),
            description: record.description.clone(),
            category: record.category.clone(),
            image: FileRef::from_url(record.blog_image.as_deref()),
            banner: FileRef::from_url(record.blog_banner.as_deref()),
            banner_mobile: FileRef::from_url(record.blog_banner_mobile.as_deref()),
            recipes: record.recipes.iter().map(BlogRecipe::from).collect(),
        }
    }
}

// --- workspace --------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BlogWorkspace<F> {
    pub fields: FieldStore<BlogForm<F>>,
    pub recipes: NestedCollectionEditor<BlogRecipe<F>>,
}

impl<F: Clone> Default for BlogWorkspace<F> {
    fn default() -> Self {
        Self {
            fields: FieldStore::new(),
            recipes: NestedCollectionEditor::new(),
        }
    }
}

impl<F: Clone> BlogWorkspace<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit_recipe(&mut self, index: usize) -> Result<(), EditorError> {
        self.recipes.start_edit(&self.fields.value().recipes, index)
    }

    /// Commits the staged recipe. A successful commit also clears the
    /// "at least one recipe" error of the blog itself.
    ///
    /// Every recipe needs an image of its own, also on a saved blog.
    pub fn commit_recipe(&mut self) -> Result<CommitOutcome, FormErrors> {
        let outcome = self
            .recipes
            .commit(&mut self.fields.value_mut().recipes, &ValidationContext::default())?;
        self.fields.clear_error("recipes");
        Ok(outcome)
    }

    pub fn remove_recipe(&mut self, index: usize) -> Result<BlogRecipe<F>, EditorError> {
        self.recipes
            .remove(&mut self.fields.value_mut().recipes, index)
    }

    pub fn check(&mut self) -> bool {
        self.fields.check()
    }
}

impl<F: Clone> Reset for BlogWorkspace<F> {
    fn reset(&mut self) {
        self.fields.reset();
        self.recipes.reset();
    }
}

impl<F: Clone> EditFrom<BlogRecord> for BlogWorkspace<F> {
    fn edit_from(&mut self, record: &BlogRecord) {
        self.fields.edit_from(record);
        self.recipes.start_new();
    }
}

impl<F: Clone> Submittable for BlogWorkspace<F> {
    type File = F;

    fn route(&self) -> EntityRoute {
        self.fields.route()
    }

    fn identifier(&self) -> Option<&str> {
        self.fields.identifier()
    }

    fn to_body(&self) -> Result<RequestBody<F>, serde_json::Error> {
        self.fields.to_body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{SubmissionCoordinator, SubmitOutcome};
    use crate::requests::fake::{FakeClient, TestFile};
    use futures::executor::block_on;

    type Workspace = BlogWorkspace<TestFile>;

    fn stage_recipe(workspace: &mut Workspace) {
        let editor = &mut workspace.recipes;
        editor.update_field(BlogRecipeField::Name("Mango Chutney".into()));
        editor.update_field(BlogRecipeField::Description("Sweet and tangy".into()));
        editor.update_field(BlogRecipeField::PrepTime("10".into()));
        editor.update_field(BlogRecipeField::CookTime("25".into()));
        editor.update_field(BlogRecipeField::Difficulty(Difficulty::Medium));
        editor.update_field(BlogRecipeField::Image(FileRef::LocalFile("chutney.png")));
        editor
            .update_item(BlogRecipeList::Ingredients, 0, "Mango".into())
            .unwrap();
        editor
            .update_item(BlogRecipeList::Instructions, 0, "Simmer".into())
            .unwrap();
    }

    fn fill_blog(workspace: &mut Workspace) {
        let fields = &mut workspace.fields;
        fields.set_field(BlogField::Title("Summer pickles".into()));
        fields.set_field(BlogField::Description("Three recipes".into()));
        fields.set_field(BlogField::Category("Pickles".into()));
        fields.set_field(BlogField::Image(FileRef::LocalFile("image.png")));
        fields.set_field(BlogField::Banner(FileRef::LocalFile("banner.png")));
        fields.set_field(BlogField::BannerMobile(FileRef::LocalFile("mobile.png")));
    }

    #[test]
    fn staged_recipe_starts_with_one_blank_row_per_list() {
        let workspace = Workspace::new();
        let staged = workspace.recipes.staging();
        assert_eq!(staged.serving, "1");
        assert_eq!(staged.ingredients, vec![String::new()]);
        assert_eq!(staged.instructions, vec![String::new()]);
    }

    #[test]
    fn recipe_rules() {
        let mut workspace = Workspace::new();
        workspace
            .recipes
            .update_field(BlogRecipeField::Serving("0".into()));

        let errors = workspace.commit_recipe().unwrap_err();

        assert_eq!(
            errors.keys().collect::<Vec<_>>(),
            vec![
                "cook_time",
                "cooking_instructions",
                "description",
                "ingredients",
                "prep_time",
                "recipeImage",
                "recipeName",
                "serving",
            ]
        );
    }

    #[test]
    fn one_filled_ingredient_is_enough() {
        let mut workspace = Workspace::new();
        stage_recipe(&mut workspace);
        workspace.recipes.append_item(BlogRecipeList::Ingredients);

        assert_eq!(workspace.commit_recipe(), Ok(CommitOutcome::Appended(0)));
        let recipe = &workspace.fields.value().recipes[0];
        assert_eq!(recipe.ingredients, vec!["Mango".to_string(), String::new()]);
        assert_eq!(
            recipe.wire()["ingredients"],
            serde_json::json!(["Mango"])
        );
    }

    #[test]
    fn committing_a_recipe_clears_the_missing_recipes_error() {
        let mut workspace = Workspace::new();
        fill_blog(&mut workspace);
        assert!(!workspace.check());
        assert_eq!(workspace.fields.errors().keys().collect::<Vec<_>>(), vec!["recipes"]);

        stage_recipe(&mut workspace);
        workspace.commit_recipe().unwrap();

        assert!(workspace.fields.errors().is_empty());
        assert!(workspace.check());
    }

    #[test]
    fn blog_is_created_with_recipe_images() {
        let client = FakeClient::new();
        let mut coordinator = SubmissionCoordinator::new();
        let mut workspace = Workspace::new();
        fill_blog(&mut workspace);
        stage_recipe(&mut workspace);
        workspace.commit_recipe().unwrap();

        let outcome = block_on(coordinator.submit(&client, &mut workspace, || {})).unwrap();

        assert!(matches!(outcome, SubmitOutcome::Saved(_)));
        let sent = client.requests();
        assert_eq!(sent[0].path, "/api/blogs/add");
        let payload = sent[0].body.as_ref().and_then(RequestBody::as_multipart).unwrap();
        assert_eq!(payload.text_value("category"), Some("Pickles"));
        let recipes: Value = serde_json::from_str(payload.text_value("recipes").unwrap()).unwrap();
        assert_eq!(recipes[0]["difficulty"], "Medium");
        assert_eq!(recipes[0]["serving"], 1);
        assert_eq!(recipes[0]["cook_time"], 25);
        assert!(payload.has_file("recipeImage_0"));
        assert!(payload.has_file("blogBannerMobile"));
        assert!(workspace.fields.value().recipes.is_empty());
    }

    #[test]
    fn persisted_blog_round_trips_into_the_form() {
        let record: BlogRecord = serde_json::from_str(
            r#"{
                "_id": "b1",
                "title": "Summer pickles",
                "description": "Three recipes",
                "category": "Pickles",
                "blogImage": "https://cdn/i.png",
                "blogBanner": ["https://cdn/b.png"],
                "recipes": [{
                    "recipeName": "Chutney", "description": "Tangy",
                    "serving": 4, "prep_time": "10", "cook_time": 20,
                    "difficulty": "Hard",
                    "ingredients": ["Mango"], "cooking_instructions": ["Simmer"],
                    "recipeImage": "https://cdn/r.png"
                }]
            }"#,
        )
        .unwrap();
        let mut workspace = Workspace::new();

        workspace.edit_from(&record);

        let form = workspace.fields.value();
        assert_eq!(form.id.as_deref(), Some("b1"));
        assert_eq!(form.banner, FileRef::PersistedUrl("https://cdn/b.png".into()));
        assert_eq!(form.banner_mobile, FileRef::Empty);
        assert_eq!(form.recipes[0].serving, "4");
        assert_eq!(form.recipes[0].difficulty, Difficulty::Hard);
        assert!(workspace.check());
    }

    #[test]
    fn a_new_recipe_on_a_saved_blog_needs_an_image() {
        let mut workspace = Workspace::new();
        workspace.fields.load(BlogForm {
            id: Some("b1".into()),
            ..BlogForm::default()
        });
        stage_recipe(&mut workspace);
        workspace
            .recipes
            .update_field(BlogRecipeField::Image(FileRef::Empty));

        let errors = workspace.commit_recipe().unwrap_err();

        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["recipeImage"]);
        assert!(workspace.fields.value().recipes.is_empty());
    }

    #[test]
    fn difficulty_labels() {
        assert_eq!(Difficulty::from_label("Medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("extreme"), Difficulty::Easy);
    }
}
