//! Product catalog entries with their nested sub-products and recipes.
//!
//! `ProductRecord` is what `GET /api/products` returns. `ProductForm` is the
//! editable copy, where every image is a `FileRef` so persisted URLs and newly
//! picked files can sit side by side. A `ProductWorkspace` bundles the form
//! with the two nested collection editors used on the product page.

use serde::Deserialize;
use serde_json::{Value, json};

use super::FileRef;
use super::serde_helpers::{numeric_value, string_or_first, string_or_number};
use crate::forms::validator::{
    require_any_item, require_every_item, require_file, require_number, require_text,
};
use crate::forms::{
    CommitOutcome, EditFrom, FieldStore, Form, FormErrors, ListRecord, MultipartPayload,
    NestedCollectionEditor, NoListField, Reset, SubRecord, Submittable, Validate,
    ValidationContext,
};
use crate::error::EditorError;
use crate::requests::{EntityRoute, RequestBody};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    pub product_banner: Option<String>,
    pub product_images: Vec<String>,
    pub product_sizes: Vec<String>,
    pub banner2: Option<String>,
    pub how_to_make_banner: Option<String>,
    pub subproducts: Vec<SubProductRecord>,
    pub recipes: Vec<ProductRecipeRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubProductRecord {
    pub subproduct_name: String,
    pub description: String,
    #[serde(deserialize_with = "string_or_number")]
    pub weight: String,
    #[serde(deserialize_with = "string_or_first")]
    pub subproduct_img: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRecipeRecord {
    pub recipe_name: String,
    pub steps: Vec<String>,
    #[serde(deserialize_with = "string_or_first")]
    pub recipe_main_img: Option<String>,
    #[serde(deserialize_with = "string_or_first")]
    pub recipe_sub_img: Option<String>,
}

impl ListRecord for ProductRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

// --- sub-products -----------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SubProduct<F> {
    pub name: String,
    pub description: String,
    /// Raw numeric input; validated on commit, sent as a number.
    pub weight: String,
    pub image: FileRef<F>,
}

impl<F> Default for SubProduct<F> {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            weight: String::new(),
            image: FileRef::Empty,
        }
    }
}

pub enum SubProductField<F> {
    Name(String),
    Description(String),
    Weight(String),
    Image(FileRef<F>),
}

impl<F> Form for SubProduct<F> {
    type Field = SubProductField<F>;

    fn apply(&mut self, field: SubProductField<F>) -> &'static str {
        match field {
            SubProductField::Name(name) => {
                self.name = name;
                "subproductName"
            }
            SubProductField::Description(description) => {
                self.description = description;
                "description"
            }
            SubProductField::Weight(weight) => {
                self.weight = weight;
                "weight"
            }
            SubProductField::Image(image) => {
                self.image = image;
                "subproductImg"
            }
        }
    }
}

impl<F> Validate for SubProduct<F> {
    fn validate(&self, ctx: &ValidationContext) -> FormErrors {
        let mut errors = FormErrors::new();
        require_text(&mut errors, "subproductName", &self.name, "Subproduct Name is required");
        require_file(&mut errors, "subproductImg", &self.image, ctx, "Subproduct Image is required");
        require_text(&mut errors, "description", &self.description, "Description is required");
        require_number(&mut errors, "weight", &self.weight, "Weight is required");
        errors
    }
}

impl<F: Clone> SubRecord for SubProduct<F> {
    type ListField = NoListField;

    fn list_mut(&mut self, field: NoListField) -> &mut Vec<String> {
        match field {}
    }

    fn list_key(field: NoListField) -> &'static str {
        match field {}
    }
}

impl<F> SubProduct<F> {
    /// Scalar fields as sent inside the `subproducts` JSON part.
    pub fn wire(&self) -> Value {
        json!({
            "subproductName": self.name.trim(),
            "description": self.description.trim(),
            "weight": numeric_value(&self.weight),
        })
    }
}

impl<F> From<&SubProductRecord> for SubProduct<F> {
    fn from(record: &SubProductRecord) -> Self {
        Self {
            name: record.subproduct_name.clone(),
            description: record.description.clone(),
            weight: record.weight.clone(),
            image: FileRef::from_url(record.subproduct_img.as_deref()),
        }
    }
}

// --- recipes ----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecipe<F> {
    pub name: String,
    pub steps: Vec<String>,
    pub main_image: FileRef<F>,
    pub sub_image: FileRef<F>,
}

impl<F> Default for ProductRecipe<F> {
    fn default() -> Self {
        Self {
            name: String::new(),
            steps: Vec::new(),
            main_image: FileRef::Empty,
            sub_image: FileRef::Empty,
        }
    }
}

pub enum ProductRecipeField<F> {
    Name(String),
    MainImage(FileRef<F>),
    SubImage(FileRef<F>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeList {
    Steps,
}

impl<F> Form for ProductRecipe<F> {
    type Field = ProductRecipeField<F>;

    fn apply(&mut self, field: ProductRecipeField<F>) -> &'static str {
        match field {
            ProductRecipeField::Name(name) => {
                self.name = name;
                "recipeName"
            }
            ProductRecipeField::MainImage(image) => {
                self.main_image = image;
                "recipeMainImg"
            }
            ProductRecipeField::SubImage(image) => {
                self.sub_image = image;
                "recipeSubImg"
            }
        }
    }
}

impl<F> Validate for ProductRecipe<F> {
    fn validate(&self, ctx: &ValidationContext) -> FormErrors {
        let mut errors = FormErrors::new();
        require_text(&mut errors, "recipeName", &self.name, "Recipe Name is required");
        require_file(&mut errors, "recipeMainImg", &self.main_image, ctx, "Main Recipe Image is required");
        require_file(&mut errors, "recipeSubImg", &self.sub_image, ctx, "Sub Recipe Image is required");
        require_every_item(&mut errors, "steps", &self.steps, "All steps must be filled");
        errors
    }
}

impl<F: Clone> SubRecord for ProductRecipe<F> {
    type ListField = RecipeList;

    fn list_mut(&mut self, field: RecipeList) -> &mut Vec<String> {
        match field {
            RecipeList::Steps => &mut self.steps,
        }
    }

    fn list_key(field: RecipeList) -> &'static str {
        match field {
            RecipeList::Steps => "steps",
        }
    }
}

impl<F> ProductRecipe<F> {
    pub fn wire(&self) -> Value {
        json!({
            "recipeName": self.name.trim(),
            "steps": self.steps.iter().map(|step| step.trim()).collect::<Vec<_>>(),
        })
    }
}

impl<F> From<&ProductRecipeRecord> for ProductRecipe<F> {
    fn from(record: &ProductRecipeRecord) -> Self {
        Self {
            name: record.recipe_name.clone(),
            steps: record.steps.clone(),
            main_image: FileRef::from_url(record.recipe_main_img.as_deref()),
            sub_image: FileRef::from_url(record.recipe_sub_img.as_deref()),
        }
    }
}

// --- product ----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm<F> {
    pub id: Option<String>,
    pub name: String,
    /// Sizes as typed in the comma separated input.
    pub sizes: Vec<String>,
    pub banner: FileRef<F>,
    pub banner2: FileRef<F>,
    pub how_to_make_banner: FileRef<F>,
    pub images: Vec<FileRef<F>>,
    pub subproducts: Vec<SubProduct<F>>,
    pub recipes: Vec<ProductRecipe<F>>,
}

impl<F> Default for ProductForm<F> {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            sizes: Vec::new(),
            banner: FileRef::Empty,
            banner2: FileRef::Empty,
            how_to_make_banner: FileRef::Empty,
            images: Vec::new(),
            subproducts: Vec::new(),
            recipes: Vec::new(),
        }
    }
}

pub enum ProductField<F> {
    Name(String),
    /// The whole comma separated sizes input.
    Sizes(String),
    Banner(FileRef<F>),
    Banner2(FileRef<F>),
    HowToMakeBanner(FileRef<F>),
    AddImages(Vec<F>),
    RemoveImage(usize),
}

impl<F> Form for ProductForm<F> {
    type Field = ProductField<F>;

    fn apply(&mut self, field: ProductField<F>) -> &'static str {
        match field {
            ProductField::Name(name) => {
                self.name = name;
                "productName"
            }
            ProductField::Sizes(sizes) => {
                self.sizes = sizes.split(',').map(str::to_string).collect();
                "productSizes"
            }
            ProductField::Banner(banner) => {
                self.banner = banner;
                "productBanner"
            }
            ProductField::Banner2(banner) => {
                self.banner2 = banner;
                "banner2"
            }
            ProductField::HowToMakeBanner(banner) => {
                self.how_to_make_banner = banner;
                "howToMakeBanner"
            }
            ProductField::AddImages(files) => {
                self.images.extend(files.into_iter().map(FileRef::LocalFile));
                "productImages"
            }
            ProductField::RemoveImage(index) => {
                if index < self.images.len() {
                    self.images.remove(index);
                }
                "productImages"
            }
        }
    }
}

impl<F> Validate for ProductForm<F> {
    fn validate(&self, ctx: &ValidationContext) -> FormErrors {
        let mut errors = FormErrors::new();
        require_text(&mut errors, "productName", &self.name, "Product Name is required");
        require_file(&mut errors, "productBanner", &self.banner, ctx, "Product Banner is required");
        require_any_item(&mut errors, "productSizes", &self.sizes, "At least one product size is required");
        errors
    }
}

impl<F> ProductForm<F> {
    /// Sizes with surrounding blanks removed, empty entries dropped.
    pub fn clean_sizes(&self) -> Vec<&str> {
        self.sizes
            .iter()
            .map(|size| size.trim())
            .filter(|size| !size.is_empty())
            .collect()
    }
}

impl<F: Clone> Submittable for ProductForm<F> {
    type File = F;

    fn route(&self) -> EntityRoute {
        EntityRoute::Products
    }

    fn identifier(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn to_body(&self) -> Result<RequestBody<F>, serde_json::Error> {
        let subproducts: Vec<Value> = self.subproducts.iter().map(SubProduct::wire).collect();
        let recipes: Vec<Value> = self.recipes.iter().map(ProductRecipe::wire).collect();

        let mut payload = MultipartPayload::new();
        payload.text("productName", self.name.trim());
        payload.json("productSizes", &self.clean_sizes())?;
        payload.json("subproducts", &subproducts)?;
        payload.json("recipes", &recipes)?;

        payload
            .file("productBanner", &self.banner)
            .file("banner2", &self.banner2)
            .file("howToMakeBanner", &self.how_to_make_banner);
        for image in &self.images {
            payload.file("productImages", image);
        }
        for (index, sub) in self.subproducts.iter().enumerate() {
            payload.indexed_file("subproductImg", index, &sub.image);
        }
        for (index, recipe) in self.recipes.iter().enumerate() {
            payload
                .indexed_file("recipeMainImg", index, &recipe.main_image)
                .indexed_file("recipeSubImg", index, &recipe.sub_image);
        }
        Ok(RequestBody::Multipart(payload))
    }
}

impl<F> From<&ProductRecord> for ProductForm<F> {
    fn from(record: &ProductRecord) -> Self {
        Self {
            id: Some(record.id.clone()).filter(|id| !id.is_empty()),
            name: record.product_name.clone(),
            sizes: record.product_sizes.clone(),
            banner: FileRef::from_url(record.product_banner.as_deref()),
            banner2: FileRef::from_url(record.banner2.as_deref()),
            how_to_make_banner: FileRef::from_url(record.how_to_make_banner.as_deref()),
            images: record
                .product_images
                .iter()
                .map(|url| FileRef::from_url(Some(url)))
                .filter(FileRef::is_set)
                .collect(),
            subproducts: record.subproducts.iter().map(SubProduct::from).collect(),
            recipes: record.recipes.iter().map(ProductRecipe::from).collect(),
        }
    }
}

// --- workspace --------------------------------------------------------------

/// Everything the product page edits: the flat fields plus one editor per
/// nested collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductWorkspace<F> {
    pub fields: FieldStore<ProductForm<F>>,
    pub subproducts: NestedCollectionEditor<SubProduct<F>>,
    pub recipes: NestedCollectionEditor<ProductRecipe<F>>,
}

impl<F: Clone> Default for ProductWorkspace<F> {
    fn default() -> Self {
        Self {
            fields: FieldStore::new(),
            subproducts: NestedCollectionEditor::new(),
            recipes: NestedCollectionEditor::new(),
        }
    }
}

impl<F: Clone> ProductWorkspace<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit_subproduct(&mut self, index: usize) -> Result<(), EditorError> {
        self.subproducts
            .start_edit(&self.fields.value().subproducts, index)
    }

    /// Sub-products need their own image whether or not the product is saved;
    /// an image already stored for the entry counts as set.
    pub fn commit_subproduct(&mut self) -> Result<CommitOutcome, FormErrors> {
        self.subproducts
            .commit(&mut self.fields.value_mut().subproducts, &ValidationContext::default())
    }

    pub fn remove_subproduct(&mut self, index: usize) -> Result<SubProduct<F>, EditorError> {
        self.subproducts
            .remove(&mut self.fields.value_mut().subproducts, index)
    }

    pub fn edit_recipe(&mut self, index: usize) -> Result<(), EditorError> {
        self.recipes.start_edit(&self.fields.value().recipes, index)
    }

    pub fn commit_recipe(&mut self) -> Result<CommitOutcome, FormErrors> {
        self.recipes
            .commit(&mut self.fields.value_mut().recipes, &ValidationContext::default())
    }

    pub fn remove_recipe(&mut self, index: usize) -> Result<ProductRecipe<F>, EditorError> {
        self.recipes
            .remove(&mut self.fields.value_mut().recipes, index)
    }

    /// Runs the top-level validator and keeps its errors for the view.
    /// Returns `true` when the product may be submitted.
    pub fn check(&mut self) -> bool {
        self.fields.check()
    }
}

impl<F: Clone> Reset for ProductWorkspace<F> {
    fn reset(&mut self) {
        self.fields.reset();
        self.subproducts.reset();
        self.recipes.reset();
    }
}

impl<F: Clone> EditFrom<ProductRecord> for ProductWorkspace<F> {
    fn edit_from(&mut self, record: &ProductRecord) {
        self.fields.load(ProductForm::from(record));
        self.subproducts.start_new();
        self.recipes.start_new();
    }
}

impl<F: Clone> Submittable for ProductWorkspace<F> {
    type File = F;

    fn route(&self) -> EntityRoute {
        self.fields.value().route()
    }

    fn identifier(&self) -> Option<&str> {
        self.fields.value().identifier()
    }

    fn to_body(&self) -> Result<RequestBody<F>, serde_json::Error> {
        self.fields.value().to_body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{SaveKind, SubmissionCoordinator, SubmitOutcome};
    use crate::requests::Method;
    use crate::requests::fake::{FakeClient, TestFile};
    use futures::executor::block_on;
    use std::cell::Cell;

    type Workspace = ProductWorkspace<TestFile>;

    fn stage_pickle(workspace: &mut Workspace) {
        let editor = &mut workspace.subproducts;
        editor.update_field(SubProductField::Name("Pickle".into()));
        editor.update_field(SubProductField::Description("Spicy".into()));
        editor.update_field(SubProductField::Weight("250".into()));
        editor.update_field(SubProductField::Image(FileRef::LocalFile("pickle.png")));
    }

    fn stage_recipe(workspace: &mut Workspace, steps: &[&str]) {
        let editor = &mut workspace.recipes;
        editor.update_field(ProductRecipeField::Name("Mango Lassi".into()));
        editor.update_field(ProductRecipeField::MainImage(FileRef::LocalFile("main.png")));
        editor.update_field(ProductRecipeField::SubImage(FileRef::LocalFile("sub.png")));
        for (index, step) in steps.iter().enumerate() {
            editor.append_item(RecipeList::Steps);
            editor
                .update_item(RecipeList::Steps, index, step.to_string())
                .unwrap();
        }
    }

    fn fill_product(workspace: &mut Workspace) {
        workspace.fields.set_field(ProductField::Name("Mango Pickle".into()));
        workspace.fields.set_field(ProductField::Sizes("250g, 1kg".into()));
        workspace
            .fields
            .set_field(ProductField::Banner(FileRef::LocalFile("banner.png")));
    }

    #[test]
    fn committing_a_subproduct_on_a_new_product() {
        let mut workspace = Workspace::new();
        stage_pickle(&mut workspace);

        let outcome = workspace.commit_subproduct();

        assert_eq!(outcome, Ok(CommitOutcome::Appended(0)));
        assert_eq!(workspace.fields.value().subproducts.len(), 1);
        assert_eq!(workspace.fields.value().subproducts[0].name, "Pickle");
        assert_eq!(workspace.subproducts.staging(), &SubProduct::default());
        let staged = workspace.subproducts.staging();
        assert_eq!(
            (staged.name.as_str(), staged.description.as_str(), staged.weight.as_str()),
            ("", "", "")
        );
        assert_eq!(staged.image, FileRef::Empty);
    }

    #[test]
    fn recipe_with_a_blank_step_is_rejected() {
        let mut workspace = Workspace::new();
        stage_recipe(&mut workspace, &["Boil water", ""]);

        let errors = workspace.commit_recipe().unwrap_err();

        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["steps"]);
        assert_eq!(workspace.fields.value().recipes.len(), 0);
    }

    #[test]
    fn each_missing_subproduct_field_is_reported_alone() {
        for blank in ["subproductName", "description"] {
            let mut workspace = Workspace::new();
            stage_pickle(&mut workspace);
            let field = match blank {
                "subproductName" => SubProductField::Name("   ".into()),
                _ => SubProductField::Description("".into()),
            };
            workspace.subproducts.update_field(field);

            let errors = workspace.commit_subproduct().unwrap_err();

            assert_eq!(errors.keys().collect::<Vec<_>>(), vec![blank]);
            assert!(workspace.fields.value().subproducts.is_empty());
        }
    }

    #[test]
    fn non_numeric_weight_is_rejected() {
        let mut workspace = Workspace::new();
        stage_pickle(&mut workspace);
        workspace
            .subproducts
            .update_field(SubProductField::Weight("heavy".into()));

        let errors = workspace.commit_subproduct().unwrap_err();
        assert_eq!(errors.get("weight"), Some("Weight is required"));
    }

    #[test]
    fn the_two_editors_are_independent() {
        let mut workspace = Workspace::new();
        stage_pickle(&mut workspace);
        workspace.commit_subproduct().unwrap();
        stage_recipe(&mut workspace, &["Blend"]);
        workspace.commit_recipe().unwrap();

        workspace.edit_subproduct(0).unwrap();
        workspace.edit_recipe(0).unwrap();

        assert_eq!(workspace.subproducts.slot(), Some(0));
        assert_eq!(workspace.recipes.slot(), Some(0));
    }

    #[test]
    fn product_validation() {
        let mut workspace = Workspace::new();
        workspace.fields.set_field(ProductField::Sizes(" , ".into()));
        assert!(!workspace.check());
        assert_eq!(
            workspace.fields.errors().keys().collect::<Vec<_>>(),
            vec!["productBanner", "productName", "productSizes"]
        );

        fill_product(&mut workspace);
        assert!(workspace.fields.errors().is_empty());
        assert!(workspace.check());
    }

    #[test]
    fn new_product_is_created_with_indexed_files() {
        let client = FakeClient::new();
        let mut coordinator = SubmissionCoordinator::new();
        let mut workspace = Workspace::new();
        fill_product(&mut workspace);
        stage_pickle(&mut workspace);
        workspace.commit_subproduct().unwrap();
        stage_recipe(&mut workspace, &["Peel", "Blend"]);
        workspace.commit_recipe().unwrap();
        assert!(workspace.check());
        let refreshed = Cell::new(0);

        let outcome = block_on(coordinator.submit(&client, &mut workspace, || {
            refreshed.set(refreshed.get() + 1)
        }))
        .unwrap();

        assert_eq!(outcome, SubmitOutcome::Saved(SaveKind::Created));
        let sent = client.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, "/api/products/add");

        let payload = sent[0].body.as_ref().and_then(RequestBody::as_multipart).unwrap();
        assert_eq!(payload.text_value("productName"), Some("Mango Pickle"));
        assert_eq!(payload.text_value("productSizes"), Some(r#"["250g","1kg"]"#));
        assert_eq!(
            payload.text_value("subproducts"),
            Some(r#"[{"description":"Spicy","subproductName":"Pickle","weight":250}]"#)
        );
        assert_eq!(
            payload.text_value("recipes"),
            Some(r#"[{"recipeName":"Mango Lassi","steps":["Peel","Blend"]}]"#)
        );
        assert!(payload.has_file("productBanner"));
        assert!(payload.has_file("subproductImg_0"));
        assert!(payload.has_file("recipeMainImg_0"));
        assert!(payload.has_file("recipeSubImg_0"));

        assert_eq!(refreshed.get(), 1);
        assert_eq!(workspace.fields.value(), &ProductForm::default());
    }

    fn persisted_record() -> ProductRecord {
        serde_json::from_str(
            r#"{
                "_id": "66f1c0",
                "productName": "Mango Pickle",
                "productBanner": "https://cdn/banner.png",
                "productImages": ["https://cdn/1.png"],
                "productSizes": ["250g"],
                "subproducts": [
                    {"subproductName": "Pickle", "description": "Spicy", "weight": 250,
                     "subproductImg": "https://cdn/pickle.png"}
                ],
                "recipes": [
                    {"recipeName": "Lassi", "steps": ["Blend"],
                     "recipeMainImg": "https://cdn/main.png",
                     "recipeSubImg": ["https://cdn/sub.png"]}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn editing_a_persisted_product_keeps_stored_files() {
        let record = persisted_record();
        let mut workspace = Workspace::new();
        workspace.edit_from(&record);

        let form = workspace.fields.value();
        assert_eq!(form.id.as_deref(), Some("66f1c0"));
        assert_eq!(form.banner, FileRef::PersistedUrl("https://cdn/banner.png".into()));
        assert_eq!(form.subproducts[0].weight, "250");
        assert_eq!(
            form.recipes[0].sub_image,
            FileRef::PersistedUrl("https://cdn/sub.png".into())
        );
        assert!(workspace.check());
    }

    #[test]
    fn update_omits_parts_for_persisted_files() {
        let client = FakeClient::new();
        let mut coordinator = SubmissionCoordinator::new();
        let mut workspace = Workspace::new();
        workspace.edit_from(&persisted_record());
        workspace
            .fields
            .set_field(ProductField::HowToMakeBanner(FileRef::LocalFile("how.png")));

        block_on(coordinator.submit(&client, &mut workspace, || {})).unwrap();

        let sent = client.requests();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].path, "/api/products/66f1c0");
        let payload = sent[0].body.as_ref().and_then(RequestBody::as_multipart).unwrap();
        assert!(!payload.has_file("productBanner"));
        assert!(!payload.has_file("productImages"));
        assert!(!payload.has_file("subproductImg_0"));
        assert!(!payload.has_file("recipeMainImg_0"));
        assert!(payload.has_file("howToMakeBanner"));
    }

    #[test]
    fn failed_save_keeps_everything_for_a_retry() {
        let client = FakeClient::new();
        client.respond_status(500, r#"{"error":"upload failed"}"#);
        let mut coordinator = SubmissionCoordinator::new();
        let mut workspace = Workspace::new();
        fill_product(&mut workspace);
        stage_pickle(&mut workspace);
        workspace.commit_subproduct().unwrap();
        let before = workspace.clone();

        let outcome = block_on(coordinator.submit(&client, &mut workspace, || {})).unwrap();

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(workspace, before);
        assert!(!coordinator.is_busy());
    }

    #[test]
    fn opening_a_record_closes_open_editors() {
        let mut workspace = Workspace::new();
        stage_pickle(&mut workspace);
        workspace.commit_subproduct().unwrap();
        workspace.edit_subproduct(0).unwrap();

        workspace.edit_from(&persisted_record());

        assert_eq!(workspace.subproducts, NestedCollectionEditor::new());
        assert_eq!(workspace.fields.value().subproducts.len(), 1);
    }

    #[test]
    fn new_entries_on_a_saved_product_still_need_images() {
        let mut workspace = Workspace::new();
        workspace.edit_from(&persisted_record());
        workspace
            .recipes
            .update_field(ProductRecipeField::Name("Lassi".into()));
        workspace.recipes.append_item(RecipeList::Steps);
        workspace
            .recipes
            .update_item(RecipeList::Steps, 0, "Blend".into())
            .unwrap();
        stage_pickle(&mut workspace);
        workspace
            .subproducts
            .update_field(SubProductField::Image(FileRef::Empty));

        let recipe_errors = workspace.commit_recipe().unwrap_err();
        let subproduct_errors = workspace.commit_subproduct().unwrap_err();

        assert_eq!(
            recipe_errors.keys().collect::<Vec<_>>(),
            vec!["recipeMainImg", "recipeSubImg"]
        );
        assert_eq!(subproduct_errors.keys().collect::<Vec<_>>(), vec!["subproductImg"]);
        assert_eq!(workspace.fields.value().recipes.len(), 1);
        assert_eq!(workspace.fields.value().subproducts.len(), 1);
    }

    #[test]
    fn stored_images_satisfy_a_recommit() {
        let mut workspace = Workspace::new();
        workspace.edit_from(&persisted_record());
        workspace.edit_subproduct(0).unwrap();
        workspace.edit_recipe(0).unwrap();

        assert_eq!(workspace.commit_subproduct(), Ok(CommitOutcome::Replaced(0)));
        assert_eq!(workspace.commit_recipe(), Ok(CommitOutcome::Replaced(0)));
    }

    #[test]
    fn image_list_edits() {
        let mut workspace = Workspace::new();
        workspace
            .fields
            .set_field(ProductField::AddImages(vec!["a.png", "b.png"]));
        workspace.fields.set_field(ProductField::RemoveImage(0));
        workspace.fields.set_field(ProductField::RemoveImage(9));

        assert_eq!(workspace.fields.value().images, vec![FileRef::LocalFile("b.png")]);
    }
}
