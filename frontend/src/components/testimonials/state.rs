use common::forms::{FieldStore, ListView, SubmissionCoordinator};
use common::model::testimonial::{TestimonialForm, TestimonialRecord};
use common::requests::EntityRoute;
use web_sys::{File, HtmlTextAreaElement};
use yew::NodeRef;

pub struct TestimonialsPage {
    pub form: FieldStore<TestimonialForm<File>>,
    pub coordinator: SubmissionCoordinator,
    pub list: ListView<TestimonialRecord>,
    /// The review `<textarea>`, rewound when an over-long review is refused.
    pub review_ref: NodeRef,
}

impl TestimonialsPage {
    pub fn new() -> Self {
        Self {
            form: FieldStore::new(),
            coordinator: SubmissionCoordinator::new(),
            list: ListView::new(EntityRoute::Testimonials),
            review_ref: NodeRef::default(),
        }
    }

    /// Puts the kept review back into the textarea. The virtual DOM did not
    /// change, so a re-render alone would leave the refused text on screen.
    pub fn restore_review(&self) {
        if let Some(textarea) = self.review_ref.cast::<HtmlTextAreaElement>() {
            textarea.set_value(&self.form.value().description);
        }
    }
}
