//! Persisted records shown under each form.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::requests::{ApiClient, ApiRequest, EntityRoute, fetch_records};

/// A record as listed by the API.
pub trait ListRecord: DeserializeOwned {
    fn id(&self) -> &str;

    /// Display order applied after each load. The API order is kept by default.
    fn order(_records: &mut [Self]) {}
}

/// A workspace that can open a listed record for editing.
pub trait EditFrom<R> {
    fn edit_from(&mut self, record: &R);
}

#[derive(Debug, Clone)]
pub struct ListView<T> {
    route: EntityRoute,
    items: Vec<T>,
    loaded: bool,
}

impl<T: ListRecord> ListView<T> {
    pub fn new(route: EntityRoute) -> Self {
        Self {
            route,
            items: Vec::new(),
            loaded: false,
        }
    }

    pub fn route(&self) -> EntityRoute {
        self.route
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replaces the list wholesale with a fresh fetch result.
    pub fn replace(&mut self, mut items: Vec<T>) {
        T::order(&mut items);
        self.items = items;
        self.loaded = true;
    }

    /// Copies the listed record `id` into `workspace`. Returns `false` when the
    /// record is no longer listed.
    pub fn request_edit<W: EditFrom<T>>(&self, id: &str, workspace: &mut W) -> bool {
        match self.find(id) {
            Some(record) => {
                workspace.edit_from(record);
                true
            }
            None => false,
        }
    }

    /// Request that deletes `id`. Nothing is removed locally: once the backend
    /// agrees, fetch `route()` again and hand the result to `replace`.
    ///
    /// Components that cannot hold the list across an await send this and
    /// reload from their own message handlers.
    pub fn delete_request<F>(&self, id: &str) -> ApiRequest<F> {
        self.route.delete_request(id)
    }

    /// Fetches the collection and replaces the list with it.
    pub async fn load<C: ApiClient>(&mut self, client: &C) -> Result<(), ApiError> {
        let items = fetch_records(client, self.route).await?;
        self.replace(items);
        Ok(())
    }

    /// `delete_request` and the follow-up `load` in one call, for callers that
    /// own the list across the await. The user has already confirmed.
    pub async fn request_delete<C: ApiClient>(&mut self, client: &C, id: &str) -> Result<(), ApiError> {
        client.send(self.delete_request(id)).await?;
        self.load(client).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::Method;
    use crate::requests::fake::{FakeClient, TestFile};
    use futures::executor::block_on;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        #[serde(rename = "_id")]
        id: String,
        rank: u32,
    }

    impl ListRecord for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn order(records: &mut [Self]) {
            records.sort_by_key(|row| row.rank);
        }
    }

    #[derive(Default)]
    struct Editing(Option<String>);

    impl EditFrom<Row> for Editing {
        fn edit_from(&mut self, record: &Row) {
            self.0 = Some(record.id.clone());
        }
    }

    #[test]
    fn load_replaces_wholesale_and_orders() {
        let client = FakeClient::new();
        client.respond_ok(r#"[{"_id":"a","rank":1}]"#);
        client.respond_ok(r#"[{"_id":"c","rank":3},{"_id":"b","rank":2}]"#);
        let mut list = ListView::<Row>::new(EntityRoute::Certificates);

        block_on(list.load(&client)).unwrap();
        assert_eq!(list.items().len(), 1);

        block_on(list.load(&client)).unwrap();
        let ids: Vec<_> = list.items().iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
        assert!(list.is_loaded());
    }

    #[test]
    fn delete_then_reload() {
        let client = FakeClient::new();
        client.respond_ok("");
        client.respond_ok(r#"[{"_id":"b","rank":2}]"#);
        let mut list = ListView::<Row>::new(EntityRoute::Certificates);

        block_on(list.request_delete(&client, "a")).unwrap();

        let sent = client.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].path, "/api/certificates/a");
        assert_eq!(sent[1].method, Method::Get);
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn delete_request_targets_the_listed_collection() {
        let list = ListView::<Row>::new(EntityRoute::AboutImages);

        let request: ApiRequest<TestFile> = list.delete_request(" a1 ");

        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.path, "/vimalabout/a1");
        assert!(request.body.is_none());
        assert_eq!(list.route(), EntityRoute::AboutImages);
    }

    #[test]
    fn failed_delete_does_not_touch_the_list() {
        let client = FakeClient::new();
        client.respond_ok(r#"[{"_id":"a","rank":1}]"#);
        client.respond_status(500, "boom");
        let mut list = ListView::<Row>::new(EntityRoute::Certificates);
        block_on(list.load(&client)).unwrap();

        let result = block_on(list.request_delete(&client, "a"));

        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
        assert_eq!(list.items().len(), 1);
        assert_eq!(client.requests().len(), 2);
    }

    #[test]
    fn request_edit_loads_the_listed_record() {
        let client = FakeClient::new();
        client.respond_ok(r#"[{"_id":"a","rank":1}]"#);
        let mut list = ListView::<Row>::new(EntityRoute::Certificates);
        block_on(list.load(&client)).unwrap();

        let mut editing = Editing::default();
        assert!(list.request_edit("a", &mut editing));
        assert_eq!(editing.0.as_deref(), Some("a"));
        assert!(!list.request_edit("zz", &mut editing));
    }
}
