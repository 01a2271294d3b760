//! Submission of a staged record.
//!
//! The coordinator moves `Idle -> Submitting -> Idle`. Entering `Submitting`
//! hands out a ticket; while that ticket is outstanding every other `begin`
//! is refused, so a second click cannot dispatch a second request. The
//! completion has to present the same ticket, which makes late answers from a
//! request the user already abandoned harmless.
//!
//! In the browser `begin` and `complete` are called from two separate
//! component updates with the network call in between; `submit` chains the
//! three steps for callers that can hold the coordinator across the await.

use super::field_store::Reset;
use crate::error::{ApiError, SubmitError};
use crate::requests::{ApiClient, ApiRequest, EntityRoute, RequestBody};

/// A record that can be turned into a create or update request.
pub trait Submittable {
    type File;

    fn route(&self) -> EntityRoute;

    /// Backend identifier, `None` until the record has been saved once.
    fn identifier(&self) -> Option<&str>;

    fn to_body(&self) -> Result<RequestBody<Self::File>, serde_json::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Created,
    Updated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting {
        ticket: SubmitTicket,
        kind: SaveKind,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved(SaveKind),
    /// The backend refused the record as a duplicate of an existing one.
    Duplicate(ApiError),
    Failed(ApiError),
}

#[derive(Debug, Default)]
pub struct SubmissionCoordinator {
    phase: Phase,
    issued: u64,
}

impl SubmissionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Drives the disabled state of the form inputs and the loading indicator.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    /// Enters `Submitting` and builds the single request for `record`.
    ///
    /// The caller has already validated the record. An encoding failure leaves
    /// the coordinator idle.
    pub fn begin<S: Submittable>(
        &mut self,
        record: &S,
    ) -> Result<(SubmitTicket, ApiRequest<S::File>), SubmitError> {
        if self.is_busy() {
            return Err(SubmitError::AlreadySubmitting);
        }

        let body = record.to_body()?;
        let route = record.route();
        let kind = save_kind(record.identifier());
        let request = match record.identifier() {
            Some(id) => route.update_request(id, body),
            None => route.create_request(body),
        };

        self.issued += 1;
        let ticket = SubmitTicket(self.issued);
        self.phase = Phase::Submitting { ticket, kind };
        Ok((ticket, request))
    }

    /// Applies the result of the request started with `ticket`.
    ///
    /// On success the workspace is reset and `refresh` runs; on failure the
    /// workspace is left as it is so the user can retry. Returns `None` and
    /// changes nothing when `ticket` is not the outstanding one.
    pub fn complete<W: Reset>(
        &mut self,
        ticket: SubmitTicket,
        result: Result<(), ApiError>,
        workspace: &mut W,
        refresh: impl FnOnce(),
    ) -> Option<SubmitOutcome> {
        let kind = match self.phase {
            Phase::Submitting {
                ticket: outstanding,
                kind,
            } if outstanding == ticket => kind,
            _ => return None,
        };
        Some(self.settle(kind, result, workspace, refresh))
    }

    /// `begin`, the request and `complete` in one call, for callers that own
    /// the workspace across the await. Components dispatch the request
    /// themselves and come back through `complete`.
    pub async fn submit<C, W>(
        &mut self,
        client: &C,
        workspace: &mut W,
        refresh: impl FnOnce(),
    ) -> Result<SubmitOutcome, SubmitError>
    where
        C: ApiClient,
        W: Submittable<File = C::File> + Reset,
    {
        let kind = save_kind(workspace.identifier());
        let (_ticket, request) = self.begin(workspace)?;
        let result = client.send(request).await.map(|_| ());
        Ok(self.settle(kind, result, workspace, refresh))
    }

    fn settle<W: Reset>(
        &mut self,
        kind: SaveKind,
        result: Result<(), ApiError>,
        workspace: &mut W,
        refresh: impl FnOnce(),
    ) -> SubmitOutcome {
        self.phase = Phase::Idle;
        match result {
            Ok(()) => {
                workspace.reset();
                refresh();
                SubmitOutcome::Saved(kind)
            }
            Err(err) if err.is_duplicate() => SubmitOutcome::Duplicate(err),
            Err(err) => SubmitOutcome::Failed(err),
        }
    }
}

fn save_kind(identifier: Option<&str>) -> SaveKind {
    match identifier {
        Some(_) => SaveKind::Updated,
        None => SaveKind::Created,
    }
}
