use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with lifecycle hooks)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Ord + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> {
        Ok(())
    }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
    fn on_delete(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Failures surfaced by [`ResourceClient`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the request")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns a collection of entities and serves CRUD requests one at a time.
///
/// Items are kept ordered by id, so `List` returns them in id order.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn FnMut() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl FnMut() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs until every client has been dropped.
    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    debug!(id = %id, "Processing get request");
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(count = self.store.len(), "Processing list request");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
            }
        }

        info!("ResourceActor stopped");
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create(id.clone(), payload).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(|e| {
            warn!(id = %id, reason = %e, "Create rejected");
            FrameworkError::Rejected(e)
        })?;
        self.store.insert(id.clone(), item.clone());
        info!(id = %id, "Item created");
        Ok(item)
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let Some(current) = self.store.get(&id) else {
            debug!(id = %id, "Update target not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        // Hooks work on a copy so a rejected patch leaves the stored item intact.
        let mut updated = current.clone();
        updated.on_update(patch).map_err(|e| {
            warn!(id = %id, reason = %e, "Update rejected");
            FrameworkError::Rejected(e)
        })?;
        self.store.insert(id.clone(), updated.clone());
        info!(id = %id, "Item updated");
        Ok(updated)
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), FrameworkError> {
        let Some(item) = self.store.get(&id) else {
            debug!(id = %id, "Delete target not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        item.on_delete().map_err(FrameworkError::Rejected)?;
        self.store.remove(&id);
        info!(id = %id, "Item deleted");
        Ok(())
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        id: u32,
        label: String,
        locked: bool,
    }

    #[derive(Debug)]
    struct ShelfCreate {
        label: String,
        locked: bool,
    }

    #[derive(Debug)]
    struct ShelfPatch {
        label: String,
    }

    impl Entity for Shelf {
        type Id = u32;
        type CreatePayload = ShelfCreate;
        type Patch = ShelfPatch;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create(id: u32, payload: ShelfCreate) -> Result<Self, String> {
            Ok(Self {
                id,
                label: payload.label,
                locked: payload.locked,
            })
        }

        fn on_create(&mut self) -> Result<(), String> {
            if self.label.is_empty() {
                return Err("label required".to_string());
            }
            Ok(())
        }

        fn on_update(&mut self, patch: ShelfPatch) -> Result<(), String> {
            if patch.label.is_empty() {
                return Err("label required".to_string());
            }
            self.label = patch.label;
            Ok(())
        }

        fn on_delete(&self) -> Result<(), String> {
            if self.locked {
                return Err("shelf is locked".to_string());
            }
            Ok(())
        }
    }

    fn start() -> ResourceClient<Shelf> {
        let mut next = 0;
        let (actor, client) = ResourceActor::new(8, move || {
            next += 1;
            next
        });
        tokio::spawn(actor.run());
        client
    }

    fn shelf(label: &str) -> ShelfCreate {
        ShelfCreate {
            label: label.to_string(),
            locked: false,
        }
    }

    #[tokio::test]
    async fn test_crud_round() {
        let client = start();

        let a = client.create(shelf("A")).await.unwrap();
        let b = client.create(shelf("B")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(client.get(2).await.unwrap().unwrap().label, "B");

        let updated = client.update(1, ShelfPatch { label: "A2".into() }).await.unwrap();
        assert_eq!(updated.label, "A2");

        client.delete(2).await.unwrap();
        let remaining = client.list().await.unwrap();
        assert_eq!(remaining, vec![updated]);
        assert_eq!(client.get(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let client = start();
        assert_eq!(
            client.delete(9).await,
            Err(FrameworkError::NotFound("9".to_string()))
        );
        assert_eq!(
            client.update(9, ShelfPatch { label: "x".into() }).await,
            Err(FrameworkError::NotFound("9".to_string()))
        );
    }

    #[tokio::test]
    async fn test_hooks_reject_without_side_effects() {
        let client = start();

        let err = client.create(shelf("")).await.unwrap_err();
        assert_eq!(err, FrameworkError::Rejected("label required".to_string()));
        assert!(client.list().await.unwrap().is_empty());

        let kept = client.create(shelf("Kept")).await.unwrap();
        assert!(client.update(kept.id, ShelfPatch { label: String::new() }).await.is_err());
        assert_eq!(client.get(kept.id).await.unwrap().unwrap().label, "Kept");

        let locked = client
            .create(ShelfCreate {
                label: "Locked".into(),
                locked: true,
            })
            .await
            .unwrap();
        assert!(matches!(client.delete(locked.id).await, Err(FrameworkError::Rejected(_))));
        assert_eq!(client.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_closed_actor() {
        let (actor, client) = ResourceActor::<Shelf>::new(1, || 1);
        drop(actor);
        assert_eq!(client.list().await, Err(FrameworkError::ActorClosed));
    }
}
