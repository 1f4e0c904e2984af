//! # Generic Actor Server
//!
//! `ResourceActor` owns the records of one resource type and processes requests
//! sequentially, so the store needs no locking.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Concurrency Model
/// The actor runs in its own Tokio task and handles one message at a time; hooks that
/// call other actors are awaited inside the loop, so a record never sees two requests
/// interleave.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor (server) and a client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use qkart::framework::ResourceActor;
/// use qkart::model::{Product, ProductDraft};
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Product>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client
///         .create(ProductDraft::new("Pen", "Stationery", 10.0, 4))
///         .await
///         .unwrap();
///     let product = client.get(id).await.unwrap().unwrap();
///     assert_eq!(product.name, "Pen");
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    /// Keys in creation order, for `List`.
    order: Vec<T::Id>,
    next_sequence: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client calls
    /// wait for room.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_sequence: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Account" rather than "qkart::model::...::Account"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::assign_id(self.next_sequence, &params);
                    if self.store.contains_key(&id) {
                        warn!(entity_type, %id, "Already exists");
                        let _ = respond_to.send(Err(FrameworkError::AlreadyExists(id.to_string())));
                        continue;
                    }

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.next_sequence += 1;
                            self.store.insert(id.clone(), item);
                            self.order.push(id.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Voucher {
        code: String,
        uses_left: u32,
    }

    #[derive(Debug)]
    struct VoucherCreate {
        code: String,
        uses: u32,
    }

    #[derive(Debug)]
    enum VoucherAction {
        Redeem,
    }

    #[derive(Debug, thiserror::Error)]
    enum VoucherError {
        #[error("Voucher {0} is used up")]
        UsedUp(String),
        #[error("Voucher code must not be empty")]
        EmptyCode,
    }

    #[async_trait]
    impl ActorEntity for Voucher {
        type Id = String;
        type Create = VoucherCreate;
        type Action = VoucherAction;
        type ActionResult = u32;
        type Context = ();
        type Error = VoucherError;

        fn assign_id(_sequence: u32, params: &VoucherCreate) -> String {
            params.code.clone()
        }

        fn from_create_params(id: String, params: VoucherCreate) -> Result<Self, VoucherError> {
            if id.is_empty() {
                return Err(VoucherError::EmptyCode);
            }
            Ok(Self {
                code: id,
                uses_left: params.uses,
            })
        }

        async fn handle_action(&mut self, action: VoucherAction, _ctx: &()) -> Result<u32, VoucherError> {
            match action {
                VoucherAction::Redeem if self.uses_left == 0 => Err(VoucherError::UsedUp(self.code.clone())),
                VoucherAction::Redeem => {
                    self.uses_left -= 1;
                    Ok(self.uses_left)
                }
            }
        }
    }

    fn voucher(code: &str, uses: u32) -> VoucherCreate {
        VoucherCreate {
            code: code.to_string(),
            uses,
        }
    }

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        let (actor, client) = ResourceActor::<Voucher>::new(10);
        tokio::spawn(actor.run(()));

        let id = client.create(voucher("WELCOME", 1)).await.unwrap();
        assert_eq!(id, "WELCOME");

        let left = client.perform_action(id.clone(), VoucherAction::Redeem).await.unwrap();
        assert_eq!(left, 0);

        let err = client.perform_action(id.clone(), VoucherAction::Redeem).await.unwrap_err();
        assert_eq!(err.to_string(), "Voucher WELCOME is used up");

        let stored = client.get(id).await.unwrap().unwrap();
        assert_eq!(stored.uses_left, 0);
    }

    #[tokio::test]
    async fn test_duplicate_key_is_rejected() {
        let (actor, client) = ResourceActor::<Voucher>::new(10);
        tokio::spawn(actor.run(()));

        client.create(voucher("SALE", 3)).await.unwrap();
        let err = client.create(voucher("SALE", 9)).await.unwrap_err();
        assert!(matches!(err, FrameworkError::AlreadyExists(code) if code == "SALE"));

        let stored = client.get("SALE".to_string()).await.unwrap().unwrap();
        assert_eq!(stored.uses_left, 3);
    }

    #[tokio::test]
    async fn test_list_returns_creation_order_and_skips_failed_creates() {
        let (actor, client) = ResourceActor::<Voucher>::new(10);
        tokio::spawn(actor.run(()));

        client.create(voucher("B", 1)).await.unwrap();
        assert!(client.create(voucher("", 1)).await.is_err());
        client.create(voucher("A", 1)).await.unwrap();

        let codes: Vec<String> = client.list().await.unwrap().into_iter().map(|v| v.code).collect();
        assert_eq!(codes, vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_action_on_missing_record() {
        let (actor, client) = ResourceActor::<Voucher>::new(10);
        tokio::spawn(actor.run(()));

        let err = client
            .perform_action("NOPE".to_string(), VoucherAction::Redeem)
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(_)));
    }
}
