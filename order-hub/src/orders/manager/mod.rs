//! StoreManager - single writer of the application state
//!
//! This module handles:
//! - Command validation and processing
//! - Applying actions through the reducer with a running sequence number
//! - Idempotency by command id (the most recent ids, bounded)
//! - Snapshot broadcasting to subscribers
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Take the write lock
//!     ├─ 2. Idempotency check (command_id)
//!     ├─ 3. Create CommandContext over the current state
//!     ├─ 4. Convert command to action and execute (validation)
//!     ├─ 5. Apply actions to a copy of the state via the reducer
//!     ├─ 6. Swap in the new state, mark command processed
//!     ├─ 7. Broadcast StateUpdate
//!     └─ 8. Return response
//! ```
//!
//! Readers never block a transition for long: `snapshot()` clones an
//! `Arc<AppState>` under a read lock.

mod error;
mod processed;
pub use error::*;
pub use processed::DEFAULT_PROCESSED_HISTORY;

use super::actions::CommandAction;
use super::reducer::apply_action;
use super::traits::{CommandContext, CommandHandler, CommandMetadata};
use crate::core::Config;
use crate::core::config::{DEFAULT_EVENT_CHANNEL_CAPACITY, DEFAULT_MAX_PREORDERS};
use chrono::Utc;
use parking_lot::RwLock;
use shared::models::{Chef, Order};
use shared::store::{AppState, CommandResponse, StoreAction, StoreActionType, StoreCommand};
use processed::ProcessedCommands;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Broadcast after every applied batch of actions
#[derive(Debug, Clone)]
pub struct StateUpdate {
    /// `AppState::last_sequence` after the batch
    pub sequence: u64,
    /// Originating command, `None` for raw dispatches
    pub command_id: Option<String>,
    pub actions: Vec<StoreActionType>,
    pub state: Arc<AppState>,
}

struct StoreInner {
    state: Arc<AppState>,
    processed_commands: ProcessedCommands,
}

/// StoreManager for command processing
///
/// The `epoch` field is a unique identifier generated on each startup.
/// Subscribers use it to tell a restarted store from a continued one.
pub struct StoreManager {
    inner: RwLock<StoreInner>,
    event_tx: broadcast::Sender<StateUpdate>,
    epoch: String,
    default_max_preorders: u32,
}

impl std::fmt::Debug for StoreManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreManager")
            .field("event_tx", &"<broadcast::Sender>")
            .field("epoch", &self.epoch)
            .field("sequence", &self.current_sequence())
            .finish()
    }
}

impl StoreManager {
    /// Create a manager over the given chefs with default settings
    pub fn new(chefs: Vec<Chef>) -> Self {
        Self::with_settings(chefs, DEFAULT_EVENT_CHANNEL_CAPACITY, DEFAULT_MAX_PREORDERS)
    }

    pub fn with_settings(
        chefs: Vec<Chef>,
        event_channel_capacity: usize,
        default_max_preorders: u32,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(event_channel_capacity.max(1));
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(epoch = %epoch, chefs = chefs.len(), "StoreManager started with new epoch");
        Self {
            inner: RwLock::new(StoreInner {
                state: Arc::new(AppState::with_chefs(chefs)),
                processed_commands: ProcessedCommands::new(DEFAULT_PROCESSED_HISTORY),
            }),
            event_tx,
            epoch,
            default_max_preorders,
        }
    }

    /// Remember at most `capacity` command ids for duplicate detection
    pub fn with_processed_history(mut self, capacity: usize) -> Self {
        self.inner.get_mut().processed_commands = ProcessedCommands::new(capacity);
        self
    }

    /// Load the seed named by the configuration and build a manager over it
    pub fn from_config(config: &Config) -> ManagerResult<Self> {
        let chefs = crate::seed::load_seed(config)?;
        Ok(Self::with_settings(
            chefs,
            config.event_channel_capacity,
            config.default_max_preorders,
        ))
    }

    /// Get the store epoch (unique instance ID)
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    /// Subscribe to state updates
    pub fn subscribe(&self) -> broadcast::Receiver<StateUpdate> {
        self.event_tx.subscribe()
    }

    /// Current immutable state
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.inner.read().state)
    }

    pub fn current_sequence(&self) -> u64 {
        self.inner.read().state.last_sequence
    }

    pub fn find_order(&self, order_id: &str) -> Option<Order> {
        self.inner.read().state.find_order(order_id).cloned()
    }

    pub fn chef(&self, chef_id: &str) -> Option<Chef> {
        self.inner.read().state.find_chef(chef_id).cloned()
    }

    pub fn is_command_processed(&self, command_id: &str) -> bool {
        self.inner.read().processed_commands.contains(command_id)
    }

    /// Execute a command and return the response
    ///
    /// Business-rule failures come back as an error response; the state is
    /// left untouched and the command id stays available for a retry.
    pub fn execute_command(&self, cmd: StoreCommand) -> CommandResponse {
        match self.process_command(&cmd) {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    command_id = %cmd.command_id,
                    error = %err,
                    "Command rejected"
                );
                CommandResponse::error(cmd.command_id, err.into())
            }
        }
    }

    fn process_command(&self, cmd: &StoreCommand) -> ManagerResult<CommandResponse> {
        tracing::debug!(command_id = %cmd.command_id, payload = ?cmd.payload, "Processing command");

        let mut inner = self.inner.write();

        // 1. Idempotency check
        if inner.processed_commands.contains(&cmd.command_id) {
            tracing::warn!(command_id = %cmd.command_id, "Duplicate command");
            return Ok(CommandResponse::duplicate(cmd.command_id.clone()));
        }

        // 2. Validate and produce actions
        let metadata = CommandMetadata {
            command_id: cmd.command_id.clone(),
            timestamp: cmd.timestamp,
        };
        let actions = {
            let ctx = CommandContext::new(&inner.state, Utc::now())
                .with_default_max_preorders(self.default_max_preorders);
            CommandAction::from(&cmd.payload).execute(&ctx, &metadata)?
        };

        let order_id = actions.iter().find_map(|action| match action {
            StoreAction::PlaceOrder { order } => Some(order.id.clone()),
            _ => None,
        });

        // 3. Apply, record, broadcast
        let update = Self::commit(&mut inner, Some(cmd.command_id.clone()), &actions);
        inner.processed_commands.insert(cmd.command_id.clone());
        let sequence = inner.state.last_sequence;
        if let Some(update) = update {
            self.broadcast(update);
        }

        tracing::debug!(
            command_id = %cmd.command_id,
            sequence,
            actions = actions.len(),
            "Command applied"
        );
        Ok(CommandResponse::success(cmd.command_id.clone(), sequence, order_id))
    }

    /// Apply a raw action without validation
    ///
    /// This is the lenient path: the reducer accepts any transition, so a
    /// `ready` order can be moved back to `placed` and a sold-out meal can
    /// still be pre-ordered. Unknown actions change nothing and are not
    /// broadcast.
    pub fn dispatch(&self, action: StoreAction) -> Arc<AppState> {
        let mut inner = self.inner.write();
        match Self::commit(&mut inner, None, std::slice::from_ref(&action)) {
            Some(update) => {
                tracing::debug!(
                    action = %action.action_type(),
                    sequence = update.sequence,
                    "Action dispatched"
                );
                self.broadcast(update);
            }
            None => tracing::debug!(action = %action.action_type(), "Ignored action"),
        }
        Arc::clone(&inner.state)
    }

    /// Apply `actions` to a copy of the current state and swap it in
    ///
    /// Returns `None` when nothing was applied.
    fn commit(
        inner: &mut StoreInner,
        command_id: Option<String>,
        actions: &[StoreAction],
    ) -> Option<StateUpdate> {
        let mut next = AppState::clone(&inner.state);
        let mut applied = Vec::with_capacity(actions.len());

        for action in actions {
            if matches!(action, StoreAction::Unknown) {
                continue;
            }
            apply_action(&mut next, action);
            next.last_sequence += 1;
            applied.push(action.action_type());
        }

        if applied.is_empty() {
            return None;
        }

        let state = Arc::new(next);
        inner.state = Arc::clone(&state);
        Some(StateUpdate {
            sequence: state.last_sequence,
            command_id,
            actions: applied,
            state,
        })
    }

    /// Sent while the write lock is held so subscribers see sequence order
    fn broadcast(&self, update: StateUpdate) {
        if self.event_tx.send(update).is_err() {
            tracing::warn!("State broadcast failed: no active receivers");
        }
    }
}

#[cfg(test)]
mod tests;
