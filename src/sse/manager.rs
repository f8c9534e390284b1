// ABOUTME: Central SSE manager that owns the subscriber registry and the broadcast fan-out
// ABOUTME: Tracks open channels, delivers messages to all of them, and prunes dead channels
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::{collections::HashMap, sync::Arc};
use tokio::sync::{
    mpsc::{self, error::TrySendError},
    RwLock,
};
use uuid::Uuid;

/// Identity of one subscriber channel, assigned at subscribe time
pub type ChannelId = Uuid;

/// Registry entry for one open subscriber channel
#[derive(Debug, Clone)]
struct ChannelHandle {
    sender: mpsc::Sender<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

/// Subscriber registry and broadcaster in one shared handle
///
/// The registry maps channel ids to the sending half of each subscriber's
/// bounded channel. Membership means "currently eligible to receive
/// broadcasts": a channel is added by [`subscribe`](Self::subscribe) and
/// removed by explicit [`remove`](Self::remove) (stream completion or idle
/// timeout) or as a side effect of a failed send during
/// [`broadcast`](Self::broadcast).
///
/// All operations are safe under arbitrary concurrent callers. No operation
/// blocks waiting on another beyond lock acquisition, and no lock is held
/// across a send.
#[derive(Clone)]
pub struct SseManager {
    channels: Arc<RwLock<HashMap<ChannelId, ChannelHandle>>>,
    buffer_size: usize,
}

impl SseManager {
    /// Creates a manager whose subscriber channels buffer up to `buffer_size`
    /// undelivered messages each
    ///
    /// A `buffer_size` of 0 is treated as 1: a zero-capacity bounded channel
    /// is not constructible, and subscribe must never fail.
    #[must_use]
    pub fn new(buffer_size: usize) -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            buffer_size: buffer_size.max(1),
        }
    }

    /// Register a new subscriber channel
    ///
    /// Creates a bounded channel, stores the sending half in the registry
    /// under a fresh id, and returns the id together with the receiving half
    /// for the transport layer to drain. Always succeeds.
    pub async fn subscribe(&self) -> (ChannelId, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(self.buffer_size);
        let channel_id = Uuid::new_v4();

        {
            let mut channels = self.channels.write().await;
            channels.insert(
                channel_id,
                ChannelHandle {
                    sender: tx,
                    created_at: chrono::Utc::now(),
                },
            );
        }

        tracing::info!(channel_id = %channel_id, "SSE channel registered");
        (channel_id, rx)
    }

    /// Remove a channel from the registry
    ///
    /// Idempotent: removing an id that is not present is a no-op. Dropping
    /// the stored sender closes the subscriber's receiving half, so a stream
    /// still draining the channel observes end-of-stream.
    pub async fn remove(&self, channel_id: ChannelId) {
        let removed = {
            let mut channels = self.channels.write().await;
            channels.remove(&channel_id)
        };

        if let Some(handle) = removed {
            let held_for = chrono::Utc::now() - handle.created_at;
            tracing::info!(
                channel_id = %channel_id,
                held_secs = held_for.num_seconds(),
                "SSE channel unregistered"
            );
        }
    }

    /// Broadcast a message to every channel currently in the registry
    ///
    /// Takes a snapshot of the registry at call time, attempts a non-blocking
    /// send of `message` to each snapshotted channel, and batch-removes every
    /// channel whose send failed. A send fails when the subscriber's receiver
    /// was dropped (transport closed) or its buffer is full (stalled
    /// consumer); either way the channel is dead to us and is pruned.
    ///
    /// Best effort only: never returns an error, even when the registry is
    /// empty or every delivery fails. Returns the number of successful
    /// deliveries.
    pub async fn broadcast(&self, message: &str) -> usize {
        let snapshot: Vec<(ChannelId, mpsc::Sender<String>)> = {
            let channels = self.channels.read().await;
            channels
                .iter()
                .map(|(id, handle)| (*id, handle.sender.clone()))
                .collect()
        };

        let mut delivered = 0_usize;
        let mut dead = Vec::new();

        for (channel_id, sender) in snapshot {
            match sender.try_send(message.to_owned()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Closed(_)) => {
                    tracing::debug!(channel_id = %channel_id, "SSE channel closed, pruning");
                    dead.push(channel_id);
                }
                Err(TrySendError::Full(_)) => {
                    tracing::warn!(channel_id = %channel_id, "SSE channel stalled, pruning");
                    dead.push(channel_id);
                }
            }
        }

        if !dead.is_empty() {
            // Removal by membership, never by index: the registry may have
            // changed since the snapshot was taken.
            let mut channels = self.channels.write().await;
            for channel_id in &dead {
                channels.remove(channel_id);
            }
        }

        tracing::debug!(
            delivered,
            pruned = dead.len(),
            "broadcast delivery attempt complete"
        );
        delivered
    }

    /// Get count of active channels (for monitoring)
    pub async fn active_channels(&self) -> usize {
        let channels = self.channels.read().await;
        channels.len()
    }
}
