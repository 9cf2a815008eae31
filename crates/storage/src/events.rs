//! Report change events.
//!
//! Writes to the catalog publish a `ReportEvent` naming the affected
//! lake; consumers subscribe per stream and refetch the lake's current
//! aggregate row. The bus interface is decoupled from the storage
//! substrate: deployments use Redis pub/sub, tests and single-process
//! setups use the in-memory implementation.

use async_trait::async_trait;
use futures::StreamExt;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc};
use tracing::warn;
use uuid::Uuid;

use ice_common::{IceError, IceResult};

/// Which report table changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStream {
    Ice,
    User,
}

impl ReportStream {
    /// Pub/sub channel name for this stream.
    pub fn channel(&self) -> &'static str {
        match self {
            ReportStream::Ice => "ice-updates",
            ReportStream::User => "user-reports",
        }
    }
}

/// A change notification for one lake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEvent {
    pub stream: ReportStream,
    pub lake_id: Uuid,
}

/// An open subscription. Dropping it ends the subscription and releases
/// the underlying connection.
pub struct EventStream {
    rx: mpsc::Receiver<ReportEvent>,
}

impl EventStream {
    /// Wait for the next event; None once the subscription has closed.
    pub async fn next(&mut self) -> Option<ReportEvent> {
        self.rx.recv().await
    }
}

/// Transport for report change events.
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Publish a change event to everyone subscribed to its stream.
    async fn publish(&self, event: ReportEvent) -> IceResult<()>;

    /// Subscribe to one stream.
    async fn subscribe(&self, stream: ReportStream) -> IceResult<EventStream>;
}

/// Redis pub/sub event bus.
pub struct RedisEventBus {
    client: Client,
    conn: MultiplexedConnection,
}

impl RedisEventBus {
    /// Connect to Redis.
    pub async fn connect(redis_url: &str) -> IceResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| IceError::EventBusError(format!("Redis connection failed: {}", e)))?;

        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| IceError::EventBusError(format!("Redis connection failed: {}", e)))?;

        Ok(Self { client, conn })
    }
}

#[async_trait]
impl EventBus for RedisEventBus {
    async fn publish(&self, event: ReportEvent) -> IceResult<()> {
        let mut conn = self.conn.clone();
        // The payload is just the lake id; the channel identifies the stream.
        let _: i64 = conn
            .publish(event.stream.channel(), event.lake_id.to_string())
            .await
            .map_err(|e| IceError::EventBusError(format!("Publish failed: {}", e)))?;

        Ok(())
    }

    async fn subscribe(&self, stream: ReportStream) -> IceResult<EventStream> {
        let mut pubsub = self
            .client
            .get_async_pubsub()
            .await
            .map_err(|e| IceError::EventBusError(format!("Subscribe failed: {}", e)))?;

        pubsub
            .subscribe(stream.channel())
            .await
            .map_err(|e| IceError::EventBusError(format!("Subscribe failed: {}", e)))?;

        let (tx, rx) = mpsc::channel(16);

        // The forward task owns the pub/sub connection; when the receiver
        // drops, the send fails and the connection is released.
        tokio::spawn(async move {
            let mut messages = pubsub.on_message();
            while let Some(msg) = messages.next().await {
                let payload: String = match msg.get_payload() {
                    Ok(p) => p,
                    Err(e) => {
                        warn!(error = %e, "Ignoring undecodable report event");
                        continue;
                    }
                };
                let lake_id = match payload.parse::<Uuid>() {
                    Ok(id) => id,
                    Err(_) => {
                        warn!(payload = %payload, "Ignoring malformed report event");
                        continue;
                    }
                };
                if tx.send(ReportEvent { stream, lake_id }).await.is_err() {
                    break;
                }
            }
        });

        Ok(EventStream { rx })
    }
}

/// In-process event bus over broadcast channels.
pub struct MemoryEventBus {
    ice: broadcast::Sender<ReportEvent>,
    user: broadcast::Sender<ReportEvent>,
}

impl MemoryEventBus {
    pub fn new() -> Self {
        let (ice, _) = broadcast::channel(64);
        let (user, _) = broadcast::channel(64);
        Self { ice, user }
    }

    fn sender(&self, stream: ReportStream) -> &broadcast::Sender<ReportEvent> {
        match stream {
            ReportStream::Ice => &self.ice,
            ReportStream::User => &self.user,
        }
    }
}

impl Default for MemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBus for MemoryEventBus {
    async fn publish(&self, event: ReportEvent) -> IceResult<()> {
        // No subscribers is fine; the event just has no audience.
        let _ = self.sender(event.stream).send(event);
        Ok(())
    }

    async fn subscribe(&self, stream: ReportStream) -> IceResult<EventStream> {
        let mut source = self.sender(stream).subscribe();
        let (tx, rx) = mpsc::channel(16);

        tokio::spawn(async move {
            loop {
                match source.recv().await {
                    Ok(event) => {
                        if tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Report event subscriber lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        Ok(EventStream { rx })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_bus_delivers_to_stream_subscribers() {
        let bus = MemoryEventBus::new();
        let mut ice = bus.subscribe(ReportStream::Ice).await.unwrap();

        let lake_id = Uuid::new_v4();
        bus.publish(ReportEvent {
            stream: ReportStream::Ice,
            lake_id,
        })
        .await
        .unwrap();

        let event = ice.next().await.unwrap();
        assert_eq!(event.lake_id, lake_id);
        assert_eq!(event.stream, ReportStream::Ice);
    }

    #[tokio::test]
    async fn streams_are_isolated() {
        let bus = MemoryEventBus::new();
        let mut ice = bus.subscribe(ReportStream::Ice).await.unwrap();
        let mut user = bus.subscribe(ReportStream::User).await.unwrap();

        let lake_id = Uuid::new_v4();
        bus.publish(ReportEvent {
            stream: ReportStream::User,
            lake_id,
        })
        .await
        .unwrap();

        let event = user.next().await.unwrap();
        assert_eq!(event.stream, ReportStream::User);

        // The ice stream saw nothing; closing the bus ends it cleanly.
        drop(bus);
        assert!(ice.next().await.is_none());
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_ok() {
        let bus = MemoryEventBus::new();
        bus.publish(ReportEvent {
            stream: ReportStream::Ice,
            lake_id: Uuid::new_v4(),
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn dropping_stream_ends_subscription() {
        let bus = MemoryEventBus::new();
        let stream = bus.subscribe(ReportStream::Ice).await.unwrap();
        drop(stream);

        // Publishing afterwards must not error or block.
        bus.publish(ReportEvent {
            stream: ReportStream::Ice,
            lake_id: Uuid::new_v4(),
        })
        .await
        .unwrap();
    }
}
