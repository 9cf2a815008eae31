//! Live board updates from the report event bus.
//!
//! A spawned task subscribes to both report streams and, for every
//! event, refetches the affected lake's current aggregate row and
//! swaps it into the board. Events carry only the lake id, so a burst
//! of writes costs one refetch per event and the board always shows
//! the store's own aggregation.

use std::sync::Arc;

use ice_common::IceResult;
use storage::{Catalog, EventBus, ReportStream};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::board::LakeBoard;

/// Handle for a running live-update task. Dropping it stops the task
/// and closes its subscriptions.
pub struct LiveHandle {
    task: JoinHandle<()>,
}

impl Drop for LiveHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Subscribe the board to both report streams and keep it current
/// until the returned handle is dropped.
pub async fn spawn_live_updates(
    bus: Arc<dyn EventBus>,
    catalog: Arc<Catalog>,
    board: LakeBoard,
) -> IceResult<LiveHandle> {
    let mut ice_events = bus.subscribe(ReportStream::Ice).await?;
    let mut user_events = bus.subscribe(ReportStream::User).await?;

    let task = tokio::spawn(async move {
        loop {
            tokio::select! {
                event = ice_events.next() => match event {
                    Some(event) => refresh_row(&catalog, &board, event.lake_id).await,
                    None => break,
                },
                event = user_events.next() => match event {
                    Some(event) => refresh_row(&catalog, &board, event.lake_id).await,
                    None => break,
                },
            }
        }
        debug!("Live update stream closed");
    });

    Ok(LiveHandle { task })
}

/// Refetch one lake's aggregate row and merge it into the board.
async fn refresh_row(catalog: &Catalog, board: &LakeBoard, lake_id: Uuid) {
    match catalog.current_status_for_lake(lake_id).await {
        Ok(Some(row)) => {
            debug!(lake = %row.name, status = %row.status, "Merging live update");
            board.replace(row).await;
        }
        Ok(None) => debug!(%lake_id, "Live update for unknown lake"),
        Err(e) => warn!(%lake_id, error = %e, "Refetch for live update failed"),
    }
}
