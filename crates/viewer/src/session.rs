//! Per-consumer session over the report store.
//!
//! A session owns one [`LakeBoard`] and the staleness coordination for
//! it: the initial load checks how old the newest report is and fires
//! at most one background refresh for the whole session lifetime.
//! Manual refreshes are never deduplicated against it; the store's
//! reconciliation keeps concurrent runs convergent, so on the board
//! the last write simply wins.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use ice_common::{IceReport, IceResult, Lake, LakeStatus, UserReport};
use storage::{Catalog, EventBus, NewUserReport};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::board::LakeBoard;
use crate::live::{spawn_live_updates, LiveHandle};
use crate::staleness::{is_stale, RefreshOutcome, RefreshTrigger};

/// Ice report history entries fetched for a lake detail view.
const HISTORY_LIMIT: i64 = 20;

/// Capacity of the notice channel. Notices are transient; overflow
/// drops them rather than blocking a writer.
const NOTICE_BUFFER: usize = 8;

/// Transient message surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    RefreshFailed(String),
}

/// One-shot guard around the session's automatic refresh.
pub struct SessionRefresher {
    trigger: Arc<dyn RefreshTrigger>,
    attempted: AtomicBool,
}

impl SessionRefresher {
    pub fn new(trigger: Arc<dyn RefreshTrigger>) -> Self {
        Self {
            trigger,
            attempted: AtomicBool::new(false),
        }
    }

    /// Claim the session's single automatic refresh. Only the first
    /// caller gets `true`; the guard resets only with a new session.
    pub fn try_begin(&self) -> bool {
        !self.attempted.swap(true, Ordering::SeqCst)
    }
}

/// Everything the lake detail view needs in one read.
#[derive(Debug, Clone)]
pub struct LakeDetail {
    pub lake: Lake,
    pub current: Option<LakeStatus>,
    pub history: Vec<IceReport>,
    pub user_reports: Vec<UserReport>,
}

/// Consumer session: board, staleness coordination and report access.
pub struct IceSession {
    catalog: Arc<Catalog>,
    board: LakeBoard,
    refresher: SessionRefresher,
    notices: mpsc::Sender<Notice>,
}

impl IceSession {
    /// Create a session and the receiver its notices arrive on.
    pub fn new(
        catalog: Arc<Catalog>,
        trigger: Arc<dyn RefreshTrigger>,
    ) -> (Self, mpsc::Receiver<Notice>) {
        let (notices, notice_rx) = mpsc::channel(NOTICE_BUFFER);
        let session = Self {
            catalog,
            board: LakeBoard::new(),
            refresher: SessionRefresher::new(trigger),
            notices,
        };
        (session, notice_rx)
    }

    pub fn board(&self) -> &LakeBoard {
        &self.board
    }

    /// Initial load. Fills the board and, when the newest report is
    /// older than the staleness threshold, fires the session's single
    /// background refresh.
    pub async fn load(&self) -> IceResult<Vec<LakeStatus>> {
        let rows = self.catalog.current_status().await?;
        self.board.replace_all(rows.clone()).await;

        let latest = self.catalog.latest_report_time().await?;
        if is_stale(latest, Utc::now()) {
            self.spawn_auto_refresh();
        }
        Ok(rows)
    }

    /// Manual refresh: trigger a scrape and reload the board on
    /// success. Not limited by the session's one-shot guard.
    pub async fn refresh(&self) -> IceResult<RefreshOutcome> {
        let outcome = self.refresher.trigger.refresh().await?;
        if outcome.success {
            let rows = self.catalog.current_status().await?;
            self.board.replace_all(rows).await;
        }
        Ok(outcome)
    }

    /// Subscribe the board to live report events. The returned handle
    /// keeps the fan-out alive; dropping it unsubscribes.
    pub async fn start_live(&self, bus: Arc<dyn EventBus>) -> IceResult<LiveHandle> {
        spawn_live_updates(bus, self.catalog.clone(), self.board.clone()).await
    }

    /// Lake, current aggregate row, report history and user reports
    /// for a detail view. `None` when the slug is unknown.
    pub async fn lake_detail(&self, slug: &str) -> IceResult<Option<LakeDetail>> {
        let Some(lake) = self.catalog.lake_by_slug(slug).await? else {
            return Ok(None);
        };

        let current = self.catalog.current_status_for_lake(lake.id).await?;
        let history = self.catalog.reports_for_lake(lake.id, HISTORY_LIMIT).await?;
        let user_reports = self.catalog.user_reports_for_lake(lake.id, true).await?;

        Ok(Some(LakeDetail {
            lake,
            current,
            history,
            user_reports,
        }))
    }

    /// Store a user observation. The user-reports stream fans the
    /// change back into every live board.
    pub async fn submit_user_report(&self, report: &NewUserReport) -> IceResult<UserReport> {
        self.catalog.insert_user_report(report).await
    }

    /// Upvote a user report; the new count, or None for an unknown id.
    pub async fn upvote_user_report(&self, report_id: Uuid) -> IceResult<Option<i32>> {
        self.catalog.upvote_user_report(report_id).await
    }

    fn spawn_auto_refresh(&self) {
        if !self.refresher.try_begin() {
            debug!("Automatic refresh already attempted this session");
            return;
        }
        info!("Data is stale, triggering background refresh");

        let trigger = self.refresher.trigger.clone();
        let catalog = self.catalog.clone();
        let board = self.board.downgrade();
        let notices = self.notices.clone();

        tokio::spawn(async move {
            match trigger.refresh().await {
                Ok(outcome) if outcome.success => {
                    // The session may be gone by the time the scrape
                    // finishes; a dead board means nothing to update.
                    let Some(board) = board.upgrade() else { return };
                    match catalog.current_status().await {
                        Ok(rows) => {
                            info!(message = %outcome.message, "Background refresh merged");
                            board.replace_all(rows).await;
                        }
                        Err(e) => warn!(error = %e, "Refetch after refresh failed"),
                    }
                }
                Ok(outcome) => {
                    warn!(message = %outcome.message, "Refresh reported failure");
                    let _ = notices.try_send(Notice::RefreshFailed(outcome.message));
                }
                Err(e) => {
                    warn!(error = %e, "Refresh trigger failed");
                    let _ = notices.try_send(Notice::RefreshFailed(e.to_string()));
                }
            }
        });
    }
}
