//! Shared in-memory collection of lake status rows.

use std::sync::{Arc, Weak};

use ice_common::LakeStatus;
use tokio::sync::RwLock;

/// Clonable handle to the shared row set.
///
/// Writers replace whole rows, never individual fields, so a reader
/// always sees a row entirely before or entirely after an update.
#[derive(Clone, Default)]
pub struct LakeBoard {
    rows: Arc<RwLock<Vec<LakeStatus>>>,
}

impl LakeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone the current rows out for a reader.
    pub async fn snapshot(&self) -> Vec<LakeStatus> {
        self.rows.read().await.clone()
    }

    /// Swap in a complete new row set.
    pub async fn replace_all(&self, rows: Vec<LakeStatus>) {
        *self.rows.write().await = rows;
    }

    /// Replace the row with the same lake id. Rows for lakes the board
    /// does not hold are ignored; the initial load defines the set.
    pub async fn replace(&self, row: LakeStatus) {
        let mut rows = self.rows.write().await;
        if let Some(slot) = rows.iter_mut().find(|r| r.lake_id == row.lake_id) {
            *slot = row;
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Weak handle for background writers that must not keep a
    /// torn-down session alive.
    pub fn downgrade(&self) -> WeakBoard {
        WeakBoard {
            rows: Arc::downgrade(&self.rows),
        }
    }
}

/// Weak counterpart of [`LakeBoard`].
pub struct WeakBoard {
    rows: Weak<RwLock<Vec<LakeStatus>>>,
}

impl WeakBoard {
    pub fn upgrade(&self) -> Option<LakeBoard> {
        self.rows.upgrade().map(|rows| LakeBoard { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ice_common::IceStatus;
    use uuid::Uuid;

    fn row(lake_id: Uuid, name: &str, status: IceStatus) -> LakeStatus {
        LakeStatus {
            lake_id,
            name: name.to_string(),
            slug: name.to_lowercase(),
            region: None,
            geometry: None,
            centroid: None,
            area_km2: None,
            status,
            source: None,
            ice_thickness_cm: None,
            surface_condition: None,
            last_updated: None,
            recent_report_count: 0,
        }
    }

    #[tokio::test]
    async fn replace_swaps_the_whole_row_by_id() {
        let board = LakeBoard::new();
        let id = Uuid::new_v4();
        board
            .replace_all(vec![row(id, "Trekanten", IceStatus::Uncertain)])
            .await;

        let mut updated = row(id, "Trekanten", IceStatus::Safe);
        updated.ice_thickness_cm = Some(15);
        board.replace(updated).await;

        let rows = board.snapshot().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, IceStatus::Safe);
        assert_eq!(rows[0].ice_thickness_cm, Some(15));
    }

    #[tokio::test]
    async fn replace_ignores_unknown_lakes() {
        let board = LakeBoard::new();
        board
            .replace_all(vec![row(Uuid::new_v4(), "Flaten", IceStatus::Uncertain)])
            .await;

        board.replace(row(Uuid::new_v4(), "Okand", IceStatus::Safe)).await;

        let rows = board.snapshot().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Flaten");
    }

    #[tokio::test]
    async fn snapshot_is_detached_from_the_board() {
        let board = LakeBoard::new();
        let id = Uuid::new_v4();
        board.replace_all(vec![row(id, "Judarn", IceStatus::Warning)]).await;

        let before = board.snapshot().await;
        board.replace(row(id, "Judarn", IceStatus::NoIce)).await;

        assert_eq!(before[0].status, IceStatus::Warning);
        assert_eq!(board.snapshot().await[0].status, IceStatus::NoIce);
    }

    #[tokio::test]
    async fn weak_handle_expires_with_the_board() {
        let board = LakeBoard::new();
        let weak = board.downgrade();
        assert!(weak.upgrade().is_some());

        drop(board);
        assert!(weak.upgrade().is_none());
    }
}
