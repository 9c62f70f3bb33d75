use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{NewSwapRequest, SwapRequest, SwapRequestId, SwapStatus};

struct LedgerInner {
    next_id: SwapRequestId,
    requests: Vec<SwapRequest>,
}

/// Append-only, in-memory record of swap requests.
///
/// Ids come from a counter advanced under the write lock, so concurrent
/// creators never see the same id.
pub struct SwapRequestLedger {
    inner: RwLock<LedgerInner>,
}

impl SwapRequestLedger {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LedgerInner {
                next_id: 1,
                requests: Vec::new(),
            }),
        }
    }

    pub async fn create(&self, new: NewSwapRequest) -> SwapRequest {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let request = SwapRequest {
            id,
            from_user: new.from_user,
            to_user: new.to_user,
            skill_id: new.skill_id,
            status: SwapStatus::Pending,
            created_at: Utc::now(),
        };
        inner.requests.push(request.clone());

        tracing::info!(
            "Swap request {} created ({} -> {}, skill {})",
            request.id,
            request.from_user,
            request.to_user,
            request.skill_id
        );
        request
    }

    /// Every request, in creation order.
    pub async fn list(&self) -> Vec<SwapRequest> {
        self.inner.read().await.requests.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.requests.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for SwapRequestLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn new_request(from: &str, to: &str, skill_id: i64) -> NewSwapRequest {
        NewSwapRequest {
            from_user: from.to_string(),
            to_user: to.to_string(),
            skill_id,
        }
    }

    #[tokio::test]
    async fn created_request_is_pending_and_listed() {
        let ledger = SwapRequestLedger::new();
        assert!(ledger.is_empty().await);

        let created = ledger.create(new_request("alice", "bob", 2)).await;
        let all = ledger.list().await;

        assert_eq!(all.len(), 1);
        assert_eq!(all[0], created);
        assert_eq!(all[0].status, SwapStatus::Pending);
        assert_eq!(all[0].skill_id, 2);
        assert_eq!(all[0].id, 1);
    }

    #[tokio::test]
    async fn sequential_creates_keep_order_and_unique_ids() {
        let ledger = SwapRequestLedger::new();
        for i in 0..10 {
            ledger.create(new_request("a", "b", i)).await;
        }

        let all = ledger.list().await;
        let skill_ids: Vec<_> = all.iter().map(|r| r.skill_id).collect();
        assert_eq!(skill_ids, (0..10).collect::<Vec<_>>());

        let ids: HashSet<_> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_never_share_an_id() {
        let ledger = Arc::new(SwapRequestLedger::new());
        let mut handles = Vec::new();
        for i in 0..64 {
            let ledger = ledger.clone();
            handles.push(tokio::spawn(async move {
                ledger.create(new_request("alice", "bob", i)).await.id
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()), "duplicate id handed out");
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(ledger.len().await, 64);
    }
}
