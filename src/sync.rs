/// Batch saving of tabs to Notion

use crate::client::{PageCreator, save_tab};
use crate::tab_data::{NotionConfig, SyncResult, TabInfo};
use futures_util::future::join_all;

/// Most create-page requests in flight at once (Notion rate limit)
pub const BATCH_SIZE: usize = 5;

/// Save every tab, at most `BATCH_SIZE` at a time, and count the outcomes.
///
/// Batches run one after another; a batch starts only once every request of
/// the previous batch has settled. Failures are counted and never abort the
/// run, so `success_count + failed_count == tabs.len()`.
pub async fn save_multiple_tabs<C>(
    creator: &C,
    tabs: &[TabInfo],
    config: &NotionConfig,
) -> SyncResult
where
    C: PageCreator + ?Sized,
{
    let mut result = SyncResult::default();

    for (index, batch) in tabs.chunks(BATCH_SIZE).enumerate() {
        log::debug!("Saving batch {} ({} tabs)", index + 1, batch.len());

        let outcomes = join_all(batch.iter().map(|tab| save_tab(creator, tab, config))).await;

        for outcome in outcomes {
            match outcome {
                Ok(()) => result.success_count += 1,
                Err(_) => result.failed_count += 1,
            }
        }
    }

    log::info!(
        "Saved {} of {} tabs to Notion ({} failed)",
        result.success_count,
        tabs.len(),
        result.failed_count
    );

    result
}
