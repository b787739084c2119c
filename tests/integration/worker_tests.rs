/*!
 * Integration tests for the background diff worker
 */

use anyhow::Result;
use std::time::Duration;
use voscript::app_config::Config;
use voscript::app_controller::Controller;
use voscript::worker::DiffWorker;

use crate::common;

#[tokio::test]
async fn test_diffWorker_fromController_shouldUseConfiguredDebounce() -> Result<()> {
    let mut config = Config::default();
    config.debounce_ms = 20;
    let controller = Controller::with_config(config)?;

    let worker = controller.diff_worker();
    let generation = worker.submit(common::DRAFT_SCRIPT, common::FINAL_SCRIPT);
    let outcome = tokio::time::timeout(Duration::from_secs(5), worker.wait_for(generation))
        .await?
        .expect("worker publishes a result");

    assert_eq!(outcome.generation, generation);
    assert_eq!(outcome.stats.added_words, 2);
    worker.shutdown().await?;
    Ok(())
}

#[tokio::test]
async fn test_diffWorker_withTypingBurst_shouldSuppressStaleResults() -> Result<()> {
    let worker = DiffWorker::new(Duration::from_millis(100));
    let mut outcomes = worker.subscribe();

    // Simulate keystrokes arriving faster than the debounce window
    let mut revised = String::new();
    let mut last = 0;
    for word in ["Tonight", " we", " talk", " about", " tea."] {
        revised.push_str(word);
        last = worker.submit(common::DRAFT_SCRIPT, revised.clone());
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let outcome = tokio::time::timeout(Duration::from_secs(5), worker.wait_for(last))
        .await?
        .expect("worker publishes a result");
    assert_eq!(outcome.generation, last);

    // Only the newest request was ever published
    outcomes.changed().await?;
    let seen = outcomes.borrow_and_update().clone().map(|o| o.generation);
    assert_eq!(seen, Some(last));

    worker.shutdown().await?;
    Ok(())
}

/// Build a script of `words` distinct-ish words
fn long_script(words: usize, variant: &str) -> String {
    (0..words)
        .map(|i| {
            if i % 7 == 0 {
                format!("{}{}", variant, i)
            } else {
                format!("word{}", i % 50)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_diffWorker_withEditDuringLongDiff_shouldNeverPublishSupersededResult() -> Result<()> {
    let worker = DiffWorker::new(Duration::from_millis(1));
    let mut outcomes = worker.subscribe();
    let collector = tokio::spawn(async move {
        let mut seen = Vec::new();
        while outcomes.changed().await.is_ok() {
            if let Some(outcome) = outcomes.borrow_and_update().as_ref() {
                seen.push(outcome.generation);
            }
        }
        seen
    });

    // The first diff is large enough to still be running when the edit lands
    let first = worker.submit(long_script(1500, "draft"), long_script(1500, "final"));
    tokio::time::sleep(Duration::from_millis(20)).await;
    let second = worker.submit("short take", "short new take");

    let outcome = tokio::time::timeout(Duration::from_secs(30), worker.wait_for(second))
        .await?
        .expect("worker publishes a result");
    assert_eq!(outcome.generation, second);
    assert_eq!(outcome.stats.added_words, 1);

    worker.shutdown().await?;
    let seen = collector.await?;
    assert!(!seen.contains(&first), "superseded generation published: {:?}", seen);
    assert_eq!(seen.last(), Some(&second));
    Ok(())
}

#[tokio::test]
async fn test_diffWorker_afterSettling_shouldAcceptNewRequests() -> Result<()> {
    let worker = DiffWorker::new(Duration::from_millis(10));

    let first = worker.submit("one", "one two");
    let first_outcome = worker.wait_for(first).await.expect("first result");
    assert_eq!(first_outcome.stats.added_words, 1);

    let second = worker.submit("one two", "one");
    let second_outcome = worker.wait_for(second).await.expect("second result");
    assert_eq!(second_outcome.generation, 2);
    assert_eq!(second_outcome.stats.removed_words, 1);
    assert_eq!(worker.latest_generation(), 2);

    worker.shutdown().await?;
    Ok(())
}

#[tokio::test]
async fn test_diffWorker_shutdown_withPendingRequest_shouldFlushIt() -> Result<()> {
    let worker = DiffWorker::new(Duration::from_secs(60));
    let outcomes = worker.subscribe();

    worker.submit("a", "b");
    worker.shutdown().await?;

    let published = outcomes.borrow().clone().expect("pending request flushed");
    assert_eq!(published.generation, 1);
    Ok(())
}
