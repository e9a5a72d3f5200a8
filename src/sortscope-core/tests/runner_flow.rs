//! End-to-end runs through the public runner API.

use std::time::Duration;

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sortscope_core::{
    Algorithm, Completion, SharedArray, SortEvent, SortOrder, SortRunner, StepKind,
};

fn seeded_array(seed: u64, len: usize) -> SharedArray {
    let array = SharedArray::from_values(Vec::new());
    array
        .regenerate_with(&mut StdRng::seed_from_u64(seed), len, 50, 400)
        .unwrap();
    array
}

fn sorted_copy(values: &[i32], order: SortOrder) -> Vec<i32> {
    let mut expected = values.to_vec();
    expected.sort_unstable();
    if order.is_descending() {
        expected.reverse();
    }
    expected
}

#[tokio::test]
async fn test_every_algorithm_sorts_both_orders() {
    for (seed, algorithm) in Algorithm::ALL.into_iter().enumerate() {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let array = seeded_array(seed as u64, 64);
            let input = array.snapshot();
            let mut runner = SortRunner::new(array.clone(), 0).with_order(order);

            runner.start(runner.request(algorithm)).await.unwrap();
            let outcome = runner.wait().await.unwrap().unwrap();

            assert_eq!(outcome.completion, Completion::Completed);
            assert_eq!(array.snapshot(), sorted_copy(&input, order));
        }
    }
}

#[tokio::test]
async fn test_event_stream_is_well_formed() {
    let array = seeded_array(11, 16);
    let mut runner = SortRunner::new(array, 0);
    let mut events = runner.take_events().unwrap();
    assert!(runner.take_events().is_none());

    let run = runner
        .start(runner.request(Algorithm::Merge))
        .await
        .unwrap();
    runner.wait().await.unwrap();

    let mut received = Vec::new();
    while let Ok(event) = events.try_recv() {
        received.push(event);
    }
    assert!(matches!(received.first(), Some(SortEvent::Started { len: 16, .. })));
    assert!(matches!(received.last(), Some(SortEvent::Finished(_))));
    assert!(received.iter().all(|event| event.run() == run));

    let seqs: Vec<u64> = received
        .iter()
        .filter_map(|event| match event {
            SortEvent::Step { step, .. } => Some(step.seq),
            _ => None,
        })
        .collect();
    let expected: Vec<u64> = (1..=seqs.len() as u64).collect();
    assert_eq!(seqs, expected);
}

#[tokio::test]
async fn test_snapshots_during_swap_sorts_are_permutations() {
    let array = seeded_array(5, 40);
    let mut expected = array.snapshot();
    expected.sort_unstable();
    let mut runner = SortRunner::new(array.clone(), 1);
    runner
        .start(runner.request(Algorithm::Bubble))
        .await
        .unwrap();

    for _ in 0..50 {
        let mut seen = array.snapshot();
        seen.sort_unstable();
        assert_eq!(seen, expected);
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    runner.stop_and_wait().await.unwrap();
}

#[tokio::test]
async fn test_speed_change_applies_mid_run() {
    let array = seeded_array(3, 30);
    let mut runner = SortRunner::new(array.clone(), 5_000);
    runner
        .start(runner.request(Algorithm::Selection))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;

    runner.set_delay(0);
    let outcome = tokio::time::timeout(Duration::from_secs(10), runner.wait())
        .await
        .expect("run should finish once the delay drops")
        .unwrap()
        .unwrap();
    assert!(outcome.is_completed());
    assert!(SortOrder::Descending.is_sorted(&array.snapshot()));
}

#[tokio::test]
async fn test_cancelled_bubble_keeps_permutation() {
    let array = seeded_array(9, 50);
    let input = array.snapshot();
    let mut runner = SortRunner::new(array.clone(), 2);
    let mut events = runner.take_events().unwrap();
    runner
        .start(runner.request(Algorithm::Bubble))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(25)).await;
    let outcome = runner.stop_and_wait().await.unwrap().unwrap();

    assert_eq!(outcome.completion, Completion::Cancelled);
    let mut seen = array.snapshot();
    seen.sort_unstable();
    assert_eq!(seen, sorted_copy(&input, SortOrder::Ascending));

    let mut last = None;
    while let Ok(event) = events.try_recv() {
        if let SortEvent::Step { step, .. } = event {
            assert!(matches!(step.kind, StepKind::Compare { .. }));
        }
        last = Some(event);
    }
    assert!(matches!(last, Some(SortEvent::Finished(o)) if o.completion == Completion::Cancelled));
}
