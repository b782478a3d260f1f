// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::debounce;
use pacer_test_utils::test_data::{person_alice, person_bob, person_charlie, person_diane};
use pacer_test_utils::{advance_by, settle, CallRecorder};
use std::time::Duration;

const WAIT: Duration = Duration::from_millis(100);

#[tokio::test(start_paused = true)]
async fn test_debounce_runs_once_after_quiet_period() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = debounce(recorder.target(), WAIT, false);

    // Act
    debounced.call(person_alice());
    advance_by(30).await;
    debounced.call(person_bob());
    advance_by(30).await;
    debounced.call(person_charlie());

    // Assert
    advance_by(99).await;
    assert_eq!(recorder.count(), 0);
    assert!(debounced.is_scheduled());

    advance_by(1).await;
    assert_eq!(recorder.args(), vec![person_charlie()]);
    assert_eq!(recorder.times_ms(), vec![160]);
    assert!(!debounced.is_scheduled());

    advance_by(500).await;
    assert_eq!(recorder.count(), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_debounce_collapses_long_burst_to_last_args() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = debounce(recorder.target(), WAIT, false);

    // Act
    for i in 1..=10u32 {
        debounced.call(i);
        advance_by(90).await;
    }
    advance_by(10).await;

    // Assert
    assert_eq!(recorder.args(), vec![10]);
    assert_eq!(recorder.times_ms(), vec![910]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_debounce_separate_bursts_run_separately() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = debounce(recorder.target(), WAIT, false);

    // Act
    debounced.call(person_alice());
    advance_by(100).await;
    advance_by(50).await;
    debounced.call(person_bob());
    advance_by(100).await;
    advance_by(50).await;

    // Assert
    assert_eq!(recorder.args(), vec![person_alice(), person_bob()]);
    assert_eq!(recorder.times_ms(), vec![100, 250]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_debounce_immediate_runs_first_call_of_burst() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = debounce(recorder.target(), WAIT, true);

    // Act & Assert
    debounced.call(person_alice());
    assert_eq!(recorder.args(), vec![person_alice()]);

    advance_by(50).await;
    debounced.call(person_bob());
    assert_eq!(recorder.count(), 1);

    advance_by(50).await;
    assert_eq!(recorder.count(), 1);

    advance_by(300).await;
    assert_eq!(recorder.args(), vec![person_alice()]);
    assert!(!debounced.is_scheduled());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_debounce_immediate_burst_extends_quiet_period() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = debounce(recorder.target(), WAIT, true);

    // Act
    debounced.call(person_alice());
    advance_by(80).await;
    debounced.call(person_bob());
    advance_by(80).await;
    debounced.call(person_charlie());
    advance_by(99).await;
    assert!(debounced.is_scheduled());
    advance_by(1).await;
    debounced.call(person_diane());

    // Assert
    assert_eq!(recorder.args(), vec![person_alice(), person_diane()]);
    assert_eq!(recorder.times_ms(), vec![0, 260]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_debounce_zero_wait_defers_single_execution() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = debounce(recorder.target(), Duration::ZERO, false);

    // Act
    debounced.call(person_alice());
    debounced.call(person_bob());
    debounced.call(person_charlie());

    // Assert
    assert_eq!(recorder.count(), 0);
    settle().await;
    assert_eq!(recorder.args(), vec![person_charlie()]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_debounce_zero_wait_immediate_runs_synchronously() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = debounce(recorder.target(), Duration::ZERO, true);

    // Act & Assert
    debounced.call(person_alice());
    debounced.call(person_bob());
    assert_eq!(recorder.args(), vec![person_alice()]);

    settle().await;
    assert!(!debounced.is_scheduled());
    debounced.call(person_charlie());
    assert_eq!(recorder.args(), vec![person_alice(), person_charlie()]);

    settle().await;
    assert_eq!(recorder.count(), 2);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_debounce_clones_share_burst() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = debounce(recorder.target(), WAIT, false);
    let clone = debounced.clone();

    // Act
    debounced.call(person_alice());
    advance_by(50).await;
    clone.call(person_bob());
    advance_by(100).await;

    // Assert
    assert_eq!(recorder.args(), vec![person_bob()]);
    assert_eq!(recorder.times_ms(), vec![150]);
    assert_eq!(clone.wait(), WAIT);
    assert!(!clone.options().immediate);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_debounce_timer_due_mid_jump_runs_at_end_of_jump() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = debounce(recorder.target(), WAIT, false);

    // Act
    debounced.call(person_alice());
    advance_by(150).await;

    // Assert
    assert_eq!(recorder.args(), vec![person_alice()]);
    assert_eq!(recorder.times_ms(), vec![150]);

    Ok(())
}
