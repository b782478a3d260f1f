// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_runtime::impls::tokio::{TokioRuntime, TokioTimer};
use pacer_runtime::runtime::Runtime;
use pacer_runtime::timer::Timer;
use std::time::Duration;
use tokio::time::advance;

#[tokio::test(start_paused = true)]
async fn test_now_follows_paused_clock() -> anyhow::Result<()> {
    // Arrange
    let timer = TokioTimer;
    let start = timer.now();

    // Act
    advance(Duration::from_millis(250)).await;

    // Assert
    assert_eq!(timer.now() - start, Duration::from_millis(250));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_sleep_future_completes_after_duration() -> anyhow::Result<()> {
    // Arrange
    let timer = TokioTimer;
    let start = timer.now();

    // Act
    timer.sleep_future(Duration::from_millis(100)).await;

    // Assert
    assert_eq!(timer.now() - start, Duration::from_millis(100));

    Ok(())
}

fn elapsed_since<RT: Runtime>(timer: &RT::Timer, start: RT::Instant) -> Duration {
    timer.now() - start
}

#[tokio::test(start_paused = true)]
async fn test_runtime_instants_subtract_to_duration() -> anyhow::Result<()> {
    // Arrange
    let timer = <TokioRuntime as Runtime>::Timer::default();
    let start = timer.now();

    // Act
    advance(Duration::from_millis(40)).await;

    // Assert
    assert_eq!(
        elapsed_since::<TokioRuntime>(&timer, start),
        Duration::from_millis(40)
    );

    Ok(())
}
