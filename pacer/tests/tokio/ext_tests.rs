// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::prelude::*;
use pacer_runtime::impls::tokio::{TokioRuntime, TokioScheduler, TokioTimer};
use pacer_test_utils::test_data::{person_alice, person_bob, person_charlie};
use pacer_test_utils::{advance_by, CallRecorder, Person};
use std::time::Duration;

const WAIT: Duration = Duration::from_millis(100);

#[tokio::test(start_paused = true)]
async fn test_closure_throttle_ext() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::<Person>::new();
    let throttled = recorder.target().throttle(WAIT);

    // Act
    throttled.call(person_alice());
    throttled.call(person_bob());
    advance_by(100).await;

    // Assert
    assert_eq!(recorder.args(), vec![person_alice(), person_bob()]);
    assert_eq!(throttled.options(), ThrottleOptions::default());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_closure_throttle_with_options_ext() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::<Person>::new();
    let throttled = recorder
        .target()
        .throttle_with(WAIT, "leading".parse::<ThrottleOptions>()?);

    // Act
    throttled.call(person_alice());
    throttled.call(person_bob());
    advance_by(200).await;

    // Assert
    assert_eq!(recorder.args(), vec![person_alice()]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_closure_debounce_ext() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::<Person>::new();
    let debounced = recorder.target().debounce(WAIT);

    // Act
    debounced.call(person_alice());
    debounced.call(person_bob());
    advance_by(100).await;

    // Assert
    assert_eq!(recorder.args(), vec![person_bob()]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_closure_debounce_immediate_ext() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::<Person>::new();
    let debounced = recorder.target().debounce_immediate(WAIT);

    // Act
    debounced.call(person_alice());
    debounced.call(person_bob());
    advance_by(100).await;

    // Assert
    assert_eq!(recorder.args(), vec![person_alice()]);
    assert!(debounced.options().immediate);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_tuple_arguments() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::<(i32, i32)>::new();
    let mut record = recorder.target();
    let throttled = (move |(x, y): (i32, i32)| {
        record((x, y));
        x + y
    })
    .throttle(WAIT);

    // Act & Assert
    assert_eq!(throttled.call((1, 2)), Some(3));
    assert_eq!(throttled.call((10, 20)), Some(3));
    advance_by(100).await;
    assert_eq!(throttled.last_result(), Some(30));
    assert_eq!(recorder.args(), vec![(1, 2), (10, 20)]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_explicit_runtime_constructors() -> anyhow::Result<()> {
    // Arrange
    let throttle_recorder = CallRecorder::new();
    let debounce_recorder = CallRecorder::new();
    let throttled = Throttle::<_, _, _, TokioRuntime>::with_runtime(
        throttle_recorder.target(),
        WAIT,
        ThrottleOptions::default(),
        TokioTimer,
        TokioScheduler::current(),
    );
    let debounced = Debounce::<_, _, _, TokioRuntime>::with_runtime(
        debounce_recorder.target(),
        WAIT,
        DebounceOptions::default(),
        TokioScheduler::current(),
    );

    // Act
    throttled.call(person_alice());
    debounced.call(person_charlie());
    advance_by(100).await;

    // Assert
    assert_eq!(throttle_recorder.args(), vec![person_alice()]);
    assert_eq!(debounce_recorder.args(), vec![person_charlie()]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_debug_output() -> anyhow::Result<()> {
    let recorder = CallRecorder::<u8>::new();
    let debounced = recorder.target().debounce(WAIT);
    debounced.call(1);

    let rendered = format!("{debounced:?}");
    assert!(rendered.starts_with("Debounce"));
    assert!(rendered.contains("scheduled: true"));

    Ok(())
}
