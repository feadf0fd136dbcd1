mod common;

use common::SharedBuf;
use logmagix::{Level, Logger};

fn logger(buf: &SharedBuf, level: Level) -> Logger {
    Logger::builder()
        .level(level)
        .terminal_writer(buf.clone())
        .colors(false)
        .done()
        .build()
}

#[test]
fn batch_holds_lines_until_flush() {
    let buf = SharedBuf::default();
    let logger = logger(&buf, Level::Debug);

    logger.batch();
    logger.info("a");
    logger.warning("b");
    logger.success("c");

    assert!(logger.is_batching());
    assert_eq!(logger.pending_count(), 3);
    assert_eq!(buf.len(), 0);

    logger.flush();

    let lines = buf.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("[INFO] -> a"));
    assert!(lines[1].ends_with("[WARNING] -> b"));
    assert!(lines[2].ends_with("[SUCCESS] -> c"));
    assert!(!logger.is_batching());
    assert_eq!(logger.pending_count(), 0);
}

#[test]
fn second_flush_is_a_noop() {
    let buf = SharedBuf::default();
    let logger = logger(&buf, Level::Debug);

    logger.batch();
    logger.info("once");
    logger.flush();
    logger.flush();

    assert_eq!(buf.lines().len(), 1);
}

#[test]
fn flush_without_batch_does_nothing() {
    let buf = SharedBuf::default();
    let logger = logger(&buf, Level::Debug);

    logger.flush();
    logger.info("direct");

    assert_eq!(buf.lines().len(), 1);
    assert!(!logger.is_batching());
}

#[test]
fn filtered_lines_are_never_buffered() {
    let buf = SharedBuf::default();
    let logger = logger(&buf, Level::Warning);

    logger.batch();
    logger.debug("x");
    logger.info("x");
    logger.failure("kept");

    assert_eq!(logger.pending_count(), 1);
    logger.flush();
    let lines = buf.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("[FAILURE] -> kept"));
}

#[test]
fn rebatching_discards_unflushed_lines() {
    let buf = SharedBuf::default();
    let logger = logger(&buf, Level::Debug);

    logger.batch();
    logger.info("dropped");
    logger.batch();
    logger.info("kept");
    logger.flush();

    let lines = buf.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("-> kept"));
}

#[test]
fn lines_after_flush_go_straight_out() {
    let buf = SharedBuf::default();
    let logger = logger(&buf, Level::Debug);

    logger.batch();
    logger.info("first");
    logger.flush();
    logger.info("second");

    let lines = buf.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with("-> second"));
}
