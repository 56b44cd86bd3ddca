// SPDX-License-Identifier: MIT OR Apache-2.0

//! Debug lines in a build whose threshold is above Debug.
//!
//! Runs under `cargo test --features threshold_info` (or warning/error), and in release builds.

#![cfg(all(
    not(feature = "threshold_debug"),
    any(
        feature = "threshold_info",
        feature = "threshold_warning",
        feature = "threshold_error",
        not(debug_assertions)
    )
))]

use linewise::{ACTIVE_THRESHOLD, InMemorySink, Level, debug_stream, log, log_debug, log_error};

#[test]
fn debug_lines_leave_no_trace() {
    assert!(!Level::Debug.is_active());
    assert!(ACTIVE_THRESHOLD > Level::Debug);

    let path = std::env::temp_dir().join(format!("linewise-inactive-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&path);
    linewise::set_log_file_name(&path).unwrap();

    let statement = log_debug!();
    assert!(!statement.is_active());
    drop(statement << "not written");
    log_debug!(; "not written either, ", 1);
    let _ = log_debug!() << "nor this";
    {
        debug_stream!(out);
        write!(out, "streamed {}", 2);
        assert!(!out.is_active());
        assert_eq!(out.as_str(), "");
    }
    // nothing above touched the shared file
    assert!(!path.exists());

    let sink = InMemorySink::new();
    let mut bytes: Vec<u8> = Vec::new();
    log_debug!(&sink; "x");
    log_debug!(&mut bytes; "x");
    log!(Level::Debug, &mut std::io::stderr(); "x");
    assert!(sink.is_empty());
    assert!(bytes.is_empty());

    let mut evaluated = 0;
    {
        debug_stream!(out, {
            evaluated += 1;
            &sink
        });
        out.append("x");
    }
    assert_eq!(evaluated, 0);
    assert!(sink.is_empty());

    log_error!(; "the first active line opens the file");
    assert!(path.exists());
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1, "{contents}");
    assert!(contents.ends_with("] the first active line opens the file\n"));

    let _ = std::fs::remove_file(&path);
}
