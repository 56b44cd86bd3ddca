// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::Level;
use crate::sink::Sink;

/**
A sink that writes lines to stderr.

On wasm32 there is no stderr; lines go to the browser console at the matching console level.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StderrSink {}

impl StderrSink {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Sink for StderrSink {
    fn finish_line(&self, level: Level, line: &str) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = level;
            let _ = crate::sink::write_line(&mut std::io::stderr().lock(), line);
        }
        #[cfg(target_arch = "wasm32")]
        {
            let msg: wasm_bindgen::JsValue = line.into();
            match level {
                Level::Debug => web_sys::console::debug_1(&msg),
                Level::Info => web_sys::console::info_1(&msg),
                Level::Warning => web_sys::console::warn_1(&msg),
                Level::Error => web_sys::console::error_1(&msg),
            }
        }
    }

    fn flush(&self) {
        //nothing to do since we are unbuffered
    }
}
