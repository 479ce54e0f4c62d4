use std::time::Instant;

use log::{set_boxed_logger, set_max_level, LevelFilter, Log, Metadata, Record};

use crate::{Animation, AnimationSink};

/// Prints records with the milliseconds elapsed since the first test set it up.
struct TestLogger {
    started: Instant,
    level: LevelFilter,
}

impl Log for TestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.started.elapsed().as_millis();
        let target = record.module_path().unwrap_or_else(|| record.target());
        println!("+{elapsed}ms {:<5} {target}: {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

pub fn setup_tests_logging() {
    let logger = TestLogger {
        started: Instant::now(),
        level: LevelFilter::Debug,
    };
    // already installed by another test in this binary
    if set_boxed_logger(Box::new(logger)).is_ok() {
        set_max_level(LevelFilter::Debug);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub name: String,
    pub origin: [f32; 2],
}

impl Applied {
    pub fn new(name: &str, origin: [f32; 2]) -> Self {
        Self {
            name: name.to_string(),
            origin,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<Applied>,
}

impl AnimationSink for RecordingSink {
    fn apply_animation(&mut self, animation: &Animation, origin: [f32; 2]) {
        self.calls.push(Applied::new(&animation.name, origin));
    }
}
