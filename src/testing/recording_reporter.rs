use std::sync::Mutex;

use crate::ports::Reporter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Info(String),
    Debug(String),
    Failure(String),
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub entries: Mutex<Vec<Entry>>,
}

impl RecordingReporter {
    pub fn infos(&self) -> Vec<String> {
        self.collect(|entry| match entry {
            Entry::Info(message) => Some(message.clone()),
            _ => None,
        })
    }

    pub fn debugs(&self) -> Vec<String> {
        self.collect(|entry| match entry {
            Entry::Debug(message) => Some(message.clone()),
            _ => None,
        })
    }

    pub fn failures(&self) -> Vec<String> {
        self.collect(|entry| match entry {
            Entry::Failure(message) => Some(message.clone()),
            _ => None,
        })
    }

    fn collect(&self, pick: impl Fn(&Entry) -> Option<String>) -> Vec<String> {
        self.entries.lock().unwrap().iter().filter_map(pick).collect()
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.entries.lock().unwrap().push(Entry::Info(message.to_string()));
    }

    fn debug(&self, message: &str) {
        self.entries.lock().unwrap().push(Entry::Debug(message.to_string()));
    }

    fn fail(&self, message: &str) {
        self.entries.lock().unwrap().push(Entry::Failure(message.to_string()));
    }
}
