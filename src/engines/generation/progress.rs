use crate::types::EpochReport;
use std::sync::mpsc::Sender;

/// Observer of a running evolution
pub trait ProgressCallback: Send {
    fn on_epoch_start(&mut self, epoch: usize);
    fn on_epoch_complete(&mut self, report: &EpochReport);
}

/// Prints each epoch's best formula and lowest scores to stdout
pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_epoch_start(&mut self, _epoch: usize) {}

    fn on_epoch_complete(&mut self, report: &EpochReport) {
        println!("{}", report.epoch);
        println!("{}", report.best_rendered);
        let scores: Vec<String> = report.lowest_scores.iter().map(|s| format!("{:.6}", s)).collect();
        println!("[{}]", scores.join(", "));
    }
}

/// Discards progress
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_epoch_start(&mut self, _epoch: usize) {}
    fn on_epoch_complete(&mut self, _report: &EpochReport) {}
}

pub enum ProgressMessage {
    EpochStart(usize),
    EpochComplete(EpochReport),
}

/// Forwards progress to another thread
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_epoch_start(&mut self, epoch: usize) {
        let _ = self.sender.send(ProgressMessage::EpochStart(epoch));
    }

    fn on_epoch_complete(&mut self, report: &EpochReport) {
        let _ = self.sender.send(ProgressMessage::EpochComplete(report.clone()));
    }
}
