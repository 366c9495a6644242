// src/progress.rs
/// Lightweight progress reporting for a day's parse.
/// Frontends implement this to surface status; the parser never prints.
pub trait Progress {
    /// Called at the start with the number of games.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One game parsed. `index` is its position in the submitted order.
    fn item_done(&mut self, _index: usize, _game_id: &str) {}

    /// One game failed to parse.
    fn item_failed(&mut self, _index: usize, _game_id: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards progress to the log.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        logf!("Parsing {total} boxscore(s)");
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn item_done(&mut self, index: usize, game_id: &str) {
        self.done += 1;
        logd!("[{}/{}] #{index} {game_id} ok", self.done + self.failed, self.total);
    }

    // The aggregator already logs the failure itself
    fn item_failed(&mut self, _index: usize, _game_id: &str, _reason: &str) {
        self.failed += 1;
    }

    fn finish(&mut self) {
        logf!("Parsed {} of {} game(s), {} failed", self.done, self.total, self.failed);
    }
}
