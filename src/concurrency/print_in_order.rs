//! Print in Order (LeetCode 1114): three callbacks must run first, second,
//! third no matter which thread arrives when. Java's semaphore/latch
//! solution becomes a condvar-gated stage counter.

use parking_lot::{Condvar, Mutex};

pub struct Sequencer {
    stage: Mutex<u8>,
    advanced: Condvar,
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            stage: Mutex::new(0),
            advanced: Condvar::new(),
        }
    }

    pub fn first<F: FnOnce()>(&self, f: F) {
        self.run_at(0, f);
    }

    pub fn second<F: FnOnce()>(&self, f: F) {
        self.run_at(1, f);
    }

    pub fn third<F: FnOnce()>(&self, f: F) {
        self.run_at(2, f);
    }

    fn run_at<F: FnOnce()>(&self, turn: u8, f: F) {
        let mut stage = self.stage.lock();
        while *stage != turn {
            self.advanced.wait(&mut stage);
        }
        f();
        *stage += 1;
        self.advanced.notify_all();
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex as PlMutex;
    use std::sync::Arc;

    #[test]
    fn order_holds_regardless_of_arrival() {
        // Launch in the worst arrival order: third, second, first.
        for _ in 0..20 {
            let seq = Arc::new(Sequencer::new());
            let output = Arc::new(PlMutex::new(String::new()));

            let mut handles = Vec::new();
            for (label, stage) in [("third", 2u8), ("second", 1), ("first", 0)] {
                let seq = Arc::clone(&seq);
                let output = Arc::clone(&output);
                handles.push(std::thread::spawn(move || {
                    let append = || output.lock().push_str(label);
                    match stage {
                        0 => seq.first(append),
                        1 => seq.second(append),
                        _ => seq.third(append),
                    }
                }));
            }
            for handle in handles {
                handle.join().unwrap();
            }
            assert_eq!(&*output.lock(), "firstsecondthird");
        }
    }
}
