//! Sleeper port - blocking waits, replaceable in tests

use std::time::Duration;

pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}
