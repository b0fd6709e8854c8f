use crate::RandSource;
use rand::{Rng, rng};

/// A [`RandSource`] backed by the thread-local RNG (`rand::rng()`).
///
/// The thread-local RNG is fast, cryptographically secure, and reseeded
/// periodically. Each OS thread has its own instance, so calls from
/// multiple threads are contention-free.
///
/// This type does **not** store the RNG itself; it is a zero-sized handle
/// that accesses the thread-local generator on each call, which makes it
/// freely shareable across threads even though the underlying RNG is not.
#[derive(Default, Clone, Debug)]
pub struct ThreadRandom;

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}

impl RandSource<u128> for ThreadRandom {
    fn rand(&self) -> u128 {
        rng().random()
    }
}
