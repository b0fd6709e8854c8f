/// A trait for random sources that return random integers.
///
/// This abstraction allows plugging in a real random source or a mocked
/// one in tests.
///
/// The random type `T` is generic (typically `u64` or `u128`).
///
/// # Example
/// ```
/// use snowmint::RandSource;
///
/// struct FixedRand;
/// impl RandSource<u64> for FixedRand {
///     fn rand(&self) -> u64 {
///         1234
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), 1234);
/// ```
pub trait RandSource<T> {
    /// Returns a random integer.
    fn rand(&self) -> T;
}
