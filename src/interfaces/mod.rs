/// Internal national-number matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
/// The bound keeps adapter instances shareable from a `LazyLock` static.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only
    /// decimal digits) matches the national number pattern of a region's
    /// metadata.
    fn match_national_number(
        &self,
        number: &str,
        national_number_pattern: &str,
        allow_prefix_match: bool,
    ) -> bool;
}
