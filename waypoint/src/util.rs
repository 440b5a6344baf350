/// Checks whether a distance is the unreachable sentinel, which is any negative distance
///
/// # Arguments
///
/// * `distance`: output of a distance metric
///
/// returns: bool
///
/// # Examples
///
/// ```
/// assert!(waypoint::util::is_unreachable(-1));
/// assert!(waypoint::util::is_unreachable(i64::MIN));
///
/// assert!(!waypoint::util::is_unreachable(0));
/// assert!(!waypoint::util::is_unreachable(42));
/// ```
pub fn is_unreachable(distance: i64) -> bool {
    distance < 0
}

/// Converts an unsigned distance into a metric result, saturating at i64::MAX so that large
/// distances never wrap into the unreachable sentinel
///
/// ```
/// assert_eq!(waypoint::util::saturate(7), 7);
/// assert_eq!(waypoint::util::saturate(u64::MAX), i64::MAX);
/// ```
pub fn saturate(distance: u64) -> i64 {
    i64::try_from(distance).unwrap_or(i64::MAX)
}
