//! Helpers for the report-lifecycle write exercise.

/// The ID of the report a `createReport` just made, derived from the
/// report count read before and after the call.
///
/// IDs are sequential starting at 1, so one successful create makes the new
/// count the new report's ID. Returns `None` when the count did not move
/// (the create reverted) or moved by more than one (someone else created a
/// report in between and the new ID is ambiguous). In both cases the caller
/// must not vote or appeal: the ID it would compute belongs to a report it
/// did not create.
pub fn created_report_id(count_before: u64, count_after: u64) -> Option<u64> {
    if count_before.checked_add(1) == Some(count_after) {
        Some(count_after)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_create_yields_new_count() {
        assert_eq!(created_report_id(4, 5), Some(5));
        assert_eq!(created_report_id(0, 1), Some(1));
    }

    #[test]
    fn test_unmoved_count_yields_none() {
        assert_eq!(created_report_id(4, 4), None);
        assert_eq!(created_report_id(0, 0), None);
    }

    #[test]
    fn test_ambiguous_jump_yields_none() {
        assert_eq!(created_report_id(4, 6), None);
    }

    #[test]
    fn test_shrunk_count_yields_none() {
        assert_eq!(created_report_id(4, 3), None);
    }

    #[test]
    fn test_max_count_does_not_overflow() {
        assert_eq!(created_report_id(u64::MAX, u64::MAX), None);
    }
}
