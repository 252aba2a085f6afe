//! # Action-Item Completion
//!
//! Completion percentage shown on a meeting's follow-up panel.

use grc_core::ActionItemStatus;
use grc_state::ActionItem;

use crate::aggregate::count_by;

/// Percentage of action items completed, rounded. Zero when there are no
/// items.
pub fn completion_percent(items: &[ActionItem]) -> u32 {
    if items.is_empty() {
        return 0;
    }
    let completed = count_by(items, |i| i.status == ActionItemStatus::Completed);
    ((completed as f64 / items.len() as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use grc_core::MeetingId;

    fn item(status: ActionItemStatus) -> ActionItem {
        let mut i = ActionItem::new(MeetingId::new(), "follow up");
        i.status = status;
        i
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(completion_percent(&[]), 0);
    }

    #[test]
    fn test_rounding() {
        let items = vec![
            item(ActionItemStatus::Completed),
            item(ActionItemStatus::Open),
            item(ActionItemStatus::InProgress),
        ];
        // 1/3 → 33.3…% → 33.
        assert_eq!(completion_percent(&items), 33);

        let items = vec![
            item(ActionItemStatus::Completed),
            item(ActionItemStatus::Completed),
            item(ActionItemStatus::Open),
        ];
        // 2/3 → 66.7% → 67.
        assert_eq!(completion_percent(&items), 67);
    }

    #[test]
    fn test_all_completed_is_100() {
        let items = vec![item(ActionItemStatus::Completed); 4];
        assert_eq!(completion_percent(&items), 100);
    }
}
