//! Presentation metadata for the portal UI.
//!
//! The domain enums stay free of display concerns; screens look up icons,
//! color classes and labels here. `OrderStatus::step_index` drives the
//! progress bar, these tables drive everything else.

use crate::models::history::HistoryKind;
use crate::models::order::OrderStatus;
use crate::models::order_item::LineItemStatus;

/// Display hints for one status or history kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayMeta {
    pub label: &'static str,
    pub icon: &'static str,
    pub color_class: &'static str,
}

pub fn order_status_meta(status: OrderStatus) -> DisplayMeta {
    match status {
        OrderStatus::Draft => DisplayMeta {
            label: "Draft",
            icon: "file-text",
            color_class: "text-gray-500",
        },
        OrderStatus::Sent => DisplayMeta {
            label: "Sent",
            icon: "send",
            color_class: "text-blue-500",
        },
        OrderStatus::Processing => DisplayMeta {
            label: "Processing",
            icon: "loader",
            color_class: "text-blue-600",
        },
        OrderStatus::NeedsApproval => DisplayMeta {
            label: "Needs approval",
            icon: "alert-circle",
            color_class: "text-amber-500",
        },
        OrderStatus::Confirmed => DisplayMeta {
            label: "Confirmed",
            icon: "check-circle",
            color_class: "text-green-600",
        },
        OrderStatus::Scheduled => DisplayMeta {
            label: "Scheduled",
            icon: "calendar",
            color_class: "text-green-700",
        },
        OrderStatus::Shipped => DisplayMeta {
            label: "Shipped",
            icon: "truck",
            color_class: "text-green-800",
        },
    }
}

pub fn line_status_meta(status: LineItemStatus) -> DisplayMeta {
    match status {
        LineItemStatus::Confirmed => DisplayMeta {
            label: "Confirmed",
            icon: "check",
            color_class: "text-green-600",
        },
        LineItemStatus::Pending => DisplayMeta {
            label: "Pending",
            icon: "clock",
            color_class: "text-gray-500",
        },
        LineItemStatus::RejectedAuto => DisplayMeta {
            label: "Rejected (auto)",
            icon: "x-circle",
            color_class: "text-red-500",
        },
        LineItemStatus::RejectedManager => DisplayMeta {
            label: "Rejected by manager",
            icon: "user-x",
            color_class: "text-red-600",
        },
        LineItemStatus::Preorder => DisplayMeta {
            label: "Preorder",
            icon: "bookmark",
            color_class: "text-purple-500",
        },
        LineItemStatus::Backorder => DisplayMeta {
            label: "Backorder",
            icon: "rotate-cw",
            color_class: "text-amber-600",
        },
    }
}

pub fn history_kind_meta(kind: HistoryKind) -> DisplayMeta {
    match kind {
        HistoryKind::Created => DisplayMeta {
            label: "Order created",
            icon: "plus-circle",
            color_class: "text-gray-500",
        },
        HistoryKind::Submitted => DisplayMeta {
            label: "Order sent",
            icon: "send",
            color_class: "text-blue-500",
        },
        HistoryKind::StatusChanged => DisplayMeta {
            label: "Status changed",
            icon: "refresh-cw",
            color_class: "text-blue-600",
        },
        HistoryKind::ItemAdded => DisplayMeta {
            label: "Item added",
            icon: "package-plus",
            color_class: "text-gray-600",
        },
        HistoryKind::ItemAdjudicated => DisplayMeta {
            label: "Item decided",
            icon: "clipboard-check",
            color_class: "text-green-600",
        },
        HistoryKind::Comment => DisplayMeta {
            label: "Comment",
            icon: "message-square",
            color_class: "text-gray-500",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_order_status_has_display_meta() {
        for status in OrderStatus::iter() {
            let meta = order_status_meta(status);
            assert!(!meta.label.is_empty());
            assert!(!meta.icon.is_empty());
            assert!(!meta.color_class.is_empty());
        }
    }

    #[test]
    fn every_line_status_has_display_meta() {
        for status in LineItemStatus::iter() {
            let meta = line_status_meta(status);
            assert!(!meta.label.is_empty());
            assert!(!meta.icon.is_empty());
        }
    }
}
