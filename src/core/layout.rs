//! # Layout Engine
//!
//! Maps terminal width to task-table column geometry. Four width bands:
//!
//! | width    | band     | created column | separator |
//! |----------|----------|----------------|-----------|
//! | < 60     | minimal  | hidden         | no        |
//! | 60..80   | compact  | hidden         | yes       |
//! | 80..120  | standard | shown          | yes       |
//! | >= 120   | full     | shown          | yes       |
//!
//! Proportional widths are floored, so the columns never add up to more
//! than the terminal width outside the minimal band.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to truncated titles.
pub const ELLIPSIS: &str = "...";

/// Separator rule never grows past this many columns.
pub const MAX_SEPARATOR_WIDTH: u16 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub id_width: u16,
    pub title_width: u16,
    pub status_width: u16,
    pub due_date_width: u16,
    /// Zero means "omit the column", not "render it zero wide".
    pub created_width: u16,
    pub show_separator: bool,
    pub title_max_chars: u16,
}

impl ColumnLayout {
    pub fn shows_created(&self) -> bool {
        self.created_width > 0
    }

    /// Sum of the columns that are actually rendered.
    pub fn total_width(&self) -> u16 {
        self.id_width + self.title_width + self.status_width + self.due_date_width + self.created_width
    }
}

fn percent(width: u16, pct: u32) -> u16 {
    (u32::from(width) * pct / 100) as u16
}

pub fn compute_layout(width: u16) -> ColumnLayout {
    if width < 60 {
        let title_width = width.saturating_sub(20);
        return ColumnLayout {
            id_width: 3,
            title_width,
            status_width: 8,
            due_date_width: 9,
            created_width: 0,
            show_separator: false,
            title_max_chars: title_width.saturating_sub(3),
        };
    }

    if width < 80 {
        let title_width = percent(width, 40);
        return ColumnLayout {
            id_width: 3,
            title_width,
            status_width: percent(width, 25),
            due_date_width: percent(width, 25),
            created_width: 0,
            show_separator: true,
            title_max_chars: title_width - 3,
        };
    }

    let (id, title, status, due, created) = if width < 120 {
        (5, 30, 25, 20, 20)
    } else {
        (5, 25, 20, 15, 15)
    };
    let title_width = percent(width, title);
    ColumnLayout {
        id_width: percent(width, id),
        title_width,
        status_width: percent(width, status),
        due_date_width: percent(width, due),
        created_width: percent(width, created),
        show_separator: true,
        title_max_chars: title_width - 3,
    }
}

/// Length of the separator rule under the table header.
pub fn separator_len(width: u16) -> u16 {
    width.min(MAX_SEPARATOR_WIDTH)
}

/// Cuts `title` to `max_chars` display columns and appends `...` when it
/// doesn't fit. Wide characters count as two columns.
pub fn truncate_title(title: &str, max_chars: u16) -> String {
    let max = usize::from(max_chars);
    if title.width() <= max {
        return title.to_string();
    }
    let mut used = 0;
    let mut truncated = String::new();
    for c in title.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        truncated.push(c);
    }
    truncated.push_str(ELLIPSIS);
    truncated
}
