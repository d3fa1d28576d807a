//! Page partitioning and progress arithmetic.
//!
//! Everything here is pure and deterministic. The store calls into these
//! functions when a plan is created and every time progress is recorded.

/// An inclusive, 1-based page range assigned to one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start_page: u32,
    pub end_page: u32,
}

impl PageRange {
    /// Number of pages in the range, zero when the range is inverted.
    pub fn width(&self) -> u32 {
        self.end_page
            .checked_sub(self.start_page)
            .map_or(0, |span| span.saturating_add(1))
    }
}

/// Splits `[1, total_pages]` into `participant_count` contiguous ranges.
///
/// Every participant receives `floor(total_pages / participant_count)`
/// pages and the last one absorbs the remainder. Callers must ensure
/// `1 <= participant_count <= total_pages`, otherwise ranges degenerate.
///
/// ```rust
/// use khatma_core::schedule::partition_pages;
///
/// let ranges = partition_pages(10, 3);
/// assert_eq!(ranges[0].start_page, 1);
/// assert_eq!(ranges[0].end_page, 3);
/// assert_eq!(ranges[2].start_page, 7);
/// assert_eq!(ranges[2].end_page, 10);
/// ```
pub fn partition_pages(total_pages: u32, participant_count: usize) -> Vec<PageRange> {
    if participant_count == 0 {
        return Vec::new();
    }

    let count = participant_count as u32;
    let per_participant = total_pages / count;
    let last = count - 1;

    (0..count)
        .map(|index| PageRange {
            start_page: index * per_participant + 1,
            end_page: if index == last {
                total_pages
            } else {
                (index + 1) * per_participant
            },
        })
        .collect()
}

/// Daily quota needed to finish `range_width` pages in `days` days.
pub fn pages_per_day(range_width: u32, days: u32) -> u32 {
    range_width.div_ceil(days.max(1))
}

/// Percentage of a range read, clamped to 100.
pub fn progress_percent(pages_read: u32, range_width: u32) -> f64 {
    if range_width == 0 {
        return 0.0;
    }
    (f64::from(pages_read) / f64::from(range_width) * 100.0).min(100.0)
}

/// Arithmetic mean of progress values, `0.0` when there are none.
pub fn mean_progress<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0u32), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}
