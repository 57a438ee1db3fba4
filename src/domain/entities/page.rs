use crate::domain::entities::filter::FilterSelection;

/// Rows per server page; `rank` always moves by this step.
pub const PAGE_STEP: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Zero-based offset into the filtered result set.
    pub rank: u32,
    /// 1-based page number reported by the server.
    pub page: u32,
    /// Page count reported by the server.
    pub total: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            rank: 0,
            page: 1,
            total: 0,
        }
    }
}

impl PageState {
    pub fn reset(self) -> Self {
        Self { rank: 0, ..self }
    }

    /// Steps back by a fixed amount rather than to the true previous offset.
    pub fn previous(self) -> Self {
        let rank = if self.page > 1 {
            self.rank.saturating_sub(PAGE_STEP)
        } else {
            0
        };
        Self { rank, ..self }
    }

    pub fn next(self) -> Self {
        if self.page < self.total {
            Self {
                rank: self.rank + PAGE_STEP,
                ..self
            }
        } else {
            self
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total
    }

    pub fn at_floor(&self) -> bool {
        self.page <= 1
    }
}

/// Composite key a page fetch is issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageQuery {
    pub rank: u32,
    pub filters: FilterSelection,
}
