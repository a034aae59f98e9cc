use crate::model::ParsedPages;
use crate::slice::fixed_slices;

/// Character widths of the 8 statement fields on every data-region line.
pub(crate) const FIELD_WIDTHS: [usize; 8] = [20, 6, 7, 8, 22, 4, 17, 17];

/// A separator line starts with this run of dashes.
const SEPARATOR_PREFIX: &str = "--------------------";

/// Page-break filler lines carry this run of asterisks.
const PAGE_BREAK_FILLER: &str = "*****************";

/// Zone of the report page the scanner is currently in. Every separator line
/// advances the cycle; only the third zone (between the 2nd and 3rd separator
/// of each group) holds transaction rows. A page whose separators never reach
/// that point simply contributes no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageZone {
    Header,
    ColumnTitles,
    Data,
}

impl PageZone {
    fn advance(self) -> Self {
        match self {
            Self::Header => Self::ColumnTitles,
            Self::ColumnTitles => Self::Data,
            Self::Data => Self::Header,
        }
    }
}

/// Scans raw report lines, keeps only data-region lines and slices each of
/// them into the 8 fixed-width cells.
pub(crate) fn parse_pages(text: &str) -> ParsedPages {
    let mut rows = Vec::new();
    let mut zone = PageZone::Header;
    let mut page_count = 0;

    for line in text.lines() {
        let line = line.trim_end_matches('\r');

        if line.starts_with(SEPARATOR_PREFIX) {
            zone = zone.advance();
            if zone == PageZone::Data {
                page_count += 1;
            }
            continue;
        }

        if zone != PageZone::Data {
            continue;
        }

        if line.contains(PAGE_BREAK_FILLER) {
            continue;
        }

        rows.push(fixed_slices(line, &FIELD_WIDTHS));
    }

    ParsedPages { rows, page_count }
}
