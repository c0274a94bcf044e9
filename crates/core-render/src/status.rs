//! Status line composition.
//!
//! Layout on the bottom row, `pad` cells from each edge:
//! `<pad>[MODE] <error>` on the left, `<info><pad>` right-aligned. Info is
//! dropped when it would collide with the left part; the left part is cut at
//! the terminal width.

use crate::cells::{display_width, truncate_to_width};
use core_state::Mode;

/// What the status line needs from the session and the host.
pub struct StatusContext<'a> {
    pub mode: Mode,
    /// Last dispatch error, already formatted.
    pub error: Option<&'a str>,
    /// Host info (last key, iteration count), right-aligned.
    pub info: Option<&'a str>,
    pub pad: u16,
    pub cols: u16,
}

/// Render the status row to exactly `cols` cells.
pub fn status_line(ctx: &StatusContext<'_>) -> String {
    let cols = usize::from(ctx.cols);
    let pad = usize::from(ctx.pad);

    let mut left = " ".repeat(pad);
    left.push_str(&ctx.mode.label());
    if let Some(err) = ctx.error {
        left.push(' ');
        left.push_str(err);
    }
    let mut line = truncate_to_width(&left, cols);
    let mut used = display_width(&line);

    if let Some(info) = ctx.info {
        let info = truncate_to_width(info, cols);
        let info_w = display_width(&info);
        // one blank cell between the two halves
        if used + 1 + info_w + pad <= cols {
            let gap = cols - pad - info_w - used;
            line.push_str(&" ".repeat(gap));
            line.push_str(&info);
            used += gap + info_w;
        }
    }
    line.push_str(&" ".repeat(cols.saturating_sub(used)));
    line
}
