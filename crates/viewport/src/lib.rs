//! Viewport host contract.
//!
//! A viewport host is the scrollable list that actually lays out rows. The
//! calendar components never hold on to it: operations that need to move the
//! viewport take `&mut impl ViewportHost` and issue commands on it.
//!
//! ```text
//! component ──scroll_to_offset / scroll_to_index──▶ host
//! host ──visible indices / measured sizes──▶ component methods
//! host ──item_layout(index)?──▶ component
//! ```
//!
//! `Vec<ScrollCommand>` implements [`ViewportHost`] and simply records every
//! command, which is what tests and headless callers use.

/// One imperative scroll command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    /// Scroll so that the content offset equals `offset` pixels.
    ToOffset {
        /// Target offset along the scroll axis.
        offset: f64,
        /// Whether the host should animate the move.
        animated: bool,
    },
    /// Scroll so that row `index` is at the leading edge.
    ToIndex {
        /// Target row index.
        index: usize,
        /// Whether the host should animate the move.
        animated: bool,
    },
}

impl ScrollCommand {
    /// Returns the offset of a [`ScrollCommand::ToOffset`] command.
    pub fn offset(&self) -> Option<f64> {
        match self {
            Self::ToOffset { offset, .. } => Some(*offset),
            Self::ToIndex { .. } => None,
        }
    }

    /// Returns whether the command asks for animation.
    pub fn animated(&self) -> bool {
        match self {
            Self::ToOffset { animated, .. } | Self::ToIndex { animated, .. } => *animated,
        }
    }
}

/// Receiver of imperative scroll commands.
pub trait ViewportHost {
    /// Scrolls to an absolute offset along the scroll axis.
    fn scroll_to_offset(&mut self, offset: f64, animated: bool);

    /// Scrolls to bring a row to the leading edge.
    fn scroll_to_index(&mut self, index: usize, animated: bool);
}

impl ViewportHost for Vec<ScrollCommand> {
    fn scroll_to_offset(&mut self, offset: f64, animated: bool) {
        self.push(ScrollCommand::ToOffset { offset, animated });
    }

    fn scroll_to_index(&mut self, index: usize, animated: bool) {
        self.push(ScrollCommand::ToIndex { index, animated });
    }
}

impl<H: ViewportHost + ?Sized> ViewportHost for &mut H {
    fn scroll_to_offset(&mut self, offset: f64, animated: bool) {
        (**self).scroll_to_offset(offset, animated);
    }

    fn scroll_to_index(&mut self, index: usize, animated: bool) {
        (**self).scroll_to_index(index, animated);
    }
}

/// Extent of one row as answered to the host's layout queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    /// Row extent along the scroll axis.
    pub length: f64,
    /// Offset of the row's leading edge.
    pub offset: f64,
    /// Row index.
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn drive(host: &mut impl ViewportHost) {
        host.scroll_to_offset(120.5, true);
        host.scroll_to_index(3, false);
    }

    #[test]
    fn vec_records_commands_in_order() {
        let mut host: Vec<ScrollCommand> = Vec::new();
        drive(&mut host);
        assert_eq!(
            host,
            vec![
                ScrollCommand::ToOffset {
                    offset: 120.5,
                    animated: true
                },
                ScrollCommand::ToIndex {
                    index: 3,
                    animated: false
                },
            ]
        );
    }

    #[test]
    fn command_accessors() {
        let cmd = ScrollCommand::ToOffset {
            offset: 46.0,
            animated: false,
        };
        assert_abs_diff_eq!(cmd.offset().unwrap(), 46.0);
        assert!(!cmd.animated());
        let idx = ScrollCommand::ToIndex {
            index: 1,
            animated: true,
        };
        assert_eq!(idx.offset(), None);
        assert!(idx.animated());
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut host: Vec<ScrollCommand> = Vec::new();
        {
            let mut borrowed = &mut host;
            drive(&mut borrowed);
        }
        assert_eq!(host.len(), 2);
    }
}
