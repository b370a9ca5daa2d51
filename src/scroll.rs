// Scroll extent query for the element a trigger is attached to
use web_sys::HtmlElement;

/// Maximum scroll offset per axis: content size minus visible size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollExtent {
    pub x: f64,
    pub y: f64,
}

/// Current `scrollLeft` / `scrollTop`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

/// Anything the tracker can ask about scroll position. Only queried when
/// scroll sync is active.
pub trait ScrollSource {
    fn scroll_offset(&self) -> ScrollOffset;
    fn scroll_extent(&self) -> ScrollExtent;
}

impl ScrollSource for HtmlElement {
    fn scroll_offset(&self) -> ScrollOffset {
        ScrollOffset {
            x: self.scroll_left() as f64,
            y: self.scroll_top() as f64,
        }
    }

    fn scroll_extent(&self) -> ScrollExtent {
        ScrollExtent {
            x: (self.scroll_width() - self.offset_width()) as f64,
            y: (self.scroll_height() - self.offset_height()) as f64,
        }
    }
}

/// Fixed scroll metrics, for hosts that track scrolling themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedScroll {
    pub offset: ScrollOffset,
    pub extent: ScrollExtent,
}

impl FixedScroll {
    pub fn new(offset: (f64, f64), extent: (f64, f64)) -> Self {
        Self {
            offset: ScrollOffset { x: offset.0, y: offset.1 },
            extent: ScrollExtent { x: extent.0, y: extent.1 },
        }
    }
}

impl ScrollSource for FixedScroll {
    fn scroll_offset(&self) -> ScrollOffset {
        self.offset
    }

    fn scroll_extent(&self) -> ScrollExtent {
        self.extent
    }
}
