/// Page viewport in CSS pixels. Both sides are at least 1 px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

#[inline]
fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(1.0)
    } else {
        1.0
    }
}

/// Pointer position relative to the viewport centre, roughly in [-0.5, 0.5].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorOffset {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub raw_scroll_y: f32,
    pub current_section: usize,
}

/// The current section changed between two scroll samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryCrossed {
    pub from: usize,
    pub to: usize,
}

/// Latest pointer and scroll samples. Every event overwrites; nothing queues.
#[derive(Clone, Debug)]
pub struct InputSampler {
    cursor: CursorOffset,
    scroll: ScrollState,
    section_count: usize,
}

impl InputSampler {
    /// The starting section is 0 even when the page loads already scrolled.
    pub fn new(section_count: usize, initial_scroll_y: f32) -> Self {
        Self {
            cursor: CursorOffset::default(),
            scroll: ScrollState {
                raw_scroll_y: initial_scroll_y,
                current_section: 0,
            },
            section_count: section_count.max(1),
        }
    }

    #[inline]
    pub fn on_pointer_move(&mut self, normalized_x: f32, normalized_y: f32) {
        self.cursor = CursorOffset {
            x: normalized_x,
            y: normalized_y,
        };
    }

    pub fn on_scroll(&mut self, raw_y: f32, viewport_height: f32) -> Option<BoundaryCrossed> {
        self.scroll.raw_scroll_y = raw_y;
        let next = clamp_section(section_index(raw_y, viewport_height), self.section_count);
        let prev = self.scroll.current_section;
        if next == prev {
            return None;
        }
        self.scroll.current_section = next;
        Some(BoundaryCrossed {
            from: prev,
            to: next,
        })
    }

    #[inline]
    pub fn cursor(&self) -> CursorOffset {
        self.cursor
    }

    #[inline]
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }
}

/// Map a pointer position in client pixels to a centred offset.
#[inline]
pub fn normalize_pointer(client_x: f32, client_y: f32, viewport: &Viewport) -> CursorOffset {
    CursorOffset {
        x: client_x / viewport.width - 0.5,
        y: client_y / viewport.height - 0.5,
    }
}

/// Nearest section for a scroll offset, unclamped. Half a section rounds up.
#[inline]
pub fn section_index(scroll_y: f32, viewport_height: f32) -> i64 {
    if !(viewport_height > 0.0) || !scroll_y.is_finite() {
        return 0;
    }
    (scroll_y / viewport_height).round() as i64
}

#[inline]
pub fn clamp_section(index: i64, section_count: usize) -> usize {
    let last = section_count.saturating_sub(1) as i64;
    index.clamp(0, last) as usize
}
