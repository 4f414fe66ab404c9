/// Horizontal (x) and vertical (y) measurement in printer points (1/72 inch).
/// The origin is the lower left corner of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Fixed page measurements for one sheet of labels.
///
/// Constructed once per run and passed by reference into the layout
/// planner and the page compositor; never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SheetGeometry {
    /// US Letter.
    pub page_size: Point,
    /// Printed area of one code, 2 in x 2 in.
    pub label_size: Point,
    /// Blank border between a cell's bounding box and its printed content.
    pub label_margin: Point,
    /// Blank border at the page edge before any cell starts.
    pub page_offset: Point,
    /// Nudge applied to the caption anchor so the title clears the code.
    pub title_adjustment: Point,
}

impl SheetGeometry {
    pub const fn letter() -> Self {
        Self {
            page_size: Point::new(612, 792),
            label_size: Point::new(144, 144),
            label_margin: Point::new(18, 18),
            page_offset: Point::new(36, 36),
            title_adjustment: Point::new(20, -9),
        }
    }

    /// Full footprint of one grid cell including margin.
    pub const fn background_size(&self) -> Point {
        Point::new(
            self.label_size.x + self.label_margin.x * 2,
            self.label_size.y + self.label_margin.y * 2,
        )
    }

    /// Compute every label position on one page, in row-major order
    /// scanning top-to-bottom, left-to-right.
    ///
    /// The vertical walk is inclusive of 0 and the horizontal walk stops
    /// strictly before its bound; the cell count per page falls out of
    /// the measurements rather than being configured separately.
    pub fn compute_layout(&self) -> LayoutPlan {
        let background = self.background_size();
        let vertical_start = background.y * 3 + self.page_offset.y;
        let horizontal_stop = background.x * 3 + self.page_offset.x - 1;

        let mut cells = Vec::new();
        let mut vertical_position = vertical_start;
        while vertical_position >= 0 {
            let mut horizontal_position = self.page_offset.x;
            while horizontal_position < horizontal_stop {
                cells.push(LabelCell::new(
                    Point::new(horizontal_position, vertical_position),
                    self,
                ));
                horizontal_position += background.x;
            }
            vertical_position -= background.y;
        }
        LayoutPlan { cells }
    }
}

/// Measurements for one label cell on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelCell {
    pub offset_on_page: Point,
    pub lower_left: Point,
    pub lower_right: Point,
    pub upper_left: Point,
    pub upper_right: Point,
    /// Origin anchor for the code image.
    pub image_start: Point,
    /// Anchor for the caption text, before the title adjustment.
    pub title_start: Point,
}

impl LabelCell {
    fn new(offset_on_page: Point, geometry: &SheetGeometry) -> Self {
        let background = geometry.background_size();
        let lower_left = offset_on_page;
        let lower_right = Point::new(lower_left.x + background.x, lower_left.y);
        let upper_left = Point::new(lower_left.x, lower_left.y + background.y);
        let upper_right = Point::new(lower_left.x + background.x, lower_left.y + background.y);
        Self {
            offset_on_page,
            lower_left,
            lower_right,
            upper_left,
            upper_right,
            image_start: Point::new(
                lower_left.x + geometry.label_margin.x,
                lower_left.y + geometry.label_margin.y,
            ),
            title_start: Point::new(
                upper_left.x + geometry.label_size.x / 2,
                upper_left.y - geometry.label_margin.y,
            ),
        }
    }
}

/// The label positions of one page, computed once and shared read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutPlan {
    pub cells: Vec<LabelCell>,
}
