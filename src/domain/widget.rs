// Screenboard widgets: shared frame plus per-variant payload
use crate::domain::layout::{Alignment, Dimensions, Location};
use crate::domain::query::{Query, Request};
use crate::domain::wire_enum::wire_enum;
use crate::error::{Error, Result};

wire_enum! {
    /// Discriminator written as the `type` key of every widget object.
    pub enum WidgetKind("widget type") {
        Note => "note",
        Timeseries => "timeseries",
    }
}

wire_enum! {
    /// Side of a [`Note`] its pointer is drawn on.
    pub enum Edge("tick edge") {
        Left => "left",
        Top => "top",
        Right => "right",
        Bottom => "bottom",
    }
}

wire_enum! {
    pub enum BackgroundColor("background color") {
        Yellow => "yellow",
        Blue => "blue",
        Pink => "pink",
        Gray => "gray",
        White => "white",
        Red => "red",
        Green => "green",
    }
}

wire_enum! {
    /// Time window shown by a chart.
    pub enum Timeframe("timeframe") {
        OneHour => "1h",
        FourHours => "4h",
        OneDay => "1d",
        TwoDays => "2d",
        OneWeek => "1w",
    }
}

/// Attributes every widget carries: placement and title styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetFrame {
    location: Location,
    dimensions: Dimensions,
    title_size: u32,
    title_visible: bool,
    title_alignment: Alignment,
    title: String,
}

impl WidgetFrame {
    pub const DEFAULT_TITLE_SIZE: u32 = 16;
    pub const DEFAULT_TITLE: &'static str = "Title";

    pub fn new(location: Location, dimensions: Dimensions) -> Self {
        Self {
            location,
            dimensions,
            title_size: Self::DEFAULT_TITLE_SIZE,
            title_visible: true,
            title_alignment: Alignment::Left,
            title: Self::DEFAULT_TITLE.to_string(),
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
    }

    pub fn title_size(&self) -> u32 {
        self.title_size
    }

    /// Rejects zero and leaves the previous size in place.
    pub fn set_title_size(&mut self, title_size: u32) -> Result<()> {
        if title_size == 0 {
            return Err(Error::invalid_argument("title size must be positive"));
        }
        self.title_size = title_size;
        Ok(())
    }

    pub fn is_title_visible(&self) -> bool {
        self.title_visible
    }

    pub fn set_title_visible(&mut self, title_visible: bool) {
        self.title_visible = title_visible;
    }

    pub fn title_alignment(&self) -> Alignment {
        self.title_alignment
    }

    pub fn set_title_alignment(&mut self, title_alignment: Alignment) {
        self.title_alignment = title_alignment;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

/// A sticky note with an HTML body and an optional pointer ("tick")
/// annotating a neighbouring widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    frame: WidgetFrame,
    background_color: BackgroundColor,
    text: String,
    font_size: String,
    text_alignment: Alignment,
    tick_visible: bool,
    tick_edge: Edge,
    tick_position: String,
    auto_refresh: bool,
}

impl Note {
    pub const DEFAULT_DIMENSIONS: Dimensions = Dimensions::fixed(30, 15);

    pub fn new(location: Location, dimensions: Dimensions) -> Self {
        Self {
            frame: WidgetFrame::new(location, dimensions),
            background_color: BackgroundColor::Yellow,
            text: "body".to_string(),
            font_size: "14".to_string(),
            text_alignment: Alignment::Left,
            tick_visible: true,
            tick_edge: Edge::Right,
            tick_position: "50%".to_string(),
            auto_refresh: false,
        }
    }

    pub fn at(x: i32, y: i32, width: u32, height: u32) -> Result<Self> {
        Ok(Self::new(Location::new(x, y), Dimensions::new(width, height)?))
    }

    pub fn frame(&self) -> &WidgetFrame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut WidgetFrame {
        &mut self.frame
    }

    pub fn background_color(&self) -> BackgroundColor {
        self.background_color
    }

    pub fn set_background_color(&mut self, background_color: BackgroundColor) {
        self.background_color = background_color;
    }

    /// HTML body of the note.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn font_size(&self) -> &str {
        &self.font_size
    }

    pub fn set_font_size(&mut self, font_size: impl Into<String>) {
        self.font_size = font_size.into();
    }

    pub fn text_alignment(&self) -> Alignment {
        self.text_alignment
    }

    pub fn set_text_alignment(&mut self, text_alignment: Alignment) {
        self.text_alignment = text_alignment;
    }

    pub fn is_tick_visible(&self) -> bool {
        self.tick_visible
    }

    pub fn set_tick_visible(&mut self, tick_visible: bool) {
        self.tick_visible = tick_visible;
    }

    pub fn tick_edge(&self) -> Edge {
        self.tick_edge
    }

    pub fn set_tick_edge(&mut self, tick_edge: Edge) {
        self.tick_edge = tick_edge;
    }

    /// Offset of the tick along its edge, e.g. `"50%"`.
    pub fn tick_position(&self) -> &str {
        &self.tick_position
    }

    pub fn set_tick_position(&mut self, tick_position: impl Into<String>) {
        self.tick_position = tick_position.into();
    }

    pub fn is_auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    pub fn set_auto_refresh(&mut self, auto_refresh: bool) {
        self.auto_refresh = auto_refresh;
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new(Location::default(), Self::DEFAULT_DIMENSIONS)
    }
}

/// Chart payload of a [`Timeseries`]. Both sequences render in insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TileDefinition {
    requests: Vec<Request>,
    events: Vec<Query>,
}

impl TileDefinition {
    pub const VIZ: &'static str = "timeseries";

    pub fn new(requests: Vec<Request>, events: Vec<Query>) -> Self {
        Self { requests, events }
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn events(&self) -> &[Query] {
        &self.events
    }

    pub fn add_request(&mut self, request: Request) {
        self.requests.push(request);
    }

    pub fn add_event(&mut self, event: Query) {
        self.events.push(event);
    }
}

/// Line chart of one or more metric requests over a fixed timeframe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeseries {
    frame: WidgetFrame,
    timeframe: Timeframe,
    tile_definition: TileDefinition,
}

impl Timeseries {
    pub const DEFAULT_DIMENSIONS: Dimensions = Dimensions::fixed(47, 13);

    pub fn new(location: Location, dimensions: Dimensions) -> Self {
        Self {
            frame: WidgetFrame::new(location, dimensions),
            timeframe: Timeframe::OneWeek,
            tile_definition: TileDefinition::default(),
        }
    }

    pub fn at(x: i32, y: i32, width: u32, height: u32) -> Result<Self> {
        Ok(Self::new(Location::new(x, y), Dimensions::new(width, height)?))
    }

    pub fn frame(&self) -> &WidgetFrame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut WidgetFrame {
        &mut self.frame
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }

    pub fn tile_definition(&self) -> &TileDefinition {
        &self.tile_definition
    }

    pub fn tile_definition_mut(&mut self) -> &mut TileDefinition {
        &mut self.tile_definition
    }

    pub fn set_tile_definition(&mut self, tile_definition: TileDefinition) {
        self.tile_definition = tile_definition;
    }
}

impl Default for Timeseries {
    fn default() -> Self {
        Self::new(Location::default(), Self::DEFAULT_DIMENSIONS)
    }
}

/// Any element that can be placed on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Note(Note),
    Timeseries(Timeseries),
}

impl Widget {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::Note(_) => WidgetKind::Note,
            Widget::Timeseries(_) => WidgetKind::Timeseries,
        }
    }

    pub fn frame(&self) -> &WidgetFrame {
        match self {
            Widget::Note(note) => note.frame(),
            Widget::Timeseries(timeseries) => timeseries.frame(),
        }
    }

    pub fn frame_mut(&mut self) -> &mut WidgetFrame {
        match self {
            Widget::Note(note) => note.frame_mut(),
            Widget::Timeseries(timeseries) => timeseries.frame_mut(),
        }
    }
}

impl From<Note> for Widget {
    fn from(note: Note) -> Self {
        Widget::Note(note)
    }
}

impl From<Timeseries> for Widget {
    fn from(timeseries: Timeseries) -> Self {
        Widget::Timeseries(timeseries)
    }
}
