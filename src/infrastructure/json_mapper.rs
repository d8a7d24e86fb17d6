// Mapper between domain boards and the screenboard JSON wire format
use crate::domain::board::Board;
use crate::domain::layout::{Dimensions, Location};
use crate::domain::query::{Query, Request};
use crate::domain::widget::{Note, TileDefinition, Timeseries, Widget, WidgetFrame, WidgetKind};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
struct BoardWire<W> {
    board_title: String,
    #[serde(default)]
    read_only: bool,
    #[serde(default = "Vec::new")]
    widgets: Vec<W>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WidgetWire {
    Note(NoteWire),
    Timeseries(TimeseriesWire),
}

/// Keys shared by every widget. Only the geometry is required; absent title
/// keys keep the variant defaults.
#[derive(Debug, Serialize, Deserialize)]
struct FrameWire {
    height: i64,
    width: i64,
    x: i32,
    y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title_text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NoteWire {
    #[serde(flatten)]
    frame: FrameWire,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bgcolor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tick: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tick_pos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tick_edge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auto_refresh: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TimeseriesWire {
    #[serde(flatten)]
    frame: FrameWire,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeframe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tile_def: Option<TileDefWire>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TileDefWire {
    #[serde(default = "default_viz")]
    viz: String,
    #[serde(default)]
    requests: Vec<RequestWire>,
    #[serde(default)]
    events: Vec<QueryWire>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RequestWire {
    #[serde(default)]
    stacked: bool,
    q: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct QueryWire {
    q: String,
}

fn default_viz() -> String {
    TileDefinition::VIZ.to_string()
}

pub fn board_to_json(board: &Board) -> Result<String> {
    Ok(serde_json::to_string(&board_to_wire(board))?)
}

/// Decode a board document, ignoring keys the model does not know.
pub fn board_from_json(json: &str) -> Result<Board> {
    let wire: BoardWire<Value> = serde_json::from_str(json)?;
    let widgets = wire
        .widgets
        .into_iter()
        .map(widget_from_value)
        .collect::<Result<Vec<_>>>()?;

    Ok(Board {
        title: wire.board_title,
        read_only: wire.read_only,
        widgets,
    })
}

pub fn widget_to_json(widget: &Widget) -> Result<String> {
    Ok(serde_json::to_string(&widget_to_wire(widget))?)
}

pub fn widget_from_json(json: &str) -> Result<Widget> {
    widget_from_value(serde_json::from_str(json)?)
}

/// Dispatch on the `type` discriminator to the matching variant.
pub fn widget_from_value(value: Value) -> Result<Widget> {
    let tag = value
        .get("type")
        .ok_or_else(|| Error::malformed("widget is missing its \"type\" key"))?
        .as_str()
        .ok_or_else(|| Error::malformed("widget \"type\" is not a string"))?;
    let kind =
        WidgetKind::from_wire(tag).ok_or_else(|| Error::UnknownWidgetType(tag.to_string()))?;

    match kind {
        WidgetKind::Note => note_from_wire(serde_json::from_value(value)?).map(Widget::Note),
        WidgetKind::Timeseries => {
            timeseries_from_wire(serde_json::from_value(value)?).map(Widget::Timeseries)
        }
    }
}

fn board_to_wire(board: &Board) -> BoardWire<WidgetWire> {
    BoardWire {
        board_title: board.title.clone(),
        read_only: board.read_only,
        widgets: board.widgets.iter().map(widget_to_wire).collect(),
    }
}

fn widget_to_wire(widget: &Widget) -> WidgetWire {
    match widget {
        Widget::Note(note) => WidgetWire::Note(note_to_wire(note)),
        Widget::Timeseries(timeseries) => WidgetWire::Timeseries(timeseries_to_wire(timeseries)),
    }
}

fn frame_to_wire(frame: &WidgetFrame) -> FrameWire {
    let location = frame.location();
    let dimensions = frame.dimensions();
    FrameWire {
        height: dimensions.height().into(),
        width: dimensions.width().into(),
        x: location.x,
        y: location.y,
        title_size: Some(frame.title_size().into()),
        title: Some(frame.is_title_visible()),
        title_align: Some(frame.title_alignment().as_wire().to_string()),
        title_text: Some(frame.title().to_string()),
    }
}

fn note_to_wire(note: &Note) -> NoteWire {
    NoteWire {
        frame: frame_to_wire(note.frame()),
        bgcolor: Some(note.background_color().as_wire().to_string()),
        html: Some(note.text().to_string()),
        font_size: Some(note.font_size().to_string()),
        text_align: Some(note.text_alignment().as_wire().to_string()),
        tick: Some(note.is_tick_visible()),
        tick_pos: Some(note.tick_position().to_string()),
        tick_edge: Some(note.tick_edge().as_wire().to_string()),
        auto_refresh: Some(note.is_auto_refresh()),
    }
}

fn timeseries_to_wire(timeseries: &Timeseries) -> TimeseriesWire {
    let tile = timeseries.tile_definition();
    TimeseriesWire {
        frame: frame_to_wire(timeseries.frame()),
        timeframe: Some(timeseries.timeframe().as_wire().to_string()),
        tile_def: Some(TileDefWire {
            viz: default_viz(),
            requests: tile
                .requests()
                .iter()
                .map(|r| RequestWire {
                    stacked: r.is_stacked(),
                    q: r.query().to_string(),
                })
                .collect(),
            events: tile
                .events()
                .iter()
                .map(|e| QueryWire {
                    q: e.value().to_string(),
                })
                .collect(),
        }),
    }
}

/// Overlay the wire title keys onto a frame that already holds the
/// variant defaults.
fn apply_frame(frame: &mut WidgetFrame, wire: FrameWire) -> Result<()> {
    if let Some(size) = wire.title_size {
        frame.set_title_size(positive("title_size", size)?)?;
    }
    if let Some(visible) = wire.title {
        frame.set_title_visible(visible);
    }
    if let Some(align) = wire.title_align {
        frame.set_title_alignment(align.parse()?);
    }
    if let Some(text) = wire.title_text {
        frame.set_title(text);
    }
    Ok(())
}

/// Sizes arrive as any JSON integer; zero, negative and oversized values
/// are all rejected here as invalid arguments.
fn positive(key: &str, value: i64) -> Result<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| Error::invalid_argument(format!("{} must be positive, got {}", key, value)))
}

fn placement(wire: &FrameWire) -> Result<(Location, Dimensions)> {
    Ok((
        Location::new(wire.x, wire.y),
        Dimensions::new(positive("width", wire.width)?, positive("height", wire.height)?)?,
    ))
}

fn note_from_wire(wire: NoteWire) -> Result<Note> {
    let (location, dimensions) = placement(&wire.frame)?;
    let mut note = Note::new(location, dimensions);
    apply_frame(note.frame_mut(), wire.frame)?;

    if let Some(color) = wire.bgcolor {
        note.set_background_color(color.parse()?);
    }
    if let Some(html) = wire.html {
        note.set_text(html);
    }
    if let Some(font_size) = wire.font_size {
        note.set_font_size(font_size);
    }
    if let Some(align) = wire.text_align {
        note.set_text_alignment(align.parse()?);
    }
    if let Some(tick) = wire.tick {
        note.set_tick_visible(tick);
    }
    if let Some(position) = wire.tick_pos {
        note.set_tick_position(position);
    }
    if let Some(edge) = wire.tick_edge {
        note.set_tick_edge(edge.parse()?);
    }
    if let Some(auto_refresh) = wire.auto_refresh {
        note.set_auto_refresh(auto_refresh);
    }
    Ok(note)
}

fn timeseries_from_wire(wire: TimeseriesWire) -> Result<Timeseries> {
    let (location, dimensions) = placement(&wire.frame)?;
    let mut timeseries = Timeseries::new(location, dimensions);
    apply_frame(timeseries.frame_mut(), wire.frame)?;

    if let Some(timeframe) = wire.timeframe {
        timeseries.set_timeframe(timeframe.parse()?);
    }
    if let Some(tile) = wire.tile_def {
        // Only timeseries charts are modelled.
        if tile.viz != TileDefinition::VIZ {
            return Err(Error::malformed(format!(
                "timeseries tile_def has viz {:?}",
                tile.viz
            )));
        }
        timeseries.set_tile_definition(TileDefinition::new(
            tile.requests
                .into_iter()
                .map(|r| Request::new(r.q, r.stacked))
                .collect(),
            tile.events.into_iter().map(|e| Query::new(e.q)).collect(),
        ));
    }
    Ok(timeseries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::Alignment;
    use crate::domain::query::Aggregator;
    use crate::domain::widget::{BackgroundColor, Edge, Timeframe};
    use serde_json::json;

    const TIMESERIES_PREFIX: &str = "{\"type\":\"timeseries\",\"height\":13,\"width\":47,\"x\":0,\"y\":0,\
        \"title_size\":16,\"title\":true,\"title_align\":\"left\",\"title_text\":\"Title\",\
        \"timeframe\":\"1w\",\"tile_def\":{\"viz\":\"timeseries\",\"requests\":";

    fn timeseries_with(request: Request) -> Widget {
        let mut timeseries = Timeseries::default();
        timeseries.tile_definition_mut().add_event(Query::new(""));
        timeseries.tile_definition_mut().add_request(request);
        Widget::Timeseries(timeseries)
    }

    #[test]
    fn test_timeseries_serialization() {
        let widget = timeseries_with(Request::create(Aggregator::Average, "test.user.data").unwrap());
        assert_eq!(
            widget_to_json(&widget).unwrap(),
            format!(
                "{}[{{\"stacked\":false,\"q\":\"avg:test.user.data{{*}}\"}}],\"events\":[{{\"q\":\"\"}}]}}}}",
                TIMESERIES_PREFIX
            )
        );
    }

    #[test]
    fn test_stacked_timeseries_serialization() {
        let widget = timeseries_with(
            Request::grouped_with_stacking(
                Aggregator::Average,
                "test.user.data",
                "test.user.breakdown",
                true,
            )
            .unwrap(),
        );
        assert_eq!(
            widget_to_json(&widget).unwrap(),
            format!(
                "{}[{{\"stacked\":true,\"q\":\"avg:test.user.data{{*}} by {{test.user.breakdown}}\"}}],\"events\":[{{\"q\":\"\"}}]}}}}",
                TIMESERIES_PREFIX
            )
        );
    }

    #[test]
    fn test_scoped_timeseries_serialization() {
        let widget = timeseries_with(
            Request::scoped(
                Aggregator::Average,
                "test.user.data",
                "over",
                Some("test.user.breakdown"),
                true,
            )
            .unwrap(),
        );
        assert_eq!(
            widget_to_json(&widget).unwrap(),
            format!(
                "{}[{{\"stacked\":true,\"q\":\"avg:test.user.data{{over}} by {{test.user.breakdown}}\"}}],\"events\":[{{\"q\":\"\"}}]}}}}",
                TIMESERIES_PREFIX
            )
        );
    }

    #[test]
    fn test_empty_timeseries_serialization() {
        let json = widget_to_json(&Widget::Timeseries(Timeseries::default())).unwrap();
        assert_eq!(
            json,
            format!("{}[],\"events\":[]}}}}", TIMESERIES_PREFIX)
        );
    }

    #[test]
    fn test_timeseries_deserialization() {
        let widget = widget_from_json(
            "{\"type\":\"timeseries\",\"height\":14,\"width\":47,\"x\":1,\"y\":1,\"title_size\":17,\
             \"title\":false,\"title_align\":\"right\",\"title_text\":\"Not My Metric\",\
             \"timeframe\":\"1d\",\"tile_def\":{\"viz\":\"timeseries\",\
             \"requests\":[{\"q\":\"query1\",\"stacked\":true}],\"events\":[{\"q\":\"query2\"}]}}",
        )
        .unwrap();

        let timeseries = match widget {
            Widget::Timeseries(timeseries) => timeseries,
            other => panic!("expected a timeseries, got {:?}", other),
        };
        let frame = timeseries.frame();
        assert_eq!(frame.dimensions().height(), 14);
        assert_eq!(frame.dimensions().width(), 47);
        assert_eq!(frame.location(), Location::new(1, 1));
        assert_eq!(frame.title_size(), 17);
        assert!(!frame.is_title_visible());
        assert_eq!(frame.title_alignment(), Alignment::Right);
        assert_eq!(frame.title(), "Not My Metric");
        assert_eq!(timeseries.timeframe(), Timeframe::OneDay);

        let tile = timeseries.tile_definition();
        assert_eq!(tile.requests()[0].query(), "query1");
        assert!(tile.requests()[0].is_stacked());
        assert_eq!(tile.events()[0].value(), "query2");
    }

    #[test]
    fn test_note_serialization() {
        let value: Value =
            serde_json::from_str(&widget_to_json(&Widget::Note(Note::default())).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "note",
                "height": 15,
                "width": 30,
                "x": 0,
                "y": 0,
                "title_size": 16,
                "title": true,
                "title_align": "left",
                "title_text": "Title",
                "bgcolor": "yellow",
                "html": "body",
                "font_size": "14",
                "text_align": "left",
                "tick": true,
                "tick_pos": "50%",
                "tick_edge": "right",
                "auto_refresh": false
            })
        );
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let widget =
            widget_from_json(r#"{"type":"note","x":-2,"y":3,"width":10,"height":4,"bgcolor":"red"}"#)
                .unwrap();
        let mut expected = Note::at(-2, 3, 10, 4).unwrap();
        expected.set_background_color(BackgroundColor::Red);
        assert_eq!(widget, Widget::Note(expected));
    }

    #[test]
    fn test_board_round_trip() {
        let mut note = Note::at(0, 0, 20, 8).unwrap();
        note.set_text("<b>on call</b>");
        note.set_tick_edge(Edge::Bottom);
        note.set_text_alignment(Alignment::Center);
        note.set_auto_refresh(true);
        note.frame_mut().set_title("Notes");

        let mut chart = Timeseries::at(21, 0, 47, 13).unwrap();
        chart.set_timeframe(Timeframe::FourHours);
        let tile = chart.tile_definition_mut();
        tile.add_request(Request::grouped(Aggregator::Sum, "web.hits", "host").unwrap());
        tile.add_request(Request::create(Aggregator::Maximum, "web.latency").unwrap());
        tile.add_event(Query::new("tags:deploy"));
        tile.add_event(Query::new("tags:incident"));

        let mut board = Board::new("Web tier").with_widget(chart).with_widget(note);
        board.read_only = true;

        let decoded = board_from_json(&board_to_json(&board).unwrap()).unwrap();
        assert_eq!(decoded, board);
    }

    #[test]
    fn test_board_wire_shape() {
        let board = Board::new("Empty");
        assert_eq!(
            board_to_json(&board).unwrap(),
            r#"{"board_title":"Empty","read_only":false,"widgets":[]}"#
        );
    }

    #[test]
    fn test_board_ignores_unknown_keys() {
        let board = board_from_json(
            r#"{"id":42,"created":"2013-08-01","board_title":"Remote","widgets":[
                {"type":"note","x":0,"y":0,"width":30,"height":15,"is_shared":false}
            ]}"#,
        )
        .unwrap();
        assert_eq!(board.title, "Remote");
        assert_eq!(board.widgets, vec![Widget::Note(Note::default())]);
    }

    #[test]
    fn test_unknown_widget_type() {
        let err = widget_from_json(r#"{"type":"unknown_widget","x":0,"y":0,"width":1,"height":1}"#)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownWidgetType(ref tag) if tag == "unknown_widget"));

        let err = board_from_json(r#"{"board_title":"b","widgets":[{"type":"unknown_widget"}]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownWidgetType(_)));
    }

    #[test]
    fn test_unknown_enum_value() {
        let err = widget_from_json(
            r#"{"type":"note","x":0,"y":0,"width":1,"height":1,"tick_edge":"diagonal"}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownEnumValue { kind: "tick edge", ref value } if value == "diagonal"
        ));
    }

    #[test]
    fn test_non_positive_sizes_are_invalid_arguments() {
        for json in [
            r#"{"type":"note","x":0,"y":0,"width":0,"height":1}"#,
            r#"{"type":"note","x":0,"y":0,"width":-1,"height":1}"#,
            r#"{"type":"timeseries","x":0,"y":0,"width":1,"height":-7}"#,
            r#"{"type":"timeseries","x":0,"y":0,"width":1,"height":4294967296}"#,
            r#"{"type":"note","x":0,"y":0,"width":1,"height":1,"title_size":0}"#,
            r#"{"type":"note","x":0,"y":0,"width":1,"height":1,"title_size":-3}"#,
        ] {
            let err = widget_from_json(json).unwrap_err();
            assert!(
                matches!(err, Error::InvalidArgument { .. }),
                "{} produced {:?}",
                json,
                err
            );
        }
    }

    #[test]
    fn test_foreign_viz_rejected() {
        let err = widget_from_json(
            r#"{"type":"timeseries","x":0,"y":0,"width":47,"height":13,
                "tile_def":{"viz":"toplist","requests":[],"events":[]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { ref reason } if reason.contains("toplist")));

        let widget = widget_from_json(
            r#"{"type":"timeseries","x":0,"y":0,"width":47,"height":13,"tile_def":{"requests":[]}}"#,
        )
        .unwrap();
        assert_eq!(widget, Widget::Timeseries(Timeseries::default()));
    }

    #[test]
    fn test_malformed_documents() {
        for json in [
            r#"{"widgets":[]}"#,
            r#"{"board_title":"b","widgets":[{"x":0,"y":0,"width":1,"height":1}]}"#,
            r#"{"board_title":"b","widgets":[{"type":"note","x":0,"y":0,"width":1}]}"#,
            r#"{"board_title":"b","widgets":[{"type":"note","x":"0","y":0,"width":1,"height":1}]}"#,
            r#"{"board_title":"b","widgets":[{"type":7}]}"#,
            "not json",
        ] {
            let err = board_from_json(json).unwrap_err();
            assert!(
                matches!(err, Error::MalformedDocument { .. }),
                "{} produced {:?}",
                json,
                err
            );
        }
    }
}
