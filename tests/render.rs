use sketchboard::config::Config;
use sketchboard::draw::{Rgba, Surface};
use sketchboard::input::{BoardMode, CanvasState, EventQueue, InputEvent, Tool};
use sketchboard::relay::{self, RelayMessage};

fn small_board(mode: BoardMode) -> CanvasState {
    let mut config = Config::default();
    config.canvas.width = 160;
    config.canvas.height = 120;
    CanvasState::new(&config, mode).unwrap()
}

fn at(frame: &mut Surface, x: i32, y: i32) -> Rgba {
    frame.pixel(x, y).unwrap().unwrap()
}

fn is_light_background(p: Rgba) -> bool {
    (p.r, p.g, p.b) == (248, 249, 250)
}

fn is_dark(p: Rgba) -> bool {
    p.r < 80 && p.g < 80 && p.b < 80
}

fn drag(queue: &EventQueue, tool: Tool, from: (f64, f64), to: (f64, f64)) {
    queue.push(InputEvent::SelectTool { tool });
    queue.push(InputEvent::PointerDown { x: from.0, y: from.1 });
    queue.push(InputEvent::PointerMove { x: to.0, y: to.1 });
    queue.push(InputEvent::PointerUp);
}

#[test]
fn circle_radius_is_distance_to_pointer() {
    let mut board = small_board(BoardMode::Light);
    let queue = EventQueue::new();
    drag(&queue, Tool::Circle, (40.0, 40.0), (43.0, 44.0));
    queue.dispatch(&mut board).unwrap();

    let mut frame = board.composite().unwrap();
    assert!(is_dark(at(&mut frame, 45, 40)));
    assert!(is_dark(at(&mut frame, 34, 40)));
    assert!(is_light_background(at(&mut frame, 40, 40)));
    assert!(is_light_background(at(&mut frame, 48, 40)));
}

#[test]
fn filled_rectangle_through_the_queue() {
    let mut board = small_board(BoardMode::Light);
    let queue = EventQueue::new();
    queue.push(InputEvent::SetFillColor {
        color: "#0000ff".to_string(),
    });
    drag(&queue, Tool::Rectangle, (60.0, 50.0), (20.0, 20.0));
    assert_eq!(queue.dispatch(&mut board).unwrap(), 5);

    let mut frame = board.composite().unwrap();
    let inside = at(&mut frame, 40, 35);
    assert!(inside.b > 200 && inside.r < 60);
    // Fill goes over the inner half of the outline.
    assert!(is_dark(at(&mut frame, 19, 35)));
    assert!(is_light_background(at(&mut frame, 70, 35)));
    assert_eq!(board.history().len(), 1);
}

#[test]
fn dashed_line_leaves_gaps() {
    let mut board = small_board(BoardMode::Light);
    let queue = EventQueue::new();
    queue.push(InputEvent::SetBrushStyle {
        style: sketchboard::draw::DashStyle::Dashed,
    });
    queue.push(InputEvent::SetLineCap {
        cap: sketchboard::draw::LineCap::Butt,
    });
    drag(&queue, Tool::Line, (0.0, 60.0), (160.0, 60.0));
    queue.dispatch(&mut board).unwrap();

    let mut frame = board.composite().unwrap();
    // 10 on, 5 off starting at x = 0
    assert!(is_dark(at(&mut frame, 5, 60)));
    assert!(is_light_background(at(&mut frame, 12, 60)));
    assert!(is_dark(at(&mut frame, 20, 60)));
}

#[test]
fn arrow_head_sits_at_release_point() {
    let mut board = small_board(BoardMode::Light);
    let queue = EventQueue::new();
    drag(&queue, Tool::Arrow, (10.0, 60.0), (150.0, 60.0));
    queue.dispatch(&mut board).unwrap();

    let mut frame = board.composite().unwrap();
    assert!(is_dark(at(&mut frame, 80, 60)));
    // Head strokes leave the tip backwards at 30 degrees.
    assert!(is_dark(at(&mut frame, 141, 55)));
    assert!(is_dark(at(&mut frame, 141, 65)));
    assert!(is_light_background(at(&mut frame, 20, 55)));
}

#[test]
fn relay_segment_mid_drag_is_not_overwritten() {
    let mut board = small_board(BoardMode::Light);
    let queue = EventQueue::new();
    let remote = queue.sender();

    queue.push(InputEvent::SelectTool {
        tool: Tool::Ellipse,
    });
    queue.push(InputEvent::PointerDown { x: 40.0, y: 40.0 });
    queue.push(InputEvent::PointerMove { x: 60.0, y: 55.0 });

    let RelayMessage::Draw(segment) = relay::parse_message(
        r#"{"event":"draw","prevX":100,"prevY":100,"currentX":150,"currentY":100,
            "color":"green","size":4,"style":"solid","opacity":1}"#,
    )
    .unwrap();
    assert!(remote.send(InputEvent::Draw(segment)));

    queue.push(InputEvent::PointerMove { x: 70.0, y: 60.0 });
    queue.dispatch(&mut board).unwrap();

    let mut frame = board.composite().unwrap();
    let p = at(&mut frame, 125, 100);
    assert!(p.g > 100 && p.r < 40 && p.b < 40);

    queue.push(InputEvent::PointerUp);
    queue.dispatch(&mut board).unwrap();
    let mut frame = board.composite().unwrap();
    let p = at(&mut frame, 125, 100);
    assert!(p.g > 100 && p.r < 40 && p.b < 40);
    assert_eq!(board.history().len(), 1);
}

#[test]
fn local_freehand_is_offered_to_the_relay() {
    let mut board = small_board(BoardMode::Light);
    let queue = EventQueue::new();
    queue.push(InputEvent::SetStrokeColor {
        color: "pink".to_string(),
    });
    queue.push(InputEvent::PointerDown { x: 10.0, y: 10.0 });
    queue.push(InputEvent::PointerMove { x: 30.0, y: 10.0 });
    queue.push(InputEvent::PointerUp);
    queue.dispatch(&mut board).unwrap();

    let outgoing = board.take_outgoing();
    assert_eq!(outgoing.len(), 1);
    assert_eq!(outgoing[0].color, "#ffc0cb");

    // With the default round caps a peer replaying the broadcast gets the
    // same pixels; other caps are not carried on the wire.
    let mut peer = small_board(BoardMode::Light);
    let json = relay::encode_message(&RelayMessage::Draw(outgoing[0].clone())).unwrap();
    let RelayMessage::Draw(segment) = relay::parse_message(&json).unwrap();
    peer.on_remote_segment(&segment).unwrap();

    let mut mine = board.composite().unwrap();
    let mut theirs = peer.composite().unwrap();
    assert_eq!(mine.snapshot().unwrap(), theirs.snapshot().unwrap());
}

#[test]
fn dark_board_starts_dark() {
    let mut board = small_board(BoardMode::Dark);
    let mut frame = board.composite().unwrap();
    let p = at(&mut frame, 80, 60);
    assert_eq!((p.r, p.g, p.b, p.a), (0x33, 0x33, 0x33, 255));
}
