use rectangles::frame::{DEFAULT_RANDOM_COUNT, DEFAULT_RANDOM_RANGE};
use rectangles::random::RandomSource;
use rectangles::recording::{Command, RecordingBackend};
use rectangles::{BufferUsage, Color, DrawDriver, Frame, Rectangle, Resolution};

fn ready_driver() -> DrawDriver<RecordingBackend> {
    let mut driver = DrawDriver::new(RecordingBackend::new());
    driver.configure().unwrap();
    driver
}

#[test]
fn single_rectangle_frame() {
    let mut driver = ready_driver();
    let frame = Frame::single(Rectangle::new(10.0, 20.0, 70.0, 10.0), Some(Color::BLACK));

    driver.render(&frame, Resolution::new(800, 600)).unwrap();

    #[rustfmt::skip]
    let positions = vec![
        10.0, 20.0,
        80.0, 20.0,
        10.0, 30.0,
        10.0, 30.0,
        80.0, 20.0,
        80.0, 30.0,
    ];

    assert_eq!(
        driver.backend().commands(),
        &[
            Command::Configure,
            Command::PrepareFrame(Resolution::new(800, 600)),
            Command::Upload {
                positions,
                usage: BufferUsage::StaticDraw,
            },
            Command::SetColor(Color::BLACK),
            Command::DrawTriangles { first: 0, count: 6 },
        ]
    );
}

#[test]
fn fifty_random_rectangles() {
    for seed in 0..5 {
        let mut driver = ready_driver();
        let mut source = RandomSource::with_seed(seed);
        let frame = Frame::random(&mut source, DEFAULT_RANDOM_COUNT, DEFAULT_RANDOM_RANGE);

        driver.render(&frame, Resolution::new(1280, 720)).unwrap();

        let backend = driver.backend();
        assert_eq!(backend.upload_count(), 50);
        assert_eq!(backend.draw_count(), 50);

        for command in backend.commands() {
            match command {
                Command::Upload { positions, usage } => {
                    assert_eq!(positions.len(), 12);
                    assert_eq!(*usage, BufferUsage::DynamicDraw);
                }
                Command::DrawTriangles { first, count } => {
                    assert_eq!((*first, *count), (0, 6));
                }
                _ => {}
            }
        }

        let colors = backend.colors();
        assert_eq!(colors.len(), 50);
        assert!(colors.iter().all(|c| c.a == 1.0));
    }
}

#[test]
fn each_draw_follows_its_upload() {
    let mut driver = ready_driver();
    let mut source = RandomSource::with_seed(99);
    let frame = Frame::random(&mut source, 10, 300);

    driver.render(&frame, Resolution::new(300, 300)).unwrap();

    let uploads: Vec<&Vec<f32>> = driver
        .backend()
        .commands()
        .iter()
        .filter_map(|c| match c {
            Command::Upload { positions, .. } => Some(positions),
            _ => None,
        })
        .collect();

    for (item, positions) in frame.items.iter().zip(uploads) {
        assert_eq!(positions.as_slice(), &item.rectangle.to_positions());
    }

    // buffer holds the last rectangle only
    let last = frame.items.last().unwrap().rectangle.to_positions();
    assert_eq!(driver.backend().buffer(), &last);
}

#[test]
fn degenerate_rectangles_still_draw() {
    let mut driver = ready_driver();
    let frame = Frame::new(
        vec![
            rectangles::DrawItem {
                rectangle: Rectangle::new(5.0, 5.0, 0.0, 10.0),
                color: None,
            },
            rectangles::DrawItem {
                rectangle: Rectangle::new(5.0, 5.0, -10.0, -10.0),
                color: None,
            },
        ],
        BufferUsage::DynamicDraw,
    );

    driver.render(&frame, Resolution::new(100, 100)).unwrap();

    assert_eq!(driver.backend().draw_count(), 2);
    assert!(driver.backend().colors().is_empty());
}

#[test]
fn rendering_twice_replays_frame() {
    let mut driver = ready_driver();
    let frame = Frame::default();

    driver.render(&frame, Resolution::new(640, 480)).unwrap();
    driver.render(&frame, Resolution::new(320, 240)).unwrap();

    let backend = driver.into_backend();
    assert_eq!(backend.upload_count(), 2);
    assert_eq!(backend.draw_count(), 2);
    assert_eq!(
        backend
            .commands()
            .iter()
            .filter(|c| matches!(c, Command::Configure))
            .count(),
        1
    );
}
