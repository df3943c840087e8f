// Lifecycle tests for the animator against a recording host.

use forge_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct HostLog {
    next_id: u32,
    frames: Vec<u32>,
    listeners: Vec<(u32, EventKind)>,
    styles: Vec<(u32, String)>,
    frame_requests: usize,
    fail_on: Option<EventKind>,
}

#[derive(Clone, Default)]
struct RecordingHost {
    log: Rc<RefCell<HostLog>>,
}

impl RecordingHost {
    /// Simulate the scheduled callback firing: it is no longer pending on the host side.
    fn fire(&self) -> bool {
        let mut log = self.log.borrow_mut();
        if log.frames.is_empty() {
            return false;
        }
        log.frames.remove(0);
        true
    }
}

impl FrameHost for RecordingHost {
    type Frame = u32;
    type Listener = u32;
    type Style = u32;

    fn request_frame(&mut self) -> Result<u32, ForgeError> {
        let mut log = self.log.borrow_mut();
        log.next_id += 1;
        let id = log.next_id;
        log.frames.push(id);
        log.frame_requests += 1;
        Ok(id)
    }

    fn cancel_frame(&mut self, frame: u32) {
        self.log.borrow_mut().frames.retain(|f| *f != frame);
    }

    fn listen(&mut self, kind: EventKind) -> Result<u32, ForgeError> {
        let mut log = self.log.borrow_mut();
        if log.fail_on == Some(kind) {
            return Err(ForgeError::Host(format!("cannot listen for {}", kind.name())));
        }
        log.next_id += 1;
        let id = log.next_id;
        log.listeners.push((id, kind));
        Ok(id)
    }

    fn unlisten(&mut self, listener: u32) {
        self.log.borrow_mut().listeners.retain(|(id, _)| *id != listener);
    }

    fn attach_style(&mut self, css: &str) -> Result<u32, ForgeError> {
        let mut log = self.log.borrow_mut();
        log.next_id += 1;
        let id = log.next_id;
        log.styles.push((id, css.to_string()));
        Ok(id)
    }

    fn detach_style(&mut self, style: u32) {
        self.log.borrow_mut().styles.retain(|(id, _)| *id != style);
    }
}

fn small_field() -> ParticleField {
    let params = FieldParams {
        count: 256,
        width_segments: 16,
        height_segments: 16,
        ..FieldParams::default()
    };
    ParticleField::generate(&params, &mut StdRng::seed_from_u64(1))
}

fn mount(host: &RecordingHost) -> Animator<RecordingHost> {
    let css = canvas_stylesheet("bg-canvas");
    Animator::mount(
        host.clone(),
        small_field(),
        Viewport::new(800.0, 600.0, 1.0),
        Some(css.as_str()),
    )
    .expect("mount")
}

fn run_frame(animator: &mut Animator<RecordingHost>, host: &RecordingHost, now_ms: f64) {
    assert!(host.fire(), "no frame was scheduled");
    animator.frame(now_ms);
}

#[test]
fn mount_acquires_listeners_style_and_first_frame() {
    let host = RecordingHost::default();
    let animator = mount(&host);
    {
        let log = host.log.borrow();
        assert_eq!(log.frames.len(), 1);
        assert_eq!(log.listeners.len(), EventKind::ALL.len());
        for kind in EventKind::ALL {
            assert!(log.listeners.iter().any(|(_, k)| *k == kind));
        }
        assert_eq!(log.styles.len(), 1);
        assert!(log.styles[0].1.starts_with("#bg-canvas"));
    }
    assert!(animator.is_frame_pending());
    assert_eq!(animator.field().len(), 256);
}

#[test]
fn every_frame_schedules_exactly_one_successor() {
    let host = RecordingHost::default();
    let mut animator = mount(&host);
    for i in 0..10 {
        run_frame(&mut animator, &host, 1000.0 + i as f64 * 16.0);
        assert_eq!(host.log.borrow().frames.len(), 1);
    }
    assert_eq!(host.log.borrow().frame_requests, 11);
}

#[test]
fn unmount_leaves_nothing_scheduled_or_attached() {
    let host = RecordingHost::default();
    let mut animator = mount(&host);
    for i in 0..5 {
        run_frame(&mut animator, &host, i as f64 * 16.0);
    }
    animator.unmount();
    let log = host.log.borrow();
    assert!(log.frames.is_empty());
    assert!(log.listeners.is_empty());
    assert!(log.styles.is_empty());
}

#[test]
fn dropping_the_animator_releases_too() {
    let host = RecordingHost::default();
    {
        let _animator = mount(&host);
    }
    let log = host.log.borrow();
    assert!(log.frames.is_empty());
    assert!(log.listeners.is_empty());
    assert!(log.styles.is_empty());
}

#[test]
fn failed_mount_releases_partial_acquisitions() {
    let host = RecordingHost::default();
    host.log.borrow_mut().fail_on = Some(EventKind::PointerMove);
    let result = Animator::mount(
        host.clone(),
        small_field(),
        Viewport::new(800.0, 600.0, 1.0),
        Some("#c {}"),
    );
    assert!(matches!(result, Err(ForgeError::Host(_))));
    let log = host.log.borrow();
    assert!(log.frames.is_empty());
    assert!(log.listeners.is_empty());
    assert!(log.styles.is_empty());
}

#[test]
fn mount_without_stylesheet_registers_none() {
    let host = RecordingHost::default();
    let _animator =
        Animator::mount(host.clone(), small_field(), Viewport::new(10.0, 10.0, 1.0), None)
            .expect("mount");
    assert!(host.log.borrow().styles.is_empty());
}

#[test]
fn idle_frames_only_breathe() {
    let host = RecordingHost::default();
    let mut animator = mount(&host);
    run_frame(&mut animator, &host, 500.0);
    assert!((0.0..=0.01).contains(&animator.stretch()));
    for i in 1..30 {
        run_frame(&mut animator, &host, 500.0 + i as f64 * 16.0);
    }
    let field = animator.field();
    for (cur, o) in field.positions().iter().zip(field.origins()) {
        assert!((*cur - *o).length() <= 0.02 * o.length() + 1e-6);
    }
    assert_eq!(animator.orbit().auto_rotate_speed(), AUTO_ROTATE_BASE);
}

#[test]
fn holding_the_pointer_stretches_and_spins_faster() {
    let host = RecordingHost::default();
    let mut animator = mount(&host);
    animator.handle(HostEvent::PointerDown { x: 400.0, y: 300.0 });
    for i in 0..50 {
        run_frame(&mut animator, &host, i as f64 * 16.0);
    }
    let s = animator.stretch();
    assert!(s > 0.994 && s < 1.0);
    let speed = animator.orbit().auto_rotate_speed();
    assert!((speed - (AUTO_ROTATE_BASE + s * AUTO_ROTATE_STRETCH)).abs() < 1e-6);

    animator.handle(HostEvent::PointerUp);
    run_frame(&mut animator, &host, 50.0 * 16.0);
    assert!(animator.stretch() < s);
}

#[test]
fn cancelled_press_lets_stretch_decay() {
    let host = RecordingHost::default();
    let mut animator = mount(&host);
    assert!(host
        .log
        .borrow()
        .listeners
        .iter()
        .any(|(_, k)| *k == EventKind::PointerCancel));

    animator.handle(HostEvent::PointerDown { x: 10.0, y: 10.0 });
    for i in 0..30 {
        run_frame(&mut animator, &host, i as f64 * 16.0);
    }
    let held = animator.stretch();
    assert!(held > 0.9);

    // a pointercancel reaches the animator as a release
    animator.handle(HostEvent::PointerUp);
    let mut prev = held;
    for i in 30..90 {
        run_frame(&mut animator, &host, i as f64 * 16.0);
        assert!(animator.stretch() < prev);
        prev = animator.stretch();
    }
    assert!(prev < 0.01, "stretch after cancel: {prev}");
    assert!((animator.orbit().auto_rotate_speed() - AUTO_ROTATE_BASE) < 0.02);
}

#[test]
fn frame_positions_follow_elapsed_time() {
    let host = RecordingHost::default();
    let mut animator = mount(&host);
    run_frame(&mut animator, &host, 10_000.0);
    // first frame is time zero
    let field = animator.field().clone();
    for ((cur, o), j) in field
        .positions()
        .iter()
        .zip(field.origins())
        .zip(field.jitters())
    {
        assert_eq!(*cur, displaced(*o, *j, 0.0, 0.0));
    }
    run_frame(&mut animator, &host, 11_000.0);
    let field = animator.field();
    for ((cur, o), j) in field
        .positions()
        .iter()
        .zip(field.origins())
        .zip(field.jitters())
    {
        assert_eq!(*cur, displaced(*o, *j, 0.5, 0.0));
    }
}

#[test]
fn frame_view_exposes_renderer_inputs() {
    let host = RecordingHost::default();
    let mut animator = mount(&host);
    assert!(host.fire());
    let view = animator.frame(0.0);
    assert_eq!(view.positions.len(), 256);
    assert_eq!(view.colors.len(), 256);
    assert_eq!(view.viewport, Viewport::new(800.0, 600.0, 1.0));
}

#[test]
fn resize_event_updates_camera_aspect_only() {
    let host = RecordingHost::default();
    let mut animator = mount(&host);
    let before = animator.field().positions().to_vec();
    animator.handle(HostEvent::Resize(Viewport::new(1024.0, 256.0, 2.0)));
    assert_eq!(animator.camera().aspect, 1024.0_f32 / 256.0_f32);
    assert_eq!(animator.viewport().physical_size(), (2048, 512));
    assert_eq!(animator.field().positions(), &before[..]);
    assert_eq!(animator.stretch(), 0.0);
}

#[test]
fn dragging_while_pressed_orbits_the_camera() {
    let host = RecordingHost::default();
    let mut dragged = mount(&host);
    let other_host = RecordingHost::default();
    let mut idle = mount(&other_host);

    dragged.handle(HostEvent::PointerDown { x: 100.0, y: 300.0 });
    dragged.handle(HostEvent::PointerMove { x: 400.0, y: 300.0 });
    // movement without a press does not orbit
    idle.handle(HostEvent::PointerMove { x: 400.0, y: 300.0 });

    for i in 0..60 {
        run_frame(&mut dragged, &host, i as f64 * 16.0);
        run_frame(&mut idle, &other_host, i as f64 * 16.0);
    }
    // Dragging right turns the camera left, far beyond the auto-rotation
    assert!(dragged.orbit().azimuth() < idle.orbit().azimuth() - 0.5);
}
