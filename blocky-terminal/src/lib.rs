/// Terminal frontend for the BlockyAnimal rig and the ColoredPoints painter
use blocky_core::{
    BlockyScene, BrushKind, FrameStats, Joint, JointMode, Painting, PointerEvent, Rgba, SceneConfig,
};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod cli;
pub mod logging;
pub mod renderer;

pub use cli::{Args, Mode};
pub use renderer::AsciiRenderer;

/// Degrees per `+`/`-` press.
const JOINT_STEP: f32 = 5.0;
/// NDC units per arrow press; times the drag sensitivity gives degrees.
const ORBIT_STEP: f32 = 0.05;
const ZOOM_STEP: f32 = 1.1;

/// Main application struct for the terminal demos
pub struct TerminalApp {
    mode: Mode,
    scene: BlockyScene,
    painting: Painting,
    renderer: AsciiRenderer,
    selected: Joint,
    running: bool,
    start: Instant,
    target_fps: u32,
    stats: FrameStats,
}

impl TerminalApp {
    pub fn new(args: &Args) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(args, width as usize, height as usize))
    }

    /// Build without touching the terminal.
    pub fn with_size(args: &Args, width: usize, height: usize) -> Self {
        let config = args.scene_config();
        let mut scene = BlockyScene::new(config.clone(), 0.0);
        if args.animate {
            scene.set_all_animated(true);
        }
        let mut app = Self {
            mode: args.mode,
            scene,
            painting: Painting::new(&config),
            renderer: AsciiRenderer::new(width, height),
            selected: Joint::LeftArm,
            running: true,
            start: Instant::now(),
            target_fps: args.fps.max(1),
            stats: FrameStats::default(),
        };
        app.set_mode(args.mode);
        app
    }

    pub fn config(&self) -> &SceneConfig {
        self.scene.config()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scene(&self) -> &BlockyScene {
        &self.scene
    }

    pub fn painting(&self) -> &Painting {
        &self.painting
    }

    pub fn selected(&self) -> Joint {
        self.selected
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        // the painter draws flat shapes in submission order
        self.renderer.set_depth_test(mode == Mode::Rig);
        log::info!("mode: {:?}", mode);
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_secs_f64(1.0 / self.target_fps as f64);

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::from_millis(0))? {
                let ev = event::read()?;
                self.handle_event(ev);
            }

            self.tick(self.start.elapsed().as_secs_f64());
            self.present()?;

            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }
        }

        Ok(())
    }

    pub fn handle_event(&mut self, ev: Event) {
        match ev {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                log::debug!("resize to {}x{}", width, height);
                self.renderer.resize(width as usize, height as usize);
                self.set_mode(self.mode);
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Tab | KeyCode::Char('m') => {
                let next = match self.mode {
                    Mode::Rig => Mode::Paint,
                    Mode::Paint => Mode::Rig,
                };
                self.set_mode(next);
            }
            code => match self.mode {
                Mode::Rig => self.rig_key(code),
                Mode::Paint => self.paint_key(code),
            },
        }
    }

    fn rig_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c @ '0'..='9') => {
                // 1..9 then 0, in joint order
                let index = (c as usize - '0' as usize + 9) % 10;
                self.selected = Joint::ALL[index];
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.nudge(JOINT_STEP),
            KeyCode::Char('-') => self.nudge(-JOINT_STEP),
            KeyCode::Char(' ') => {
                let on = self.scene.animation().mode(self.selected) == JointMode::Manual;
                self.scene.set_animated(self.selected, on);
            }
            KeyCode::Char('a') => self.scene.set_all_animated(true),
            KeyCode::Char('o') => self.scene.set_all_animated(false),
            KeyCode::Left => self.scene.orbit_by([-ORBIT_STEP, 0.0]),
            KeyCode::Right => self.scene.orbit_by([ORBIT_STEP, 0.0]),
            KeyCode::Up => self.scene.orbit_by([0.0, ORBIT_STEP]),
            KeyCode::Down => self.scene.orbit_by([0.0, -ORBIT_STEP]),
            KeyCode::Char('z') => {
                let zoom = self.scene.orbit().zoom * ZOOM_STEP;
                self.scene.set_zoom(zoom);
            }
            KeyCode::Char('x') => {
                let zoom = self.scene.orbit().zoom / ZOOM_STEP;
                self.scene.set_zoom(zoom);
            }
            KeyCode::Char('c') => self.scene.clear(),
            _ => {}
        }
    }

    fn nudge(&mut self, step: f32) {
        let manual = self.scene.animation().get(self.selected).manual;
        self.scene.set_joint(self.selected, manual + step);
    }

    fn paint_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('i') => return self.painting.show_portrait(),
            KeyCode::Char('c') => return self.painting.clear(),
            _ => {}
        }
        let brush = &mut self.painting.brush;
        match code {
            KeyCode::Char('p') => brush.kind = BrushKind::Point,
            KeyCode::Char('t') => brush.kind = BrushKind::Triangle,
            KeyCode::Char('o') => brush.kind = BrushKind::Circle,
            KeyCode::Char('r') => brush.color = Rgba::RED,
            KeyCode::Char('g') => brush.color = Rgba::GREEN,
            KeyCode::Char('b') => brush.color = Rgba::BLUE,
            KeyCode::Char('w') => brush.color = Rgba::WHITE,
            KeyCode::Char('+') | KeyCode::Char('=') => brush.size += 5.0,
            KeyCode::Char('-') => brush.size = (brush.size - 5.0).max(1.0),
            KeyCode::Char(']') => brush.circle_segments += 1,
            KeyCode::Char('[') => {
                brush.circle_segments = brush.circle_segments.saturating_sub(1).max(3)
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        // sample the middle of the cell
        let [x, y] = self
            .renderer
            .viewport()
            .to_ndc(mouse.column as f32 + 0.5, mouse.row as f32 + 0.5);
        let pointer = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerEvent::Down { x, y },
            MouseEventKind::Drag(MouseButton::Left) => PointerEvent::Move {
                x,
                y,
                primary_held: true,
            },
            MouseEventKind::Moved => PointerEvent::Move {
                x,
                y,
                primary_held: false,
            },
            MouseEventKind::Up(MouseButton::Left) => PointerEvent::Up,
            _ => return,
        };
        match self.mode {
            Mode::Rig => self.scene.pointer(pointer),
            Mode::Paint => {
                self.painting.pointer(pointer);
            }
        }
    }

    /// Update and rasterize one frame at `now_seconds`.
    pub fn tick(&mut self, now_seconds: f64) -> FrameStats {
        let started = Instant::now();
        let stats = match self.mode {
            Mode::Rig => self.scene.frame(now_seconds, &mut self.renderer),
            Mode::Paint => {
                let shapes = self.painting.render(&mut self.renderer);
                FrameStats {
                    shapes,
                    primitives: self.painting.primitive_count(),
                    duration_ms: 0.0,
                }
            }
        };
        self.stats = stats.with_duration(started.elapsed().as_secs_f64() * 1000.0);
        self.stats
    }

    pub fn renderer(&self) -> &AsciiRenderer {
        &self.renderer
    }

    pub fn status_line(&self) -> String {
        match self.mode {
            Mode::Rig => {
                let state = self.scene.animation().get(self.selected);
                let (value, animated) = (state.current, state.mode == JointMode::Animated);
                format!(
                    "BlockyAnimal | {} | {}: {:.0}{} | 1-0 joint +/- angle space anim a/o all arrows orbit z/x zoom c clear tab paint q quit",
                    self.stats,
                    self.selected.name(),
                    value,
                    if animated { " (anim)" } else { "" }
                )
            }
            Mode::Paint => {
                let brush = &self.painting.brush;
                format!(
                    "ColoredPoints | numdot: {} {} | {:?} size {} | p/t/o kind r/g/b/w color +/- size [/] segs i portrait c clear tab rig q quit",
                    self.stats.shapes, self.stats, brush.kind, brush.size
                )
            }
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let (width, _) = terminal::size()?;
        let status: String = self.status_line().chars().take(width as usize).collect();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(status),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Render one rig frame at `seconds` into a fresh renderer.
pub fn snapshot(config: SceneConfig, width: usize, height: usize, seconds: f64) -> AsciiRenderer {
    let mut renderer = AsciiRenderer::new(width, height);
    let mut scene = BlockyScene::new(config, 0.0);
    scene.set_all_animated(true);
    scene.frame(seconds, &mut renderer);
    renderer
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crossterm::event::KeyModifiers;

    fn app(mode: &str) -> TerminalApp {
        let args = Args::parse_from(["blocky-terminal", "--mode", mode]);
        TerminalApp::with_size(&args, 80, 40)
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_digit_selects_joint() {
        let mut app = app("rig");
        app.handle_event(key('5'));
        assert_eq!(app.selected(), Joint::LeftLeg);
        app.handle_event(key('0'));
        assert_eq!(app.selected(), Joint::CameraPitch);
    }

    #[test]
    fn test_nudge_and_toggle() {
        let mut app = app("rig");
        app.handle_event(key('3'));
        app.handle_event(key('+'));
        app.handle_event(key('+'));
        assert_eq!(app.scene().animation().angle(Joint::LeftHand), 10.0);

        app.handle_event(key(' '));
        assert_eq!(
            app.scene().animation().mode(Joint::LeftHand),
            JointMode::Animated
        );
        app.handle_event(key(' '));
        assert_eq!(app.scene().animation().mode(Joint::LeftHand), JointMode::Manual);
        assert_eq!(app.scene().animation().angle(Joint::LeftHand), 10.0);
    }

    #[test]
    fn test_arrow_orbits() {
        let mut app = app("rig");
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)));
        let expected = ORBIT_STEP * app.config().drag_sensitivity;
        assert!((app.scene().orbit().drag_yaw - expected).abs() < 1e-4);
    }

    #[test]
    fn test_mouse_drag_orbits_in_rig_mode() {
        let mut app = app("rig");
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 40, 20));
        app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 60, 20));
        assert!(app.scene().orbit().drag_yaw > 0.0);
        assert_eq!(app.scene().orbit().drag_pitch, 0.0);
    }

    #[test]
    fn test_paint_click_and_clear() {
        let mut app = app("paint");
        app.handle_event(key('r'));
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 40, 20));
        app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 41, 20));
        app.handle_event(mouse(MouseEventKind::Moved, 50, 20));
        assert_eq!(app.painting().len(), 2);
        assert_eq!(app.painting().shapes()[0].color, Rgba::RED);

        let stats = app.tick(0.0);
        assert_eq!(stats.shapes, 2);

        app.handle_event(key('c'));
        assert!(app.painting().is_empty());
    }

    #[test]
    fn test_tab_switches_mode_and_q_quits() {
        let mut app = app("rig");
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
        assert_eq!(app.mode(), Mode::Paint);
        assert!(app.status_line().starts_with("ColoredPoints"));
        app.handle_event(key('q'));
        assert!(!app.is_running());
    }

    #[test]
    fn test_rig_tick_counts_parts() {
        let mut app = app("rig");
        let stats = app.tick(0.1);
        assert_eq!(stats.shapes, app.scene().rig().len());
        assert!(stats.primitives > 0);
    }

    #[test]
    fn test_snapshot_is_not_blank() {
        let renderer = snapshot(SceneConfig::default(), 60, 30, 1.0);
        assert!(renderer.to_text().chars().any(|c| c != ' ' && c != '\n'));
    }
}
