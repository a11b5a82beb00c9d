use tracing::debug;

use crate::config::MenuConfig;
use crate::dispatch::{dispatch, Activation, LaunchMode};
use crate::draw::draw_menu;
use crate::error::{MenuError, Result};
use crate::input::{InputEvent, KeyAction, Outcome, PointerButton};
use crate::menu::{Menu, Movement};
use crate::services::{Geometry, Point, ProgramLookup, Renderer, Spawner};

/// Opacity change per `OpacityUp`/`OpacityDown` key press
pub const OPACITY_STEP: f64 = 0.2;

/// Event interpreter: owns the menu, its configuration and the geometry
/// service for the lifetime of the event loop
pub struct MenuSession<G: Geometry> {
    menu: Menu,
    config: MenuConfig,
    geometry: G,
    mode: LaunchMode,
    last_pointer: Option<Point>,
}

impl<G: Geometry> MenuSession<G> {
    pub fn new(mut menu: Menu, config: MenuConfig, mut geometry: G) -> Self {
        menu.layout(&mut geometry);
        let mode = LaunchMode::from_spawn_flag(config.menu.spawn);

        Self {
            menu,
            config,
            geometry,
            mode,
            last_pointer: None,
        }
    }

    /// Process one event to completion
    pub fn handle(&mut self, event: InputEvent, spawner: &mut dyn Spawner) -> Result<Outcome> {
        let outcome = match event {
            InputEvent::Key(action) => self.handle_key(action, spawner)?,
            InputEvent::Button { button, position } => self.handle_button(button, position, spawner)?,
            InputEvent::Motion(position) => self.handle_motion(position),
            InputEvent::Expose => Outcome::Remap,
        };

        if matches!(
            outcome,
            Outcome::ViewportShifted | Outcome::Activated(Activation::Checkout(_))
        ) {
            self.menu.layout(&mut self.geometry);
        }

        Ok(outcome)
    }

    fn handle_key(&mut self, action: KeyAction, spawner: &mut dyn Spawner) -> Result<Outcome> {
        let outcome = match action {
            KeyAction::MoveUp => self.menu.move_up().into(),
            KeyAction::MoveDown => self.menu.move_down().into(),
            KeyAction::PageUp => self.menu.page_up().into(),
            KeyAction::PageDown => self.menu.page_down().into(),
            KeyAction::Home => self.menu.home().into(),
            KeyAction::End => self.menu.end().into(),
            KeyAction::Activate => self.activate(self.menu.selected(), spawner)?,
            KeyAction::Cancel => Outcome::Exit,
            KeyAction::OpacityUp => self.adjust_opacity(OPACITY_STEP),
            KeyAction::OpacityDown => self.adjust_opacity(-OPACITY_STEP),
        };
        Ok(outcome)
    }

    fn handle_button(
        &mut self,
        button: PointerButton,
        position: Point,
        spawner: &mut dyn Spawner,
    ) -> Result<Outcome> {
        if !button.is_wheel() && self.is_outside(position) {
            return Err(MenuError::ClickedOutside);
        }

        match button {
            PointerButton::Secondary => Err(MenuError::RightClicked),
            PointerButton::WheelUp => Ok(self.menu.move_up().into()),
            PointerButton::WheelDown => Ok(self.menu.move_down().into()),
            PointerButton::Middle => Ok(Outcome::Unchanged),
            PointerButton::Primary => match self.menu.item_at(self.to_window(position)) {
                Some(index) => self.activate(index, spawner),
                None => Ok(Outcome::Unchanged),
            },
        }
    }

    fn handle_motion(&mut self, position: Point) -> Outcome {
        let point = self.to_window(position);
        if self.last_pointer == Some(point) {
            return Outcome::Unchanged;
        }
        self.last_pointer = Some(point);

        self.menu.hover(point).into()
    }

    fn activate(&mut self, index: usize, spawner: &mut dyn Spawner) -> Result<Outcome> {
        let command = self.menu.items()[index].command().to_string();
        debug!("Activated item {}: {}", index, command);

        let activation = dispatch(&mut self.menu, &command, self.mode, spawner)?;
        Ok(Outcome::Activated(activation))
    }

    fn adjust_opacity(&mut self, delta: f64) -> Outcome {
        self.config.colors.menu_bg.adjust_alpha(delta);
        debug!("Menu background alpha now {:.1}", self.config.colors.menu_bg.a);
        Outcome::Cosmetic
    }

    fn is_outside(&self, p: Point) -> bool {
        !self.geometry.menu_bounds().contains(p)
    }

    fn to_window(&self, p: Point) -> Point {
        let origin = self.geometry.menu_origin();
        Point::new(p.x - origin.x, p.y - origin.y)
    }

    /// Paint the current state through `renderer`
    pub fn draw(&self, renderer: &mut dyn Renderer, programs: &dyn ProgramLookup) -> Result<()> {
        draw_menu(&self.menu, &self.geometry, &self.config, renderer, programs)
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn mode(&self) -> LaunchMode {
        self.mode
    }

    /// Move the window on screen (the frontend decides placement)
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }
}

impl From<Movement> for Outcome {
    fn from(movement: Movement) -> Self {
        match movement {
            Movement::Unchanged => Outcome::Unchanged,
            Movement::Selection => Outcome::SelectionMoved,
            Movement::Viewport => Outcome::ViewportShifted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VisibleLimits;
    use crate::menu::ItemList;
    use crate::services::{GridGeometry, RecordingSpawner};

    const MENU: &str = "\
Terminal,xterm
Browser,^sub(firefox)
Apps,^checkout(apps)
Applications,^tag(apps)
Editor,vim
Files,pcmanfm
Music,mpd
Video,mpv
..,^checkout(root)
";

    fn session(max_items: usize) -> MenuSession<GridGeometry> {
        let items = ItemList::parse(MENU).unwrap();
        let menu = Menu::open(items, None, VisibleLimits::new(1, max_items)).unwrap();
        // window at (10, 5), one cell per row, no margins
        let geometry = GridGeometry::new(Point::new(10, 5), 20, 1);
        MenuSession::new(menu, MenuConfig::default(), geometry)
    }

    fn key(action: KeyAction) -> InputEvent {
        InputEvent::Key(action)
    }

    fn click(button: PointerButton, x: i32, y: i32) -> InputEvent {
        InputEvent::Button {
            button,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_keys_move_selection() {
        let mut s = session(10);
        let mut spawner = RecordingSpawner::default();

        assert_eq!(s.handle(key(KeyAction::MoveDown), &mut spawner).unwrap(), Outcome::SelectionMoved);
        assert_eq!(s.menu().selected(), 1);
        assert_eq!(s.handle(key(KeyAction::End), &mut spawner).unwrap(), Outcome::SelectionMoved);
        assert_eq!(s.menu().selected(), 2);
        assert_eq!(s.handle(key(KeyAction::MoveDown), &mut spawner).unwrap(), Outcome::Unchanged);
    }

    #[test]
    fn test_escape_exits_cleanly() {
        let mut s = session(10);
        let outcome = s.handle(key(KeyAction::Cancel), &mut RecordingSpawner::default()).unwrap();
        assert_eq!(outcome, Outcome::Exit);
        assert_eq!(outcome.exit_code(), Some(0));
    }

    #[test]
    fn test_activate_sub_spawns_and_terminates() {
        let mut s = session(10);
        let mut spawner = RecordingSpawner::default();
        s.handle(key(KeyAction::MoveDown), &mut spawner).unwrap();

        let outcome = s.handle(key(KeyAction::Activate), &mut spawner).unwrap();
        assert_eq!(outcome, Outcome::Activated(Activation::Spawned("firefox".into())));
        assert_eq!(outcome.exit_code(), Some(0));
        assert_eq!(spawner.spawned, ["firefox"]);
    }

    #[test]
    fn test_checkout_relayouts_for_new_submenu() {
        let mut s = session(3);
        let mut spawner = RecordingSpawner::default();
        s.handle(key(KeyAction::End), &mut spawner).unwrap();

        let outcome = s.handle(key(KeyAction::Activate), &mut spawner).unwrap();
        assert_eq!(outcome.exit_code(), None);
        assert_eq!(s.menu().title(), Some("Applications"));
        assert!(s.geometry().show_title());
        assert_eq!(s.geometry().nr_visible_items(), 3);
        // title takes row 0, first item row 1
        assert_eq!(s.menu().items()[4].area().y, 1);
    }

    #[test]
    fn test_scrolling_keeps_item_areas_in_sync() {
        let mut s = session(3);
        let mut spawner = RecordingSpawner::default();
        s.menu.checkout(Some("apps")).unwrap();
        s.menu.layout(&mut s.geometry);

        // Editor, Files, Music visible; scroll by one
        for _ in 0..3 {
            s.handle(key(KeyAction::MoveDown), &mut spawner).unwrap();
        }
        assert_eq!((s.menu().first(), s.menu().last()), (5, 7));
        assert_eq!(s.menu().items()[7].area().y, 3);

        // clicking the bottom row activates Video
        let outcome = s.handle(click(PointerButton::Primary, 12, 5 + 3), &mut spawner).unwrap();
        assert_eq!(outcome, Outcome::Activated(Activation::Spawned("mpv".into())));
    }

    #[test]
    fn test_wheel_scrolls_one_item() {
        let mut s = session(2);
        let mut spawner = RecordingSpawner::default();
        let down = click(PointerButton::WheelDown, 0, 0);

        assert_eq!(s.handle(down, &mut spawner).unwrap(), Outcome::SelectionMoved);
        assert_eq!(s.handle(down, &mut spawner).unwrap(), Outcome::ViewportShifted);
        assert_eq!((s.menu().first(), s.menu().last()), (1, 2));

        let up = click(PointerButton::WheelUp, 0, 0);
        assert_eq!(s.handle(up, &mut spawner).unwrap(), Outcome::SelectionMoved);
        assert_eq!(s.handle(up, &mut spawner).unwrap(), Outcome::ViewportShifted);
        assert_eq!(s.menu().first(), 0);
    }

    #[test]
    fn test_click_outside_is_fatal() {
        let mut s = session(10);
        let result = s.handle(click(PointerButton::Primary, 0, 0), &mut RecordingSpawner::default());
        assert!(matches!(result, Err(MenuError::ClickedOutside)));
    }

    #[test]
    fn test_click_just_past_edge_is_outside() {
        // 20 columns from x = 10, three rows from y = 5
        let mut s = session(10);
        let mut spawner = RecordingSpawner::default();

        let right = s.handle(click(PointerButton::Primary, 30, 6), &mut spawner);
        assert!(matches!(right, Err(MenuError::ClickedOutside)));
        let below = s.handle(click(PointerButton::Primary, 12, 8), &mut spawner);
        assert!(matches!(below, Err(MenuError::ClickedOutside)));

        let corner = s.handle(click(PointerButton::Primary, 29, 7), &mut spawner).unwrap();
        assert_eq!(corner, Outcome::Activated(Activation::Checkout("apps".into())));
    }

    #[test]
    fn test_right_click_is_fatal() {
        let mut s = session(10);
        let result = s.handle(click(PointerButton::Secondary, 12, 6), &mut RecordingSpawner::default());
        assert!(matches!(result, Err(MenuError::RightClicked)));
    }

    #[test]
    fn test_middle_click_is_ignored() {
        let mut s = session(10);
        let outcome = s.handle(click(PointerButton::Middle, 12, 6), &mut RecordingSpawner::default()).unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
    }

    #[test]
    fn test_motion_highlights_once() {
        let mut s = session(10);
        let mut spawner = RecordingSpawner::default();

        let over_browser = InputEvent::Motion(Point::new(15, 6));
        assert_eq!(s.handle(over_browser, &mut spawner).unwrap(), Outcome::SelectionMoved);
        assert_eq!(s.menu().selected(), 1);
        assert_eq!(s.handle(over_browser, &mut spawner).unwrap(), Outcome::Unchanged);
        assert_eq!(
            s.handle(InputEvent::Motion(Point::new(16, 6)), &mut spawner).unwrap(),
            Outcome::Unchanged
        );
    }

    #[test]
    fn test_opacity_keys_clamp() {
        let mut s = session(10);
        let mut spawner = RecordingSpawner::default();

        for _ in 0..10 {
            assert_eq!(s.handle(key(KeyAction::OpacityUp), &mut spawner).unwrap(), Outcome::Cosmetic);
        }
        assert_eq!(s.config().colors.menu_bg.a, 1.0);

        for _ in 0..10 {
            s.handle(key(KeyAction::OpacityDown), &mut spawner).unwrap();
        }
        assert_eq!(s.config().colors.menu_bg.a, 0.0);
    }

    #[test]
    fn test_no_spawn_mode_prints() {
        let items = ItemList::parse(MENU).unwrap();
        let menu = Menu::open(items, None, VisibleLimits::new(1, 10)).unwrap();
        let mut config = MenuConfig::default();
        config.set_spawn(false);
        let mut s = MenuSession::new(menu, config, GridGeometry::new(Point::default(), 20, 1));
        let mut spawner = RecordingSpawner::default();

        let outcome = s.handle(key(KeyAction::Activate), &mut spawner).unwrap();
        assert_eq!(outcome, Outcome::Activated(Activation::Print("xterm".into())));
        assert!(spawner.spawned.is_empty());
    }
}
