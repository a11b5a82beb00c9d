//! End to end behaviour of the menu engine through its public API.

use std::io::Cursor;

use raven_menu_core::menu::parse_line;
use raven_menu_core::{
    Activation, GridGeometry, InputEvent, ItemList, KeyAction, Menu, MenuConfig, MenuError, MenuSession, Outcome,
    Point, Spawner, VisibleLimits,
};

#[derive(Default)]
struct Launched(Vec<String>);

impl Spawner for Launched {
    fn spawn(&mut self, command: &str) -> raven_menu_core::Result<()> {
        self.0.push(command.to_string());
        Ok(())
    }
}

fn labels(menu: &Menu) -> Vec<&str> {
    menu.visible_items().map(|(_, item)| item.label()).collect()
}

#[test]
fn test_untagged_input_spans_every_item() {
    for count in 1..=12 {
        let input: String = (0..count).map(|i| format!("entry {i},cmd{i}\n")).collect();
        let items = ItemList::from_reader(Cursor::new(input)).unwrap();
        let menu = Menu::open(items, None, VisibleLimits::new(1, 40)).unwrap();

        assert_eq!(menu.subhead(), 0);
        assert_eq!(menu.subtail(), count - 1);
        assert_eq!(menu.submenu().len(), count);
        assert_eq!(menu.title(), None);
    }
}

#[test]
fn test_tagged_submenu_has_exactly_its_items() {
    for k in 1..=5 {
        let mut input = String::from("Top,^tag(top)\nA,a\n");
        input.push_str("Games,^tag(games)\n");
        for i in 0..k {
            input.push_str(&format!("Game {i},game{i}\n"));
        }
        input.push_str("Other,^tag(other)\nZ,z\n");

        let items = ItemList::parse(&input).unwrap();
        let menu = Menu::open(items, Some("games"), VisibleLimits::new(1, 40)).unwrap();
        assert_eq!(menu.title(), Some("Games"));
        assert_eq!(menu.submenu().len(), k);
    }
}

#[test]
fn test_comments_and_blank_lines_are_skipped() {
    let items = ItemList::parse("A\nB\n# comment\n\nC").unwrap();
    let menu = Menu::open(items, None, VisibleLimits::new(1, 40)).unwrap();
    assert_eq!(labels(&menu), ["A", "B", "C"]);
}

#[test]
fn test_checkout_root_submenu() {
    let items = ItemList::parse("Header,^tag(root)\nX,echo x\nSub,^checkout(root)").unwrap();
    let menu = Menu::open(items, Some("root"), VisibleLimits::new(1, 40)).unwrap();
    assert_eq!(menu.title(), Some("Header"));
    assert_eq!(labels(&menu), ["X", "Sub"]);
}

#[test]
fn test_tag_in_spare_field() {
    let item = parse_line("Firefox,firefox,^tag(none)").unwrap();
    assert_eq!(item.label(), "Firefox");
    assert_eq!(item.command(), "firefox");
    assert_eq!(item.tag(), Some("none"));
}

#[test]
fn test_spare_field_tag_stays_in_root_menu() {
    let items = ItemList::parse("A,a\nFirefox,firefox,^tag(none)\nC,c").unwrap();
    let menu = Menu::open(items, None, VisibleLimits::new(1, 40)).unwrap();
    assert_eq!(menu.title(), None);
    assert_eq!(labels(&menu), ["A", "Firefox", "C"]);
}

#[test]
fn test_tag_prefix_matches_longer_header() {
    // "app" selects the first header whose tag starts with it
    let items = ItemList::parse("Applications,^tag(applications)\nEditor,vim").unwrap();
    let menu = Menu::open(items, Some("app"), VisibleLimits::new(1, 40)).unwrap();
    assert_eq!(menu.title(), Some("Applications"));
}

#[test]
fn test_empty_input_is_rejected() {
    let result = ItemList::parse("# only a comment\n\n");
    assert!(matches!(result, Err(MenuError::EmptyInput)));
}

#[test]
fn test_unknown_checkout_is_rejected() {
    let items = ItemList::parse("A\nB").unwrap();
    let result = Menu::open(items, Some("missing"), VisibleLimits::new(1, 40));
    assert!(matches!(result, Err(MenuError::TagNotFound(_))));
}

#[test]
fn test_sub_activation_spawns_and_exits_zero() {
    let items = ItemList::parse("Browser,^sub(firefox)\nEditor,vim").unwrap();
    let menu = Menu::open(items, None, VisibleLimits::new(1, 40)).unwrap();
    let geometry = GridGeometry::new(Point::default(), 20, 1);
    let mut session = MenuSession::new(menu, MenuConfig::default(), geometry);
    let mut spawner = Launched::default();

    let outcome = session.handle(InputEvent::Key(KeyAction::Activate), &mut spawner).unwrap();

    assert_eq!(outcome, Outcome::Activated(Activation::Spawned("firefox".into())));
    assert_eq!(outcome.exit_code(), Some(0));
    assert_eq!(spawner.0, ["firefox"]);
}

#[test]
fn test_viewport_stays_within_limits() {
    let input: String = (0..25).map(|i| format!("item {i}\n")).collect();

    for (min, max) in [(1, 1), (1, 5), (3, 7), (10, 40), (30, 40)] {
        let items = ItemList::parse(&input).unwrap();
        let mut menu = Menu::open(items, None, VisibleLimits::new(min, max)).unwrap();

        for step in 0..60 {
            match step % 5 {
                0 | 1 => menu.move_down(),
                2 => menu.page_down(),
                3 => menu.move_up(),
                _ => menu.page_up(),
            };
            let len = menu.viewport().len();
            assert!(len <= max, "({min}, {max}): {len} rows");
            assert!(len >= min.min(25), "({min}, {max}): {len} rows");
            assert!(menu.invariants_hold());
        }
    }
}

#[test]
fn test_paging_clamps_at_both_ends() {
    let input: String = (0..11).map(|i| format!("item {i}\n")).collect();
    let items = ItemList::parse(&input).unwrap();
    let mut menu = Menu::open(items, None, VisibleLimits::new(1, 4)).unwrap();

    for _ in 0..5 {
        menu.page_down();
    }
    assert_eq!(menu.last(), menu.subtail());
    assert_eq!(menu.viewport().len(), 4);

    for _ in 0..5 {
        menu.page_up();
    }
    assert_eq!(menu.first(), menu.subhead());
    assert_eq!(menu.viewport().len(), 4);
}
