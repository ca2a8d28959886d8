use folio::app::App;
use folio::config::Config;
use folio::content::Portfolio;
use folio::nav::section::ALL_SECTIONS;
use folio::nav::{ItemId, SectionId, TieBreak, ViewMode};
use folio::ui::theme::Theme;
use folio::viewport::ElementKey;

// Short single-line entries so every section is 5-9 rows tall and a
// 6-row viewport only ever holds one of them at 50% or more.
const COMPACT: &str = r#"
name = "Test Person"

about = ["one", "two", "three", "four"]

[[projects]]
id = "proj-1"
name = "Alpha"
summary = "first"

[[projects]]
id = "proj-2"
name = "Beta"
summary = "second"

[[roles]]
company = "Acme"
title = "Dev"
start = "2020"
end = "present"

[[contact]]
label = "Email"
value = "a@b.c"

[[contact]]
label = "Web"
value = "b.c"

[[contact]]
label = "Chat"
value = "c.d"
"#;

fn app_with(config: Config) -> App {
    let portfolio = Portfolio::parse(COMPACT).unwrap();
    let mut app = App::new(config, Theme::default(), portfolio);
    app.resize(40, 6);
    app.tick();
    app
}

fn settle(app: &mut App) {
    for _ in 0..500 {
        app.tick();
        if !app.nav.scroller().is_animating() {
            break;
        }
    }
    app.tick();
}

#[test]
fn test_compact_page_layout() {
    let app = app_with(Config::default());
    let heights: Vec<u16> = ALL_SECTIONS
        .into_iter()
        .map(|s| app.page.geometry.block(ElementKey::Section(s)).unwrap().height)
        .collect();
    assert_eq!(heights, vec![9, 7, 7, 5]);
}

#[test]
fn test_navigation_settles_on_requested_section() {
    let mut app = app_with(Config::default());
    let order = [
        SectionId::Contact,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::About,
        SectionId::Experience,
        SectionId::Contact,
    ];
    for section in order {
        app.navigate_to(section);
        settle(&mut app);
        assert_eq!(app.active_section(), section, "after navigating to {section}");
    }
}

#[test]
fn test_navigation_settles_without_smooth_scroll() {
    let config = Config {
        smooth_scroll: false,
        tie_break: TieBreak::HighestRatio,
        ..Config::default()
    };
    let mut app = app_with(config);
    for section in ALL_SECTIONS.into_iter().rev() {
        app.navigate_to(section);
        settle(&mut app);
        assert_eq!(app.active_section(), section);
    }
}

#[test]
fn test_navigate_from_detail_returns_to_list() {
    let mut app = app_with(Config::default());
    app.navigate_to(SectionId::Projects);
    settle(&mut app);
    app.select(ItemId::new("proj-2"));
    settle(&mut app);
    assert_eq!(app.view_mode(), &ViewMode::Detail(ItemId::new("proj-2")));
    assert_eq!(app.active_section(), SectionId::Projects);

    app.navigate_to(SectionId::Experience);
    settle(&mut app);
    assert_eq!(app.view_mode(), &ViewMode::List);
    assert_eq!(app.active_section(), SectionId::Experience);
}

#[test]
fn test_manual_scrolling_updates_active_section() {
    let mut app = app_with(Config::default());
    app.scroll_to_bottom();
    app.tick();
    assert_eq!(app.active_section(), SectionId::Contact);
    app.scroll_to_top();
    app.tick();
    assert_eq!(app.active_section(), SectionId::About);
}

#[test]
fn test_navigation_lands_when_whole_page_fits() {
    for tie_break in [TieBreak::LastInBatch, TieBreak::HighestRatio] {
        let config = Config {
            tie_break,
            ..Config::default()
        };
        let mut app = App::new(config, Theme::default(), Portfolio::bundled().unwrap());
        app.resize(60, 200);
        app.tick();
        assert_eq!(app.viewport.offset, 0);

        for section in [
            SectionId::About,
            SectionId::Experience,
            SectionId::Projects,
            SectionId::About,
        ] {
            app.navigate_to(section);
            settle(&mut app);
            assert_eq!(app.active_section(), section, "{tie_break:?}");
            assert_eq!(app.viewport.offset, 0);
        }
    }
}
