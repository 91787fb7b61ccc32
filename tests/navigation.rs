//! End-to-end navigation through the public API: a site built from
//! configuration, driven by host events, observed through a subscriber.

use std::cell::RefCell;
use std::rc::Rc;

use sticks_site::app::{KeyPress, KeyTarget, StateStore};
use sticks_site::infrastructure::{History, MemoryHistory};
use sticks_site::storage::{JsonPreferences, MemoryPreferences, Preferences};
use sticks_site::{
    handle_event, initialize, Action, AppPhase, ApplicationState, Config, Event, Language, Section, Site,
};

type TestSite = Site<MemoryHistory, MemoryPreferences>;

fn site_at(url: &str) -> TestSite {
    initialize(&Config::default(), MemoryHistory::new(url), MemoryPreferences::default())
}

fn record(site: &TestSite) -> Rc<RefCell<Vec<ApplicationState>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    // Subscription handles do not unsubscribe on drop.
    let _ = site.store().subscribe(StateStore::listener(move |state| {
        sink.borrow_mut().push(state.clone());
        Ok(())
    }));
    seen
}

fn send<P: Preferences>(site: &mut Site<MemoryHistory, P>, event: Event) -> Vec<Action> {
    let (consumed, actions) = handle_event(site, &event).unwrap();
    assert!(consumed, "{event:?} was not consumed");
    actions
}

#[test]
fn deep_link_opens_expanded_then_later_sections_animate() {
    let mut site = site_at("/");

    send(&mut site, Event::navigate("/en/portfolio/lg-2023-new-years-message"));
    let state = site.state();
    assert_eq!(state.current_section, Some(Section::Portfolio));
    assert_eq!(state.language, Language::En);
    assert_eq!(state.portfolio_slug.as_deref(), Some("lg-2023-new-years-message"));
    assert_eq!(state.app_state, AppPhase::Expanded);

    send(&mut site, Event::navigate("/en/about"));
    let state = site.state();
    assert_eq!(state.current_section, Some(Section::About));
    assert_eq!(state.portfolio_slug, None);
    assert_eq!(state.app_state, AppPhase::Expanding);
}

#[test]
fn unknown_paths_land_on_the_home_grid() {
    let mut site = site_at("/about");
    site.start("ko-KR");

    send(&mut site, Event::navigate("/xyz"));
    let state = site.state();
    assert_eq!(state.current_section, None);
    assert_eq!(state.language, Language::Ko);
    assert_eq!(state.app_state, AppPhase::Idle);
}

#[test]
fn english_visitor_on_root_is_redirected_once() {
    let mut site = site_at("/");
    site.start("en-US");

    assert_eq!(site.router.history().pathname(), "/en/");
    assert_eq!(site.router.history().len(), 1);
    assert_eq!(site.state().language, Language::En);

    send(&mut site, Event::SwitchLanguage(Language::Ko));
    send(&mut site, Event::HistoryBack);
    send(&mut site, Event::HistoryForward);
    assert_eq!(site.router.history().pathname(), "/");
    assert_eq!(site.state().language, Language::Ko);
}

#[test]
fn detection_can_be_disabled_in_config() {
    let config = Config::from_toml_str("detect_language = false").unwrap();
    let mut site = initialize(&config, MemoryHistory::new("/"), MemoryPreferences::default());
    site.start("en-US");

    assert_eq!(site.router.history().pathname(), "/");
    assert_eq!(site.state().language, Language::Ko);
}

#[test]
fn deep_links_are_never_redirected() {
    let mut site = site_at("/services");
    site.start("en-US");

    assert_eq!(site.router.history().pathname(), "/services");
    assert_eq!(site.state().language, Language::Ko);
    assert_eq!(site.state().app_state, AppPhase::Expanded);
}

#[test]
fn every_navigation_renders_exactly_once() {
    let mut site = site_at("/");
    let seen = record(&site);
    site.start("ko-KR");

    send(&mut site, Event::navigate("/services"));
    send(&mut site, Event::ToggleLanguage);
    send(&mut site, Event::CloseSection);

    let seen = seen.borrow();
    let paths: Vec<_> = seen
        .iter()
        .map(|s| sticks_site::build_path(s.current_section, s.language, s.portfolio_slug.as_deref()))
        .collect();
    assert_eq!(paths, ["/", "/services", "/en/services", "/en/"]);
}

#[test]
fn portfolio_modal_round_trip_keeps_language() {
    let mut site = site_at("/en/portfolio");
    site.start("en-US");

    send(
        &mut site,
        Event::OpenPortfolioItem {
            slug: "samsung-galaxy-campaign".to_string(),
        },
    );
    assert_eq!(
        site.router.history().pathname(),
        "/en/portfolio/samsung-galaxy-campaign"
    );

    send(&mut site, Event::SwitchLanguage(Language::Ko));
    assert_eq!(site.router.history().pathname(), "/portfolio/samsung-galaxy-campaign");

    send(&mut site, Event::ClosePortfolioItem);
    let state = site.state();
    assert_eq!(site.router.history().pathname(), "/portfolio");
    assert_eq!(state.current_section, Some(Section::Portfolio));
    assert_eq!(state.portfolio_slug, None);
}

#[test]
fn narration_follows_section_changes() {
    let mut site = site_at("/");
    site.start("ko-KR");

    let actions = send(&mut site, Event::navigate("/about"));
    assert!(matches!(
        actions.as_slice(),
        [Action::PlayNarration { section: Section::About, .. }]
    ));

    let actions = send(&mut site, Event::Key(KeyPress::new("c")));
    assert!(matches!(
        actions.as_slice(),
        [Action::StopNarration, Action::PlayNarration { section: Section::Clients, .. }]
    ));

    assert!(send(&mut site, Event::SwitchLanguage(Language::En)).is_empty());

    assert_eq!(send(&mut site, Event::CloseSection), vec![Action::StopNarration]);
}

#[test]
fn typing_in_a_form_is_not_a_shortcut() {
    let mut site = site_at("/");
    site.start("ko-KR");

    let (consumed, actions) =
        handle_event(&mut site, &Event::Key(KeyPress::new("e").on(KeyTarget::Input))).unwrap();
    assert!(!consumed);
    assert!(actions.is_empty());
    assert_eq!(site.state().language, Language::Ko);
}

#[test]
fn mute_persists_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let config = Config::default();

    {
        let prefs = JsonPreferences::new(path.clone()).unwrap();
        let mut site = initialize(&config, MemoryHistory::new("/"), prefs);
        site.start("ko-KR");
        send(&mut site, Event::navigate("/about"));

        let actions = send(&mut site, Event::ToggleMute);
        assert_eq!(
            actions,
            vec![Action::StopNarration, Action::MuteChanged { muted: true }]
        );
    }

    let prefs = JsonPreferences::new(path).unwrap();
    assert_eq!(prefs.get("audioMuted").unwrap().as_deref(), Some("true"));

    let mut site = initialize(&config, MemoryHistory::new("/"), prefs);
    site.start("ko-KR");
    assert!(site.narration.is_muted());
    assert!(send(&mut site, Event::navigate("/services")).is_empty());
}
