#![allow(clippy::disallowed_methods)]

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use dioxus::prelude::*;
use prebuild_core::{
    Author, Commit, ConfigurationId, ConfigurationLookup, Prebuild, PrebuildId, PrebuildPhase,
    PrebuildStatus, TriggeredTime,
};
use ui::prebuilds::{ConfigurationField, PrebuildRow, PrebuildRowProps};

fn render<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 3, 5, 14, 30, 0)
        .single()
        .expect("unambiguous local time")
}

fn field(lookup: ConfigurationLookup) -> Element {
    rsx! {
        ConfigurationField { lookup }
    }
}

fn row(props: PrebuildRowProps) -> Element {
    rsx! {
        table {
            tbody {
                PrebuildRow {
                    prebuild: props.prebuild,
                    configuration: props.configuration,
                    now: props.now,
                }
            }
        }
    }
}

fn full_prebuild(start: DateTime<Utc>) -> Prebuild {
    Prebuild::new(ConfigurationId::parse("cfg-1").unwrap(), "feature/cache")
        .with_id(PrebuildId::parse("pb-42").unwrap())
        .with_status(PrebuildStatus::new(PrebuildPhase::Building).started_at(start))
        .with_commit(Commit {
            sha: "9c41d2e".to_string(),
            message: "Cache rendered widgets per tenant\n\nLonger explanation".to_string(),
            author: Some(Author {
                name: "Ada Lovelace".to_string(),
                avatar_url: "https://avatars.example.com/ada.png".to_string(),
            }),
        })
}

fn row_props(prebuild: Prebuild) -> PrebuildRowProps {
    PrebuildRowProps {
        prebuild,
        configuration: ConfigurationLookup::Failed,
        now: now(),
    }
}

#[test]
fn loading_field_shows_only_an_indicator() {
    let html = render(field, ConfigurationLookup::Loading);
    assert!(html.contains("loading-state"));
    assert!(!html.contains("Unknown repository"));
    assert!(!html.contains("<a"));
}

#[test]
fn failed_field_shows_unknown_repository() {
    let html = render(field, ConfigurationLookup::Failed);
    assert!(html.contains(">Unknown repository<"));
    assert!(!html.contains("<a"));
}

#[derive(Debug, Clone, Routable, PartialEq)]
enum TestRoute {
    #[route("/")]
    ResolvedField {},
}

#[component]
fn ResolvedField() -> Element {
    rsx! {
        ConfigurationField {
            lookup: ConfigurationLookup::Resolved {
                id: ConfigurationId::parse("cfg-1").unwrap(),
                name: "acme/widgets".to_string(),
            },
        }
    }
}

fn routed(_: ()) -> Element {
    rsx! {
        Router::<TestRoute> {}
    }
}

#[test]
fn resolved_field_links_to_repository() {
    let html = render(routed, ());
    assert!(html.contains(r#"href="/repositories/cfg-1""#));
    assert!(html.contains("acme/widgets"));
    assert!(!html.contains("Unknown repository"));
}

#[test]
fn row_renders_all_cells() {
    let start = (now() - Duration::hours(1)).with_timezone(&Utc);
    let html = render(row, row_props(full_prebuild(start)));
    let triggered = TriggeredTime::new(start, &now());

    assert!(html.contains("Unknown repository"));
    assert!(html.contains(">feature/cache<"));

    assert!(html.contains(">Cache rendered widgets per tenant<"));
    assert!(!html.contains("Longer explanation"));
    assert!(html.contains(r#"src="https://avatars.example.com/ada.png""#));
    assert!(html.contains(">Ada Lovelace<"));

    assert_eq!(triggered.label, "Today at 1:30 PM");
    assert!(html.contains(">Today at 1:30 PM<"));
    assert!(html.contains(&format!(r#"datetime="{}""#, triggered.datetime)));
    assert!(html.contains(&format!(r#"title="{}""#, triggered.title)));

    assert!(html.contains("text-blue-500"));
    assert!(html.contains(">running<"));

    assert!(html.contains(r#"href="/prebuilds/pb-42""#));
    assert!(html.contains(r#"aria-disabled="true""#));
    assert!(html.contains(">View<"));
}

#[test]
fn row_without_commit_or_status_leaves_cells_empty() {
    let prebuild = Prebuild::new(ConfigurationId::parse("cfg-1").unwrap(), "main")
        .with_id(PrebuildId::parse("pb-7").unwrap());
    let html = render(row, row_props(prebuild));

    assert!(!html.contains("<img"));
    assert!(!html.contains("<time"));
    assert!(html.contains(">pending<"));
    assert!(html.contains(r#"href="/prebuilds/pb-7""#));
}

#[test]
fn commit_without_author_is_not_rendered() {
    let mut prebuild = full_prebuild(now().with_timezone(&Utc));
    if let Some(commit) = prebuild.commit.as_mut() {
        commit.author = None;
    }
    let html = render(row, row_props(prebuild));

    assert!(!html.contains("<img"));
    assert!(!html.contains("Cache rendered widgets"));
}

#[test]
fn older_trigger_times_use_dates() {
    let last_year = Utc.with_ymd_and_hms(2022, 12, 25, 12, 0, 0).unwrap();
    let html = render(row, row_props(full_prebuild(last_year)));
    assert!(html.contains(">Dec 25, 2022<"));
}

#[test]
fn rendering_is_idempotent() {
    let start = (now() - Duration::days(2)).with_timezone(&Utc);
    let first = render(row, row_props(full_prebuild(start)));
    let second = render(row, row_props(full_prebuild(start)));
    assert_eq!(first, second);
}
