#![allow(clippy::disallowed_methods)]

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use prebuild_core::{ConfigurationId, ConfigurationLookup, Prebuild, PrebuildId};
use ui::prebuilds::{ConfigurationCache, ConfigurationFetch, PrebuildListItem};

type LookupFuture = Pin<Box<dyn Future<Output = ConfigurationLookup>>>;

thread_local! {
    static CACHE: Cell<Option<ConfigurationCache>> = const { Cell::new(None) };
}

static SHARED_ROW_FETCHES: AtomicUsize = AtomicUsize::new(0);
static FAILED_FETCHES: AtomicUsize = AtomicUsize::new(0);
static RESOLVED_FETCHES: AtomicUsize = AtomicUsize::new(0);

fn shared_row_fetch(_: ConfigurationId) -> LookupFuture {
    SHARED_ROW_FETCHES.fetch_add(1, Ordering::SeqCst);
    Box::pin(async { ConfigurationLookup::Failed })
}

fn failed_fetch(_: ConfigurationId) -> LookupFuture {
    FAILED_FETCHES.fetch_add(1, Ordering::SeqCst);
    Box::pin(async { ConfigurationLookup::Failed })
}

fn resolved_fetch(id: ConfigurationId) -> LookupFuture {
    RESOLVED_FETCHES.fetch_add(1, Ordering::SeqCst);
    Box::pin(async move {
        ConfigurationLookup::Resolved {
            id,
            name: "acme/widgets".to_string(),
        }
    })
}

fn provide_cache(fetch: ConfigurationFetch) -> ConfigurationCache {
    let cache = use_context_provider(|| ConfigurationCache::with_fetch(fetch));
    CACHE.with(|slot| slot.set(Some(cache)));
    cache
}

fn cache_only(fetch: ConfigurationFetch) -> Element {
    provide_cache(fetch);
    rsx! {}
}

fn shared_rows(fetch: ConfigurationFetch) -> Element {
    provide_cache(fetch);
    let configuration_id = ConfigurationId::parse("cfg-shared").unwrap();

    rsx! {
        table {
            tbody {
                for n in 0..3 {
                    PrebuildListItem {
                        key: "{n}",
                        prebuild: Prebuild::new(configuration_id.clone(), "main")
                            .with_id(PrebuildId::parse(&format!("pb-{n}")).unwrap()),
                    }
                }
            }
        }
    }
}

fn cache() -> ConfigurationCache {
    CACHE.with(|slot| slot.get()).expect("cache provided by root")
}

/// Run effects and spawned fetches until the dom goes quiet.
async fn settle(dom: &mut VirtualDom) {
    for _ in 0..5 {
        let _ = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
    }
}

#[tokio::test]
async fn rows_sharing_a_key_share_one_fetch() {
    let mut dom = VirtualDom::new_with_props(shared_rows, shared_row_fetch as ConfigurationFetch);
    dom.rebuild_in_place();

    let html = dioxus_ssr::render(&dom);
    assert_eq!(html.matches("loading-state").count(), 3);
    assert!(!html.contains("Unknown repository"));

    settle(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert_eq!(html.matches("Unknown repository").count(), 3);
    assert!(!html.contains("loading-state"));
    assert_eq!(SHARED_ROW_FETCHES.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_entries_are_fetched_again() {
    let mut dom = VirtualDom::new_with_props(cache_only, failed_fetch as ConfigurationFetch);
    dom.rebuild_in_place();
    let cache = cache();
    let id = ConfigurationId::parse("cfg-gone").unwrap();

    assert_eq!(
        dom.in_runtime(|| cache.get(&id)),
        ConfigurationLookup::Loading
    );

    dom.in_runtime(|| cache.request(id.clone()));
    assert_eq!(
        dom.in_runtime(|| cache.get(&id)),
        ConfigurationLookup::Loading
    );
    settle(&mut dom).await;
    assert_eq!(dom.in_runtime(|| cache.get(&id)), ConfigurationLookup::Failed);
    assert_eq!(FAILED_FETCHES.load(Ordering::SeqCst), 1);

    dom.in_runtime(|| cache.request(id.clone()));
    settle(&mut dom).await;
    assert_eq!(dom.in_runtime(|| cache.get(&id)), ConfigurationLookup::Failed);
    assert_eq!(FAILED_FETCHES.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn resolved_entries_are_not_fetched_again() {
    let mut dom = VirtualDom::new_with_props(cache_only, resolved_fetch as ConfigurationFetch);
    dom.rebuild_in_place();
    let cache = cache();
    let id = ConfigurationId::parse("cfg-1").unwrap();

    dom.in_runtime(|| cache.request(id.clone()));
    dom.in_runtime(|| cache.request(id.clone()));
    settle(&mut dom).await;

    let resolved = ConfigurationLookup::Resolved {
        id: id.clone(),
        name: "acme/widgets".to_string(),
    };
    assert_eq!(dom.in_runtime(|| cache.get(&id)), resolved);

    dom.in_runtime(|| cache.request(id.clone()));
    settle(&mut dom).await;
    assert_eq!(dom.in_runtime(|| cache.get(&id)), resolved);
    assert_eq!(RESOLVED_FETCHES.load(Ordering::SeqCst), 1);
}
