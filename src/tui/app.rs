// App state - everything the event loop owns
//
// Network calls run as spawned tasks that report back with an AppMessage.
// Only the event loop mutates state, one message at a time.
//
// Every mount of the search view gets a new number. Results tagged with an
// older mount (e.g. a search that finished after logout) are dropped.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

use super::clipboard;
use super::components::toast::Toast;
use super::modal::Modal;
use super::theme::Theme;
use crate::api::{ApiError, DogApi};
use crate::config::Config;
use crate::filter::{FilterFlyout, FlyoutAction};
use crate::logging::LogBuffer;
use crate::login::{LoginForm, LoginOutcome};
use crate::model::{Dog, MatchResponse, PageSize, SearchPage};
use crate::router::Route;
use crate::search::{FetchStep, MatchStep, SearchController, SessionExpired};
use crate::session::Session;

/// Results reported by background tasks
#[derive(Debug)]
pub enum AppMessage {
    LoginFinished(Result<(), ApiError>),
    /// Logout finished (errors were already logged)
    LoggedOut,
    Search { mount: u64, event: SearchEvent },
}

#[derive(Debug)]
pub enum SearchEvent {
    Breeds(Result<Vec<String>, ApiError>),
    Ids {
        generation: u64,
        result: Result<SearchPage, ApiError>,
    },
    Details {
        generation: u64,
        result: Result<Vec<Dog>, ApiError>,
    },
    Match(Result<MatchResponse, ApiError>),
    MatchedDog(Result<Vec<Dog>, ApiError>),
}

pub struct App<A: DogApi> {
    pub(crate) api: Arc<A>,
    tx: mpsc::Sender<AppMessage>,

    pub route: Route,
    pub session: Session,
    pub login: LoginForm,
    pub search: SearchController,
    pub flyout: FilterFlyout,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub log_buffer: LogBuffer,
    pub show_logs: bool,
    pub theme: Theme,

    pub should_quit: bool,
    /// Advanced on every tick; drives spinners
    pub animation_frame: usize,

    default_page_size: PageSize,
    mount: u64,
}

impl<A: DogApi> App<A> {
    pub fn new(
        api: Arc<A>,
        session: Session,
        config: &Config,
        log_buffer: LogBuffer,
        tx: mpsc::Sender<AppMessage>,
    ) -> Self {
        Self {
            api,
            tx,
            route: Route::Login,
            session,
            login: LoginForm::new(),
            search: SearchController::new(config.default_page_size),
            flyout: FilterFlyout::new(),
            modal: None,
            toast: None,
            log_buffer,
            show_logs: false,
            theme: Theme::by_name(&config.theme),
            should_quit: false,
            animation_frame: 0,
            default_page_size: config.default_page_size,
            mount: 0,
        }
    }

    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn spinner(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn copy_text(&mut self, text: &str, what: &str) {
        match clipboard::copy_to_clipboard(text) {
            Ok(()) => self.show_toast(format!("✓ Copied {}", what)),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    /// Switch views. Each navigation mounts the target view from scratch.
    pub fn navigate(&mut self, path: &str) {
        let route = Route::resolve(path);
        tracing::info!("Navigating to {}", route.path());

        self.mount += 1;
        self.modal = None;
        self.route = route;

        match route {
            Route::Search => self.mount_search(),
            Route::Login | Route::NotFound => self.login = LoginForm::new(),
        }
    }

    fn session_expired(&mut self) {
        tracing::info!("Session expired, returning to login");
        self.navigate(Route::ROOT);
    }

    fn mount_search(&mut self) {
        self.search = SearchController::new(self.default_page_size);
        self.flyout = FilterFlyout::new();

        self.spawn_search(|api| async move { SearchEvent::Breeds(api.breeds().await) });
        self.start_fetch();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Background tasks
    // ─────────────────────────────────────────────────────────────────────

    fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(Arc<A>) -> Fut,
        Fut: Future<Output = AppMessage> + Send + 'static,
    {
        let work = task(Arc::clone(&self.api));
        let tx = self.tx.clone();
        tokio::spawn(async move {
            // Send only fails once the event loop is gone
            let _ = tx.send(work.await).await;
        });
    }

    fn spawn_search<F, Fut>(&self, task: F)
    where
        F: FnOnce(Arc<A>) -> Fut,
        Fut: Future<Output = SearchEvent> + Send + 'static,
    {
        let mount = self.mount;
        self.spawn(move |api| {
            let work = task(api);
            async move {
                AppMessage::Search {
                    mount,
                    event: work.await,
                }
            }
        });
    }

    /// Start a fetch cycle for the current query
    pub fn start_fetch(&mut self) {
        let request = self.search.begin_fetch();
        tracing::debug!(
            "Fetch #{}: page {} sort {}",
            request.generation,
            request.query.page_num,
            request.query.sort_param()
        );

        self.spawn_search(move |api| async move {
            let result = api.search(&request.query).await;
            SearchEvent::Ids {
                generation: request.generation,
                result,
            }
        });
    }

    /// Refetch after a query change, if it changed anything
    pub fn refetch_if(&mut self, changed: bool) {
        if changed {
            self.start_fetch();
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // User actions
    // ─────────────────────────────────────────────────────────────────────

    pub fn submit_login(&mut self) {
        let Some(credentials) = self.login.submit() else {
            return;
        };
        tracing::info!("Logging in as {}", credentials.name);

        self.spawn(move |api| async move {
            AppMessage::LoginFinished(api.login(&credentials).await)
        });
    }

    /// Logout never fails from the user's point of view
    pub fn logout(&mut self) {
        self.spawn(|api| async move {
            if let Err(e) = api.logout().await {
                tracing::warn!("Logout failed: {}", e);
            }
            AppMessage::LoggedOut
        });
    }

    pub fn start_match(&mut self) {
        let Some(ids) = self.search.begin_match() else {
            return;
        };
        tracing::info!("Matching among {} favorite dogs", ids.len());

        self.spawn_search(move |api| async move { SearchEvent::Match(api.find_match(&ids).await) });
    }

    pub fn open_filter(&mut self) {
        if !self.search.can_open_filter() {
            self.show_toast("Clear the selection to change filters");
            return;
        }
        self.flyout.open(&self.search.query().filters);
    }

    /// Commit what the flyout returned
    pub fn finish_flyout(&mut self, action: FlyoutAction) {
        let FlyoutAction::Apply(filters) = action else {
            return;
        };
        tracing::debug!("Applying {} filters", filters.active_count());

        let changed = self.search.apply_filters(filters);
        self.flyout.sync(&self.search.query().filters);
        self.refetch_if(changed);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Task results
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::LoginFinished(result) => {
                if let LoginOutcome::LoggedIn(name) = self.login.finish(result) {
                    tracing::info!("Logged in as {}", name);
                    self.session.update_user_name(&name);
                    self.navigate(Route::SEARCH);
                }
            }
            AppMessage::LoggedOut => self.navigate(Route::ROOT),
            AppMessage::Search { mount, event } => {
                if mount != self.mount {
                    tracing::debug!("Dropping result for an unmounted search view");
                    return;
                }
                self.handle_search_event(event);
            }
        }
    }

    fn handle_search_event(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Breeds(result) => match self.search.on_breeds(result) {
                Ok(()) => self.flyout.set_breed_options(self.search.breeds().to_vec()),
                Err(SessionExpired) => self.session_expired(),
            },
            SearchEvent::Ids { generation, result } => {
                let step = self.search.on_ids(generation, result);
                self.continue_fetch(step);
            }
            SearchEvent::Details { generation, result } => {
                let step = self.search.on_details(generation, result);
                self.continue_fetch(step);
            }
            SearchEvent::Match(result) => {
                let step = self.search.on_match(result);
                self.continue_match(step);
            }
            SearchEvent::MatchedDog(result) => {
                let step = self.search.on_match_details(result);
                self.continue_match(step);
            }
        }
    }

    fn continue_fetch(&mut self, step: FetchStep) {
        match step {
            FetchStep::FetchDetails { generation, ids } => {
                self.spawn_search(move |api| async move {
                    let result = api.dogs(&ids).await;
                    SearchEvent::Details { generation, result }
                })
            }
            FetchStep::Ready => self.session.set_dogs(self.search.dogs().to_vec()),
            FetchStep::SessionExpired => self.session_expired(),
            FetchStep::Failed | FetchStep::Stale => {}
        }
    }

    fn continue_match(&mut self, step: MatchStep) {
        match step {
            MatchStep::FetchMatchedDog(id) => {
                let ids = vec![id];
                self.spawn_search(move |api| async move {
                    SearchEvent::MatchedDog(api.dogs(&ids).await)
                })
            }
            MatchStep::Matched(dog) => self.modal = Some(Modal::MatchedDog(dog)),
            MatchStep::SessionExpired => self.session_expired(),
            MatchStep::Done => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{dog, Call, FakeApi};
    use crate::model::Credentials;
    use crate::session::MemorySessionStore;
    use std::time::Duration;

    type Rx = mpsc::Receiver<AppMessage>;

    fn app_with(api: FakeApi) -> (App<FakeApi>, Rx) {
        let (tx, rx) = mpsc::channel(16);
        let session = Session::load(Box::new(MemorySessionStore::default()));
        let app = App::new(
            Arc::new(api),
            session,
            &Config::default(),
            LogBuffer::new(),
            tx,
        );
        (app, rx)
    }

    /// Deliver task results until nothing arrives for a moment
    async fn settle(app: &mut App<FakeApi>, rx: &mut Rx) {
        while let Ok(Some(message)) = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await {
            app.handle_message(message);
        }
    }

    fn page(ids: &[&str], total: u64) -> SearchPage {
        SearchPage {
            result_ids: ids.iter().map(|s| s.to_string()).collect(),
            total,
        }
    }

    fn ids(dogs: &[Dog]) -> Vec<&str> {
        dogs.iter().map(|d| d.id.as_str()).collect()
    }

    fn count(calls: &[Call], pred: impl Fn(&Call) -> bool) -> usize {
        calls.iter().filter(|c| pred(c)).count()
    }

    #[tokio::test]
    async fn test_login_then_search_loads_rows() {
        let api = FakeApi::new();
        api.login.lock().unwrap().push_back(Ok(()));
        api.breeds.lock().unwrap().push_back(Ok(vec!["Akita".to_string()]));
        api.search.lock().unwrap().push_back(Ok(page(&["d1", "d2"], 2)));
        api.dogs.lock().unwrap().push_back(Ok(vec![dog("d1"), dog("d2")]));

        let (mut app, mut rx) = app_with(api);
        app.navigate("/");
        app.login.name = "Jane".to_string();
        app.login.email = "jane@example.com".to_string();
        app.submit_login();
        settle(&mut app, &mut rx).await;

        assert_eq!(app.route, Route::Search);
        assert_eq!(app.session.user_name(), "Jane");
        assert_eq!(ids(app.search.dogs()), vec!["d1", "d2"]);
        assert_eq!(app.search.total(), 2);
        assert_eq!(ids(app.session.dogs()), vec!["d1", "d2"]);
        assert_eq!(app.flyout.breed_options, vec!["Akita".to_string()]);
        assert!(!app.search.is_loading());

        let calls = app.api.calls();
        assert_eq!(
            calls[0],
            Call::Login(Credentials {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
            })
        );
        assert_eq!(count(&calls, |c| matches!(c, Call::Login(_))), 1);
        assert_eq!(count(&calls, |c| matches!(c, Call::Breeds)), 1);
        assert!(calls.contains(&Call::Dogs(vec!["d1".to_string(), "d2".to_string()])));
    }

    #[tokio::test]
    async fn test_login_failure_stays_on_login() {
        let api = FakeApi::new();
        api.login.lock().unwrap().push_back(Err(500));

        let (mut app, mut rx) = app_with(api);
        app.navigate("/login");
        app.login.name = "Jane".to_string();
        app.login.email = "jane@example.com".to_string();
        app.submit_login();
        settle(&mut app, &mut rx).await;

        assert_eq!(app.route, Route::Login);
        assert_eq!(app.login.error_message, Some(crate::login::LOGIN_ERROR));
        assert_eq!(app.login.name, "Jane");
        assert_eq!(app.session.user_name(), "");
    }

    #[tokio::test]
    async fn test_invalid_login_sends_nothing() {
        let (mut app, mut rx) = app_with(FakeApi::new());
        app.navigate("/");
        app.login.name = "Jane".to_string();
        app.login.email = "jane-at-example".to_string();
        app.submit_login();
        settle(&mut app, &mut rx).await;

        assert!(app.login.email_error);
        assert!(app.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_search_returns_to_login() {
        let api = FakeApi::new();
        api.breeds.lock().unwrap().push_back(Ok(Vec::new()));
        api.search.lock().unwrap().push_back(Err(401));

        let (mut app, mut rx) = app_with(api);
        app.navigate("/search");
        settle(&mut app, &mut rx).await;

        assert_eq!(app.route, Route::Login);
        assert_eq!(count(&app.api.calls(), |c| matches!(c, Call::Dogs(_))), 0);
    }

    #[tokio::test]
    async fn test_results_from_previous_mount_are_dropped() {
        let api = FakeApi::new();
        // First mount's search fails with 401; the second mount succeeds
        api.search.lock().unwrap().push_back(Err(401));
        api.search.lock().unwrap().push_back(Ok(page(&[], 0)));

        let (mut app, mut rx) = app_with(api);
        app.navigate("/search");
        app.navigate("/search");
        settle(&mut app, &mut rx).await;

        assert_eq!(app.route, Route::Search);
        assert!(app.search.dogs().is_empty());
        assert!(!app.search.is_loading());
    }

    #[tokio::test]
    async fn test_match_opens_modal_and_clears_selection() {
        let api = FakeApi::new();
        api.breeds.lock().unwrap().push_back(Ok(Vec::new()));
        api.search.lock().unwrap().push_back(Ok(page(&["d1", "d2"], 2)));
        api.dogs.lock().unwrap().push_back(Ok(vec![dog("d1"), dog("d2")]));
        api.matches.lock().unwrap().push_back(Ok(MatchResponse {
            matched: Some("d9".to_string()),
        }));
        api.dogs.lock().unwrap().push_back(Ok(vec![dog("d9")]));

        let (mut app, mut rx) = app_with(api);
        app.navigate("/search");
        settle(&mut app, &mut rx).await;

        app.search.toggle_all();
        app.start_match();
        assert!(app.search.is_matching());
        settle(&mut app, &mut rx).await;

        assert_eq!(app.modal, Some(Modal::MatchedDog(dog("d9"))));
        assert!(app.search.selected().is_empty());
        assert!(!app.search.is_matching());

        let calls = app.api.calls();
        assert!(calls.contains(&Call::Match(vec!["d1".to_string(), "d2".to_string()])));
        assert!(calls.contains(&Call::Dogs(vec!["d9".to_string()])));
    }

    #[tokio::test]
    async fn test_match_unauthorized_returns_to_login() {
        let api = FakeApi::new();
        api.breeds.lock().unwrap().push_back(Ok(Vec::new()));
        api.search.lock().unwrap().push_back(Ok(page(&["d1"], 1)));
        api.dogs.lock().unwrap().push_back(Ok(vec![dog("d1")]));
        api.matches.lock().unwrap().push_back(Err(401));

        let (mut app, mut rx) = app_with(api);
        app.navigate("/search");
        settle(&mut app, &mut rx).await;

        app.search.toggle_all();
        app.start_match();
        settle(&mut app, &mut rx).await;

        assert_eq!(app.route, Route::Login);
        assert!(app.modal.is_none());
        assert_eq!(app.search.selected(), &["d1".to_string()]);
        // No lookup of a matched dog after the 401
        assert_eq!(count(&app.api.calls(), |c| matches!(c, Call::Dogs(_))), 1);
    }

    #[tokio::test]
    async fn test_unauthorized_breeds_returns_to_login() {
        let api = FakeApi::new();
        api.breeds.lock().unwrap().push_back(Err(401));
        api.search.lock().unwrap().push_back(Ok(page(&[], 0)));

        let (mut app, mut rx) = app_with(api);
        app.navigate("/search");
        settle(&mut app, &mut rx).await;

        assert_eq!(app.route, Route::Login);
        assert!(app.flyout.breed_options.is_empty());
    }

    #[tokio::test]
    async fn test_apply_filters_refetches_first_page() {
        let api = FakeApi::new();
        api.breeds.lock().unwrap().push_back(Ok(vec!["Akita".to_string()]));
        api.search.lock().unwrap().push_back(Ok(page(&[], 0)));
        api.search.lock().unwrap().push_back(Ok(page(&[], 0)));

        let (mut app, mut rx) = app_with(api);
        app.navigate("/search");
        settle(&mut app, &mut rx).await;

        app.open_filter();
        assert!(app.flyout.open);
        app.flyout.toggle_breed_at_cursor();
        let action = app.flyout.apply();
        app.finish_flyout(action);
        settle(&mut app, &mut rx).await;

        let searches: Vec<_> = app
            .api
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Search(query) => Some(query),
                _ => None,
            })
            .collect();
        assert_eq!(searches.len(), 2);
        assert_eq!(searches[1].filters.breeds, vec!["Akita".to_string()]);
        assert_eq!(searches[1].page_num, 0);
    }

    #[tokio::test]
    async fn test_filter_disabled_while_dogs_selected() {
        let (mut app, _rx) = app_with(FakeApi::new());
        app.route = Route::Search;
        app.search.toggle_row("d1");

        app.open_filter();
        assert!(!app.flyout.open);
        assert!(app.toast.is_some());
    }

    #[tokio::test]
    async fn test_logout_always_returns_to_login() {
        let (mut app, mut rx) = app_with(FakeApi::new());
        app.navigate("/search");
        app.logout();
        settle(&mut app, &mut rx).await;

        assert_eq!(app.route, Route::Login);
        assert!(app.api.calls().contains(&Call::Logout));
    }
}
