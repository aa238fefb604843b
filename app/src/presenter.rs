//! The three user actions and the view state they write to.
//!
//! # Design
//! `Presenter` is cheap to clone; clones share one `MainView` behind an async
//! mutex, so actions can be spawned as independent tasks and overlap. The
//! view lock is only taken to read the threshold text and to apply a result,
//! never across a request.
//!
//! Each surface has its own ticket counter. An action takes a ticket before
//! its request; on completion the result (or its error notification) is
//! applied only if that ticket is still the newest for the surface, so a
//! slow response can no longer overwrite a newer one.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use adprice_core::RequestFailed;
use tokio::sync::Mutex;
use tracing::debug;

use crate::currency::{format_currency, Locale};
use crate::input::{parse_threshold, InputEvent};
use crate::service::AdService;
use crate::view::MainView;

pub const INVALID_COST_MESSAGE: &str = "Please enter a valid cost.";

/// Blocking, user-facing message sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// What an action did to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The surface now shows the new result.
    Updated,
    /// The request failed and a notification was shown.
    Failed,
    /// The input did not parse; no request was sent.
    Rejected,
    /// A newer request for the same surface was issued meanwhile.
    Superseded,
}

#[derive(Debug, Clone, Copy)]
enum Surface {
    AverageCost,
    AdsAboveCost,
    PopularAds,
}

#[derive(Debug, Default)]
struct Tickets {
    average_cost: AtomicU64,
    ads_above_cost: AtomicU64,
    popular_ads: AtomicU64,
}

impl Tickets {
    fn counter(&self, surface: Surface) -> &AtomicU64 {
        match surface {
            Surface::AverageCost => &self.average_cost,
            Surface::AdsAboveCost => &self.ads_above_cost,
            Surface::PopularAds => &self.popular_ads,
        }
    }

    fn issue(&self, surface: Surface) -> u64 {
        self.counter(surface).fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, surface: Surface, ticket: u64) -> bool {
        self.counter(surface).load(Ordering::SeqCst) == ticket
    }
}

#[derive(Clone)]
pub struct Presenter {
    service: AdService,
    view: Arc<Mutex<MainView>>,
    notifier: Arc<dyn Notifier>,
    locale: Locale,
    tickets: Arc<Tickets>,
}

impl Presenter {
    pub fn new(service: AdService, notifier: Arc<dyn Notifier>, locale: Locale) -> Self {
        Self {
            service,
            view: Arc::new(Mutex::new(MainView::new())),
            notifier,
            locale,
            tickets: Arc::new(Tickets::default()),
        }
    }

    /// Feed a focus or text event to the threshold field.
    /// Returns whether the placeholder is now visible.
    pub async fn handle_input(&self, event: InputEvent) -> bool {
        self.view.lock().await.threshold.handle(event)
    }

    /// Register an observer of placeholder visibility.
    pub async fn on_placeholder_change(&self, observer: impl Fn(bool) + Send + Sync + 'static) {
        self.view.lock().await.threshold.subscribe(observer);
    }

    pub async fn with_view<R>(&self, f: impl FnOnce(&MainView) -> R) -> R {
        let view = self.view.lock().await;
        f(&*view)
    }

    pub async fn render(&self) -> String {
        self.view.lock().await.render(self.locale)
    }

    pub async fn get_average_cost(&self) -> ActionOutcome {
        let locale = self.locale;
        self.run(
            Surface::AverageCost,
            "Error getting the average cost",
            self.service.get_average_ad_cost(),
            move |view, cost| {
                view.average_cost_label =
                    format!("Average ad cost: {}", format_currency(cost, locale));
            },
        )
        .await
    }

    pub async fn get_ads_above_cost(&self) -> ActionOutcome {
        let text = self.view.lock().await.threshold.text().to_string();
        let threshold = match parse_threshold(&text, self.locale) {
            Ok(threshold) => threshold,
            Err(e) => {
                debug!(error = %e, "threshold rejected");
                self.notifier.notify(INVALID_COST_MESSAGE);
                return ActionOutcome::Rejected;
            }
        };
        self.run(
            Surface::AdsAboveCost,
            "Error getting ads above the cost",
            self.service.get_ads_above_cost(threshold),
            |view, ads| view.ads_above_cost = ads,
        )
        .await
    }

    pub async fn get_most_popular_ads(&self) -> ActionOutcome {
        self.run(
            Surface::PopularAds,
            "Error getting the most popular ads",
            self.service.get_most_popular_ads(),
            |view, ads| view.popular_ads = ads,
        )
        .await
    }

    async fn run<T>(
        &self,
        surface: Surface,
        error_prefix: &str,
        request: impl Future<Output = Result<T, RequestFailed>>,
        apply: impl FnOnce(&mut MainView, T),
    ) -> ActionOutcome {
        let ticket = self.tickets.issue(surface);
        let result = request.await;

        let mut view = self.view.lock().await;
        if !self.tickets.is_current(surface, ticket) {
            debug!(?surface, ticket, "dropping superseded completion");
            return ActionOutcome::Superseded;
        }
        match result {
            Ok(value) => {
                apply(&mut *view, value);
                ActionOutcome::Updated
            }
            Err(err) => {
                drop(view);
                self.notifier
                    .notify(&format!("{error_prefix}: {}\n{}", err.context, err.cause));
                ActionOutcome::Failed
            }
        }
    }
}
