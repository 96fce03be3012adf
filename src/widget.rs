use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::{OrderId, OrderRecord, StatusMessage};
use crate::order_client::OrderClient;
use crate::page::{
    Document, LOAD_BUTTON, ORDER_ID_INPUT, ORDER_JSON, Region, RegionState, STATUS, TextInput,
};

/// What a transition does to the JSON region.
enum OrderJson {
    Hide,
    Show(OrderRecord),
    Keep,
}

/// Status and JSON region as one consistent picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub status: RegionState,
    pub order_json: RegionState,
}

/// Binds the order lookup page to the order service.
///
/// Every trigger starts an independent lookup. Overlapping lookups are not
/// cancelled or sequenced: whichever response lands last owns the page.
pub struct OrderLookup {
    input: TextInput,
    status: Region,
    order_json: Region,
    client: OrderClient,
    // Held for every transition so steps from different lookups never interleave.
    render: Mutex<()>,
}

impl OrderLookup {
    /// Resolve the page elements and listen on the load button.
    ///
    /// Returns `None`, leaving the page untouched, if any element is missing.
    pub fn mount(document: &Document, client: OrderClient) -> Option<Arc<Self>> {
        let input = document.text_input(ORDER_ID_INPUT)?;
        let button = document.button(LOAD_BUTTON)?;
        let status = document.region(STATUS)?;
        let order_json = document.region(ORDER_JSON)?;

        let widget = Arc::new(Self {
            input,
            status,
            order_json,
            client,
            render: Mutex::new(()),
        });

        let listener = Arc::clone(&widget);
        button.add_listener(move || listener.trigger());

        Some(widget)
    }

    /// Validate the input and start a lookup.
    ///
    /// The status and JSON regions are updated before this returns; the
    /// network call runs on the returned task. Must be called from within a
    /// tokio runtime when the input is not blank.
    pub fn trigger(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let order_id = match OrderId::parse(self.input.value()) {
            Ok(order_id) => order_id,
            Err(_) => {
                self.render(StatusMessage::EnterOrderId, OrderJson::Hide);
                return None;
            }
        };

        self.render(StatusMessage::Loading, OrderJson::Hide);

        let span = tracing::info_span!(
            "Order lookup",
            lookup_id = %Uuid::new_v4(),
            order_id = %order_id
        );
        let widget = Arc::clone(self);
        Some(tokio::spawn(
            async move { widget.fetch_and_render(order_id).await }.instrument(span),
        ))
    }

    async fn fetch_and_render(&self, order_id: OrderId) {
        match self.client.fetch_order(&order_id).await {
            Ok(order) => {
                self.render(StatusMessage::Done, OrderJson::Show(order));
                tracing::info!("Order rendered");
            }
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Order lookup failed"
                );
                self.render(StatusMessage::from(&e), OrderJson::Keep);
            }
        }
    }

    /// Read both regions without a transition landing in between.
    pub fn view(&self) -> PageView {
        let _guard = self.render.lock();
        PageView {
            status: self.status.snapshot(),
            order_json: self.order_json.snapshot(),
        }
    }

    fn render(&self, status: StatusMessage, order_json: OrderJson) {
        let _guard = self.render.lock();
        match order_json {
            OrderJson::Hide => self.order_json.hide(),
            OrderJson::Show(order) => {
                self.order_json.set_text(order);
                self.order_json.show();
            }
            OrderJson::Keep => {}
        }
        self.status.set_text(status);
    }
}
