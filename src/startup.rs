use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::configuration::Settings;
use crate::order_client::OrderClient;
use crate::page::{Button, Document, LOAD_BUTTON, ORDER_ID_INPUT, TextInput};
use crate::widget::OrderLookup;

/// Terminal host for the order lookup page. Every input line is typed into
/// the order id field and submitted.
pub struct Application {
    input: TextInput,
    button: Button,
    widget: Arc<OrderLookup>,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        Self::with_document(
            Document::order_lookup_page(),
            configuration.order_client.client(),
        )
    }

    pub fn with_document(document: Document, client: OrderClient) -> Result<Self, anyhow::Error> {
        let widget = OrderLookup::mount(&document, client)
            .context("The page is missing an element the order lookup needs")?;

        Ok(Self {
            input: document
                .text_input(ORDER_ID_INPUT)
                .context("Missing order id input")?,
            button: document.button(LOAD_BUTTON).context("Missing load button")?,
            widget,
        })
    }

    pub async fn run_until_stopped<R, W>(self, reader: R, mut writer: W) -> Result<(), anyhow::Error>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await.context("Failed to read input")? {
            self.submit(line).await?;
            self.render(&mut writer)?;
        }
        Ok(())
    }

    /// Type `order_id` into the input, click load and wait for the lookup.
    #[tracing::instrument(name = "Submit order id", skip(self))]
    pub async fn submit(&self, order_id: String) -> Result<(), anyhow::Error> {
        self.input.set_value(order_id);
        for pending in self.button.click() {
            pending.await.context("Order lookup task panicked")?;
        }
        Ok(())
    }

    pub fn render(&self, writer: &mut impl Write) -> Result<(), anyhow::Error> {
        let view = self.widget.view();
        writeln!(writer, "{}", view.status.text).context("Failed to write status")?;

        let order_json = view.order_json;
        if order_json.visible {
            writeln!(writer, "{}", order_json.text).context("Failed to write order")?;
        }
        writer.flush().context("Failed to flush output")?;
        Ok(())
    }
}
